//! The menu loop: prompt for an action, run its handler, print the outcome,
//! and go around again until Exit.

use std::io::Write;

use tracing::{Instrument, error, info, info_span, warn};

use crate::{
    action::Action,
    error::{HrError, HrResult},
    handlers::{self, Outcome, Target},
    prompt::Prompter,
    store::HrStore,
};

const MENU_PROMPT: &str = "What would you like to do?";

/// Owns the store for the whole session; `run` releases it on every exit
/// path.
pub struct Session<S, P, W> {
    store: S,
    prompter: P,
    out: W,
}

impl<S, P, W> Session<S, P, W>
where
    S: HrStore,
    P: Prompter,
    W: Write,
{
    pub fn new(store: S, prompter: P, out: W) -> Self {
        Self {
            store,
            prompter,
            out,
        }
    }

    /// Runs until Exit (or end of input), then closes the store exactly once.
    pub async fn run(mut self) -> HrResult<()> {
        let result = self.drive().await;
        let closed = self.store.close().await;
        if let Err(err) = &result {
            error!(error = %err, "session aborted");
        }
        result.and(closed)
    }

    async fn drive(&mut self) -> HrResult<()> {
        loop {
            let action = match self.choose_action() {
                Ok(action) => action,
                Err(HrError::PromptClosed) => {
                    info!("input closed; ending session");
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            let span = info_span!("action", action = %action);
            match self.dispatch(action).instrument(span).await {
                Ok(Outcome::Exit) => return Ok(()),
                Ok(outcome) => self.render(&outcome)?,
                Err(HrError::PromptClosed) => {
                    info!(%action, "input closed mid-action; ending session");
                    return Ok(());
                }
                Err(err) if err.is_recoverable() => {
                    match &err {
                        HrError::Query(_) => error!(%action, error = %err, "action failed"),
                        _ => warn!(%action, error = %err, "action rejected"),
                    }
                    writeln!(self.out, "Error {}: {err}", action.error_context())?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn choose_action(&mut self) -> HrResult<Action> {
        let menu = Action::menu();
        let labels: Vec<String> = menu.iter().map(ToString::to_string).collect();
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        loop {
            let index = self.prompter.select(MENU_PROMPT, &labels)?;
            if let Some(action) = menu.get(index) {
                return Ok(*action);
            }
            warn!(index, "ignoring selection outside the menu");
        }
    }

    async fn dispatch(&mut self, action: Action) -> HrResult<Outcome> {
        let store: &dyn HrStore = &self.store;
        let prompter: &mut dyn Prompter = &mut self.prompter;
        match action {
            Action::ViewEmployees => handlers::view_employees(store).await,
            Action::AddEmployee => handlers::add_employee(store, prompter).await,
            Action::UpdateEmployeeRole => handlers::update_employee_role(store, prompter).await,
            Action::ViewRoles => handlers::view_roles(store).await,
            Action::AddRole => handlers::add_role(store, prompter).await,
            Action::ViewDepartments => handlers::view_departments(store).await,
            Action::AddDepartment => handlers::add_department(store, prompter).await,
            Action::DeleteEmployee => handlers::delete(store, prompter, Target::Employee).await,
            Action::DeleteRole => handlers::delete(store, prompter, Target::Role).await,
            Action::DeleteDepartment => {
                handlers::delete(store, prompter, Target::Department).await
            }
            Action::ViewBudget => handlers::view_budget(store).await,
            Action::Exit => Ok(Outcome::Exit),
        }
    }

    fn render(&mut self, outcome: &Outcome) -> HrResult<()> {
        match outcome {
            Outcome::Table(table) => writeln!(self.out, "{table}")?,
            Outcome::Done(message) | Outcome::NotFound(message) => {
                writeln!(self.out, "{message}")?
            }
            Outcome::Exit => {}
        }
        self.out.flush()?;
        Ok(())
    }
}
