#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use products_hr::{
    Action, Choice, DbStore, HrError, HrResult, HrStore, Prompter, SeededHr, seed_hr_demo,
    store::{BudgetRow, DepartmentRow, EmployeeRow, NewEmployee, NewRole, RoleRow},
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};

pub struct SqliteContext {
    pub store: DbStore,
    pub seeded: SeededHr,
}

impl SqliteContext {
    pub async fn new_seeded() -> Self {
        let db = migrated_sqlite().await;
        let seeded = seed_hr_demo(&db).await.unwrap();
        Self {
            store: DbStore::new(db),
            seeded,
        }
    }

    pub async fn new_empty() -> Self {
        Self {
            store: DbStore::new(migrated_sqlite().await),
            seeded: SeededHr::default(),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        self.store.connection()
    }

    pub async fn count(&self, table: &str) -> i64 {
        let row = self
            .db()
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                format!("SELECT COUNT(*) AS n FROM {table}"),
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get::<i64>("", "n").unwrap()
    }
}

async fn migrated_sqlite() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "PRAGMA foreign_keys = ON;",
    ))
    .await
    .unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// One scripted answer for the next prompt.
#[derive(Clone, Debug)]
pub enum Answer {
    /// Select the choice with this exact label.
    Pick(&'static str),
    /// Select a main-menu entry.
    Menu(Action),
    Text(&'static str),
}

/// Answers prompts from a fixed script and records every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub offered: Vec<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, labels: &[&str]) -> HrResult<usize> {
        self.asked.push(message.to_string());
        self.offered
            .push(labels.iter().map(|l| l.to_string()).collect());
        match self.answers.pop_front() {
            None => Err(HrError::PromptClosed),
            Some(Answer::Pick(label)) => Ok(labels
                .iter()
                .position(|l| *l == label)
                .unwrap_or_else(|| panic!("{label:?} not offered for {message:?}: {labels:?}"))),
            Some(Answer::Menu(action)) => {
                let label = action.to_string();
                Ok(labels
                    .iter()
                    .position(|l| *l == label)
                    .unwrap_or_else(|| panic!("{label:?} not on the menu: {labels:?}")))
            }
            Some(Answer::Text(text)) => panic!("expected a selection for {message:?}, got {text:?}"),
        }
    }

    fn input(&mut self, message: &str) -> HrResult<String> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            None => Err(HrError::PromptClosed),
            Some(Answer::Text(text)) => Ok(text.to_string()),
            Some(other) => panic!("expected text for {message:?}, got {other:?}"),
        }
    }
}

/// In-memory stand-in for the database, counting reads and closes.
#[derive(Clone, Default)]
pub struct FakeStore {
    pub employees: Vec<Choice<i32>>,
    pub roles: Vec<Choice<i32>>,
    pub departments: Vec<Choice<i32>>,
    /// Ids still offered as choices but already removed from the "table".
    pub gone: Vec<i32>,
    pub reads: Arc<AtomicUsize>,
    pub closes: Arc<AtomicUsize>,
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl FakeStore {
    pub fn with_reference_data() -> Self {
        Self {
            employees: vec![Choice::new("Grace Hopper", 1), Choice::new("Alan Turing", 2)],
            roles: vec![Choice::new("Software Engineer", 10), Choice::new("Accountant", 11)],
            departments: vec![Choice::new("Engineering", 100)],
            ..Self::default()
        }
    }

    fn read(&self) {
        self.reads.fetch_add(1, Ordering::SeqCst);
    }

    fn write(&self, entry: String) {
        self.writes.lock().unwrap().push(entry);
    }

    pub fn written(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl HrStore for FakeStore {
    async fn employees(&self) -> HrResult<Vec<EmployeeRow>> {
        self.read();
        Ok(self
            .employees
            .iter()
            .map(|c| {
                let (first, last) = c.label.split_once(' ').unwrap_or((c.label.as_str(), ""));
                EmployeeRow {
                    id: c.value,
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    job_title: None,
                    department: None,
                    salary: None,
                    manager_first_name: None,
                    manager_last_name: None,
                }
            })
            .collect())
    }

    async fn roles(&self) -> HrResult<Vec<RoleRow>> {
        self.read();
        Ok(self
            .roles
            .iter()
            .map(|c| RoleRow {
                id: c.value,
                title: c.label.clone(),
                salary: 1.0,
                department: None,
            })
            .collect())
    }

    async fn departments(&self) -> HrResult<Vec<DepartmentRow>> {
        self.read();
        Ok(self
            .departments
            .iter()
            .map(|c| DepartmentRow {
                id: c.value,
                name: c.label.clone(),
            })
            .collect())
    }

    async fn total_budget(&self) -> HrResult<BudgetRow> {
        self.read();
        Ok(BudgetRow {
            utilized_budget: self.roles.len() as f64,
        })
    }

    async fn employee_choices(&self) -> HrResult<Vec<Choice<i32>>> {
        self.read();
        Ok(self.employees.clone())
    }

    async fn role_choices(&self) -> HrResult<Vec<Choice<i32>>> {
        self.read();
        Ok(self.roles.clone())
    }

    async fn department_choices(&self) -> HrResult<Vec<Choice<i32>>> {
        self.read();
        Ok(self.departments.clone())
    }

    async fn add_employee(&self, employee: NewEmployee) -> HrResult<i32> {
        self.write(format!(
            "add_employee {} {} {:?} {:?}",
            employee.first_name, employee.last_name, employee.role_id, employee.manager_id
        ));
        Ok(99)
    }

    async fn add_role(&self, role: NewRole) -> HrResult<i32> {
        self.write(format!(
            "add_role {} {} {}",
            role.title, role.salary, role.department_id
        ));
        Ok(99)
    }

    async fn add_department(&self, name: &str) -> HrResult<i32> {
        self.write(format!("add_department {name}"));
        Ok(99)
    }

    async fn update_employee_role(&self, employee_id: i32, role_id: i32) -> HrResult<u64> {
        self.write(format!("update_employee_role {employee_id} {role_id}"));
        let exists = self.employees.iter().any(|c| c.value == employee_id)
            && !self.gone.contains(&employee_id);
        Ok(exists as u64)
    }

    async fn delete_employee(&self, id: i32) -> HrResult<Option<String>> {
        self.write(format!("delete_employee {id}"));
        Ok(None)
    }

    async fn delete_role(&self, id: i32) -> HrResult<Option<String>> {
        self.write(format!("delete_role {id}"));
        Ok(None)
    }

    async fn delete_department(&self, id: i32) -> HrResult<Option<String>> {
        self.write(format!("delete_department {id}"));
        Ok(None)
    }

    async fn close(self) -> HrResult<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
