//! One handler per menu action.
//!
//! Handlers that need foreign keys work in two phases: a form is first
//! filled with reference data from the store (`fetch`), then the user picks
//! from it (`ask`). Only the chosen identifiers reach the write.

use tracing::info;

use crate::{
    error::{HrError, HrResult},
    prompt::{Prompter, pick},
    store::{Choice, HrStore, NewEmployee, NewRole},
    table::Table,
};

/// What a handler hands back to the dispatcher for display.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Table(Table),
    Done(String),
    NotFound(String),
    Exit,
}

impl Outcome {
    pub fn table(&self) -> Option<&Table> {
        match self {
            Outcome::Table(table) => Some(table),
            _ => None,
        }
    }
}

fn required_text(prompter: &mut dyn Prompter, message: &str, field: &str) -> HrResult<String> {
    let answer = prompter.input(message)?;
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Err(HrError::invalid(format!("{field} cannot be blank")));
    }
    Ok(trimmed.to_string())
}

pub fn parse_salary(raw: &str) -> HrResult<f64> {
    let trimmed = raw.trim();
    let salary: f64 = trimmed
        .replace(',', "")
        .parse()
        .map_err(|_| HrError::invalid(format!("salary must be a number, got {trimmed:?}")))?;
    if !salary.is_finite() || salary < 0.0 {
        return Err(HrError::invalid(format!(
            "salary must be a non-negative amount, got {trimmed:?}"
        )));
    }
    Ok(salary)
}

pub async fn view_employees(store: &dyn HrStore) -> HrResult<Outcome> {
    let rows = store.employees().await?;
    Ok(Outcome::Table(Table::from_rows(&rows)))
}

pub async fn view_roles(store: &dyn HrStore) -> HrResult<Outcome> {
    let rows = store.roles().await?;
    Ok(Outcome::Table(Table::from_rows(&rows)))
}

pub async fn view_departments(store: &dyn HrStore) -> HrResult<Outcome> {
    let rows = store.departments().await?;
    Ok(Outcome::Table(Table::from_rows(&rows)))
}

pub async fn view_budget(store: &dyn HrStore) -> HrResult<Outcome> {
    let budget = store.total_budget().await?;
    Ok(Outcome::Table(Table::from_rows(&[budget])))
}

/// Reference data for adding an employee.
#[derive(Clone, Debug, PartialEq)]
pub struct EmployeeForm {
    pub roles: Vec<Choice<i32>>,
    /// Existing employees, preceded by a "None" entry that maps to no manager.
    pub managers: Vec<Choice<Option<i32>>>,
}

impl EmployeeForm {
    pub async fn fetch(store: &dyn HrStore) -> HrResult<Self> {
        let roles = store.role_choices().await?;
        let managers = std::iter::once(Choice::new("None", None))
            .chain(
                store
                    .employee_choices()
                    .await?
                    .into_iter()
                    .map(|c| Choice::new(c.label, Some(c.value))),
            )
            .collect();
        Ok(Self { roles, managers })
    }

    pub fn ask(&self, prompter: &mut dyn Prompter) -> HrResult<NewEmployee> {
        if self.roles.is_empty() {
            return Err(HrError::NoChoices("roles"));
        }
        let first_name = required_text(
            prompter,
            "Enter the employee's first name:",
            "first name",
        )?;
        let last_name =
            required_text(prompter, "Enter the employee's last name:", "last name")?;
        let role_id = pick(prompter, "What is the employee's role?", &self.roles, "roles")?;
        let manager_id = pick(
            prompter,
            "Who is the employee's manager?",
            &self.managers,
            "managers",
        )?;
        Ok(NewEmployee {
            first_name,
            last_name,
            role_id: Some(role_id),
            manager_id,
        })
    }
}

pub async fn add_employee(store: &dyn HrStore, prompter: &mut dyn Prompter) -> HrResult<Outcome> {
    let form = EmployeeForm::fetch(store).await?;
    let employee = form.ask(prompter)?;
    let id = store.add_employee(employee).await?;
    info!(id, "employee added");
    Ok(Outcome::Done("Employee added!".to_string()))
}

/// Reference data for adding a role.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleForm {
    pub departments: Vec<Choice<i32>>,
}

impl RoleForm {
    pub async fn fetch(store: &dyn HrStore) -> HrResult<Self> {
        Ok(Self {
            departments: store.department_choices().await?,
        })
    }

    pub fn ask(&self, prompter: &mut dyn Prompter) -> HrResult<NewRole> {
        if self.departments.is_empty() {
            return Err(HrError::NoChoices("departments"));
        }
        let title = required_text(
            prompter,
            "Enter the name of the new role you would like to create:",
            "role title",
        )?;
        let salary = parse_salary(&prompter.input("Enter the salary for the new role:")?)?;
        let department_id = pick(
            prompter,
            "What department is this for?",
            &self.departments,
            "departments",
        )?;
        Ok(NewRole {
            title,
            salary,
            department_id,
        })
    }
}

pub async fn add_role(store: &dyn HrStore, prompter: &mut dyn Prompter) -> HrResult<Outcome> {
    let form = RoleForm::fetch(store).await?;
    let role = form.ask(prompter)?;
    let id = store.add_role(role).await?;
    info!(id, "role added");
    Ok(Outcome::Done("Role added!".to_string()))
}

pub async fn add_department(
    store: &dyn HrStore,
    prompter: &mut dyn Prompter,
) -> HrResult<Outcome> {
    let name = required_text(
        prompter,
        "Enter the name of the new department:",
        "department name",
    )?;
    let id = store.add_department(&name).await?;
    info!(id, "department added");
    Ok(Outcome::Done("Department added!".to_string()))
}

/// Reference data for moving an employee to another role.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleChangeForm {
    pub employees: Vec<Choice<i32>>,
    pub roles: Vec<Choice<i32>>,
}

impl RoleChangeForm {
    pub async fn fetch(store: &dyn HrStore) -> HrResult<Self> {
        Ok(Self {
            employees: store.employee_choices().await?,
            roles: store.role_choices().await?,
        })
    }

    /// Returns `(employee_id, role_id)`.
    pub fn ask(&self, prompter: &mut dyn Prompter) -> HrResult<(i32, i32)> {
        let employee_id = pick(
            prompter,
            "Select the employee whose role you would like to change:",
            &self.employees,
            "employees",
        )?;
        let role_id = pick(
            prompter,
            "What is the new role for the employee?",
            &self.roles,
            "roles",
        )?;
        Ok((employee_id, role_id))
    }
}

pub async fn update_employee_role(
    store: &dyn HrStore,
    prompter: &mut dyn Prompter,
) -> HrResult<Outcome> {
    let form = RoleChangeForm::fetch(store).await?;
    let (employee_id, role_id) = form.ask(prompter)?;
    if store.update_employee_role(employee_id, role_id).await? == 1 {
        Ok(Outcome::Done(
            "Employee role updated successfully!".to_string(),
        ))
    } else {
        Ok(Outcome::NotFound(
            "Employee not found. Please check the ID and try again.".to_string(),
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Employee,
    Role,
    Department,
}

impl Target {
    fn noun(self) -> &'static str {
        match self {
            Target::Employee => "employee",
            Target::Role => "role",
            Target::Department => "department",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Target::Employee => "employees",
            Target::Role => "roles",
            Target::Department => "departments",
        }
    }
}

/// Reference data for a delete: every row of the target table.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteForm {
    pub target: Target,
    pub rows: Vec<Choice<i32>>,
}

impl DeleteForm {
    pub async fn fetch(store: &dyn HrStore, target: Target) -> HrResult<Self> {
        let rows = match target {
            Target::Employee => store.employee_choices().await?,
            Target::Role => store.role_choices().await?,
            Target::Department => store.department_choices().await?,
        };
        Ok(Self { target, rows })
    }

    pub fn ask(&self, prompter: &mut dyn Prompter) -> HrResult<i32> {
        pick(
            prompter,
            &format!("Which {} would you like to remove?", self.target.noun()),
            &self.rows,
            self.target.plural(),
        )
    }
}

pub async fn delete(
    store: &dyn HrStore,
    prompter: &mut dyn Prompter,
    target: Target,
) -> HrResult<Outcome> {
    let form = DeleteForm::fetch(store, target).await?;
    let id = form.ask(prompter)?;
    let removed = match target {
        Target::Employee => store.delete_employee(id).await?,
        Target::Role => store.delete_role(id).await?,
        Target::Department => store.delete_department(id).await?,
    };
    Ok(match removed {
        Some(name) => {
            info!(id, target = target.noun(), "row deleted");
            Outcome::Done(format!("Deleted {} {name}.", target.noun()))
        }
        None => Outcome::NotFound(format!("There is no {} with that ID.", target.noun())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_accepts_plain_and_grouped_numbers() {
        assert_eq!(parse_salary("50000").unwrap(), 50000.0);
        assert_eq!(parse_salary(" 72,500.50 ").unwrap(), 72500.5);
    }

    #[test]
    fn salary_rejects_text_and_negative_amounts() {
        assert!(matches!(parse_salary("lots"), Err(HrError::InvalidInput(_))));
        assert!(matches!(parse_salary("-1"), Err(HrError::InvalidInput(_))));
        assert!(matches!(parse_salary("NaN"), Err(HrError::InvalidInput(_))));
        assert!(matches!(parse_salary(""), Err(HrError::InvalidInput(_))));
    }
}
