use strum::{Display, EnumIter, IntoEnumIterator};

/// Everything the main menu offers, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Action {
    #[strum(to_string = "View all Employees")]
    ViewEmployees,
    #[strum(to_string = "Add an Employee")]
    AddEmployee,
    #[strum(to_string = "Update Employee Role")]
    UpdateEmployeeRole,
    #[strum(to_string = "View all Roles")]
    ViewRoles,
    #[strum(to_string = "Add Role")]
    AddRole,
    #[strum(to_string = "View all Departments")]
    ViewDepartments,
    #[strum(to_string = "Add Department")]
    AddDepartment,
    #[strum(to_string = "Delete Employee")]
    DeleteEmployee,
    #[strum(to_string = "Delete a Role")]
    DeleteRole,
    #[strum(to_string = "Delete a Department")]
    DeleteDepartment,
    #[strum(to_string = "View Total Utilized Budget")]
    ViewBudget,
    Exit,
}

impl Action {
    pub fn menu() -> Vec<Action> {
        Action::iter().collect()
    }

    /// Completes "Error <context>: <details>".
    pub fn error_context(self) -> &'static str {
        match self {
            Action::ViewEmployees => "fetching employees",
            Action::AddEmployee => "adding employee",
            Action::UpdateEmployeeRole => "updating employee role",
            Action::ViewRoles => "fetching all roles",
            Action::AddRole => "adding role",
            Action::ViewDepartments => "fetching departments",
            Action::AddDepartment => "adding department",
            Action::DeleteEmployee => "deleting employee",
            Action::DeleteRole => "deleting role",
            Action::DeleteDepartment => "deleting department",
            Action::ViewBudget => "retrieving budget",
            Action::Exit => "exiting",
        }
    }
}
