//! The query contract the session runs against.
//!
//! `HrStore` is the only way handlers reach the relational store. `DbStore`
//! implements it over a sea-orm connection; tests substitute fakes.

mod db;

use async_trait::async_trait;
use sea_orm::FromQueryResult;

use crate::{error::HrResult, table::Tabular};

pub use db::DbStore;

/// A labeled option for a selection prompt, carrying the value it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One line of the employee listing: the employee joined with role,
/// department and manager.
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub manager_first_name: Option<String>,
    pub manager_last_name: Option<String>,
}

impl EmployeeRow {
    pub fn manager_name(&self) -> Option<String> {
        match (&self.manager_first_name, &self.manager_last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }
}

impl Tabular for EmployeeRow {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "first_name",
            "last_name",
            "job_title",
            "department",
            "salary",
            "manager_name",
        ]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            self.job_title.clone(),
            self.department.clone(),
            self.salary.map(format_amount),
            self.manager_name(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct RoleRow {
    pub id: i32,
    pub title: String,
    pub salary: f64,
    pub department: Option<String>,
}

impl Tabular for RoleRow {
    fn headers() -> &'static [&'static str] {
        &["role_id", "title", "salary", "department"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![
            Some(self.id.to_string()),
            Some(self.title.clone()),
            Some(format_amount(self.salary)),
            self.department.clone(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct DepartmentRow {
    pub id: i32,
    pub name: String,
}

impl Tabular for DepartmentRow {
    fn headers() -> &'static [&'static str] {
        &["id", "name"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![Some(self.id.to_string()), Some(self.name.clone())]
    }
}

/// Aggregate salary over every role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetRow {
    pub utilized_budget: f64,
}

impl Tabular for BudgetRow {
    fn headers() -> &'static [&'static str] {
        &["utilized_budget"]
    }

    fn cells(&self) -> Vec<Option<String>> {
        vec![Some(format_amount(self.utilized_budget))]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: Option<i32>,
    pub manager_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i32,
}

/// Whole amounts print without a fractional part.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

#[async_trait]
pub trait HrStore: Send + Sync {
    async fn employees(&self) -> HrResult<Vec<EmployeeRow>>;
    async fn roles(&self) -> HrResult<Vec<RoleRow>>;
    async fn departments(&self) -> HrResult<Vec<DepartmentRow>>;
    async fn total_budget(&self) -> HrResult<BudgetRow>;

    /// Reference data: every employee labeled by full name.
    async fn employee_choices(&self) -> HrResult<Vec<Choice<i32>>>;
    /// Reference data: every role labeled by title.
    async fn role_choices(&self) -> HrResult<Vec<Choice<i32>>>;
    /// Reference data: every department labeled by name.
    async fn department_choices(&self) -> HrResult<Vec<Choice<i32>>>;

    /// Returns the new employee's id.
    async fn add_employee(&self, employee: NewEmployee) -> HrResult<i32>;
    async fn add_role(&self, role: NewRole) -> HrResult<i32>;
    async fn add_department(&self, name: &str) -> HrResult<i32>;

    /// Number of rows changed.
    async fn update_employee_role(&self, employee_id: i32, role_id: i32) -> HrResult<u64>;

    /// Display name of the removed row, or `None` when no row had that id.
    async fn delete_employee(&self, id: i32) -> HrResult<Option<String>>;
    async fn delete_role(&self, id: i32) -> HrResult<Option<String>>;
    async fn delete_department(&self, id: i32) -> HrResult<Option<String>>;

    /// Release the underlying connection. Consumes the store.
    async fn close(self) -> HrResult<()>
    where
        Self: Sized;
}
