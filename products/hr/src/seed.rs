//! Demo dataset for `employee-tracker seed` and for tests.

use entity::{department, employee, role};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DbErr, Set};

#[derive(Clone, Debug, Default)]
pub struct SeededHr {
    pub departments: Vec<department::Model>,
    pub roles: Vec<role::Model>,
    pub employees: Vec<employee::Model>,
}

impl SeededHr {
    pub fn department_named(&self, name: &str) -> Option<&department::Model> {
        self.departments.iter().find(|d| d.name == name)
    }

    pub fn role_titled(&self, title: &str) -> Option<&role::Model> {
        self.roles.iter().find(|r| r.title == title)
    }

    pub fn employee_named(&self, full_name: &str) -> Option<&employee::Model> {
        self.employees.iter().find(|e| e.full_name() == full_name)
    }
}

/// Three departments, three roles (salaries 90000, 60000, 50000) and three
/// employees. "Sales Lead" is left unassigned.
pub async fn seed_hr_demo<C: ConnectionTrait>(db: &C) -> Result<SeededHr, DbErr> {
    let mut seeded = SeededHr::default();

    for name in ["Engineering", "Finance", "Sales"] {
        let dept = department::ActiveModel {
            id: NotSet,
            name: Set(name.into()),
        }
        .insert(db)
        .await?;
        seeded.departments.push(dept);
    }

    let roles = [
        ("Software Engineer", 90_000.0, "Engineering"),
        ("Accountant", 60_000.0, "Finance"),
        ("Sales Lead", 50_000.0, "Sales"),
    ];
    for (title, salary, dept_name) in roles {
        let department_id = seeded
            .department_named(dept_name)
            .map(|d| d.id)
            .ok_or_else(|| DbErr::RecordNotFound(format!("department {dept_name}")))?;
        let role = role::ActiveModel {
            id: NotSet,
            title: Set(title.into()),
            salary: Set(salary),
            department_id: Set(department_id),
        }
        .insert(db)
        .await?;
        seeded.roles.push(role);
    }

    let engineer = seeded.role_titled("Software Engineer").map(|r| r.id);
    let accountant = seeded.role_titled("Accountant").map(|r| r.id);

    let grace = insert_employee(db, "Grace", "Hopper", engineer, None).await?;
    let alan = insert_employee(db, "Alan", "Turing", engineer, Some(grace.id)).await?;
    let mary = insert_employee(db, "Mary", "Jackson", accountant, None).await?;
    seeded.employees.extend([grace, alan, mary]);

    Ok(seeded)
}

async fn insert_employee<C: ConnectionTrait>(
    db: &C,
    first_name: &str,
    last_name: &str,
    role_id: Option<i32>,
    manager_id: Option<i32>,
) -> Result<employee::Model, DbErr> {
    employee::ActiveModel {
        id: NotSet,
        first_name: Set(first_name.into()),
        last_name: Set(last_name.into()),
        role_id: Set(role_id),
        manager_id: Set(manager_id),
    }
    .insert(db)
    .await
}
