use async_trait::async_trait;
use entity::{department, employee, role};
use platform_db::DbPool;
use sea_orm::sea_query::{Alias, Expr, SimpleExpr};
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, PrimaryKeyTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};
use tracing::debug;

use super::{
    BudgetRow, Choice, DepartmentRow, EmployeeRow, HrStore, NewEmployee, NewRole, RoleRow,
};
use crate::error::HrResult;

/// Alias for the employees self-join that resolves manager names.
const MANAGER: &str = "manager";

/// `HrStore` over the session's single sea-orm connection.
pub struct DbStore {
    db: DbPool,
}

impl DbStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DbPool {
        &self.db
    }
}

#[derive(Debug, FromQueryResult)]
struct BudgetSum {
    utilized_budget: Option<f64>,
}

#[async_trait]
impl HrStore for DbStore {
    async fn employees(&self) -> HrResult<Vec<EmployeeRow>> {
        let manager = Alias::new(MANAGER);
        let rows = employee::Entity::find()
            .select_only()
            .column(employee::Column::Id)
            .column(employee::Column::FirstName)
            .column(employee::Column::LastName)
            .column_as(role::Column::Title, "job_title")
            .column_as(department::Column::Name, "department")
            .column_as(role::Column::Salary, "salary")
            .column_as(
                SimpleExpr::from(Expr::col((manager.clone(), employee::Column::FirstName))),
                "manager_first_name",
            )
            .column_as(
                SimpleExpr::from(Expr::col((manager.clone(), employee::Column::LastName))),
                "manager_last_name",
            )
            .join(JoinType::LeftJoin, employee::Relation::Role.def())
            .join(JoinType::LeftJoin, role::Relation::Department.def())
            .join_as(JoinType::LeftJoin, employee::Relation::Manager.def(), manager)
            .order_by_asc(employee::Column::Id)
            .into_model::<EmployeeRow>()
            .all(&self.db)
            .await?;
        debug!(count = rows.len(), "fetched employees");
        Ok(rows)
    }

    async fn roles(&self) -> HrResult<Vec<RoleRow>> {
        let rows = role::Entity::find()
            .select_only()
            .column(role::Column::Id)
            .column(role::Column::Title)
            .column(role::Column::Salary)
            .column_as(department::Column::Name, "department")
            .join(JoinType::LeftJoin, role::Relation::Department.def())
            .order_by_asc(role::Column::Id)
            .into_model::<RoleRow>()
            .all(&self.db)
            .await?;
        debug!(count = rows.len(), "fetched roles");
        Ok(rows)
    }

    async fn departments(&self) -> HrResult<Vec<DepartmentRow>> {
        let rows = department::Entity::find()
            .order_by_asc(department::Column::Id)
            .into_model::<DepartmentRow>()
            .all(&self.db)
            .await?;
        debug!(count = rows.len(), "fetched departments");
        Ok(rows)
    }

    async fn total_budget(&self) -> HrResult<BudgetRow> {
        let sum = role::Entity::find()
            .select_only()
            .column_as(
                Expr::col((role::Entity, role::Column::Salary)).sum(),
                "utilized_budget",
            )
            .into_model::<BudgetSum>()
            .one(&self.db)
            .await?;
        Ok(BudgetRow {
            utilized_budget: sum.and_then(|row| row.utilized_budget).unwrap_or(0.0),
        })
    }

    async fn employee_choices(&self) -> HrResult<Vec<Choice<i32>>> {
        let employees = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await?;
        Ok(employees
            .into_iter()
            .map(|model| Choice::new(model.full_name(), model.id))
            .collect())
    }

    async fn role_choices(&self) -> HrResult<Vec<Choice<i32>>> {
        let roles = role::Entity::find()
            .order_by_asc(role::Column::Id)
            .all(&self.db)
            .await?;
        Ok(roles
            .into_iter()
            .map(|model| Choice::new(model.title, model.id))
            .collect())
    }

    async fn department_choices(&self) -> HrResult<Vec<Choice<i32>>> {
        let departments = department::Entity::find()
            .order_by_asc(department::Column::Id)
            .all(&self.db)
            .await?;
        Ok(departments
            .into_iter()
            .map(|model| Choice::new(model.name, model.id))
            .collect())
    }

    async fn add_employee(&self, employee: NewEmployee) -> HrResult<i32> {
        let model = employee::ActiveModel {
            id: NotSet,
            first_name: Set(employee.first_name),
            last_name: Set(employee.last_name),
            role_id: Set(employee.role_id),
            manager_id: Set(employee.manager_id),
        };
        let inserted = employee::Entity::insert(model).exec(&self.db).await?;
        debug!(id = inserted.last_insert_id, "inserted employee");
        Ok(inserted.last_insert_id)
    }

    async fn add_role(&self, role: NewRole) -> HrResult<i32> {
        let model = role::ActiveModel {
            id: NotSet,
            title: Set(role.title),
            salary: Set(role.salary),
            department_id: Set(role.department_id),
        };
        let inserted = role::Entity::insert(model).exec(&self.db).await?;
        debug!(id = inserted.last_insert_id, "inserted role");
        Ok(inserted.last_insert_id)
    }

    async fn add_department(&self, name: &str) -> HrResult<i32> {
        let model = department::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
        };
        let inserted = department::Entity::insert(model).exec(&self.db).await?;
        debug!(id = inserted.last_insert_id, "inserted department");
        Ok(inserted.last_insert_id)
    }

    async fn update_employee_role(&self, employee_id: i32, role_id: i32) -> HrResult<u64> {
        let updated = employee::Entity::update_many()
            .col_expr(employee::Column::RoleId, Expr::value(role_id))
            .filter(employee::Column::Id.eq(employee_id))
            .exec(&self.db)
            .await?;
        debug!(employee_id, role_id, rows = updated.rows_affected, "updated employee role");
        Ok(updated.rows_affected)
    }

    async fn delete_employee(&self, id: i32) -> HrResult<Option<String>> {
        delete_by_key::<employee::Entity>(&self.db, id, |model| model.full_name()).await
    }

    async fn delete_role(&self, id: i32) -> HrResult<Option<String>> {
        delete_by_key::<role::Entity>(&self.db, id, |model| model.title.clone()).await
    }

    async fn delete_department(&self, id: i32) -> HrResult<Option<String>> {
        delete_by_key::<department::Entity>(&self.db, id, |model| model.name.clone()).await
    }

    async fn close(self) -> HrResult<()> {
        platform_db::disconnect(self.db).await?;
        Ok(())
    }
}

/// Reads the row's display name and deletes it in one transaction, so the
/// reported name is the row that was actually removed.
async fn delete_by_key<E>(
    db: &DbPool,
    id: i32,
    label: fn(&E::Model) -> String,
) -> HrResult<Option<String>>
where
    E: EntityTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let txn = db.begin().await?;
    let Some(existing) = E::find_by_id(id).one(&txn).await? else {
        txn.commit().await?;
        return Ok(None);
    };
    let deleted = E::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    debug!(id, rows = deleted.rows_affected, "deleted row");
    Ok((deleted.rows_affected == 1).then(|| label(&existing)))
}
