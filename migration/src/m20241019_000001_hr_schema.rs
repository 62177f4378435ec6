use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Departments { Table, Id, Name }

#[derive(DeriveIden)]
enum Roles { Table, Id, Title, Salary, DepartmentId }

#[derive(DeriveIden)]
enum Employees { Table, Id, FirstName, LastName, RoleId, ManagerId }

const NAME_LEN: u32 = 30;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Departments::Table)
                .if_not_exists()
                .col(ColumnDef::new(Departments::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Departments::Name).string_len(NAME_LEN).not_null().unique_key())
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Roles::Table)
                .if_not_exists()
                .col(ColumnDef::new(Roles::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Roles::Title).string_len(NAME_LEN).not_null().unique_key())
                .col(ColumnDef::new(Roles::Salary).double().not_null())
                .col(ColumnDef::new(Roles::DepartmentId).integer().not_null())
                .foreign_key(ForeignKey::create()
                    .name("fk_roles_department")
                    .from(Roles::Table, Roles::DepartmentId)
                    .to(Departments::Table, Departments::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Employees::Table)
                .if_not_exists()
                .col(ColumnDef::new(Employees::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Employees::FirstName).string_len(NAME_LEN).not_null())
                .col(ColumnDef::new(Employees::LastName).string_len(NAME_LEN).not_null())
                .col(ColumnDef::new(Employees::RoleId).integer())
                .col(ColumnDef::new(Employees::ManagerId).integer())
                .foreign_key(ForeignKey::create()
                    .name("fk_employees_role")
                    .from(Employees::Table, Employees::RoleId)
                    .to(Roles::Table, Roles::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                )
                .foreign_key(ForeignKey::create()
                    .name("fk_employees_manager")
                    .from(Employees::Table, Employees::ManagerId)
                    .to(Employees::Table, Employees::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                )
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Roles::Table).if_exists().to_owned()).await?;
        manager.drop_table(Table::drop().table(Departments::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
