use sea_orm_migration::{prelude::*, schema::*};

use super::m20250401_000003_create_position_table::Position;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string(Employee::FirstName))
                    .col(string(Employee::LastName))
                    .col(integer(Employee::PositionId))
                    .col(string_uniq(Employee::PhoneNumber))
                    .col(string_uniq(Employee::Email))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employee_position_id")
                            .from(Employee::Table, Employee::PositionId)
                            .to(Position::Table, Position::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    FirstName,
    LastName,
    PositionId,
    PhoneNumber,
    Email,
}
