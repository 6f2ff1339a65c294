use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string(Car::Producer))
                    .col(string(Car::Model))
                    .col(integer(Car::YearOfProduction))
                    .col(string_len_uniq(Car::RegistrationNumber, 10))
                    .col(decimal_len(Car::PricePerDay, 8, 2))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Producer,
    Model,
    YearOfProduction,
    RegistrationNumber,
    PricePerDay,
}
