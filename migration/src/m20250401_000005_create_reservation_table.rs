use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250401_000001_create_car_table::Car, m20250401_000002_create_customer_table::Customer,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::CarId))
                    .col(integer(Reservation::CustomerId))
                    .col(date(Reservation::StartDate))
                    .col(date(Reservation::EndDate))
                    .col(decimal_len(Reservation::TotalAmount, 10, 2))
                    .col(string_len(Reservation::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_car_id")
                            .from(Reservation::Table, Reservation::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_customer_id")
                            .from(Reservation::Table, Reservation::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the overlap lookups, which always filter by car first
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_car_dates")
                    .table(Reservation::Table)
                    .col(Reservation::CarId)
                    .col(Reservation::StartDate)
                    .col(Reservation::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    CarId,
    CustomerId,
    StartDate,
    EndDate,
    TotalAmount,
    Status,
}
