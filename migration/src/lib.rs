pub use sea_orm_migration::prelude::*;

mod m20250401_000001_create_car_table;
mod m20250401_000002_create_customer_table;
mod m20250401_000003_create_position_table;
mod m20250401_000004_create_employee_table;
mod m20250401_000005_create_reservation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_car_table::Migration),
            Box::new(m20250401_000002_create_customer_table::Migration),
            Box::new(m20250401_000003_create_position_table::Migration),
            Box::new(m20250401_000004_create_employee_table::Migration),
            Box::new(m20250401_000005_create_reservation_table::Migration),
        ]
    }
}
