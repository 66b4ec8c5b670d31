pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_users_table;
mod m20260110_000002_create_cars_table;
mod m20260110_000003_create_service_records_table;
mod m20260112_000004_create_car_documents_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_users_table::Migration),
            Box::new(m20260110_000002_create_cars_table::Migration),
            Box::new(m20260110_000003_create_service_records_table::Migration),
            Box::new(m20260112_000004_create_car_documents_table::Migration),
        ]
    }
}
