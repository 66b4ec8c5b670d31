use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000002_create_cars_table::Cars;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRecords::Id))
                    .col(integer(ServiceRecords::CarId))
                    .col(string(ServiceRecords::ServiceType))
                    .col(string(ServiceRecords::ServiceDate))
                    .col(integer(ServiceRecords::Mileage))
                    .col(double(ServiceRecords::Cost))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_records_car_id")
                            .from(ServiceRecords::Table, ServiceRecords::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServiceRecords {
    Table,
    Id,
    CarId,
    ServiceType,
    ServiceDate,
    Mileage,
    Cost,
}
