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
                    .table(CarDocuments::Table)
                    .if_not_exists()
                    .col(pk_auto(CarDocuments::Id))
                    .col(integer(CarDocuments::CarId))
                    .col(string(CarDocuments::DocumentType))
                    .col(string(CarDocuments::Folio))
                    .col(string(CarDocuments::ExpirationDate))
                    .col(text_null(CarDocuments::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_documents_car_id")
                            .from(CarDocuments::Table, CarDocuments::CarId)
                            .to(Cars::Table, Cars::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_documents_car_id_expiration_date")
                    .table(CarDocuments::Table)
                    .col(CarDocuments::CarId)
                    .col(CarDocuments::ExpirationDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CarDocuments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CarDocuments {
    Table,
    Id,
    CarId,
    DocumentType,
    Folio,
    ExpirationDate,
    Notes,
}
