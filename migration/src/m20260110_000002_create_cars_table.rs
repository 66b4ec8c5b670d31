use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_auto(Cars::Id))
                    .col(integer(Cars::UserId))
                    .col(string(Cars::Brand))
                    .col(string(Cars::Model))
                    .col(integer(Cars::Year))
                    .col(string_null(Cars::Plate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cars_user_id")
                            .from(Cars::Table, Cars::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cars {
    Table,
    Id,
    UserId,
    Brand,
    Model,
    Year,
    Plate,
}
