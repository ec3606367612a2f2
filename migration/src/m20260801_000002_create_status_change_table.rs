use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_account_table::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StatusChange::Table)
                    .if_not_exists()
                    .col(pk_auto(StatusChange::Id))
                    .col(integer(StatusChange::AccountId))
                    .col(string(StatusChange::Status))
                    .col(
                        timestamp(StatusChange::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_status_change_account_id")
                            .from(StatusChange::Table, StatusChange::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_status_change_account_id")
                    .table(StatusChange::Table)
                    .col(StatusChange::AccountId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StatusChange::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StatusChange {
    Table,
    Id,
    AccountId,
    Status,
    CreatedAt,
}
