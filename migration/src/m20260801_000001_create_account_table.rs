use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string(Account::UserId))
                    .col(string(Account::GuildId))
                    .col(string(Account::ChannelId))
                    .col(string(Account::Title))
                    .col(string(Account::SsoCookie))
                    .col(string(Account::LastStatus).default("unknown"))
                    .col(big_integer(Account::LastCheckAt).default(0))
                    .col(big_integer(Account::LastNotificationAt).default(0))
                    .col(big_integer(Account::LastCookieNotificationAt).default(0))
                    .col(boolean(Account::IsExpiredCookie).default(false))
                    .col(string(Account::NotificationTarget).default("channel"))
                    .col(
                        timestamp(Account::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_account_user_id")
                    .table(Account::Table)
                    .col(Account::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_account_guild_id")
                    .table(Account::Table)
                    .col(Account::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    UserId,
    GuildId,
    ChannelId,
    Title,
    SsoCookie,
    LastStatus,
    LastCheckAt,
    LastNotificationAt,
    LastCookieNotificationAt,
    IsExpiredCookie,
    NotificationTarget,
    CreatedAt,
}
