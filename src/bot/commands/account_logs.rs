//! `/accountlogs` — show the recent status history of an account.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, Timestamp,
};

use crate::bot::commands::{option_integer, respond_embed, respond_ephemeral};
use crate::data::{AccountRepository, StatusChangeRepository};
use crate::error::AppError;

/// Number of history entries shown per invocation.
const LOG_LIMIT: u64 = 5;

pub fn register() -> CreateCommand {
    CreateCommand::new("accountlogs")
        .description("View the status change logs for an account")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "account", "The account to inspect")
                .required(true)
                .set_autocomplete(true),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let account_id = option_integer(command, "account")? as i32;
    let user_id = command.user.id.to_string();

    let Some(account) = AccountRepository::new(db).get_by_id(account_id).await? else {
        return respond_ephemeral(ctx, command, "Account does not exist").await;
    };

    if account.user_id != user_id {
        tracing::warn!(
            account_id,
            user_id = %user_id,
            "User tried to view logs for an account they don't own"
        );
        return respond_ephemeral(ctx, command, "You do not own this account.").await;
    }

    let logs = StatusChangeRepository::new(db)
        .get_recent_by_account(account.id, LOG_LIMIT)
        .await?;

    let mut embed = CreateEmbed::new()
        .title(format!("{} - {}", account.title, account.last_status))
        .description(format!("The last {} status changes for this account", LOG_LIMIT))
        .color(0x00ff00)
        .timestamp(Timestamp::now());

    for log in &logs {
        embed = embed.field(log.status.clone(), log.created_at.to_rfc3339(), false);
    }

    respond_embed(ctx, command, embed).await
}
