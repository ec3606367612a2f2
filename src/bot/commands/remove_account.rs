//! `/removeaccount` — stop tracking an account and delete its history.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::bot::commands::{option_integer, respond_ephemeral};
use crate::data::AccountRepository;
use crate::error::AppError;

pub fn register() -> CreateCommand {
    CreateCommand::new("removeaccount")
        .description("Remove an account from automated ban status checking")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "account", "The account to remove")
                .required(true)
                .set_autocomplete(true),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    let account_id = option_integer(command, "account")? as i32;
    let user_id = command.user.id.to_string();

    let repo = AccountRepository::new(db);
    let Some(account) = repo
        .get_owned(account_id, &user_id, &guild_id.to_string())
        .await?
    else {
        return respond_ephemeral(ctx, command, "Account does not exist").await;
    };

    repo.delete_with_history(account.id).await?;

    tracing::info!(account = %account.title, "Account removed");
    respond_ephemeral(ctx, command, "Account removed").await
}
