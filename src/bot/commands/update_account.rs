//! `/updateaccount` — replace the SSO cookie of a tracked account.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::bot::commands::{defer_ephemeral, followup_ephemeral, option_integer, option_string, respond_ephemeral};
use crate::data::AccountRepository;
use crate::error::AppError;
use crate::service::status::BanApi;

pub fn register() -> CreateCommand {
    CreateCommand::new("updateaccount")
        .description("Update the SSO cookie for an account")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "account", "The account to update")
                .required(true)
                .set_autocomplete(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "sso_cookie",
                "The new SSO cookie for the account",
            )
            .required(true),
        )
}

pub async fn run(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
    api: &dyn BanApi,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command can only be used in a server.").await;
    };

    let account_id = option_integer(command, "account")? as i32;
    let sso_cookie = option_string(command, "sso_cookie")?;
    let user_id = command.user.id.to_string();

    defer_ephemeral(ctx, command).await?;

    match api.verify_cookie(&sso_cookie).await {
        Err(e) => {
            tracing::error!("Failed to verify SSO cookie: {}", e);
            return followup_ephemeral(ctx, command, "Error verifying SSO cookie").await;
        }
        Ok(false) => {
            return followup_ephemeral(ctx, command, "Invalid SSO cookie").await;
        }
        Ok(true) => {}
    }

    let repo = AccountRepository::new(db);
    let Some(account) = repo
        .get_owned(account_id, &user_id, &guild_id.to_string())
        .await?
    else {
        return followup_ephemeral(ctx, command, "Account does not exist").await;
    };

    // Resets status and cookie-alert state so the fresh credential is
    // re-evaluated from scratch on the next cycle.
    repo.update_cookie(account, sso_cookie).await?;

    followup_ephemeral(ctx, command, "Account SSO cookie updated").await
}
