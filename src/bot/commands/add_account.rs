//! `/addaccount` — register an account for automated ban-status checking.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::bot::commands::{defer_ephemeral, followup_ephemeral, option_string, respond_ephemeral};
use crate::data::AccountRepository;
use crate::error::AppError;
use crate::model::account::CreateAccountParam;
use crate::service::status::BanApi;

pub fn register() -> CreateCommand {
    CreateCommand::new("addaccount")
        .description("Add an account for automated ban status checking")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "title", "The title of the account")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "sso_cookie",
                "The SSO cookie for the account",
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

    let title = option_string(command, "title")?;
    let sso_cookie = option_string(command, "sso_cookie")?;
    let user_id = command.user.id.to_string();

    let repo = AccountRepository::new(db);
    if repo.find_by_user_and_title(&user_id, &title).await?.is_some() {
        return respond_ephemeral(ctx, command, "Account already exists").await;
    }

    // Cookie verification hits the upstream API; acknowledge first.
    defer_ephemeral(ctx, command).await?;

    match api.verify_cookie(&sso_cookie).await {
        Err(e) => {
            tracing::error!("Failed to verify SSO cookie: {}", e);
            followup_ephemeral(ctx, command, "Error verifying SSO cookie").await
        }
        Ok(false) => followup_ephemeral(ctx, command, "Invalid SSO cookie").await,
        Ok(true) => {
            repo.create(CreateAccountParam {
                user_id,
                guild_id: guild_id.to_string(),
                channel_id: command.channel_id.to_string(),
                title,
                sso_cookie,
            })
            .await?;

            followup_ephemeral(ctx, command, "Account added").await
        }
    }
}
