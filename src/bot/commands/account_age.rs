//! `/accountage` — show the approximate age of the upstream account.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed,
};

use crate::bot::commands::{
    defer_ephemeral, followup_embed, followup_ephemeral, option_integer, respond_ephemeral,
};
use crate::data::AccountRepository;
use crate::error::AppError;
use crate::service::status::BanApi;

pub fn register() -> CreateCommand {
    CreateCommand::new("accountage")
        .description("Check the age of an account")
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
    api: &dyn BanApi,
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
            "User tried to check the age of an account they don't own"
        );
        return respond_ephemeral(ctx, command, "You do not own this account.").await;
    }

    defer_ephemeral(ctx, command).await?;

    match api.verify_cookie(&account.sso_cookie).await {
        Err(e) => {
            tracing::error!(account = %account.title, "Failed to verify SSO cookie: {}", e);
            return followup_ephemeral(ctx, command, "Error verifying SSO cookie.").await;
        }
        Ok(false) => {
            return followup_ephemeral(
                ctx,
                command,
                "Invalid SSO cookie. Please update the cookie using the /updateaccount command.",
            )
            .await;
        }
        Ok(true) => {}
    }

    let age = match api.account_age(&account.sso_cookie).await {
        Ok(age) => age,
        Err(e) => {
            tracing::error!(account = %account.title, "Failed to check account age: {}", e);
            return followup_ephemeral(ctx, command, "Error checking account age.").await;
        }
    };

    let embed = CreateEmbed::new()
        .title(format!("{} - {}", account.title, account.last_status))
        .description(format!(
            "The account is {} years, {} months, and {} days old.",
            age.years, age.months, age.days
        ))
        .color(0x00ff00);

    followup_embed(ctx, command, embed).await
}
