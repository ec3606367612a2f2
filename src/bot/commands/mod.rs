//! Slash command definitions, dispatch, and shared interaction helpers.
//!
//! Each command module exposes `register()` returning its `CreateCommand`
//! definition and `run()` handling an invocation. Commands that pick an
//! account use an integer option backed by the shared autocomplete handler,
//! which offers the caller's own accounts in the current guild.

pub mod account_age;
pub mod account_logs;
pub mod add_account;
pub mod help;
pub mod remove_account;
pub mod set_preference;
pub mod update_account;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateAutocompleteResponse, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    ResolvedValue,
};

use crate::data::AccountRepository;
use crate::error::AppError;
use crate::service::status::BanApi;

/// Maximum number of autocomplete choices Discord accepts per response.
const MAX_AUTOCOMPLETE_CHOICES: usize = 25;

/// Returns the definitions of every slash command, for per-guild registration.
pub fn registrations() -> Vec<serenity::all::CreateCommand> {
    vec![
        add_account::register(),
        remove_account::register(),
        update_account::register(),
        account_logs::register(),
        account_age::register(),
        set_preference::register(),
        help::register(),
    ]
}

/// Routes a command interaction to its handler and logs any failure.
pub async fn dispatch(
    ctx: &Context,
    command: &CommandInteraction,
    db: &DatabaseConnection,
    api: &dyn BanApi,
) {
    tracing::info!(command = %command.data.name, "Handling command");

    let result = match command.data.name.as_str() {
        "addaccount" => add_account::run(ctx, command, db, api).await,
        "removeaccount" => remove_account::run(ctx, command, db).await,
        "updateaccount" => update_account::run(ctx, command, db, api).await,
        "accountlogs" => account_logs::run(ctx, command, db).await,
        "accountage" => account_age::run(ctx, command, db, api).await,
        "setpreference" => set_preference::run(ctx, command, db).await,
        "help" => help::run(ctx, command).await,
        name => {
            tracing::warn!(command = %name, "Command handler not found");
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!(command = %command.data.name, "Command failed: {}", e);
    }
}

/// Answers autocomplete requests for the shared `account` option.
///
/// Offers the caller's accounts in the current guild, filtered by the text
/// typed so far, with the account ID as the choice value.
pub async fn autocomplete(ctx: &Context, command: &CommandInteraction, db: &DatabaseConnection) {
    let Some(guild_id) = command.guild_id else {
        return;
    };

    let typed = focused_value(command).unwrap_or_default().to_lowercase();

    let accounts = match AccountRepository::new(db)
        .get_by_user_and_guild(&command.user.id.to_string(), &guild_id.to_string())
        .await
    {
        Ok(accounts) => accounts,
        Err(e) => {
            tracing::error!("Failed to load accounts for autocomplete: {}", e);
            return;
        }
    };

    let mut response = CreateAutocompleteResponse::new();
    for account in accounts
        .iter()
        .filter(|a| typed.is_empty() || a.title.to_lowercase().contains(&typed))
        .take(MAX_AUTOCOMPLETE_CHOICES)
    {
        response = response.add_int_choice(account.title.clone(), i64::from(account.id));
    }

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await
    {
        tracing::error!("Failed to send autocomplete response: {}", e);
    }
}

/// Extracts the value typed so far into the focused autocomplete option.
fn focused_value(command: &CommandInteraction) -> Option<String> {
    command.data.options().into_iter().find_map(|option| match option.value {
        ResolvedValue::Autocomplete { value, .. } => Some(value.to_string()),
        _ => None,
    })
}

/// Extracts a string option by name.
pub(super) fn option_string(command: &CommandInteraction, name: &str) -> Result<String, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::String(value) => Some(value.to_string()),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'", name)))
}

/// Extracts an integer option by name.
pub(super) fn option_integer(command: &CommandInteraction, name: &str) -> Result<i64, AppError> {
    command
        .data
        .options()
        .into_iter()
        .find(|option| option.name == name)
        .and_then(|option| match option.value {
            ResolvedValue::Integer(value) => Some(value),
            _ => None,
        })
        .ok_or_else(|| AppError::BadRequest(format!("Missing option '{}'", name)))
}

/// Sends an immediate ephemeral text response.
pub(super) async fn respond_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

/// Sends an immediate embed response (visible to the channel).
pub(super) async fn respond_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;
    Ok(())
}

/// Acknowledges the interaction ephemerally so slow work can follow up later.
pub(super) async fn defer_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(
                CreateInteractionResponseMessage::new().ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}

/// Sends an ephemeral text follow-up after a deferred response.
pub(super) async fn followup_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: &str,
) -> Result<(), AppError> {
    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;
    Ok(())
}

/// Sends an embed follow-up after a deferred response.
pub(super) async fn followup_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<(), AppError> {
    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().embed(embed),
        )
        .await?;
    Ok(())
}
