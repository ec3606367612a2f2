//! `/setpreference` — choose between channel and DM notifications.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};

use crate::bot::commands::{option_string, respond_ephemeral};
use crate::data::AccountRepository;
use crate::error::AppError;
use crate::model::account::NotificationTarget;

pub fn register() -> CreateCommand {
    CreateCommand::new("setpreference")
        .description("Set where your account notifications are sent")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "type",
                "Where do you want to receive status notifications?",
            )
            .required(true)
            .add_string_choice("DM", "dm")
            .add_string_choice("Channel", "channel"),
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

    let target = NotificationTarget::parse(&option_string(command, "type")?);
    let user_id = command.user.id.to_string();

    let updated = AccountRepository::new(db)
        .set_notification_target_for_user(&user_id, &guild_id.to_string(), target)
        .await?;

    if updated == 0 {
        return respond_ephemeral(ctx, command, "You have no accounts in this server.").await;
    }

    respond_ephemeral(ctx, command, &format!("Preference set to {}", target)).await
}
