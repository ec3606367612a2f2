//! `/help` — list the available commands.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage};

use crate::error::AppError;

pub fn register() -> CreateCommand {
    CreateCommand::new("help").description("Get help or report an issue")
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let embed = CreateEmbed::new()
        .title("Banwatch Help")
        .description("Track your accounts and get notified when their ban status changes.")
        .color(0x00ff00)
        .field(
            "/addaccount",
            "Add an account for automated ban status checking",
            false,
        )
        .field("/removeaccount", "Stop tracking an account", false)
        .field("/updateaccount", "Update the SSO cookie for an account", false)
        .field("/accountlogs", "View the recent status changes for an account", false)
        .field("/accountage", "Check the age of an account", false)
        .field(
            "/setpreference",
            "Choose between channel and DM notifications",
            false,
        )
        .field("/help", "Show this message", false);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(())
}
