use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    ActivityData, Client, Context, EventHandler, GatewayIntents, Guild, Interaction, Ready,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::bot::commands;
use crate::config::Config;
use crate::error::AppError;
use crate::service::status::BanApi;

/// Discord bot event handler
struct Handler {
    db: DatabaseConnection,
    api: Arc<dyn BanApi>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching(
            "the status of your accounts so you don't have to",
        )));
    }

    /// Called when a guild becomes available or the bot joins a new guild
    ///
    /// Registers (or refreshes) the slash commands for that guild.
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        match guild.id.set_commands(&ctx.http, commands::registrations()).await {
            Ok(registered) => {
                tracing::info!(
                    "Registered {} commands in guild {} ({})",
                    registered.len(),
                    guild.name,
                    guild.id
                );
            }
            Err(e) => {
                tracing::error!("Failed to register commands in guild {}: {}", guild.id, e);
            }
        }
    }

    /// Called for every interaction; routes commands and autocompletes
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                commands::dispatch(&ctx, &command, &self.db, self.api.as_ref()).await;
            }
            Interaction::Autocomplete(command) => {
                commands::autocomplete(&ctx, &command, &self.db).await;
            }
            _ => {}
        }
    }
}

/// Initializes the Discord bot client.
///
/// Builds the client with the event handler wired to the database and the
/// status API, and extracts the shared HTTP handle used by the notifier to
/// send messages outside of gateway events.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection for the event handler
/// - `api` - Upstream status API client for the commands
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - The unstarted client and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    api: Arc<dyn BanApi>,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler { db, api };

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// This function starts the Discord bot client. It should be called from
/// within a tokio::spawn task since it will block until the bot shuts down.
///
/// # Arguments
/// - `client` - The client produced by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot runs until shutdown
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
