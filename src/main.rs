mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::service::checker::AccountChecker;
use crate::service::notification::{DiscordNotifier, Notifier};
use crate::service::status::{ActivisionClient, BanApi};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_http_client()?;
    let api: Arc<dyn BanApi> = Arc::new(ActivisionClient::new(http_client));

    tracing::info!("Starting banwatch");

    // Initialize Discord bot and extract its HTTP client for the notifier
    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone(), api.clone()).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let notifier: Arc<dyn Notifier> = Arc::new(DiscordNotifier::new(discord_http));
    let checker = Arc::new(AccountChecker::new(
        db,
        api,
        notifier,
        config.intervals.clone(),
    ));

    scheduler::account_checks::start_scheduler(checker, config.sleep_duration_minutes).await?;

    tracing::info!("banwatch is running");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");

    Ok(())
}
