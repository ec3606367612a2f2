use crate::error::{config::ConfigError, AppError};

/// Application configuration loaded once at startup.
pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Poller decision thresholds, handed to the checker at construction.
    pub intervals: CheckIntervals,
    /// Minutes the poll loop sleeps between cycles.
    pub sleep_duration_minutes: u64,
}

/// Thresholds driving the per-account poll decisions.
///
/// Read from the environment exactly once; the poller receives this struct at
/// construction instead of consulting the environment per iteration.
#[derive(Debug, Clone)]
pub struct CheckIntervals {
    /// Minimum minutes between status checks of one account.
    pub check_interval_minutes: i64,
    /// Minimum hours between periodic "still monitoring" updates.
    pub notification_interval_hours: i64,
    /// Minimum hours between repeated cookie-expiry alerts for one account.
    pub cooldown_duration_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            discord_bot_token: require_var("DISCORD_BOT_TOKEN")?,
            intervals: CheckIntervals {
                check_interval_minutes: parse_i64("CHECK_INTERVAL", &require_var("CHECK_INTERVAL")?)?,
                notification_interval_hours: parse_i64(
                    "NOTIFICATION_INTERVAL",
                    &require_var("NOTIFICATION_INTERVAL")?,
                )?,
                cooldown_duration_hours: parse_i64(
                    "COOLDOWN_DURATION",
                    &require_var("COOLDOWN_DURATION")?,
                )?,
            },
            sleep_duration_minutes: parse_u64("SLEEP_DURATION", &require_var("SLEEP_DURATION")?)?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_i64(name: &str, value: &str) -> Result<i64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}
