//! Account factory for creating test account entities.
//!
//! This module provides factory methods for creating tracked-account entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// Provides a builder pattern for creating account entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db, "111", "222")
///     .title("Main")
///     .last_status("good")
///     .last_check_at(0)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    channel_id: String,
    title: String,
    sso_cookie: String,
    last_status: String,
    last_check_at: i64,
    last_notification_at: i64,
    last_cookie_notification_at: i64,
    is_expired_cookie: bool,
    notification_target: String,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Account {id}"` where id is auto-incremented
    /// - channel_id: `"900000000000000000"`
    /// - sso_cookie: `"test-cookie-{id}"`
    /// - last_status: `"unknown"`
    /// - all timestamps: `0` (never)
    /// - is_expired_cookie: `false`
    /// - notification_target: `"channel"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Discord ID of the owning user
    /// - `guild_id` - Discord ID of the owning guild
    ///
    /// # Returns
    /// - `AccountFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        guild_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: user_id.into(),
            guild_id: guild_id.into(),
            channel_id: "900000000000000000".to_string(),
            title: format!("Account {}", id),
            sso_cookie: format!("test-cookie-{}", id),
            last_status: "unknown".to_string(),
            last_check_at: 0,
            last_notification_at: 0,
            last_cookie_notification_at: 0,
            is_expired_cookie: false,
            notification_target: "channel".to_string(),
        }
    }

    /// Sets the account title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the destination channel ID.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the SSO cookie credential.
    pub fn sso_cookie(mut self, sso_cookie: impl Into<String>) -> Self {
        self.sso_cookie = sso_cookie.into();
        self
    }

    /// Sets the last known status (string form, e.g. `"good"`).
    pub fn last_status(mut self, last_status: impl Into<String>) -> Self {
        self.last_status = last_status.into();
        self
    }

    /// Sets the last status-check timestamp (epoch seconds).
    pub fn last_check_at(mut self, last_check_at: i64) -> Self {
        self.last_check_at = last_check_at;
        self
    }

    /// Sets the last periodic-notification timestamp (epoch seconds).
    pub fn last_notification_at(mut self, last_notification_at: i64) -> Self {
        self.last_notification_at = last_notification_at;
        self
    }

    /// Sets the last cookie-expiry-notification timestamp (epoch seconds).
    pub fn last_cookie_notification_at(mut self, last_cookie_notification_at: i64) -> Self {
        self.last_cookie_notification_at = last_cookie_notification_at;
        self
    }

    /// Sets whether the SSO cookie is flagged as expired.
    pub fn expired_cookie(mut self, is_expired_cookie: bool) -> Self {
        self.is_expired_cookie = is_expired_cookie;
        self
    }

    /// Sets the notification target (string form, `"channel"` or `"dm"`).
    pub fn notification_target(mut self, notification_target: impl Into<String>) -> Self {
        self.notification_target = notification_target.into();
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            title: ActiveValue::Set(self.title),
            sso_cookie: ActiveValue::Set(self.sso_cookie),
            last_status: ActiveValue::Set(self.last_status),
            last_check_at: ActiveValue::Set(self.last_check_at),
            last_notification_at: ActiveValue::Set(self.last_notification_at),
            last_cookie_notification_at: ActiveValue::Set(self.last_cookie_notification_at),
            is_expired_cookie: ActiveValue::Set(self.is_expired_cookie),
            notification_target: ActiveValue::Set(self.notification_target),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values for the specified user and guild.
///
/// Shorthand for `AccountFactory::new(db, user_id, guild_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owning user
/// - `guild_id` - Discord ID of the owning guild
///
/// # Returns
/// - `Ok(entity::account::Model)` - Created account entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let account = create_account(&db, "111", "222").await?;
/// ```
pub async fn create_account(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    guild_id: impl Into<String>,
) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db, user_id, guild_id).build().await
}
