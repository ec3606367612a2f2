//! Discord notification building and delivery.
//!
//! Every message the poller sends is one of three kinds; each kind knows how
//! to render itself as an embed for a given account. Delivery failures are
//! logged and swallowed here — the poller never sees them.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, Timestamp, UserId},
    http::Http,
};

use crate::model::account::{status_color, NotificationTarget, Status};

/// The kinds of messages the poller can send about an account.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationKind {
    /// The classified status differs from the stored one.
    StatusChange { status: Status },
    /// Scheduled "still monitoring" update carrying the current stored
    /// status, or the refresh reminder when the cookie is flagged expired.
    PeriodicUpdate { interval_hours: i64 },
    /// The credential was just classified as expired.
    CookieExpired,
}

impl NotificationKind {
    /// Embed title for this notification.
    pub fn title(&self, account: &entity::account::Model) -> String {
        match self {
            NotificationKind::StatusChange { status } => {
                format!("{} - {}", account.title, status.headline())
            }
            NotificationKind::PeriodicUpdate { interval_hours } => {
                format!("{} Hour Update - {}", interval_hours, account.title)
            }
            NotificationKind::CookieExpired => {
                format!("{} - Invalid SSO Cookie", account.title)
            }
        }
    }

    /// Embed body for this notification.
    pub fn description(&self, account: &entity::account::Model) -> String {
        match self {
            NotificationKind::StatusChange { status } => format!(
                "The status of account {} has changed to {}",
                account.title, status
            ),
            NotificationKind::PeriodicUpdate { .. } if account.is_expired_cookie => {
                expired_cookie_description(account)
            }
            NotificationKind::PeriodicUpdate { .. } => format!(
                "The last status of account {} was {}.",
                account.title, account.last_status
            ),
            NotificationKind::CookieExpired => expired_cookie_description(account),
        }
    }

    /// Embed color for this notification.
    pub fn color(&self, account: &entity::account::Model) -> u32 {
        match self {
            NotificationKind::StatusChange { status } => status_color(*status, false),
            NotificationKind::PeriodicUpdate { .. } => status_color(
                Status::parse(&account.last_status),
                account.is_expired_cookie,
            ),
            NotificationKind::CookieExpired => 0xff0000,
        }
    }

    /// Raw mention placed in the message content, if any.
    ///
    /// Status-change alerts ping the owner; routine updates do not.
    pub fn mention(&self, account: &entity::account::Model) -> Option<String> {
        match self {
            NotificationKind::StatusChange { .. } => Some(format!("<@{}>", account.user_id)),
            _ => None,
        }
    }
}

fn expired_cookie_description(account: &entity::account::Model) -> String {
    format!(
        "The SSO cookie for account {} has expired. Please update the cookie using the \
         /updateaccount command or delete the account using the /removeaccount command.",
        account.title
    )
}

/// Where a concrete message should be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// The channel ID stored on the account.
    Channel(String),
    /// A direct message to the owning user; the private channel is resolved
    /// at send time.
    DirectMessage(String),
}

/// Resolves the delivery target from the account's stored preference.
pub fn delivery_target(account: &entity::account::Model) -> DeliveryTarget {
    match NotificationTarget::parse(&account.notification_target) {
        NotificationTarget::DirectMessage => DeliveryTarget::DirectMessage(account.user_id.clone()),
        NotificationTarget::Channel => DeliveryTarget::Channel(account.channel_id.clone()),
    }
}

/// Delivers notifications about tracked accounts.
///
/// Implementations must swallow their own failures: a lost message never
/// aborts the poll cycle that produced it.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, account: &entity::account::Model, kind: NotificationKind);
}

/// Notifier that sends embeds through the Discord HTTP API.
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Resolves the Discord channel to send into.
    ///
    /// For DM delivery this opens (or reuses) the private channel with the
    /// owning user.
    async fn resolve_channel(&self, target: DeliveryTarget) -> Option<ChannelId> {
        match target {
            DeliveryTarget::Channel(channel_id) => match channel_id.parse::<u64>() {
                Ok(id) => Some(ChannelId::new(id)),
                Err(e) => {
                    tracing::error!("Invalid stored channel ID '{}': {}", channel_id, e);
                    None
                }
            },
            DeliveryTarget::DirectMessage(user_id) => {
                let id = match user_id.parse::<u64>() {
                    Ok(id) => id,
                    Err(e) => {
                        tracing::error!("Invalid stored user ID '{}': {}", user_id, e);
                        return None;
                    }
                };
                match UserId::new(id).create_dm_channel(&self.http).await {
                    Ok(channel) => Some(channel.id),
                    Err(e) => {
                        tracing::error!("Failed to create DM channel for user {}: {}", id, e);
                        None
                    }
                }
            }
        }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send(&self, account: &entity::account::Model, kind: NotificationKind) {
        let embed = CreateEmbed::new()
            .title(kind.title(account))
            .description(kind.description(account))
            .color(kind.color(account))
            .timestamp(Timestamp::now());

        let Some(channel_id) = self.resolve_channel(delivery_target(account)).await else {
            return;
        };

        let mut message = CreateMessage::new().embed(embed);
        if let Some(mention) = kind.mention(account) {
            message = message.content(mention);
        }

        if let Err(e) = channel_id.send_message(&self.http, message).await {
            tracing::error!(
                "Failed to send notification for account {}: {}",
                account.title,
                e
            );
        }
    }
}
