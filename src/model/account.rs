use std::fmt;

/// Ban status of a tracked account as classified from the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The account is in good standing.
    Good,
    /// The account has been permanently banned.
    Permaban,
    /// The account is under review (shadowbanned).
    Shadowban,
    /// The status of the account has not been determined yet.
    Unknown,
    /// The stored SSO cookie is no longer accepted upstream.
    ///
    /// This is a pseudo-status: it never overwrites `last_status` and never
    /// produces a status-change record.
    InvalidCookie,
}

impl Status {
    /// Returns the string form stored in the `account.last_status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Permaban => "permaban",
            Status::Shadowban => "shadowban",
            Status::Unknown => "unknown",
            Status::InvalidCookie => "invalid_cookie",
        }
    }

    /// Parses the stored string form back into a status.
    ///
    /// Unrecognized values map to `Unknown` rather than failing, so a row
    /// written by a newer version never wedges the poller.
    pub fn parse(value: &str) -> Self {
        match value {
            "good" => Status::Good,
            "permaban" => Status::Permaban,
            "shadowban" => Status::Shadowban,
            "invalid_cookie" => Status::InvalidCookie,
            _ => Status::Unknown,
        }
    }

    /// Returns the alert headline used when this status is newly detected.
    pub fn headline(&self) -> &'static str {
        match self {
            Status::Permaban => "PERMANENT BAN DETECTED",
            Status::Shadowban => "SHADOWBAN DETECTED",
            _ => "ACCOUNT NOT BANNED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the embed color for a status, with an expired cookie overriding
/// everything to red.
pub fn status_color(status: Status, is_expired_cookie: bool) -> u32 {
    if is_expired_cookie {
        return 0xff0000;
    }
    match status {
        Status::Permaban => 0xff0000,
        Status::Shadowban => 0xffff00,
        _ => 0x00ff00,
    }
}

/// Where an account's periodic updates and alerts are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTarget {
    /// The channel the account was registered from.
    Channel,
    /// A direct message to the owning user.
    DirectMessage,
}

impl NotificationTarget {
    /// Returns the string form stored in the `account.notification_target` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationTarget::Channel => "channel",
            NotificationTarget::DirectMessage => "dm",
        }
    }

    /// Parses the stored string form; unrecognized values fall back to `Channel`.
    pub fn parse(value: &str) -> Self {
        match value {
            "dm" => NotificationTarget::DirectMessage,
            _ => NotificationTarget::Channel,
        }
    }
}

impl fmt::Display for NotificationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approximate age of an upstream account.
///
/// Computed from fixed-length durations (24h days, 30-day months, 365-day
/// years), not calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountAge {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

/// Parameters for registering a new tracked account.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    /// Discord ID of the owning user.
    pub user_id: String,
    /// Discord ID of the guild the account was registered in.
    pub guild_id: String,
    /// Channel the registration command was invoked from; default
    /// notification destination.
    pub channel_id: String,
    /// Display name, unique per (user, guild).
    pub title: String,
    /// Opaque credential for the upstream API. Never logged.
    pub sso_cookie: String,
}
