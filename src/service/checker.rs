//! The account poller.
//!
//! One `AccountChecker` lives for the whole process. Each poll cycle loads
//! every tracked account and fans out one task per account into a `JoinSet`;
//! the cycle completes only when all tasks have finished, so callers (and
//! tests) can await a cycle deterministically. A per-account mutex map keeps
//! overlapping cycles from interleaving writes to the same row.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use sea_orm::{DatabaseConnection, DbErr};
use tokio::{sync::Mutex, task::JoinSet};

use crate::{
    config::CheckIntervals,
    data::{AccountRepository, StatusChangeRepository},
    error::AppError,
    model::account::Status,
    service::{
        notification::{NotificationKind, Notifier},
        status::BanApi,
    },
};

pub struct AccountChecker {
    db: DatabaseConnection,
    api: Arc<dyn BanApi>,
    notifier: Arc<dyn Notifier>,
    intervals: CheckIntervals,
    /// One mutex per account ID; serializes all row mutations for an account.
    locks: DashMap<i32, Arc<Mutex<()>>>,
}

impl AccountChecker {
    /// Creates a new checker.
    ///
    /// # Arguments
    /// - `db`: Database connection
    /// - `api`: Upstream status API client
    /// - `notifier`: Delivery channel for status messages
    /// - `intervals`: Decision thresholds, fixed for the process lifetime
    pub fn new(
        db: DatabaseConnection,
        api: Arc<dyn BanApi>,
        notifier: Arc<dyn Notifier>,
        intervals: CheckIntervals,
    ) -> Self {
        Self {
            db,
            api,
            notifier,
            intervals,
            locks: DashMap::new(),
        }
    }

    /// Runs one poll cycle over every tracked account.
    ///
    /// Per-account failures are logged and swallowed; only a failure to load
    /// the account list surfaces to the caller.
    ///
    /// # Returns
    /// - `Ok(())`: Cycle completed; every account task has finished
    /// - `Err(DbErr)`: The account list could not be loaded
    pub async fn run_cycle(self: Arc<Self>) -> Result<(), DbErr> {
        let accounts = AccountRepository::new(&self.db).get_all().await?;
        let now = Utc::now();

        let mut tasks = JoinSet::new();
        for account in accounts {
            let checker = Arc::clone(&self);
            tasks.spawn(async move { checker.process_account(account, now).await });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Account check task failed to complete: {}", e);
            }
        }

        Ok(())
    }

    /// Applies the per-cycle decisions to one account.
    ///
    /// Holds the account's mutex for the duration so a slow cycle cannot race
    /// the next one on the same row.
    async fn process_account(&self, account: entity::account::Model, now: DateTime<Utc>) {
        let lock = self
            .locks
            .entry(account.id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let mut account = account;

        if account.is_expired_cookie {
            if self.periodic_update_due(&account, now) {
                self.send_periodic_update(&account, now).await;
            } else {
                tracing::debug!(
                    account = %account.title,
                    "Skipping account with expired cookie"
                );
            }
            return;
        }

        if minutes_since(account.last_check_at, now) > self.intervals.check_interval_minutes {
            match self.check_account(&account, now).await {
                Ok(updated) => account = updated,
                Err(e) => {
                    tracing::error!(account = %account.title, "Account check failed: {}", e);
                }
            }
        } else {
            tracing::debug!(account = %account.title, "Account checked recently, skipping");
        }

        if self.periodic_update_due(&account, now) {
            self.send_periodic_update(&account, now).await;
        }
    }

    fn periodic_update_due(&self, account: &entity::account::Model, now: DateTime<Utc>) -> bool {
        hours_since(account.last_notification_at, now) > self.intervals.notification_interval_hours
    }

    /// Checks one account against the upstream API and applies the outcome.
    ///
    /// - Classification failure: logged upstream, no mutation (the returned
    ///   model equals the input).
    /// - Invalid cookie: alert + expired flag, but only once per cooldown
    ///   window; outside the window nothing is written, not even the check
    ///   timestamp.
    /// - Concrete status: check timestamp stamped and the expired flag
    ///   cleared; on an actual transition the new status is persisted, a
    ///   status-change record appended, and the owner alerted.
    ///
    /// # Returns
    /// - `Ok(Model)`: The account as it now exists in the database
    /// - `Err(AppError)`: A database write failed
    async fn check_account(
        &self,
        account: &entity::account::Model,
        now: DateTime<Utc>,
    ) -> Result<entity::account::Model, AppError> {
        let status = match self.api.check_status(&account.sso_cookie).await {
            Ok(status) => status,
            Err(e) => {
                tracing::error!(account = %account.title, "Failed to check account status: {}", e);
                return Ok(account.clone());
            }
        };

        let repo = AccountRepository::new(&self.db);

        if status == Status::InvalidCookie {
            let cooldown_elapsed = account.last_cookie_notification_at == 0
                || hours_since(account.last_cookie_notification_at, now)
                    >= self.intervals.cooldown_duration_hours;

            if !cooldown_elapsed {
                tracing::info!(
                    account = %account.title,
                    "Skipping expired cookie notification (cooldown)"
                );
                return Ok(account.clone());
            }

            tracing::info!(account = %account.title, "Account has an invalid SSO cookie");
            self.notifier
                .send(account, NotificationKind::CookieExpired)
                .await;
            return Ok(repo.mark_cookie_expired(account.clone(), now).await?);
        }

        let previous = Status::parse(&account.last_status);
        let mut account = repo.mark_checked(account.clone(), now).await?;

        if status != previous {
            account = repo.set_status(account, status).await?;
            StatusChangeRepository::new(&self.db)
                .create(account.id, status)
                .await?;
            tracing::info!(account = %account.title, status = %status, "Account status changed");
            self.notifier
                .send(&account, NotificationKind::StatusChange { status })
                .await;
        }

        Ok(account)
    }

    /// Sends the scheduled update for an account and stamps its timestamps.
    ///
    /// Covers both the routine "still monitoring" message and the throttled
    /// refresh reminder for accounts with an expired cookie.
    async fn send_periodic_update(&self, account: &entity::account::Model, now: DateTime<Utc>) {
        tracing::info!(account = %account.title, "Sending periodic update");

        self.notifier
            .send(
                account,
                NotificationKind::PeriodicUpdate {
                    interval_hours: self.intervals.notification_interval_hours,
                },
            )
            .await;

        if let Err(e) = AccountRepository::new(&self.db)
            .mark_notified(account.clone(), now)
            .await
        {
            tracing::error!(account = %account.title, "Failed to stamp periodic update: {}", e);
        }
    }
}

/// Whole minutes elapsed since an epoch-seconds timestamp; `0` means never
/// and yields a very large value.
fn minutes_since(epoch_seconds: i64, now: DateTime<Utc>) -> i64 {
    (now.timestamp() - epoch_seconds) / 60
}

/// Whole hours elapsed since an epoch-seconds timestamp.
fn hours_since(epoch_seconds: i64, now: DateTime<Utc>) -> i64 {
    (now.timestamp() - epoch_seconds) / 3600
}
