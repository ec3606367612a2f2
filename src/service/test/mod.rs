//! Shared test doubles for the service layer.

mod checker;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::classify::ClassifyError;
use crate::model::account::{AccountAge, Status};
use crate::service::notification::{NotificationKind, Notifier};
use crate::service::status::BanApi;

/// Outcome a `StubBanApi` yields for every status check.
pub(crate) enum StubOutcome {
    Status(Status),
    DecodeError,
}

/// Scripted stand-in for the upstream status API.
///
/// Records how many status checks were issued so tests can assert that
/// certain accounts are never checked.
pub(crate) struct StubBanApi {
    outcome: StubOutcome,
    pub(crate) status_calls: AtomicUsize,
}

impl StubBanApi {
    /// A stub whose every status check classifies as `status`.
    pub(crate) fn with_status(status: Status) -> Self {
        Self {
            outcome: StubOutcome::Status(status),
            status_calls: AtomicUsize::new(0),
        }
    }

    /// A stub whose every status check fails with a decode error.
    pub(crate) fn failing() -> Self {
        Self {
            outcome: StubOutcome::DecodeError,
            status_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BanApi for StubBanApi {
    async fn check_status(&self, _sso_cookie: &str) -> Result<Status, ClassifyError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Status(status) => Ok(*status),
            StubOutcome::DecodeError => Err(ClassifyError::Decode(
                serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
            )),
        }
    }

    async fn account_age(&self, _sso_cookie: &str) -> Result<AccountAge, ClassifyError> {
        Ok(AccountAge {
            years: 0,
            months: 0,
            days: 0,
        })
    }

    async fn verify_cookie(&self, _sso_cookie: &str) -> Result<bool, ClassifyError> {
        Ok(true)
    }
}

/// Notifier that records every message instead of delivering it.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) sent: Mutex<Vec<(i32, NotificationKind)>>,
}

impl RecordingNotifier {
    /// The kinds of every recorded notification, in send order.
    pub(crate) fn sent_kinds(&self) -> Vec<NotificationKind> {
        self.sent.lock().unwrap().iter().map(|(_, kind)| kind.clone()).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, account: &entity::account::Model, kind: NotificationKind) {
        self.sent.lock().unwrap().push((account.id, kind));
    }
}
