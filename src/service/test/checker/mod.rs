use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory::account::AccountFactory};

use super::{RecordingNotifier, StubBanApi};
use crate::config::CheckIntervals;
use crate::data::{AccountRepository, StatusChangeRepository};
use crate::model::account::Status;
use crate::service::checker::AccountChecker;
use crate::service::notification::NotificationKind;

mod periodic;
mod status_transitions;

/// Thresholds used by every checker test: check every 15 minutes, update
/// every 24 hours, re-alert expired cookies after 6 hours.
fn intervals() -> CheckIntervals {
    CheckIntervals {
        check_interval_minutes: 15,
        notification_interval_hours: 24,
        cooldown_duration_hours: 6,
    }
}

fn build_checker(
    db: &DatabaseConnection,
    api: &Arc<StubBanApi>,
    notifier: &Arc<RecordingNotifier>,
) -> Arc<AccountChecker> {
    Arc::new(AccountChecker::new(
        db.clone(),
        api.clone(),
        notifier.clone(),
        intervals(),
    ))
}

/// Epoch seconds `hours` in the past.
fn hours_ago(hours: i64) -> i64 {
    Utc::now().timestamp() - hours * 3600
}

async fn reload(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::account::Model, DbErr> {
    Ok(AccountRepository::new(db)
        .get_by_id(id)
        .await?
        .expect("account should still exist"))
}
