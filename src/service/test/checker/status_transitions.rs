use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests the full status-transition path.
///
/// Verifies that a good → permaban classification persists the new status,
/// appends exactly one status-change record, and dispatches one alert
/// mentioning the owning user.
///
/// Expected: status persisted, one record, one status-change alert
#[tokio::test]
async fn transition_records_history_and_alerts_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("good")
        .last_notification_at(Utc::now().timestamp())
        .build()
        .await?;

    let api = Arc::new(StubBanApi::with_status(Status::Permaban));
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    checker.run_cycle().await?;

    let reloaded = reload(db, account.id).await?;
    assert_eq!(reloaded.last_status, "permaban");
    assert!(!reloaded.is_expired_cookie);
    assert!(reloaded.last_check_at > hours_ago(1));

    let changes = StatusChangeRepository::new(db)
        .get_by_account(account.id)
        .await?;
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].status, "permaban");

    let sent = notifier.sent.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![(
            account.id,
            NotificationKind::StatusChange {
                status: Status::Permaban
            }
        )]
    );
    // The alert itself pings the account owner.
    assert_eq!(
        NotificationKind::StatusChange {
            status: Status::Permaban
        }
        .mention(&reloaded),
        Some("<@111>".to_string())
    );
    assert_eq!(
        NotificationKind::StatusChange {
            status: Status::Permaban
        }
        .title(&reloaded),
        format!("{} - PERMANENT BAN DETECTED", reloaded.title)
    );

    Ok(())
}

/// Tests that an unchanged classification writes no history.
///
/// Expected: check timestamp stamped, no records, no notifications
#[tokio::test]
async fn unchanged_status_writes_no_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("good")
        .last_notification_at(Utc::now().timestamp())
        .build()
        .await?;

    let api = Arc::new(StubBanApi::with_status(Status::Good));
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    checker.run_cycle().await?;

    let reloaded = reload(db, account.id).await?;
    assert_eq!(reloaded.last_status, "good");
    assert!(reloaded.last_check_at > hours_ago(1));

    let changes = StatusChangeRepository::new(db)
        .get_by_account(account.id)
        .await?;
    assert!(changes.is_empty());
    assert!(notifier.sent_kinds().is_empty());

    Ok(())
}

/// Tests classification idempotence across cycles.
///
/// Running a second cycle against an unchanged upstream response must not
/// append a second status-change record or re-alert.
///
/// Expected: exactly one record and one alert after two cycles
#[tokio::test]
async fn second_identical_classification_adds_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("good")
        .last_notification_at(Utc::now().timestamp())
        .build()
        .await?;

    let api = Arc::new(StubBanApi::with_status(Status::Shadowban));
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    Arc::clone(&checker).run_cycle().await?;

    // Age the check timestamp so the second cycle re-checks the account.
    let reloaded = reload(db, account.id).await?;
    let mut active_model: entity::account::ActiveModel = reloaded.into();
    active_model.last_check_at = ActiveValue::Set(0);
    active_model.update(db).await?;

    Arc::clone(&checker).run_cycle().await?;

    assert_eq!(api.calls(), 2);

    let changes = StatusChangeRepository::new(db)
        .get_by_account(account.id)
        .await?;
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].status, "shadowban");
    assert_eq!(
        notifier.sent_kinds(),
        vec![NotificationKind::StatusChange {
            status: Status::Shadowban
        }]
    );

    Ok(())
}

/// Tests that a classification failure leaves the account untouched.
///
/// A transport or decode failure aborts the unit of work without any
/// database mutation and without notifying anyone.
///
/// Expected: account unchanged, no records, no notifications
#[tokio::test]
async fn classification_failure_leaves_account_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("good")
        .last_notification_at(Utc::now().timestamp())
        .build()
        .await?;

    let api = Arc::new(StubBanApi::failing());
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    checker.run_cycle().await?;

    assert_eq!(api.calls(), 1);

    let reloaded = reload(db, account.id).await?;
    assert_eq!(reloaded.last_status, "good");
    assert_eq!(reloaded.last_check_at, 0);
    assert!(notifier.sent_kinds().is_empty());

    let changes = StatusChangeRepository::new(db)
        .get_by_account(account.id)
        .await?;
    assert!(changes.is_empty());

    Ok(())
}
