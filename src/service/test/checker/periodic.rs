use super::*;

/// Tests the scheduled "still monitoring" update.
///
/// An account checked moments ago but not notified for 25 hours gets a
/// periodic update without a fresh status check.
///
/// Expected: one periodic update, zero API calls, timestamps stamped
#[tokio::test]
async fn periodic_update_fires_after_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("good")
        .last_check_at(Utc::now().timestamp())
        .last_notification_at(hours_ago(25))
        .build()
        .await?;

    let api = Arc::new(StubBanApi::with_status(Status::Good));
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    checker.run_cycle().await?;

    assert_eq!(api.calls(), 0);
    assert_eq!(
        notifier.sent_kinds(),
        vec![NotificationKind::PeriodicUpdate { interval_hours: 24 }]
    );

    let reloaded = reload(db, account.id).await?;
    assert!(reloaded.last_notification_at > hours_ago(1));

    Ok(())
}

/// Tests that the periodic update respects its interval.
///
/// Expected: nothing sent for an account notified an hour ago
#[tokio::test]
async fn periodic_update_skipped_within_interval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AccountFactory::new(db, "111", "222")
        .last_status("good")
        .last_check_at(Utc::now().timestamp())
        .last_notification_at(hours_ago(1))
        .build()
        .await?;

    let api = Arc::new(StubBanApi::with_status(Status::Good));
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    checker.run_cycle().await?;

    assert_eq!(api.calls(), 0);
    assert!(notifier.sent_kinds().is_empty());

    Ok(())
}

/// Tests a cycle where both the check and the update are due.
///
/// The status check runs first (no alert — status unchanged), then the
/// periodic update reports the current status on its own schedule.
///
/// Expected: one API call, exactly one periodic update
#[tokio::test]
async fn check_and_update_share_a_cycle() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("good")
        .last_notification_at(hours_ago(25))
        .build()
        .await?;

    let api = Arc::new(StubBanApi::with_status(Status::Good));
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    checker.run_cycle().await?;

    assert_eq!(api.calls(), 1);
    assert_eq!(
        notifier.sent_kinds(),
        vec![NotificationKind::PeriodicUpdate { interval_hours: 24 }]
    );

    let reloaded = reload(db, account.id).await?;
    assert!(reloaded.last_check_at > hours_ago(1));
    assert!(reloaded.last_notification_at > hours_ago(1));

    Ok(())
}

/// Tests that every account in the list is processed in one cycle.
///
/// Expected: one API call per due account
#[tokio::test]
async fn cycle_covers_every_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        AccountFactory::new(db, "111", "222")
            .last_status("good")
            .last_notification_at(Utc::now().timestamp())
            .build()
            .await?;
    }

    let api = Arc::new(StubBanApi::with_status(Status::Good));
    let notifier = Arc::new(RecordingNotifier::default());
    let checker = build_checker(db, &api, &notifier);

    checker.run_cycle().await?;

    assert_eq!(api.calls(), 5);

    Ok(())
}
