use super::*;
use test_utils::factory::account::AccountFactory;

/// Tests replacing the SSO cookie.
///
/// Verifies that a cookie update also resets the status to `unknown`,
/// clears the expired flag, and zeroes the cookie-alert timestamp so the
/// fresh credential starts clean.
///
/// Expected: cookie replaced, alert state reset
#[tokio::test]
async fn update_cookie_resets_alert_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("permaban")
        .expired_cookie(true)
        .last_cookie_notification_at(12345)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let updated = repo.update_cookie(account, "new-cookie".to_string()).await?;

    assert_eq!(updated.sso_cookie, "new-cookie");
    assert_eq!(updated.last_status, Status::Unknown.as_str());
    assert!(!updated.is_expired_cookie);
    assert_eq!(updated.last_cookie_notification_at, 0);

    Ok(())
}

/// Tests switching the notification target for a user's accounts.
///
/// Verifies that all of the user's accounts in the guild are updated while
/// other users and guilds are untouched.
///
/// Expected: matching rows updated, count returned
#[tokio::test]
async fn sets_notification_target_for_user_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_account(db, "111", "222").await?;
    let second = factory::create_account(db, "111", "222").await?;
    let other_guild = factory::create_account(db, "111", "333").await?;
    let other_user = factory::create_account(db, "444", "222").await?;

    let repo = AccountRepository::new(db);
    let updated = repo
        .set_notification_target_for_user("111", "222", NotificationTarget::DirectMessage)
        .await?;

    assert_eq!(updated, 2);

    for id in [first.id, second.id] {
        let account = repo.get_by_id(id).await?.unwrap();
        assert_eq!(account.notification_target, "dm");
    }
    for id in [other_guild.id, other_user.id] {
        let account = repo.get_by_id(id).await?.unwrap();
        assert_eq!(account.notification_target, "channel");
    }

    Ok(())
}

/// Tests the poller's timestamp stamps.
///
/// Expected: each stamp mutates exactly its own fields
#[tokio::test]
async fn stamps_check_expiry_and_notification_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountFactory::new(db, "111", "222")
        .last_status("good")
        .expired_cookie(true)
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let now = Utc::now();

    // A successful check stamps the time and clears the expired flag.
    let account = repo.mark_checked(account, now).await?;
    assert_eq!(account.last_check_at, now.timestamp());
    assert!(!account.is_expired_cookie);

    // A cookie expiry flags the account without touching last_status.
    let account = repo.mark_cookie_expired(account, now).await?;
    assert!(account.is_expired_cookie);
    assert_eq!(account.last_cookie_notification_at, now.timestamp());
    assert_eq!(account.last_status, "good");

    // A periodic update stamps both delivery timestamps.
    let account = repo.mark_notified(account, now).await?;
    assert_eq!(account.last_check_at, now.timestamp());
    assert_eq!(account.last_notification_at, now.timestamp());

    // Persisting a new classification only changes the status.
    let account = repo.set_status(account, Status::Shadowban).await?;
    assert_eq!(account.last_status, "shadowban");
    assert!(account.is_expired_cookie);

    Ok(())
}
