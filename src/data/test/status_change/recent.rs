use super::*;
use test_utils::factory::status_change::StatusChangeFactory;

/// Tests the recent-history query backing `/accountlogs`.
///
/// Verifies that records come back newest first and capped at the limit.
///
/// Expected: newest-first order, at most `limit` rows
#[tokio::test]
async fn returns_newest_records_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db, "111", "222").await?;

    let statuses = ["good", "shadowban", "good", "permaban", "good", "shadowban"];
    for (index, status) in statuses.iter().enumerate() {
        StatusChangeFactory::new(db, account.id, *status)
            .created_at(Utc::now() - Duration::hours((statuses.len() - index) as i64))
            .build()
            .await?;
    }

    let repo = StatusChangeRepository::new(db);
    let recent = repo.get_recent_by_account(account.id, 5).await?;

    assert_eq!(recent.len(), 5);
    // Newest first: the last inserted status leads.
    assert_eq!(recent[0].status, "shadowban");
    assert!(recent
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));

    Ok(())
}

/// Tests the recent-history query for an account with no history.
///
/// Expected: empty result
#[tokio::test]
async fn returns_empty_for_unlogged_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db, "111", "222").await?;

    let repo = StatusChangeRepository::new(db);
    let recent = repo.get_recent_by_account(account.id, 5).await?;

    assert!(recent.is_empty());

    Ok(())
}
