use super::*;
use crate::data::status_change::StatusChangeRepository;

/// Tests deleting an account together with its history.
///
/// Verifies that the transactional delete removes the account and all of
/// its status-change records while leaving other accounts and their
/// history untouched.
///
/// Expected: account and history gone, unrelated rows intact
#[tokio::test]
async fn deletes_account_and_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_account(db, "111", "222").await?;
    let survivor = factory::create_account(db, "111", "222").await?;

    factory::create_status_change(db, doomed.id, "shadowban").await?;
    factory::create_status_change(db, doomed.id, "permaban").await?;
    factory::create_status_change(db, survivor.id, "good").await?;

    let repo = AccountRepository::new(db);
    repo.delete_with_history(doomed.id).await?;

    assert!(repo.get_by_id(doomed.id).await?.is_none());
    assert!(repo.get_by_id(survivor.id).await?.is_some());

    let change_repo = StatusChangeRepository::new(db);
    assert!(change_repo.get_by_account(doomed.id).await?.is_empty());
    assert_eq!(change_repo.get_by_account(survivor.id).await?.len(), 1);

    Ok(())
}

/// Tests deleting an account that has no history.
///
/// Expected: Ok, account removed
#[tokio::test]
async fn deletes_account_without_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db, "111", "222").await?;

    let repo = AccountRepository::new(db);
    repo.delete_with_history(account.id).await?;

    assert!(repo.get_by_id(account.id).await?.is_none());

    Ok(())
}
