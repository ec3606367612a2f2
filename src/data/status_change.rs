use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::account::Status;

pub struct StatusChangeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusChangeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a status-change record for an account
    ///
    /// # Arguments
    /// - `account_id`: ID of the account the transition belongs to
    /// - `status`: The newly classified status
    ///
    /// # Returns
    /// - `Ok(Model)`: The created record
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        account_id: i32,
        status: Status,
    ) -> Result<entity::status_change::Model, DbErr> {
        entity::status_change::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the most recent status changes for an account, newest first
    ///
    /// # Arguments
    /// - `account_id`: Account ID
    /// - `limit`: Maximum number of records to return
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Records ordered by creation time descending
    /// - `Err(DbErr)`: Database error
    pub async fn get_recent_by_account(
        &self,
        account_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::status_change::Model>, DbErr> {
        entity::prelude::StatusChange::find()
            .filter(entity::status_change::Column::AccountId.eq(account_id))
            .order_by_desc(entity::status_change::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets all status changes for an account
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All records for the account
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_account(
        &self,
        account_id: i32,
    ) -> Result<Vec<entity::status_change::Model>, DbErr> {
        entity::prelude::StatusChange::find()
            .filter(entity::status_change::Column::AccountId.eq(account_id))
            .all(self.db)
            .await
    }
}
