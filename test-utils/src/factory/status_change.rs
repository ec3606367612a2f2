//! Status-change factory for creating test status-change entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test status-change entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::status_change::StatusChangeFactory;
///
/// let change = StatusChangeFactory::new(&db, account.id, "shadowban")
///     .created_at(Utc::now() - chrono::Duration::hours(2))
///     .build()
///     .await?;
/// ```
pub struct StatusChangeFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: i32,
    status: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> StatusChangeFactory<'a> {
    /// Creates a new StatusChangeFactory with default values.
    ///
    /// Defaults:
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `account_id` - ID of the account the change belongs to
    /// - `status` - New status value (string form, e.g. `"permaban"`)
    ///
    /// # Returns
    /// - `StatusChangeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, account_id: i32, status: impl Into<String>) -> Self {
        Self {
            db,
            account_id,
            status: status.into(),
            created_at: Utc::now(),
        }
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the status-change entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::status_change::Model)` - Created status-change entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::status_change::Model, DbErr> {
        entity::status_change::ActiveModel {
            id: ActiveValue::NotSet,
            account_id: ActiveValue::Set(self.account_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a status-change entry with default values for the specified account.
///
/// Shorthand for `StatusChangeFactory::new(db, account_id, status).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `account_id` - ID of the account the change belongs to
/// - `status` - New status value (string form)
///
/// # Returns
/// - `Ok(entity::status_change::Model)` - Created status-change entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_status_change(
    db: &DatabaseConnection,
    account_id: i32,
    status: impl Into<String>,
) -> Result<entity::status_change::Model, DbErr> {
    StatusChangeFactory::new(db, account_id, status).build().await
}
