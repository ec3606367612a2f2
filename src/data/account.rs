use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};

use crate::model::account::{CreateAccountParam, NotificationTarget, Status};

pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new tracked account
    ///
    /// The account starts with status `unknown`, zeroed timestamps, a valid
    /// cookie flag, and channel delivery.
    ///
    /// # Arguments
    /// - `param`: Registration parameters (owner, guild, channel, title, credential)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created account
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreateAccountParam) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            guild_id: ActiveValue::Set(param.guild_id),
            channel_id: ActiveValue::Set(param.channel_id),
            title: ActiveValue::Set(param.title),
            sso_cookie: ActiveValue::Set(param.sso_cookie),
            last_status: ActiveValue::Set(Status::Unknown.as_str().to_string()),
            last_check_at: ActiveValue::Set(0),
            last_notification_at: ActiveValue::Set(0),
            last_cookie_notification_at: ActiveValue::Set(0),
            is_expired_cookie: ActiveValue::Set(false),
            notification_target: ActiveValue::Set(NotificationTarget::Channel.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an account by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Account found
    /// - `Ok(None)`: No account with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(id).one(self.db).await
    }

    /// Gets all tracked accounts
    ///
    /// Used by the poller at the start of every cycle; unbounded by design.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: All accounts
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<entity::account::Model>, DbErr> {
        entity::prelude::Account::find().all(self.db).await
    }

    /// Finds an account by owning user and title
    ///
    /// Titles are unique per (user, guild) at the command layer; this lookup
    /// backs the duplicate check during registration.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Account found
    /// - `Ok(None)`: No such account
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_user_and_title(
        &self,
        user_id: &str,
        title: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::UserId.eq(user_id))
            .filter(entity::account::Column::Title.eq(title))
            .one(self.db)
            .await
    }

    /// Gets all accounts owned by a user within a guild
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: The user's accounts in the guild
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_user_and_guild(
        &self,
        user_id: &str,
        guild_id: &str,
    ) -> Result<Vec<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::UserId.eq(user_id))
            .filter(entity::account::Column::GuildId.eq(guild_id))
            .all(self.db)
            .await
    }

    /// Gets an account by ID only if it is owned by the given user in the given guild
    ///
    /// Backs the ownership checks of the mutating commands.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Account exists and is owned by the user
    /// - `Ok(None)`: No such account for this owner
    /// - `Err(DbErr)`: Database error
    pub async fn get_owned(
        &self,
        id: i32,
        user_id: &str,
        guild_id: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(id)
            .filter(entity::account::Column::UserId.eq(user_id))
            .filter(entity::account::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }

    /// Replaces the SSO cookie of an account
    ///
    /// Also resets the status to `unknown`, clears the expired-cookie flag,
    /// and zeroes the cookie-notification timestamp so the fresh credential
    /// starts with a clean alert history.
    ///
    /// # Arguments
    /// - `account`: The account to update
    /// - `sso_cookie`: The new credential
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated account
    /// - `Err(DbErr)`: Database error
    pub async fn update_cookie(
        &self,
        account: entity::account::Model,
        sso_cookie: String,
    ) -> Result<entity::account::Model, DbErr> {
        let mut active_model: entity::account::ActiveModel = account.into();
        active_model.sso_cookie = ActiveValue::Set(sso_cookie);
        active_model.last_status = ActiveValue::Set(Status::Unknown.as_str().to_string());
        active_model.is_expired_cookie = ActiveValue::Set(false);
        active_model.last_cookie_notification_at = ActiveValue::Set(0);
        active_model.update(self.db).await
    }

    /// Sets the notification target on every account a user owns in a guild
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of accounts updated
    /// - `Err(DbErr)`: Database error
    pub async fn set_notification_target_for_user(
        &self,
        user_id: &str,
        guild_id: &str,
        target: NotificationTarget,
    ) -> Result<u64, DbErr> {
        use sea_orm::sea_query::Expr;

        let result = entity::prelude::Account::update_many()
            .col_expr(
                entity::account::Column::NotificationTarget,
                Expr::value(target.as_str()),
            )
            .filter(entity::account::Column::UserId.eq(user_id))
            .filter(entity::account::Column::GuildId.eq(guild_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Stamps a successful status check
    ///
    /// Records the check time and clears the expired-cookie flag; a concrete
    /// classification proves the credential still works.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated account
    /// - `Err(DbErr)`: Database error
    pub async fn mark_checked(
        &self,
        account: entity::account::Model,
        now: DateTime<Utc>,
    ) -> Result<entity::account::Model, DbErr> {
        let mut active_model: entity::account::ActiveModel = account.into();
        active_model.last_check_at = ActiveValue::Set(now.timestamp());
        active_model.is_expired_cookie = ActiveValue::Set(false);
        active_model.update(self.db).await
    }

    /// Persists a newly classified status
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated account
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(
        &self,
        account: entity::account::Model,
        status: Status,
    ) -> Result<entity::account::Model, DbErr> {
        let mut active_model: entity::account::ActiveModel = account.into();
        active_model.last_status = ActiveValue::Set(status.as_str().to_string());
        active_model.update(self.db).await
    }

    /// Flags the account's cookie as expired and stamps the alert time
    ///
    /// `last_status` is left untouched: the expired flag suppresses further
    /// checks without discarding the last known classification.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated account
    /// - `Err(DbErr)`: Database error
    pub async fn mark_cookie_expired(
        &self,
        account: entity::account::Model,
        now: DateTime<Utc>,
    ) -> Result<entity::account::Model, DbErr> {
        let mut active_model: entity::account::ActiveModel = account.into();
        active_model.is_expired_cookie = ActiveValue::Set(true);
        active_model.last_cookie_notification_at = ActiveValue::Set(now.timestamp());
        active_model.update(self.db).await
    }

    /// Stamps a delivered periodic update
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated account
    /// - `Err(DbErr)`: Database error
    pub async fn mark_notified(
        &self,
        account: entity::account::Model,
        now: DateTime<Utc>,
    ) -> Result<entity::account::Model, DbErr> {
        let mut active_model: entity::account::ActiveModel = account.into();
        active_model.last_check_at = ActiveValue::Set(now.timestamp());
        active_model.last_notification_at = ActiveValue::Set(now.timestamp());
        active_model.update(self.db).await
    }

    /// Deletes an account together with its status history
    ///
    /// Runs in a transaction: history rows go first, then the account row,
    /// so a partial failure never leaves orphaned log entries.
    ///
    /// # Arguments
    /// - `id`: Account ID
    ///
    /// # Returns
    /// - `Ok(())`: Account and history deleted
    /// - `Err(DbErr)`: Database error; nothing was deleted
    pub async fn delete_with_history(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::StatusChange::delete_many()
            .filter(entity::status_change::Column::AccountId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Account::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}
