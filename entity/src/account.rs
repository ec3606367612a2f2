use sea_orm::entity::prelude::*;

/// A tracked account registered for automated ban-status checking.
///
/// Timestamps are stored as epoch seconds; `0` means the event has never
/// happened. `last_status` and `notification_target` hold the string forms of
/// the domain enums (`good`/`permaban`/`shadowban`/`unknown`/`invalid_cookie`
/// and `channel`/`dm` respectively).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub title: String,
    pub sso_cookie: String,
    pub last_status: String,
    pub last_check_at: i64,
    pub last_notification_at: i64,
    pub last_cookie_notification_at: i64,
    pub is_expired_cookie: bool,
    pub notification_target: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::status_change::Entity")]
    StatusChange,
}

impl Related<super::status_change::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusChange.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
