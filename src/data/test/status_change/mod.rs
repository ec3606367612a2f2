use crate::data::status_change::StatusChangeRepository;
use crate::model::account::Status;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod recent;
