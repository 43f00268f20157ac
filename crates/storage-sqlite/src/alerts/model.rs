//! Database models for alerts.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use plata_core::alerts::{Alert, NewAlert};

/// Database model for alerts. `created_at` holds epoch milliseconds and
/// is nullable because rows written by early app versions miss it.
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::alerts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct AlertDB {
    pub id: String,
    pub owner_user_id: String,
    pub title: String,
    pub message: String,
    pub category_tag: String,
    pub created_at: Option<i64>,
    pub read: bool,
}

/// Database model for inserting a new alert.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::alerts)]
#[serde(rename_all = "camelCase")]
pub struct NewAlertDB {
    pub id: String,
    pub owner_user_id: String,
    pub title: String,
    pub message: String,
    pub category_tag: String,
    pub created_at: Option<i64>,
    pub read: bool,
}

impl From<AlertDB> for Alert {
    fn from(db: AlertDB) -> Self {
        Self {
            id: db.id,
            owner_user_id: db.owner_user_id,
            title: db.title,
            message: db.message,
            category_tag: db.category_tag,
            created_at: db.created_at.and_then(DateTime::<Utc>::from_timestamp_millis),
            read: db.read,
        }
    }
}

impl NewAlertDB {
    /// Builds the insertable row; id and timestamp are assigned here and
    /// `read` always starts false.
    pub fn from_domain(user_id: &str, new_alert: NewAlert) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_user_id: user_id.to_string(),
            title: new_alert.title,
            message: new_alert.message,
            category_tag: new_alert.category_tag,
            created_at: Some(Utc::now().timestamp_millis()),
            read: false,
        }
    }
}
