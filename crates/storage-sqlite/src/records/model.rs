//! Database models for financial records.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use plata_core::errors::{DatabaseError, Error};
use plata_core::money::{parse_stored_amount, to_stored_amount};
use plata_core::records::{FinancialRecord, NewRecord, RecordKind};

/// Database model for financial records. Amounts are stored as decimal
/// strings; legacy rows may still carry grouped values ("250.000"),
/// which the tolerant parser handles on read.
#[derive(
    Queryable, Identifiable, AsChangeset, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RecordDB {
    pub id: String,
    pub owner_user_id: String,
    pub kind: String,
    pub name: String,
    pub amount: String,
    pub record_date: String,
    pub category: String,
    pub target_amount: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for inserting a new record.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::records)]
#[serde(rename_all = "camelCase")]
pub struct NewRecordDB {
    pub id: String,
    pub owner_user_id: String,
    pub kind: String,
    pub name: String,
    pub amount: String,
    pub record_date: String,
    pub category: String,
    pub target_amount: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<RecordDB> for FinancialRecord {
    type Error = Error;

    fn try_from(db: RecordDB) -> Result<Self, Error> {
        let kind = RecordKind::from_str_loose(&db.kind).ok_or_else(|| {
            Error::Database(DatabaseError::Internal(format!(
                "unknown record kind '{}' for record {}",
                db.kind, db.id
            )))
        })?;
        Ok(Self {
            id: db.id,
            owner_user_id: db.owner_user_id,
            kind,
            name: db.name,
            amount: parse_stored_amount(&db.amount),
            date: db.record_date,
            category: db.category,
            target_amount: db.target_amount.as_deref().map(parse_stored_amount),
            created_at: db.created_at.and_utc(),
            updated_at: db.updated_at.and_utc(),
        })
    }
}

impl NewRecordDB {
    /// Builds the insertable row; the id and both timestamps are assigned
    /// here, not by the caller.
    pub fn from_domain(user_id: &str, new_record: NewRecord) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_user_id: user_id.to_string(),
            kind: new_record.kind.as_str().to_string(),
            name: new_record.name,
            amount: to_stored_amount(new_record.amount),
            record_date: new_record.date,
            category: new_record.category,
            target_amount: new_record.target_amount.map(to_stored_amount),
            created_at: now,
            updated_at: now,
        }
    }
}
