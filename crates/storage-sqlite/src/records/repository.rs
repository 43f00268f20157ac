use plata_core::money::{parse_stored_amount, to_stored_amount};
use plata_core::records::{FinancialRecord, NewRecord, RecordKind, RecordRepositoryTrait};
use plata_core::Result;
use rust_decimal::Decimal;

use super::model::{NewRecordDB, RecordDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::records;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct RecordRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RecordRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RecordRepository { pool, writer }
    }

    fn load_scoped(&self, user_id: &str, kind: Option<RecordKind>) -> Result<Vec<FinancialRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = records::table
            .filter(records::owner_user_id.eq(user_id))
            .into_boxed();
        if let Some(kind) = kind {
            query = query.filter(records::kind.eq(kind.as_str()));
        }
        let rows = query
            .load::<RecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(FinancialRecord::try_from).collect()
    }
}

#[async_trait]
impl RecordRepositoryTrait for RecordRepository {
    fn get_by_id(&self, user_id: &str, record_id: &str) -> Result<FinancialRecord> {
        let mut conn = get_connection(&self.pool)?;
        let row = records::table
            .filter(records::id.eq(record_id))
            .filter(records::owner_user_id.eq(user_id))
            .first::<RecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        FinancialRecord::try_from(row)
    }

    fn list_by_kind(&self, user_id: &str, kind: RecordKind) -> Result<Vec<FinancialRecord>> {
        self.load_scoped(user_id, Some(kind))
    }

    fn list_all(&self, user_id: &str) -> Result<Vec<FinancialRecord>> {
        self.load_scoped(user_id, None)
    }

    async fn insert(&self, user_id: &str, new_record: NewRecord) -> Result<FinancialRecord> {
        let row = NewRecordDB::from_domain(user_id, new_record);
        self.writer
            .exec(move |conn| -> Result<FinancialRecord> {
                let inserted = diesel::insert_into(records::table)
                    .values(&row)
                    .returning(RecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                FinancialRecord::try_from(inserted)
            })
            .await
    }

    async fn add_to_amount(
        &self,
        user_id: &str,
        record_id: &str,
        delta: Decimal,
        new_date: Option<String>,
    ) -> Result<FinancialRecord> {
        let user_id = user_id.to_string();
        let record_id = record_id.to_string();
        self.writer
            .exec(move |conn| -> Result<FinancialRecord> {
                // Read and write run in the same writer transaction, so
                // two concurrent top-ups cannot lose each other's delta.
                let current = records::table
                    .filter(records::id.eq(&record_id))
                    .filter(records::owner_user_id.eq(&user_id))
                    .first::<RecordDB>(conn)
                    .map_err(StorageError::from)?;

                let new_amount = parse_stored_amount(&current.amount) + delta;
                let now = chrono::Utc::now().naive_utc();

                diesel::update(records::table.find(&record_id))
                    .set((
                        records::amount.eq(to_stored_amount(new_amount)),
                        records::updated_at.eq(now),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                if let Some(date) = new_date {
                    diesel::update(records::table.find(&record_id))
                        .set(records::record_date.eq(date))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }

                let updated = records::table
                    .find(&record_id)
                    .first::<RecordDB>(conn)
                    .map_err(StorageError::from)?;
                FinancialRecord::try_from(updated)
            })
            .await
    }

    async fn delete(&self, user_id: &str, record_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let record_id = record_id.to_string();
        self.writer
            .exec(move |conn| -> Result<usize> {
                Ok(diesel::delete(
                    records::table
                        .filter(records::id.eq(record_id))
                        .filter(records::owner_user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
