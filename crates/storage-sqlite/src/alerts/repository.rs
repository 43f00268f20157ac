use plata_core::alerts::{Alert, AlertRepositoryTrait, NewAlert};
use plata_core::Result;

use super::model::{AlertDB, NewAlertDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::alerts;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct AlertRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AlertRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AlertRepository { pool, writer }
    }
}

#[async_trait]
impl AlertRepositoryTrait for AlertRepository {
    fn list(&self, user_id: &str) -> Result<Vec<Alert>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = alerts::table
            .filter(alerts::owner_user_id.eq(user_id))
            .load::<AlertDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Alert::from).collect())
    }

    async fn insert(&self, user_id: &str, new_alert: NewAlert) -> Result<Alert> {
        let row = NewAlertDB::from_domain(user_id, new_alert);
        self.writer
            .exec(move |conn| -> Result<Alert> {
                let inserted = diesel::insert_into(alerts::table)
                    .values(&row)
                    .returning(AlertDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Alert::from(inserted))
            })
            .await
    }

    async fn mark_read(&self, user_id: &str, alert_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let alert_id = alert_id.to_string();
        self.writer
            .exec(move |conn| -> Result<usize> {
                // Filtering on read = false makes the second call a no-op
                // that reports 0 rows.
                Ok(diesel::update(
                    alerts::table
                        .filter(alerts::id.eq(alert_id))
                        .filter(alerts::owner_user_id.eq(user_id))
                        .filter(alerts::read.eq(false)),
                )
                .set(alerts::read.eq(true))
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete(&self, user_id: &str, alert_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let alert_id = alert_id.to_string();
        self.writer
            .exec(move |conn| -> Result<usize> {
                Ok(diesel::delete(
                    alerts::table
                        .filter(alerts::id.eq(alert_id))
                        .filter(alerts::owner_user_id.eq(user_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
