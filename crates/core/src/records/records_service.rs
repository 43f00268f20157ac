use chrono::{Local, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use super::records_model::{FinancialRecord, RecordDraft, RecordKind};
use super::records_traits::{RecordRepositoryTrait, RecordServiceTrait};
use crate::alerts::{AlertEmitter, NewAlert};
use crate::auth::AuthContext;
use crate::constants::RECORD_DATE_FORMAT;
use crate::errors::{Result, ValidationError};

/// Service for managing financial records.
///
/// Every successful mutation also emits a descriptive alert through the
/// injected emitter; emission is best-effort and never rolls back or
/// fails the mutation it describes.
pub struct RecordService {
    repository: Arc<dyn RecordRepositoryTrait>,
    auth: Arc<dyn AuthContext>,
    alerts: Arc<dyn AlertEmitter>,
}

impl RecordService {
    pub fn new(
        repository: Arc<dyn RecordRepositoryTrait>,
        auth: Arc<dyn AuthContext>,
        alerts: Arc<dyn AlertEmitter>,
    ) -> Self {
        Self {
            repository,
            auth,
            alerts,
        }
    }
}

#[async_trait::async_trait]
impl RecordServiceTrait for RecordService {
    async fn create_record(&self, draft: RecordDraft) -> Result<FinancialRecord> {
        let user_id = self.auth.current_user_id()?;
        let new_record = draft.validate()?;
        debug!(
            "creating {} record '{}' for user {}",
            new_record.kind.as_str(),
            new_record.name,
            user_id
        );

        let record = self.repository.insert(&user_id, new_record).await?;

        self.alerts
            .emit(
                &user_id,
                NewAlert::record_created(
                    record.kind,
                    &record.name,
                    record.amount,
                    &record.category,
                    record.target_amount,
                ),
            )
            .await;

        Ok(record)
    }

    async fn increment_amount(&self, record_id: &str, delta: Decimal) -> Result<Decimal> {
        if delta <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount(delta.to_string()).into());
        }
        let user_id = self.auth.current_user_id()?;

        // NotFound surfaces here (unlike delete): without the prior
        // amount there is nothing meaningful to add to.
        let current = self.repository.get_by_id(&user_id, record_id)?;

        // Savings top-ups also refresh the visible date, as the savings
        // screen has always done.
        let new_date = match current.kind {
            RecordKind::Savings => Some(Local::now().format(RECORD_DATE_FORMAT).to_string()),
            _ => None,
        };

        let updated = self
            .repository
            .add_to_amount(&user_id, record_id, delta, new_date)
            .await?;

        self.alerts
            .emit(
                &user_id,
                NewAlert::amount_added(updated.kind, &updated.name, delta),
            )
            .await;

        Ok(updated.amount)
    }

    async fn delete_record(&self, record_id: &str) -> Result<()> {
        let user_id = self.auth.current_user_id()?;

        // Fetch first so the alert can name the record. A vanished id is
        // not an error at this layer.
        let existing = match self.repository.get_by_id(&user_id, record_id) {
            Ok(record) => record,
            Err(e) if e.is_not_found() => return Ok(()),
            Err(e) => return Err(e),
        };

        let deleted = self.repository.delete(&user_id, record_id).await?;
        if deleted > 0 {
            self.alerts
                .emit(
                    &user_id,
                    NewAlert::record_deleted(existing.kind, &existing.name),
                )
                .await;
        }
        Ok(())
    }

    fn get_record(&self, record_id: &str) -> Result<FinancialRecord> {
        let user_id = self.auth.current_user_id()?;
        self.repository.get_by_id(&user_id, record_id)
    }

    fn list_records(&self, kind: RecordKind) -> Result<Vec<FinancialRecord>> {
        let user_id = self.auth.current_user_id()?;
        let mut records = self.repository.list_by_kind(&user_id, kind)?;
        sort_by_date_desc(&mut records);
        Ok(records)
    }

    fn list_all_records(&self) -> Result<Vec<FinancialRecord>> {
        let user_id = self.auth.current_user_id()?;
        let mut records = self.repository.list_all(&user_id)?;
        sort_by_date_desc(&mut records);
        Ok(records)
    }
}

/// Orders records newest-dated first. Dates are user-entered `d/M/yyyy`
/// strings; unparsable ones sort last, ties fall back to creation time.
pub fn sort_by_date_desc(records: &mut [FinancialRecord]) {
    records.sort_by(|a, b| {
        let da = NaiveDate::parse_from_str(&a.date, RECORD_DATE_FORMAT).ok();
        let db = NaiveDate::parse_from_str(&b.date, RECORD_DATE_FORMAT).ok();
        db.cmp(&da).then_with(|| b.created_at.cmp(&a.created_at))
    });
}
