use crate::errors::Result;
use crate::records::records_model::{FinancialRecord, NewRecord, RecordDraft, RecordKind};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for record repository operations. Every query is scoped by the
/// owner's user id; implementations must never cross that boundary.
#[async_trait]
pub trait RecordRepositoryTrait: Send + Sync {
    fn get_by_id(&self, user_id: &str, record_id: &str) -> Result<FinancialRecord>;
    fn list_by_kind(&self, user_id: &str, kind: RecordKind) -> Result<Vec<FinancialRecord>>;
    fn list_all(&self, user_id: &str) -> Result<Vec<FinancialRecord>>;
    async fn insert(&self, user_id: &str, new_record: NewRecord) -> Result<FinancialRecord>;
    /// Adds `delta` to the stored amount, optionally refreshing the
    /// user-facing date, and returns the updated record. Errors with
    /// NotFound when the record vanished.
    async fn add_to_amount(
        &self,
        user_id: &str,
        record_id: &str,
        delta: Decimal,
        new_date: Option<String>,
    ) -> Result<FinancialRecord>;
    /// Returns the number of rows removed (0 when already gone).
    async fn delete(&self, user_id: &str, record_id: &str) -> Result<usize>;
}

/// Trait for record service operations.
#[async_trait]
pub trait RecordServiceTrait: Send + Sync {
    async fn create_record(&self, draft: RecordDraft) -> Result<FinancialRecord>;
    /// Returns the new stored amount.
    async fn increment_amount(&self, record_id: &str, delta: Decimal) -> Result<Decimal>;
    async fn delete_record(&self, record_id: &str) -> Result<()>;
    fn get_record(&self, record_id: &str) -> Result<FinancialRecord>;
    /// Records of one kind for the current user, newest date first.
    fn list_records(&self, kind: RecordKind) -> Result<Vec<FinancialRecord>>;
    fn list_all_records(&self) -> Result<Vec<FinancialRecord>>;
}
