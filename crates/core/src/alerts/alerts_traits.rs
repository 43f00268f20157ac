use crate::alerts::alerts_model::{Alert, NewAlert};
use crate::alerts::feed::AlertSubscription;
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for alert repository operations. Every operation is scoped to
/// one owner; implementations must never return another user's rows.
#[async_trait]
pub trait AlertRepositoryTrait: Send + Sync {
    fn list(&self, user_id: &str) -> Result<Vec<Alert>>;
    async fn insert(&self, user_id: &str, new_alert: NewAlert) -> Result<Alert>;
    /// Returns the number of rows updated; 0 means the alert vanished,
    /// which callers treat as success.
    async fn mark_read(&self, user_id: &str, alert_id: &str) -> Result<usize>;
    async fn delete(&self, user_id: &str, alert_id: &str) -> Result<usize>;
}

/// Trait for alert feed operations.
#[async_trait]
pub trait AlertServiceTrait: Send + Sync {
    fn list_alerts(&self) -> Result<Vec<Alert>>;
    fn subscribe(&self, on_update: Box<dyn Fn(Vec<Alert>) + Send + Sync>) -> Result<AlertSubscription>;
    async fn mark_read(&self, alert_id: &str) -> Result<()>;
    async fn mark_all_read(&self) -> Result<usize>;
    async fn delete_alert(&self, alert_id: &str) -> Result<()>;
}

/// Trait for emitting alerts after record mutations.
///
/// # Design Rules
///
/// - `emit()` is best-effort: failures are logged and swallowed, a record
///   mutation must never appear to fail because alerting failed
/// - Implementations receive the owner id explicitly so emission stays
///   correct even if the session changes mid-flight
#[async_trait]
pub trait AlertEmitter: Send + Sync {
    /// Stores a new alert for `user_id`. Never fails from the caller's
    /// perspective.
    async fn emit(&self, user_id: &str, alert: NewAlert);
}
