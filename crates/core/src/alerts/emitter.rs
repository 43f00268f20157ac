//! Alert emitter implementations for tests and alert-free contexts.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::alerts_model::NewAlert;
use super::alerts_traits::AlertEmitter;

/// No-op implementation for contexts that don't need alerts.
#[derive(Clone, Default)]
pub struct NoOpAlertEmitter;

#[async_trait]
impl AlertEmitter for NoOpAlertEmitter {
    async fn emit(&self, _user_id: &str, _alert: NewAlert) {
        // Intentionally empty - alerts are discarded
    }
}

/// Mock emitter for testing - collects emitted alerts.
#[derive(Clone, Default)]
pub struct MockAlertEmitter {
    emitted: Arc<Mutex<Vec<(String, NewAlert)>>>,
}

impl MockAlertEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected (user id, alert) pairs.
    pub fn emitted(&self) -> Vec<(String, NewAlert)> {
        self.emitted.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.emitted.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.emitted.lock().unwrap().is_empty()
    }

    pub fn clear(&self) {
        self.emitted.lock().unwrap().clear();
    }
}

#[async_trait]
impl AlertEmitter for MockAlertEmitter {
    async fn emit(&self, user_id: &str, alert: NewAlert) {
        self.emitted.lock().unwrap().push((user_id.to_string(), alert));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RecordKind;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_noop_emitter_discards() {
        let emitter = NoOpAlertEmitter;
        emitter
            .emit("uid", NewAlert::record_deleted(RecordKind::Expense, "Mercado"))
            .await;
    }

    #[tokio::test]
    async fn test_mock_emitter_collects() {
        let emitter = MockAlertEmitter::new();
        assert!(emitter.is_empty());

        emitter
            .emit(
                "uid",
                NewAlert::amount_added(RecordKind::Savings, "Viaje", dec!(100000)),
            )
            .await;

        assert_eq!(emitter.len(), 1);
        let (user, alert) = emitter.emitted().pop().unwrap();
        assert_eq!(user, "uid");
        assert_eq!(alert.category_tag, "ahorro");
        assert!(alert.message.contains("$100.000"));
    }
}
