use std::sync::Arc;

use async_trait::async_trait;
use log::{error, warn};
use tokio::sync::broadcast;

use super::alerts_model::{ordered_feed, Alert, NewAlert};
use super::alerts_traits::{AlertEmitter, AlertRepositoryTrait, AlertServiceTrait};
use super::feed::{AlertSubscription, FEED_CHANNEL_CAPACITY};
use crate::auth::AuthContext;
use crate::errors::Result;

/// Service for the alert feed: stores alerts spawned by record
/// mutations, manages read-state transitions, and republishes the full
/// ordered snapshot to subscribers after every change.
pub struct AlertService {
    repository: Arc<dyn AlertRepositoryTrait>,
    auth: Arc<dyn AuthContext>,
    publisher: broadcast::Sender<Vec<Alert>>,
}

impl AlertService {
    pub fn new(repository: Arc<dyn AlertRepositoryTrait>, auth: Arc<dyn AuthContext>) -> Self {
        let (publisher, _) = broadcast::channel(FEED_CHANNEL_CAPACITY);
        Self {
            repository,
            auth,
            publisher,
        }
    }

    /// Pushes the owner's current ordered snapshot to all subscribers.
    /// Read failures are logged, not propagated: the feed is advisory.
    fn republish(&self, user_id: &str) {
        match self.repository.list(user_id) {
            Ok(alerts) => {
                // send() only errors when nobody is subscribed.
                let _ = self.publisher.send(ordered_feed(alerts));
            }
            Err(e) => warn!("could not refresh alert feed: {}", e),
        }
    }
}

#[async_trait]
impl AlertServiceTrait for AlertService {
    fn list_alerts(&self) -> Result<Vec<Alert>> {
        let user_id = self.auth.current_user_id()?;
        Ok(ordered_feed(self.repository.list(&user_id)?))
    }

    fn subscribe(&self, on_update: Box<dyn Fn(Vec<Alert>) + Send + Sync>) -> Result<AlertSubscription> {
        let user_id = self.auth.current_user_id()?;

        // Register with the channel before reading the snapshot so a
        // mutation landing in between is buffered, not lost.
        let rx = self.publisher.subscribe();

        // First delivery is immediate so screens leave their loading
        // state without waiting for a mutation.
        on_update(ordered_feed(self.repository.list(&user_id)?));

        Ok(AlertSubscription::spawn(rx, on_update))
    }

    async fn mark_read(&self, alert_id: &str) -> Result<()> {
        let user_id = self.auth.current_user_id()?;
        let updated = self.repository.mark_read(&user_id, alert_id).await?;
        // 0 rows means the alert vanished or was already gone; both are
        // fine, the operation is idempotent.
        if updated > 0 {
            self.republish(&user_id);
        }
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<usize> {
        let user_id = self.auth.current_user_id()?;

        // One read of the full set, then per-alert writes. Alerts created
        // concurrently during the sweep are picked up by the next one.
        let alerts = self.repository.list(&user_id)?;
        let mut updated = 0;
        for alert in alerts.iter().filter(|a| !a.read) {
            updated += self.repository.mark_read(&user_id, &alert.id).await?;
        }

        if updated > 0 {
            self.republish(&user_id);
        }
        Ok(updated)
    }

    async fn delete_alert(&self, alert_id: &str) -> Result<()> {
        let user_id = self.auth.current_user_id()?;
        let deleted = self.repository.delete(&user_id, alert_id).await?;
        if deleted > 0 {
            self.republish(&user_id);
        }
        Ok(())
    }
}

#[async_trait]
impl AlertEmitter for AlertService {
    async fn emit(&self, user_id: &str, alert: NewAlert) {
        match self.repository.insert(user_id, alert).await {
            Ok(_) => self.republish(user_id),
            // Swallowed: the record mutation this alert describes already
            // succeeded and must not appear to fail.
            Err(e) => error!("failed to store alert: {}", e),
        }
    }
}
