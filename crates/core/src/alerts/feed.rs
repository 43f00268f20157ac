//! Live alert feed subscriptions.
//!
//! Every alert mutation republishes the owner's entire alert set; there
//! are no incremental diffs. Consumers treat each delivery as the
//! authoritative snapshot and replace prior state wholesale.

use log::{debug, warn};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::alerts_model::Alert;

/// Buffered snapshots per subscriber before old ones are dropped.
pub(crate) const FEED_CHANNEL_CAPACITY: usize = 16;

/// Handle to a live alert subscription.
///
/// Delivery stops when `cancel()` is called or the handle is dropped;
/// a subscription must not outlive the screen that consumes it.
pub struct AlertSubscription {
    task: JoinHandle<()>,
}

impl AlertSubscription {
    pub(crate) fn spawn(
        mut rx: broadcast::Receiver<Vec<Alert>>,
        on_update: Box<dyn Fn(Vec<Alert>) + Send + Sync>,
    ) -> Self {
        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(snapshot) => on_update(snapshot),
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        // Snapshots are full-state, so skipping stale ones
                        // loses nothing once the next delivery arrives.
                        warn!("alert feed lagged, skipped {} stale snapshots", missed);
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        debug!("alert feed publisher dropped, ending subscription");
                        break;
                    }
                }
            }
        });
        Self { task }
    }

    /// Stops delivery. Idempotent.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// True once the subscription is no longer delivering.
    pub fn is_cancelled(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AlertSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
