//! Alerts module - domain models, feed service, and emitter traits.

mod alerts_model;
mod alerts_service;
mod alerts_traits;
mod emitter;
mod feed;


pub use alerts_model::{ordered_feed, unread_count, Alert, NewAlert};
pub use alerts_service::AlertService;
pub use alerts_traits::{AlertEmitter, AlertRepositoryTrait, AlertServiceTrait};
pub use emitter::{MockAlertEmitter, NoOpAlertEmitter};
pub use feed::AlertSubscription;
