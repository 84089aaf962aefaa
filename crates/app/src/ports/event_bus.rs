//! Event bus port — fan-out of loop transitions to other surfaces.

use std::future::Future;

use infinity_domain::error::InfinityError;
use infinity_domain::event::Event;

/// Publishes events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), InfinityError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), InfinityError>> + Send {
        (**self).publish(event)
    }
}
