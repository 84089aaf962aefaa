//! In-process event bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use infinity_domain::error::InfinityError;
use infinity_domain::event::Event;

use crate::ports::EventPublisher;

/// Fans loop transitions out to every connected surface.
///
/// Publishing succeeds even when no surface is listening; the event is
/// dropped.
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Receiver for events published *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), InfinityError>> + Send {
        // Only fails with zero receivers.
        let _ = self.sender.send(event);
        async { Ok(()) }
    }
}
