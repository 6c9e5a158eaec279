use std::any::Any;

use crate::event::SubscriptionId;

/// Panic message for unchecked invocation of an event with no listener.
pub(crate) const UNBOUND_INVOCATION: &str = "unchecked invocation of an unbound event";

/// Why a checked single-event execution did not reach its listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// No listener is bound.
    #[error("no listener is bound")]
    Unbound,
    /// A listener is bound but the event is paused.
    #[error("event is paused")]
    Paused,
}

/// One listener that panicked during an isolated broadcast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("listener {id} panicked: {}", .message.as_deref().unwrap_or("<non-string payload>"))]
pub struct ListenerFailure {
    /// The subscription whose listener panicked.
    pub id: SubscriptionId,
    /// The panic message, when the payload was a string.
    pub message: Option<String>,
}

impl ListenerFailure {
    pub(crate) fn from_panic(id: SubscriptionId, payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned());
        Self { id, message }
    }
}

/// Returned by [`broadcast_isolated()`](super::BroadcastEvent::broadcast_isolated) when at
/// least one listener panicked. The remaining listeners still ran.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} of {} listeners failed during broadcast", .failures.len(), .invoked)]
pub struct BroadcastError {
    /// Listeners invoked in this broadcast, failed ones included.
    pub invoked: usize,
    /// Failures in invocation order.
    pub failures: Vec<ListenerFailure>,
}
