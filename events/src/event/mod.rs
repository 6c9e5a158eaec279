//! Typed events with explicit lifecycle control.
//!
//! Two sibling containers share the [`Event`] contract:
//!
//! - [`SingleEvent`]: at most one listener; binding replaces the previous one.
//! - [`BroadcastEvent`]: any number of listeners addressed by [`SubscriptionId`].
//!
//! Both are parameterized by the payload type `Args` delivered to listeners. Use the value
//! type directly for one argument, a tuple for several, and `()` for none.
//!
//! # Thread Safety
//!
//! Events are single-threaded: listeners are plain `FnMut` closures and no operation
//! synchronizes. Callers sharing an event across threads must supply their own locking.
//! Only the [`Commands`] handle is `Send + Sync`.

pub mod broadcast;
pub mod command;
pub mod error;
pub mod single;
pub mod status;

pub use broadcast::{BroadcastEvent, SubscriptionId};
pub use command::{Command, CommandBuffer, Commands};
pub use error::{BroadcastError, EventError, ListenerFailure};
pub use single::SingleEvent;
pub use status::EventStatus;

/// Boxed listener stored by both event variants.
pub(crate) type Callback<Args> = Box<dyn FnMut(Args)>;

/// Lifecycle surface shared by every event variant.
///
/// The trait is object safe, so code that only pauses, resumes or tears down events can hold
/// them as `&mut dyn Event` without knowing their payload or variant.
pub trait Event {
    /// Returns `true` if at least one listener is registered, regardless of pause state.
    fn is_bound(&self) -> bool;

    /// Removes every listener and moves to [`EventStatus::Unbound`]. Idempotent.
    fn unbind(&mut self);

    /// Moves `Active` to `Paused`. No-op in any other status.
    fn pause(&mut self);

    /// Moves `Paused` to `Active`. No-op in any other status.
    fn resume(&mut self);

    /// Current lifecycle status.
    fn status(&self) -> EventStatus;
}
