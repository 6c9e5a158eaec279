//! Deferred lifecycle commands for events.
//!
//! A listener runs while its event is mutably borrowed, so it cannot call
//! [`remove()`](super::BroadcastEvent::remove) or [`pause()`](super::Event::pause) on that
//! event directly. Instead it captures a [`Commands`] handle and queues the request. The
//! owning event drains its queue at well-defined flush points:
//!
//! - at the start of every `&mut self` operation
//! - before each listener invocation during a broadcast
//! - after the listener returns from a single-event execution
//!
//! Commands apply in FIFO order. Read accessors (`status()`, `is_bound()`) take `&self` and
//! only observe commands that have already been applied.
//!
//! # Example
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//! use rusty_events::{BroadcastEvent, SubscriptionId};
//!
//! let mut event = BroadcastEvent::<u32>::new();
//! let commands = event.commands();
//!
//! // A listener that unsubscribes itself after the first call.
//! let own_id: Rc<RefCell<Option<SubscriptionId>>> = Rc::default();
//! let slot = own_id.clone();
//! let id = event.add(move |_| {
//!     if let Some(id) = *slot.borrow() {
//!         commands.remove(id);
//!     }
//! });
//! *own_id.borrow_mut() = Some(id);
//!
//! event.broadcast(1);
//! assert!(!event.contains(id));
//! ```

use std::sync::Arc;

use crossbeam::queue::SegQueue;

use crate::event::SubscriptionId;

/// A deferred event mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Remove one subscription. Ignored by events without subscription ids.
    Remove {
        /// The subscription to drop.
        id: SubscriptionId,
    },
    /// Suppress listeners until resumed.
    Pause,
    /// Re-enable a paused event.
    Resume,
    /// Drop every listener.
    Unbind,
}

/// Lock-free FIFO queue of pending [`Command`]s.
///
/// Uses `crossbeam::queue::SegQueue`, so pushing never blocks and a [`Commands`] handle can
/// be moved to wherever the request originates.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    commands: SegQueue<Command>,
}

impl CommandBuffer {
    /// Create a new empty command buffer.
    pub fn new() -> Self {
        Self {
            commands: SegQueue::new(),
        }
    }

    /// Queue a command.
    pub fn push(&self, command: Command) {
        self.commands.push(command);
    }

    /// Take the oldest queued command, if any.
    #[inline]
    pub fn pop(&self) -> Option<Command> {
        self.commands.pop()
    }

    /// Drain all commands in FIFO order.
    pub fn drain(&self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.commands.len());
        while let Some(cmd) = self.commands.pop() {
            commands.push(cmd);
        }
        commands
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of queued commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Cloneable handle for queueing commands against one event.
///
/// Obtained from `commands()` on [`SingleEvent`](super::SingleEvent) or
/// [`BroadcastEvent`](super::BroadcastEvent). All clones feed the same queue.
#[derive(Debug, Clone)]
pub struct Commands {
    buffer: Arc<CommandBuffer>,
}

impl Commands {
    pub(crate) fn new(buffer: Arc<CommandBuffer>) -> Self {
        Self { buffer }
    }

    /// Queue removal of a subscription.
    pub fn remove(&self, id: SubscriptionId) {
        self.buffer.push(Command::Remove { id });
    }

    /// Queue a pause.
    pub fn pause(&self) {
        self.buffer.push(Command::Pause);
    }

    /// Queue a resume.
    pub fn resume(&self) {
        self.buffer.push(Command::Resume);
    }

    /// Queue an unbind.
    pub fn unbind(&self) {
        self.buffer.push(Command::Unbind);
    }

    /// Queue an arbitrary command.
    pub fn push(&self, command: Command) {
        self.buffer.push(command);
    }

    /// Number of commands still waiting for the event to flush them.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}
