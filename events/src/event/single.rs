//! Single-subscriber event.
//!
//! [`SingleEvent`] holds at most one listener. Binding replaces whatever was bound before,
//! silently dropping the previous listener.
//!
//! # Example
//!
//! ```rust
//! use rusty_events::{EventStatus, SingleEvent};
//!
//! let mut on_score = SingleEvent::<(u32, String)>::new();
//! on_score.bind(|(points, player)| println!("{player} scored {points}"));
//!
//! on_score.execute((10, "ada".into()));
//!
//! on_score.pause();
//! on_score.execute((20, "ada".into())); // suppressed
//! assert_eq!(on_score.status(), EventStatus::Paused);
//! ```

use std::{fmt, sync::Arc};

use log::debug;

use crate::event::{
    Callback, Command, CommandBuffer, Commands, Event, EventError, EventStatus,
    error::UNBOUND_INVOCATION,
};

/// An event that delivers `Args` to at most one listener.
///
/// `status()` is `Unbound` exactly when no listener is bound, and every
/// [`bind()`](Self::bind) leaves the event `Active` regardless of its prior status.
pub struct SingleEvent<Args> {
    callable: Option<Callback<Args>>,
    status: EventStatus,
    commands: Arc<CommandBuffer>,
}

impl<Args> SingleEvent<Args> {
    /// Creates an unbound event.
    pub fn new() -> Self {
        Self {
            callable: None,
            status: EventStatus::Unbound,
            commands: Arc::new(CommandBuffer::new()),
        }
    }

    /// Binds `listener`, dropping any previously bound listener, and activates the event.
    pub fn bind<F>(&mut self, listener: F)
    where
        F: FnMut(Args) + 'static,
    {
        self.apply_commands();
        if self.callable.replace(Box::new(listener)).is_some() {
            debug!("single event listener replaced");
        } else {
            debug!("single event listener bound");
        }
        self.status = EventStatus::Active;
    }

    /// Invokes the listener if one is bound and the event is active, otherwise does nothing.
    ///
    /// A panic raised by the listener propagates to the caller.
    pub fn execute(&mut self, args: Args) {
        let _ = self.try_execute(args);
    }

    /// Like [`execute()`](Self::execute), but reports why the listener was not invoked.
    pub fn try_execute(&mut self, args: Args) -> Result<(), EventError> {
        self.apply_commands();
        let Some(callable) = self.callable.as_mut() else {
            return Err(EventError::Unbound);
        };
        if !self.status.is_active() {
            return Err(EventError::Paused);
        }
        callable(args);
        self.apply_commands();
        Ok(())
    }

    /// Invokes the listener if the event is active, skipping the binding check.
    ///
    /// # Panics
    ///
    /// Panics if no listener is bound. Binding first is the caller's precondition; the event
    /// does not treat it as a silent no-op.
    pub fn execute_unchecked(&mut self, args: Args) {
        self.apply_commands();
        let Some(callable) = self.callable.as_mut() else {
            panic!("{UNBOUND_INVOCATION}");
        };
        if self.status.is_active() {
            callable(args);
            self.apply_commands();
        }
    }

    /// Returns `true` if a listener is bound, paused or not.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.callable.is_some()
    }

    /// Drops the listener and moves to `Unbound`. Idempotent.
    pub fn unbind(&mut self) {
        self.apply_commands();
        self.clear();
    }

    /// Suppresses the listener if the event is active.
    pub fn pause(&mut self) {
        self.apply_commands();
        self.set_status(self.status.paused());
    }

    /// Re-enables the listener if the event is paused.
    pub fn resume(&mut self) {
        self.apply_commands();
        self.set_status(self.status.resumed());
    }

    /// Current lifecycle status.
    #[inline]
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// Handle for queueing lifecycle changes from inside the listener.
    ///
    /// `Remove` commands are ignored by single events.
    pub fn commands(&self) -> Commands {
        Commands::new(self.commands.clone())
    }

    fn clear(&mut self) {
        if self.callable.take().is_some() {
            debug!("single event unbound");
        }
        self.status = EventStatus::Unbound;
    }

    fn set_status(&mut self, status: EventStatus) {
        if status != self.status {
            debug!("single event {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }

    fn apply_commands(&mut self) {
        while let Some(command) = self.commands.pop() {
            match command {
                Command::Remove { .. } => {}
                Command::Pause => self.set_status(self.status.paused()),
                Command::Resume => self.set_status(self.status.resumed()),
                Command::Unbind => self.clear(),
            }
        }
    }
}

impl<Args> Default for SingleEvent<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for SingleEvent<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleEvent")
            .field("status", &self.status)
            .field("bound", &self.is_bound())
            .finish_non_exhaustive()
    }
}

impl<Args> Event for SingleEvent<Args> {
    fn is_bound(&self) -> bool {
        SingleEvent::is_bound(self)
    }

    fn unbind(&mut self) {
        SingleEvent::unbind(self);
    }

    fn pause(&mut self) {
        SingleEvent::pause(self);
    }

    fn resume(&mut self) {
        SingleEvent::resume(self);
    }

    fn status(&self) -> EventStatus {
        SingleEvent::status(self)
    }
}
