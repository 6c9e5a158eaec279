//! Lightweight typed events for decoupled component communication.
//!
//! A publisher owns an event and fires it; subscribers attach listeners without the publisher
//! knowing who they are. Two containers are provided:
//!
//! - [`SingleEvent`] holds at most one listener.
//! - [`BroadcastEvent`] holds any number of listeners, each removable by [`SubscriptionId`].
//!
//! Both move through the same [`EventStatus`] lifecycle (`Unbound`, `Active`, `Paused`) and
//! implement the [`Event`] contract.
//!
//! ```rust
//! use rusty_events::{BroadcastEvent, EventStatus};
//!
//! let mut on_damage = BroadcastEvent::<u32>::new();
//! let id = on_damage.add(|amount| println!("hud: -{amount}"));
//! on_damage.add(|amount| println!("audio: hit for {amount}"));
//!
//! on_damage.broadcast(12);
//!
//! assert!(on_damage.remove(id));
//! on_damage.pause();
//! on_damage.broadcast(3); // suppressed
//! assert_eq!(on_damage.status(), EventStatus::Paused);
//! ```
//!
//! Diagnostics go through the `log` facade; the library never installs a logger.

pub mod event;
pub(crate) mod util;

pub use event::{
    BroadcastError, BroadcastEvent, Command, CommandBuffer, Commands, Event, EventError,
    EventStatus, ListenerFailure, SingleEvent, SubscriptionId,
};
