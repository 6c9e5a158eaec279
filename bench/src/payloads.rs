//! Payload types and pre-populated events used across benchmarks.
//!
//! Payloads are sized like typical gameplay notifications: a small `Copy` struct that
//! clones for free, and a heap-backed message whose clone allocates.

use std::{cell::Cell, rc::Rc};

use rusty_events::{BroadcastEvent, SingleEvent};

/// Small copyable payload (16 bytes).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Damage {
    pub target: u32,
    pub amount: u32,
    pub crit_multiplier: f64,
}

/// Heap-backed payload; every clone allocates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLine {
    pub channel: u16,
    pub text: String,
}

impl ChatLine {
    pub fn new(text: &str) -> Self {
        Self {
            channel: 0,
            text: text.to_owned(),
        }
    }
}

/// Shared counter bumped by every listener built here, so work cannot be optimized away.
pub type Hits = Rc<Cell<u64>>;

/// A single event bound to a counting listener.
pub fn counting_single(hits: &Hits) -> SingleEvent<Damage> {
    let mut event = SingleEvent::new();
    let hits = hits.clone();
    event.bind(move |damage: Damage| hits.set(hits.get() + u64::from(damage.amount)));
    event
}

/// A broadcast event with `listeners` counting subscribers.
pub fn counting_broadcast<Args: 'static>(listeners: usize, hits: &Hits) -> BroadcastEvent<Args> {
    let mut event = BroadcastEvent::with_capacity(listeners);
    for _ in 0..listeners {
        let hits = hits.clone();
        event.add(move |_: Args| hits.set(hits.get() + 1));
    }
    event
}
