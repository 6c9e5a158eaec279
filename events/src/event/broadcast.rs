//! Multi-subscriber event.
//!
//! [`BroadcastEvent`] keeps any number of listeners, each addressable by the
//! [`SubscriptionId`] returned when it was added. A broadcast hands every active listener its
//! own clone of the arguments, in registration order.
//!
//! # Storage
//!
//! Subscribers live in a `Vec` ordered by id. Ids are assigned monotonically, so appending
//! keeps the order, and removal is a binary search followed by a shift. Iteration order is
//! therefore always registration order.
//!
//! # Reentrant mutation
//!
//! Listeners mutate their event through a [`Commands`] handle. Queued commands are flushed
//! before each listener runs, giving live semantics: a subscriber removed by an earlier
//! listener in the same broadcast is skipped, and pausing or unbinding stops the remaining
//! fan-out. The broadcast walks the registry by id cursor, so removals never cause a listener
//! to be skipped or called twice.
//!
//! # Failures
//!
//! By default a panicking listener unwinds through [`broadcast()`](BroadcastEvent::broadcast)
//! and the remaining listeners are not invoked. [`broadcast_isolated()`] opts into catching
//! each listener's panic and continuing.
//!
//! [`broadcast_isolated()`]: BroadcastEvent::broadcast_isolated

use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use log::{debug, trace, warn};

use crate::event::{
    BroadcastError, Callback, Command, CommandBuffer, Commands, Event, EventStatus,
    ListenerFailure, error::UNBOUND_INVOCATION,
};

/// Handle identifying one subscription of a [`BroadcastEvent`].
///
/// Ids start at 0 and increase by one per [`add()`](BroadcastEvent::add). They are never
/// reused within an event's lifetime, except that [`unbind()`](BroadcastEvent::unbind)
/// restarts the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Create a subscription id.
    #[inline]
    pub const fn new(id: u64) -> Self {
        SubscriptionId(id)
    }

    /// Get the raw id value.
    #[inline]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Subscriber<Args> {
    id: SubscriptionId,
    callable: Callback<Args>,
}

/// An event that delivers `Args` to every registered listener.
///
/// `status()` is `Unbound` exactly when no subscriber is registered. Removing the last
/// subscriber moves the event to `Unbound`, even from `Paused`.
pub struct BroadcastEvent<Args> {
    subscribers: Vec<Subscriber<Args>>,
    next_id: u64,
    status: EventStatus,
    commands: Arc<CommandBuffer>,
}

impl<Args> BroadcastEvent<Args> {
    /// Creates an unbound event.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an unbound event with room for `capacity` subscribers before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            subscribers: Vec::with_capacity(capacity),
            next_id: 0,
            status: EventStatus::Unbound,
            commands: Arc::new(CommandBuffer::new()),
        }
    }

    /// Registers `listener` and activates the event.
    ///
    /// Returns the id to pass to [`remove()`](Self::remove) later.
    pub fn add<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Args) + 'static,
    {
        self.apply_commands();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            callable: Box::new(listener),
        });
        self.status = EventStatus::Active;
        debug!("broadcast subscriber {id} added ({} total)", self.subscribers.len());
        id
    }

    /// Removes the subscriber with `id`. Returns `false` if there was none.
    ///
    /// The id counter is untouched. Removing the last subscriber leaves the event `Unbound`.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        self.apply_commands();
        self.remove_now(id)
    }

    /// Returns `true` if a subscriber with `id` is registered.
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.position(id).is_ok()
    }

    /// Ids of the registered subscribers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = SubscriptionId> + '_ {
        self.subscribers.iter().map(|s| s.id)
    }

    /// Number of registered subscribers.
    #[inline]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if no subscriber is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Returns `true` if at least one subscriber is registered, paused or not.
    #[inline]
    pub fn is_bound(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Drops every subscriber, restarts id assignment at 0 and moves to `Unbound`.
    pub fn unbind(&mut self) {
        self.apply_commands();
        self.clear();
    }

    /// Suppresses all subscribers if the event is active.
    pub fn pause(&mut self) {
        self.apply_commands();
        self.set_status(self.status.paused());
    }

    /// Re-enables subscribers if the event is paused.
    pub fn resume(&mut self) {
        self.apply_commands();
        self.set_status(self.status.resumed());
    }

    /// Current lifecycle status.
    #[inline]
    pub fn status(&self) -> EventStatus {
        self.status
    }

    /// Handle for queueing removals and lifecycle changes from inside listeners.
    pub fn commands(&self) -> Commands {
        Commands::new(self.commands.clone())
    }

    /// Applies queued commands in FIFO order. Returns `true` if any were applied.
    fn apply_commands(&mut self) -> bool {
        let mut applied = false;
        while let Some(command) = self.commands.pop() {
            applied = true;
            match command {
                Command::Remove { id } => {
                    self.remove_now(id);
                }
                Command::Pause => self.set_status(self.status.paused()),
                Command::Resume => self.set_status(self.status.resumed()),
                Command::Unbind => self.clear(),
            }
        }
        applied
    }

    fn position(&self, id: SubscriptionId) -> Result<usize, usize> {
        self.subscribers.binary_search_by_key(&id, |s| s.id)
    }

    fn remove_now(&mut self, id: SubscriptionId) -> bool {
        let Ok(index) = self.position(id) else {
            return false;
        };
        self.subscribers.remove(index);
        if self.subscribers.is_empty() {
            self.status = EventStatus::Unbound;
        }
        debug!("broadcast subscriber {id} removed ({} left)", self.subscribers.len());
        true
    }

    fn clear(&mut self) {
        if !self.subscribers.is_empty() {
            debug!("broadcast event unbound ({} dropped)", self.subscribers.len());
        }
        self.subscribers.clear();
        self.next_id = 0;
        self.status = EventStatus::Unbound;
    }

    fn set_status(&mut self, status: EventStatus) {
        if status != self.status {
            debug!("broadcast event {:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }
}

impl<Args: Clone> BroadcastEvent<Args> {
    /// Invokes every subscriber with a clone of `args`, in registration order, if the event
    /// is active.
    ///
    /// A panicking listener unwinds through this call and the remaining listeners are not
    /// invoked.
    pub fn broadcast(&mut self, args: Args) {
        self.fan_out(args, |_, callable, args| callable(args));
    }

    /// Broadcast without the emptiness check.
    ///
    /// # Panics
    ///
    /// Panics if no subscriber is registered. Adding first is the caller's precondition.
    pub fn broadcast_unchecked(&mut self, args: Args) {
        self.apply_commands();
        assert!(!self.subscribers.is_empty(), "{UNBOUND_INVOCATION}");
        self.fan_out(args, |_, callable, args| callable(args));
    }

    /// Broadcast that isolates listener panics.
    ///
    /// Each listener runs under `catch_unwind`. A panic is logged and recorded, and the
    /// fan-out continues with the next listener. Returns the number of listeners invoked, or
    /// a [`BroadcastError`] listing every failure.
    pub fn broadcast_isolated(&mut self, args: Args) -> Result<usize, BroadcastError> {
        let mut failures = Vec::new();
        let invoked = self.fan_out(args, |id, callable, args| {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(move || callable(args))) {
                let failure = ListenerFailure::from_panic(id, payload.as_ref());
                warn!("{failure}");
                failures.push(failure);
            }
        });

        if failures.is_empty() {
            Ok(invoked)
        } else {
            Err(BroadcastError { invoked, failures })
        }
    }

    fn fan_out<F>(&mut self, args: Args, mut call: F) -> usize
    where
        F: FnMut(SubscriptionId, &mut Callback<Args>, Args),
    {
        let mut invoked = 0;
        let mut index = 0;
        let mut last: Option<SubscriptionId> = None;

        loop {
            if self.apply_commands() {
                // The registry may have shifted; resume after the last invoked id.
                index = match last {
                    Some(last) => self.subscribers.partition_point(|s| s.id <= last),
                    None => 0,
                };
            }
            if !self.status.is_active() {
                break;
            }
            let Some(subscriber) = self.subscribers.get_mut(index) else {
                break;
            };
            last = Some(subscriber.id);
            index += 1;
            invoked += 1;
            call(subscriber.id, &mut subscriber.callable, args.clone());
        }

        trace!("broadcast reached {invoked} subscribers");
        invoked
    }
}

impl<Args> Default for BroadcastEvent<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> fmt::Debug for BroadcastEvent<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BroadcastEvent")
            .field("status", &self.status)
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<Args> Event for BroadcastEvent<Args> {
    fn is_bound(&self) -> bool {
        BroadcastEvent::is_bound(self)
    }

    fn unbind(&mut self) {
        BroadcastEvent::unbind(self);
    }

    fn pause(&mut self) {
        BroadcastEvent::pause(self);
    }

    fn resume(&mut self) {
        BroadcastEvent::resume(self);
    }

    fn status(&self) -> EventStatus {
        BroadcastEvent::status(self)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    type Log<T> = Rc<RefCell<Vec<T>>>;

    /// Listener that records `(tag, value)` into a shared log.
    fn tagged(log: &Log<(u32, i32)>, tag: u32) -> impl FnMut(i32) + 'static {
        let log = log.clone();
        move |value| log.borrow_mut().push((tag, value))
    }

    // ==================== Construction ====================

    #[test]
    fn new_event_is_unbound() {
        let event = BroadcastEvent::<i32>::new();

        assert!(!event.is_bound());
        assert!(event.is_empty());
        assert_eq!(event.status(), EventStatus::Unbound);
    }

    #[test]
    fn broadcast_on_unbound_is_noop() {
        let mut event = BroadcastEvent::<i32>::new();

        event.broadcast(1);

        assert_eq!(event.broadcast_isolated(1), Ok(0));
    }

    #[test]
    fn with_capacity_is_unbound() {
        let event = BroadcastEvent::<i32>::with_capacity(16);

        assert_eq!(event.status(), EventStatus::Unbound);
        assert_eq!(event.len(), 0);
    }

    // ==================== Add / ids ====================

    #[test]
    fn ids_start_at_zero_and_increase() {
        let mut event = BroadcastEvent::<i32>::new();

        let ids: Vec<_> = (0..4).map(|_| event.add(|_| {})).collect();

        assert_eq!(
            ids,
            (0..4).map(SubscriptionId::new).collect::<Vec<_>>()
        );
        assert_eq!(event.len(), 4);
        assert_eq!(event.status(), EventStatus::Active);
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut event = BroadcastEvent::<i32>::new();
        let first = event.add(|_| {});
        let second = event.add(|_| {});

        assert!(event.remove(second));
        let third = event.add(|_| {});

        assert_eq!(first.id(), 0);
        assert_eq!(third.id(), 2);
    }

    #[test]
    fn add_while_paused_reactivates() {
        let mut event = BroadcastEvent::<i32>::new();
        event.add(|_| {});
        event.pause();

        event.add(|_| {});

        assert_eq!(event.status(), EventStatus::Active);
    }

    // ==================== Broadcast ====================

    #[test]
    fn broadcast_fans_out_in_registration_order() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        for tag in 0..5 {
            event.add(tagged(&log, tag));
        }

        event.broadcast(11);

        assert_eq!(
            *log.borrow(),
            (0..5).map(|tag| (tag, 11)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn shared_log_scenario() {
        let log: Log<i32> = Rc::default();
        let mut event = BroadcastEvent::<i32>::new();
        let sink = log.clone();
        let first = event.add(move |value| sink.borrow_mut().push(value));
        let sink = log.clone();
        event.add(move |value| sink.borrow_mut().push(value));

        event.broadcast(7);
        assert_eq!(*log.borrow(), vec![7, 7]);

        assert!(event.remove(first));
        event.broadcast(9);
        assert_eq!(*log.borrow(), vec![7, 7, 9]);
    }

    #[test]
    fn each_listener_gets_its_own_clone() {
        let log: Log<String> = Rc::default();
        let mut event = BroadcastEvent::<String>::new();
        for _ in 0..2 {
            let sink = log.clone();
            event.add(move |mut value: String| {
                value.push('!');
                sink.borrow_mut().push(value);
            });
        }

        event.broadcast("hi".to_string());

        assert_eq!(*log.borrow(), vec!["hi!".to_string(), "hi!".to_string()]);
    }

    // ==================== Remove ====================

    #[test]
    fn removed_listener_never_fires() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));
        let middle = event.add(tagged(&log, 1));
        event.add(tagged(&log, 2));

        assert!(event.remove(middle));
        event.broadcast(1);

        assert_eq!(*log.borrow(), vec![(0, 1), (2, 1)]);
        assert!(!event.contains(middle));
    }

    #[test]
    fn second_remove_returns_false() {
        let mut event = BroadcastEvent::<i32>::new();
        let id = event.add(|_| {});
        event.add(|_| {});

        assert!(event.remove(id));
        assert!(!event.remove(id));
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut event = BroadcastEvent::<i32>::new();
        event.add(|_| {});

        assert!(!event.remove(SubscriptionId::new(42)));
        assert_eq!(event.len(), 1);
    }

    #[test]
    fn removing_last_subscriber_unbinds() {
        let mut event = BroadcastEvent::<i32>::new();
        let id = event.add(|_| {});

        assert!(event.remove(id));

        assert!(!event.is_bound());
        assert_eq!(event.status(), EventStatus::Unbound);
    }

    #[test]
    fn removing_last_subscriber_while_paused_unbinds() {
        let mut event = BroadcastEvent::<i32>::new();
        let id = event.add(|_| {});
        event.pause();

        event.remove(id);
        assert_eq!(event.status(), EventStatus::Unbound);

        event.resume();
        assert_eq!(event.status(), EventStatus::Unbound);
    }

    #[test]
    fn remove_keeps_id_counter() {
        let mut event = BroadcastEvent::<i32>::new();
        let id = event.add(|_| {});
        event.remove(id);

        assert_eq!(event.add(|_| {}).id(), 1);
    }

    #[test]
    fn ids_lists_live_subscribers_in_order() {
        let mut event = BroadcastEvent::<i32>::new();
        let a = event.add(|_| {});
        let b = event.add(|_| {});
        let c = event.add(|_| {});
        event.remove(b);

        assert_eq!(event.ids().collect::<Vec<_>>(), vec![a, c]);
    }

    // ==================== Pause / Resume ====================

    #[test]
    fn pause_suppresses_broadcast() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));

        event.pause();
        event.broadcast(1);

        assert!(log.borrow().is_empty());
        assert!(event.is_bound());
        assert_eq!(event.status(), EventStatus::Paused);
    }

    #[test]
    fn resume_restores_broadcast() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));

        event.pause();
        event.resume();
        event.broadcast(1);

        assert_eq!(*log.borrow(), vec![(0, 1)]);
    }

    // ==================== Unbind ====================

    #[test]
    fn unbind_resets_ids_and_status() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));
        event.add(tagged(&log, 1));

        event.unbind();
        event.broadcast(1);

        assert!(!event.is_bound());
        assert_eq!(event.status(), EventStatus::Unbound);
        assert!(log.borrow().is_empty());
        assert_eq!(event.add(|_| {}).id(), 0);
    }

    #[test]
    fn unbind_is_idempotent() {
        let mut event = BroadcastEvent::<i32>::new();

        event.unbind();
        event.unbind();

        assert_eq!(event.status(), EventStatus::Unbound);
    }

    // ==================== Unchecked ====================

    #[test]
    fn broadcast_unchecked_fans_out() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));
        event.add(tagged(&log, 1));

        event.broadcast_unchecked(3);

        assert_eq!(*log.borrow(), vec![(0, 3), (1, 3)]);
    }

    #[test]
    fn broadcast_unchecked_respects_pause() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));
        event.pause();

        event.broadcast_unchecked(3);

        assert!(log.borrow().is_empty());
    }

    #[test]
    #[should_panic(expected = "unchecked invocation of an unbound event")]
    fn broadcast_unchecked_on_unbound_panics() {
        let mut event = BroadcastEvent::<i32>::new();

        event.broadcast_unchecked(1);
    }

    // ==================== Failures ====================

    #[test]
    fn listener_panic_stops_broadcast() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));
        event.add(|_| panic!("listener failed"));
        event.add(tagged(&log, 2));

        let result = panic::catch_unwind(AssertUnwindSafe(|| event.broadcast(1)));

        assert!(result.is_err());
        assert_eq!(*log.borrow(), vec![(0, 1)]);
    }

    #[test]
    fn isolated_broadcast_continues_past_failures() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));
        let failing = event.add(|value: i32| panic!("bad value {value}"));
        event.add(tagged(&log, 2));

        let error = event.broadcast_isolated(4).unwrap_err();

        assert_eq!(*log.borrow(), vec![(0, 4), (2, 4)]);
        assert_eq!(error.invoked, 3);
        assert_eq!(
            error.failures,
            vec![ListenerFailure {
                id: failing,
                message: Some("bad value 4".to_string()),
            }]
        );
    }

    #[test]
    fn isolated_broadcast_reports_invocations() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        event.add(tagged(&log, 0));
        event.add(tagged(&log, 1));

        assert_eq!(event.broadcast_isolated(2), Ok(2));
    }

    #[test]
    fn failing_listener_stays_subscribed() {
        let mut event = BroadcastEvent::<i32>::new();
        let failing = event.add(|_| panic!("again"));

        let _ = event.broadcast_isolated(1);
        let error = event.broadcast_isolated(2).unwrap_err();

        assert!(event.contains(failing));
        assert_eq!(error.failures.len(), 1);
    }

    // ==================== Reentrant mutation ====================

    #[test]
    fn listener_removing_later_listener_skips_it() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        let commands = event.commands();
        let victim = Rc::new(RefCell::new(None::<SubscriptionId>));

        let target = victim.clone();
        let mut record = tagged(&log, 0);
        event.add(move |value| {
            record(value);
            if let Some(id) = *target.borrow() {
                commands.remove(id);
            }
        });
        let doomed = event.add(tagged(&log, 1));
        event.add(tagged(&log, 2));
        *victim.borrow_mut() = Some(doomed);

        // Same outcome on every run.
        for _ in 0..3 {
            log.borrow_mut().clear();
            event.broadcast(5);
            assert_eq!(*log.borrow(), vec![(0, 5), (2, 5)]);
        }
        assert!(!event.contains(doomed));
        assert_eq!(event.len(), 2);
    }

    #[test]
    fn listener_removing_itself_does_not_skip_next() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        let commands = event.commands();
        let own = Rc::new(RefCell::new(None::<SubscriptionId>));

        event.add(tagged(&log, 0));
        let slot = own.clone();
        let mut record = tagged(&log, 1);
        let once = event.add(move |value| {
            record(value);
            if let Some(id) = *slot.borrow() {
                commands.remove(id);
            }
        });
        *own.borrow_mut() = Some(once);
        event.add(tagged(&log, 2));

        event.broadcast(1);
        event.broadcast(2);

        assert_eq!(
            *log.borrow(),
            vec![(0, 1), (1, 1), (2, 1), (0, 2), (2, 2)]
        );
    }

    #[test]
    fn listener_removing_earlier_listener_keeps_position() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        let commands = event.commands();

        let first = event.add(tagged(&log, 0));
        let mut record = tagged(&log, 1);
        event.add(move |value| {
            record(value);
            commands.remove(first);
        });
        event.add(tagged(&log, 2));

        event.broadcast(1);

        assert_eq!(*log.borrow(), vec![(0, 1), (1, 1), (2, 1)]);
        assert!(!event.contains(first));
    }

    #[test]
    fn listener_pausing_stops_remaining_fan_out() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        let commands = event.commands();

        let mut record = tagged(&log, 0);
        event.add(move |value| {
            record(value);
            commands.pause();
        });
        event.add(tagged(&log, 1));

        event.broadcast(1);

        assert_eq!(*log.borrow(), vec![(0, 1)]);
        assert_eq!(event.status(), EventStatus::Paused);
    }

    #[test]
    fn listener_unbinding_stops_remaining_fan_out() {
        let log: Log<(u32, i32)> = Rc::default();
        let mut event = BroadcastEvent::new();
        let commands = event.commands();

        let mut record = tagged(&log, 0);
        event.add(move |value| {
            record(value);
            commands.unbind();
        });
        event.add(tagged(&log, 1));

        event.broadcast(1);

        assert_eq!(*log.borrow(), vec![(0, 1)]);
        assert!(!event.is_bound());
        assert_eq!(event.add(|_| {}).id(), 0);
    }

    #[test]
    fn commands_from_last_listener_apply_before_return() {
        let mut event = BroadcastEvent::<i32>::new();
        let commands = event.commands();
        event.add(|_| {});
        event.add(move |_| commands.pause());

        event.broadcast(1);

        assert_eq!(event.status(), EventStatus::Paused);
    }

    // ==================== Event contract ====================

    #[test]
    fn contract_through_trait_object() {
        let mut single = crate::event::SingleEvent::<i32>::new();
        let mut broadcast = BroadcastEvent::<i32>::new();
        single.bind(|_| {});
        broadcast.add(|_| {});

        let mut events: Vec<&mut dyn Event> = vec![&mut single, &mut broadcast];
        for event in events.iter_mut() {
            event.pause();
        }
        assert!(events.iter().all(|e| e.status() == EventStatus::Paused));

        for event in events.iter_mut() {
            event.unbind();
        }
        assert!(events.iter().all(|e| !e.is_bound()));
    }

    #[test]
    fn debug_hides_callables() {
        let mut event = BroadcastEvent::<i32>::new();
        event.add(|_| {});

        assert_eq!(
            format!("{event:?}"),
            "BroadcastEvent { status: Active, subscribers: 1, next_id: 1, .. }"
        );
    }
}
