#![forbid(unsafe_code)]

//! Multicast event channel with countable, cancellable subscriptions.
//!
//! # Design
//!
//! [`Event<A, E>`] stores its handlers in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). Cloning an `Event` creates a new handle to the
//! **same** handler list, so a view can hand out its event channels while
//! keeping ownership of them.
//!
//! Handlers have the shape `Fn(&A) -> Result<(), E>`. The default error type
//! is [`Infallible`], for which [`Event::subscribe`] and [`Event::emit`] hide
//! the `Result` entirely. Fallible events are used where a failure inside a
//! handler has to reach whoever raised the notification.
//!
//! # Invariants
//!
//! 1. Handlers fire in registration order.
//! 2. A handler removed during an emission is not called later in that same
//!    emission.
//! 3. A one-shot handler removes itself *before* its body runs, so it fires
//!    at most once even if the event is re-emitted from inside it.
//! 4. `stats().subscribed - stats().unsubscribed == subscriber_count()`.
//!
//! # Failure Modes
//!
//! - **Handler error**: [`Event::try_emit`] stops at the first `Err` and
//!   returns it; handlers registered after the failing one are not called.
//! - **Handler panic**: propagates to the caller of `emit`. No borrow of the
//!   handler list is held while handlers run, so the event stays usable.
//! - **Event dropped first**: outstanding [`Subscription`]s become inert;
//!   dropping or cancelling them is a no-op.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::fmt;
use std::rc::{Rc, Weak};

type Handler<A, E> = Rc<dyn Fn(&A) -> Result<(), E>>;

/// Identifier of a handler registered on an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Get the raw ID value.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Subscribe/unsubscribe counters of an [`Event`].
///
/// Counters only ever grow. A channel whose every subscription has been
/// released is [balanced](EventStats::is_balanced).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventStats {
    /// Handlers ever registered.
    pub subscribed: u64,
    /// Handlers ever removed (explicitly, by guard drop, or by one-shot firing).
    pub unsubscribed: u64,
}

impl EventStats {
    /// Handlers currently registered.
    #[must_use]
    pub const fn active(self) -> u64 {
        self.subscribed - self.unsubscribed
    }

    /// Whether every registered handler has been removed again.
    #[must_use]
    pub const fn is_balanced(self) -> bool {
        self.subscribed == self.unsubscribed
    }
}

struct Entry<A, E> {
    id: SubscriptionId,
    active: Rc<Cell<bool>>,
    handler: Handler<A, E>,
}

struct EventInner<A, E> {
    next_id: u64,
    entries: Vec<Entry<A, E>>,
    stats: EventStats,
}

impl<A, E> EventInner<A, E> {
    fn reserve_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Unlink an entry. The caller drops it after releasing the borrow, since
    /// dropping a handler may release captured subscriptions of this event.
    fn unlink(&mut self, id: SubscriptionId) -> Option<Entry<A, E>> {
        let pos = self.entries.iter().position(|entry| entry.id == id)?;
        let entry = self.entries.remove(pos);
        entry.active.set(false);
        self.stats.unsubscribed += 1;
        Some(entry)
    }
}

/// Type-erased view of an event's handler list, held weakly by subscriptions.
trait Unsubscribe {
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
    fn contains(&self, id: SubscriptionId) -> bool;
}

impl<A, E> Unsubscribe for RefCell<EventInner<A, E>> {
    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let unlinked = self.borrow_mut().unlink(id);
        unlinked.is_some()
    }

    fn contains(&self, id: SubscriptionId) -> bool {
        self.borrow().entries.iter().any(|entry| entry.id == id)
    }
}

/// A multicast notification channel.
///
/// # Example
///
/// ```
/// use bhv_runtime::Event;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let clicked: Event<()> = Event::new();
/// let count = Rc::new(Cell::new(0));
///
/// let c = Rc::clone(&count);
/// let sub = clicked.subscribe(move |_| c.set(c.get() + 1));
///
/// clicked.emit(&());
/// drop(sub);
/// clicked.emit(&());
///
/// assert_eq!(count.get(), 1);
/// assert!(clicked.stats().is_balanced());
/// ```
pub struct Event<A, E = Infallible> {
    inner: Rc<RefCell<EventInner<A, E>>>,
}

// Manual Clone: shares the same Rc.
impl<A, E> Clone for Event<A, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: 'static, E: 'static> Default for Event<A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, E> fmt::Debug for Event<A, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Event")
            .field("subscriber_count", &inner.entries.len())
            .field("stats", &inner.stats)
            .finish()
    }
}

impl<A: 'static, E: 'static> Event<A, E> {
    /// Create an event with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(EventInner {
                next_id: 1,
                entries: Vec::new(),
                stats: EventStats::default(),
            })),
        }
    }

    /// Register a fallible handler.
    ///
    /// Returns a [`Subscription`] guard; dropping it removes the handler.
    pub fn try_subscribe(&self, handler: impl Fn(&A) -> Result<(), E> + 'static) -> Subscription {
        let handler: Handler<A, E> = Rc::new(handler);
        self.register(move |_| handler)
    }

    /// Register a fallible handler that fires at most once.
    ///
    /// The handler unlinks itself from the event before its body runs.
    pub fn try_subscribe_once(
        &self,
        handler: impl FnOnce(&A) -> Result<(), E> + 'static,
    ) -> Subscription {
        let pending = RefCell::new(Some(handler));
        let events = Rc::downgrade(&self.inner);
        self.register(move |id| {
            let handler: Handler<A, E> = Rc::new(move |args: &A| {
                if let Some(inner) = events.upgrade() {
                    let unlinked = inner.borrow_mut().unlink(id);
                    drop(unlinked);
                }
                let body = pending.borrow_mut().take();
                match body {
                    Some(body) => body(args),
                    None => Ok(()),
                }
            });
            handler
        })
    }

    /// Invoke every live handler in registration order, stopping at the
    /// first error.
    pub fn try_emit(&self, args: &A) -> Result<(), E> {
        // Snapshot first so handlers may subscribe or unsubscribe freely.
        let snapshot: Vec<(Rc<Cell<bool>>, Handler<A, E>)> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|entry| (Rc::clone(&entry.active), Rc::clone(&entry.handler)))
            .collect();

        for (active, handler) in snapshot {
            if active.get() {
                handler(args)?;
            }
        }
        Ok(())
    }

    /// Remove the handler with the given id. Returns `false` if it was not
    /// registered (already removed, or fired as a one-shot).
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    /// Whether a handler with the given id is still registered.
    #[must_use]
    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.inner.contains(id)
    }

    /// Number of currently registered handlers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Subscribe/unsubscribe counters since creation.
    #[must_use]
    pub fn stats(&self) -> EventStats {
        self.inner.borrow().stats
    }

    fn register(&self, build: impl FnOnce(SubscriptionId) -> Handler<A, E>) -> Subscription {
        let id = self.inner.borrow_mut().reserve_id();
        let handler = build(id);
        {
            let mut inner = self.inner.borrow_mut();
            inner.entries.push(Entry {
                id,
                active: Rc::new(Cell::new(true)),
                handler,
            });
            inner.stats.subscribed += 1;
        }
        let weak = Rc::downgrade(&self.inner);
        let source: Weak<dyn Unsubscribe> = weak;
        Subscription {
            key: SubscriptionKey { id, source },
            armed: true,
        }
    }
}

impl<A: 'static> Event<A> {
    /// Register a handler.
    ///
    /// Returns a [`Subscription`] guard; dropping it removes the handler.
    pub fn subscribe(&self, handler: impl Fn(&A) + 'static) -> Subscription {
        self.try_subscribe(move |args| {
            handler(args);
            Ok(())
        })
    }

    /// Register a handler that fires at most once, then removes itself.
    pub fn subscribe_once(&self, handler: impl FnOnce(&A) + 'static) -> Subscription {
        self.try_subscribe_once(move |args| {
            handler(args);
            Ok(())
        })
    }

    /// Invoke every live handler in registration order.
    pub fn emit(&self, args: &A) {
        match self.try_emit(args) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

/// RAII guard for a registered handler.
///
/// Dropping the guard removes the handler from its event. Call
/// [`into_key`](Subscription::into_key) to keep the handler registered past
/// the guard while retaining the ability to cancel it.
#[must_use = "dropping a Subscription removes its handler"]
pub struct Subscription {
    key: SubscriptionKey,
    armed: bool,
}

impl Subscription {
    /// Identifier of the registered handler.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.key.id
    }

    /// Whether the handler is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.key.is_active()
    }

    /// Remove the handler now. Returns `false` if it was already gone.
    pub fn unsubscribe(mut self) -> bool {
        self.armed = false;
        self.key.cancel()
    }

    /// Release the guard without removing the handler.
    ///
    /// The handler stays registered until the returned key is cancelled, the
    /// handler removes itself (one-shot), or the event is dropped.
    #[must_use]
    pub fn into_key(mut self) -> SubscriptionKey {
        self.armed = false;
        self.key.clone()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.armed {
            self.key.cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.key.id)
            .field("armed", &self.armed)
            .finish_non_exhaustive()
    }
}

/// Non-owning reference to a registered handler.
///
/// Unlike [`Subscription`], dropping a key leaves the handler registered.
#[derive(Clone)]
pub struct SubscriptionKey {
    id: SubscriptionId,
    source: Weak<dyn Unsubscribe>,
}

impl SubscriptionKey {
    /// Identifier of the referenced handler.
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Whether the handler is still registered on a live event.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.source
            .upgrade()
            .is_some_and(|source| source.contains(self.id))
    }

    /// Remove the handler. Returns `false` if it was already gone.
    pub fn cancel(&self) -> bool {
        self.source
            .upgrade()
            .is_some_and(|source| source.unsubscribe(self.id))
    }
}

impl fmt::Debug for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionKey")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn(&()) + 'static) {
        let count = Rc::new(Cell::new(0u32));
        let c = Rc::clone(&count);
        (count, move |_: &()| c.set(c.get() + 1))
    }

    #[test]
    fn emit_reaches_subscriber() {
        let event: Event<i32> = Event::new();
        let last = Rc::new(Cell::new(0));
        let l = Rc::clone(&last);
        let _sub = event.subscribe(move |v: &i32| l.set(*v));

        event.emit(&42);
        assert_eq!(last.get(), 42);
    }

    #[test]
    fn drop_guard_unsubscribes() {
        let event: Event<()> = Event::new();
        let (count, handler) = counter();
        let sub = event.subscribe(handler);

        event.emit(&());
        drop(sub);
        event.emit(&());

        assert_eq!(count.get(), 1);
        assert_eq!(event.subscriber_count(), 0);
        assert!(event.stats().is_balanced());
    }

    #[test]
    fn notification_order_is_registration_order() {
        let event: Event<()> = Event::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let subs: Vec<_> = ['A', 'B', 'C']
            .into_iter()
            .map(|tag| {
                let log = Rc::clone(&log);
                event.subscribe(move |_| log.borrow_mut().push(tag))
            })
            .collect();

        event.emit(&());
        assert_eq!(*log.borrow(), vec!['A', 'B', 'C']);
        drop(subs);
    }

    #[test]
    fn once_fires_at_most_once() {
        let event: Event<()> = Event::new();
        let (count, handler) = counter();
        let sub = event.subscribe_once(handler);

        event.emit(&());
        event.emit(&());

        assert_eq!(count.get(), 1);
        assert!(!sub.is_active());
        assert_eq!(event.subscriber_count(), 0);
    }

    #[test]
    fn once_unlinks_before_running() {
        let event: Event<()> = Event::new();
        let seen_count = Rc::new(Cell::new(usize::MAX));
        let seen = Rc::clone(&seen_count);
        let probe = event.clone();
        let _sub = event.subscribe_once(move |_| seen.set(probe.subscriber_count()));

        event.emit(&());
        assert_eq!(seen_count.get(), 0);
    }

    #[test]
    fn once_reentrant_emit_does_not_refire() {
        let event: Event<()> = Event::new();
        let count = Rc::new(Cell::new(0u32));
        let c = Rc::clone(&count);
        let again = event.clone();
        let _sub = event
            .subscribe_once(move |_| {
                c.set(c.get() + 1);
                again.emit(&());
            })
            .into_key();

        event.emit(&());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn handler_removed_mid_emit_is_skipped() {
        let event: Event<()> = Event::new();
        let (count, handler) = counter();

        let victim = Rc::new(RefCell::new(None::<Subscription>));
        let v = Rc::clone(&victim);
        let _killer = event.subscribe(move |_| {
            v.borrow_mut().take();
        });
        *victim.borrow_mut() = Some(event.subscribe(handler));

        event.emit(&());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn into_key_keeps_handler_registered() {
        let event: Event<()> = Event::new();
        let (count, handler) = counter();
        let key = event.subscribe(handler).into_key();

        event.emit(&());
        assert!(key.is_active());
        assert!(key.cancel());
        assert!(!key.cancel());
        event.emit(&());

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unsubscribe_by_id() {
        let event: Event<()> = Event::new();
        let (count, handler) = counter();
        let key = event.subscribe(handler).into_key();

        assert!(event.contains(key.id()));
        assert!(event.unsubscribe(key.id()));
        assert!(!event.unsubscribe(key.id()));
        event.emit(&());

        assert_eq!(count.get(), 0);
    }

    #[test]
    fn try_emit_stops_at_first_error() {
        let event: Event<(), &'static str> = Event::new();
        let after = Rc::new(Cell::new(false));
        let a = Rc::clone(&after);

        let _fail = event.try_subscribe(|_| Err("boom"));
        let _next = event.try_subscribe(move |_| {
            a.set(true);
            Ok(())
        });

        assert_eq!(event.try_emit(&()), Err("boom"));
        assert!(!after.get());
    }

    #[test]
    fn try_once_error_still_consumes_handler() {
        let event: Event<(), &'static str> = Event::new();
        let _sub = event.try_subscribe_once(|_| Err("bad")).into_key();

        assert_eq!(event.try_emit(&()), Err("bad"));
        assert_eq!(event.try_emit(&()), Ok(()));
    }

    #[test]
    fn subscription_outlives_event() {
        let event: Event<()> = Event::new();
        let (_count, handler) = counter();
        let sub = event.subscribe(handler);

        drop(event);
        assert!(!sub.is_active());
        assert!(!sub.unsubscribe());
    }

    #[test]
    fn clone_shares_handlers() {
        let event: Event<()> = Event::new();
        let (count, handler) = counter();
        let _sub = event.subscribe(handler);

        event.clone().emit(&());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stats_track_every_path() {
        let event: Event<()> = Event::new();
        let a = event.subscribe(|_| {});
        let b = event.subscribe(|_| {}).into_key();
        let _c = event.subscribe_once(|_| {}).into_key();

        assert_eq!(event.stats().active(), 3);

        drop(a);
        b.cancel();
        event.emit(&());

        let stats = event.stats();
        assert_eq!(stats.subscribed, 3);
        assert_eq!(stats.unsubscribed, 3);
        assert!(stats.is_balanced());
    }

    #[test]
    fn debug_format() {
        let event: Event<()> = Event::new();
        let _sub = event.subscribe(|_| {});
        let dbg = format!("{event:?}");
        assert!(dbg.contains("subscriber_count: 1"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn once_count_never_exceeds_one(emits in 0usize..20) {
                let event: Event<()> = Event::new();
                let (count, handler) = counter();
                let _sub = event.subscribe_once(handler).into_key();
                for _ in 0..emits {
                    event.emit(&());
                }
                prop_assert_eq!(count.get(), u32::from(emits > 0));
            }

            #[test]
            fn active_matches_subscriber_count(keep in proptest::collection::vec(any::<bool>(), 0..16)) {
                let event: Event<()> = Event::new();
                let mut held = Vec::new();
                for k in &keep {
                    let sub = event.subscribe(|_| {});
                    if *k {
                        held.push(sub);
                    }
                }
                let stats = event.stats();
                prop_assert_eq!(stats.active() as usize, event.subscriber_count());
                prop_assert_eq!(event.subscriber_count(), held.len());
            }
        }
    }
}
