#![forbid(unsafe_code)]

//! Lifetime grouping for subscriptions owned by one behavior.
//!
//! A behavior typically registers several handlers when it is attached and
//! has to release exactly those handlers when it is detached. A
//! [`SubscriptionScope`] collects the guards so the detach path is a single
//! [`clear`](SubscriptionScope::clear).
//!
//! # Usage
//!
//! ```
//! use bhv_runtime::{Event, SubscriptionScope};
//!
//! let clicked: Event<()> = Event::new();
//! let focused: Event<bool> = Event::new();
//!
//! let mut scope = SubscriptionScope::new();
//! scope
//!     .subscribe(&clicked, |_| {})
//!     .subscribe(&focused, |_| {});
//! assert_eq!(scope.len(), 2);
//!
//! scope.clear();
//! assert!(clicked.stats().is_balanced());
//! assert!(focused.stats().is_balanced());
//! ```
//!
//! # Invariants
//!
//! 1. Subscriptions are released in registration order on `clear()` and drop.
//! 2. After `clear()` or drop, no handler held by this scope will fire.
//! 3. A cleared scope is reusable.
//! 4. `len()` is always accurate.

use crate::event::{Event, Subscription};

/// Collects subscriptions for a logical scope (e.g., one attachment).
#[derive(Default)]
pub struct SubscriptionScope {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionScope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Keep a subscription alive until the scope is cleared or dropped.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to an event within this scope.
    ///
    /// Returns a reference to the scope for chaining.
    pub fn subscribe<A: 'static>(
        &mut self,
        event: &Event<A>,
        handler: impl Fn(&A) + 'static,
    ) -> &mut Self {
        let sub = event.subscribe(handler);
        self.subscriptions.push(sub);
        self
    }

    /// Number of held subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the scope holds no subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release all subscriptions now. The scope stays usable.
    pub fn clear(&mut self) {
        for sub in self.subscriptions.drain(..) {
            sub.unsubscribe();
        }
    }
}

impl Drop for SubscriptionScope {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for SubscriptionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionScope")
            .field("len", &self.subscriptions.len())
            .finish()
    }
}
