#![forbid(unsafe_code)]

//! Single-threaded event plumbing for attachable view behaviors.
//!
//! - [`Event`]: a multicast notification channel with registration-ordered
//!   delivery, one-shot handlers and subscribe/unsubscribe counters.
//! - [`Subscription`]: RAII guard that removes its handler on drop.
//! - [`SubscriptionKey`]: non-owning handle that can cancel a handler later.
//! - [`SubscriptionScope`]: groups the subscriptions of one attachment.
//! - [`Command`] / [`RelayCommand`]: the command collaborator bridged to view
//!   triggers.
//!
//! # Architecture
//!
//! Everything here uses `Rc<RefCell<..>>` and is therefore `!Send`: all
//! registration and delivery happens on the UI thread. No borrow is held
//! while a handler runs, so handlers may subscribe, unsubscribe and emit
//! re-entrantly.

pub mod command;
pub mod event;
pub mod scope;

pub use command::{Command, RelayCommand};
pub use event::{Event, EventStats, Subscription, SubscriptionId, SubscriptionKey};
pub use scope::SubscriptionScope;
