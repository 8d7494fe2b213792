#![forbid(unsafe_code)]

//! Core of the behavior system: attaching reusable interaction logic to views.
//!
//! # Role in the workspace
//! `bhv-core` defines the [`Behavior`] contract, the [`View`] side of it, and
//! the helpers that tie a behavior's lifetime to a view's [`Lifecycle`].
//! Concrete behaviors live in `bhv-widgets`; fake views for tests live in
//! `bhv-harness`.
//!
//! # Lifecycle
//!
//! ```text
//!   attach_behaviors(view, [b1, b2])
//!          │
//!          ▼
//!   became live ──► b1.on_attached, b2.on_attached   (once)
//!          │
//!   torn down   ──► b1.on_detaching, b2.on_detaching (once)
//! ```
//!
//! Everything is single-threaded: views and behaviors are shared through
//! `Rc` and mutated through `RefCell`/`Cell`, and every hook runs on the
//! thread that raised the notification.

pub mod attach;
pub mod behavior;
pub mod error;
pub mod options;
pub mod view;

pub use attach::{
    Registration, ViewBehaviorExt, attach_behavior, attach_behavior_with, attach_behaviors,
    attach_behaviors_with, remove_behavior, remove_behaviors,
};
pub use behavior::{Behavior, BehaviorHandle};
pub use error::BehaviorError;
pub use options::{Activation, AttachOptions};
pub use view::{Lifecycle, View};

pub use bhv_runtime::{Event, Subscription, SubscriptionScope};
