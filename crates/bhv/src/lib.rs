#![forbid(unsafe_code)]

//! Attachable view behaviors.
//!
//! A behavior is a reusable piece of interaction logic (select text on
//! focus, hide the keyboard on enter, bind a click to a command) attached
//! to a view without subclassing it. This crate re-exports the pieces:
//!
//! - [`bhv_core`]: the [`Behavior`] trait, [`BehaviorHandle`], the [`View`]
//!   lifecycle and the attach/detach helpers.
//! - [`bhv_runtime`]: events, subscriptions and commands.
//! - `bhv_widgets` (feature `widgets`): capability traits and the concrete
//!   behaviors.
//!
//! # Example
//!
//! ```
//! use bhv::prelude::*;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Button {
//!     lifecycle: Lifecycle,
//!     clicked: Event<()>,
//!     text: std::cell::RefCell<String>,
//! }
//!
//! impl View for Button {
//!     fn lifecycle(&self) -> Option<&Lifecycle> {
//!         Some(&self.lifecycle)
//!     }
//! }
//! impl Clickable for Button {
//!     fn clicked(&self) -> &Event<()> {
//!         &self.clicked
//!     }
//! }
//! impl TextContent for Button {
//!     fn text(&self) -> String {
//!         self.text.borrow().clone()
//!     }
//!     fn set_text(&self, text: &str) {
//!         *self.text.borrow_mut() = text.to_owned();
//!     }
//! }
//!
//! let button = Rc::new(Button::default());
//! let counter = BehaviorHandle::new(IncrementCounterBehavior::new());
//! button.attach_behavior(&counter)?;
//!
//! button.lifecycle.mark_live()?;
//! button.clicked.emit(&());
//! assert_eq!(button.text(), "1");
//!
//! button.lifecycle.mark_torn_down();
//! assert!(!counter.is_attached());
//! # Ok::<(), BehaviorError>(())
//! ```

pub use bhv_core;
pub use bhv_runtime;
#[cfg(feature = "widgets")]
pub use bhv_widgets;

pub use bhv_core::{
    Activation, AttachOptions, Behavior, BehaviorError, BehaviorHandle, Lifecycle, Registration,
    View, ViewBehaviorExt, attach_behavior, attach_behavior_with, attach_behaviors,
    attach_behaviors_with, remove_behavior, remove_behaviors,
};
pub use bhv_runtime::{
    Command, Event, EventStats, RelayCommand, Subscription, SubscriptionKey, SubscriptionScope,
};

/// Everything needed to write and attach behaviors.
pub mod prelude {
    pub use bhv_core::{
        Activation, AttachOptions, Behavior, BehaviorError, BehaviorHandle, Lifecycle, View,
        ViewBehaviorExt,
    };
    pub use bhv_runtime::{Command, Event, RelayCommand, Subscription, SubscriptionScope};

    #[cfg(feature = "widgets")]
    pub use bhv_widgets::{
        BackgroundHost, BorderColoredBehavior, Clickable, EditorActionSource, Enableable,
        EventToCommandBehavior, FocusSource, HideKeyboardOnEnterBehavior,
        IncrementCounterBehavior, RoundCornerBehavior, SelectAllOnFocusBehavior, SoftKeyboard,
        TextContent, TextSelection, Trigger, TriggerSource,
    };
}
