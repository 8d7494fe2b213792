#![forbid(unsafe_code)]

//! The view side of the attach contract.
//!
//! A view is anything behaviors can be attached to. The only thing the core
//! needs from it is its [`Lifecycle`], if it has one: the pair of
//! "became live" / "torn down" notifications that tell the attach helpers
//! when native-resource-dependent setup may run and when it must be undone.
//!
//! Views without a lifecycle (toolkits where a constructed view is usable
//! right away) get their behaviors activated immediately; removal from them
//! is explicit only.

use std::cell::Cell;

use bhv_runtime::Event;

use crate::error::BehaviorError;

/// A view behaviors can be attached to.
///
/// Views are shared as `Rc<V>` and use interior mutability for their state,
/// the way native view handles do.
pub trait View: 'static {
    /// Attachment lifecycle, or `None` when the view is live from
    /// construction.
    fn lifecycle(&self) -> Option<&Lifecycle> {
        None
    }

    /// Diagnostic name used in log records and errors.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// "Became live" / "torn down" notifications of a view.
///
/// The owner of the view (its toolkit adapter) calls [`mark_live`] when the
/// view enters the active hierarchy and [`mark_torn_down`] when it leaves.
///
/// [`mark_live`]: Lifecycle::mark_live
/// [`mark_torn_down`]: Lifecycle::mark_torn_down
#[derive(Debug, Default)]
pub struct Lifecycle {
    live: Cell<bool>,
    became_live: Event<(), BehaviorError>,
    torn_down: Event<()>,
}

impl Lifecycle {
    /// Create a lifecycle for a view that is not live yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the view is currently in the active hierarchy.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Fires when the view enters the active hierarchy. Handlers may fail;
    /// the first failure is returned from [`mark_live`](Self::mark_live).
    #[must_use]
    pub fn became_live(&self) -> &Event<(), BehaviorError> {
        &self.became_live
    }

    /// Fires when the view leaves the active hierarchy.
    #[must_use]
    pub fn torn_down(&self) -> &Event<()> {
        &self.torn_down
    }

    /// Record that the view became live and notify listeners.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a listener; later listeners are
    /// not called.
    pub fn mark_live(&self) -> Result<(), BehaviorError> {
        self.live.set(true);
        self.became_live.try_emit(&())
    }

    /// Record that the view was torn down and notify listeners.
    pub fn mark_torn_down(&self) {
        self.live.set(false);
        self.torn_down.emit(&());
    }
}
