#![forbid(unsafe_code)]

//! The behavior abstraction.
//!
//! A [`Behavior<V>`] is a unit of reusable interaction logic for views of
//! type `V`. It only supplies the two hooks; the association with a view is
//! kept by the [`BehaviorHandle`] wrapping it.
//!
//! # Invariants
//!
//! 1. A handle is associated with at most one view at a time.
//! 2. The association is set immediately before `on_attached` runs.
//! 3. The association is cleared immediately after `on_detaching` returns.
//! 4. `remove` on an unattached handle runs no hook and changes nothing.
//! 5. The association is weak: a handle never keeps its view alive.
//!
//! # Failure Modes
//!
//! - **Hook error**: `on_attached` returning `Err` leaves the association set
//!   (partially attached). The instance must not be reused.
//! - **Double attach**: last write wins on the association; a warning is
//!   logged and `on_attached` runs again.
//! - **View dropped while attached**: `remove` clears the association without
//!   running `on_detaching`; the view's events went with it.
//! - **Re-entrant access**: touching the same handle from inside one of its
//!   own hooks panics (`RefCell` borrow rules).

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::BehaviorError;

/// Attachable interaction logic for views of type `V`.
///
/// Both hooks default to no-ops. `on_attached` is where a behavior reads the
/// view's capabilities and registers its subscriptions or visual mutations;
/// `on_detaching` must undo exactly what `on_attached` registered.
///
/// Handlers registered on the view should capture `Rc::downgrade(view)`
/// rather than the `Rc` itself, so a subscription never keeps its own view
/// alive.
pub trait Behavior<V> {
    /// Called right after the behavior is associated with `view`.
    ///
    /// # Errors
    ///
    /// Returns an error when required configuration is missing or the view
    /// lacks a capability the behavior needs.
    fn on_attached(&mut self, _view: &Rc<V>) -> Result<(), BehaviorError> {
        Ok(())
    }

    /// Called right before the association with `view` is cleared.
    fn on_detaching(&mut self, _view: &Rc<V>) {}

    /// Diagnostic name used in log records and errors.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

struct Slot<V, B: ?Sized> {
    associated: Option<Weak<V>>,
    behavior: B,
}

/// Shared handle to a behavior and its associated view.
///
/// Cloning shares the same behavior instance. The default type parameter
/// makes `BehaviorHandle<V>` the type-erased form used for heterogeneous
/// batches; convert with [`into_dyn`](BehaviorHandle::into_dyn).
///
/// # Example
///
/// ```
/// use bhv_core::{Behavior, BehaviorHandle, View};
/// use std::rc::Rc;
///
/// struct Label;
/// impl View for Label {}
///
/// #[derive(Default)]
/// struct Noop;
/// impl Behavior<Label> for Noop {}
///
/// let view = Rc::new(Label);
/// let behavior = BehaviorHandle::new(Noop);
///
/// behavior.attach(&view)?;
/// assert!(behavior.is_attached_to(&view));
///
/// behavior.remove();
/// assert!(behavior.associated_view().is_none());
/// # Ok::<(), bhv_core::BehaviorError>(())
/// ```
pub struct BehaviorHandle<V, B: ?Sized = dyn Behavior<V>> {
    slot: Rc<RefCell<Slot<V, B>>>,
}

impl<V, B: ?Sized> Clone for BehaviorHandle<V, B> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<V: 'static, B: Behavior<V> + 'static> BehaviorHandle<V, B> {
    /// Wrap a configured behavior. It starts unattached.
    #[must_use]
    pub fn new(behavior: B) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                associated: None,
                behavior,
            })),
        }
    }

    /// Erase the behavior type, sharing the same instance.
    #[must_use]
    pub fn into_dyn(self) -> BehaviorHandle<V> {
        BehaviorHandle { slot: self.slot }
    }
}

impl<V: 'static, B: Behavior<V> + ?Sized> BehaviorHandle<V, B> {
    /// Associate with `view`, then run `on_attached`.
    ///
    /// # Errors
    ///
    /// Propagates the hook's error. The association stays set.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of this behavior's own hooks.
    pub fn attach(&self, view: &Rc<V>) -> Result<(), BehaviorError> {
        let mut slot = self.slot.borrow_mut();
        let name = slot.behavior.name();
        if slot.associated.is_some() {
            tracing::warn!(
                behavior = name,
                "attach called on an attached behavior; replacing its view"
            );
        }
        slot.associated = Some(Rc::downgrade(view));
        tracing::debug!(behavior = name, "attaching behavior");
        slot.behavior.on_attached(view).inspect_err(|err| {
            tracing::debug!(behavior = name, error = %err, "on_attached failed");
        })
    }

    /// Run `on_detaching`, then clear the association.
    ///
    /// A no-op when the behavior is not attached.
    ///
    /// # Panics
    ///
    /// Panics if called from inside one of this behavior's own hooks.
    pub fn remove(&self) {
        let mut slot = self.slot.borrow_mut();
        let name = slot.behavior.name();
        let Some(associated) = slot.associated.clone() else {
            tracing::trace!(behavior = name, "remove on unattached behavior ignored");
            return;
        };
        match associated.upgrade() {
            Some(view) => {
                tracing::debug!(behavior = name, "detaching behavior");
                slot.behavior.on_detaching(&view);
            }
            None => {
                tracing::debug!(
                    behavior = name,
                    "associated view already dropped; skipping on_detaching"
                );
            }
        }
        slot.associated = None;
    }

    /// The currently associated view, if it is still alive.
    #[must_use]
    pub fn associated_view(&self) -> Option<Rc<V>> {
        self.slot.borrow().associated.as_ref().and_then(Weak::upgrade)
    }

    /// Whether the behavior is associated with a live view.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.slot
            .borrow()
            .associated
            .as_ref()
            .is_some_and(|current| current.strong_count() > 0)
    }

    /// Whether the behavior is associated with exactly this view instance.
    #[must_use]
    pub fn is_attached_to(&self, view: &Rc<V>) -> bool {
        self.slot
            .borrow()
            .associated
            .as_ref()
            .is_some_and(|current| std::ptr::eq(current.as_ptr(), Rc::as_ptr(view)))
    }

    /// Diagnostic name of the wrapped behavior.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.slot.borrow().behavior.name()
    }

    /// Read the wrapped behavior.
    pub fn with<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(&self.slot.borrow().behavior)
    }

    /// Mutate the wrapped behavior (e.g. to configure it before attaching).
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(&mut self.slot.borrow_mut().behavior)
    }
}

impl<V, B: ?Sized> BehaviorHandle<V, B> {
    /// Whether both handles share the same behavior instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl<V: 'static, B: Behavior<V> + ?Sized> fmt::Debug for BehaviorHandle<V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.try_borrow() {
            Ok(slot) => f
                .debug_struct("BehaviorHandle")
                .field("behavior", &slot.behavior.name())
                .field(
                    "attached",
                    &slot.associated.as_ref().is_some_and(|w| w.strong_count() > 0),
                )
                .finish(),
            Err(_) => f
                .debug_struct("BehaviorHandle")
                .finish_non_exhaustive(),
        }
    }
}
