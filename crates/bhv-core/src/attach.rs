#![forbid(unsafe_code)]

//! Attach/detach helpers: wiring behaviors to a view's lifecycle.
//!
//! [`attach_behavior`] and [`attach_behaviors`] bridge a view's "became live"
//! and "torn down" notifications into [`BehaviorHandle::attach`] and
//! [`BehaviorHandle::remove`]. Each helper call registers one pair of
//! one-shot listeners, shared by every behavior in the batch:
//!
//! - **became live**: unlinks itself, then attaches the batch in input order.
//! - **torn down**: unlinks itself, cancels the became-live listener if it is
//!   still pending, then removes the batch in input order.
//!
//! Views without a [`Lifecycle`](crate::Lifecycle) are attached immediately
//! and only ever detached by [`remove_behavior`] / [`remove_behaviors`].
//!
//! # Failure Modes
//!
//! - An `on_attached` error stops the batch: earlier behaviors stay attached,
//!   later ones are not attempted. The error reaches whoever raised the
//!   notification ([`Lifecycle::mark_live`](crate::Lifecycle::mark_live)), or
//!   the helper's caller when activation is immediate.
//! - The torn-down listener is armed before an immediate activation runs, so
//!   behaviors attached ahead of a failing one are still removed on teardown.
//! - Listeners hold the view weakly and handles keep only a weak association,
//!   so dropping a view without tearing it down frees it and its listeners.
//!   If the view is gone when a notification fires, the batch is left
//!   untouched.

use std::rc::Rc;

use bhv_runtime::SubscriptionKey;

use crate::behavior::{Behavior, BehaviorHandle};
use crate::error::BehaviorError;
use crate::options::AttachOptions;
use crate::view::View;

/// A set of behaviors activated and deactivated together.
trait Batch<V> {
    fn attach_all(&self, view: &Rc<V>) -> Result<(), BehaviorError>;
    fn remove_all(&self);
    fn len(&self) -> usize;
}

impl<V: 'static, B: Behavior<V> + ?Sized + 'static> Batch<V> for BehaviorHandle<V, B> {
    fn attach_all(&self, view: &Rc<V>) -> Result<(), BehaviorError> {
        self.attach(view)
    }

    fn remove_all(&self) {
        self.remove();
    }

    fn len(&self) -> usize {
        1
    }
}

impl<V: 'static> Batch<V> for Vec<BehaviorHandle<V>> {
    fn attach_all(&self, view: &Rc<V>) -> Result<(), BehaviorError> {
        self.iter().try_for_each(|behavior| behavior.attach(view))
    }

    fn remove_all(&self) {
        for behavior in self {
            behavior.remove();
        }
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// The one-shot listeners created by one attach helper call.
///
/// Dropping a registration leaves the listeners in place; they live as long
/// as the view's lifecycle, like any other handler registered on it.
#[derive(Debug, Default)]
pub struct Registration {
    on_live: Option<SubscriptionKey>,
    on_torn_down: Option<SubscriptionKey>,
}

impl Registration {
    /// Whether activation is still waiting for "became live".
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.on_live.as_ref().is_some_and(SubscriptionKey::is_active)
    }

    /// Whether teardown will still remove the batch.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.on_torn_down
            .as_ref()
            .is_some_and(SubscriptionKey::is_active)
    }

    /// Unregister both listeners without touching the behaviors. Returns
    /// `true` if anything was still registered.
    pub fn cancel(self) -> bool {
        let live = self.on_live.as_ref().is_some_and(SubscriptionKey::cancel);
        let torn_down = self
            .on_torn_down
            .as_ref()
            .is_some_and(SubscriptionKey::cancel);
        live || torn_down
    }
}

/// Attach one behavior to `view` with default [`AttachOptions`].
///
/// # Errors
///
/// Only when activation is immediate: the behavior's `on_attached` error.
pub fn attach_behavior<V, B>(
    view: &Rc<V>,
    behavior: &BehaviorHandle<V, B>,
) -> Result<Registration, BehaviorError>
where
    V: View,
    B: Behavior<V> + ?Sized + 'static,
{
    attach_behavior_with(view, behavior, AttachOptions::default())
}

/// Attach one behavior to `view`.
///
/// # Errors
///
/// Only when activation is immediate: the behavior's `on_attached` error.
pub fn attach_behavior_with<V, B>(
    view: &Rc<V>,
    behavior: &BehaviorHandle<V, B>,
    options: AttachOptions,
) -> Result<Registration, BehaviorError>
where
    V: View,
    B: Behavior<V> + ?Sized + 'static,
{
    wire(view, Rc::new(behavior.clone()), options)
}

/// Attach an ordered batch of behaviors to `view` with default
/// [`AttachOptions`]. Hooks fire in slice order on attach and on detach.
///
/// # Errors
///
/// Only when activation is immediate: the first `on_attached` error.
pub fn attach_behaviors<V: View>(
    view: &Rc<V>,
    behaviors: &[BehaviorHandle<V>],
) -> Result<Registration, BehaviorError> {
    attach_behaviors_with(view, behaviors, AttachOptions::default())
}

/// Attach an ordered batch of behaviors to `view`.
///
/// # Errors
///
/// Only when activation is immediate: the first `on_attached` error.
pub fn attach_behaviors_with<V: View>(
    view: &Rc<V>,
    behaviors: &[BehaviorHandle<V>],
    options: AttachOptions,
) -> Result<Registration, BehaviorError> {
    wire(view, Rc::new(behaviors.to_vec()), options)
}

/// Remove one behavior now, independent of lifecycle notifications.
pub fn remove_behavior<V, B>(view: &Rc<V>, behavior: &BehaviorHandle<V, B>)
where
    V: View,
    B: Behavior<V> + ?Sized,
{
    warn_if_foreign(view, behavior);
    behavior.remove();
}

/// Remove an ordered batch of behaviors now, in slice order.
pub fn remove_behaviors<V: View>(view: &Rc<V>, behaviors: &[BehaviorHandle<V>]) {
    for behavior in behaviors {
        warn_if_foreign(view, behavior);
        behavior.remove();
    }
}

/// Method-call form of the helpers, implemented for `Rc<V>`.
///
/// ```
/// use bhv_core::{Behavior, BehaviorHandle, View, ViewBehaviorExt};
/// use std::rc::Rc;
///
/// struct Label;
/// impl View for Label {}
///
/// struct Noop;
/// impl Behavior<Label> for Noop {}
///
/// let label = Rc::new(Label);
/// let noop = BehaviorHandle::new(Noop);
/// label.attach_behavior(&noop)?;
/// assert!(noop.is_attached());
/// label.remove_behavior(&noop);
/// # Ok::<(), bhv_core::BehaviorError>(())
/// ```
pub trait ViewBehaviorExt<V: View> {
    /// See [`attach_behavior`].
    ///
    /// # Errors
    ///
    /// Only when activation is immediate: the behavior's `on_attached` error.
    fn attach_behavior<B>(&self, behavior: &BehaviorHandle<V, B>) -> Result<Registration, BehaviorError>
    where
        B: Behavior<V> + ?Sized + 'static;

    /// See [`attach_behaviors`].
    ///
    /// # Errors
    ///
    /// Only when activation is immediate: the first `on_attached` error.
    fn attach_behaviors(&self, behaviors: &[BehaviorHandle<V>]) -> Result<Registration, BehaviorError>;

    /// See [`remove_behavior`].
    fn remove_behavior<B>(&self, behavior: &BehaviorHandle<V, B>)
    where
        B: Behavior<V> + ?Sized;

    /// See [`remove_behaviors`].
    fn remove_behaviors(&self, behaviors: &[BehaviorHandle<V>]);
}

impl<V: View> ViewBehaviorExt<V> for Rc<V> {
    fn attach_behavior<B>(&self, behavior: &BehaviorHandle<V, B>) -> Result<Registration, BehaviorError>
    where
        B: Behavior<V> + ?Sized + 'static,
    {
        attach_behavior(self, behavior)
    }

    fn attach_behaviors(&self, behaviors: &[BehaviorHandle<V>]) -> Result<Registration, BehaviorError> {
        attach_behaviors(self, behaviors)
    }

    fn remove_behavior<B>(&self, behavior: &BehaviorHandle<V, B>)
    where
        B: Behavior<V> + ?Sized,
    {
        remove_behavior(self, behavior);
    }

    fn remove_behaviors(&self, behaviors: &[BehaviorHandle<V>]) {
        remove_behaviors(self, behaviors);
    }
}

fn warn_if_foreign<V, B>(view: &Rc<V>, behavior: &BehaviorHandle<V, B>)
where
    V: View,
    B: Behavior<V> + ?Sized,
{
    if behavior.is_attached() && !behavior.is_attached_to(view) {
        tracing::warn!(
            behavior = behavior.name(),
            view = view.kind(),
            "removing a behavior through a view it is not attached to"
        );
    }
}

fn wire<V: View>(
    view: &Rc<V>,
    batch: Rc<dyn Batch<V>>,
    options: AttachOptions,
) -> Result<Registration, BehaviorError> {
    let kind = view.kind();
    let lifecycle = view.lifecycle();
    let now = options.activates_now(lifecycle);

    let Some(lifecycle) = lifecycle else {
        tracing::debug!(view = kind, behaviors = batch.len(), "activating immediately");
        batch.attach_all(view)?;
        return Ok(Registration::default());
    };

    let on_live = if now {
        None
    } else {
        let target = Rc::downgrade(view);
        let batch = Rc::clone(&batch);
        let key = lifecycle
            .became_live()
            .try_subscribe_once(move |_: &()| {
                let Some(view) = target.upgrade() else {
                    return Ok(());
                };
                tracing::debug!(view = kind, behaviors = batch.len(), "view became live");
                batch.attach_all(&view)
            })
            .into_key();
        Some(key)
    };

    // Armed before any immediate activation so a partial batch is still removed.
    let pending = on_live.clone();
    let teardown = Rc::clone(&batch);
    let on_torn_down = lifecycle
        .torn_down()
        .subscribe_once(move |_: &()| {
            if pending.as_ref().is_some_and(SubscriptionKey::cancel) {
                tracing::debug!(view = kind, "torn down before becoming live; activation cancelled");
            }
            tracing::debug!(view = kind, behaviors = teardown.len(), "view torn down");
            teardown.remove_all();
        })
        .into_key();

    if now {
        tracing::debug!(view = kind, behaviors = batch.len(), "activating immediately");
        batch.attach_all(view)?;
    }

    Ok(Registration {
        on_live,
        on_torn_down: Some(on_torn_down),
    })
}
