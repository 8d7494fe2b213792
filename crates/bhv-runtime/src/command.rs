#![forbid(unsafe_code)]

//! Command collaborator: an executable action with an executability
//! predicate and a change notification for that predicate.
//!
//! Views never own commands. A behavior bridging a view trigger to a command
//! executes it on trigger and mirrors [`Command::can_execute`] into the
//! view's enabled state, re-reading it whenever
//! [`Command::can_execute_changed`] fires.

use std::fmt;

use crate::event::Event;

/// An executable action.
pub trait Command {
    /// Argument passed to `execute` and `can_execute`.
    type Parameter;

    /// Run the action.
    fn execute(&self, parameter: &Self::Parameter);

    /// Whether the action may run right now.
    fn can_execute(&self, _parameter: &Self::Parameter) -> bool {
        true
    }

    /// Fires whenever the answer of `can_execute` may have changed.
    fn can_execute_changed(&self) -> &Event<()>;
}

type ExecuteFn<P> = Box<dyn Fn(&P)>;
type PredicateFn<P> = Box<dyn Fn(&P) -> bool>;

/// Closure-backed [`Command`].
///
/// # Example
///
/// ```
/// use bhv_runtime::{Command, RelayCommand};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let ready = Rc::new(Cell::new(false));
/// let r = Rc::clone(&ready);
/// let save = RelayCommand::new(|_: &()| {}).with_can_execute(move |_| r.get());
///
/// assert!(!save.can_execute(&()));
/// ready.set(true);
/// save.raise_can_execute_changed();
/// assert!(save.can_execute(&()));
/// ```
pub struct RelayCommand<P = ()> {
    execute: ExecuteFn<P>,
    can_execute: Option<PredicateFn<P>>,
    changed: Event<()>,
}

impl<P> RelayCommand<P> {
    /// Create a command that can always execute.
    pub fn new(execute: impl Fn(&P) + 'static) -> Self {
        Self {
            execute: Box::new(execute),
            can_execute: None,
            changed: Event::new(),
        }
    }

    /// Attach an executability predicate.
    #[must_use]
    pub fn with_can_execute(mut self, predicate: impl Fn(&P) -> bool + 'static) -> Self {
        self.can_execute = Some(Box::new(predicate));
        self
    }

    /// Notify observers that `can_execute` should be re-evaluated.
    pub fn raise_can_execute_changed(&self) {
        tracing::trace!(
            subscribers = self.changed.subscriber_count(),
            "can_execute changed"
        );
        self.changed.emit(&());
    }
}

impl<P> Command for RelayCommand<P> {
    type Parameter = P;

    fn execute(&self, parameter: &P) {
        (self.execute)(parameter);
    }

    fn can_execute(&self, parameter: &P) -> bool {
        self.can_execute
            .as_ref()
            .is_none_or(|predicate| predicate(parameter))
    }

    fn can_execute_changed(&self) -> &Event<()> {
        &self.changed
    }
}

impl<P> fmt::Debug for RelayCommand<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand")
            .field("has_predicate", &self.can_execute.is_some())
            .field("changed", &self.changed)
            .finish_non_exhaustive()
    }
}
