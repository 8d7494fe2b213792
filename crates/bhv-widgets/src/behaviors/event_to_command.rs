#![forbid(unsafe_code)]

//! Bridge a view trigger to a [`Command`].

use std::fmt;
use std::rc::Rc;

use bhv_core::{Behavior, BehaviorError};
use bhv_runtime::{Command, SubscriptionScope};

use crate::capability::Enableable;
use crate::trigger::{Trigger, TriggerSource};

/// Executes a command whenever a view trigger fires, and keeps the view's
/// enabled state equal to the command's `can_execute`.
///
/// On attach the view's enabled state is set from `can_execute`, then
/// re-read on every `can_execute_changed` notification until detach. The
/// command is executed on trigger without consulting `can_execute`; a
/// disabled view is expected not to raise it.
///
/// # Failure Modes
///
/// - The view does not publish the trigger: attach fails with
///   [`BehaviorError::UnsupportedTrigger`] and nothing is registered.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use bhv_core::{BehaviorHandle, View};
/// use bhv_runtime::{Event, RelayCommand, Subscription};
/// use bhv_widgets::trigger::forward;
/// use bhv_widgets::{Enableable, EventToCommandBehavior, Trigger, TriggerHandler, TriggerSource};
///
/// #[derive(Default)]
/// struct Button {
///     clicked: Event<()>,
///     enabled: Cell<bool>,
/// }
///
/// impl View for Button {}
///
/// impl Enableable for Button {
///     fn is_enabled(&self) -> bool {
///         self.enabled.get()
///     }
///     fn set_enabled(&self, enabled: bool) {
///         self.enabled.set(enabled);
///     }
/// }
///
/// impl TriggerSource for Button {
///     fn subscribe_trigger(&self, trigger: Trigger, handler: TriggerHandler) -> Option<Subscription> {
///         (trigger == Trigger::Click).then(|| forward(&self.clicked, handler))
///     }
/// }
///
/// let saved = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&saved);
/// let save = Rc::new(RelayCommand::new(move |_: &()| counter.set(counter.get() + 1)));
///
/// let button = Rc::new(Button::default());
/// let bridge = BehaviorHandle::new(EventToCommandBehavior::new(Trigger::Click, Rc::clone(&save)));
/// bridge.attach(&button)?;
/// assert!(button.is_enabled());
///
/// button.clicked.emit(&());
/// assert_eq!(saved.get(), 1);
///
/// bridge.remove();
/// button.clicked.emit(&());
/// assert_eq!(saved.get(), 1);
/// # Ok::<(), bhv_core::BehaviorError>(())
/// ```
pub struct EventToCommandBehavior<C: Command> {
    trigger: Trigger,
    command: Rc<C>,
    parameter: Rc<C::Parameter>,
    scope: SubscriptionScope,
}

impl<C: Command> EventToCommandBehavior<C>
where
    C::Parameter: Default,
{
    /// Bridge `trigger` to `command` with a default parameter.
    #[must_use]
    pub fn new(trigger: Trigger, command: Rc<C>) -> Self {
        Self::with_parameter(trigger, command, C::Parameter::default())
    }
}

impl<C: Command> EventToCommandBehavior<C> {
    /// Bridge `trigger` to `command`, passing `parameter` to both
    /// `execute` and `can_execute`.
    #[must_use]
    pub fn with_parameter(trigger: Trigger, command: Rc<C>, parameter: C::Parameter) -> Self {
        Self {
            trigger,
            command,
            parameter: Rc::new(parameter),
            scope: SubscriptionScope::new(),
        }
    }

    #[must_use]
    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    #[must_use]
    pub fn command(&self) -> &Rc<C> {
        &self.command
    }
}

impl<V, C> Behavior<V> for EventToCommandBehavior<C>
where
    V: TriggerSource + Enableable,
    C: Command + 'static,
    C::Parameter: 'static,
{
    fn on_attached(&mut self, view: &Rc<V>) -> Result<(), BehaviorError> {
        let command = Rc::clone(&self.command);
        let parameter = Rc::clone(&self.parameter);
        let execute = Rc::new(move || command.execute(&parameter));
        let sub = view
            .subscribe_trigger(self.trigger, execute)
            .ok_or(BehaviorError::UnsupportedTrigger {
                trigger: self.trigger.name(),
                view: view.kind(),
            })?;
        self.scope.hold(sub);

        view.set_enabled(self.command.can_execute(&self.parameter));

        let command = Rc::clone(&self.command);
        let parameter = Rc::clone(&self.parameter);
        let target = Rc::downgrade(view);
        self.scope
            .subscribe(self.command.can_execute_changed(), move |_| {
                if let Some(view) = target.upgrade() {
                    let enabled = command.can_execute(&parameter);
                    tracing::trace!(enabled, "mirroring can_execute");
                    view.set_enabled(enabled);
                }
            });
        Ok(())
    }

    fn on_detaching(&mut self, _view: &Rc<V>) {
        self.scope.clear();
    }

    fn name(&self) -> &'static str {
        "EventToCommandBehavior"
    }
}

impl<C: Command> fmt::Debug for EventToCommandBehavior<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventToCommandBehavior")
            .field("trigger", &self.trigger)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
