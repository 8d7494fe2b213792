#![forbid(unsafe_code)]

//! Named view notifications a command bridge can bind to.
//!
//! [`Trigger`] is the closed set of notifications; each has a stable name
//! that round-trips through [`FromStr`] and [`Display`](fmt::Display), so
//! bindings can be written down as strings. A view publishes triggers by
//! implementing [`TriggerSource`], usually by forwarding its own typed
//! events through [`forward`] and [`forward_if`].
//!
//! # Example
//!
//! ```
//! use bhv_widgets::Trigger;
//!
//! let trigger: Trigger = "Click".parse()?;
//! assert_eq!(trigger, Trigger::Click);
//! assert_eq!(trigger.to_string(), "Click");
//! assert!("Swipe".parse::<Trigger>().is_err());
//! # Ok::<(), bhv_core::BehaviorError>(())
//! ```

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use bhv_core::{BehaviorError, View};
use bhv_runtime::{Event, Subscription};

/// A view notification identified by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Trigger {
    Click,
    LongClick,
    FocusGained,
    FocusLost,
    EditingDidBegin,
    EditingDidEnd,
    TextChanged,
    EditorAction,
}

impl Trigger {
    pub const ALL: [Self; 8] = [
        Self::Click,
        Self::LongClick,
        Self::FocusGained,
        Self::FocusLost,
        Self::EditingDidBegin,
        Self::EditingDidEnd,
        Self::TextChanged,
        Self::EditorAction,
    ];

    /// Stable name of the trigger.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "Click",
            Self::LongClick => "LongClick",
            Self::FocusGained => "FocusGained",
            Self::FocusLost => "FocusLost",
            Self::EditingDidBegin => "EditingDidBegin",
            Self::EditingDidEnd => "EditingDidEnd",
            Self::TextChanged => "TextChanged",
            Self::EditorAction => "EditorAction",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trigger {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|trigger| trigger.name() == s)
            .ok_or_else(|| BehaviorError::UnknownTrigger(s.to_owned()))
    }
}

/// Handler invoked when a trigger fires. Payloads are not forwarded.
pub type TriggerHandler = Rc<dyn Fn()>;

/// A view that publishes some of the [`Trigger`]s.
pub trait TriggerSource: View {
    /// Register `handler` for `trigger`.
    ///
    /// Returns `None` when this view does not publish `trigger`.
    fn subscribe_trigger(&self, trigger: Trigger, handler: TriggerHandler) -> Option<Subscription>;
}

/// Forward every notification of `event` to `handler`.
pub fn forward<A: 'static>(event: &Event<A>, handler: TriggerHandler) -> Subscription {
    event.subscribe(move |_| handler())
}

/// Forward the notifications of `event` whose payload satisfies `filter`.
pub fn forward_if<A: 'static>(
    event: &Event<A>,
    filter: impl Fn(&A) -> bool + 'static,
    handler: TriggerHandler,
) -> Subscription {
    event.subscribe(move |args| {
        if filter(args) {
            handler();
        }
    })
}
