#![forbid(unsafe_code)]

//! Concrete behaviors and the view capabilities they rely on.
//!
//! # Role in the workspace
//! `bhv-widgets` sits on top of `bhv-core`. Toolkit adapters implement the
//! [`capability`] traits (and [`TriggerSource`]) on their view handles; the
//! behaviors here are generic over any view with the right capabilities.
//!
//! | Behavior | Needs | Effect |
//! |----------|-------|--------|
//! | [`IncrementCounterBehavior`] | [`Clickable`] + [`TextContent`] | shows the click count |
//! | [`SelectAllOnFocusBehavior`] | [`FocusSource`] + [`TextSelection`] | selects all text on focus |
//! | [`HideKeyboardOnEnterBehavior`] | [`EditorActionSource`] | hides the keyboard on Done/Search/Go/Next |
//! | [`BorderColoredBehavior`] | [`BackgroundHost`] | stroked border |
//! | [`RoundCornerBehavior`] | [`BackgroundHost`] | rounded filled background |
//! | [`EventToCommandBehavior`] | [`TriggerSource`] + [`Enableable`] | runs a command on a trigger |

pub mod behaviors;
pub mod capability;
pub mod input;
pub mod style;
pub mod trigger;

pub use behaviors::{
    BorderColoredBehavior, EventToCommandBehavior, HideKeyboardOnEnterBehavior,
    IncrementCounterBehavior, RoundCornerBehavior, SelectAllOnFocusBehavior,
};
pub use capability::{
    BackgroundHost, Clickable, EditorActionSource, Enableable, FocusSource, SoftKeyboard,
    TextContent, TextSelection, WindowToken,
};
pub use input::{EditorAction, EditorActionArgs};
pub use style::{Background, Color};
pub use trigger::{Trigger, TriggerHandler, TriggerSource};
