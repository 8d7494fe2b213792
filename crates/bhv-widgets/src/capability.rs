#![forbid(unsafe_code)]

//! View capability traits.
//!
//! A concrete behavior bounds its view type by the capabilities it uses, so
//! attaching it to a view lacking one is a compile error rather than a
//! runtime failure. Toolkit adapters implement these on their view handles.
//!
//! Capability methods take `&self`: views are shared as `Rc<V>` and keep
//! their state behind interior mutability.

use bhv_core::View;
use bhv_runtime::Event;

use crate::input::EditorActionArgs;
use crate::style::Background;

/// A view that publishes click notifications.
pub trait Clickable: View {
    fn clicked(&self) -> &Event<()>;
}

/// A view with a displayed text.
pub trait TextContent: View {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

/// A view that publishes focus changes (`true` = gained, `false` = lost).
pub trait FocusSource: View {
    fn focus_changed(&self) -> &Event<bool>;
}

/// A text view whose content can be selected programmatically.
pub trait TextSelection: View {
    fn select_all(&self);
}

/// A view with an enabled state.
pub trait Enableable: View {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&self, enabled: bool);
}

/// A view whose background drawable can be replaced.
pub trait BackgroundHost: View {
    fn background(&self) -> Option<Background>;
    fn set_background(&self, background: Option<Background>);
}

/// Opaque handle to the native window a view is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowToken(pub u64);

/// A text field that reports editor action keys.
pub trait EditorActionSource: View {
    fn editor_action(&self) -> &Event<EditorActionArgs>;
    fn window_token(&self) -> WindowToken;
}

/// The platform input-method service.
pub trait SoftKeyboard {
    /// Hide the soft keyboard currently shown for `window`.
    fn hide_soft_input(&self, window: WindowToken);
}
