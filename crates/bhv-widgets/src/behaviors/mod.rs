//! Concrete behaviors.

mod border;
mod counter;
mod event_to_command;
mod hide_keyboard;
mod round_corner;
mod select_all;

pub use border::BorderColoredBehavior;
pub use counter::IncrementCounterBehavior;
pub use event_to_command::EventToCommandBehavior;
pub use hide_keyboard::HideKeyboardOnEnterBehavior;
pub use round_corner::RoundCornerBehavior;
pub use select_all::SelectAllOnFocusBehavior;
