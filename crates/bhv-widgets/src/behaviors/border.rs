#![forbid(unsafe_code)]

//! Outline border decoration.

use std::rc::Rc;

use bhv_core::{Behavior, BehaviorError};

use crate::capability::BackgroundHost;
use crate::style::{Background, Color};

/// Replaces the view's background with a stroked outline.
///
/// The background installed on attach stays after detach; decorations are
/// not reverted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderColoredBehavior {
    pub color: Color,
    pub stroke_width: f32,
}

impl BorderColoredBehavior {
    #[must_use]
    pub const fn new(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }

    #[must_use]
    pub const fn background(&self) -> Background {
        Background::Stroke {
            color: self.color,
            width: self.stroke_width,
        }
    }
}

impl<V: BackgroundHost> Behavior<V> for BorderColoredBehavior {
    fn on_attached(&mut self, view: &Rc<V>) -> Result<(), BehaviorError> {
        view.set_background(Some(self.background()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "BorderColoredBehavior"
    }
}
