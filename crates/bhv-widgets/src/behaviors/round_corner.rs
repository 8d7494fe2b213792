#![forbid(unsafe_code)]

//! Rounded, filled background decoration.

use std::rc::Rc;

use bhv_core::{Behavior, BehaviorError};

use crate::capability::BackgroundHost;
use crate::style::{Background, Color};

/// Replaces the view's background with a filled rectangle with rounded
/// corners.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RoundCornerBehavior {
    pub background_color: Color,
    pub corner_radius: f32,
}

impl RoundCornerBehavior {
    #[must_use]
    pub const fn new(background_color: Color, corner_radius: f32) -> Self {
        Self {
            background_color,
            corner_radius,
        }
    }
}

impl<V: BackgroundHost> Behavior<V> for RoundCornerBehavior {
    fn on_attached(&mut self, view: &Rc<V>) -> Result<(), BehaviorError> {
        view.set_background(Some(Background::RoundRect {
            fill: self.background_color,
            radius: self.corner_radius,
        }));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "RoundCornerBehavior"
    }
}
