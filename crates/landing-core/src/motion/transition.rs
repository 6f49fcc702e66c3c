//! L4 Atomic Layer: Declarative animation descriptions
//!
//! A [`Motion`] is what a component declares about itself (start state,
//! target state, timing). It is attached to view elements so the renderer and
//! tests can inspect it; the sampled values live in [`crate::view::Visual`].

use std::time::Duration;

use serde::Serialize;

use super::easing::EasingType;
use super::timing::secs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    Never,
    Infinite,
}

/// Timing of an animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    /// Seconds for one run (one cycle when repeating)
    pub duration_secs: f64,
    /// Seconds to wait after the trigger
    pub delay_secs: f64,
    pub easing: EasingType,
    pub repeat: Repeat,
}

impl Transition {
    pub fn once(duration_secs: f64, easing: EasingType) -> Self {
        Self {
            duration_secs,
            delay_secs: 0.0,
            easing,
            repeat: Repeat::Never,
        }
    }

    pub fn looping(duration_secs: f64, easing: EasingType) -> Self {
        Self {
            repeat: Repeat::Infinite,
            ..Self::once(duration_secs, easing)
        }
    }

    pub fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    pub fn duration(&self) -> Duration {
        secs(self.duration_secs)
    }

    pub fn delay(&self) -> Duration {
        secs(self.delay_secs)
    }
}

/// A set of animatable properties; `None` leaves the property untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MotionTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Horizontal offset as a percentage of the element's own width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_pct: Option<f64>,
    /// Vertical offset in px
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl MotionTarget {
    pub fn opacity_y(opacity: f64, y: f64) -> Self {
        Self {
            opacity: Some(opacity),
            y: Some(y),
            ..Default::default()
        }
    }
}

/// Animation declaration attached to an element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Motion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<MotionTarget>,
    pub animate: MotionTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub while_hover: Option<MotionTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub while_tap: Option<MotionTarget>,
    pub transition: Transition,
}
