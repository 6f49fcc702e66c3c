//! L3 Molecular Layer: Hover / press micro-interaction
//!
//! Tracks pointer state for one element and eases its transform toward the
//! target for that state. Every state change retargets from the currently
//! sampled transform, so rapid enter/leave never jumps.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::easing::EasingType;
use super::timing::{is_complete, lerp, progress};

/// Vertical lift and uniform scale applied to an element
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Vertical offset in px (negative is up)
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const REST: Transform = Transform { y: 0.0, scale: 1.0 };
    pub const HOVER: Transform = Transform { y: -2.0, scale: 1.02 };
    pub const TAP_SCALE: f64 = 0.98;

    fn lerp(from: Transform, to: Transform, t: f64) -> Transform {
        Transform {
            y: lerp(from.y, to.y, t),
            scale: lerp(from.scale, to.scale, t),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone)]
pub struct HoverState {
    hovered: bool,
    pressed: bool,
    from: Transform,
    to: Transform,
    start: Option<Instant>,
    duration: Duration,
    easing: EasingType,
}

impl HoverState {
    pub fn new(duration: Duration) -> Self {
        Self {
            hovered: false,
            pressed: false,
            from: Transform::REST,
            to: Transform::REST,
            start: None,
            duration,
            easing: EasingType::Cubic,
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Transform the element is heading toward
    pub fn target(&self) -> Transform {
        match (self.hovered, self.pressed) {
            (hovered, true) => Transform {
                y: if hovered { Transform::HOVER.y } else { Transform::REST.y },
                scale: Transform::TAP_SCALE,
            },
            (true, false) => Transform::HOVER,
            (false, false) => Transform::REST,
        }
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered != hovered {
            self.hovered = hovered;
            // Leaving the element also ends a press
            if !hovered {
                self.pressed = false;
            }
            self.retarget(now);
        }
    }

    pub fn set_pressed(&mut self, pressed: bool, now: Instant) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.retarget(now);
        }
    }

    fn retarget(&mut self, now: Instant) {
        self.from = self.sample(now);
        self.to = self.target();
        self.start = Some(now);
    }

    /// Current interpolated transform
    pub fn sample(&self, now: Instant) -> Transform {
        match self.start {
            None => self.to,
            Some(start) if is_complete(start, self.duration, now) => self.to,
            Some(start) => {
                let t = self.easing.apply(progress(start, self.duration, now));
                Transform::lerp(self.from, self.to, t)
            }
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.start
            .map(|start| !is_complete(start, self.duration, now))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: Duration = Duration::from_millis(200);

    #[test]
    fn test_rest_by_default() {
        let state = HoverState::new(D);
        assert_eq!(state.sample(Instant::now()), Transform::REST);
    }

    #[test]
    fn test_hover_lifts_and_grows() {
        let t0 = Instant::now();
        let mut state = HoverState::new(D);
        state.set_hovered(true, t0);

        let mid = state.sample(t0 + Duration::from_millis(100));
        assert!(mid.y < 0.0 && mid.y > Transform::HOVER.y);
        assert!(mid.scale > 1.0 && mid.scale < Transform::HOVER.scale);

        assert_eq!(state.sample(t0 + D), Transform::HOVER);
        assert!(!state.is_animating(t0 + D));
    }

    #[test]
    fn test_press_shrinks_while_keeping_lift() {
        let t0 = Instant::now();
        let mut state = HoverState::new(D);
        state.set_hovered(true, t0);
        state.set_pressed(true, t0 + D);
        let pressed = state.sample(t0 + D * 2);
        assert_eq!(pressed.scale, Transform::TAP_SCALE);
        assert_eq!(pressed.y, Transform::HOVER.y);
    }

    #[test]
    fn test_leave_returns_to_rest_and_releases() {
        let t0 = Instant::now();
        let mut state = HoverState::new(D);
        state.set_hovered(true, t0);
        state.set_pressed(true, t0);
        state.set_hovered(false, t0 + D);
        assert!(!state.is_pressed());
        assert_eq!(state.sample(t0 + D * 2), Transform::REST);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let t0 = Instant::now();
        let mut state = HoverState::new(D);
        state.set_hovered(true, t0);
        let halfway = t0 + Duration::from_millis(100);
        let before = state.sample(halfway);
        state.set_hovered(false, halfway);
        let after = state.sample(halfway);
        assert!((before.y - after.y).abs() < 1e-9);
        assert!((before.scale - after.scale).abs() < 1e-9);
    }
}
