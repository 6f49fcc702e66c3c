//! L3 Molecular Layer: Scroll animation controller
//!
//! Positions are in terminal rows. Every time-dependent call takes `now` so
//! the controller can be driven by a real clock or stepped in tests.

use std::time::{Duration, Instant};

use landing_core::motion::timing::{is_complete, lerp_u16, progress};

use super::config::{EasingType, ScrollConfig, ScrollConfigExt};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// Key presses queue a delta with `scroll_by`; `update()` folds pending
/// deltas into a new target and returns the interpolated position.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current_scroll: u16,
    /// Batched deltas from rapid key presses
    pending_delta: i32,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Pending work means the caller should poll at the animation frame rate
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position once the current animation ends
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
        self.pending_delta = 0;
    }

    /// Animate to an absolute row, or jump when smooth scrolling is off
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.config.is_smooth() || self.current_scroll == target {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        self.start_animation(target, now);
    }

    /// Scroll by a delta (positive is down)
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.config.is_smooth() {
            self.current_scroll = clamp_row(self.current_scroll as i32 + delta, max_scroll);
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        let lines = self.step_lines();
        self.scroll_by(lines, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        let lines = self.step_lines();
        self.scroll_by(-lines, max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(half_page(viewport_height), max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-half_page(viewport_height), max_scroll);
    }

    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Advance the animation and return the current position
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let new_target = clamp_row(self.target_scroll() as i32 + self.pending_delta, max_scroll);
            self.pending_delta = 0;
            if new_target != self.current_scroll {
                self.start_animation(new_target, now);
            }
        }

        if let Some(anim) = &self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.current_scroll = lerp_u16(anim.from, anim.to, t).min(max_scroll);
            }
        }

        // The page can shrink under us (terminal resize)
        self.current_scroll = self.current_scroll.min(max_scroll);
        self.current_scroll
    }

    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }

    fn start_animation(&mut self, to: u16, now: Instant) {
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current_scroll,
            to,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    fn step_lines(&self) -> i32 {
        // Smooth scrolling moves one row per press for fine control
        if self.config.is_smooth() {
            1
        } else {
            self.config.scroll_lines.max(1) as i32
        }
    }
}

fn half_page(viewport_height: u16) -> i32 {
    (viewport_height / 2).max(1) as i32
}

fn clamp_row(row: i32, max_scroll: u16) -> u16 {
    row.clamp(0, max_scroll as i32) as u16
}
