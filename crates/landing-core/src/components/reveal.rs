//! One-shot viewport-triggered fade / slide-in
//!
//! A `Reveal` starts hidden (transparent, pushed down by the slide offset).
//! The first time its bounds overlap the viewport, grown by the configured
//! margin, it records a start instant (`trigger + delay`) and eases to fully
//! visible. It never fires twice and never hides again.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::MotionConfig;
use crate::geometry::Bounds;
use crate::motion::timing::{is_complete, lerp, progress, secs};
use crate::motion::{EasingType, Motion, MotionTarget, Transition};
use crate::view::{Element, Node, RevealId, Visual, WidthMode};

/// Caller-facing props
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealProps {
    /// Seconds between intersection and the start of the animation
    pub delay: f64,
    pub width: WidthMode,
}

impl Default for RevealProps {
    fn default() -> Self {
        Self {
            delay: 0.25,
            width: WidthMode::FitContent,
        }
    }
}

impl RevealProps {
    pub fn full_width() -> Self {
        Self {
            width: WidthMode::Full,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }
}

/// Fixed animation parameters, normally taken from [`MotionConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTiming {
    pub duration: Duration,
    pub easing: EasingType,
    /// Slide distance in px
    pub offset: f64,
    /// Viewport margin in px (negative shrinks the viewport)
    pub margin: f64,
    pub reduced_motion: bool,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

impl RevealTiming {
    pub fn from_config(config: &MotionConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.reveal_duration_ms),
            easing: config.reveal_easing,
            offset: config.reveal_offset_px,
            margin: config.reveal_margin_px,
            reduced_motion: config.reduced_motion,
        }
    }

    /// Offset of the hidden state; zero under reduced motion
    pub fn hidden_offset(&self) -> f64 {
        if self.reduced_motion {
            0.0
        } else {
            self.offset
        }
    }
}

/// Sampled reveal presentation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub y: f64,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    id: RevealId,
    props: RevealProps,
    timing: RevealTiming,
    /// Set once, on first intersection; animation start including delay
    started_at: Option<Instant>,
}

impl Reveal {
    pub fn new(id: RevealId, props: RevealProps, timing: RevealTiming) -> Self {
        Self {
            id,
            props,
            timing,
            started_at: None,
        }
    }

    pub fn id(&self) -> RevealId {
        self.id
    }

    pub fn props(&self) -> &RevealProps {
        &self.props
    }

    /// Whether the element has ever crossed into the viewport
    pub fn is_in_view(&self) -> bool {
        self.started_at.is_some()
    }

    /// Report the element's bounds against the viewport.
    ///
    /// Returns `true` only for the call that fires the reveal.
    pub fn observe(&mut self, bounds: Bounds, viewport: Bounds, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        let root = viewport.inflate(self.timing.margin);
        if !bounds.intersects(&root) {
            return false;
        }
        self.started_at = Some(now + secs(self.props.delay));
        debug!(id = self.id.0, delay = self.props.delay, "reveal fired");
        true
    }

    /// Current opacity and vertical offset
    pub fn style(&self, now: Instant) -> RevealStyle {
        let hidden = RevealStyle {
            opacity: 0.0,
            y: self.timing.hidden_offset(),
        };
        let Some(start) = self.started_at else {
            return hidden;
        };
        let t = self
            .timing
            .easing
            .apply(progress(start, self.timing.duration, now));
        RevealStyle {
            opacity: lerp(hidden.opacity, 1.0, t),
            y: lerp(hidden.y, 0.0, t),
        }
    }

    /// True while the fade is scheduled or running
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at
            .map(|start| !is_complete(start, self.timing.duration, now))
            .unwrap_or(false)
    }

    /// Declared animation: hidden variant to visible variant
    pub fn motion(&self) -> Motion {
        Motion {
            initial: Some(MotionTarget::opacity_y(0.0, self.timing.hidden_offset())),
            animate: MotionTarget::opacity_y(1.0, 0.0),
            while_hover: None,
            while_tap: None,
            transition: Transition::once(self.timing.duration.as_secs_f64(), self.timing.easing)
                .with_delay(self.props.delay),
        }
    }

    /// Wrap `children` in the reveal container at its current state
    pub fn render(&self, children: Vec<Node>, now: Instant) -> Node {
        let style = self.style(now);
        let mut element = Element::new("div")
            .width(self.props.width)
            .children(children);
        element.motion = Some(self.motion());
        element.visual = Visual {
            opacity: style.opacity,
            translate_y: style.y,
            ..Visual::IDENTITY
        };
        element.reveal = Some(self.id);
        element.into()
    }
}
