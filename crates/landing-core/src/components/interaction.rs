//! Variant-tagged interaction wrapper
//!
//! Only `marquee` and `hover` are specialized. Every other declared variant,
//! and any name that is not declared at all, renders as a plain container.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::motion::{
    EasingType, HoverState, MarqueeClock, Motion, MotionTarget, Transform, Transition,
    MARQUEE_TRAVEL_PCT,
};
use crate::view::{Element, Flow, InteractionId, Node, Visual, WidthMode};

/// Default marquee cycle in seconds
pub const DEFAULT_SPEED: f64 = 20.0;

/// Cells between the end of one marquee copy and the start of the next
pub const MARQUEE_SPACING: u16 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionKind {
    TextReveal,
    ClipReveal,
    Parallax,
    Marquee,
    StickyProgress,
    Hover,
    Reveal,
    /// Not a declared variant; kept verbatim
    Unknown(String),
}

impl InteractionKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::TextReveal => "text-reveal",
            Self::ClipReveal => "clip-reveal",
            Self::Parallax => "parallax",
            Self::Marquee => "marquee",
            Self::StickyProgress => "sticky-progress",
            Self::Hover => "hover",
            Self::Reveal => "reveal",
            Self::Unknown(name) => name,
        }
    }
}

impl FromStr for InteractionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "text-reveal" => Self::TextReveal,
            "clip-reveal" => Self::ClipReveal,
            "parallax" => Self::Parallax,
            "marquee" => Self::Marquee,
            "sticky-progress" => Self::StickyProgress,
            "hover" => Self::Hover,
            "reveal" => Self::Reveal,
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-variant runtime state
#[derive(Debug, Clone)]
enum Behavior {
    Marquee(MarqueeClock),
    Hover(HoverState),
    Passthrough,
}

#[derive(Debug, Clone)]
pub struct SignatureInteraction {
    id: InteractionId,
    kind: InteractionKind,
    class: String,
    speed: f64,
    hover_duration: Duration,
    behavior: Behavior,
}

impl SignatureInteraction {
    /// Mount an interaction. `speed` is the marquee cycle in seconds and is
    /// ignored by other variants; `hover_duration` times hover returns.
    pub fn mount(
        id: InteractionId,
        kind: InteractionKind,
        speed: f64,
        hover_duration: Duration,
        now: Instant,
    ) -> Self {
        let behavior = match kind {
            InteractionKind::Marquee => Behavior::Marquee(MarqueeClock::start(speed, now)),
            InteractionKind::Hover => Behavior::Hover(HoverState::new(hover_duration)),
            _ => Behavior::Passthrough,
        };
        Self {
            id,
            kind,
            class: String::new(),
            speed,
            hover_duration,
            behavior,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn id(&self) -> InteractionId {
        self.id
    }

    pub fn kind(&self) -> &InteractionKind {
        &self.kind
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Pointer entered or left the element. Ignored unless `hover`.
    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if let Behavior::Hover(state) = &mut self.behavior {
            state.set_hovered(hovered, now);
        }
    }

    /// Pointer pressed or released over the element. Ignored unless `hover`.
    pub fn set_pressed(&mut self, pressed: bool, now: Instant) {
        if let Behavior::Hover(state) = &mut self.behavior {
            state.set_pressed(pressed, now);
        }
    }

    pub fn is_hovered(&self) -> bool {
        matches!(&self.behavior, Behavior::Hover(state) if state.is_hovered())
    }

    /// Whether the next frame differs from this one
    pub fn is_animating(&self, now: Instant) -> bool {
        match &self.behavior {
            Behavior::Marquee(clock) => !clock.cycle().is_zero(),
            Behavior::Hover(state) => state.is_animating(now),
            Behavior::Passthrough => false,
        }
    }

    /// Declared animation for the element this variant animates
    pub fn motion(&self) -> Option<Motion> {
        match &self.behavior {
            Behavior::Marquee(_) => Some(Motion {
                initial: None,
                animate: MotionTarget {
                    x_pct: Some(MARQUEE_TRAVEL_PCT),
                    ..Default::default()
                },
                while_hover: None,
                while_tap: None,
                transition: Transition::looping(self.speed, EasingType::Linear),
            }),
            Behavior::Hover(_) => Some(Motion {
                initial: None,
                animate: MotionTarget::default(),
                while_hover: Some(MotionTarget {
                    y: Some(Transform::HOVER.y),
                    scale: Some(Transform::HOVER.scale),
                    ..Default::default()
                }),
                while_tap: Some(MotionTarget {
                    scale: Some(Transform::TAP_SCALE),
                    ..Default::default()
                }),
                transition: Transition::once(
                    self.hover_duration.as_secs_f64(),
                    EasingType::Cubic,
                ),
            }),
            Behavior::Passthrough => None,
        }
    }

    pub fn render(&self, children: Vec<Node>, now: Instant) -> Node {
        match &self.behavior {
            Behavior::Marquee(clock) => {
                // Two identical copies, each padded on both sides, so half the
                // track is exactly one copy plus the spacing to the next
                let copy = Element::new("div")
                    .class("marquee-copy")
                    .flow(Flow::Row)
                    .pad(MARQUEE_SPACING / 2, 0)
                    .children(children);

                let mut track = Element::new("div")
                    .class("marquee-track")
                    .flow(Flow::Row)
                    .child(copy.clone())
                    .child(copy);
                track.motion = self.motion();
                track.visual = Visual {
                    translate_x_pct: clock.offset_pct(now),
                    ..Visual::IDENTITY
                };

                Element::new("div")
                    .class(self.class.clone())
                    .flow(Flow::Row)
                    .clip()
                    .child(track)
                    .into()
            }
            Behavior::Hover(state) => {
                let transform = state.sample(now);
                let mut element = Element::new("div")
                    .class(self.class.clone())
                    .width(WidthMode::FitContent)
                    .children(children);
                element.motion = self.motion();
                element.visual = Visual {
                    translate_y: transform.y,
                    scale: transform.scale,
                    ..Visual::IDENTITY
                };
                element.interaction = Some(self.id);
                element.into()
            }
            Behavior::Passthrough => Element::new("div")
                .class(self.class.clone())
                .children(children)
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Tone;

    const HOVER: Duration = Duration::from_millis(200);

    fn mount(kind: &str, speed: f64, now: Instant) -> SignatureInteraction {
        let kind = kind.parse().unwrap();
        SignatureInteraction::mount(InteractionId(0), kind, speed, HOVER, now)
    }

    fn track(node: &Node) -> &Element {
        node.find(|e| e.class == "marquee-track").unwrap()
    }

    #[test]
    fn test_parse_declared_and_unknown() {
        assert_eq!("marquee".parse::<InteractionKind>().unwrap(), InteractionKind::Marquee);
        assert_eq!(
            "sticky-progress".parse::<InteractionKind>().unwrap(),
            InteractionKind::StickyProgress
        );
        let unknown: InteractionKind = "wobble".parse().unwrap();
        assert_eq!(unknown, InteractionKind::Unknown("wobble".to_string()));
        assert_eq!(unknown.to_string(), "wobble");
    }

    #[test]
    fn test_marquee_duplicates_children() {
        let t0 = Instant::now();
        let marquee = mount("marquee", 10.0, t0);
        let node = marquee.render(vec![Node::text("A", Tone::Main)], t0);
        assert_eq!(node.count_text("A"), 2);
        assert_eq!(track(&node).children.len(), 2);
        assert!(node.as_element().unwrap().clip);
    }

    #[test]
    fn test_marquee_copies_carry_their_own_spacing() {
        let t0 = Instant::now();
        let marquee = mount("marquee", 10.0, t0);
        let node = marquee.render(vec![Node::text("A", Tone::Main)], t0);
        let track = track(&node);
        // No gap between copies: each copy's padding is the spacing
        assert_eq!(track.gap, 0);
        for copy in &track.children {
            let copy = copy.as_element().unwrap();
            assert_eq!(copy.class, "marquee-copy");
            assert_eq!(copy.pad_x * 2, MARQUEE_SPACING);
        }
        assert_eq!(track.children[0], track.children[1]);
    }

    #[test]
    fn test_marquee_declares_infinite_linear_loop() {
        let t0 = Instant::now();
        let marquee = mount("marquee", 10.0, t0);
        let node = marquee.render(vec![Node::text("A", Tone::Main)], t0);
        let motion = track(&node).motion.as_ref().unwrap();
        assert_eq!(motion.animate.x_pct, Some(-50.0));
        assert_eq!(motion.transition.repeat, crate::motion::Repeat::Infinite);
        assert_eq!(motion.transition.easing, EasingType::Linear);
        assert_eq!(motion.transition.duration_secs, 10.0);
    }

    #[test]
    fn test_marquee_offset_follows_clock() {
        let t0 = Instant::now();
        let marquee = mount("marquee", 10.0, t0);
        let node = marquee.render(vec![Node::text("A", Tone::Main)], t0 + Duration::from_secs(5));
        assert!((track(&node).visual.translate_x_pct - -25.0).abs() < 1e-9);
        assert!(marquee.is_animating(t0 + Duration::from_secs(1000)));
    }

    #[test]
    fn test_unknown_variant_is_plain_container() {
        let t0 = Instant::now();
        let other = mount("wobble", 10.0, t0).with_class("ticker");
        let node = other.render(vec![Node::text("A", Tone::Main)], t0);
        let element = node.as_element().unwrap();
        assert!(element.motion.is_none());
        assert_eq!(element.visual, Visual::IDENTITY);
        assert_eq!(element.class, "ticker");
        assert_eq!(node.count_text("A"), 1);
        assert!(!other.is_animating(t0));
    }

    #[test]
    fn test_declared_unspecialized_variants_pass_through() {
        let t0 = Instant::now();
        for kind in ["text-reveal", "clip-reveal", "parallax", "sticky-progress", "reveal"] {
            let node = mount(kind, 10.0, t0).render(vec![Node::text("A", Tone::Main)], t0);
            assert!(node.as_element().unwrap().motion.is_none(), "{}", kind);
            assert_eq!(node.count_text("A"), 1, "{}", kind);
        }
    }

    #[test]
    fn test_hover_variant_tracks_pointer() {
        let t0 = Instant::now();
        let mut hover = mount("hover", DEFAULT_SPEED, t0);
        hover.set_hovered(true, t0);
        assert!(hover.is_hovered());
        let node = hover.render(vec![Node::text("CTA", Tone::Inverse)], t0 + HOVER);
        let element = node.as_element().unwrap();
        assert_eq!(element.interaction, Some(InteractionId(0)));
        assert_eq!(element.visual.translate_y, -2.0);
        assert_eq!(element.visual.scale, 1.02);
        let motion = element.motion.as_ref().unwrap();
        assert_eq!(motion.while_tap.unwrap().scale, Some(0.98));
    }

    #[test]
    fn test_hover_transition_uses_configured_duration() {
        let t0 = Instant::now();
        let kind = "hover".parse().unwrap();
        let hover = SignatureInteraction::mount(
            InteractionId(1),
            kind,
            DEFAULT_SPEED,
            Duration::from_millis(350),
            t0,
        );
        let motion = hover.motion().unwrap();
        assert_eq!(motion.transition.duration_secs, 0.35);
        assert_eq!(motion.transition.easing, EasingType::Cubic);
    }

    #[test]
    fn test_pointer_events_ignored_by_marquee() {
        let t0 = Instant::now();
        let mut marquee = mount("marquee", 10.0, t0);
        marquee.set_hovered(true, t0);
        marquee.set_pressed(true, t0);
        assert!(!marquee.is_hovered());
    }
}
