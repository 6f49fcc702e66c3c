//! The CORE / OS landing page
//!
//! `Page` owns every piece of runtime state the page needs: the pointer
//! position driving the hero gradient, one `Reveal` per animated block, the
//! ticker marquee and the two call-to-action hover wrappers. `view(now)`
//! rebuilds the whole tree with sampled motion values; frontends lay it out,
//! then report reveal anchor bounds back through `observe`.

pub mod content;
pub mod parallax;

use std::time::{Duration, Instant};

use crate::components::{
    InteractionKind, Reveal, RevealProps, RevealTiming, SignatureEffect, SignatureInteraction,
};
use crate::config::MotionConfig;
use crate::geometry::Bounds;
use crate::view::{Element, Flow, InteractionId, Justify, Node, RevealId, Tone, Visual};

use content::*;
pub use parallax::{focal_point, MousePosition, RadialGradient};

pub const TICKER: InteractionId = InteractionId(0);
pub const HERO_CTA: InteractionId = InteractionId(1);
pub const FOOTER_CTA: InteractionId = InteractionId(2);

/// Reveal slots in document order
const HERO_REVEALS: usize = 4;
const FEATURE_REVEALS: usize = 4;
const THERMAL_REVEAL: usize = HERO_REVEALS + FEATURE_REVEALS;
const FOOTER_REVEALS: usize = 2;
pub const REVEAL_COUNT: usize = THERMAL_REVEAL + 1 + FOOTER_REVEALS;

/// Class marking the hero header; frontends map pointer moves over it to
/// `on_pointer_move`
pub const HERO_CLASS: &str = "hero";

/// Data attribute asking the frontend for a minimum height, in percent of the
/// viewport height
pub const MIN_VH_ATTR: &str = "min-vh";

const PULSE_PERIOD: Duration = Duration::from_secs(2);

/// Online-dot keyframes: 1 at 0%, 0.7 at 70%, back to 1 at 100%
fn pulse_opacity(phase: f64) -> f64 {
    const LOW_AT: f64 = 0.7;
    const LOW: f64 = 0.7;
    if phase < LOW_AT {
        1.0 - (1.0 - LOW) * phase / LOW_AT
    } else {
        LOW + (1.0 - LOW) * (phase - LOW_AT) / (1.0 - LOW_AT)
    }
}

fn upper(text: &str) -> String {
    text.to_uppercase()
}

fn link(label: impl Into<String>, tone: Tone) -> Element {
    Element::new("a")
        .data("href", PLACEHOLDER_HREF)
        .child(Node::text(label, tone))
}

fn button(label: &str) -> Element {
    link(upper(label), Tone::Inverse)
        .pad(4, 1)
        .background(Tone::Main)
}

#[derive(Debug, Clone)]
pub struct Page {
    mouse: MousePosition,
    reveals: Vec<Reveal>,
    /// Indexed by `InteractionId`
    interactions: Vec<SignatureInteraction>,
    mounted_at: Instant,
}

impl Page {
    /// Mount the page: register every reveal and start the ticker clock
    pub fn mount(config: &MotionConfig, now: Instant) -> Self {
        let timing = RevealTiming::from_config(config);
        let reveals = (0..REVEAL_COUNT)
            .map(|i| Reveal::new(RevealId(i), RevealProps::full_width(), timing))
            .collect();

        let hover = Duration::from_millis(config.hover_duration_ms);
        let interactions = vec![
            SignatureInteraction::mount(
                TICKER,
                InteractionKind::Marquee,
                config.marquee_speed_secs,
                hover,
                now,
            )
            .with_class("ticker"),
            SignatureInteraction::mount(HERO_CTA, InteractionKind::Hover, 0.0, hover, now)
                .with_class("cta"),
            SignatureInteraction::mount(FOOTER_CTA, InteractionKind::Hover, 0.0, hover, now)
                .with_class("cta"),
        ];

        tracing::debug!(
            reveals = REVEAL_COUNT,
            reduced_motion = config.reduced_motion,
            "page mounted"
        );

        Self {
            mouse: MousePosition::default(),
            reveals,
            interactions,
            mounted_at: now,
        }
    }

    pub fn mouse(&self) -> MousePosition {
        self.mouse
    }

    /// Pointer moved over the hero
    pub fn on_pointer_move(&mut self, position: MousePosition) {
        self.mouse = position;
    }

    /// Hero background gradient for the current pointer position
    pub fn gradient(&self) -> RadialGradient {
        RadialGradient::for_mouse(self.mouse)
    }

    pub fn reveals(&self) -> &[Reveal] {
        &self.reveals
    }

    pub fn reveal(&self, id: RevealId) -> Option<&Reveal> {
        self.reveals.get(id.0)
    }

    pub fn interaction(&self, id: InteractionId) -> Option<&SignatureInteraction> {
        self.interactions.get(id.0)
    }

    /// Forward laid-out reveal bounds. Returns how many reveals fired.
    pub fn observe(&mut self, anchors: &[(RevealId, Bounds)], viewport: Bounds, now: Instant) -> usize {
        let mut fired = 0;
        for (id, bounds) in anchors {
            if let Some(reveal) = self.reveals.get_mut(id.0) {
                if reveal.observe(*bounds, viewport, now) {
                    fired += 1;
                }
            }
        }
        fired
    }

    /// Pointer is over `target` (or over nothing). At most one element is
    /// hovered at a time.
    pub fn set_hovered(&mut self, target: Option<InteractionId>, now: Instant) {
        for interaction in &mut self.interactions {
            let hovered = Some(interaction.id()) == target;
            interaction.set_hovered(hovered, now);
        }
    }

    /// Pointer button went down or up. Only the hovered element is pressed.
    pub fn set_pressed(&mut self, pressed: bool, now: Instant) {
        for interaction in &mut self.interactions {
            let pressed = pressed && interaction.is_hovered();
            interaction.set_pressed(pressed, now);
        }
    }

    pub fn hovered(&self) -> Option<InteractionId> {
        self.interactions
            .iter()
            .find(|i| i.is_hovered())
            .map(SignatureInteraction::id)
    }

    /// Whether the next frame differs from this one, ticker included.
    ///
    /// The online dot is left out; it breathes slowly enough for the idle
    /// tick rate.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_transitioning(now) || self.interactions.iter().any(|i| i.is_animating(now))
    }

    /// Whether a reveal or hover is mid-animation
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.reveals.iter().any(|r| r.is_animating(now))
            || self
                .interactions
                .iter()
                .filter(|i| i.id() != TICKER)
                .any(|i| i.is_animating(now))
    }

    fn wrap_reveal(&self, slot: usize, children: Vec<Node>, now: Instant) -> Node {
        match self.reveals.get(slot) {
            Some(reveal) => reveal.render(children, now),
            None => Element::new("div").children(children).into(),
        }
    }

    fn wrap_interaction(&self, id: InteractionId, children: Vec<Node>, now: Instant) -> Node {
        match self.interactions.get(id.0) {
            Some(interaction) => interaction.render(children, now),
            None => Element::new("div").children(children).into(),
        }
    }

    /// Navigation rail
    pub fn rail(&self, now: Instant) -> Node {
        let elapsed = now.saturating_duration_since(self.mounted_at);
        let phase = (elapsed.as_secs_f64() / PULSE_PERIOD.as_secs_f64()).fract();

        let mut dot = Element::new("span")
            .class("pulse-dot")
            .child(Node::text("●", Tone::Accent));
        dot.visual = Visual {
            opacity: pulse_opacity(phase),
            ..Visual::IDENTITY
        };

        let brand = Element::new("div")
            .class("brand")
            .flow(Flow::Row)
            .gap(2)
            .child(SignatureEffect::new("pulse").render(vec![dot.into()]))
            .child(Node::bold(BRAND, Tone::Main));

        let nav = Element::new("ul")
            .class("nav")
            .gap(1)
            .children(NAV_ITEMS.iter().map(|item| {
                Element::new("li").child(link(upper(item), Tone::Main))
            }));

        let status = Element::new("div")
            .class("status")
            .children(RAIL_STATUS.iter().map(|s| Node::text(upper(s), Tone::Muted)));

        Element::new("aside")
            .class("rail")
            .data(MIN_VH_ATTR, "100")
            .justify(Justify::Between)
            .gap(2)
            .pad(2, 1)
            .child(brand)
            .child(nav)
            .child(status)
            .into()
    }

    fn hero(&self, now: Instant) -> Element {
        let tags = Element::new("div")
            .flow(Flow::Row)
            .gap(4)
            .children(HERO_TAGS.iter().map(|t| Node::text(upper(t), Tone::Accent)));

        let headline = Element::new("h1")
            .children(HEADLINE.iter().map(|line| Node::bold(*line, Tone::Main)));

        let copy = Element::new("p").child(Node::text(HERO_COPY, Tone::Muted));

        let cta = self.wrap_interaction(HERO_CTA, vec![button(HERO_CTA_LABEL).into()], now);

        Element::new("header")
            .class(HERO_CLASS)
            .data(MIN_VH_ATTR, "90")
            .gap(2)
            .pad(4, 2)
            .clip()
            .divider()
            .child(self.wrap_reveal(0, vec![tags.into()], now))
            .child(self.wrap_reveal(1, vec![headline.into()], now))
            .child(self.wrap_reveal(2, vec![copy.into()], now))
            .child(self.wrap_reveal(3, vec![cta], now))
    }

    fn ticker(&self, now: Instant) -> Element {
        let items = Element::new("div")
            .flow(Flow::Row)
            .gap(6)
            .children(TICKER_ITEMS.iter().map(|item| {
                if item.live {
                    Element::new("span")
                        .flow(Flow::Row)
                        .gap(1)
                        .child(Node::text(LIVE_DOT, Tone::Accent))
                        .child(Node::text(item.label, Tone::Muted))
                } else {
                    Element::new("span").child(Node::text(item.label, Tone::Muted))
                }
            }));

        Element::new("section")
            .class("ticker-band")
            .pad(0, 1)
            .background(Tone::Panel)
            .clip()
            .divider()
            .child(self.wrap_interaction(TICKER, vec![items.into()], now))
    }

    fn features(&self, now: Instant) -> Element {
        let cards = FEATURES.iter().enumerate().map(|(i, feature)| {
            let children = vec![
                Node::text(
                    format!("{}. {}", feature.id, upper(feature.title)),
                    Tone::Accent,
                ),
                Element::new("img")
                    .data("src", feature.image)
                    .data("alt", feature.title)
                    .height(8)
                    .background(Tone::Panel)
                    .into(),
                Node::bold(feature.head, Tone::Main),
                Node::text(feature.desc, Tone::Muted),
            ];
            Element::new("div")
                .class("feature")
                .pad(4, 2)
                .divider()
                .child(self.wrap_reveal(HERO_REVEALS + i, children, now))
        });

        Element::new("section")
            .class("features")
            .flow(Flow::Grid(2))
            .divider()
            .children(cards)
    }

    fn thermal(&self, now: Instant) -> Element {
        let visual = Element::new("div")
            .class("thermal-visual")
            .background(Tone::Warm)
            .clip()
            .child(
                Element::new("img")
                    .data("src", THERMAL_IMAGE)
                    .data("alt", THERMAL_IMAGE_ALT)
                    .height(12),
            );

        let stats = Element::new("div").children(STATS.iter().map(|stat| {
            Element::new("div")
                .flow(Flow::Row)
                .justify(Justify::Between)
                .pad(0, 1)
                .divider()
                .child(Node::text(upper(stat.label), Tone::Muted))
                .child(Node::bold(upper(stat.value), Tone::Warm))
        }));

        let body = vec![
            Node::text(THERMAL_TAG, Tone::Accent),
            Node::bold(THERMAL_HEAD, Tone::Main),
            Node::text(THERMAL_COPY, Tone::Muted),
            stats.into(),
        ];

        Element::new("section")
            .class("thermal")
            .flow(Flow::Grid(2))
            .divider()
            .child(visual)
            .child(
                Element::new("div")
                    .pad(4, 2)
                    .child(self.wrap_reveal(THERMAL_REVEAL, body, now)),
            )
    }

    fn footer(&self, now: Instant) -> Element {
        let brand = vec![
            Node::bold(BRAND, Tone::Main),
            Node::text(FOOTER_TAGLINE, Tone::Muted),
        ];
        let cta = vec![
            Node::bold(FOOTER_HEAD, Tone::Main),
            self.wrap_interaction(FOOTER_CTA, vec![button(FOOTER_CTA_LABEL).into()], now),
        ];

        Element::new("footer")
            .flow(Flow::Grid(2))
            .gap(6)
            .pad(4, 4)
            .child(self.wrap_reveal(THERMAL_REVEAL + 1, brand, now))
            .child(self.wrap_reveal(THERMAL_REVEAL + 2, cta, now))
    }

    /// Scrolling content column
    pub fn main(&self, now: Instant) -> Node {
        Element::new("main")
            .child(self.hero(now))
            .child(self.ticker(now))
            .child(self.features(now))
            .child(self.thermal(now))
            .child(self.footer(now))
            .into()
    }

    /// Whole page: rail beside the content column
    pub fn view(&self, now: Instant) -> Node {
        Element::new("div")
            .class("page")
            .flow(Flow::Row)
            .child(self.rail(now))
            .child(self.main(now))
            .into()
    }
}
