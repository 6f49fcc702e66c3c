//! Presentational helper components
//!
//! - `reveal` - one-shot viewport-triggered fade / slide-in
//! - `interaction` - marquee, hover and passthrough variants
//! - `effect` - tagging passthrough

pub mod effect;
pub mod interaction;
pub mod reveal;

pub use effect::{SignatureEffect, EFFECT_ATTR};
pub use interaction::{InteractionKind, SignatureInteraction};
pub use reveal::{Reveal, RevealProps, RevealStyle, RevealTiming};
