//! Motion primitives for the landing page
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (ease-out family, CSS cubic-bezier)
//! - `timing` - Progress and interpolation with an explicit clock
//! - `transition` - Declarative animation descriptions
//! - `marquee` - Infinite linear loop clock
//!
//! ## L3 Molecular Layer
//! - `hover` - Hover / press transform controller
//!
//! The components in [`crate::components`] combine these into `Reveal`,
//! `SignatureInteraction` and `SignatureEffect`.

// L4 Atomic Layer
pub mod easing;
pub mod marquee;
pub mod timing;
pub mod transition;

// L3 Molecular Layer
pub mod hover;

pub use easing::EasingType;
pub use hover::{HoverState, Transform};
pub use marquee::{MarqueeClock, MARQUEE_TRAVEL_PCT};
pub use transition::{Motion, MotionTarget, Repeat, Transition};
