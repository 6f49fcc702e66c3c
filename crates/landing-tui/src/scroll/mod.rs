//! Smooth page scrolling
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `config` - Configuration types (re-exported from landing-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Scroll controller built on the core easing and timing atoms
//!
//! # Usage
//!
//! ```ignore
//! use landing_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::with_defaults();
//! animator.scroll_by(10, max_scroll);
//!
//! // Once per frame
//! let scroll = animator.update(max_scroll, Instant::now());
//! ```

// L4 Atomic Layer
pub mod config;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
