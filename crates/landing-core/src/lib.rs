pub mod components;
pub mod config;
pub mod error;
pub mod geometry;
pub mod motion;
pub mod page;
pub mod view;

pub use config::{AppConfig, MotionConfig, ScrollConfig};
pub use error::{Error, Result};
pub use geometry::Bounds;
pub use motion::EasingType;
pub use page::{MousePosition, Page};
