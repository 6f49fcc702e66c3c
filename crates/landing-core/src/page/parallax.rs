//! Mouse-parallax background gradient for the hero

use serde::Serialize;

/// Normalized pointer position, (0, 0) top-left to (1, 1) bottom-right.
///
/// Not clamped: values outside [0, 1] shift the gradient further.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MousePosition {
    pub x: f64,
    pub y: f64,
}

impl Default for MousePosition {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

impl MousePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pointer cell relative to the whole window
    pub fn from_pointer(column: u16, row: u16, width: u16, height: u16) -> Self {
        let norm = |v: u16, extent: u16| {
            if extent == 0 {
                0.5
            } else {
                v as f64 / extent as f64
            }
        };
        Self {
            x: norm(column, width),
            y: norm(row, height),
        }
    }
}

/// Radial gradient from a solid core colour to transparent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadialGradient {
    /// Focal point, percent of the box width
    pub focal_x_pct: f64,
    /// Focal point, percent of the box height
    pub focal_y_pct: f64,
    /// Core colour
    pub color: &'static str,
    /// Stop (percent of the farthest-corner radius) where the colour is gone
    pub fade_pct: f64,
}

pub const GRADIENT_BASE_X: f64 = 80.0;
pub const GRADIENT_BASE_Y: f64 = 20.0;
pub const GRADIENT_RANGE: f64 = 5.0;

/// Focal point (percent) for a pointer position
#[inline]
pub fn focal_point(mouse: MousePosition) -> (f64, f64) {
    (
        GRADIENT_BASE_X + mouse.x * GRADIENT_RANGE,
        GRADIENT_BASE_Y + mouse.y * GRADIENT_RANGE,
    )
}

impl RadialGradient {
    pub fn for_mouse(mouse: MousePosition) -> Self {
        let (focal_x_pct, focal_y_pct) = focal_point(mouse);
        Self {
            focal_x_pct,
            focal_y_pct,
            color: "#1a1a1a",
            fade_pct: 60.0,
        }
    }

    /// CSS form of the gradient
    pub fn to_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, {} 0%, transparent {}%)",
            self.focal_x_pct, self.focal_y_pct, self.color, self.fade_pct
        )
    }

    /// Colour coverage in [0, 1] at point (x, y) of a `width` × `height` box.
    ///
    /// The radius is the distance from the focal point to the farthest corner.
    pub fn intensity_at(&self, x: f64, y: f64, width: f64, height: f64) -> f64 {
        let fx = width * self.focal_x_pct / 100.0;
        let fy = height * self.focal_y_pct / 100.0;
        let corner = |cx: f64, cy: f64| ((cx - fx).powi(2) + (cy - fy).powi(2)).sqrt();
        let radius = corner(0.0, 0.0)
            .max(corner(width, 0.0))
            .max(corner(0.0, height))
            .max(corner(width, height));
        let stop = radius * self.fade_pct / 100.0;
        if stop <= 0.0 {
            return 0.0;
        }
        let distance = ((x - fx).powi(2) + (y - fy).powi(2)).sqrt();
        (1.0 - distance / stop).clamp(0.0, 1.0)
    }
}
