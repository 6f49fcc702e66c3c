//! L4 Atomic Layer: Pure easing functions
//!
//! Maps input progress [0, 1] to eased output [0, 1]. Shared by reveals,
//! hover returns and page scrolling.

use serde::{Deserialize, Serialize};

/// Easing curve
///
/// In config files a curve is either a name (`"linear"`, `"cubic"`,
/// `"quintic"`, `"ease_out"`, `"none"`) or a table
/// `{ cubic_bezier = [x1, y1, x2, y2] }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EasingRepr", into = "EasingRepr")]
pub enum EasingType {
    /// Jump straight to the end
    None,
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum EasingRepr {
    Name(String),
    CubicBezier { cubic_bezier: [f64; 4] },
}

impl TryFrom<EasingRepr> for EasingType {
    type Error = String;

    fn try_from(repr: EasingRepr) -> Result<Self, Self::Error> {
        match repr {
            EasingRepr::Name(name) => match name.as_str() {
                "none" => Ok(Self::None),
                "linear" => Ok(Self::Linear),
                "cubic" => Ok(Self::Cubic),
                "quintic" => Ok(Self::Quintic),
                "ease_out" => Ok(Self::EaseOut),
                other => Err(format!("unknown easing \"{other}\"")),
            },
            EasingRepr::CubicBezier {
                cubic_bezier: [x1, y1, x2, y2],
            } => {
                if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                    return Err("cubic_bezier x control points must lie in [0, 1]".to_string());
                }
                Ok(Self::CubicBezier { x1, y1, x2, y2 })
            }
        }
    }
}

impl From<EasingType> for EasingRepr {
    fn from(easing: EasingType) -> Self {
        let name = match easing {
            EasingType::None => "none",
            EasingType::Linear => "linear",
            EasingType::Cubic => "cubic",
            EasingType::Quintic => "quintic",
            EasingType::EaseOut => "ease_out",
            EasingType::CubicBezier { x1, y1, x2, y2 } => {
                return EasingRepr::CubicBezier {
                    cubic_bezier: [x1, y1, x2, y2],
                }
            }
        };
        EasingRepr::Name(name.to_string())
    }
}

impl EasingType {
    /// The reveal curve, `cubic-bezier(0.23, 1, 0.32, 1)`
    pub const REVEAL: EasingType = EasingType::CubicBezier {
        x1: 0.23,
        y1: 1.0,
        x2: 0.32,
        y2: 1.0,
    };

    /// Apply the easing function to a progress value in [0, 1]
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// One axis of a cubic bezier with endpoints fixed at 0 and 1
#[inline]
fn sample_curve(a1: f64, a2: f64, u: f64) -> f64 {
    let omu = 1.0 - u;
    3.0 * omu * omu * u * a1 + 3.0 * omu * u * u * a2 + u * u * u
}

#[inline]
fn sample_derivative(a1: f64, a2: f64, u: f64) -> f64 {
    let omu = 1.0 - u;
    3.0 * omu * omu * a1 + 6.0 * omu * u * (a2 - a1) + 3.0 * u * u * (1.0 - a2)
}

/// Solve x(u) = t for u, then return y(u)
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    // Newton-Raphson first; x(u) is monotonic for x1, x2 in [0, 1]
    let mut u = t;
    for _ in 0..8 {
        let err = sample_curve(x1, x2, u) - t;
        if err.abs() < 1e-7 {
            return sample_curve(y1, y2, u);
        }
        let d = sample_derivative(x1, x2, u);
        if d.abs() < 1e-7 {
            break;
        }
        u = (u - err / d).clamp(0.0, 1.0);
    }

    // Bisection fallback for flat derivatives
    let (mut lo, mut hi) = (0.0, 1.0);
    u = t;
    for _ in 0..32 {
        let x = sample_curve(x1, x2, u);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    sample_curve(y1, y2, u)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
        EasingType::REVEAL,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL.into_iter().skip(1) {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v + 1e-9 >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_bezier_linear_control_points_match_linear() {
        let linear = EasingType::CubicBezier {
            x1: 0.0,
            y1: 0.0,
            x2: 1.0,
            y2: 1.0,
        };
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-4, "t={}", t);
        }
    }

    #[test]
    fn test_reveal_curve_is_front_loaded() {
        // 0.23,1,0.32,1 covers most of the distance early
        assert!(EasingType::REVEAL.apply(0.25) > 0.6);
        assert!(EasingType::REVEAL.apply(0.5) > 0.9);
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(EasingType::Linear.apply(-1.0), 0.0);
        assert_eq!(EasingType::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_bad_bezier_rejected() {
        let repr = EasingRepr::CubicBezier {
            cubic_bezier: [1.5, 0.0, 0.5, 1.0],
        };
        assert!(EasingType::try_from(repr).is_err());
    }
}
