use crate::config::model::{BackgroundKind, CardConfig};
use crate::foundation::core::{Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
/// Normalized CSS `linear-gradient` direction.
pub enum GradientDirection {
    /// Clockwise angle in degrees, `0` pointing up.
    Angle { degrees: f64 },
    /// `to <side>`.
    Side { side: Side },
    /// `to <vertical> <horizontal>`, e.g. `to top right`.
    Corner { vertical: Side, horizontal: Side },
}

impl GradientDirection {
    /// CSS default (`to bottom`), used for unrecognized tokens.
    pub const DEFAULT: GradientDirection = GradientDirection::Side { side: Side::Bottom };

    /// Parses a direction token. Unrecognized input yields `None`.
    ///
    /// Accepts angles in `deg`, `rad`, `grad` and `turn` units, bare `0`, and `to` keywords with
    /// one side or two sides in either order.
    pub fn parse(token: &str) -> Option<Self> {
        let t = token.trim().to_ascii_lowercase();
        if let Some(rest) = t.strip_prefix("to ") {
            let words: Vec<&str> = rest.split_whitespace().collect();
            let sides: Vec<Side> = words.iter().map(|w| parse_side(w)).collect::<Option<_>>()?;
            return match sides.as_slice() {
                [side] => Some(GradientDirection::Side { side: *side }),
                [a, b] => {
                    let (vertical, horizontal) = match (is_vertical(*a), is_vertical(*b)) {
                        (true, false) => (*a, *b),
                        (false, true) => (*b, *a),
                        _ => return None,
                    };
                    Some(GradientDirection::Corner {
                        vertical,
                        horizontal,
                    })
                }
                _ => None,
            };
        }
        parse_angle(&t).map(|degrees| GradientDirection::Angle { degrees })
    }

    pub fn parse_or_default(token: &str) -> Self {
        Self::parse(token).unwrap_or_else(|| {
            tracing::debug!(token, "unrecognized gradient direction, using `to bottom`");
            Self::DEFAULT
        })
    }

    /// Effective clockwise angle in degrees for a box of the given size.
    ///
    /// Corner directions depend on the box aspect: the gradient line is perpendicular to the
    /// diagonal that does not touch the target corner.
    pub fn degrees_for(self, width: f64, height: f64) -> f64 {
        match self {
            GradientDirection::Angle { degrees } => degrees,
            GradientDirection::Side { side } => match side {
                Side::Top => 0.0,
                Side::Right => 90.0,
                Side::Bottom => 180.0,
                Side::Left => 270.0,
            },
            GradientDirection::Corner {
                vertical,
                horizontal,
            } => {
                let sx = if horizontal == Side::Right { 1.0 } else { -1.0 };
                let sy = if vertical == Side::Bottom { 1.0 } else { -1.0 };
                let dir = Vec2::new(sx * height, sy * width);
                dir.x.atan2(-dir.y).to_degrees().rem_euclid(360.0)
            }
        }
    }

    /// Start and end points of the CSS gradient line across `rect`.
    pub fn line_for(self, rect: Rect) -> (Point, Point) {
        let (w, h) = (rect.width(), rect.height());
        let theta = self.degrees_for(w, h).to_radians();
        let dir = Vec2::new(theta.sin(), -theta.cos());
        let half = 0.5 * ((w * theta.sin()).abs() + (h * theta.cos()).abs());
        let c = rect.center();
        (c - dir * half, c + dir * half)
    }
}

fn parse_side(word: &str) -> Option<Side> {
    match word {
        "top" => Some(Side::Top),
        "right" => Some(Side::Right),
        "bottom" => Some(Side::Bottom),
        "left" => Some(Side::Left),
        _ => None,
    }
}

fn is_vertical(side: Side) -> bool {
    matches!(side, Side::Top | Side::Bottom)
}

fn parse_angle(t: &str) -> Option<f64> {
    const UNITS: [(&str, f64); 4] = [
        ("grad", 0.9),
        ("turn", 360.0),
        ("deg", 1.0),
        ("rad", 180.0 / std::f64::consts::PI),
    ];
    for (suffix, scale) in UNITS {
        if let Some(num) = t.strip_suffix(suffix) {
            let v: f64 = num.trim().parse().ok()?;
            return v.is_finite().then_some(v * scale);
        }
    }
    // Unitless zero is the only bare number CSS accepts.
    (t.parse::<f64>().ok() == Some(0.0)).then_some(0.0)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    /// Position along the gradient line in `[0, 1]`.
    pub offset: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearGradient {
    pub direction: GradientDirection,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Evenly spaced two-stop gradient.
    pub fn two_stop(direction: GradientDirection, start: &str, end: &str) -> Self {
        Self {
            direction,
            stops: vec![
                ColorStop {
                    offset: 0.0,
                    color: start.to_owned(),
                },
                ColorStop {
                    offset: 1.0,
                    color: end.to_owned(),
                },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BackgroundFill {
    Solid { color: String },
    Linear(LinearGradient),
}

/// Base fill of the card. Colors pass through verbatim.
pub fn resolve_background(config: &CardConfig) -> BackgroundFill {
    match config.background_kind {
        BackgroundKind::Solid => BackgroundFill::Solid {
            color: config.solid_color.clone(),
        },
        BackgroundKind::Gradient => BackgroundFill::Linear(LinearGradient::two_stop(
            GradientDirection::parse_or_default(&config.gradient_direction),
            &config.gradient_start,
            &config.gradient_end,
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/background.rs"]
mod tests;
