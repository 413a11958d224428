use crate::config::model::FadeDirection;
use crate::foundation::core::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One stop of a monochrome alpha ramp.
pub struct MaskStop {
    /// Position in `[0, 1]` along the gradient line or radius.
    pub offset: f64,
    /// Mask alpha in `[0, 1]`; `1` keeps the pattern fully visible.
    pub alpha: f64,
}

const fn stop(offset: f64, alpha: f64) -> MaskStop {
    MaskStop { offset, alpha }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskAxis {
    /// Left edge to right edge.
    ToRight,
    /// Right edge to left edge.
    ToLeft,
    /// Top edge to bottom edge.
    ToBottom,
    /// Canvas center outwards to the farthest corner.
    Radial,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Alpha mask applied to the pattern overlay only.
pub struct FadeMask {
    pub axis: MaskAxis,
    pub stops: [MaskStop; 2],
}

/// `None` for [`FadeDirection::None`].
///
/// `offset` is a percentage. `center` and `edges` are not mirror images of each other: `center`
/// ramps from a transparent center to opaque at `offset`, while `edges` stays opaque out to
/// `100 - offset` and only then ramps to transparent at the farthest corner.
pub fn resolve_fade(direction: FadeDirection, offset: f64) -> Option<FadeMask> {
    let o = if offset.is_finite() {
        offset.clamp(0.0, 100.0) / 100.0
    } else {
        0.0
    };
    let ramp_in = [stop(0.0, 0.0), stop(o, 1.0)];
    let (axis, stops) = match direction {
        FadeDirection::None => return None,
        FadeDirection::Left => (MaskAxis::ToRight, ramp_in),
        FadeDirection::Right => (MaskAxis::ToLeft, ramp_in),
        FadeDirection::Top => (MaskAxis::ToBottom, ramp_in),
        FadeDirection::Center => (MaskAxis::Radial, ramp_in),
        FadeDirection::Edges => (MaskAxis::Radial, [stop(1.0 - o, 1.0), stop(1.0, 0.0)]),
    };
    Some(FadeMask { axis, stops })
}

impl FadeMask {
    /// Radius of a centered circle reaching the farthest corner of `rect`.
    pub fn radial_extent(rect: Rect) -> f64 {
        0.5 * rect.width().hypot(rect.height())
    }

    /// Gradient position of `p` in `rect`, unclamped.
    pub fn position(&self, p: Point, rect: Rect) -> f64 {
        let (w, h) = (rect.width().max(1e-9), rect.height().max(1e-9));
        match self.axis {
            MaskAxis::ToRight => (p.x - rect.x0) / w,
            MaskAxis::ToLeft => (rect.x1 - p.x) / w,
            MaskAxis::ToBottom => (p.y - rect.y0) / h,
            MaskAxis::Radial => (p - rect.center()).hypot() / Self::radial_extent(rect),
        }
    }

    /// Mask alpha at `p`, following CSS stop semantics (hold the end values outside the ramp).
    pub fn alpha_at(&self, p: Point, rect: Rect) -> f64 {
        let t = self.position(p, rect);
        let [a, b] = self.stops;
        if t <= a.offset {
            return a.alpha;
        }
        if t >= b.offset {
            return b.alpha;
        }
        let span = b.offset - a.offset;
        if span <= f64::EPSILON {
            return b.alpha;
        }
        a.alpha + (b.alpha - a.alpha) * ((t - a.offset) / span)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/fade.rs"]
mod tests;
