//! On-screen presentation scale for the fixed-size card.
//!
//! The fit only produces a display transform. Layout and export keep working in the logical
//! 1200x630 space whatever the viewport does.

use std::time::Duration;

use crate::foundation::core::{Affine, Canvas};

/// Window width below which the compact padding applies.
pub const COMPACT_BREAKPOINT: f64 = 768.0;

/// Delay before the first measurement after mount, letting the host layout settle.
pub const MOUNT_SETTLE_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Compact,
    Wide,
}

impl Breakpoint {
    pub fn for_window(window_width: f64) -> Self {
        if window_width < COMPACT_BREAKPOINT {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Combined padding subtracted from each container axis.
    pub fn padding(self) -> f64 {
        match self {
            Self::Compact => 32.0,
            Self::Wide => 80.0,
        }
    }
}

/// Measured preview area. The breakpoint follows the window, the fit follows the container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub window_width: f64,
    pub container_width: f64,
    pub container_height: f64,
}

impl Viewport {
    /// Container that spans the whole window width.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            window_width: width,
            container_width: width,
            container_height: height,
        }
    }

    pub fn in_window(mut self, window_width: f64) -> Self {
        self.window_width = window_width;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewFit {
    pub breakpoint: Breakpoint,
    /// Uniform display scale in `[0, 1]`.
    pub scale: f64,
}

impl PreviewFit {
    /// Display size of the card at this scale.
    pub fn display_size(&self, canvas: Canvas) -> (f64, f64) {
        (
            f64::from(canvas.width) * self.scale,
            f64::from(canvas.height) * self.scale,
        )
    }

    /// Presentation transform from logical card space to display space.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale)
    }
}

/// `min((w - pad) / 1200, (h - pad) / 630, 1)`, floored at zero.
///
/// Pure; safe to call on every resize event.
pub fn fit_preview(viewport: Viewport, canvas: Canvas) -> PreviewFit {
    let breakpoint = Breakpoint::for_window(viewport.window_width);
    let pad = breakpoint.padding();
    let sx = (viewport.container_width - pad) / f64::from(canvas.width);
    let sy = (viewport.container_height - pad) / f64::from(canvas.height);
    let scale = if sx.is_finite() && sy.is_finite() {
        sx.min(sy).clamp(0.0, 1.0)
    } else {
        0.0
    };
    PreviewFit { breakpoint, scale }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/fit.rs"]
mod tests;
