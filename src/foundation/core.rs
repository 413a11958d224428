use crate::foundation::error::{OgError, OgResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Logical card width in layout units.
pub const CARD_WIDTH: u32 = 1200;
/// Logical card height in layout units.
pub const CARD_HEIGHT: u32 = 630;

/// One CSS `rem` in layout units.
pub const REM: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// The fixed 1200x630 coordinate space every resolver and exporter works in.
    pub const CARD: Canvas = Canvas {
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
    };

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    pub fn center(self) -> Point {
        self.rect().center()
    }

    /// Output raster dimensions at `density` pixels per layout unit.
    pub fn scaled(self, density: PixelDensity) -> (u32, u32) {
        let d = density.get();
        (
            (f64::from(self.width) * d).round() as u32,
            (f64::from(self.height) * d).round() as u32,
        )
    }
}

/// Raster multiplier applied uniformly to both axes of the logical canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64")]
pub struct PixelDensity(f64);

impl PixelDensity {
    pub const ONE: PixelDensity = PixelDensity(1.0);

    /// Largest multiplier accepted; keeps the raster under 16k pixels per side.
    pub const MAX: f64 = 12.0;

    pub fn new(value: f64) -> OgResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(OgError::validation("pixel density must be finite and > 0"));
        }
        if value > Self::MAX {
            return Err(OgError::validation(format!(
                "pixel density {value} exceeds maximum {}",
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for PixelDensity {
    type Error = OgError;

    fn try_from(value: f64) -> OgResult<Self> {
        Self::new(value)
    }
}

impl Default for PixelDensity {
    fn default() -> Self {
        Self::ONE
    }
}

/// Rectangle helper: `Rect` from origin and size.
pub fn rect_xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w.max(0.0), y + h.max(0.0))
}
