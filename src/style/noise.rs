use std::io::Cursor;

use crate::config::model::CardConfig;
use crate::foundation::error::{OgError, OgResult};
use crate::foundation::math::hash_u32;

/// Edge length of the repeating grain tile, in layout units.
pub const NOISE_TILE_SIZE: u32 = 200;

/// Fixed seed so every card shares the same grain.
pub const NOISE_SEED: u64 = 0x6f67_6361_7264;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    Normal,
    Multiply,
    Overlay,
}

impl BlendMode {
    pub fn css_name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Overlay => "overlay",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Procedural grain overlay, tiled across the canvas above the base fill.
pub struct NoiseTexture {
    pub seed: u64,
    pub tile_size: u32,
    pub intensity: f64,
    pub blend: BlendMode,
}

/// `None` when the intensity rounds to nothing visible.
pub fn resolve_noise(config: &CardConfig) -> Option<NoiseTexture> {
    let intensity = if config.noise_intensity.is_finite() {
        config.noise_intensity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if intensity <= 0.0 {
        return None;
    }
    Some(NoiseTexture {
        seed: NOISE_SEED,
        tile_size: NOISE_TILE_SIZE,
        intensity,
        blend: BlendMode::Overlay,
    })
}

impl NoiseTexture {
    /// Grayscale grain, one hash sample per tile pixel.
    pub fn tile_rgba(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.tile_size, self.tile_size, |x, y| {
            let v = hash_u32(self.seed, x, y) as u8;
            image::Rgba([v, v, v, 255])
        })
    }

    /// The grain tile as PNG bytes, ready to embed.
    pub fn tile_png(&self) -> OgResult<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.tile_rgba()
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| OgError::encode(format!("noise tile: {e}")))?;
        Ok(out.into_inner())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/noise.rs"]
mod tests;
