//! Pure configuration-to-descriptor resolvers for everything drawn beneath scene content.

pub mod background;
pub mod fade;
pub mod noise;
pub mod pattern;

use crate::config::model::CardConfig;

pub use background::{BackgroundFill, GradientDirection, LinearGradient, resolve_background};
pub use fade::{FadeMask, resolve_fade};
pub use noise::{BlendMode, NoiseTexture, resolve_noise};
pub use pattern::{PatternTile, resolve_pattern};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PatternOverlay {
    pub tile: PatternTile,
    /// Applied to the pattern layer only.
    pub mask: Option<FadeMask>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Resolved paint layers, listed bottom to top: base fill, noise, pattern.
pub struct StyleSet {
    pub background: BackgroundFill,
    pub noise: Option<NoiseTexture>,
    pub pattern: Option<PatternOverlay>,
}

pub fn resolve_styles(config: &CardConfig) -> StyleSet {
    let pattern = resolve_pattern(config).map(|tile| PatternOverlay {
        tile,
        mask: resolve_fade(config.pattern_fade, config.pattern_fade_offset),
    });
    StyleSet {
        background: resolve_background(config),
        noise: resolve_noise(config),
        pattern,
    }
}
