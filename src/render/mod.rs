//! Scene renderer: scene tree plus style descriptors to an SVG surface, and surface to pixels.

pub mod assets;
pub mod fonts;
pub mod surface;
pub mod svg;
pub mod text;

use crate::config::model::CardConfig;
use crate::foundation::error::OgResult;
use crate::layout::templates::resolve_scene;
use crate::style::resolve_styles;

pub use assets::{AssetResolver, RemoteAssetFetcher, ingest_image_bytes, ingest_image_file};
pub use fonts::{FontDatabase, FontSources, build_fontdb};
pub use surface::Surface;

/// Resolves styles and scene for `config` and draws them.
pub fn render_surface(config: &CardConfig, assets: &mut AssetResolver<'_>) -> OgResult<Surface> {
    let scene = resolve_scene(config);
    let styles = resolve_styles(config);
    Surface::build(&scene, &styles, assets)
}
