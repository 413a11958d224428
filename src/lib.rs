#![forbid(unsafe_code)]

//! Link-preview card generator for a fixed 1200x630 canvas.
//!
//! A [`CardConfig`] resolves into style descriptors ([`StyleSet`]) and a renderer-agnostic
//! [`SceneTree`]; the renderer draws both into a [`Surface`], and the export pipeline
//! rasterizes that surface at any pixel density without re-running layout.

pub mod collab;
pub mod config;
pub mod export;
pub mod foundation;
pub mod layout;
pub mod preview;
pub mod render;
pub mod seo;
pub mod session;
pub mod style;

pub use collab::{
    HOSTING_DENSITY, HostedImage, ImageHost, MetadataOutcome, MetadataResult, MetadataSource,
    apply_metadata, fetch_metadata, host_surface,
};
pub use config::model::{
    BackgroundKind, CardConfig, FadeDirection, FontFamily, PatternKind, TemplateId,
};
pub use config::presets::{GRADIENT_PRESETS, GradientPreset, apply_preset, find_preset};
pub use export::{
    DEFAULT_DOWNLOAD_DENSITY, ExportFormat, ExportOptions, ExportedArtifact, InFlightGate,
    RasterEngine, export_filename,
};
pub use foundation::core::{CARD_HEIGHT, CARD_WIDTH, Canvas, PixelDensity};
pub use foundation::error::{OgError, OgResult};
pub use layout::{Node, SceneTree, resolve_scene, resolve_scene_for};
pub use preview::{Breakpoint, PreviewFit, Viewport, fit_preview};
pub use render::{
    AssetResolver, FontSources, RemoteAssetFetcher, Surface, ingest_image_bytes,
    ingest_image_file, render_surface,
};
pub use seo::MetaTags;
pub use session::EditorSession;
pub use style::{StyleSet, resolve_styles};
