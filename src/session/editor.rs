use std::sync::Arc;

use chrono::NaiveDate;

use crate::collab::hosting::{HostedImage, ImageHost, host_surface};
use crate::collab::metadata::{MetadataOutcome, MetadataSource, fetch_metadata};
use crate::config::model::CardConfig;
use crate::config::presets::{apply_preset, find_preset};
use crate::export::encode::ExportFormat;
use crate::export::pipeline::{ExportOptions, ExportedArtifact, InFlightGate, RasterEngine};
use crate::foundation::core::Canvas;
use crate::foundation::error::OgResult;
use crate::layout::scene::SceneTree;
use crate::layout::templates::resolve_scene;
use crate::preview::fit::{PreviewFit, Viewport, fit_preview};
use crate::render::assets::{AssetResolver, RemoteAssetFetcher};
use crate::render::surface::Surface;
use crate::seo::meta::MetaTags;
use crate::style::{StyleSet, resolve_styles};

/// Masthead date in month/day/year form without zero padding.
pub fn date_stamp_for(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Owns the configuration for one editing session.
///
/// Every edit swaps in a whole new value; resolvers only ever see a borrowed snapshot. The
/// preview surface is rebuilt on each swap and export and upload rasterize that same surface.
/// Export and upload each admit a single request at a time.
pub struct EditorSession {
    config: CardConfig,
    engine: RasterEngine,
    fetcher: Option<Arc<dyn RemoteAssetFetcher + Send + Sync>>,
    export_format: ExportFormat,
    hosted_url: Option<String>,
    preview: Option<Surface>,
    export_gate: InFlightGate,
    upload_gate: InFlightGate,
}

impl EditorSession {
    /// Starts a session; an unset masthead date becomes today's local date.
    pub fn new(config: CardConfig, engine: RasterEngine) -> Self {
        Self::new_on(config, engine, chrono::Local::now().date_naive())
    }

    pub fn new_on(config: CardConfig, engine: RasterEngine, today: NaiveDate) -> Self {
        let mut config = config.sanitized();
        if config.date_stamp.trim().is_empty() {
            config.date_stamp = date_stamp_for(today);
        }
        let mut session = Self {
            config,
            engine,
            fetcher: None,
            export_format: ExportFormat::default(),
            hosted_url: None,
            preview: None,
            export_gate: InFlightGate::new(),
            upload_gate: InFlightGate::new(),
        };
        session.refresh_preview();
        session
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn RemoteAssetFetcher + Send + Sync>) -> Self {
        self.fetcher = Some(fetcher);
        self.refresh_preview();
        self
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn engine(&self) -> &RasterEngine {
        &self.engine
    }

    /// Replaces the raster engine, e.g. once fonts have finished loading.
    pub fn set_engine(&mut self, engine: RasterEngine) {
        self.engine = engine;
    }

    pub fn replace(&mut self, config: CardConfig) {
        self.config = config.sanitized();
        tracing::debug!(template = %self.config.template, "configuration replaced");
        self.refresh_preview();
    }

    fn refresh_preview(&mut self) {
        self.preview = match self.build_surface() {
            Ok(surface) => Some(surface),
            Err(e) => {
                tracing::debug!(error = %e, "preview unavailable");
                None
            }
        };
    }

    fn build_surface(&self) -> OgResult<Surface> {
        let mut assets = match &self.fetcher {
            Some(f) => AssetResolver::with_fetcher(f.as_ref()),
            None => AssetResolver::offline(),
        };
        Surface::build(&self.scene(), &self.styles(), &mut assets)
    }

    /// Runs `f` on the cached preview, or on a fresh build when the last one failed.
    fn with_surface<T>(&self, f: impl FnOnce(&Surface) -> OgResult<T>) -> OgResult<T> {
        match &self.preview {
            Some(surface) => f(surface),
            None => f(&self.build_surface()?),
        }
    }

    /// Applies `f` to a copy of the configuration and swaps the copy in.
    pub fn edit(&mut self, f: impl FnOnce(&mut CardConfig)) {
        let mut next = self.config.clone();
        f(&mut next);
        self.replace(next);
    }

    /// Applies a named gradient preset. Returns false, changing nothing, for unknown names.
    pub fn apply_preset(&mut self, name: &str) -> bool {
        if find_preset(name).is_none() {
            return false;
        }
        let next = apply_preset(&self.config, name);
        self.replace(next);
        true
    }

    /// Looks up the configured source URL and merges the result. Returns the notice to show,
    /// if any.
    pub fn fetch_metadata(&mut self, source: &dyn MetadataSource) -> Option<String> {
        let MetadataOutcome {
            config,
            updated,
            notice,
        } = fetch_metadata(source, &self.config);
        if !updated.is_empty() {
            self.replace(config);
        }
        notice
    }

    pub fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    pub fn set_export_format(&mut self, format: ExportFormat) {
        self.export_format = format;
    }

    pub fn hosted_url(&self) -> Option<&str> {
        self.hosted_url.as_deref()
    }

    pub fn export_gate(&self) -> &InFlightGate {
        &self.export_gate
    }

    pub fn upload_gate(&self) -> &InFlightGate {
        &self.upload_gate
    }

    pub fn scene(&self) -> SceneTree {
        resolve_scene(&self.config)
    }

    pub fn styles(&self) -> StyleSet {
        resolve_styles(&self.config)
    }

    /// Surface built for the current configuration, if it could be built.
    pub fn preview(&self) -> Option<&Surface> {
        self.preview.as_ref()
    }

    pub fn surface(&self) -> OgResult<Surface> {
        self.with_surface(|s| Ok(s.clone()))
    }

    pub fn preview_fit(&self, viewport: Viewport) -> PreviewFit {
        fit_preview(viewport, Canvas::CARD)
    }

    /// Download export in the session's format at the default download density.
    pub fn download(&self) -> OgResult<ExportedArtifact> {
        self.export(&ExportOptions::download(self.export_format))
    }

    pub fn export(&self, options: &ExportOptions) -> OgResult<ExportedArtifact> {
        let _guard = self.export_gate.try_enter("export")?;
        // Readiness is checked before any drawing work.
        self.engine.fonts()?;
        self.with_surface(|surface| self.engine.export(surface, options))
    }

    /// Hosts the current card; the returned URL feeds the meta tags from then on.
    pub fn upload(&mut self, host: &dyn ImageHost) -> OgResult<HostedImage> {
        let hosted = {
            let _guard = self.upload_gate.try_enter("upload")?;
            self.engine.fonts()?;
            self.with_surface(|surface| host_surface(&self.engine, surface, host))?
        };
        self.hosted_url = Some(hosted.url.clone());
        Ok(hosted)
    }

    pub fn meta_tags(&self) -> MetaTags {
        MetaTags::for_config(&self.config, self.hosted_url.as_deref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/editor.rs"]
mod tests;
