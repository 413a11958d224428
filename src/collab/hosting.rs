//! Publishing a rendered card through an image host.

use crate::export::encode::ExportFormat;
use crate::export::pipeline::{ExportOptions, ExportedArtifact, RasterEngine};
use crate::foundation::core::PixelDensity;
use crate::foundation::error::{OgError, OgResult};
use crate::render::Surface;

/// Hosted uploads are always rendered at this density, whatever the download setting.
pub const HOSTING_DENSITY: f64 = 2.0;

/// Collaborator that stores an encoded card and returns its public URL.
///
/// Failures should be [`OgError::Upload`] carrying the host's message when it gave one.
pub trait ImageHost {
    fn upload(&self, artifact: &ExportedArtifact, filename: &str) -> OgResult<String>;
}

/// Upload error with the host's message, or a generic one when it sent none.
pub fn upload_failure(message: Option<&str>) -> OgError {
    match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(msg) => OgError::upload(msg),
        None => OgError::upload("Upload failed"),
    }
}

/// Reads an imgbb-style response: `{"success": true, "data": {"url": ...}}` or
/// `{"success": false, "error": {"message": ...}}`.
pub fn parse_host_response(value: &serde_json::Value) -> OgResult<String> {
    let success = value.get("success").and_then(|s| s.as_bool()).unwrap_or(false);
    let url = value
        .get("data")
        .and_then(|d| d.get("url"))
        .and_then(|u| u.as_str());
    match (success, url) {
        (true, Some(url)) if !url.trim().is_empty() => Ok(url.trim().to_owned()),
        _ => Err(upload_failure(
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str()),
        )),
    }
}

/// Export settings used for hosting.
pub fn hosting_options() -> ExportOptions {
    ExportOptions::new(
        ExportFormat::Png,
        PixelDensity::new(HOSTING_DENSITY).unwrap_or_default(),
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostedImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Rasterizes `surface` at the hosting density and hands it to `host`.
#[tracing::instrument(skip_all)]
pub fn host_surface(
    engine: &RasterEngine,
    surface: &Surface,
    host: &dyn ImageHost,
) -> OgResult<HostedImage> {
    let artifact = engine.export(surface, &hosting_options())?;
    let filename = artifact.filename();
    let url = host.upload(&artifact, &filename).map_err(|e| match e {
        OgError::Upload(_) => e,
        other => OgError::upload(other.to_string()),
    })?;
    tracing::debug!(%url, "card hosted");
    Ok(HostedImage {
        url,
        width: artifact.width,
        height: artifact.height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/collab/hosting.rs"]
mod tests;
