use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::export::encode::{ExportFormat, encode_raster};
use crate::foundation::core::PixelDensity;
use crate::foundation::error::{OgError, OgResult};
use crate::render::Surface;
use crate::render::fonts::{FontDatabase, FontSources, build_fontdb};

/// Download density: three device pixels per layout unit (3600x1890).
pub const DEFAULT_DOWNLOAD_DENSITY: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub density: PixelDensity,
}

impl ExportOptions {
    pub fn new(format: ExportFormat, density: PixelDensity) -> Self {
        Self { format, density }
    }

    /// Download settings for `format` at the default download density.
    pub fn download(format: ExportFormat) -> Self {
        Self {
            format,
            density: PixelDensity::new(DEFAULT_DOWNLOAD_DENSITY).unwrap_or_default(),
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::download(ExportFormat::Png)
    }
}

/// Encoded card. `format` is always the container actually written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedArtifact {
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
    /// Requested format this artifact stands in for, when the engine had to substitute.
    pub degraded_from: Option<ExportFormat>,
}

impl ExportedArtifact {
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// `og-image-<unix millis>.<ext>` stamped with the current time.
    pub fn filename(&self) -> String {
        export_filename(self.format, chrono::Utc::now().timestamp_millis())
    }
}

pub fn export_filename(format: ExportFormat, unix_millis: i64) -> String {
    format!("og-image-{unix_millis}.{}", format.extension())
}

/// Rasterization capability handle.
///
/// Export through a pending engine fails with [`OgError::NotReady`]; nothing is drawn or
/// encoded in that case.
#[derive(Clone, Debug)]
pub struct RasterEngine {
    fonts: Option<Arc<FontDatabase>>,
    native_webp: bool,
}

impl RasterEngine {
    /// Engine whose resources have not been loaded yet.
    pub fn pending() -> Self {
        Self {
            fonts: None,
            native_webp: true,
        }
    }

    pub fn with_fonts(fonts: Arc<FontDatabase>) -> Self {
        Self {
            fonts: Some(fonts),
            native_webp: true,
        }
    }

    pub fn load(sources: &FontSources) -> Self {
        Self::with_fonts(build_fontdb(sources))
    }

    pub fn with_system_fonts() -> Self {
        Self::load(&FontSources::system())
    }

    /// Marks native WebP encoding as unavailable; WebP requests then produce PNG.
    pub fn without_native_webp(mut self) -> Self {
        self.native_webp = false;
        self
    }

    pub fn is_ready(&self) -> bool {
        self.fonts.is_some()
    }

    pub fn supports_native_webp(&self) -> bool {
        self.native_webp
    }

    pub fn fonts(&self) -> OgResult<Arc<FontDatabase>> {
        self.fonts
            .clone()
            .ok_or_else(|| OgError::not_ready("rasterization engine has not been loaded"))
    }

    /// Container that will actually be written for `requested`.
    pub fn effective_format(&self, requested: ExportFormat) -> ExportFormat {
        if requested == ExportFormat::Webp && !self.native_webp {
            ExportFormat::Png
        } else {
            requested
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(format = %options.format, density = options.density.get())
    )]
    pub fn export(
        &self,
        surface: &Surface,
        options: &ExportOptions,
    ) -> OgResult<ExportedArtifact> {
        let fonts = self.fonts()?;
        let format = self.effective_format(options.format);
        let degraded_from = (format != options.format).then_some(options.format);
        if let Some(requested) = degraded_from {
            tracing::warn!(
                %requested,
                encoded = %format,
                "native encoder unavailable, substituting"
            );
        }

        let raster = surface.rasterize(fonts, options.density)?;
        let (width, height) = raster.dimensions();
        let bytes = encode_raster(&raster, format)?;
        tracing::debug!(width, height, bytes = bytes.len(), "export encoded");
        Ok(ExportedArtifact {
            bytes,
            format,
            width,
            height,
            degraded_from,
        })
    }
}

/// Single-slot gate for user-triggered exports and uploads.
///
/// A second request while one is in flight is rejected with [`OgError::Busy`], never queued.
#[derive(Debug, Default)]
pub struct InFlightGate {
    busy: AtomicBool,
}

impl InFlightGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn try_enter(&self, operation: &str) -> OgResult<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                OgError::busy(format!("{operation} requested while another is in flight"))
            })?;
        Ok(InFlightGuard { gate: self })
    }
}

/// Releases the gate on drop, whether the operation succeeded or failed.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    gate: &'a InFlightGate,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/pipeline.rs"]
mod tests;
