//! Asset images: data URIs, remote URLs and local file ingestion.
//!
//! Whatever the source, an image is decoded here and re-embedded as a PNG data URI before it
//! reaches the surface, so the rasterizer never sees undecodable or foreign bytes. A source
//! that cannot be read fails the render with [`OgError::Asset`] instead of drawing a blank slot.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use base64::Engine as _;

use crate::foundation::error::{OgError, OgResult};

/// Hint appended to failures of remotely hosted images.
pub const CROSS_ORIGIN_HINT: &str = "ensure cross-origin image permissions";

/// Collaborator that downloads remotely hosted asset images.
pub trait RemoteAssetFetcher {
    fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>>;
}

/// Decoded asset ready to embed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    /// `data:image/png;base64,...`
    pub data_uri: String,
}

fn is_remote(href: &str) -> bool {
    let lower = href.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Splits a `data:` URI into its media type and decoded payload.
pub fn decode_data_uri(uri: &str) -> OgResult<(String, Vec<u8>)> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| OgError::validation("not a data URI"))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| OgError::validation("data URI has no payload separator"))?;
    let mut params = meta.split(';');
    let mime = params.next().unwrap_or_default().trim().to_ascii_lowercase();
    let is_base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));
    let bytes = if is_base64 {
        let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| OgError::validation(format!("data URI payload is not base64: {e}")))?
    } else {
        payload.as_bytes().to_vec()
    };
    Ok((mime, bytes))
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Decodes raster bytes and re-encodes them as a PNG data URI.
pub fn embed_raster(bytes: &[u8]) -> OgResult<EmbeddedImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| OgError::asset(format!("image could not be decoded: {e}")))?;
    let (width, height) = (img.width(), img.height());
    let mut png = Cursor::new(Vec::new());
    img.write_to(&mut png, image::ImageFormat::Png)
        .map_err(|e| OgError::encode(format!("re-encode asset as png: {e}")))?;
    Ok(EmbeddedImage {
        width,
        height,
        data_uri: encode_data_uri("image/png", &png.into_inner()),
    })
}

/// Resolves configured image references for one render, decoding each distinct source once.
pub struct AssetResolver<'a> {
    fetcher: Option<&'a dyn RemoteAssetFetcher>,
    cache: HashMap<String, EmbeddedImage>,
}

impl<'a> AssetResolver<'a> {
    /// Resolver that only accepts inline data URIs.
    pub fn offline() -> Self {
        Self {
            fetcher: None,
            cache: HashMap::new(),
        }
    }

    pub fn with_fetcher(fetcher: &'a dyn RemoteAssetFetcher) -> Self {
        Self {
            fetcher: Some(fetcher),
            cache: HashMap::new(),
        }
    }

    #[tracing::instrument(skip_all, fields(remote = is_remote(href)))]
    pub fn resolve(&mut self, href: &str) -> OgResult<EmbeddedImage> {
        if let Some(hit) = self.cache.get(href) {
            return Ok(hit.clone());
        }
        let embedded = if is_remote(href) {
            self.resolve_remote(href)?
        } else if href.trim_start().starts_with("data:") {
            let (mime, bytes) = decode_data_uri(href).map_err(|e| OgError::asset(e.to_string()))?;
            tracing::debug!(mime, bytes = bytes.len(), "decoding inline asset");
            embed_raster(&bytes)?
        } else {
            return Err(OgError::asset(format!(
                "unsupported image source (expected a data URI or http(s) URL): {}",
                preview(href)
            )));
        };
        self.cache.insert(href.to_owned(), embedded.clone());
        Ok(embedded)
    }

    fn resolve_remote(&self, url: &str) -> OgResult<EmbeddedImage> {
        let Some(fetcher) = self.fetcher else {
            return Err(OgError::asset(format!(
                "remote image {url} cannot be read without a fetcher; {CROSS_ORIGIN_HINT}"
            )));
        };
        let bytes = fetcher
            .fetch(url)
            .map_err(|e| {
                OgError::asset(format!(
                    "remote image {url} unreadable ({e:#}); {CROSS_ORIGIN_HINT}"
                ))
            })?;
        embed_raster(&bytes).map_err(|e| match e {
            OgError::Asset(msg) => OgError::asset(format!("{msg}; {CROSS_ORIGIN_HINT}")),
            other => other,
        })
    }
}

fn preview(s: &str) -> String {
    let mut out: String = s.chars().take(48).collect();
    if s.chars().count() > 48 {
        out.push('…');
    }
    out
}

/// MIME type of raster bytes this crate accepts for asset ingestion.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        image::ImageFormat::Png => Some("image/png"),
        image::ImageFormat::Jpeg => Some("image/jpeg"),
        image::ImageFormat::Gif => Some("image/gif"),
        image::ImageFormat::WebP => Some("image/webp"),
        image::ImageFormat::Bmp => Some("image/bmp"),
        _ => None,
    }
}

/// Converts raster bytes into an embeddable data URI, keeping the original encoding.
pub fn ingest_image_bytes(bytes: &[u8]) -> OgResult<String> {
    let mime = sniff_mime(bytes).ok_or_else(|| {
        OgError::validation("unsupported image type (expected png, jpeg, gif, webp or bmp)")
    })?;
    Ok(encode_data_uri(mime, bytes))
}

pub fn ingest_image_file(path: &Path) -> OgResult<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image file '{}'", path.display()))?;
    ingest_image_bytes(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/render/assets.rs"]
mod tests;
