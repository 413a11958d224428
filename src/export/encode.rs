use std::io::Cursor;

use crate::foundation::error::{OgError, OgResult};

/// Raster output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Webp];

    /// Accepts `png`, `jpeg`/`jpg` and `webp`, case-insensitively.
    pub fn parse(token: &str) -> OgResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            other => Err(OgError::validation(format!(
                "unknown export format '{other}' (expected png, jpeg or webp)"
            ))),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = OgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Highest JPEG quality the encoder accepts.
pub const JPEG_QUALITY: u8 = 100;

/// Composites straight-alpha RGBA over opaque white.
pub fn flatten_on_white(img: &image::RgbaImage) -> image::RgbImage {
    image::RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0;
        let a = u16::from(a);
        let over = |c: u8| ((u16::from(c) * a + 255 * (255 - a) + 127) / 255) as u8;
        image::Rgb([over(r), over(g), over(b)])
    })
}

/// Encodes a straight-alpha raster in `format`.
pub fn encode_raster(img: &image::RgbaImage, format: ExportFormat) -> OgResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => img
            .write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| OgError::encode(format!("png: {e}")))?,
        ExportFormat::Webp => img
            .write_to(&mut out, image::ImageFormat::WebP)
            .map_err(|e| OgError::encode(format!("webp: {e}")))?,
        ExportFormat::Jpeg => {
            let rgb = flatten_on_white(img);
            let mut encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
            encoder
                .encode_image(&rgb)
                .map_err(|e| OgError::encode(format!("jpeg: {e}")))?;
        }
    }
    Ok(out.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/export/encode.rs"]
mod tests;
