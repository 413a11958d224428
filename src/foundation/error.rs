pub type OgResult<T> = Result<T, OgError>;

/// Failure of a single card operation.
///
/// Every variant is terminal to the operation that raised it and never to the session: the
/// configuration is left untouched and the caller may retry immediately.
#[derive(thiserror::Error, Debug)]
pub enum OgError {
    /// A configuration document or value could not be parsed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The metadata collaborator failed (bad URL, network error, non-success status).
    #[error("metadata error: {0}")]
    Metadata(String),

    /// The rasterization engine has not been loaded yet.
    #[error("engine not ready: {0}")]
    NotReady(String),

    /// An asset image could not be read or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// The raster encoder failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// The hosting collaborator rejected or failed the upload.
    #[error("upload error: {0}")]
    Upload(String),

    /// Another export or upload is already in flight.
    #[error("busy: {0}")]
    Busy(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OgError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata(msg.into())
    }

    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }

    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    pub fn busy(msg: impl Into<String>) -> Self {
        Self::Busy(msg.into())
    }

    /// Short, user-facing message suitable for a notice banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Metadata(_) => {
                "Could not fetch metadata. Please enter details manually.".to_string()
            }
            Self::NotReady(_) => {
                "Generation engine not loaded yet. Please wait a moment.".to_string()
            }
            Self::Asset(msg) => format!(
                "Export failed: {msg}. If using external images, ensure cross-origin image permissions."
            ),
            Self::Upload(msg) => format!("Failed to upload image: {msg}"),
            Self::Busy(_) => "An export is already in progress.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
