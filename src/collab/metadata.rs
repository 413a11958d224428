//! Link metadata lookup and the merge rule that folds results into a configuration.

use crate::config::model::CardConfig;
use crate::foundation::error::{OgError, OgResult};

/// Fields a metadata service may return for a page. Empty strings count as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataResult {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    /// Publisher name; maps onto `siteName`.
    pub site_name: Option<String>,
}

impl MetadataResult {
    /// Reads a microlink-style envelope: `{"status": "success", "data": {title, description,
    /// publisher, image: {url}}}`. Any other status is a metadata error.
    pub fn from_envelope(value: &serde_json::Value) -> OgResult<Self> {
        let status = value.get("status").and_then(|s| s.as_str()).unwrap_or("");
        if status != "success" {
            let msg = value
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("metadata service reported failure");
            return Err(OgError::metadata(format!("status '{status}': {msg}")));
        }
        let data = value.get("data").cloned().unwrap_or_default();
        let text = |key: &str| data.get(key).and_then(|v| v.as_str()).map(str::to_owned);
        Ok(Self {
            title: text("title"),
            description: text("description"),
            image_url: data
                .get("image")
                .and_then(|i| i.get("url"))
                .and_then(|u| u.as_str())
                .map(str::to_owned),
            site_name: text("publisher"),
        })
    }
}

/// Collaborator that looks up metadata for a page URL.
pub trait MetadataSource {
    fn fetch(&self, url: &str) -> OgResult<MetadataResult>;
}

/// Notice shown when a lookup fails; the configuration is left as it was.
pub const METADATA_NOTICE: &str = "Could not fetch metadata. Please enter details manually.";

#[derive(Clone, Debug, PartialEq)]
pub struct MetadataOutcome {
    pub config: CardConfig,
    /// Configuration fields that were replaced, in camelCase.
    pub updated: Vec<&'static str>,
    /// Non-fatal notice for the user, set when the lookup failed.
    pub notice: Option<String>,
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Applies a lookup result: each non-empty field replaces its configuration field; an error
/// leaves the configuration untouched and produces a notice.
pub fn apply_metadata(config: &CardConfig, result: OgResult<MetadataResult>) -> MetadataOutcome {
    let meta = match result {
        Ok(meta) => meta,
        Err(e) => {
            tracing::warn!(error = %e, "metadata lookup failed");
            return MetadataOutcome {
                config: config.clone(),
                updated: Vec::new(),
                notice: Some(METADATA_NOTICE.to_owned()),
            };
        }
    };

    let mut next = config.clone();
    let mut updated = Vec::new();
    if let Some(v) = present(&meta.title) {
        next.title = v.to_owned();
        updated.push("title");
    }
    if let Some(v) = present(&meta.description) {
        next.description = v.to_owned();
        updated.push("description");
    }
    if let Some(v) = present(&meta.site_name) {
        next.site_name = v.to_owned();
        updated.push("siteName");
    }
    if let Some(v) = present(&meta.image_url) {
        next.image = Some(v.to_owned());
        updated.push("image");
    }
    tracing::debug!(?updated, "metadata merged");
    MetadataOutcome {
        config: next,
        updated,
        notice: None,
    }
}

/// Checks that `url` is an absolute http(s) URL with a host.
pub fn validate_source_url(url: &str) -> OgResult<()> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .ok_or_else(|| OgError::metadata(format!("'{url}' is not an http(s) URL")))?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.contains(char::is_whitespace) {
        return Err(OgError::metadata(format!("'{url}' has no host")));
    }
    Ok(())
}

/// Looks up the configuration's `sourceUrl` and merges the result.
///
/// A blank URL is not looked up and leaves everything unchanged without a notice.
#[tracing::instrument(skip_all, fields(url = %config.source_url))]
pub fn fetch_metadata(source: &dyn MetadataSource, config: &CardConfig) -> MetadataOutcome {
    let url = config.source_url.trim();
    if url.is_empty() {
        return MetadataOutcome {
            config: config.clone(),
            updated: Vec::new(),
            notice: None,
        };
    }
    let result = validate_source_url(url).and_then(|()| source.fetch(url));
    apply_metadata(config, result)
}

#[cfg(test)]
#[path = "../../tests/unit/collab/metadata.rs"]
mod tests;
