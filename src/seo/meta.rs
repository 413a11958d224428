use crate::config::model::CardConfig;
use crate::render::svg::escape_xml;

/// Image URL written into the snippets until the card has been hosted.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://yourwebsite.com/og-image.png";

/// Copy-paste HTML for a page: basic tags, Open Graph and Twitter Card blocks.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTags {
    pub basic: String,
    pub open_graph: String,
    pub twitter: String,
}

/// Host part of `url`: scheme dropped, everything from the first `/` cut.
pub fn twitter_domain(url: &str) -> &str {
    let url = url.trim();
    let rest = ["https://", "http://"]
        .iter()
        .find_map(|scheme| {
            url.get(..scheme.len())
                .filter(|head| head.eq_ignore_ascii_case(scheme))
                .map(|_| &url[scheme.len()..])
        })
        .unwrap_or(url);
    rest.split('/').next().unwrap_or_default()
}

fn meta(attr: &str, key: &str, content: &str) -> String {
    format!(r#"<meta {attr}="{key}" content="{}">"#, escape_xml(content))
}

impl MetaTags {
    /// Builds the snippets for `config`; `hosted_url` replaces the placeholder image when set.
    pub fn for_config(config: &CardConfig, hosted_url: Option<&str>) -> Self {
        let image = hosted_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE_URL);
        let url = config.source_url.as_str();
        let title = config.title.as_str();
        let description = config.description.as_str();

        let basic = [
            format!("<title>{}</title>", escape_xml(title)),
            meta("name", "description", description),
        ]
        .join("\n");

        let open_graph = [
            meta("property", "og:url", url),
            meta("property", "og:type", "website"),
            meta("property", "og:title", title),
            meta("property", "og:description", description),
            meta("property", "og:image", image),
        ]
        .join("\n");

        let twitter = [
            meta("name", "twitter:card", "summary_large_image"),
            meta("property", "twitter:domain", twitter_domain(url)),
            meta("property", "twitter:url", url),
            meta("name", "twitter:title", title),
            meta("name", "twitter:description", description),
            meta("name", "twitter:image", image),
        ]
        .join("\n");

        Self {
            basic,
            open_graph,
            twitter,
        }
    }

    /// All three blocks, separated by blank lines.
    pub fn to_html(&self) -> String {
        format!("{}\n\n{}\n\n{}\n", self.basic, self.open_graph, self.twitter)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/seo/meta.rs"]
mod tests;
