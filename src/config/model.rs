use std::io::Read;

use crate::foundation::error::{OgError, OgResult};

/// Declares a closed token enum that deserializes leniently.
///
/// Every accepted token maps to one variant; anything else maps to the fallback variant, so a
/// configuration document never fails to load because of an unrecognized enumeration value.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (fallback = $fallback:ident) {
            $( $variant:ident => $canon:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "&'static str")]
        pub enum $name {
            $(
                #[doc = concat!("`", $canon, "`")]
                $variant,
            )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $canon,)+
                }
            }

            /// Strict parse; `None` for unrecognized tokens.
            pub fn parse(token: &str) -> Option<Self> {
                let t = token.trim().to_ascii_lowercase();
                match t.as_str() {
                    $($canon $(| $alias)* => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Lenient parse; unrecognized tokens resolve to the fallback variant.
            pub fn parse_lenient(token: &str) -> Self {
                match Self::parse(token) {
                    Some(v) => v,
                    None => {
                        tracing::warn!(
                            token,
                            kind = stringify!($name),
                            fallback = $name::$fallback.as_str(),
                            "unknown token, using fallback"
                        );
                        $name::$fallback
                    }
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$fallback
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse_lenient(&value)
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

token_enum! {
    /// Layout variant selector. The only field that changes which geometry rules apply.
    pub enum TemplateId (fallback = Minimal) {
        Minimal => "minimal",
        Hero => "hero",
        Magazine => "magazine",
        Split => "split",
        Vertical => "vertical",
        Graph => "graph",
        Quote => "quote",
        Browser => "browser",
        Card => "card",
        Code => "code",
    }
}

impl TemplateId {
    /// Human-readable name shown in template pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            TemplateId::Minimal => "Minimalist",
            TemplateId::Hero => "Big Hero",
            TemplateId::Magazine => "Magazine",
            TemplateId::Split => "Split Side",
            TemplateId::Vertical => "Split Vertical",
            TemplateId::Graph => "Chart Data",
            TemplateId::Quote => "Quote",
            TemplateId::Browser => "Browser Frame",
            TemplateId::Card => "Glass Card",
            TemplateId::Code => "Developer",
        }
    }
}

token_enum! {
    /// Font family token applied to every text element of a variant.
    pub enum FontFamily (fallback = Sans) {
        Sans => "sans" | "font-sans" | "inter",
        Serif => "serif" | "font-serif",
        Mono => "mono" | "font-mono" | "monospace",
        System => "system" | "font-system" | "system-ui",
    }
}

token_enum! {
    pub enum BackgroundKind (fallback = Gradient) {
        Solid => "solid",
        Gradient => "gradient",
    }
}

token_enum! {
    /// Repeating decorative overlay primitive.
    pub enum PatternKind (fallback = None) {
        None => "none" | "",
        Dots => "dots" | "radial-gradient(circle, var(--grid-color) 1px, transparent 1px)",
        Grid => "grid" | "linear-gradient(var(--grid-color) 1px, transparent 1px), linear-gradient(90deg, var(--grid-color) 1px, transparent 1px)",
    }
}

token_enum! {
    /// Direction of the alpha taper applied to the pattern overlay.
    pub enum FadeDirection (fallback = None) {
        None => "none" | "",
        Left => "left",
        Right => "right",
        Top => "top",
        Center => "center",
        Edges => "edges",
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// The single source of truth for one card.
///
/// Every field has a default, so any JSON object (including `{}`) is a valid configuration.
/// Field aliases accept the key names used by older configuration documents.
pub struct CardConfig {
    pub template: TemplateId,

    pub title: String,
    pub description: String,
    pub site_name: String,
    pub author: String,
    #[serde(alias = "url")]
    pub source_url: String,
    /// Masthead date shown by the magazine variant. Empty means "not set".
    pub date_stamp: String,

    pub font: FontFamily,
    /// Uniform multiplier applied to every variant's base type sizes.
    pub font_size: f64,

    #[serde(alias = "bgType")]
    pub background_kind: BackgroundKind,
    pub solid_color: String,
    pub gradient_start: String,
    pub gradient_end: String,
    #[serde(alias = "gradientDir")]
    pub gradient_direction: String,

    #[serde(alias = "noise")]
    pub noise_intensity: f64,
    pub pattern: PatternKind,
    #[serde(alias = "gridColor")]
    pub pattern_color: String,
    #[serde(alias = "gridSize")]
    pub pattern_cell_size: u32,
    #[serde(alias = "gridOpacity")]
    pub pattern_opacity: f64,
    #[serde(alias = "gridFade")]
    pub pattern_fade: FadeDirection,
    #[serde(alias = "gridFadeOffset")]
    pub pattern_fade_offset: f64,

    pub text_color: String,
    pub accent_color: String,

    pub show_logo: bool,
    /// Data URI or `http(s)` URL of the optional asset image.
    pub image: Option<String>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            template: TemplateId::Minimal,
            title: "Build Faster with AI".to_owned(),
            description:
                "Learn how to leverage generative models to speed up your development workflow by 10x."
                    .to_owned(),
            site_name: "github.io".to_owned(),
            author: "@ranjan-builds".to_owned(),
            source_url: "https://example.com".to_owned(),
            date_stamp: String::new(),
            font: FontFamily::Sans,
            font_size: 1.0,
            background_kind: BackgroundKind::Gradient,
            solid_color: "#1e293b".to_owned(),
            gradient_start: "#0f172a".to_owned(),
            gradient_end: "#334155".to_owned(),
            gradient_direction: "135deg".to_owned(),
            noise_intensity: 0.05,
            pattern: PatternKind::Grid,
            pattern_color: "rgba(255,255,255,0.1)".to_owned(),
            pattern_cell_size: 40,
            pattern_opacity: 0.8,
            pattern_fade: FadeDirection::Edges,
            pattern_fade_offset: 60.0,
            text_color: "#ffffff".to_owned(),
            accent_color: "#ffffff".to_owned(),
            show_logo: true,
            image: None,
        }
    }
}

impl CardConfig {
    /// Parses a JSON configuration document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> OgResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| OgError::validation(format!("configuration is not valid JSON: {e}")))?;
        Self::from_json_value(value)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> OgResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)
            .map_err(|e| OgError::validation(format!("configuration is not valid JSON: {e}")))?;
        Self::from_json_value(value)
    }

    pub fn from_json_value(value: serde_json::Value) -> OgResult<Self> {
        if !value.is_object() {
            return Err(OgError::validation("configuration must be a JSON object"));
        }
        let cfg: CardConfig = serde_json::from_value(value)
            .map_err(|e| OgError::validation(format!("invalid configuration field: {e}")))?;
        Ok(cfg.sanitized())
    }

    pub fn to_json_pretty(&self) -> OgResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| OgError::Other(anyhow::anyhow!("serialize configuration: {e}")))
    }

    /// Returns a copy with numeric fields clamped into their documented ranges.
    ///
    /// Non-numeric fields are left untouched.
    pub fn sanitized(&self) -> Self {
        let mut c = self.clone();
        if !(c.font_size.is_finite() && c.font_size > 0.0) {
            c.font_size = 1.0;
        }
        c.noise_intensity = clamp_unit(c.noise_intensity);
        c.pattern_opacity = clamp_unit(c.pattern_opacity);
        c.pattern_fade_offset = if c.pattern_fade_offset.is_finite() {
            c.pattern_fade_offset.clamp(0.0, 100.0)
        } else {
            0.0
        };
        c.pattern_cell_size = c.pattern_cell_size.max(1);
        if c.image.as_deref().is_some_and(|s| s.trim().is_empty()) {
            c.image = None;
        }
        c
    }

    /// The asset image, if one is set and non-empty.
    pub fn image_source(&self) -> Option<&str> {
        self.image.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
