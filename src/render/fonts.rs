//! Font discovery for text drawn by the surface rasterizer.
//!
//! Layout never looks at fonts (see [`crate::layout::metrics`]); only the final raster does. A
//! missing family therefore changes glyph shapes, never line breaks or node geometry.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::model::FontFamily;

pub type FontDatabase = usvg::fontdb::Database;

/// CSS family list emitted for each configured font token.
pub fn css_family(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Sans => "Inter, 'Helvetica Neue', Arial, sans-serif",
        FontFamily::Serif => "'Playfair Display', Georgia, 'Times New Roman', serif",
        FontFamily::Mono => "'JetBrains Mono', 'Fira Code', Menlo, Consolas, monospace",
        FontFamily::System => "system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif",
    }
}

/// Where the rasterizer looks for faces.
#[derive(Clone, Debug, Default)]
pub struct FontSources {
    pub system: bool,
    pub dirs: Vec<PathBuf>,
}

impl FontSources {
    pub fn system() -> Self {
        Self {
            system: true,
            dirs: Vec::new(),
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }
}

#[tracing::instrument(skip_all, fields(system = sources.system, dirs = sources.dirs.len()))]
pub fn build_fontdb(sources: &FontSources) -> Arc<FontDatabase> {
    let mut db = FontDatabase::new();
    if sources.system {
        db.load_system_fonts();
    }
    for dir in &sources.dirs {
        load_fonts_from_dir(&mut db, dir);
        load_fonts_from_dir(&mut db, &dir.join("fonts"));
    }
    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

/// Loads every `ttf`/`otf`/`ttc` file directly inside `dir`. Unreadable entries are skipped.
pub fn load_fonts_from_dir(db: &mut FontDatabase, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::debug!(path = %path.display(), error = %e, "skipping font file");
        }
    }
}

/// Resolver that walks the requested families, then the generic families, then any face at all.
pub fn font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);
            families.push(usvg::fontdb::Family::Monospace);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };
            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/fonts.rs"]
mod tests;
