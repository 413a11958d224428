use crate::config::model::{CardConfig, PatternKind};

/// Placeholder token in primitive templates that stands for the pattern color.
pub const GRID_COLOR_TOKEN: &str = "var(--grid-color)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternPrimitive {
    /// One 1px-radius dot at the cell center.
    Dot,
    /// A 1px line along the top edge and one along the left edge of every cell.
    GridLines,
}

impl PatternPrimitive {
    /// SVG markup for one cell of `cell` units, colored by the placeholder token.
    pub fn template(self, cell: f64) -> String {
        match self {
            PatternPrimitive::Dot => {
                let c = cell * 0.5;
                format!(r#"<circle cx="{c}" cy="{c}" r="1" fill="{GRID_COLOR_TOKEN}"/>"#)
            }
            PatternPrimitive::GridLines => format!(
                concat!(
                    r#"<rect x="0" y="0" width="{cell}" height="1" fill="{tok}"/>"#,
                    r#"<rect x="0" y="0" width="1" height="{cell}" fill="{tok}"/>"#
                ),
                cell = cell,
                tok = GRID_COLOR_TOKEN
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Repeating tile drawn over the whole canvas.
pub struct PatternTile {
    pub primitive: PatternPrimitive,
    pub color: String,
    pub cell_size: f64,
    pub opacity: f64,
}

impl PatternTile {
    /// Cell markup with every color placeholder replaced by the escaped pattern color.
    pub fn cell_markup(&self) -> String {
        self.primitive
            .template(self.cell_size)
            .replace(GRID_COLOR_TOKEN, &crate::render::svg::escape_xml(&self.color))
    }
}

/// `None` when the configuration asks for no pattern.
pub fn resolve_pattern(config: &CardConfig) -> Option<PatternTile> {
    let primitive = match config.pattern {
        PatternKind::None => return None,
        PatternKind::Dots => PatternPrimitive::Dot,
        PatternKind::Grid => PatternPrimitive::GridLines,
    };
    Some(PatternTile {
        primitive,
        color: config.pattern_color.clone(),
        cell_size: f64::from(config.pattern_cell_size.max(1)),
        opacity: config.pattern_opacity.clamp(0.0, 1.0),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/style/pattern.rs"]
mod tests;
