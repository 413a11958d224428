use crate::config::model::{BackgroundKind, CardConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A named two-stop background gradient with a text color that reads well on it.
pub struct GradientPreset {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub direction: &'static str,
    pub text_color: &'static str,
}

const fn preset(
    name: &'static str,
    start: &'static str,
    end: &'static str,
    direction: &'static str,
    text_color: &'static str,
) -> GradientPreset {
    GradientPreset {
        name,
        start,
        end,
        direction,
        text_color,
    }
}

/// Built-in presets, ordered from darkest to lightest.
pub const GRADIENT_PRESETS: [GradientPreset; 34] = [
    preset("Obsidian", "#0f172a", "#020617", "to bottom", "#f8fafc"),
    preset("Void", "#18181b", "#09090b", "to bottom", "#f8fafc"),
    preset("Midnight", "#0f172a", "#581c87", "135deg", "#f8fafc"),
    preset("Deep Sea", "#1e3a8a", "#172554", "to bottom", "#f8fafc"),
    preset("Charcoal", "#334155", "#0f172a", "135deg", "#f8fafc"),
    preset("Forest", "#14532d", "#052e16", "to bottom", "#f0fdf4"),
    preset("Plum", "#4c1d95", "#be185d", "135deg", "#fdf4ff"),
    preset("Crimson", "#991b1b", "#450a0a", "to right", "#fef2f2"),
    preset("Emerald", "#10b981", "#064e3b", "135deg", "#ecfdf5"),
    preset("Corporate", "#2563eb", "#4338ca", "135deg", "#eff6ff"),
    preset("Azure", "#0ea5e9", "#2563eb", "135deg", "#ffffff"),
    preset("Dusk", "#6366f1", "#a855f7", "to right", "#ffffff"),
    preset("Ocean", "#60a5fa", "#34d399", "135deg", "#ffffff"),
    preset("Teal", "#2dd4bf", "#0f766e", "135deg", "#ffffff"),
    preset("Berry", "#a855f7", "#ec4899", "135deg", "#ffffff"),
    preset("Aurora", "#4ade80", "#3b82f6", "135deg", "#ffffff"),
    preset("Cyber", "#f0abfc", "#8b5cf6", "to right", "#ffffff"),
    preset("Smoke", "#94a3b8", "#475569", "135deg", "#f8fafc"),
    preset("Flare", "#f97316", "#dc2626", "135deg", "#fff7ed"),
    preset("Sunset", "#fb923c", "#f43f5e", "135deg", "#fff7ed"),
    preset("Gold", "#fbbf24", "#b45309", "135deg", "#ffffff"),
    preset("Neon", "#f472b6", "#db2777", "to bottom", "#ffffff"),
    preset("Candy", "#f9a8d4", "#f43f5e", "to bottom", "#ffffff"),
    preset("Sky", "#bae6fd", "#38bdf8", "to bottom", "#0c4a6e"),
    preset("Mint", "#d1fae5", "#6ee7b7", "to right", "#064e3b"),
    preset("Rose", "#ffe4e6", "#fda4af", "135deg", "#881337"),
    preset("Lavender", "#e9d5ff", "#c084fc", "to right", "#581c87"),
    preset("Peach", "#ffedd5", "#fdba74", "to right", "#7c2d12"),
    preset("Solar", "#fde047", "#eab308", "135deg", "#422006"),
    preset("Steel", "#e2e8f0", "#94a3b8", "to top", "#0f172a"),
    preset("Slate", "#f1f5f9", "#cbd5e1", "135deg", "#0f172a"),
    preset("Clean", "#f3f4f6", "#e5e7eb", "135deg", "#1f2937"),
    preset("Glacier", "#e0f2fe", "#f0f9ff", "to bottom", "#0c4a6e"),
    preset("Polar", "#f8fafc", "#e2e8f0", "to bottom", "#0f172a"),
];

/// Case-insensitive lookup by preset name.
pub fn find_preset(name: &str) -> Option<&'static GradientPreset> {
    let name = name.trim();
    GRADIENT_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Returns `config` with the named preset applied.
///
/// The background switches to gradient mode and the text color follows the preset. An unknown
/// name returns an unchanged copy.
pub fn apply_preset(config: &CardConfig, name: &str) -> CardConfig {
    let Some(p) = find_preset(name) else {
        tracing::warn!(name, "unknown gradient preset");
        return config.clone();
    };
    CardConfig {
        background_kind: BackgroundKind::Gradient,
        gradient_start: p.start.to_owned(),
        gradient_end: p.end.to_owned(),
        gradient_direction: p.direction.to_owned(),
        text_color: p.text_color.to_owned(),
        ..config.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/presets.rs"]
mod tests;
