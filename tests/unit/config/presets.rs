use super::*;
use std::collections::BTreeSet;

#[test]
fn preset_names_are_unique() {
    let names: BTreeSet<_> = GRADIENT_PRESETS
        .iter()
        .map(|p| p.name.to_ascii_lowercase())
        .collect();
    assert_eq!(names.len(), GRADIENT_PRESETS.len());
}

#[test]
fn apply_preset_switches_to_gradient_and_sets_text_color() {
    let mut cfg = CardConfig::default();
    cfg.background_kind = BackgroundKind::Solid;
    cfg.title = "Keep me".to_owned();

    let out = apply_preset(&cfg, "sky");
    assert_eq!(out.background_kind, BackgroundKind::Gradient);
    assert_eq!(out.gradient_start, "#bae6fd");
    assert_eq!(out.gradient_end, "#38bdf8");
    assert_eq!(out.gradient_direction, "to bottom");
    assert_eq!(out.text_color, "#0c4a6e");
    assert_eq!(out.title, "Keep me");
    assert_eq!(cfg.background_kind, BackgroundKind::Solid);
}

#[test]
fn unknown_preset_leaves_config_unchanged() {
    let cfg = CardConfig::default();
    assert_eq!(apply_preset(&cfg, "Nope"), cfg);
}
