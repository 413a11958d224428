use super::*;

#[test]
fn none_pattern_resolves_to_nothing() {
    let mut cfg = CardConfig::default();
    cfg.pattern = PatternKind::None;
    assert!(resolve_pattern(&cfg).is_none());
}

#[test]
fn grid_tile_substitutes_every_placeholder() {
    let mut cfg = CardConfig::default();
    cfg.pattern = PatternKind::Grid;
    cfg.pattern_color = "#ff0000".to_owned();
    cfg.pattern_cell_size = 24;
    cfg.pattern_opacity = 0.5;

    let tile = resolve_pattern(&cfg).unwrap();
    assert_eq!(tile.primitive, PatternPrimitive::GridLines);
    assert_eq!(tile.cell_size, 24.0);
    assert_eq!(tile.opacity, 0.5);

    let markup = tile.cell_markup();
    assert!(!markup.contains(GRID_COLOR_TOKEN));
    assert_eq!(markup.matches("#ff0000").count(), 2);
    assert!(markup.contains(r#"width="24""#));
}

#[test]
fn dot_is_centered_in_the_cell() {
    let mut cfg = CardConfig::default();
    cfg.pattern = PatternKind::Dots;
    cfg.pattern_cell_size = 40;
    let markup = resolve_pattern(&cfg).unwrap().cell_markup();
    assert!(markup.contains(r#"cx="20" cy="20" r="1""#));
}

#[test]
fn pattern_color_is_escaped_into_markup() {
    let mut cfg = CardConfig::default();
    cfg.pattern_color = r#"red" onload="x"#.to_owned();
    let markup = resolve_pattern(&cfg).unwrap().cell_markup();
    assert!(!markup.contains(r#"red" onload"#));
    assert!(markup.contains("&quot;"));
}
