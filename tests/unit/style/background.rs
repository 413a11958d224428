use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn parses_angle_units() {
    let deg = |t: &str| match GradientDirection::parse(t) {
        Some(GradientDirection::Angle { degrees }) => degrees,
        other => panic!("expected angle for {t:?}, got {other:?}"),
    };
    assert!(approx(deg("135deg"), 135.0));
    assert!(approx(deg(" 0.25turn "), 90.0));
    assert!(approx(deg("200grad"), 180.0));
    assert!(approx(deg("3.141592653589793rad"), 180.0));
    assert!(approx(deg("0"), 0.0));
    assert!(GradientDirection::parse("45").is_none());
    assert!(GradientDirection::parse("sideways").is_none());
}

#[test]
fn parses_side_and_corner_keywords() {
    assert_eq!(
        GradientDirection::parse("to right"),
        Some(GradientDirection::Side { side: Side::Right })
    );
    let corner = GradientDirection::Corner {
        vertical: Side::Top,
        horizontal: Side::Left,
    };
    assert_eq!(GradientDirection::parse("to top left"), Some(corner));
    assert_eq!(GradientDirection::parse("TO LEFT TOP"), Some(corner));
    assert!(GradientDirection::parse("to top bottom").is_none());
}

#[test]
fn unknown_direction_defaults_to_bottom() {
    assert_eq!(
        GradientDirection::parse_or_default("diagonal-ish"),
        GradientDirection::DEFAULT
    );
}

#[test]
fn side_lines_span_the_box() {
    let r = Rect::new(0.0, 0.0, 1200.0, 630.0);
    let (a, b) = GradientDirection::Side { side: Side::Right }.line_for(r);
    assert!(approx(a.x, 0.0) && approx(a.y, 315.0));
    assert!(approx(b.x, 1200.0) && approx(b.y, 315.0));

    let (a, b) = GradientDirection::Side { side: Side::Bottom }.line_for(r);
    assert!(approx(a.y, 0.0) && approx(b.y, 630.0));
}

#[test]
fn corner_direction_reaches_the_corner_extent() {
    let r = Rect::new(0.0, 0.0, 1200.0, 630.0);
    let dir = GradientDirection::Corner {
        vertical: Side::Bottom,
        horizontal: Side::Right,
    };
    let deg = dir.degrees_for(1200.0, 630.0);
    assert!(deg > 90.0 && deg < 180.0);
    // The gradient line's projection of the target corner equals its end point.
    let (a, b) = dir.line_for(r);
    let axis = (b - a).normalize();
    let proj = (Point::new(1200.0, 630.0) - a).dot(axis);
    assert!(approx(proj, (b - a).hypot()));
}

#[test]
fn background_resolver_passes_colors_through() {
    let mut cfg = CardConfig::default();
    cfg.background_kind = BackgroundKind::Solid;
    cfg.solid_color = "not-a-color".to_owned();
    assert_eq!(
        resolve_background(&cfg),
        BackgroundFill::Solid {
            color: "not-a-color".to_owned()
        }
    );

    let cfg = CardConfig::default();
    let BackgroundFill::Linear(g) = resolve_background(&cfg) else {
        panic!("default background is a gradient");
    };
    assert_eq!(g.direction, GradientDirection::Angle { degrees: 135.0 });
    assert_eq!(g.stops[0].color, "#0f172a");
    assert_eq!(g.stops[1].color, "#334155");
}
