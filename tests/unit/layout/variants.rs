use super::*;

#[test]
fn hex_alpha_matches_css_suffixes() {
    assert!((hex_alpha(0x60) - 0.376).abs() < 1e-3);
    assert!((hex_alpha(0x30) - 0.188).abs() < 1e-3);
    assert_eq!(hex_alpha(0xff), 1.0);
}

#[test]
fn fit_heights_shrinks_trailing_blocks_first() {
    let mut h = [100.0, 80.0];
    fit_heights(&mut h, 20.0, 150.0);
    assert_eq!(h, [100.0, 30.0]);

    let mut h = [100.0, 80.0];
    fit_heights(&mut h, 20.0, 60.0);
    assert_eq!(h, [40.0, 0.0]);

    let mut h = [10.0, 10.0];
    fit_heights(&mut h, 0.0, 100.0);
    assert_eq!(h, [10.0, 10.0]);
}

#[test]
fn chip_wraps_caption_with_padding() {
    let cfg = CardConfig::default();
    let ctx = Ctx::new(&cfg);
    let (node, w) = outline_chip(&ctx, TextRole::Label, "Read now", (10.0, 20.0), f64::INFINITY);
    let Node::Group(g) = node else {
        panic!("chip is a group");
    };
    assert_eq!(g.frame.x0, 10.0);
    assert_eq!(g.frame.height(), 32.0);
    assert_eq!(g.frame.width(), w);
    assert_eq!(outline_chip_width(&ctx, "Read now"), w);
    assert!(w > 32.0);
}

#[test]
fn invalid_font_multiplier_falls_back_to_one() {
    let cfg = CardConfig {
        font_size: f64::NAN,
        ..CardConfig::default()
    };
    let ctx = Ctx::new(&cfg);
    assert_eq!(ctx.scaled(TITLE_REM).px(), 72.0);
}
