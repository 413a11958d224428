use super::*;
use crate::foundation::core::Canvas;

fn card() -> Rect {
    Canvas::CARD.rect()
}

#[test]
fn none_has_no_mask() {
    assert!(resolve_fade(FadeDirection::None, 60.0).is_none());
}

#[test]
fn edges_and_center_are_inverse_profiles() {
    let edges = resolve_fade(FadeDirection::Edges, 60.0).unwrap();
    let center = resolve_fade(FadeDirection::Center, 60.0).unwrap();
    let mid = card().center();
    let corner = Point::new(0.0, 0.0);

    assert_eq!(edges.alpha_at(mid, card()), 1.0);
    assert_eq!(edges.alpha_at(corner, card()), 0.0);
    assert_eq!(center.alpha_at(mid, card()), 0.0);
    assert_eq!(center.alpha_at(corner, card()), 1.0);
}

#[test]
fn edges_uses_inverted_inner_stop() {
    let edges = resolve_fade(FadeDirection::Edges, 60.0).unwrap();
    assert_eq!(edges.axis, MaskAxis::Radial);
    assert!((edges.stops[0].offset - 0.4).abs() < 1e-12);
    assert_eq!(edges.stops[0].alpha, 1.0);
    assert_eq!(edges.stops[1].offset, 1.0);
    assert_eq!(edges.stops[1].alpha, 0.0);

    // Still fully opaque at 35% of the radius, unlike a mirrored center fade.
    let r = FadeMask::radial_extent(card());
    let p = card().center() + kurbo::Vec2::new(0.35 * r, 0.0);
    assert_eq!(edges.alpha_at(p, card()), 1.0);
    let center = resolve_fade(FadeDirection::Center, 60.0).unwrap();
    assert!(center.alpha_at(p, card()) < 1.0);
}

#[test]
fn left_and_right_mirror_horizontally() {
    let left = resolve_fade(FadeDirection::Left, 50.0).unwrap();
    let right = resolve_fade(FadeDirection::Right, 50.0).unwrap();
    let a = Point::new(150.0, 300.0);
    let b = Point::new(1050.0, 300.0);
    assert!((left.alpha_at(a, card()) - 0.25).abs() < 1e-9);
    assert!((right.alpha_at(b, card()) - 0.25).abs() < 1e-9);
    assert_eq!(left.alpha_at(b, card()), 1.0);
}

#[test]
fn top_fades_in_downward() {
    let top = resolve_fade(FadeDirection::Top, 100.0).unwrap();
    assert_eq!(top.alpha_at(Point::new(10.0, 0.0), card()), 0.0);
    assert!((top.alpha_at(Point::new(10.0, 315.0), card()) - 0.5).abs() < 1e-9);
}

#[test]
fn zero_offset_center_is_fully_opaque_past_the_origin() {
    let center = resolve_fade(FadeDirection::Center, 0.0).unwrap();
    assert_eq!(center.alpha_at(Point::new(10.0, 10.0), card()), 1.0);
}
