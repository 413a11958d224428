use super::*;
use crate::foundation::core::rect_xywh;
use crate::style::background::Side;

#[test]
fn escape_xml_covers_markup_characters() {
    assert_eq!(
        escape_xml(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/a&gt;"
    );
    assert_eq!(escape_xml("plain"), "plain");
}

#[test]
fn num_is_compact_and_stable() {
    assert_eq!(num(12.0), "12");
    assert_eq!(num(0.1), "0.1");
    assert_eq!(num(1.23456), "1.235");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn fresh_ids_are_sequential() {
    let mut doc = SvgDoc::new(Canvas::CARD);
    assert_eq!(doc.fresh_id("lg"), "lg0");
    assert_eq!(doc.fresh_id("clip"), "clip1");
}

#[test]
fn finish_wraps_defs_and_body_in_card_viewbox() {
    let mut doc = SvgDoc::new(Canvas::CARD);
    doc.define("<clipPath id=\"c\"/>");
    doc.push("<rect/>");
    let svg = doc.finish();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 1200 630""#));
    let defs = svg.find("<defs>").unwrap();
    let body = svg.find("<rect/>").unwrap();
    assert!(defs < body);
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn plain_and_uniform_rects_use_rect_elements() {
    let frame = rect_xywh(10.0, 20.0, 100.0, 50.0);
    let plain = shape_element(&Shape::RECT, frame, "fill=\"red\"").unwrap();
    assert!(plain.starts_with("<rect "));
    assert!(!plain.contains("rx="));

    let round = shape_element(&Shape::rounded(8.0), frame, "").unwrap();
    assert!(round.contains(r#"rx="8""#));
}

#[test]
fn radii_are_clamped_to_half_the_short_side() {
    let frame = rect_xywh(0.0, 0.0, 100.0, 20.0);
    let pill = shape_element(&Shape::rounded(999.0), frame, "").unwrap();
    assert!(pill.contains(r#"rx="10""#));
}

#[test]
fn mixed_radii_become_a_path() {
    let frame = rect_xywh(0.0, 0.0, 100.0, 100.0);
    let el = shape_element(&Shape::rounded_top(24.0), frame, "").unwrap();
    assert!(el.starts_with("<path d=\"M24 0H76A24 24 0 0 1 100 24V100H0V24A24 24"));
}

#[test]
fn icons_have_no_outline_geometry() {
    let frame = rect_xywh(0.0, 0.0, 24.0, 24.0);
    assert!(shape_element(&Shape::icon(IconKind::Globe), frame, "").is_none());
}

#[test]
fn inset_shape_keeps_corners_concentric() {
    let (shape, inner) = inset_shape(&Shape::rounded(12.0), rect_xywh(0.0, 0.0, 100.0, 40.0), 0.5);
    assert_eq!(inner, Rect::new(0.5, 0.5, 99.5, 39.5));
    assert_eq!(shape, Shape::rounded(11.5));
}

#[test]
fn solid_paint_emits_opacity_only_when_translucent() {
    assert_eq!(paint_attrs(&Paint::solid("#fff")), r##"fill="#fff""##);
    assert_eq!(
        paint_attrs(&Paint::new("#000", 0.25)),
        r##"fill="#000" fill-opacity="0.25""##
    );
}

#[test]
fn linear_fill_defines_gradient_along_css_line() {
    let mut doc = SvgDoc::new(Canvas::CARD);
    let fill = Fill::linear(
        GradientDirection::Side { side: Side::Right },
        Paint::black(0.8),
        Paint::black(0.0),
    );
    let attrs = fill_attrs(&mut doc, &fill, rect_xywh(0.0, 0.0, 200.0, 100.0));
    assert_eq!(attrs, r#"fill="url(#lg0)""#);
    let svg = doc.finish();
    assert!(svg.contains(r#"x1="0" y1="50" x2="200" y2="50""#));
    assert!(svg.contains(r#"stop-opacity="0.8""#));
    assert!(svg.contains(r#"stop-opacity="0""#));
}

#[test]
fn clip_and_blur_definitions_are_referenced_by_id() {
    let mut doc = SvgDoc::new(Canvas::CARD);
    let clip = define_clip(&mut doc, &Shape::Ellipse, rect_xywh(0.0, 0.0, 40.0, 40.0));
    let blur = define_blur(&mut doc, rect_xywh(100.0, 100.0, 256.0, 256.0), 64.0);
    let svg = doc.finish();
    assert!(svg.contains(&format!(r#"<clipPath id="{clip}"><ellipse"#)));
    assert!(svg.contains(&format!(r#"<filter id="{blur}""#)));
    assert!(svg.contains(r#"x="-92""#));
    assert!(svg.contains(r#"stdDeviation="64""#));
}

#[test]
fn icon_markup_scales_grid_to_frame() {
    let stroke = Stroke {
        paint: Paint::white(0.5),
        width: 2.0,
    };
    let markup = icon_markup(IconKind::BarChart, 0.0, rect_xywh(100.0, 50.0, 48.0, 48.0), &stroke);
    assert!(markup.contains("translate(100 50) scale(2)"));
    assert!(markup.contains(r#"fill="none""#));
    assert_eq!(markup.matches("<path").count(), icon_paths(IconKind::BarChart).len());

    let rotated = icon_markup(IconKind::Quote, 180.0, rect_xywh(0.0, 0.0, 120.0, 120.0), &stroke);
    assert!(rotated.contains("rotate(180 12 12)"));
}
