use super::*;
use crate::config::model::FontFamily;
use crate::foundation::core::{Rect, rect_xywh};
use crate::layout::scene::{TextRole, TextSpan, TypeScale};

fn node(content: &str, frame: Rect) -> TextNode {
    let mut style = TextStyle::new(FontFamily::Sans, "#ffffff");
    style.line_height = 1.5;
    TextNode {
        role: TextRole::Title,
        content: content.to_owned(),
        size: TypeScale::fixed_px(16.0),
        frame,
        style,
        spans: Vec::new(),
    }
}

#[test]
fn short_text_is_one_untruncated_line() {
    let n = node("Hello", rect_xywh(0.0, 0.0, 400.0, 24.0));
    let layout = layout_text(&n);
    assert_eq!(layout.lines, vec!["Hello".to_owned()]);
    assert!(!layout.truncated);
    assert_eq!(layout.line_px, 24.0);
}

#[test]
fn overflowing_lines_are_dropped_and_last_one_ellipsized() {
    let long = "word ".repeat(200);
    let n = node(&long, rect_xywh(0.0, 0.0, 200.0, 48.0));
    let layout = layout_text(&n);
    assert_eq!(layout.lines.len(), 2);
    assert!(layout.truncated);
    let last = layout.lines.last().unwrap();
    assert!(last.ends_with(ELLIPSIS));
    assert!(metrics::measure(last, 16.0, &n.style) <= 200.0);
}

#[test]
fn zero_height_frame_draws_nothing() {
    let n = node("Hidden", rect_xywh(0.0, 0.0, 200.0, 0.0));
    assert!(layout_text(&n).lines.is_empty());
    assert!(text_markup(&n).is_none());
}

#[test]
fn single_line_nodes_ellipsize_horizontally() {
    let mut n = node(
        "https://example.com/a/very/long/path/that/keeps/going",
        rect_xywh(0.0, 0.0, 120.0, 24.0),
    );
    n.style.wrap = false;
    let layout = layout_text(&n);
    assert_eq!(layout.lines.len(), 1);
    assert!(layout.truncated);
    assert!(layout.lines[0].ends_with(ELLIPSIS));
}

#[test]
fn ellipsize_of_too_narrow_box_keeps_only_the_mark() {
    let style = TextStyle::new(FontFamily::Sans, "#000");
    assert_eq!(ellipsize("abc", 16.0, 1.0, &style), "…");
}

#[test]
fn ellipsize_keeps_the_longest_prefix_that_fits() {
    let mut style = TextStyle::new(FontFamily::Serif, "#000");
    style.weight = 700;
    style.letter_spacing = 0.05;
    let line = "Wide mix of glyphs, MMM iii 123 ".repeat(20);
    for max in [40.0, 133.0, 250.0, 517.5] {
        let cut = ellipsize(&line, 18.0, max, &style);
        assert!(cut.ends_with(ELLIPSIS));
        assert!(metrics::measure(&cut, 18.0, &style) <= max, "{max}: {cut}");

        let kept = cut.trim_end_matches(ELLIPSIS);
        let next = line[kept.len()..].chars().next().unwrap();
        let longer = format!("{kept}{next}{ELLIPSIS}");
        if !next.is_whitespace() {
            assert!(metrics::measure(&longer, 18.0, &style) > max, "{max}: {longer}");
        }
    }
}

#[test]
fn ellipsize_handles_very_long_unbroken_lines() {
    let style = TextStyle::new(FontFamily::Sans, "#000");
    let line = "x".repeat(100_000);
    let cut = ellipsize(&line, 16.0, 300.0, &style);
    assert!(cut.chars().count() < 100);
    assert!(metrics::measure(&cut, 16.0, &style) <= 300.0);
}

#[test]
fn uppercase_is_applied_at_render_time() {
    let mut n = node("read on", rect_xywh(0.0, 0.0, 400.0, 24.0));
    n.style.uppercase = true;
    let svg = text_markup(&n).unwrap();
    assert!(svg.contains(">READ ON<"));
}

#[test]
fn alignment_picks_anchor_and_x() {
    let mut n = node("Hi", rect_xywh(100.0, 0.0, 200.0, 24.0));
    n.style.align = TextAlign::Center;
    let svg = text_markup(&n).unwrap();
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(r#"<tspan x="200""#));

    n.style.align = TextAlign::End;
    let svg = text_markup(&n).unwrap();
    assert!(svg.contains(r#"text-anchor="end""#));
    assert!(svg.contains(r#"<tspan x="300""#));
}

#[test]
fn baselines_step_by_line_height() {
    let n = node("one\ntwo", rect_xywh(0.0, 10.0, 400.0, 48.0));
    let layout = layout_text(&n);
    assert_eq!(layout.lines.len(), 2);
    let b0 = baseline(&n, &layout, 0);
    let b1 = baseline(&n, &layout, 1);
    assert!((b1 - b0 - 24.0).abs() < 1e-9);
    assert!((b0 - (10.0 + 12.0 + 0.35 * 16.0)).abs() < 1e-9);
}

#[test]
fn markup_escapes_content_and_color() {
    let mut n = node("Fish & <Chips>", rect_xywh(0.0, 0.0, 400.0, 24.0));
    n.style.color = "rgba(0,0,0,0.5)".into();
    n.style.opacity = 0.6;
    n.style.italic = true;
    let svg = text_markup(&n).unwrap();
    assert!(svg.contains("Fish &amp; &lt;Chips&gt;"));
    assert!(svg.contains(r#"fill="rgba(0,0,0,0.5)""#));
    assert!(svg.contains(r#"fill-opacity="0.6""#));
    assert!(svg.contains(r#"font-style="italic""#));
}

#[test]
fn spans_become_colored_runs() {
    let spans = vec![
        TextSpan {
            text: "const".into(),
            color: "#c084fc".into(),
            weight: None,
        },
        TextSpan {
            text: " = ".into(),
            color: "#ffffff".into(),
            weight: Some(700),
        },
        TextSpan {
            text: "\"x\"".into(),
            color: "#4ade80".into(),
            weight: None,
        },
    ];
    let mut n = node("const = \"x\"", rect_xywh(0.0, 0.0, 600.0, 24.0));
    n.spans = spans;
    let svg = text_markup(&n).unwrap();
    assert!(svg.contains(r##"<tspan fill="#c084fc">const</tspan>"##));
    assert!(svg.contains(r##"<tspan fill="#ffffff" font-weight="700"> = </tspan>"##));
    assert!(svg.contains(r##"<tspan fill="#4ade80">&quot;x&quot;</tspan>"##));
}

#[test]
fn wrapped_spans_continue_on_the_next_line() {
    let spans = vec![
        TextSpan {
            text: "alpha beta ".into(),
            color: "#111111".into(),
            weight: None,
        },
        TextSpan {
            text: "gamma".into(),
            color: "#222222".into(),
            weight: None,
        },
    ];
    let mut n = node("alpha beta gamma", rect_xywh(0.0, 0.0, 90.0, 72.0));
    n.spans = spans;
    let layout = layout_text(&n);
    assert!(layout.lines.len() >= 2);
    let svg = text_markup(&n).unwrap();
    assert!(svg.contains(r##"<tspan fill="#222222">gamma</tspan>"##));
}

#[test]
fn transparent_text_is_skipped() {
    let mut n = node("ghost", rect_xywh(0.0, 0.0, 400.0, 24.0));
    n.style.opacity = 0.0;
    assert!(text_markup(&n).is_none());
}
