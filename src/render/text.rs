//! Text node rendering: wrap, clip to the frame's line capacity, ellipsize, emit `<text>`.

use std::fmt::Write as _;

use crate::layout::metrics::{self, LineWidth};
use crate::layout::scene::{TextAlign, TextNode, TextStyle};
use crate::render::fonts::css_family;
use crate::render::svg::{escape_xml, num};

pub const ELLIPSIS: char = '…';

/// Baseline offset below the line-box center, in `em`.
const BASELINE_SHIFT_EM: f64 = 0.35;

/// Lines of a text node after wrapping and clipping.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<String>,
    pub font_px: f64,
    pub line_px: f64,
    /// `true` when content was dropped or ellipsized to fit the frame.
    pub truncated: bool,
}

fn display_text(text: &str, style: &TextStyle) -> String {
    if style.uppercase {
        text.to_uppercase()
    } else {
        text.to_owned()
    }
}

/// Cuts `line` to the longest prefix that still fits `max_width` with an ellipsis appended.
pub fn ellipsize(line: &str, font_px: f64, max_width: f64, style: &TextStyle) -> String {
    let line = line.trim_end();
    let mut width = LineWidth::default();
    let mut keep = 0usize;
    for (i, ch) in line.char_indices() {
        width.push(ch, style);
        if width.with(ELLIPSIS, style).px(font_px, style) > max_width {
            break;
        }
        keep = i + ch.len_utf8();
    }
    let mut out = line[..keep].trim_end().to_owned();
    out.push(ELLIPSIS);
    out
}

/// Breaks the node's content into the lines that fit its frame.
pub fn layout_text(node: &TextNode) -> TextLayout {
    let style = &node.style;
    let font_px = node.size.px();
    let line_px = (font_px * style.line_height).max(1e-6);
    let width = node.frame.width().max(0.0);
    let content = display_text(&node.content, style);

    let mut lines = if style.wrap {
        metrics::wrap_lines(&content, font_px, width, style)
    } else {
        vec![content.replace('\n', " ")]
    };
    // Half a pixel of slack absorbs float error in frames sized to an exact line multiple.
    let capacity = ((node.frame.height() + 0.5) / line_px).floor().max(0.0) as usize;

    let mut truncated = false;
    if lines.len() > capacity {
        lines.truncate(capacity);
        truncated = true;
        if let Some(last) = lines.last_mut() {
            *last = ellipsize(last, font_px, width, style);
        }
    } else if let Some(last) = lines.last_mut()
        && !style.wrap
        && metrics::measure(last, font_px, style) > width
    {
        *last = ellipsize(last, font_px, width, style);
        truncated = true;
    }

    TextLayout {
        lines,
        font_px,
        line_px,
        truncated,
    }
}

/// Baseline of line `index` inside the node's frame.
pub fn baseline(node: &TextNode, layout: &TextLayout, index: usize) -> f64 {
    node.frame.y0
        + index as f64 * layout.line_px
        + 0.5 * layout.line_px
        + BASELINE_SHIFT_EM * layout.font_px
}

fn anchor(node: &TextNode) -> (&'static str, f64) {
    match node.style.align {
        TextAlign::Start => ("start", node.frame.x0),
        TextAlign::Center => ("middle", node.frame.center().x),
        TextAlign::End => ("end", node.frame.x1),
    }
}

/// Splits displayed `line` into runs of span indices by walking the source characters in order.
///
/// Characters the line introduced (the ellipsis) take the index of the preceding run.
fn span_runs(line: &str, source: &[(char, usize)], cursor: &mut usize) -> Vec<(String, usize)> {
    let mut runs: Vec<(String, usize)> = Vec::new();
    let mut last = source.get(*cursor).map(|(_, i)| *i).unwrap_or(0);
    for ch in line.chars() {
        let mut j = *cursor;
        while j < source.len() && source[j].0 != ch {
            j += 1;
        }
        let idx = if j < source.len() {
            *cursor = j + 1;
            source[j].1
        } else {
            last
        };
        last = idx;
        match runs.last_mut() {
            Some((text, i)) if *i == idx => text.push(ch),
            _ => runs.push((ch.to_string(), idx)),
        }
    }
    runs
}

/// `<text>` element for the node, or `None` when nothing is visible.
pub fn text_markup(node: &TextNode) -> Option<String> {
    let layout = layout_text(node);
    if layout.lines.iter().all(|l| l.is_empty()) || node.style.opacity <= 0.0 {
        return None;
    }
    let style = &node.style;
    let (anchor, x) = anchor(node);

    let mut out = String::new();
    let _ = write!(
        out,
        r#"<text xml:space="preserve" font-family="{}" font-size="{}" font-weight="{}""#,
        escape_xml(css_family(style.family)),
        num(layout.font_px),
        style.weight
    );
    if style.italic {
        out.push_str(r#" font-style="italic""#);
    }
    if style.letter_spacing != 0.0 {
        let _ = write!(
            out,
            r#" letter-spacing="{}""#,
            num(style.letter_spacing * layout.font_px)
        );
    }
    let _ = write!(
        out,
        r#" fill="{}" text-anchor="{anchor}""#,
        escape_xml(&style.color)
    );
    if style.opacity < 1.0 {
        let _ = write!(out, r#" fill-opacity="{}""#, num(style.opacity));
    }
    out.push('>');

    let source: Vec<(char, usize)> = node
        .spans
        .iter()
        .enumerate()
        .flat_map(|(i, span)| {
            display_text(&span.text, style)
                .chars()
                .map(move |c| (c, i))
                .collect::<Vec<_>>()
        })
        .collect();
    let mut cursor = 0usize;

    for (i, line) in layout.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">"#,
            num(x),
            num(baseline(node, &layout, i))
        );
        if source.is_empty() {
            out.push_str(&escape_xml(line));
        } else {
            for (text, idx) in span_runs(line, &source, &mut cursor) {
                let span = &node.spans[idx];
                let _ = write!(out, r#"<tspan fill="{}""#, escape_xml(&span.color));
                if let Some(w) = span.weight {
                    let _ = write!(out, r#" font-weight="{w}""#);
                }
                let _ = write!(out, ">{}</tspan>", escape_xml(&text));
            }
        }
        out.push_str("</tspan>");
    }
    out.push_str("</text>");
    Some(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
