//! SVG markup primitives used to build the card surface.
//!
//! Everything is emitted in the logical 1200x630 space. Density is applied once, as a uniform
//! scale at rasterization time, so no helper here ever sees device pixels.

use std::fmt::Write as _;

use crate::foundation::core::{Canvas, Rect};
use crate::layout::scene::{Fill, IconKind, Paint, PaintStop, Shape, Stroke};
use crate::style::background::GradientDirection;

/// Escapes text for use in SVG character data and double-quoted attributes.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Compact decimal form with at most three fractional digits.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        return "0".to_owned();
    }
    if r == r.trunc() && r.abs() < 1e15 {
        return format!("{}", r as i64);
    }
    format!("{r}")
}

/// Document under construction: a body in paint order plus a shared `<defs>` block.
pub struct SvgDoc {
    canvas: Canvas,
    defs: String,
    body: String,
    next_id: u32,
}

impl SvgDoc {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            defs: String::new(),
            body: String::new(),
            next_id: 0,
        }
    }

    /// Document-unique id. Ids are sequential, so identical scenes produce identical markup.
    pub fn fresh_id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        id
    }

    pub fn push(&mut self, markup: &str) {
        self.body.push_str(markup);
    }

    pub fn define(&mut self, markup: &str) {
        self.defs.push_str(markup);
    }

    pub fn open_group(&mut self, attrs: &str) {
        if attrs.is_empty() {
            self.body.push_str("<g>");
        } else {
            let _ = write!(self.body, "<g {attrs}>");
        }
    }

    pub fn close_group(&mut self) {
        self.body.push_str("</g>");
    }

    pub fn finish(self) -> String {
        let (w, h) = (self.canvas.width, self.canvas.height);
        let mut out = String::with_capacity(self.defs.len() + self.body.len() + 256);
        let _ = write!(
            out,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" "#,
                r#"xmlns:xlink="http://www.w3.org/1999/xlink" "#,
                r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            w = w,
            h = h
        );
        if !self.defs.is_empty() {
            let _ = write!(out, "<defs>{}</defs>", self.defs);
        }
        out.push_str(&self.body);
        out.push_str("</svg>");
        out
    }
}

fn clamp_radii(frame: Rect, radii: [f64; 4]) -> [f64; 4] {
    let max = 0.5 * frame.width().min(frame.height()).max(0.0);
    radii.map(|r| if r.is_finite() { r.clamp(0.0, max) } else { 0.0 })
}

/// Path data for a rectangle with independent corner radii (top-left first, clockwise).
pub fn rounded_rect_path(frame: Rect, radii: [f64; 4]) -> String {
    let [tl, tr, br, bl] = clamp_radii(frame, radii);
    let (x0, y0, x1, y1) = (frame.x0, frame.y0, frame.x1, frame.y1);
    let mut d = String::new();
    let _ = write!(d, "M{} {}H{}", num(x0 + tl), num(y0), num(x1 - tr));
    if tr > 0.0 {
        let _ = write!(d, "A{r} {r} 0 0 1 {} {}", num(x1), num(y0 + tr), r = num(tr));
    }
    let _ = write!(d, "V{}", num(y1 - br));
    if br > 0.0 {
        let _ = write!(d, "A{r} {r} 0 0 1 {} {}", num(x1 - br), num(y1), r = num(br));
    }
    let _ = write!(d, "H{}", num(x0 + bl));
    if bl > 0.0 {
        let _ = write!(d, "A{r} {r} 0 0 1 {} {}", num(x0), num(y1 - bl), r = num(bl));
    }
    let _ = write!(d, "V{}", num(y0 + tl));
    if tl > 0.0 {
        let _ = write!(d, "A{r} {r} 0 0 1 {} {}", num(x0 + tl), num(y0), r = num(tl));
    }
    d.push('Z');
    d
}

/// Geometry element for `shape` at `frame`, with `attrs` appended. Icons have no outline
/// geometry and yield `None`.
pub fn shape_element(shape: &Shape, frame: Rect, attrs: &str) -> Option<String> {
    let (x, y, w, h) = (
        num(frame.x0),
        num(frame.y0),
        num(frame.width()),
        num(frame.height()),
    );
    match shape {
        Shape::RoundedRect { radii } => {
            let radii = clamp_radii(frame, *radii);
            if radii.iter().all(|r| *r == 0.0) {
                Some(format!(
                    r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" {attrs}/>"#
                ))
            } else if radii.iter().all(|r| *r == radii[0]) {
                let r = num(radii[0]);
                Some(format!(
                    r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" {attrs}/>"#
                ))
            } else {
                Some(format!(
                    r#"<path d="{}" {attrs}/>"#,
                    rounded_rect_path(frame, radii)
                ))
            }
        }
        Shape::Ellipse => {
            let c = frame.center();
            Some(format!(
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" {attrs}/>"#,
                num(c.x),
                num(c.y),
                num(0.5 * frame.width()),
                num(0.5 * frame.height())
            ))
        }
        Shape::Icon { .. } => None,
    }
}

/// `shape` shrunk by `d` on every side, keeping corners concentric.
pub fn inset_shape(shape: &Shape, frame: Rect, d: f64) -> (Shape, Rect) {
    let inner = Rect::new(
        frame.x0 + d,
        frame.y0 + d,
        (frame.x1 - d).max(frame.x0 + d),
        (frame.y1 - d).max(frame.y0 + d),
    );
    let shape = match shape {
        Shape::RoundedRect { radii } => Shape::RoundedRect {
            radii: radii.map(|r| (r - d).max(0.0)),
        },
        other => *other,
    };
    (shape, inner)
}

fn opacity_attr(name: &str, v: f64) -> String {
    if v >= 1.0 {
        String::new()
    } else {
        format!(r#" {name}="{}""#, num(v.max(0.0)))
    }
}

/// `fill`/`fill-opacity` attributes for a paint.
pub fn paint_attrs(paint: &Paint) -> String {
    format!(
        r#"fill="{}"{}"#,
        escape_xml(&paint.color),
        opacity_attr("fill-opacity", paint.opacity)
    )
}

/// Defines a `userSpaceOnUse` linear gradient spanning `frame` and returns its id.
pub fn define_linear_gradient(
    doc: &mut SvgDoc,
    direction: GradientDirection,
    stops: &[PaintStop],
    frame: Rect,
) -> String {
    let id = doc.fresh_id("lg");
    let (p0, p1) = direction.line_for(frame);
    let mut markup = format!(
        r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
        num(p0.x),
        num(p0.y),
        num(p1.x),
        num(p1.y)
    );
    for stop in stops {
        let _ = write!(
            markup,
            r#"<stop offset="{}" stop-color="{}"{}/>"#,
            num(stop.offset.clamp(0.0, 1.0)),
            escape_xml(&stop.paint.color),
            opacity_attr("stop-opacity", stop.paint.opacity)
        );
    }
    markup.push_str("</linearGradient>");
    doc.define(&markup);
    id
}

/// Fill attributes for `fill` over `frame`, defining a gradient when needed.
pub fn fill_attrs(doc: &mut SvgDoc, fill: &Fill, frame: Rect) -> String {
    match fill {
        Fill::Solid(paint) => paint_attrs(paint),
        Fill::Linear { direction, stops } => {
            let id = define_linear_gradient(doc, *direction, stops, frame);
            format!(r#"fill="url(#{id})""#)
        }
    }
}

pub fn stroke_attrs(stroke: &Stroke) -> String {
    format!(
        r#"stroke="{}" stroke-width="{}"{}"#,
        escape_xml(&stroke.paint.color),
        num(stroke.width),
        opacity_attr("stroke-opacity", stroke.paint.opacity)
    )
}

/// Defines a clip path for `shape` at `frame` and returns its id. Icons clip to their frame.
pub fn define_clip(doc: &mut SvgDoc, shape: &Shape, frame: Rect) -> String {
    let id = doc.fresh_id("clip");
    let geometry = shape_element(shape, frame, "")
        .or_else(|| shape_element(&Shape::RECT, frame, ""))
        .unwrap_or_default();
    doc.define(&format!(r#"<clipPath id="{id}">{geometry}</clipPath>"#));
    id
}

/// Defines a gaussian blur whose filter region covers `frame` plus three deviations.
pub fn define_blur(doc: &mut SvgDoc, frame: Rect, std_dev: f64) -> String {
    let id = doc.fresh_id("blur");
    let pad = 3.0 * std_dev;
    doc.define(&format!(
        concat!(
            r#"<filter id="{id}" filterUnits="userSpaceOnUse" x="{x}" y="{y}" width="{w}" height="{h}">"#,
            r#"<feGaussianBlur stdDeviation="{s}"/></filter>"#
        ),
        id = id,
        x = num(frame.x0 - pad),
        y = num(frame.y0 - pad),
        w = num(frame.width() + 2.0 * pad),
        h = num(frame.height() + 2.0 * pad),
        s = num(std_dev)
    ));
    id
}

/// Outline icon paths on a 24x24 grid.
pub fn icon_paths(icon: IconKind) -> &'static [&'static str] {
    match icon {
        IconKind::Layout => &[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M3 9h18",
            "M9 21V9",
        ],
        IconKind::Image => &[
            "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
            "M11 9a2 2 0 1 1-4 0a2 2 0 1 1 4 0z",
            "M21 15l-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
        ],
        IconKind::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
        IconKind::Quote => &[
            "M3 21c3 0 7-1 7-8V5c0-1.25-.756-2.017-2-2H4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 .008-1 1.031V20c0 1 0 1 1 1z",
            "M15 21c3 0 7-1 7-8V5c0-1.25-.757-2.017-2-2h-4c-1.25 0-2 .75-2 1.972V11c0 1.25.75 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
        ],
        IconKind::Globe => &[
            "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0z",
            "M12 2a14.5 14.5 0 0 0 0 20a14.5 14.5 0 0 0 0-20",
            "M2 12h20",
        ],
    }
}

/// Icon stroked at `stroke.width` grid units, scaled to fit and centered in `frame`.
pub fn icon_markup(icon: IconKind, rotate_deg: f64, frame: Rect, stroke: &Stroke) -> String {
    let side = frame.width().min(frame.height()).max(0.0);
    let s = side / 24.0;
    let tx = frame.x0 + 0.5 * (frame.width() - side);
    let ty = frame.y0 + 0.5 * (frame.height() - side);
    let mut transform = format!("translate({} {}) scale({})", num(tx), num(ty), num(s));
    if rotate_deg != 0.0 {
        let _ = write!(transform, " rotate({} 12 12)", num(rotate_deg));
    }
    let mut out = format!(
        r#"<g transform="{transform}" fill="none" {} stroke-linecap="round" stroke-linejoin="round">"#,
        stroke_attrs(stroke)
    );
    for d in icon_paths(icon) {
        let _ = write!(out, r#"<path d="{d}"/>"#);
    }
    out.push_str("</g>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
