//! Card surface: one SVG document per (scene, styles) pair, rasterized at any density.
//!
//! Paint order is fixed for every template: base fill, noise, pattern (under its fade mask),
//! then scene content. Export reuses the same document the preview was drawn from; only the
//! uniform raster scale changes.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::config::model::FontFamily;
use crate::foundation::core::{Canvas, PixelDensity, Rect};
use crate::foundation::error::{OgError, OgResult};
use crate::layout::scene::{
    DecorationNode, Fill, GroupNode, ImageFit, ImageSlotNode, Node, Paint, PaintStop,
    PlaceholderMark, SceneTree, Shape, SlotSource, Stroke, TextAlign, TextNode, TextRole, TextStyle,
    TypeScale,
};
use crate::render::assets::{AssetResolver, encode_data_uri};
use crate::render::fonts::{FontDatabase, font_resolver};
use crate::render::svg::{
    SvgDoc, define_blur, define_clip, escape_xml, fill_attrs, icon_markup, inset_shape, num,
    shape_element, stroke_attrs,
};
use crate::render::text::text_markup;
use crate::style::background::{BackgroundFill, LinearGradient};
use crate::style::fade::{FadeMask, MaskAxis};
use crate::style::noise::{BlendMode, NoiseTexture};
use crate::style::{PatternOverlay, StyleSet};

/// Largest raster edge the rasterizer will allocate.
pub const MAX_RASTER_DIM: u32 = 16_384;

/// Rendered card, as SVG markup in logical units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    canvas: Canvas,
    svg: String,
}

impl Surface {
    #[tracing::instrument(skip_all, fields(template = %scene.template))]
    pub fn build(
        scene: &SceneTree,
        styles: &StyleSet,
        assets: &mut AssetResolver<'_>,
    ) -> OgResult<Self> {
        let canvas = scene.canvas;
        let mut doc = SvgDoc::new(canvas);
        let bounds = canvas.rect();

        draw_background(&mut doc, &styles.background, bounds);
        if let Some(noise) = &styles.noise {
            draw_noise(&mut doc, noise, canvas)?;
        }
        if let Some(pattern) = &styles.pattern {
            draw_pattern(&mut doc, pattern, bounds);
        }
        for node in &scene.nodes {
            draw_node(&mut doc, node, assets)?;
        }

        let svg = doc.finish();
        tracing::debug!(bytes = svg.len(), "surface built");
        Ok(Self { canvas, svg })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    /// Parses the document with the given fonts.
    pub fn to_tree(&self, fontdb: Arc<FontDatabase>) -> OgResult<usvg::Tree> {
        let opts = usvg::Options {
            fontdb,
            font_resolver: font_resolver(),
            ..Default::default()
        };
        usvg::Tree::from_str(&self.svg, &opts)
            .map_err(|e| OgError::encode(format!("parse surface markup: {e}")))
    }

    /// Rasterizes into straight-alpha RGBA at `density` device pixels per logical unit.
    #[tracing::instrument(skip_all, fields(density = density.get()))]
    pub fn rasterize(
        &self,
        fontdb: Arc<FontDatabase>,
        density: PixelDensity,
    ) -> OgResult<image::RgbaImage> {
        let tree = self.to_tree(fontdb)?;
        rasterize_tree(&tree, self.canvas, density)
    }
}

pub fn rasterize_tree(
    tree: &usvg::Tree,
    canvas: Canvas,
    density: PixelDensity,
) -> OgResult<image::RgbaImage> {
    let (w, h) = canvas.scaled(density);
    if w == 0 || h == 0 || w > MAX_RASTER_DIM || h > MAX_RASTER_DIM {
        return Err(OgError::encode(format!(
            "raster size out of range: {w}x{h} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| OgError::encode("failed to allocate raster surface"))?;

    let sx = w as f32 / canvas.width as f32;
    let sy = h as f32 / canvas.height as f32;
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| OgError::encode("raster buffer size mismatch"))
}

fn draw_background(doc: &mut SvgDoc, fill: &BackgroundFill, bounds: Rect) {
    let fill = match fill {
        BackgroundFill::Solid { color } => Fill::solid(color, 1.0),
        BackgroundFill::Linear(LinearGradient { direction, stops }) => Fill::Linear {
            direction: *direction,
            stops: stops
                .iter()
                .map(|s| PaintStop {
                    offset: s.offset,
                    paint: Paint::solid(&s.color),
                })
                .collect(),
        },
    };
    let attrs = fill_attrs(doc, &fill, bounds);
    if let Some(el) = shape_element(&Shape::RECT, bounds, &attrs) {
        doc.push(&el);
    }
}

fn blend_style(blend: BlendMode) -> String {
    match blend {
        BlendMode::Normal => String::new(),
        other => format!(r#"style="mix-blend-mode:{}""#, other.css_name()),
    }
}

fn draw_noise(doc: &mut SvgDoc, noise: &NoiseTexture, canvas: Canvas) -> OgResult<()> {
    let id = doc.fresh_id("noise");
    let tile = noise.tile_size.max(1);
    doc.define(&format!(
        r#"<image id="{id}" width="{tile}" height="{tile}" image-rendering="optimizeSpeed" preserveAspectRatio="none" xlink:href="{}"/>"#,
        encode_data_uri("image/png", &noise.tile_png()?)
    ));

    let mut attrs = format!(r#"opacity="{}""#, num(noise.intensity));
    let blend = blend_style(noise.blend);
    if !blend.is_empty() {
        let _ = write!(attrs, " {blend}");
    }
    doc.open_group(&attrs);
    let mut y = 0;
    while y < canvas.height {
        let mut x = 0;
        while x < canvas.width {
            doc.push(&format!(r##"<use xlink:href="#{id}" x="{x}" y="{y}"/>"##));
            x += tile;
        }
        y += tile;
    }
    doc.close_group();
    Ok(())
}

fn define_fade_mask(doc: &mut SvgDoc, mask: &FadeMask, bounds: Rect) -> String {
    let grad = doc.fresh_id("fade");
    let mut stops = String::new();
    for s in mask.stops {
        let _ = write!(
            stops,
            r##"<stop offset="{}" stop-color="#ffffff" stop-opacity="{}"/>"##,
            num(s.offset),
            num(s.alpha)
        );
    }
    let gradient = match mask.axis {
        MaskAxis::Radial => {
            let c = bounds.center();
            format!(
                r#"<radialGradient id="{grad}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">{stops}</radialGradient>"#,
                num(c.x),
                num(c.y),
                num(FadeMask::radial_extent(bounds))
            )
        }
        axis => {
            let (x1, y1, x2, y2) = match axis {
                MaskAxis::ToRight => (bounds.x0, bounds.y0, bounds.x1, bounds.y0),
                MaskAxis::ToLeft => (bounds.x1, bounds.y0, bounds.x0, bounds.y0),
                _ => (bounds.x0, bounds.y0, bounds.x0, bounds.y1),
            };
            format!(
                r#"<linearGradient id="{grad}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">{stops}</linearGradient>"#,
                num(x1),
                num(y1),
                num(x2),
                num(y2)
            )
        }
    };
    doc.define(&gradient);

    let id = doc.fresh_id("mask");
    let area = shape_element(&Shape::RECT, bounds, &format!(r#"fill="url(#{grad})""#))
        .unwrap_or_default();
    doc.define(&format!(
        r#"<mask id="{id}" maskUnits="userSpaceOnUse" x="{}" y="{}" width="{}" height="{}">{area}</mask>"#,
        num(bounds.x0),
        num(bounds.y0),
        num(bounds.width()),
        num(bounds.height())
    ));
    id
}

fn draw_pattern(doc: &mut SvgDoc, overlay: &PatternOverlay, bounds: Rect) {
    let tile = &overlay.tile;
    let id = doc.fresh_id("pattern");
    let cell = num(tile.cell_size);
    doc.define(&format!(
        r#"<pattern id="{id}" patternUnits="userSpaceOnUse" x="0" y="0" width="{cell}" height="{cell}">{}</pattern>"#,
        tile.cell_markup()
    ));

    let mut attrs = format!(r#"fill="url(#{id})""#);
    if tile.opacity < 1.0 {
        let _ = write!(attrs, r#" opacity="{}""#, num(tile.opacity));
    }
    if let Some(mask) = &overlay.mask {
        let mask_id = define_fade_mask(doc, mask, bounds);
        let _ = write!(attrs, r#" mask="url(#{mask_id})""#);
    }
    if let Some(el) = shape_element(&Shape::RECT, bounds, &attrs) {
        doc.push(&el);
    }
}

fn draw_node(doc: &mut SvgDoc, node: &Node, assets: &mut AssetResolver<'_>) -> OgResult<()> {
    match node {
        Node::Text(text) => {
            if let Some(markup) = text_markup(text) {
                doc.push(&markup);
            }
        }
        Node::Decoration(deco) => draw_decoration(doc, deco),
        Node::ImageSlot(slot) => draw_slot(doc, slot, assets)?,
        Node::Group(group) => draw_group(doc, group, assets)?,
    }
    Ok(())
}

fn group_attrs(opacity: f64, clip: Option<&str>, extra: &str) -> String {
    let mut attrs = String::new();
    if opacity < 1.0 {
        let _ = write!(attrs, r#"opacity="{}""#, num(opacity.max(0.0)));
    }
    if let Some(clip) = clip {
        if !attrs.is_empty() {
            attrs.push(' ');
        }
        let _ = write!(attrs, r#"clip-path="url(#{clip})""#);
    }
    if !extra.is_empty() {
        if !attrs.is_empty() {
            attrs.push(' ');
        }
        attrs.push_str(extra);
    }
    attrs
}

/// Border drawn inside the shape's edge, like a CSS border.
fn push_inner_stroke(doc: &mut SvgDoc, shape: &Shape, frame: Rect, stroke: &Stroke) {
    let (inner_shape, inner) = inset_shape(shape, frame, 0.5 * stroke.width);
    let attrs = format!(r#"fill="none" {}"#, stroke_attrs(stroke));
    if let Some(el) = shape_element(&inner_shape, inner, &attrs) {
        doc.push(&el);
    }
}

fn draw_decoration(doc: &mut SvgDoc, deco: &DecorationNode) {
    let style = &deco.style;
    let mut extra = blend_style(style.blend);
    if style.blur > 0.0 {
        let id = define_blur(doc, deco.frame, style.blur);
        if !extra.is_empty() {
            extra.push(' ');
        }
        let _ = write!(extra, r#"filter="url(#{id})""#);
    }
    let attrs = group_attrs(style.opacity, None, &extra);
    let wrapped = !attrs.is_empty();
    if wrapped {
        doc.open_group(&attrs);
    }

    match deco.shape {
        Shape::Icon { icon, rotate_deg } => {
            if let Some(stroke) = &style.stroke {
                doc.push(&icon_markup(icon, rotate_deg, deco.frame, stroke));
            }
        }
        shape => {
            if let Some(fill) = &style.fill {
                let fill = fill_attrs(doc, fill, deco.frame);
                if let Some(el) = shape_element(&shape, deco.frame, &fill) {
                    doc.push(&el);
                }
            }
            if let Some(stroke) = &style.stroke {
                push_inner_stroke(doc, &shape, deco.frame, stroke);
            }
        }
    }

    if wrapped {
        doc.close_group();
    }
}

fn draw_slot(
    doc: &mut SvgDoc,
    slot: &ImageSlotNode,
    assets: &mut AssetResolver<'_>,
) -> OgResult<()> {
    let clip = define_clip(doc, &slot.shape, slot.frame);
    doc.open_group(&group_attrs(slot.opacity, Some(&clip), ""));
    let f = slot.frame;
    match &slot.source {
        SlotSource::Image { href, fit } => {
            let image = assets.resolve(href)?;
            let aspect = match fit {
                ImageFit::Cover => "xMidYMid slice",
                ImageFit::Contain => "xMidYMid meet",
            };
            doc.push(&format!(
                r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="{aspect}" xlink:href="{}"/>"#,
                num(f.x0),
                num(f.y0),
                num(f.width()),
                num(f.height()),
                escape_xml(&image.data_uri)
            ));
        }
        SlotSource::Placeholder { fill, mark } => {
            let attrs = fill_attrs(doc, fill, f);
            if let Some(el) = shape_element(&Shape::RECT, f, &attrs) {
                doc.push(&el);
            }
            if let Some(mark) = mark {
                draw_mark(doc, mark, f);
            }
        }
    }
    doc.close_group();
    if let Some(stroke) = &slot.stroke {
        push_inner_stroke(doc, &slot.shape, f, stroke);
    }
    Ok(())
}

fn draw_mark(doc: &mut SvgDoc, mark: &PlaceholderMark, frame: Rect) {
    match mark {
        PlaceholderMark::Icon { icon, size, paint } => {
            let c = frame.center();
            let r = 0.5 * size;
            let box_ = Rect::new(c.x - r, c.y - r, c.x + r, c.y + r);
            let stroke = Stroke {
                paint: paint.clone(),
                width: 2.0,
            };
            doc.push(&icon_markup(*icon, 0.0, box_, &stroke));
        }
        PlaceholderMark::Label {
            text,
            size,
            weight,
            paint,
        } => {
            let mut style = TextStyle::new(FontFamily::Sans, &paint.color);
            style.weight = *weight;
            style.opacity = paint.opacity;
            style.align = TextAlign::Center;
            style.wrap = false;
            style.line_height = 1.5;
            let h = size * style.line_height;
            let y = frame.center().y - 0.5 * h;
            let node = TextNode {
                role: TextRole::Label,
                content: text.clone(),
                size: TypeScale::fixed_px(*size),
                frame: Rect::new(frame.x0, y, frame.x1, y + h),
                style,
                spans: Vec::new(),
            };
            if let Some(markup) = text_markup(&node) {
                doc.push(&markup);
            }
        }
    }
}

fn draw_group(doc: &mut SvgDoc, group: &GroupNode, assets: &mut AssetResolver<'_>) -> OgResult<()> {
    let clip = group
        .clip
        .as_ref()
        .map(|shape| define_clip(doc, shape, group.frame));
    let attrs = group_attrs(group.opacity, clip.as_deref(), "");
    doc.open_group(&attrs);
    for child in &group.children {
        draw_node(doc, child, assets)?;
    }
    doc.close_group();
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
