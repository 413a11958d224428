//! One module per template. Each exposes `pub(crate) fn resolve(&Ctx) -> Vec<Node>`.

pub(crate) mod browser;
pub(crate) mod card;
pub(crate) mod code;
pub(crate) mod graph;
pub(crate) mod hero;
pub(crate) mod magazine;
pub(crate) mod minimal;
pub(crate) mod quote;
pub(crate) mod split;
pub(crate) mod vertical;

use crate::config::model::{CardConfig, FontFamily};
use crate::foundation::core::{Rect, rect_xywh};
use crate::layout::metrics;
use crate::layout::scene::{
    DecorationKind, DecorationNode, DecorationStyle, Fill, GroupNode, GroupRole, ImageFit,
    ImageSlotNode, Node, Paint, PlaceholderMark, Shape, SlotRole, SlotSource, Stroke, TextAlign,
    TextNode, TextRole, TextStyle, TypeScale,
};

/// Base title size shared by most variants, in rem.
pub(crate) const TITLE_REM: f64 = 4.5;
/// Base description size shared by most variants, in rem.
pub(crate) const DESC_REM: f64 = 1.875;

/// Opacity of a two-digit hex alpha suffix such as `60` in `#ffffff60`.
pub(crate) fn hex_alpha(suffix: u8) -> f64 {
    f64::from(suffix) / 255.0
}

/// Per-resolution inputs shared by every variant.
pub(crate) struct Ctx<'a> {
    pub cfg: &'a CardConfig,
}

impl<'a> Ctx<'a> {
    pub fn new(cfg: &'a CardConfig) -> Self {
        Self { cfg }
    }

    fn font_multiplier(&self) -> f64 {
        let fs = self.cfg.font_size;
        if fs.is_finite() && fs > 0.0 { fs } else { 1.0 }
    }

    /// Base size scaled by the configured font-size multiplier.
    pub fn scaled(&self, base_rem: f64) -> TypeScale {
        TypeScale::scaled(base_rem, self.font_multiplier())
    }

    /// Body style in the configured family and text color.
    pub fn style(&self) -> TextStyle {
        TextStyle::new(self.cfg.font, &self.cfg.text_color)
    }

    pub fn style_in(&self, family: FontFamily, color: &str) -> TextStyle {
        TextStyle::new(family, color)
    }

    pub fn text_color(&self) -> &str {
        &self.cfg.text_color
    }

    pub fn accent(&self) -> &str {
        &self.cfg.accent_color
    }

    pub fn has_image(&self) -> bool {
        self.cfg.image_source().is_some()
    }
}

/// Measured text block, ready to be placed.
pub(crate) struct TextBlock {
    pub role: TextRole,
    pub content: String,
    pub size: TypeScale,
    pub style: TextStyle,
    pub width: f64,
    pub height: f64,
}

impl TextBlock {
    /// Wrapping block no wider than `max_width`.
    pub fn wrapped(
        role: TextRole,
        content: impl Into<String>,
        size: TypeScale,
        style: TextStyle,
        max_width: f64,
    ) -> Self {
        let content = content.into();
        let height = metrics::block_height(&content, size.px(), max_width, &style);
        Self {
            role,
            content,
            size,
            style,
            width: max_width,
            height,
        }
    }

    /// Single-line block sized to its content.
    pub fn line(
        role: TextRole,
        content: impl Into<String>,
        size: TypeScale,
        mut style: TextStyle,
    ) -> Self {
        let content = content.into();
        style.wrap = false;
        let width = metrics::measure(&content, size.px(), &style).ceil();
        let height = size.px() * style.line_height;
        Self {
            role,
            content,
            size,
            style,
            width,
            height,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.style.align = align;
        self
    }

    pub fn at(self, x: f64, y: f64) -> Node {
        let frame = rect_xywh(x, y, self.width, self.height);
        self.in_frame(frame)
    }

    pub fn in_frame(self, frame: Rect) -> Node {
        Node::Text(TextNode {
            role: self.role,
            content: self.content,
            size: self.size,
            frame,
            style: self.style,
            spans: Vec::new(),
        })
    }
}

pub(crate) fn deco(
    kind: DecorationKind,
    frame: Rect,
    shape: Shape,
    style: DecorationStyle,
) -> Node {
    Node::Decoration(DecorationNode {
        kind,
        frame,
        shape,
        style,
    })
}

pub(crate) fn fill_rect(kind: DecorationKind, frame: Rect, color: &str, opacity: f64) -> Node {
    deco(
        kind,
        frame,
        Shape::RECT,
        DecorationStyle::filled(Fill::solid(color, opacity)),
    )
}

pub(crate) fn icon(frame: Rect, icon: crate::layout::scene::IconKind, paint: Paint) -> Node {
    deco(
        DecorationKind::Icon,
        frame,
        Shape::icon(icon),
        DecorationStyle::outlined(Stroke { paint, width: 2.0 }),
    )
}

pub(crate) fn group(
    role: GroupRole,
    frame: Rect,
    clip: Option<Shape>,
    children: Vec<Node>,
) -> Node {
    Node::Group(GroupNode {
        role,
        frame,
        clip,
        opacity: 1.0,
        children,
    })
}

pub(crate) fn faded_group(role: GroupRole, frame: Rect, opacity: f64, children: Vec<Node>) -> Node {
    Node::Group(GroupNode {
        role,
        frame,
        clip: None,
        opacity,
        children,
    })
}

/// Image slot bound to the configured asset, or `placeholder` when none is set.
pub(crate) fn slot(
    ctx: &Ctx<'_>,
    role: SlotRole,
    frame: Rect,
    shape: Shape,
    fit: ImageFit,
    placeholder: impl FnOnce() -> (Fill, Option<PlaceholderMark>),
) -> Node {
    let source = match ctx.cfg.image_source() {
        Some(href) => SlotSource::Image {
            href: href.to_owned(),
            fit,
        },
        None => {
            let (fill, mark) = placeholder();
            SlotSource::Placeholder { fill, mark }
        }
    };
    Node::ImageSlot(ImageSlotNode {
        role,
        frame,
        shape,
        source,
        stroke: None,
        opacity: 1.0,
    })
}

/// Adds a border to an image slot node.
pub(crate) fn with_stroke(node: Node, stroke: Stroke) -> Node {
    match node {
        Node::ImageSlot(mut s) => {
            s.stroke = Some(stroke);
            Node::ImageSlot(s)
        }
        other => other,
    }
}

/// Pill-shaped outline chip with uppercase caption, at most `max_width` wide.
pub(crate) fn outline_chip(
    ctx: &Ctx<'_>,
    role: TextRole,
    caption: &str,
    origin: (f64, f64),
    max_width: f64,
) -> (Node, f64) {
    let (x, y) = origin;
    let mut style = ctx.style();
    style.weight = 500;
    style.uppercase = true;
    style.letter_spacing = 0.025;
    style.line_height = 20.0 / 14.0;
    let label = TextBlock::line(role, caption, TypeScale::fixed_px(14.0), style);
    let label_w = label.width.min(max_width - 32.0).max(0.0);
    let (w, h) = (label_w + 32.0, label.height + 12.0);
    let frame = rect_xywh(x, y, w, h);
    let border = deco(
        DecorationKind::Chip,
        frame,
        Shape::rounded(h * 0.5),
        DecorationStyle::outlined(Stroke {
            paint: Paint::new(ctx.text_color(), hex_alpha(0x60)),
            width: 1.0,
        }),
    );
    let text = label.in_frame(rect_xywh(x + 16.0, y + 6.0, label_w, h - 12.0));
    (group(GroupRole::Badge, frame, None, vec![border, text]), w)
}

/// Width of a fixed-caption outline chip without building it.
pub(crate) fn outline_chip_width(ctx: &Ctx<'_>, caption: &str) -> f64 {
    outline_chip(ctx, TextRole::Label, caption, (0.0, 0.0), f64::INFINITY).1
}

/// Shrinks heights, last-listed first, until their sum fits `avail`.
///
/// Content is never dropped; the renderer clips and ellipsizes whatever no longer fits.
pub(crate) fn fit_heights(heights: &mut [f64], fixed: f64, avail: f64) {
    let mut overflow = heights.iter().sum::<f64>() + fixed - avail;
    for h in heights.iter_mut().rev() {
        if overflow <= 0.0 {
            break;
        }
        let cut = overflow.min(*h);
        *h -= cut;
        overflow -= cut;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/layout/variants.rs"]
mod tests;
