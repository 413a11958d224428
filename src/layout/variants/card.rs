use crate::foundation::core::{Canvas, Rect, rect_xywh};
use crate::layout::flow::inset;
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, ImageFit, Node, Paint, Shape, SlotRole,
    Stroke, TextAlign, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, DESC_REM, TITLE_REM, TextBlock, deco, fit_heights, group, outline_chip,
    outline_chip_width, slot,
};
use crate::style::background::{GradientDirection, Side};

const MARGIN: f64 = 64.0;
const PAD: f64 = 64.0;
const BLOB: f64 = 256.0;

/// Frosted panel with soft corner blobs, header row, headline block and author footer.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let panel = inset(Canvas::CARD.rect(), MARGIN);
    let inner = inset(panel, PAD);
    let mut children = vec![deco(
        DecorationKind::Panel,
        panel,
        Shape::rounded(24.0),
        DecorationStyle::filled(Fill::Solid(Paint::white(0.1))).with_stroke(Stroke {
            paint: Paint::white(0.2),
            width: 1.0,
        }),
    )];
    for (frame, paint) in [
        (
            rect_xywh(panel.x1 + 80.0 - BLOB, panel.y0 - 80.0, BLOB, BLOB),
            Paint::white(0.1),
        ),
        (
            rect_xywh(panel.x0 - 80.0, panel.y1 + 80.0 - BLOB, BLOB, BLOB),
            Paint::black(0.1),
        ),
    ] {
        let mut style = DecorationStyle::filled(Fill::Solid(paint));
        style.blur = 64.0;
        children.push(deco(DecorationKind::Blob, frame, Shape::Ellipse, style));
    }

    // Header: logo and site name on the left, chip on the right.
    let mut header = Vec::new();
    let header_h = if ctx.cfg.show_logo { 48.0 } else { 32.0 };
    let chip_w = outline_chip_width(ctx, "New Post");
    if ctx.cfg.show_logo {
        header.push(slot(
            ctx,
            SlotRole::Logo,
            rect_xywh(inner.x0, inner.y0, 48.0, 48.0),
            Shape::rounded(8.0),
            ImageFit::Cover,
            || (Fill::Solid(Paint::white(0.2)), None),
        ));
        let mut name_style = ctx.style();
        name_style.weight = 700;
        name_style.line_height = 28.0 / 20.0;
        let name = TextBlock::line(
            TextRole::SiteName,
            &ctx.cfg.site_name,
            TypeScale::fixed_px(20.0),
            name_style,
        );
        let name_w = name.width.min(inner.width() - 60.0 - chip_w - 16.0).max(0.0);
        header.push(name.in_frame(rect_xywh(inner.x0 + 60.0, inner.y0 + 10.0, name_w, 28.0)));
        let origin = (inner.x1 - chip_w, inner.y0);
        header.push(outline_chip(ctx, TextRole::Label, "New Post", origin, chip_w).0);
    } else {
        let origin = (inner.x0, inner.y0);
        header.push(outline_chip(ctx, TextRole::Label, "New Post", origin, chip_w).0);
    }
    children.push(group(
        GroupRole::Header,
        rect_xywh(inner.x0, inner.y0, inner.width(), header_h),
        None,
        header,
    ));

    // Footer: initial avatar and author name.
    let footer_y = inner.y1 - 40.0;
    children.push(author_footer(ctx, rect_xywh(inner.x0, footer_y, inner.width(), 40.0)));

    // Headline block, centered in the space between header and footer.
    let mut title_style = ctx.style();
    title_style.weight = 900;
    title_style.line_height = 1.25;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(TITLE_REM),
        title_style,
        inner.width(),
    );
    let mut desc_style = ctx.style();
    desc_style.opacity = 0.8;
    desc_style.line_height = 1.625;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(DESC_REM),
        desc_style,
        inner.width().min(672.0),
    );
    let top = inner.y0 + header_h;
    let bottom = footer_y - 32.0;
    let avail = (bottom - top).max(0.0);
    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, 24.0, avail);
    let block_h = heights[0] + 24.0 + heights[1];
    let y = top + ((avail - block_h) * 0.5).max(0.0);
    let title_frame = rect_xywh(inner.x0, y, title.width, heights[0]);
    let desc_frame = rect_xywh(inner.x0, title_frame.y1 + 24.0, desc.width, heights[1]);
    children.push(group(
        GroupRole::Body,
        Rect::new(inner.x0, y, inner.x1, y + block_h),
        None,
        vec![title.in_frame(title_frame), desc.in_frame(desc_frame)],
    ));

    vec![group(
        GroupRole::Panel,
        panel,
        Some(Shape::rounded(24.0)),
        children,
    )]
}

fn author_footer(ctx: &Ctx<'_>, row: Rect) -> Node {
    let avatar = rect_xywh(row.x0, row.y0, 40.0, 40.0);
    let mut nodes = vec![deco(
        DecorationKind::Badge,
        avatar,
        Shape::Ellipse,
        DecorationStyle::filled(Fill::linear(
            GradientDirection::Corner {
                vertical: Side::Bottom,
                horizontal: Side::Right,
            },
            Paint::white(0.3),
            Paint::white(0.1),
        )),
    )];
    let initial: String = ctx
        .cfg
        .author
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();
    if !initial.is_empty() {
        let mut style = ctx.style();
        style.weight = 700;
        style.line_height = 28.0 / 18.0;
        let letter = TextBlock::line(TextRole::Label, initial, TypeScale::fixed_px(18.0), style)
            .align(TextAlign::Center);
        nodes.push(letter.in_frame(rect_xywh(avatar.x0, avatar.y0 + 6.0, 40.0, 28.0)));
    }
    let mut style = ctx.style();
    style.weight = 500;
    style.opacity = 0.9;
    style.line_height = 28.0 / 18.0;
    let name = TextBlock::line(
        TextRole::Author,
        &ctx.cfg.author,
        TypeScale::fixed_px(18.0),
        style,
    );
    let name_w = name.width.min(row.width() - 52.0).max(0.0);
    nodes.push(name.in_frame(rect_xywh(row.x0 + 52.0, row.y0 + 6.0, name_w, 28.0)));
    group(GroupRole::Footer, row, None, nodes)
}
