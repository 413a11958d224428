use crate::foundation::core::{Canvas, rect_xywh};
use crate::layout::flow::{Align, Item, Justify, inset, vstack};
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, IconKind, ImageFit, Node, Paint,
    PlaceholderMark, Shape, SlotRole, Stroke, TextAlign, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, DESC_REM, TITLE_REM, TextBlock, deco, faded_group, fill_rect, fit_heights, group, slot,
};

const PAD: f64 = 80.0;
const BADGE: f64 = 96.0;
const LOGO: f64 = 64.0;

/// Centered badge, title and subtitle with the site name pinned near the bottom edge.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let canvas = Canvas::CARD.rect();
    let region = inset(canvas, PAD);
    let mut nodes = Vec::new();

    let mut title_style = ctx.style();
    title_style.weight = 800;
    title_style.line_height = 1.25;
    title_style.letter_spacing = -0.025;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(TITLE_REM),
        title_style,
        region.width(),
    )
    .align(TextAlign::Center);

    let mut desc_style = ctx.style();
    desc_style.weight = 300;
    desc_style.opacity = 0.9;
    desc_style.line_height = 1.625;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(DESC_REM),
        desc_style,
        region.width().min(768.0),
    )
    .align(TextAlign::Center);

    let badge_h = if ctx.cfg.show_logo { BADGE + 32.0 } else { 0.0 };
    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, badge_h + 24.0, region.height());

    let mut items = Vec::new();
    if ctx.cfg.show_logo {
        items.push(Item::new(BADGE, BADGE).gap(32.0));
    }
    items.push(Item::new(title.width, heights[0]).gap(24.0));
    items.push(Item::new(desc.width, heights[1]));
    let mut frames = vstack(region, &items, Justify::Center, Align::Center).into_iter();

    let mut body = Vec::new();
    if ctx.cfg.show_logo
        && let Some(badge) = frames.next()
    {
        body.push(deco(
            DecorationKind::Badge,
            badge,
            Shape::Ellipse,
            DecorationStyle::filled(Fill::Solid(Paint::white(0.1))).with_stroke(Stroke {
                paint: Paint::white(0.2),
                width: 1.0,
            }),
        ));
        let logo_frame = rect_xywh(badge.x0 + 16.0, badge.y0 + 16.0, LOGO, LOGO);
        body.push(slot(
            ctx,
            SlotRole::Logo,
            logo_frame,
            Shape::Ellipse,
            ImageFit::Contain,
            || {
                (
                    Fill::Solid(Paint::white(0.2)),
                    Some(PlaceholderMark::Icon {
                        icon: IconKind::Layout,
                        size: 32.0,
                        paint: Paint::new(ctx.text_color(), 0.8),
                    }),
                )
            },
        ));
    }
    if let Some(f) = frames.next() {
        body.push(title.in_frame(f));
    }
    if let Some(f) = frames.next() {
        body.push(desc.in_frame(f));
    }
    nodes.push(group(GroupRole::Body, region, None, body));

    let mut name_style = ctx.style();
    name_style.weight = 700;
    name_style.uppercase = true;
    name_style.letter_spacing = 0.025;
    name_style.line_height = 28.0 / 20.0;
    let name = TextBlock::line(
        TextRole::SiteName,
        &ctx.cfg.site_name,
        TypeScale::fixed_px(20.0),
        name_style,
    );
    let w = name.width.min(canvas.width() - 2.0 * PAD);
    let bottom = canvas.y1 - 48.0;
    let top = bottom - 34.0;
    let x = canvas.center().x - w * 0.5;
    let underline = fill_rect(
        DecorationKind::Underline,
        rect_xywh(x, bottom - 2.0, w, 2.0),
        ctx.text_color(),
        1.0,
    );
    nodes.push(faded_group(
        GroupRole::Footer,
        rect_xywh(x, top, w, 34.0),
        0.7,
        vec![name.in_frame(rect_xywh(x, top, w, 28.0)), underline],
    ));
    nodes
}
