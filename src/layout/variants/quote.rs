use crate::config::model::FontFamily;
use crate::foundation::core::{Canvas, rect_xywh};
use crate::layout::flow::{Align, Item, Justify, inset, vstack};
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, IconKind, ImageFit, Node, Paint, Shape,
    SlotRole, Stroke, TextAlign, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, DESC_REM, TextBlock, deco, fill_rect, fit_heights, group, icon, slot, with_stroke,
};

const PAD: f64 = 80.0;
const TITLE_REM: f64 = 5.0;
const MARK: f64 = 120.0;

/// Pull-quote layout: oversized quotation marks, centered italic quote, divider, byline.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let canvas = Canvas::CARD.rect();
    let region = inset(canvas, PAD);
    let col_w = region.width().min(896.0);
    let faint = Paint::new(ctx.text_color(), 0.1);

    let open = icon(rect_xywh(64.0, 64.0, MARK, MARK), IconKind::Quote, faint.clone());
    let close = deco(
        DecorationKind::Icon,
        rect_xywh(canvas.x1 - 64.0 - MARK, canvas.y1 - 64.0 - MARK, MARK, MARK),
        Shape::Icon {
            icon: IconKind::Quote,
            rotate_deg: 180.0,
        },
        DecorationStyle::outlined(Stroke {
            paint: faint,
            width: 2.0,
        }),
    );

    let mut title_style = ctx.style_in(FontFamily::Serif, ctx.text_color());
    title_style.italic = true;
    title_style.line_height = 1.25;
    let title = TextBlock::wrapped(
        TextRole::Title,
        format!("\"{}\"", ctx.cfg.title),
        ctx.scaled(TITLE_REM),
        title_style,
        col_w,
    )
    .align(TextAlign::Center);

    let mut desc_style = ctx.style_in(FontFamily::Sans, ctx.text_color());
    desc_style.weight = 500;
    desc_style.uppercase = true;
    desc_style.letter_spacing = 0.1;
    desc_style.opacity = 0.8;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(DESC_REM),
        desc_style,
        col_w,
    )
    .align(TextAlign::Center);

    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, 32.0 + 4.0 + 32.0, region.height());
    let frames = vstack(
        region,
        &[
            Item::new(col_w, heights[0]).gap(32.0),
            Item::new(128.0, 4.0).gap(32.0),
            Item::new(col_w, heights[1]),
        ],
        Justify::Center,
        Align::Center,
    );
    let body = group(
        GroupRole::Body,
        region,
        None,
        vec![
            title.in_frame(frames[0]),
            fill_rect(DecorationKind::Divider, frames[1], ctx.accent(), 1.0),
            desc.in_frame(frames[2]),
        ],
    );

    // Byline centered near the bottom edge.
    let mut by_style = ctx.style();
    by_style.weight = 700;
    by_style.opacity = 0.6;
    let byline = TextBlock::line(
        TextRole::Author,
        format!("{} • {}", ctx.cfg.author, ctx.cfg.site_name),
        TypeScale::fixed_px(16.0),
        by_style,
    );
    let text_w = byline.width.min(region.width() - 52.0);
    let row_w = 40.0 + 12.0 + text_w;
    let y = canvas.y1 - 48.0 - 40.0;
    let x = canvas.center().x - row_w * 0.5;
    let avatar = with_stroke(
        slot(
            ctx,
            SlotRole::Avatar,
            rect_xywh(x, y, 40.0, 40.0),
            Shape::Ellipse,
            ImageFit::Cover,
            || (Fill::Solid(Paint::new(ctx.text_color(), 0.2)), None),
        ),
        Stroke {
            paint: Paint::solid("#ffffff"),
            width: 2.0,
        },
    );
    let footer = group(
        GroupRole::Footer,
        rect_xywh(x, y, row_w, 40.0),
        None,
        vec![avatar, byline.in_frame(rect_xywh(x + 52.0, y + 8.0, text_w, 24.0))],
    );

    vec![open, close, body, footer]
}
