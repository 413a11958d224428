use crate::foundation::core::{Canvas, Rect, rect_xywh};
use crate::layout::flow::{Align, Item, Justify, inset, vstack};
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, ImageFit, Node, Paint, PlaceholderMark,
    Shape, SlotRole, Stroke, TextAlign, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, TITLE_REM, TextBlock, deco, faded_group, fill_rect, fit_heights, group, slot,
};
use crate::style::background::{GradientDirection, Side};

const MARGIN: f64 = 48.0;
const DOT: f64 = 24.0;
const CAPTION_REM: f64 = 1.5;

/// Title block stacked over a rounded image block that carries the description as a caption.
///
/// Both halves share the height left after the bottom margin, like two equal flex items.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let canvas = Canvas::CARD.rect();
    let half_h = (canvas.height() - MARGIN) * 0.5;
    let top = inset(Rect::new(0.0, 0.0, canvas.x1, half_h), MARGIN);
    let media = Rect::new(MARGIN, half_h, canvas.x1 - MARGIN, canvas.y1 - MARGIN);

    // Title half.
    let mut name_style = ctx.style();
    name_style.weight = 700;
    name_style.uppercase = true;
    name_style.letter_spacing = 0.1;
    name_style.line_height = 28.0 / 18.0;
    let name = TextBlock::line(
        TextRole::SiteName,
        &ctx.cfg.site_name,
        TypeScale::fixed_px(18.0),
        name_style,
    );
    let dot_w = if ctx.cfg.show_logo { DOT + 8.0 } else { 0.0 };
    let name_w = name.width.min(top.width() - dot_w);
    let row_w = dot_w + name_w;

    let mut title_style = ctx.style();
    title_style.weight = 900;
    title_style.line_height = 1.25;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(TITLE_REM),
        title_style,
        top.width(),
    )
    .align(TextAlign::Center);
    let mut heights = [title.height];
    fit_heights(&mut heights, 28.0 + 16.0, top.height());
    let frames = vstack(
        top,
        &[Item::new(row_w, 28.0).gap(16.0), Item::new(top.width(), heights[0])],
        Justify::Center,
        Align::Center,
    );

    let mut row = Vec::new();
    let row_frame = frames[0];
    if ctx.cfg.show_logo {
        let dot = slot(
            ctx,
            SlotRole::Logo,
            rect_xywh(row_frame.x0, row_frame.y0 + 2.0, DOT, DOT),
            Shape::Ellipse,
            ImageFit::Cover,
            || (Fill::solid(ctx.text_color(), 0.5), None),
        );
        row.push(dot);
    }
    row.push(name.in_frame(rect_xywh(row_frame.x0 + dot_w, row_frame.y0, name_w, 28.0)));
    let header = faded_group(GroupRole::Header, row_frame, 0.7, row);
    let title = title.in_frame(frames[1]);

    // Media half.
    let placeholder = || {
        (
            Fill::Solid(Paint::white(0.1)),
            Some(PlaceholderMark::Label {
                text: "Image Preview".to_owned(),
                size: 24.0,
                weight: 700,
                paint: Paint::new(ctx.text_color(), 0.4),
            }),
        )
    };
    let asset = slot(ctx, SlotRole::Asset, media, Shape::RECT, ImageFit::Cover, placeholder);

    let mut cap_style = ctx.style_in(ctx.cfg.font, "#ffffff");
    cap_style.weight = 500;
    cap_style.line_height = 32.0 / 24.0;
    cap_style.align = TextAlign::Center;
    let caption = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(CAPTION_REM),
        cap_style,
        media.width() - 64.0,
    );
    let cap_text_h = caption.height.min(media.height() - 64.0).max(0.0);
    let cap_h = cap_text_h + 64.0;
    let cap_frame = Rect::new(media.x0, media.y1 - cap_h, media.x1, media.y1);
    let scrim = deco(
        DecorationKind::Overlay,
        cap_frame,
        Shape::RECT,
        DecorationStyle::filled(Fill::linear(
            GradientDirection::Side { side: Side::Top },
            Paint::black(0.8),
            Paint::black(0.0),
        )),
    );
    let caption = caption.in_frame(rect_xywh(
        media.x0 + 32.0,
        cap_frame.y0 + 32.0,
        media.width() - 64.0,
        cap_text_h,
    ));
    let border = deco(
        DecorationKind::Panel,
        media,
        Shape::rounded_top(24.0),
        DecorationStyle::outlined(Stroke {
            paint: Paint::white(0.2),
            width: 1.0,
        }),
    );

    vec![
        group(
            GroupRole::Body,
            Rect::new(0.0, 0.0, canvas.x1, half_h),
            None,
            vec![header, title],
        ),
        group(
            GroupRole::Media,
            media,
            Some(Shape::rounded_top(24.0)),
            vec![
                fill_rect(DecorationKind::Backdrop, media, "#000000", 0.2),
                asset,
                scrim,
                caption,
                border,
            ],
        ),
    ]
}
