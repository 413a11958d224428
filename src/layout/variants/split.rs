use crate::foundation::core::{Canvas, Rect, rect_xywh};
use crate::layout::flow::inset;
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, IconKind, ImageFit, Node, Paint,
    PlaceholderMark, Shape, SlotRole, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, DESC_REM, TITLE_REM, TextBlock, deco, fill_rect, fit_heights, group, slot,
};
use crate::style::background::{GradientDirection, Side};
use crate::style::noise::BlendMode;

const PAD: f64 = 64.0;
const LOGO: f64 = 40.0;

/// Text column on the left half, asset image with a darkening overlay on the right half.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let canvas = Canvas::CARD.rect();
    let half = canvas.width() * 0.5;
    let left = inset(Rect::new(0.0, 0.0, half, canvas.height()), PAD);
    let mut text_col = Vec::new();

    // Header row.
    let mut name_style = ctx.style();
    name_style.weight = 700;
    name_style.uppercase = true;
    name_style.letter_spacing = 0.05;
    name_style.opacity = 0.6;
    name_style.line_height = 28.0 / 20.0;
    let name = TextBlock::line(
        TextRole::SiteName,
        &ctx.cfg.site_name,
        TypeScale::fixed_px(20.0),
        name_style,
    );
    let header_h = if ctx.cfg.show_logo { LOGO } else { 28.0 };
    let mut header = Vec::new();
    let mut name_x = left.x0;
    if ctx.cfg.show_logo {
        let logo = slot(
            ctx,
            SlotRole::Logo,
            rect_xywh(left.x0, left.y0, LOGO, LOGO),
            Shape::Ellipse,
            ImageFit::Cover,
            || (Fill::solid(ctx.text_color(), 0.2), None),
        );
        header.push(logo);
        name_x += LOGO + 12.0;
    }
    let name_w = name.width.min(left.x1 - name_x).max(0.0);
    header.push(name.in_frame(rect_xywh(
        name_x,
        left.y0 + (header_h - 28.0) * 0.5,
        name_w,
        28.0,
    )));
    text_col.push(group(
        GroupRole::Header,
        rect_xywh(left.x0, left.y0, left.width(), header_h),
        None,
        header,
    ));

    // Call to action pinned to the bottom.
    let mut cta_style = ctx.style_in(ctx.cfg.font, ctx.accent());
    cta_style.weight = 500;
    cta_style.line_height = 28.0 / 20.0;
    let cta = TextBlock::line(
        TextRole::Label,
        "Read more →",
        TypeScale::fixed_px(20.0),
        cta_style,
    );
    let cta_y = left.y1 - 28.0;

    let mut title_style = ctx.style();
    title_style.weight = 700;
    title_style.line_height = 1.25;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(TITLE_REM),
        title_style,
        left.width(),
    );
    let mut desc_style = ctx.style();
    desc_style.opacity = 0.8;
    desc_style.line_height = 1.625;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(DESC_REM),
        desc_style,
        left.width(),
    );
    let top = left.y0 + header_h + 32.0;
    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, 24.0 + 32.0, (cta_y - top).max(0.0));
    let title_frame = rect_xywh(left.x0, top, left.width(), heights[0]);
    let desc_frame = rect_xywh(left.x0, title_frame.y1 + 24.0, left.width(), heights[1]);
    text_col.push(title.in_frame(title_frame));
    text_col.push(desc.in_frame(desc_frame));
    let cta_w = cta.width.min(left.width());
    text_col.push(cta.in_frame(rect_xywh(left.x0, cta_y, cta_w, 28.0)));
    let text_frame = Rect::new(0.0, 0.0, half, canvas.height());

    // Media half.
    let media = Rect::new(half, 0.0, canvas.x1, canvas.y1);
    let asset = slot(ctx, SlotRole::Asset, media, Shape::RECT, ImageFit::Cover, || {
        (
            Fill::Solid(Paint::white(0.05)),
            Some(PlaceholderMark::Icon {
                icon: IconKind::Image,
                size: 120.0,
                paint: Paint::new(ctx.text_color(), 0.2),
            }),
        )
    });
    let mut overlay = DecorationStyle::filled(Fill::linear(
        GradientDirection::Side { side: Side::Right },
        Paint::black(0.4),
        Paint::black(0.0),
    ));
    overlay.blend = BlendMode::Multiply;

    vec![
        group(
            GroupRole::Media,
            media,
            Some(Shape::RECT),
            vec![
                fill_rect(DecorationKind::Backdrop, media, "#000000", 0.1),
                asset,
                deco(DecorationKind::Overlay, media, Shape::RECT, overlay),
            ],
        ),
        group(GroupRole::Body, text_frame, None, text_col),
    ]
}
