use crate::foundation::core::{Canvas, rect_xywh};
use crate::layout::flow::inset;
use crate::layout::scene::{
    DecorationKind, Fill, GroupRole, ImageFit, Node, Shape, SlotRole, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, DESC_REM, TITLE_REM, TextBlock, faded_group, fill_rect, fit_heights, group, outline_chip,
    outline_chip_width, slot,
};

const PAD: f64 = 64.0;
const LOGO: f64 = 40.0;
const CHIP_H: f64 = 32.0;
const CHIP_GAP: f64 = 16.0;

/// Logo row on top, centered title/accent/description block, chip footer pinned to the bottom.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let region = inset(Canvas::CARD.rect(), PAD);
    let mut nodes = Vec::new();

    let mut top = region.y0;
    if ctx.cfg.show_logo {
        let logo = slot(
            ctx,
            SlotRole::Logo,
            rect_xywh(region.x0, region.y0, LOGO, LOGO),
            Shape::RECT,
            ImageFit::Contain,
            || (Fill::solid(ctx.text_color(), 0.2), None),
        );
        let logo = match logo {
            Node::ImageSlot(mut s) if s.is_placeholder() => {
                s.shape = Shape::Ellipse;
                Node::ImageSlot(s)
            }
            other => other,
        };
        let mut style = ctx.style();
        style.weight = 700;
        style.letter_spacing = -0.025;
        style.line_height = 32.0 / 24.0;
        let name = TextBlock::line(
            TextRole::SiteName,
            &ctx.cfg.site_name,
            TypeScale::fixed_px(24.0),
            style,
        );
        let name_w = name.width.min(region.width() - LOGO - 12.0);
        let name = name.in_frame(rect_xywh(region.x0 + LOGO + 12.0, region.y0 + 4.0, name_w, 32.0));
        nodes.push(group(
            GroupRole::Header,
            rect_xywh(region.x0, region.y0, region.width(), LOGO),
            None,
            vec![logo, name],
        ));
        top += LOGO;
    }

    let footer_y = region.y1 - CHIP_H;
    let read_w = outline_chip_width(ctx, "Read now");
    let (read_chip, _) = outline_chip(
        ctx,
        TextRole::Label,
        "Read now",
        (region.x1 - read_w, footer_y),
        read_w,
    );
    let (author_chip, _) = outline_chip(
        ctx,
        TextRole::Author,
        &ctx.cfg.author,
        (region.x0, footer_y),
        region.width() - read_w - CHIP_GAP,
    );

    let mut title_style = ctx.style();
    title_style.weight = 700;
    title_style.letter_spacing = -0.025;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(TITLE_REM),
        title_style,
        region.width(),
    );
    let mut desc_style = ctx.style();
    desc_style.weight = 300;
    desc_style.opacity = 0.8;
    desc_style.line_height = 1.625;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(DESC_REM),
        desc_style,
        region.width().min(768.0),
    );

    let fixed = 32.0 + 8.0 + 32.0;
    let avail = (footer_y - top).max(0.0);
    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, fixed, avail);
    let block_h = heights[0] + heights[1] + fixed;
    let mut y = top + ((avail - block_h) * 0.5).max(0.0);

    let title_frame = rect_xywh(region.x0, y, title.width, heights[0]);
    y += heights[0] + 32.0;
    let bar = fill_rect(
        DecorationKind::AccentBar,
        rect_xywh(region.x0, y, 96.0, 8.0),
        ctx.accent(),
        1.0,
    );
    y += 8.0 + 32.0;
    let desc_frame = rect_xywh(region.x0, y, desc.width, heights[1]);

    nodes.push(group(
        GroupRole::Body,
        rect_xywh(region.x0, title_frame.y0, region.width(), block_h),
        None,
        vec![title.in_frame(title_frame), bar, desc.in_frame(desc_frame)],
    ));

    nodes.push(faded_group(
        GroupRole::Footer,
        rect_xywh(region.x0, footer_y, region.width(), CHIP_H),
        0.8,
        vec![author_chip, read_chip],
    ));
    nodes
}
