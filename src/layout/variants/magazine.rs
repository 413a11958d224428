use crate::config::model::FontFamily;
use crate::foundation::core::{Canvas, rect_xywh};
use crate::layout::flow::inset;
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, ImageFit, Node, Paint, Shape, SlotRole,
    Stroke, TextAlign, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, DESC_REM, TextBlock, deco, fill_rect, fit_heights, group, hex_alpha, outline_chip,
    outline_chip_width, slot,
};

const FRAME: f64 = 20.0;
const PAD: f64 = 64.0;
const TITLE_REM: f64 = 6.0;

/// Framed editorial layout: masthead with date, featured chip, headline, pull-quote, byline.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let canvas = Canvas::CARD.rect();
    let region = inset(canvas, FRAME + PAD);
    let mut nodes = vec![deco(
        DecorationKind::Panel,
        inset(canvas, FRAME * 0.5),
        Shape::RECT,
        DecorationStyle::outlined(Stroke {
            paint: Paint::solid(ctx.text_color()),
            width: FRAME,
        }),
    )];

    // Masthead: site name left, date right, hairline rule below.
    let mut mast_style = ctx.style();
    mast_style.weight = 900;
    mast_style.uppercase = true;
    mast_style.letter_spacing = -0.05;
    mast_style.line_height = 40.0 / 36.0;
    let mast = TextBlock::line(
        TextRole::SiteName,
        &ctx.cfg.site_name,
        TypeScale::fixed_px(36.0),
        mast_style,
    );
    let mut masthead = Vec::new();
    let date = ctx.cfg.date_stamp.trim();
    let date_w = if date.is_empty() {
        0.0
    } else {
        let mut date_style = ctx.style_in(FontFamily::Mono, ctx.text_color());
        date_style.opacity = 0.6;
        date_style.line_height = 28.0 / 20.0;
        let block = TextBlock::line(TextRole::Date, date, TypeScale::fixed_px(20.0), date_style)
            .align(TextAlign::End);
        let w = block.width.min(region.width() * 0.5);
        masthead.push(block.in_frame(rect_xywh(region.x1 - w, region.y0, w, 28.0)));
        w
    };
    let mast_w = mast.width.min(region.width() - date_w - 24.0).max(0.0);
    masthead.insert(0, mast.in_frame(rect_xywh(region.x0, region.y0, mast_w, 40.0)));
    let rule_y = region.y0 + 40.0 + 24.0;
    masthead.push(fill_rect(
        DecorationKind::Divider,
        rect_xywh(region.x0, rule_y, region.width(), 2.0),
        ctx.text_color(),
        hex_alpha(0x30),
    ));
    nodes.push(group(
        GroupRole::Header,
        rect_xywh(region.x0, region.y0, region.width(), rule_y + 2.0 - region.y0),
        None,
        masthead,
    ));

    // Byline pinned to the bottom.
    let byline_y = region.y1 - 48.0;
    let avatar = slot(
        ctx,
        SlotRole::Avatar,
        rect_xywh(region.x0, byline_y, 48.0, 48.0),
        Shape::Ellipse,
        ImageFit::Cover,
        || (Fill::solid(ctx.text_color(), 1.0), None),
    );
    let mut author_style = ctx.style();
    author_style.weight = 700;
    author_style.line_height = 28.0 / 18.0;
    let author = TextBlock::line(
        TextRole::Author,
        &ctx.cfg.author,
        TypeScale::fixed_px(18.0),
        author_style,
    );
    let author_w = author.width.min(region.width() - 64.0);
    let author = author.in_frame(rect_xywh(region.x0 + 64.0, byline_y + 10.0, author_w, 28.0));
    nodes.push(group(
        GroupRole::Footer,
        rect_xywh(region.x0, byline_y, region.width(), 48.0),
        None,
        vec![avatar, author],
    ));

    // Middle column, vertically centered between masthead and byline.
    let mid_top = rule_y + 2.0 + 32.0;
    let mid_bottom = byline_y - 32.0;
    let mut title_style = ctx.style();
    title_style.weight = 900;
    title_style.line_height = 0.9;
    title_style.letter_spacing = -0.05;
    title_style.uppercase = true;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(TITLE_REM),
        title_style,
        region.width(),
    );
    let mut desc_style = ctx.style_in(FontFamily::Serif, ctx.text_color());
    desc_style.italic = true;
    desc_style.opacity = 0.8;
    let quote_w = region.width().min(672.0);
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(DESC_REM),
        desc_style,
        quote_w - 28.0,
    );

    let chip_h = 32.0;
    let fixed = chip_h + 24.0 + 24.0;
    let avail = (mid_bottom - mid_top).max(0.0);
    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, fixed, avail);
    let block_h = fixed + heights[0] + heights[1];
    let mut y = mid_top + ((avail - block_h) * 0.5).max(0.0);
    let block_top = y;

    let chip_w = outline_chip_width(ctx, "Featured");
    let (chip, _) = outline_chip(ctx, TextRole::Label, "Featured", (region.x0, y), chip_w);
    y += chip_h + 24.0;
    let title_w = title.width;
    let title = title.in_frame(rect_xywh(region.x0, y, title_w, heights[0]));
    y += heights[0] + 24.0;
    let bar = fill_rect(
        DecorationKind::AccentBar,
        rect_xywh(region.x0, y, 4.0, heights[1]),
        ctx.accent(),
        1.0,
    );
    let desc = desc.in_frame(rect_xywh(region.x0 + 28.0, y, quote_w - 28.0, heights[1]));
    nodes.push(group(
        GroupRole::Body,
        rect_xywh(region.x0, block_top, region.width(), block_h),
        None,
        vec![chip, title, bar, desc],
    ));
    nodes
}
