use crate::config::model::FontFamily;
use crate::foundation::core::{Canvas, Rect, rect_xywh};
use crate::layout::flow::{Align, Item, Justify, inset, vstack};
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, IconKind, ImageFit, Node, Paint, Shape,
    SlotRole, Stroke, TextRole, TypeScale,
};
use crate::layout::variants::{Ctx, DESC_REM, TextBlock, deco, fit_heights, group, icon, slot};

const PAD: f64 = 64.0;
const TITLE_REM: f64 = 4.0;
/// Bar heights as fractions of the chart's inner height.
const BARS: [f64; 6] = [0.4, 0.7, 0.5, 0.9, 0.6, 0.8];
const AVATAR: f64 = 40.0;

/// Analytics layout: text column on the left, synthetic bar chart with a stat card on the right.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let region = inset(Canvas::CARD.rect(), PAD);
    let col_w = region.width() * 0.5;
    let text_w = col_w - 48.0;
    let text_region = rect_xywh(region.x0, region.y0, text_w, region.height());

    // Text column.
    let mut label_style = ctx.style_in(FontFamily::Mono, ctx.accent());
    label_style.weight = 700;
    label_style.uppercase = true;
    label_style.letter_spacing = 0.1;
    label_style.line_height = 28.0 / 20.0;
    let label = TextBlock::line(
        TextRole::Label,
        "Analytics",
        TypeScale::fixed_px(20.0),
        label_style,
    );

    let mut title_style = ctx.style();
    title_style.weight = 700;
    title_style.line_height = 1.25;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(TITLE_REM),
        title_style,
        text_w,
    );
    let mut desc_style = ctx.style();
    desc_style.opacity = 0.7;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(DESC_REM),
        desc_style,
        text_w,
    );
    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, 32.0 + 24.0 + 24.0 + 32.0 + AVATAR, text_region.height());
    let frames = vstack(
        text_region,
        &[
            Item::new(text_w, 32.0).gap(24.0),
            Item::new(text_w, heights[0]).gap(24.0),
            Item::new(text_w, heights[1]).gap(32.0),
            Item::new(text_w, AVATAR),
        ],
        Justify::Center,
        Align::Start,
    );

    let head = frames[0];
    let label_w = label.width.min(text_w - 44.0);
    let header = group(
        GroupRole::Header,
        head,
        None,
        vec![
            icon(
                rect_xywh(head.x0, head.y0, 32.0, 32.0),
                IconKind::BarChart,
                Paint::solid(ctx.accent()),
            ),
            label.in_frame(rect_xywh(head.x0 + 44.0, head.y0 + 2.0, label_w, 28.0)),
        ],
    );

    let readers = frames[3];
    let mut reader_nodes = Vec::new();
    for i in 0..3 {
        let x = readers.x0 + f64::from(i) * (AVATAR - 8.0);
        reader_nodes.push(deco(
            DecorationKind::Badge,
            rect_xywh(x, readers.y0, AVATAR, AVATAR),
            Shape::Ellipse,
            DecorationStyle::filled(Fill::solid("#64748b", 1.0)).with_stroke(Stroke {
                paint: Paint::solid("#ffffff"),
                width: 2.0,
            }),
        ));
    }
    let mut count_style = ctx.style();
    count_style.weight = 500;
    count_style.opacity = 0.8;
    let count = TextBlock::line(
        TextRole::Label,
        "+4k Readers",
        TypeScale::fixed_px(16.0),
        count_style,
    );
    let stack_w = AVATAR + 2.0 * (AVATAR - 8.0);
    let count_x = readers.x0 + stack_w + 16.0;
    let count_w = count.width.min(readers.x1 - count_x).max(0.0);
    reader_nodes.push(count.in_frame(rect_xywh(count_x, readers.y0 + 8.0, count_w, 24.0)));

    let text_col = group(
        GroupRole::Body,
        text_region,
        None,
        vec![
            header,
            title.in_frame(frames[1]),
            desc.in_frame(frames[2]),
            group(GroupRole::Footer, readers, None, reader_nodes),
        ],
    );

    // Chart panel.
    let panel = Rect::new(region.x0 + col_w, region.y0, region.x1, region.y1);
    let inner = inset(panel, 32.0);
    let mut chart = vec![deco(
        DecorationKind::Panel,
        panel,
        Shape::rounded(16.0),
        DecorationStyle::filled(Fill::Solid(Paint::white(0.05))).with_stroke(Stroke {
            paint: Paint::white(0.1),
            width: 1.0,
        }),
    )];
    let gap = 16.0;
    let bar_w = (inner.width() - gap * (BARS.len() - 1) as f64) / BARS.len() as f64;
    for (i, frac) in BARS.iter().enumerate() {
        let h = inner.height() * frac;
        let x = inner.x0 + i as f64 * (bar_w + gap);
        let color = if i % 2 == 0 { ctx.accent() } else { ctx.text_color() };
        let mut style = DecorationStyle::filled(Fill::solid(color, 1.0));
        style.opacity = 0.8;
        chart.push(deco(
            DecorationKind::ChartBar,
            Rect::new(x, inner.y1 - h, x + bar_w, inner.y1),
            Shape::rounded_top(8.0),
            style,
        ));
    }
    chart.push(stat_card(ctx, rect_xywh(inner.x0, inner.y0, inner.width(), 80.0)));

    vec![text_col, group(GroupRole::Chart, panel, None, chart)]
}

/// Floating card with a thumbnail, site name and a two-thirds progress track.
fn stat_card(ctx: &Ctx<'_>, frame: Rect) -> Node {
    let body = inset(frame, 16.0);
    let thumb = slot(
        ctx,
        SlotRole::Thumbnail,
        rect_xywh(body.x0, body.y0, 32.0, 32.0),
        Shape::rounded(4.0),
        ImageFit::Cover,
        || (Fill::Solid(Paint::white(0.2)), None),
    );
    let mut name_style = ctx.style_in(FontFamily::Mono, "#ffffff");
    name_style.line_height = 16.0 / 12.0;
    let name = TextBlock::line(
        TextRole::SiteName,
        &ctx.cfg.site_name,
        TypeScale::fixed_px(12.0),
        name_style,
    );
    let name_w = name.width.min(body.width() - 44.0).max(0.0);
    let track = rect_xywh(body.x0, body.y0 + 40.0, body.width(), 8.0);
    let filled = rect_xywh(track.x0, track.y0, track.width() * 2.0 / 3.0, 8.0);

    group(
        GroupRole::StatCard,
        frame,
        None,
        vec![
            deco(
                DecorationKind::Panel,
                frame,
                Shape::rounded(8.0),
                DecorationStyle::filled(Fill::Solid(Paint::black(0.8))).with_stroke(Stroke {
                    paint: Paint::white(0.2),
                    width: 1.0,
                }),
            ),
            thumb,
            name.in_frame(rect_xywh(body.x0 + 44.0, body.y0 + 8.0, name_w, 16.0)),
            group(
                GroupRole::Panel,
                track,
                Some(Shape::rounded(4.0)),
                vec![
                    deco(
                        DecorationKind::ProgressTrack,
                        track,
                        Shape::RECT,
                        DecorationStyle::filled(Fill::Solid(Paint::white(0.2))),
                    ),
                    deco(
                        DecorationKind::ProgressFill,
                        filled,
                        Shape::RECT,
                        DecorationStyle::filled(Fill::solid("#4ade80", 1.0)),
                    ),
                ],
            ),
        ],
    )
}
