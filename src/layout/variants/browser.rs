use crate::config::model::FontFamily;
use crate::foundation::core::{Canvas, Rect, rect_xywh};
use crate::layout::flow::{Align, Item, Justify, inset, vstack};
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, IconKind, ImageFit, Node, Paint,
    PlaceholderMark, Shape, SlotRole, Stroke, TextAlign, TextRole, TypeScale,
};
use crate::layout::variants::{
    Ctx, TextBlock, deco, fill_rect, fit_heights, group, icon, slot,
};

const MARGIN: f64 = 48.0;
const TOOLBAR: f64 = 48.0;
const FALLBACK_URL: &str = "https://devblog.io/new-post";
pub(crate) const TRAFFIC_LIGHTS: [&str; 3] = ["#ef4444", "#eab308", "#22c55e"];

/// Mock browser window showing the asset image, or a placeholder page with title and summary.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let window = inset(Canvas::CARD.rect(), MARGIN);
    let toolbar = rect_xywh(window.x0, window.y0, window.width(), TOOLBAR);
    let page = Rect::new(window.x0, toolbar.y1, window.x1, window.y1);

    let mut children = vec![
        fill_rect(DecorationKind::Backdrop, window, "#0f172a", 1.0),
        fill_rect(DecorationKind::WindowChrome, toolbar, "#1e293b", 1.0),
        fill_rect(
            DecorationKind::Divider,
            rect_xywh(toolbar.x0, toolbar.y1 - 1.0, toolbar.width(), 1.0),
            "#334155",
            1.0,
        ),
    ];
    let mut x = toolbar.x0 + 16.0;
    for color in TRAFFIC_LIGHTS {
        children.push(deco(
            DecorationKind::TrafficLight,
            rect_xywh(x, toolbar.y0 + 18.0, 12.0, 12.0),
            Shape::Ellipse,
            DecorationStyle::filled(Fill::solid(color, 1.0)),
        ));
        x += 20.0;
    }
    let bar = Rect::new(x - 8.0 + 16.0, toolbar.y0 + 8.0, toolbar.x1 - 16.0, toolbar.y1 - 8.0);
    children.push(deco(
        DecorationKind::AddressBar,
        bar,
        Shape::rounded(6.0),
        DecorationStyle::filled(Fill::solid("#0f172a", 1.0)),
    ));
    let url = ctx.cfg.source_url.trim();
    let url = if url.is_empty() { FALLBACK_URL } else { url };
    let mut url_style = ctx.style_in(FontFamily::Mono, "#64748b");
    url_style.line_height = 20.0 / 14.0;
    let url = TextBlock::line(TextRole::Url, url, TypeScale::fixed_px(14.0), url_style);
    children.push(url.in_frame(rect_xywh(bar.x0 + 16.0, bar.y0 + 6.0, bar.width() - 32.0, 20.0)));

    // Page content.
    let mut page_nodes = vec![fill_rect(DecorationKind::Backdrop, page, "#ffffff", 1.0)];
    page_nodes.push(slot(ctx, SlotRole::Asset, page, Shape::RECT, ImageFit::Cover, || {
        (Fill::solid("#f1f5f9", 1.0), None)
    }));
    if !ctx.has_image() {
        page_nodes.push(placeholder_page(ctx, inset(page, 48.0)));
    }
    page_nodes.push(read_on_badge(ctx, page));
    children.push(group(GroupRole::Media, page, Some(Shape::RECT), page_nodes));

    children.push(deco(
        DecorationKind::Panel,
        window,
        Shape::rounded(12.0),
        DecorationStyle::outlined(Stroke {
            paint: Paint::solid("#334155"),
            width: 1.0,
        }),
    ));
    vec![group(
        GroupRole::Window,
        window,
        Some(Shape::rounded(12.0)),
        children,
    )]
}

/// Globe, title and summary centered on the stand-in page.
fn placeholder_page(ctx: &Ctx<'_>, region: Rect) -> Node {
    let mut title_style = ctx.style_in(ctx.cfg.font, "#1e293b");
    title_style.weight = 700;
    let title = TextBlock::wrapped(
        TextRole::Title,
        &ctx.cfg.title,
        ctx.scaled(2.5),
        title_style,
        region.width(),
    )
    .align(TextAlign::Center);
    let mut desc_style = ctx.style_in(ctx.cfg.font, "#94a3b8");
    desc_style.line_height = 28.0 / 20.0;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        &ctx.cfg.description,
        ctx.scaled(1.25),
        desc_style,
        region.width().min(512.0),
    )
    .align(TextAlign::Center);
    let mut heights = [title.height, desc.height];
    fit_heights(&mut heights, 64.0 + 16.0 + 8.0, region.height());
    let frames = vstack(
        region,
        &[
            Item::new(64.0, 64.0).gap(16.0),
            Item::new(title.width, heights[0]).gap(8.0),
            Item::new(desc.width, heights[1]),
        ],
        Justify::Center,
        Align::Center,
    );
    group(
        GroupRole::Body,
        region,
        None,
        vec![
            icon(frames[0], IconKind::Globe, Paint::new("#94a3b8", 0.5)),
            title.in_frame(frames[1]),
            desc.in_frame(frames[2]),
        ],
    )
}

/// "Read on <site>" badge in the page's bottom-right corner.
fn read_on_badge(ctx: &Ctx<'_>, page: Rect) -> Node {
    let mut kicker_style = ctx.style_in(ctx.cfg.font, "#94a3b8");
    kicker_style.weight = 700;
    kicker_style.uppercase = true;
    kicker_style.line_height = 16.0 / 12.0;
    let kicker = TextBlock::line(
        TextRole::Label,
        "Read on",
        TypeScale::fixed_px(12.0),
        kicker_style,
    );
    let mut name_style = ctx.style_in(ctx.cfg.font, "#ffffff");
    name_style.weight = 700;
    let name = TextBlock::line(
        TextRole::SiteName,
        &ctx.cfg.site_name,
        TypeScale::fixed_px(16.0),
        name_style,
    );

    let logo_w = if ctx.cfg.show_logo { 32.0 + 12.0 } else { 0.0 };
    let max_text = (page.width() * 0.5 - 48.0 - logo_w).max(0.0);
    let text_w = kicker.width.max(name.width).min(max_text);
    let w = 24.0 + logo_w + text_w + 24.0;
    let h = 12.0 + 40.0 + 12.0;
    let frame = rect_xywh(page.x1 - 32.0 - w, page.y1 - 32.0 - h, w, h);

    let mut nodes = vec![deco(
        DecorationKind::Badge,
        frame,
        Shape::rounded(8.0),
        DecorationStyle::filled(Fill::Solid(Paint::black(0.8))),
    )];
    let text_x = frame.x0 + 24.0 + logo_w;
    if ctx.cfg.show_logo {
        let initial = ctx
            .cfg
            .site_name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_else(|| "D".to_owned());
        nodes.push(slot(
            ctx,
            SlotRole::Logo,
            rect_xywh(frame.x0 + 24.0, frame.y0 + 16.0, 32.0, 32.0),
            Shape::rounded(4.0),
            ImageFit::Contain,
            || {
                (
                    Fill::solid("#3b82f6", 1.0),
                    Some(PlaceholderMark::Label {
                        text: initial,
                        size: 16.0,
                        weight: 700,
                        paint: Paint::solid("#ffffff"),
                    }),
                )
            },
        ));
    }
    nodes.push(kicker.in_frame(rect_xywh(text_x, frame.y0 + 12.0, text_w, 16.0)));
    nodes.push(name.in_frame(rect_xywh(text_x, frame.y0 + 28.0, text_w, 24.0)));
    group(GroupRole::Badge, frame, None, nodes)
}
