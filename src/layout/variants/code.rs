use crate::config::model::FontFamily;
use crate::foundation::core::{Canvas, Rect, rect_xywh};
use crate::layout::flow::inset;
use crate::layout::scene::{
    DecorationKind, DecorationStyle, Fill, GroupRole, ImageFit, Node, Paint, Shape, SlotRole,
    Stroke, TextAlign, TextNode, TextRole, TextSpan, TypeScale,
};
use crate::layout::variants::browser::TRAFFIC_LIGHTS;
use crate::layout::variants::{Ctx, TextBlock, deco, fill_rect, fit_heights, group, slot};

const MARGIN: f64 = 48.0;
const TITLEBAR: f64 = 40.0;
const TITLE_REM: f64 = 3.5;
const DESC_REM: f64 = 1.8;
const BODY_TEXT: &str = "#d1d5db";

/// Terminal window: shell prompt, syntax-colored title declaration, comment-styled description.
pub(crate) fn resolve(ctx: &Ctx<'_>) -> Vec<Node> {
    let canvas = Canvas::CARD.rect();
    let window = inset(canvas, MARGIN);
    let titlebar = rect_xywh(window.x0, window.y0, window.width(), TITLEBAR);
    let body = inset(Rect::new(window.x0, titlebar.y1, window.x1, window.y1), 48.0);

    let mut chrome = vec![
        fill_rect(DecorationKind::Backdrop, window, "#1e1e1e", 1.0),
        fill_rect(DecorationKind::WindowChrome, titlebar, "#2d2d2d", 1.0),
        fill_rect(
            DecorationKind::Divider,
            rect_xywh(titlebar.x0, titlebar.y1 - 1.0, titlebar.width(), 1.0),
            "#000000",
            1.0,
        ),
    ];
    for (i, color) in TRAFFIC_LIGHTS.iter().enumerate() {
        chrome.push(deco(
            DecorationKind::TrafficLight,
            rect_xywh(titlebar.x0 + 16.0 + i as f64 * 20.0, titlebar.y0 + 14.0, 12.0, 12.0),
            Shape::Ellipse,
            DecorationStyle::filled(Fill::solid(color, 1.0)),
        ));
    }
    let mut tab_style = ctx.style_in(FontFamily::Sans, "#6b7280");
    tab_style.line_height = 16.0 / 12.0;
    let tab = TextBlock::line(
        TextRole::Label,
        "bash — 80x24",
        TypeScale::fixed_px(12.0),
        tab_style,
    )
    .align(TextAlign::End);
    chrome.push(tab.in_frame(Rect::new(
        titlebar.x0 + 96.0,
        titlebar.y0 + 12.0,
        titlebar.x1 - 16.0,
        titlebar.y0 + 28.0,
    )));

    // Footer pinned to the bottom of the body.
    let footer_row = rect_xywh(body.x0, body.y1 - 32.0, body.width(), 32.0);
    let rule_y = footer_row.y0 - 32.0 - 1.0;
    let mut footer = vec![fill_rect(
        DecorationKind::Divider,
        rect_xywh(body.x0, rule_y, body.width(), 1.0),
        "#1f2937",
        1.0,
    )];
    footer.push(slot(
        ctx,
        SlotRole::Avatar,
        rect_xywh(footer_row.x0, footer_row.y0, 32.0, 32.0),
        Shape::rounded(4.0),
        ImageFit::Cover,
        || (Fill::solid("#374151", 1.0), None),
    ));
    let handle = TextBlock::line(
        TextRole::SiteName,
        format!("@{}", ctx.cfg.site_name),
        TypeScale::fixed_px(16.0),
        ctx.style_in(FontFamily::Mono, "#60a5fa"),
    );
    let mut commit_style = ctx.style_in(FontFamily::Mono, "#4b5563");
    commit_style.line_height = 20.0 / 14.0;
    let commit = TextBlock::line(
        TextRole::Label,
        "git commit -m \"init\"",
        TypeScale::fixed_px(14.0),
        commit_style,
    )
    .align(TextAlign::End);
    let commit_w = commit.width;
    let handle_w = handle.width.min(body.width() - 44.0 - commit_w - 16.0).max(0.0);
    let handle_frame = rect_xywh(footer_row.x0 + 44.0, footer_row.y0 + 4.0, handle_w, 24.0);
    let commit_frame = rect_xywh(footer_row.x1 - commit_w, footer_row.y1 - 20.0, commit_w, 20.0);
    footer.push(handle.in_frame(handle_frame));
    footer.push(commit.in_frame(commit_frame));

    // Prompt, declaration and comment stacked from the top of the body.
    let mut prompt_style = ctx.style_in(FontFamily::Mono, BODY_TEXT);
    prompt_style.opacity = 0.5;
    prompt_style.wrap = false;
    let prompt = spans_node(
        TextRole::Label,
        TypeScale::fixed_px(16.0),
        prompt_style,
        rect_xywh(body.x0, body.y0, body.width(), 24.0),
        &[
            ("➜", "#4ade80"),
            (" ", BODY_TEXT),
            ("~", "#60a5fa"),
            (" project start ", BODY_TEXT),
            ("--verbose", "#fde047"),
        ],
    );

    let mut title_style = ctx.style_in(FontFamily::Mono, "#ffffff");
    title_style.weight = 700;
    title_style.line_height = 1.375;
    let title_size = ctx.scaled(TITLE_REM);
    let quoted = format!("\"{}\"", ctx.cfg.title);
    let title_text = format!("const Title = {quoted};");
    let title_block = TextBlock::wrapped(
        TextRole::Title,
        &title_text,
        title_size,
        title_style.clone(),
        body.width(),
    );

    let mut desc_style = ctx.style_in(FontFamily::Mono, "#9ca3af");
    desc_style.weight = 300;
    desc_style.line_height = 1.625;
    let desc = TextBlock::wrapped(
        TextRole::Description,
        format!("// {}", ctx.cfg.description),
        ctx.scaled(DESC_REM),
        desc_style,
        body.width() - 34.0,
    );

    let top = body.y0 + 24.0 + 32.0;
    let mut heights = [title_block.height, desc.height];
    fit_heights(&mut heights, 24.0 + 32.0, (rule_y - top).max(0.0));
    let title_frame = rect_xywh(body.x0, top, body.width(), heights[0]);
    let title = spans_node(
        TextRole::Title,
        title_size,
        title_style,
        title_frame,
        &[
            ("const", "#c084fc"),
            (" ", "#ffffff"),
            ("Title", "#60a5fa"),
            (" = ", "#ffffff"),
            (quoted.as_str(), "#4ade80"),
            (";", "#ffffff"),
        ],
    );
    let desc_y = title_frame.y1 + 24.0;
    let comment_bar = fill_rect(
        DecorationKind::Divider,
        rect_xywh(body.x0, desc_y, 2.0, heights[1]),
        "#374151",
        1.0,
    );
    let desc = desc.in_frame(rect_xywh(body.x0 + 34.0, desc_y, body.width() - 34.0, heights[1]));

    let mut children = chrome;
    children.push(group(
        GroupRole::Body,
        body,
        None,
        vec![prompt, title, comment_bar, desc],
    ));
    children.push(group(
        GroupRole::Footer,
        Rect::new(body.x0, rule_y, body.x1, body.y1),
        None,
        footer,
    ));
    children.push(deco(
        DecorationKind::Panel,
        window,
        Shape::rounded(12.0),
        DecorationStyle::outlined(Stroke {
            paint: Paint::solid("#1f2937"),
            width: 1.0,
        }),
    ));

    vec![
        fill_rect(DecorationKind::Backdrop, canvas, "#0f172a", 1.0),
        group(
            GroupRole::Window,
            window,
            Some(Shape::rounded(12.0)),
            children,
        ),
    ]
}

fn spans_node(
    role: TextRole,
    size: TypeScale,
    style: crate::layout::scene::TextStyle,
    frame: Rect,
    parts: &[(&str, &str)],
) -> Node {
    let spans: Vec<TextSpan> = parts
        .iter()
        .map(|(text, color)| TextSpan {
            text: (*text).to_owned(),
            color: (*color).to_owned(),
            weight: None,
        })
        .collect();
    Node::Text(TextNode {
        role,
        content: spans.iter().map(|s| s.text.as_str()).collect(),
        size,
        frame,
        style,
        spans,
    })
}
