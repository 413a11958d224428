use super::*;
use crate::layout::scene::{DecorationKind, Node, SlotRole, SlotSource, TextRole};

const PIXEL_PNG: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn with_template(t: TemplateId) -> CardConfig {
    CardConfig {
        template: t,
        ..CardConfig::default()
    }
}

#[test]
fn resolution_is_deterministic_for_every_template() {
    for t in TemplateId::ALL {
        let cfg = with_template(*t);
        let a = resolve_scene(&cfg);
        let b = resolve_scene(&cfg.clone());
        assert_eq!(a, b, "{t}");
        assert_eq!(a.fingerprint(), b.fingerprint(), "{t}");
        assert_eq!(a.template, *t);
    }
}

#[test]
fn unknown_template_token_resolves_to_minimal() {
    let cfg = CardConfig::default();
    let fallback = resolve_scene_for(&cfg, "definitely-not-a-template");
    let minimal = resolve_scene_for(&cfg, "minimal");
    assert_eq!(fallback, minimal);
    assert_eq!(fallback.template, TemplateId::Minimal);

    let parsed = CardConfig::from_json_str(r#"{"template":"retro"}"#).unwrap();
    assert_eq!(resolve_scene(&parsed), resolve_scene(&with_template(TemplateId::Minimal)));
}

#[test]
fn hidden_logo_removes_logo_slots_everywhere() {
    for t in TemplateId::ALL {
        let cfg = CardConfig {
            show_logo: false,
            ..with_template(*t)
        };
        let scene = resolve_scene(&cfg);
        assert_eq!(scene.slots_with_role(SlotRole::Logo).count(), 0, "{t}");
    }
}

#[test]
fn logo_slot_present_where_the_template_shows_one() {
    for t in [
        TemplateId::Minimal,
        TemplateId::Hero,
        TemplateId::Split,
        TemplateId::Vertical,
        TemplateId::Browser,
        TemplateId::Card,
    ] {
        let scene = resolve_scene(&with_template(t));
        assert_eq!(scene.slots_with_role(SlotRole::Logo).count(), 1, "{t}");
    }
}

#[test]
fn missing_image_always_resolves_to_placeholders() {
    for t in TemplateId::ALL {
        let scene = resolve_scene(&with_template(*t));
        for slot in scene.image_slots() {
            assert!(slot.is_placeholder(), "{t}: {:?} slot is not a placeholder", slot.role);
        }
    }
}

#[test]
fn configured_image_fills_every_slot() {
    let mut any = 0;
    for t in TemplateId::ALL {
        let cfg = CardConfig {
            image: Some(PIXEL_PNG.to_owned()),
            ..with_template(*t)
        };
        let scene = resolve_scene(&cfg);
        for slot in scene.image_slots() {
            any += 1;
            match &slot.source {
                SlotSource::Image { href, .. } => assert_eq!(href, PIXEL_PNG),
                SlotSource::Placeholder { .. } => panic!("{t}: placeholder despite image"),
            }
        }
        assert!(scene.image_slots().count() > 0, "{t} exposes no image slot");
    }
    assert!(any >= 10);
}

#[test]
fn every_template_shows_title_and_description() {
    for t in TemplateId::ALL {
        let scene = resolve_scene(&with_template(*t));
        let title = scene.text(TextRole::Title).unwrap();
        assert!(title.content.contains("Build Faster with AI"), "{t}");
        let desc = scene.text(TextRole::Description).unwrap();
        assert!(desc.content.contains("generative models"), "{t}");
    }
}

#[test]
fn font_size_scales_title_and_description() {
    for t in TemplateId::ALL {
        let base = resolve_scene(&with_template(*t));
        let big = resolve_scene(&CardConfig {
            font_size: 1.5,
            ..with_template(*t)
        });
        let a = base.text(TextRole::Title).unwrap().size;
        let b = big.text(TextRole::Title).unwrap().size;
        assert_eq!(a.base_rem, b.base_rem);
        assert!((b.px() - a.px() * 1.5).abs() < 1e-9, "{t}");
        let a = base.text(TextRole::Description).unwrap().size;
        let b = big.text(TextRole::Description).unwrap().size;
        assert!(b.px() > a.px(), "{t}");
    }
}

#[test]
fn long_text_stays_on_the_canvas() {
    let canvas = Canvas::CARD.rect();
    for t in TemplateId::ALL {
        let cfg = CardConfig {
            title: "Very long headline ".repeat(60),
            description: "Endless detail ".repeat(120),
            site_name: "Sprawling Publication Name ".repeat(40),
            author: "Someone With A Remarkably Long Byline ".repeat(40),
            source_url: format!("https://example.com/{}", "deep/path/".repeat(80)),
            ..with_template(*t)
        };
        let scene = resolve_scene(&cfg);
        for text in scene.text_nodes() {
            let f = text.frame;
            assert!(
                f.x0 >= canvas.x0 - 1e-6
                    && f.y0 >= canvas.y0 - 1e-6
                    && f.x1 <= canvas.x1 + 1e-6
                    && f.y1 <= canvas.y1 + 1e-6,
                "{t}: {:?} frame {f:?} leaves the canvas",
                text.role
            );
        }
        for chip in scene.decorations().filter(|d| d.kind == DecorationKind::Chip) {
            let f = chip.frame;
            assert!(
                f.x0 >= canvas.x0 - 1e-6 && f.x1 <= canvas.x1 + 1e-6,
                "{t}: chip {f:?} leaves the canvas"
            );
        }
        // Content is kept whole; only the frame is bounded.
        assert!(scene.text(TextRole::Title).unwrap().content.contains(&cfg.title[..40]));
    }
}

#[test]
fn minimal_author_chip_ends_before_the_read_chip() {
    let cfg = CardConfig {
        author: "Someone With A Remarkably Long Byline ".repeat(40),
        ..with_template(TemplateId::Minimal)
    };
    let scene = resolve_scene(&cfg);
    let mut chips: Vec<_> = scene
        .decorations()
        .filter(|d| d.kind == DecorationKind::Chip)
        .map(|d| d.frame)
        .collect();
    chips.sort_by(|a, b| a.x0.total_cmp(&b.x0));
    assert_eq!(chips.len(), 2);
    let (author, read) = (chips[0], chips[1]);
    assert!(author.x1 + 16.0 <= read.x0 + 1e-6, "{author:?} runs into {read:?}");

    let name = scene.text(TextRole::Author).unwrap();
    assert_eq!(name.content, cfg.author);
    assert!(name.frame.x1 <= author.x1);
}

#[test]
fn minimal_author_chip_is_found_by_role() {
    let scene = resolve_scene(&with_template(TemplateId::Minimal));
    let author = scene.text(TextRole::Author).unwrap();
    assert_eq!(author.content, CardConfig::default().author);
    assert!(author.style.uppercase);
    let labels: Vec<_> = scene
        .text_nodes()
        .filter(|t| t.role == TextRole::Label)
        .map(|t| t.content.as_str())
        .collect();
    assert_eq!(labels, ["Read now"]);
}

#[test]
fn empty_strings_do_not_break_resolution() {
    for t in TemplateId::ALL {
        let cfg = CardConfig {
            title: String::new(),
            description: String::new(),
            site_name: String::new(),
            author: String::new(),
            source_url: String::new(),
            ..with_template(*t)
        };
        let scene = resolve_scene(&cfg);
        assert!(!scene.nodes.is_empty(), "{t}");
    }
}

#[test]
fn magazine_shows_date_only_when_set() {
    let cfg = with_template(TemplateId::Magazine);
    assert!(resolve_scene(&cfg).text(TextRole::Date).is_none());
    let cfg = CardConfig {
        date_stamp: "10/16/2026".to_owned(),
        ..cfg
    };
    let scene = resolve_scene(&cfg);
    assert_eq!(scene.text(TextRole::Date).unwrap().content, "10/16/2026");
}

#[test]
fn code_title_is_syntax_colored() {
    let scene = resolve_scene(&CardConfig {
        title: "Ship It".to_owned(),
        ..with_template(TemplateId::Code)
    });
    let title = scene.text(TextRole::Title).unwrap();
    assert_eq!(title.content, "const Title = \"Ship It\";");
    assert_eq!(title.spans.len(), 6);
    assert_eq!(title.spans[4].text, "\"Ship It\"");
    assert_eq!(title.spans[4].color, "#4ade80");
}

#[test]
fn split_overlay_multiplies_over_the_image_half() {
    use crate::layout::scene::DecorationKind;
    use crate::style::noise::BlendMode;
    let scene = resolve_scene(&with_template(TemplateId::Split));
    let overlay = scene
        .decorations()
        .find(|d| d.kind == DecorationKind::Overlay)
        .unwrap();
    assert_eq!(overlay.style.blend, BlendMode::Multiply);
    assert_eq!(overlay.frame.x0, 600.0);
    let asset = scene.slots_with_role(SlotRole::Asset).next().unwrap();
    assert_eq!(asset.frame.x0, 600.0);
    assert_eq!(asset.frame.width(), 600.0);
}

#[test]
fn groups_nest_content() {
    let scene = resolve_scene(&with_template(TemplateId::Browser));
    assert!(matches!(scene.nodes[0], Node::Group(_)));
    assert!(scene.walk().count() > scene.nodes.len());
}
