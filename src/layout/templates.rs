use crate::config::model::{CardConfig, TemplateId};
use crate::foundation::core::Canvas;
use crate::layout::scene::SceneTree;
use crate::layout::variants::{self, Ctx};

/// Resolves the configured template into a scene tree.
///
/// Pure and total: identical configurations always produce identical trees, and every
/// configuration produces one. Unrecognized template tokens were already mapped to
/// [`TemplateId::Minimal`] when the configuration was parsed.
#[tracing::instrument(skip(config), fields(template = %config.template))]
pub fn resolve_scene(config: &CardConfig) -> SceneTree {
    let ctx = Ctx::new(config);
    let nodes = match config.template {
        TemplateId::Minimal => variants::minimal::resolve(&ctx),
        TemplateId::Hero => variants::hero::resolve(&ctx),
        TemplateId::Magazine => variants::magazine::resolve(&ctx),
        TemplateId::Split => variants::split::resolve(&ctx),
        TemplateId::Vertical => variants::vertical::resolve(&ctx),
        TemplateId::Graph => variants::graph::resolve(&ctx),
        TemplateId::Quote => variants::quote::resolve(&ctx),
        TemplateId::Browser => variants::browser::resolve(&ctx),
        TemplateId::Card => variants::card::resolve(&ctx),
        TemplateId::Code => variants::code::resolve(&ctx),
    };
    let scene = SceneTree {
        template: config.template,
        canvas: Canvas::CARD,
        nodes,
    };
    tracing::debug!(nodes = scene.walk().count(), "scene resolved");
    scene
}

/// Resolves with the template given as a raw token, falling back to `minimal`.
pub fn resolve_scene_for(config: &CardConfig, template: &str) -> SceneTree {
    let config = CardConfig {
        template: TemplateId::parse_lenient(template),
        ..config.clone()
    };
    resolve_scene(&config)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/templates.rs"]
mod tests;
