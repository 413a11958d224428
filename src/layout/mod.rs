pub mod flow;
pub mod metrics;
pub mod scene;
pub mod templates;
pub(crate) mod variants;

pub use scene::{Node, SceneTree};
pub use templates::{resolve_scene, resolve_scene_for};
