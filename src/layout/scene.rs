use crate::config::model::{FontFamily, TemplateId};
use crate::foundation::core::{Canvas, REM, Rect};
use crate::foundation::math::Fnv1a64;
use crate::style::background::GradientDirection;
use crate::style::noise::BlendMode;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Renderer-agnostic description of one card's content layer.
///
/// Rebuilt wholesale from configuration on every change. Nodes are listed bottom to top; all
/// geometry is in the logical 1200x630 coordinate space.
pub struct SceneTree {
    pub template: TemplateId,
    pub canvas: Canvas,
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Text(TextNode),
    ImageSlot(ImageSlotNode),
    Decoration(DecorationNode),
    Group(GroupNode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    Title,
    Description,
    SiteName,
    Author,
    Date,
    Url,
    /// Fixed chrome copy such as chip captions and calls to action.
    Label,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A variant-fixed base size in `rem`, scaled by a multiplier.
pub struct TypeScale {
    pub base_rem: f64,
    pub multiplier: f64,
}

impl TypeScale {
    /// Scale that ignores the configured font-size multiplier.
    pub fn fixed_px(px: f64) -> Self {
        Self {
            base_rem: px / REM,
            multiplier: 1.0,
        }
    }

    pub fn scaled(base_rem: f64, multiplier: f64) -> Self {
        Self {
            base_rem,
            multiplier,
        }
    }

    pub fn px(self) -> f64 {
        self.base_rem * REM * self.multiplier
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: u16,
    pub italic: bool,
    pub color: String,
    pub opacity: f64,
    pub align: TextAlign,
    /// Line box height as a multiple of the font size.
    pub line_height: f64,
    /// Extra tracking in `em`.
    pub letter_spacing: f64,
    pub uppercase: bool,
    /// `false` keeps the content on one line and clips it to the frame.
    pub wrap: bool,
}

impl TextStyle {
    pub fn new(family: FontFamily, color: &str) -> Self {
        Self {
            family,
            weight: 400,
            italic: false,
            color: color.to_owned(),
            opacity: 1.0,
            align: TextAlign::Start,
            line_height: 1.5,
            letter_spacing: 0.0,
            uppercase: false,
            wrap: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Inline run with its own color and weight, used for syntax-colored lines.
pub struct TextSpan {
    pub text: String,
    pub color: String,
    pub weight: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextNode {
    pub role: TextRole,
    /// Full text. When `spans` is non-empty it equals their concatenation.
    pub content: String,
    pub size: TypeScale,
    /// Box the renderer wraps and clips into.
    pub frame: Rect,
    pub style: TextStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<TextSpan>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    Logo,
    Asset,
    Avatar,
    Thumbnail,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Rounded rectangle; radii run top-left, top-right, bottom-right, bottom-left.
    RoundedRect { radii: [f64; 4] },
    Ellipse,
    Icon { icon: IconKind, rotate_deg: f64 },
}

impl Shape {
    pub const RECT: Shape = Shape::RoundedRect { radii: [0.0; 4] };

    pub fn rounded(r: f64) -> Self {
        Shape::RoundedRect { radii: [r; 4] }
    }

    pub fn rounded_top(r: f64) -> Self {
        Shape::RoundedRect {
            radii: [r, r, 0.0, 0.0],
        }
    }

    pub fn icon(icon: IconKind) -> Self {
        Shape::Icon {
            icon,
            rotate_deg: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Layout,
    Image,
    BarChart,
    Quote,
    Globe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFit {
    Cover,
    Contain,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Solid color with a separate opacity multiplier.
pub struct Paint {
    pub color: String,
    pub opacity: f64,
}

impl Paint {
    pub fn new(color: &str, opacity: f64) -> Self {
        Self {
            color: color.to_owned(),
            opacity,
        }
    }

    pub fn solid(color: &str) -> Self {
        Self::new(color, 1.0)
    }

    pub fn white(opacity: f64) -> Self {
        Self::new("#ffffff", opacity)
    }

    pub fn black(opacity: f64) -> Self {
        Self::new("#000000", opacity)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaintStop {
    pub offset: f64,
    pub paint: Paint,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    Solid(Paint),
    Linear {
        direction: GradientDirection,
        stops: Vec<PaintStop>,
    },
}

impl Fill {
    pub fn solid(color: &str, opacity: f64) -> Self {
        Fill::Solid(Paint::new(color, opacity))
    }

    pub fn linear(direction: GradientDirection, from: Paint, to: Paint) -> Self {
        Fill::Linear {
            direction,
            stops: vec![
                PaintStop {
                    offset: 0.0,
                    paint: from,
                },
                PaintStop {
                    offset: 1.0,
                    paint: to,
                },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Glyph drawn on top of a placeholder fill.
pub enum PlaceholderMark {
    Icon {
        icon: IconKind,
        size: f64,
        paint: Paint,
    },
    Label {
        text: String,
        size: f64,
        weight: u16,
        paint: Paint,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotSource {
    /// Configured asset image. `href` is the configuration value verbatim.
    Image { href: String, fit: ImageFit },
    /// Neutral stand-in drawn when no asset is configured.
    Placeholder {
        fill: Fill,
        mark: Option<PlaceholderMark>,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImageSlotNode {
    pub role: SlotRole,
    pub frame: Rect,
    /// Clip applied to both image and placeholder.
    pub shape: Shape,
    pub source: SlotSource,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

impl ImageSlotNode {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.source, SlotSource::Placeholder { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationKind {
    /// Opaque content backdrop or window body.
    Backdrop,
    AccentBar,
    Divider,
    Underline,
    Chip,
    Badge,
    Panel,
    Overlay,
    Blob,
    ChartBar,
    ProgressTrack,
    ProgressFill,
    WindowChrome,
    AddressBar,
    TrafficLight,
    Icon,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecorationStyle {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
    pub blend: BlendMode,
    /// Gaussian blur standard deviation in layout units.
    pub blur: f64,
}

impl DecorationStyle {
    pub fn filled(fill: Fill) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
            opacity: 1.0,
            blend: BlendMode::Normal,
            blur: 0.0,
        }
    }

    pub fn outlined(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
            opacity: 1.0,
            blend: BlendMode::Normal,
            blur: 0.0,
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecorationNode {
    pub kind: DecorationKind,
    pub frame: Rect,
    pub shape: Shape,
    pub style: DecorationStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRole {
    Header,
    Body,
    Footer,
    Media,
    Panel,
    Window,
    Chart,
    StatCard,
    Badge,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupNode {
    pub role: GroupRole,
    pub frame: Rect,
    /// Children are clipped to this shape placed at `frame`.
    pub clip: Option<Shape>,
    pub opacity: f64,
    pub children: Vec<Node>,
}

impl SceneTree {
    /// Depth-first, bottom-to-top traversal of every node including group containers.
    pub fn walk(&self) -> impl Iterator<Item = &Node> {
        let mut stack: Vec<&Node> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Node::Group(g) = node {
                stack.extend(g.children.iter().rev());
            }
            Some(node)
        })
    }

    pub fn text_nodes(&self) -> impl Iterator<Item = &TextNode> {
        self.walk().filter_map(|n| match n {
            Node::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn image_slots(&self) -> impl Iterator<Item = &ImageSlotNode> {
        self.walk().filter_map(|n| match n {
            Node::ImageSlot(s) => Some(s),
            _ => None,
        })
    }

    pub fn decorations(&self) -> impl Iterator<Item = &DecorationNode> {
        self.walk().filter_map(|n| match n {
            Node::Decoration(d) => Some(d),
            _ => None,
        })
    }

    /// First text node with `role`.
    pub fn text(&self, role: TextRole) -> Option<&TextNode> {
        self.text_nodes().find(|t| t.role == role)
    }

    pub fn slots_with_role(&self, role: SlotRole) -> impl Iterator<Item = &ImageSlotNode> {
        self.image_slots().filter(move |s| s.role == role)
    }

    /// Stable 64-bit digest of the serialized tree.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        match serde_json::to_vec(self) {
            Ok(bytes) => h.write_bytes(&bytes),
            // Serializing plain data cannot fail; hash the debug form if it somehow does.
            Err(_) => h.write_bytes(format!("{self:?}").as_bytes()),
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scene.rs"]
mod tests;
