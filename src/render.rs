//! The drawing boundary. The tree renders itself through the [`Renderer`]
//! trait; backend lifecycle (context creation, font loading, presentation)
//! stays with the embedding application. [`Scene`] is a recording backend
//! that turns a frame into a replayable draw list, which is also what the
//! test suite inspects.

use bitflags::bitflags;

use crate::{Color, FontStyle, Rect, Size, Vec2};

bitflags! {
    /// Text anchoring relative to the given position.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TextAlign: u8 {
        const LEFT = 1 << 0;
        const CENTER = 1 << 1;
        const RIGHT = 1 << 2;
        const TOP = 1 << 3;
        const MIDDLE = 1 << 4;
        const BOTTOM = 1 << 5;
    }
}

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::LEFT | TextAlign::TOP
    }
}

pub trait Renderer {
    fn begin_frame(&mut self, width: f32, height: f32, pixel_ratio: f32);
    fn end_frame(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32);
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color, radius: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn text(&mut self, pos: Vec2, text: &str, font: &FontStyle, color: Color, align: TextAlign);
    fn measure_text(&mut self, text: &str, font: &FontStyle) -> Size;

    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    CircleBorder {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Color,
        size: f32,
        align: TextAlign,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
    Save,
    Restore,
}

/// Recording renderer. `begin_frame` resets the node list, so one `Scene`
/// can be reused across frames.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
    pub frame: Size,
    pub pixel_ratio: f32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes matching the predicate, in draw order.
    pub fn nodes_where(&self, pred: impl Fn(&SceneNode) -> bool) -> Vec<&SceneNode> {
        self.nodes.iter().filter(|&n| pred(n)).collect()
    }
}

// The width estimate assumes a roughly half-em advance per character, which
// keeps headless layout deterministic; real backends report font metrics.
impl Renderer for Scene {
    fn begin_frame(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        self.nodes.clear();
        self.frame = Size::new(width, height);
        self.pixel_ratio = pixel_ratio;
    }

    fn end_frame(&mut self) {}

    fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.nodes.push(SceneNode::Rect {
            rect,
            color,
            radius,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color, radius: f32) {
        self.nodes.push(SceneNode::Border {
            rect,
            color,
            width,
            radius,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.nodes.push(SceneNode::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.nodes.push(SceneNode::CircleBorder {
            center,
            radius,
            width,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.nodes.push(SceneNode::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, font: &FontStyle, color: Color, align: TextAlign) {
        self.nodes.push(SceneNode::Text {
            pos,
            text: text.to_string(),
            color,
            size: font.size,
            align,
        });
    }

    fn measure_text(&mut self, text: &str, font: &FontStyle) -> Size {
        Size::new(text.chars().count() as f32 * font.size * 0.5, font.size)
    }

    fn push_clip(&mut self, rect: Rect) {
        self.nodes.push(SceneNode::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        self.nodes.push(SceneNode::PopClip);
    }

    fn save(&mut self) {
        self.nodes.push(SceneNode::Save);
    }

    fn restore(&mut self) {
        self.nodes.push(SceneNode::Restore);
    }
}
