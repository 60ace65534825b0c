use crate::{Color, Edges};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontStyle {
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle {
            size: 14.0,
            bold: false,
            italic: false,
        }
    }
}

/// Visual attributes shared by every element. Pure data; layout managers
/// read the padding, the default paint path reads the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub background: Color,
    pub foreground: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub border_radius: f32,
    pub padding: Edges,
    pub margin: Edges,
    pub font: FontStyle,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            background: Color::TRANSPARENT,
            foreground: Color::WHITE,
            border_color: Color::GRAY,
            border_width: 0.0,
            border_radius: 0.0,
            padding: Edges::ZERO,
            margin: Edges::ZERO,
            font: FontStyle::default(),
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, c: Color) -> Self {
        self.background = c;
        self
    }

    pub fn foreground(mut self, c: Color) -> Self {
        self.foreground = c;
        self
    }

    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }

    pub fn border_radius(mut self, r: f32) -> Self {
        self.border_radius = r;
        self
    }

    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Edges::uniform(v);
        self
    }

    pub fn padding_edges(mut self, e: Edges) -> Self {
        self.padding = e;
        self
    }

    pub fn margin(mut self, v: f32) -> Self {
        self.margin = Edges::uniform(v);
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font.size = size;
        self
    }
}
