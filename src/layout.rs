//! Deterministic box layouts. Managers are stateless with respect to any
//! container: configuration lives on the manager, all per-frame reads come
//! from the container and its children, so one `Rc`'d instance can serve any
//! number of containers.

use crate::{ElementId, Ui};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

pub trait LayoutManager {
    /// Assigns bounds to the container's visible children. Must not assume
    /// anything about previous placements.
    fn layout(&self, ui: &mut Ui, container: ElementId);
}

/// Stacks visible children top to bottom, centering each on the horizontal
/// axis within the widest visible child.
#[derive(Clone, Copy, Debug)]
pub struct ColumnLayout {
    pub spacing: f32,
    pub align: Align,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        ColumnLayout {
            spacing: 5.0,
            align: Align::Start,
        }
    }
}

impl ColumnLayout {
    pub fn new(spacing: f32) -> Self {
        ColumnLayout {
            spacing,
            ..Default::default()
        }
    }

    pub fn with_align(spacing: f32, align: Align) -> Self {
        ColumnLayout { spacing, align }
    }
}

impl LayoutManager for ColumnLayout {
    fn layout(&self, ui: &mut Ui, container: ElementId) {
        let children = ui[container].children().to_vec();
        if children.is_empty() {
            return;
        }

        let mut content_height = 0.0f32;
        let mut max_width = 0.0f32;
        for &child in &children {
            let el = &ui[child];
            if !el.is_visible() {
                continue;
            }
            content_height += el.height();
            max_width = max_width.max(el.width());
        }
        content_height += (children.len() - 1) as f32 * self.spacing;

        let padding = ui[container].style().padding;
        let container_height = ui[container].height();
        let start_y = match self.align {
            Align::Start => padding.top,
            Align::Center => (container_height - content_height) / 2.0,
            Align::End => container_height - content_height - padding.bottom,
        };

        let mut cursor = start_y;
        for &child in &children {
            if !ui[child].is_visible() {
                continue;
            }
            let x = padding.left + (max_width - ui[child].width()) / 2.0;
            ui.set_x(child, x);
            ui.set_y(child, cursor);
            cursor += ui[child].height() + self.spacing;
        }
    }
}

/// Stacks visible children left to right, centering each on the vertical
/// axis within the tallest visible child.
#[derive(Clone, Copy, Debug)]
pub struct RowLayout {
    pub spacing: f32,
    pub align: Align,
}

impl Default for RowLayout {
    fn default() -> Self {
        RowLayout {
            spacing: 5.0,
            align: Align::Start,
        }
    }
}

impl RowLayout {
    pub fn new(spacing: f32) -> Self {
        RowLayout {
            spacing,
            ..Default::default()
        }
    }

    pub fn with_align(spacing: f32, align: Align) -> Self {
        RowLayout { spacing, align }
    }
}

impl LayoutManager for RowLayout {
    fn layout(&self, ui: &mut Ui, container: ElementId) {
        let children = ui[container].children().to_vec();
        if children.is_empty() {
            return;
        }

        let mut content_width = 0.0f32;
        let mut max_height = 0.0f32;
        for &child in &children {
            let el = &ui[child];
            if !el.is_visible() {
                continue;
            }
            content_width += el.width();
            max_height = max_height.max(el.height());
        }
        content_width += (children.len() - 1) as f32 * self.spacing;

        let padding = ui[container].style().padding;
        let container_width = ui[container].width();
        let start_x = match self.align {
            Align::Start => padding.left,
            Align::Center => (container_width - content_width) / 2.0,
            Align::End => container_width - content_width - padding.right,
        };

        let mut cursor = start_x;
        for &child in &children {
            if !ui[child].is_visible() {
                continue;
            }
            let y = padding.top + (max_height - ui[child].height()) / 2.0;
            ui.set_x(child, cursor);
            ui.set_y(child, y);
            cursor += ui[child].width() + self.spacing;
        }
    }
}

/// Divides the content box into `columns x rows` equal cells and fills them
/// in row-major order. Invisible children do not consume a cell, so visible
/// children compact; children past the last cell are left where they are.
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub h_spacing: f32,
    pub v_spacing: f32,
}

impl GridLayout {
    pub fn new(columns: usize, rows: usize) -> Self {
        GridLayout {
            columns,
            rows,
            h_spacing: 5.0,
            v_spacing: 5.0,
        }
    }

    pub fn with_spacing(columns: usize, rows: usize, h_spacing: f32, v_spacing: f32) -> Self {
        GridLayout {
            columns,
            rows,
            h_spacing,
            v_spacing,
        }
    }
}

impl LayoutManager for GridLayout {
    fn layout(&self, ui: &mut Ui, container: ElementId) {
        let children = ui[container].children().to_vec();
        if children.is_empty() || self.columns == 0 || self.rows == 0 {
            return;
        }

        let el = &ui[container];
        let padding = el.style().padding;
        let available_width = el.width() - padding.horizontal();
        let available_height = el.height() - padding.vertical();

        let cell_width =
            (available_width - (self.columns - 1) as f32 * self.h_spacing) / self.columns as f32;
        let cell_height =
            (available_height - (self.rows - 1) as f32 * self.v_spacing) / self.rows as f32;

        let mut index = 0usize;
        for &child in &children {
            if !ui[child].is_visible() {
                continue;
            }
            if index >= self.columns * self.rows {
                break;
            }
            let row = index / self.columns;
            let col = index % self.columns;
            let x = padding.left + col as f32 * (cell_width + self.h_spacing);
            let y = padding.top + row as f32 * (cell_height + self.v_spacing);
            ui.set_bounds(child, x, y, cell_width, cell_height);
            index += 1;
        }
    }
}
