use super::{Widget, draw_rect};
use crate::{Color, ElementId, Renderer, Ui, Vec2};

/// Passive progress indicator, 0..=1.
pub struct ProgressBar {
    pub(crate) progress: f32,
    pub(crate) bar_color: Color,
    pub(crate) background_color: Color,
}

impl ProgressBar {
    pub fn new() -> Self {
        ProgressBar {
            progress: 0.5,
            bar_color: Color::from_rgb(51, 153, 204),
            background_color: Color::from_rgb(51, 51, 51),
        }
    }

    pub fn progress(mut self, p: f32) -> Self {
        self.progress = p.clamp(0.0, 1.0);
        self
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let id = ui.spawn(Widget::Progress(self));
        ui.set_bounds(id, 0.0, 0.0, 200.0, 20.0);
        id
    }

    pub fn value(ui: &Ui, id: ElementId) -> f32 {
        match &ui[id].widget {
            Widget::Progress(p) => p.progress,
            _ => {
                log::warn!("ProgressBar::value: {id:?} is not a progress bar");
                0.0
            }
        }
    }

    pub fn set_progress(ui: &mut Ui, id: ElementId, progress: f32) {
        if let Widget::Progress(p) = ui.widget_mut(id) {
            p.progress = progress.clamp(0.0, 1.0);
            ui.mark_dirty(id);
        } else {
            log::warn!("ProgressBar::set_progress: {id:?} is not a progress bar");
        }
    }

    pub fn set_bar_color(ui: &mut Ui, id: ElementId, color: Color) {
        if let Widget::Progress(p) = ui.widget_mut(id) {
            p.bar_color = color;
            ui.mark_dirty(id);
        }
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        ProgressBar::new()
    }
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let Widget::Progress(p) = &ui[id].widget else {
        return;
    };
    let rect = draw_rect(ui, id, offset);

    renderer.fill_rect(rect, p.background_color, 4.0);
    if p.progress > 0.0 {
        renderer.fill_rect(
            crate::Rect::new(rect.x, rect.y, rect.w * p.progress, rect.h),
            p.bar_color,
            4.0,
        );
    }
    renderer.stroke_rect(rect, 1.0, Color::GRAY, 4.0);
}
