use std::rc::Rc;

use super::{Widget, draw_rect};
use crate::{Color, ElementId, Event, EventKind, Renderer, Ui, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Value selector with a draggable thumb. The stored value is normalized to
/// 0..=1; `actual_value` maps it onto the configured range. While pressed,
/// pointer moves keep updating the value even past the ends of the track.
pub struct Slider {
    pub(crate) orientation: Orientation,
    pub(crate) value: f32,
    pub(crate) min_value: f32,
    pub(crate) max_value: f32,
    pub(crate) dragging: bool,
    pub(crate) on_change: Option<Rc<dyn Fn(&mut Ui, f32)>>,
}

impl Slider {
    pub fn new() -> Self {
        Slider {
            orientation: Orientation::Horizontal,
            value: 0.5,
            min_value: 0.0,
            max_value: 1.0,
            dragging: false,
            on_change: None,
        }
    }

    pub fn vertical() -> Self {
        Slider {
            orientation: Orientation::Vertical,
            ..Slider::new()
        }
    }

    pub fn range(mut self, min: f32, max: f32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&mut Ui, f32) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let (w, h) = match self.orientation {
            Orientation::Horizontal => (200.0, 20.0),
            Orientation::Vertical => (20.0, 200.0),
        };
        let id = ui.spawn(Widget::Slider(self));
        ui.set_bounds(id, 0.0, 0.0, w, h);
        id
    }

    /// Normalized value, 0..=1.
    pub fn value(ui: &Ui, id: ElementId) -> f32 {
        match &ui[id].widget {
            Widget::Slider(s) => s.value,
            _ => {
                log::warn!("Slider::value: {id:?} is not a slider");
                0.0
            }
        }
    }

    pub fn set_value(ui: &mut Ui, id: ElementId, value: f32) {
        if let Widget::Slider(s) = ui.widget_mut(id) {
            s.value = value.clamp(0.0, 1.0);
            ui.mark_dirty(id);
        } else {
            log::warn!("Slider::set_value: {id:?} is not a slider");
        }
    }

    /// Value mapped onto the configured min/max range.
    pub fn actual_value(ui: &Ui, id: ElementId) -> f32 {
        match &ui[id].widget {
            Widget::Slider(s) => s.min_value + (s.max_value - s.min_value) * s.value,
            _ => {
                log::warn!("Slider::actual_value: {id:?} is not a slider");
                0.0
            }
        }
    }

    pub fn set_actual_value(ui: &mut Ui, id: ElementId, actual: f32) {
        let normalized = match &ui[id].widget {
            Widget::Slider(s) if s.max_value > s.min_value => {
                (actual - s.min_value) / (s.max_value - s.min_value)
            }
            Widget::Slider(_) => 0.0,
            _ => {
                log::warn!("Slider::set_actual_value: {id:?} is not a slider");
                return;
            }
        };
        Slider::set_value(ui, id, normalized);
    }

    pub fn set_range(ui: &mut Ui, id: ElementId, min: f32, max: f32) {
        if let Widget::Slider(s) = ui.widget_mut(id) {
            s.min_value = min;
            s.max_value = max;
        }
    }

    pub fn set_on_change(ui: &mut Ui, id: ElementId, handler: impl Fn(&mut Ui, f32) + 'static) {
        if let Widget::Slider(s) = ui.widget_mut(id) {
            s.on_change = Some(Rc::new(handler));
        }
    }
}

impl Default for Slider {
    fn default() -> Self {
        Slider::new()
    }
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if !ui[id].is_enabled() {
        return;
    }
    match event.kind {
        EventKind::PointerDown { position, .. } => {
            if let Widget::Slider(s) = ui.widget_mut(id) {
                s.dragging = true;
            }
            update_value(ui, id, position);
        }
        EventKind::PointerUp { .. } => {
            if let Widget::Slider(s) = ui.widget_mut(id) {
                s.dragging = false;
            }
        }
        EventKind::PointerMove { position } => {
            let dragging = matches!(&ui[id].widget, Widget::Slider(s) if s.dragging);
            if dragging {
                update_value(ui, id, position);
            }
        }
        _ => {}
    }
}

fn update_value(ui: &mut Ui, id: ElementId, pointer: Vec2) {
    let ax = ui.absolute_x(id);
    let ay = ui.absolute_y(id);
    let el = &ui[id];
    let (width, height) = (el.width(), el.height());

    let Widget::Slider(s) = ui.widget_mut(id) else {
        return;
    };
    let new_value = match s.orientation {
        Orientation::Horizontal => ((pointer.x - ax) / width).clamp(0.0, 1.0),
        Orientation::Vertical => 1.0 - ((pointer.y - ay) / height).clamp(0.0, 1.0),
    };
    if new_value == s.value {
        return;
    }
    s.value = new_value;
    let actual = s.min_value + (s.max_value - s.min_value) * s.value;
    let cb = s.on_change.clone();

    ui.mark_dirty(id);
    if let Some(cb) = cb {
        cb(ui, actual);
    }
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let Widget::Slider(s) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = draw_rect(ui, id, offset);

    let track = Color::from_rgb(51, 51, 51);
    let fill = Color::from_rgb(51, 153, 204);
    let thumb_color = if el.is_enabled() {
        Color::from_rgb(77, 179, 230)
    } else {
        Color::from_rgb(102, 102, 102)
    };
    let thumb_radius = 6.0;

    match s.orientation {
        Orientation::Horizontal => {
            let track_rect =
                crate::Rect::new(rect.x, rect.y + rect.h / 2.0 - 2.0, rect.w, 4.0);
            renderer.fill_rect(track_rect, track, 2.0);
            renderer.fill_rect(
                crate::Rect::new(track_rect.x, track_rect.y, rect.w * s.value, 4.0),
                fill,
                2.0,
            );
            let thumb = Vec2::new(rect.x + rect.w * s.value, rect.y + rect.h / 2.0);
            renderer.fill_circle(thumb, thumb_radius, thumb_color);
            renderer.stroke_circle(thumb, thumb_radius, 1.0, Color::WHITE);
        }
        Orientation::Vertical => {
            let track_rect =
                crate::Rect::new(rect.x + rect.w / 2.0 - 2.0, rect.y, 4.0, rect.h);
            renderer.fill_rect(track_rect, track, 2.0);
            let filled = rect.h * s.value;
            renderer.fill_rect(
                crate::Rect::new(track_rect.x, rect.y + rect.h - filled, 4.0, filled),
                fill,
                2.0,
            );
            let thumb = Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h - rect.h * s.value);
            renderer.fill_circle(thumb, thumb_radius, thumb_color);
            renderer.stroke_circle(thumb, thumb_radius, 1.0, Color::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerButton;

    fn slider_at(ui: &mut Ui, x: f32, y: f32) -> ElementId {
        let id = Slider::new().spawn(ui);
        ui.set_bounds(id, x, y, 200.0, 20.0);
        ui.add_child(ui.root(), id).unwrap();
        id
    }

    #[test]
    fn press_sets_value_from_pointer() {
        let mut ui = Ui::new(400.0, 300.0);
        let s = slider_at(&mut ui, 0.0, 0.0);
        ui.pointer_button(50.0, 10.0, PointerButton::Primary, true);
        assert!((Slider::value(&ui, s) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn drag_keeps_updating_beyond_the_track() {
        let mut ui = Ui::new(400.0, 300.0);
        let s = slider_at(&mut ui, 0.0, 100.0);
        ui.pointer_button(100.0, 110.0, PointerButton::Primary, true);
        assert!((Slider::value(&ui, s) - 0.5).abs() < 1e-6);

        // Still pressed; pointer wanders off the element.
        ui.pointer_move(300.0, 50.0);
        assert!((Slider::value(&ui, s) - 1.0).abs() < 1e-6);
        ui.pointer_move(-40.0, 110.0);
        assert!((Slider::value(&ui, s) - 0.0).abs() < 1e-6);

        // Release outside ends the drag; further moves change nothing.
        ui.pointer_button(-40.0, 110.0, PointerButton::Primary, false);
        ui.pointer_move(100.0, 110.0);
        assert!((Slider::value(&ui, s) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn change_callback_reports_actual_value() {
        let mut ui = Ui::new(400.0, 300.0);
        let got = std::rc::Rc::new(std::cell::Cell::new(f32::NAN));
        let got_in = got.clone();
        let s = Slider::new()
            .range(0.0, 200.0)
            .on_change(move |_, v| got_in.set(v))
            .spawn(&mut ui);
        ui.set_bounds(s, 0.0, 0.0, 200.0, 20.0);
        ui.add_child(ui.root(), s).unwrap();

        ui.pointer_button(150.0, 10.0, PointerButton::Primary, true);
        assert!((got.get() - 150.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_slider_inverts_axis() {
        let mut ui = Ui::new(400.0, 300.0);
        let s = Slider::vertical().spawn(&mut ui);
        ui.set_bounds(s, 0.0, 0.0, 20.0, 200.0);
        ui.add_child(ui.root(), s).unwrap();

        ui.pointer_button(10.0, 50.0, PointerButton::Primary, true);
        assert!((Slider::value(&ui, s) - 0.75).abs() < 1e-6);
    }
}
