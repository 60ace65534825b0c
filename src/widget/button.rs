use std::rc::Rc;

use super::{Interaction, Widget, draw_rect};
use crate::{Color, ElementId, Event, EventKind, FontStyle, Rect, Renderer, TextAlign, Ui, Vec2};

/// Clickable push button.
pub struct Button {
    pub(crate) label: String,
    pub(crate) interaction: Interaction,
    pub(crate) on_click: Option<Rc<dyn Fn(&mut Ui)>>,
    pub(crate) normal_color: Color,
    pub(crate) hover_color: Color,
    pub(crate) pressed_color: Color,
    pub(crate) disabled_color: Color,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Button {
            label: label.into(),
            interaction: Interaction::default(),
            on_click: None,
            normal_color: Color::from_rgb(77, 77, 89),
            hover_color: Color::from_rgb(102, 102, 115),
            pressed_color: Color::from_rgb(51, 51, 64),
            disabled_color: Color::from_rgb(51, 51, 51),
        }
    }

    pub fn on_click(mut self, handler: impl Fn(&mut Ui) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let id = ui.spawn(Widget::Button(self));
        ui.set_bounds(id, 0.0, 0.0, 100.0, 30.0);
        id
    }

    pub fn label(ui: &Ui, id: ElementId) -> &str {
        match &ui[id].widget {
            Widget::Button(b) => &b.label,
            _ => {
                log::warn!("Button::label: {id:?} is not a button");
                ""
            }
        }
    }

    pub fn set_label(ui: &mut Ui, id: ElementId, label: impl Into<String>) {
        if let Widget::Button(b) = ui.widget_mut(id) {
            b.label = label.into();
            ui.mark_dirty(id);
        } else {
            log::warn!("Button::set_label: {id:?} is not a button");
        }
    }

    pub fn set_on_click(ui: &mut Ui, id: ElementId, handler: impl Fn(&mut Ui) + 'static) {
        if let Widget::Button(b) = ui.widget_mut(id) {
            b.on_click = Some(Rc::new(handler));
        }
    }

    pub fn set_normal_color(ui: &mut Ui, id: ElementId, color: Color) {
        if let Widget::Button(b) = ui.widget_mut(id) {
            b.normal_color = color;
            ui.mark_dirty(id);
        }
    }

    pub fn set_hover_color(ui: &mut Ui, id: ElementId, color: Color) {
        if let Widget::Button(b) = ui.widget_mut(id) {
            b.hover_color = color;
            ui.mark_dirty(id);
        }
    }

    pub fn set_pressed_color(ui: &mut Ui, id: ElementId, color: Color) {
        if let Widget::Button(b) = ui.widget_mut(id) {
            b.pressed_color = color;
            ui.mark_dirty(id);
        }
    }
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if !ui[id].is_enabled() {
        return;
    }
    let Widget::Button(b) = ui.widget_mut(id) else {
        return;
    };
    let changed = b.interaction.observe(&event.kind);
    let clicked = matches!(event.kind, EventKind::Click { .. });
    let on_click = if clicked { b.on_click.clone() } else { None };

    if changed {
        ui.mark_dirty(id);
    }
    if let Some(cb) = on_click {
        cb(ui);
    }
}

/// Rounded background, border and a centered label: the chrome shared by
/// push buttons, toggle buttons and menu items.
pub(crate) fn paint_chrome(
    renderer: &mut dyn Renderer,
    rect: Rect,
    bg: Color,
    border: (f32, Color),
    label: &str,
    font: &FontStyle,
    text_color: Color,
) {
    renderer.fill_rect(rect, bg, 4.0);
    renderer.stroke_rect(rect, border.0, border.1, 4.0);
    let size = renderer.measure_text(label, font);
    let pos = Vec2::new(
        rect.x + (rect.w - size.width) / 2.0,
        rect.y + (rect.h - size.height) / 2.0,
    );
    renderer.text(pos, label, font, text_color, TextAlign::LEFT | TextAlign::TOP);
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let Widget::Button(b) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = draw_rect(ui, id, offset);

    let bg = if !el.is_enabled() {
        b.disabled_color
    } else if b.interaction.pressed {
        b.pressed_color
    } else if b.interaction.hovered {
        b.hover_color
    } else {
        b.normal_color
    };
    let border = if el.is_enabled() {
        Color::GRAY
    } else {
        Color::from_rgb(77, 77, 77)
    };
    let text_color = if el.is_enabled() {
        el.style().foreground
    } else {
        Color::from_rgb(102, 102, 102)
    };
    paint_chrome(
        renderer,
        rect,
        bg,
        (1.0, border),
        &b.label,
        &el.style().font,
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerButton;

    #[test]
    fn click_fires_handler_once() {
        let mut ui = Ui::new(400.0, 300.0);
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let hits_in = hits.clone();
        let button = Button::new("Go")
            .on_click(move |_| hits_in.set(hits_in.get() + 1))
            .spawn(&mut ui);
        ui.set_bounds(button, 10.0, 10.0, 100.0, 30.0);
        ui.add_child(ui.root(), button).unwrap();

        ui.pointer_button(20.0, 20.0, PointerButton::Primary, true);
        ui.pointer_button(20.0, 20.0, PointerButton::Primary, false);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn hover_and_press_track_pointer() {
        let mut ui = Ui::new(400.0, 300.0);
        let button = Button::new("Go").spawn(&mut ui);
        ui.set_bounds(button, 10.0, 10.0, 100.0, 30.0);
        ui.add_child(ui.root(), button).unwrap();

        ui.pointer_move(20.0, 20.0);
        let Widget::Button(b) = &ui[button].widget else {
            unreachable!()
        };
        assert!(b.interaction.hovered);

        ui.pointer_button(20.0, 20.0, PointerButton::Primary, true);
        let Widget::Button(b) = &ui[button].widget else {
            unreachable!()
        };
        assert!(b.interaction.pressed);

        // Leaving resets both.
        ui.pointer_move(350.0, 200.0);
        let Widget::Button(b) = &ui[button].widget else {
            unreachable!()
        };
        assert!(!b.interaction.hovered);
        assert!(!b.interaction.pressed);
    }

    #[test]
    fn disabled_button_ignores_clicks() {
        let mut ui = Ui::new(400.0, 300.0);
        let hits = std::rc::Rc::new(std::cell::Cell::new(0));
        let hits_in = hits.clone();
        let button = Button::new("Go")
            .on_click(move |_| hits_in.set(hits_in.get() + 1))
            .spawn(&mut ui);
        ui.set_bounds(button, 10.0, 10.0, 100.0, 30.0);
        ui.add_child(ui.root(), button).unwrap();
        ui.set_enabled(button, false);

        // A disabled element is skipped by hit-testing entirely.
        ui.pointer_button(20.0, 20.0, PointerButton::Primary, true);
        ui.pointer_button(20.0, 20.0, PointerButton::Primary, false);
        assert_eq!(hits.get(), 0);
    }
}
