use std::rc::Rc;

use super::{Interaction, Widget, draw_rect};
use crate::{Color, ElementId, Event, EventKind, Renderer, Ui, Vec2};

/// Two-state latch button. Clicking flips the latch, then `on_toggle`
/// reports the new state.
pub struct ToggleButton {
    pub(crate) label: String,
    pub(crate) toggled: bool,
    pub(crate) interaction: Interaction,
    pub(crate) on_toggle: Option<Rc<dyn Fn(&mut Ui, bool)>>,
    pub(crate) toggled_color: Color,
    pub(crate) toggled_hover_color: Color,
}

impl ToggleButton {
    pub fn new(label: impl Into<String>) -> Self {
        ToggleButton {
            label: label.into(),
            toggled: false,
            interaction: Interaction::default(),
            on_toggle: None,
            toggled_color: Color::from_rgb(51, 153, 204),
            toggled_hover_color: Color::from_rgb(77, 179, 230),
        }
    }

    pub fn toggled(mut self, toggled: bool) -> Self {
        self.toggled = toggled;
        self
    }

    pub fn on_toggle(mut self, handler: impl Fn(&mut Ui, bool) + 'static) -> Self {
        self.on_toggle = Some(Rc::new(handler));
        self
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let id = ui.spawn(Widget::Toggle(self));
        ui.set_bounds(id, 0.0, 0.0, 100.0, 30.0);
        id
    }

    pub fn is_toggled(ui: &Ui, id: ElementId) -> bool {
        match &ui[id].widget {
            Widget::Toggle(t) => t.toggled,
            _ => {
                log::warn!("ToggleButton::is_toggled: {id:?} is not a toggle button");
                false
            }
        }
    }

    pub fn set_toggled(ui: &mut Ui, id: ElementId, toggled: bool) {
        if let Widget::Toggle(t) = ui.widget_mut(id) {
            t.toggled = toggled;
            ui.mark_dirty(id);
        } else {
            log::warn!("ToggleButton::set_toggled: {id:?} is not a toggle button");
        }
    }

    pub fn set_toggled_color(ui: &mut Ui, id: ElementId, color: Color) {
        if let Widget::Toggle(t) = ui.widget_mut(id) {
            t.toggled_color = color;
            ui.mark_dirty(id);
        }
    }
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if !ui[id].is_enabled() {
        return;
    }
    let Widget::Toggle(t) = ui.widget_mut(id) else {
        return;
    };
    let mut changed = t.interaction.observe(&event.kind);
    let mut notify = None;
    if matches!(event.kind, EventKind::Click { .. }) {
        t.toggled = !t.toggled;
        notify = Some((t.on_toggle.clone(), t.toggled));
        changed = true;
    }

    if changed {
        ui.mark_dirty(id);
    }
    if let Some((Some(cb), state)) = notify {
        cb(ui, state);
    }
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let Widget::Toggle(t) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = draw_rect(ui, id, offset);
    let enabled = el.is_enabled();

    let bg = if !enabled {
        Color::from_rgb(51, 51, 51)
    } else if t.toggled {
        if t.interaction.hovered {
            t.toggled_hover_color
        } else {
            t.toggled_color
        }
    } else if t.interaction.pressed {
        Color::from_rgb(51, 51, 64)
    } else if t.interaction.hovered {
        Color::from_rgb(102, 102, 115)
    } else {
        Color::from_rgb(77, 77, 89)
    };
    let border = if enabled && t.toggled {
        (2.0, Color::from_rgb(77, 204, 255))
    } else if enabled {
        (1.0, Color::GRAY)
    } else {
        (1.0, Color::from_rgb(77, 77, 77))
    };
    let text_color = if !enabled {
        Color::from_rgb(102, 102, 102)
    } else if t.toggled {
        Color::WHITE
    } else {
        el.style().foreground
    };
    super::button::paint_chrome(
        renderer,
        rect,
        bg,
        border,
        &t.label,
        &el.style().font,
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerButton;

    #[test]
    fn click_flips_latch() {
        let mut ui = Ui::new(300.0, 200.0);
        let states = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let states_in = states.clone();
        let toggle = ToggleButton::new("Mute")
            .on_toggle(move |_, v| states_in.borrow_mut().push(v))
            .spawn(&mut ui);
        ui.set_bounds(toggle, 0.0, 0.0, 100.0, 30.0);
        ui.add_child(ui.root(), toggle).unwrap();

        ui.pointer_button(5.0, 5.0, PointerButton::Primary, true);
        ui.pointer_button(5.0, 5.0, PointerButton::Primary, false);
        assert!(ToggleButton::is_toggled(&ui, toggle));

        ui.pointer_button(5.0, 5.0, PointerButton::Primary, true);
        ui.pointer_button(5.0, 5.0, PointerButton::Primary, false);
        assert!(!ToggleButton::is_toggled(&ui, toggle));
        assert_eq!(*states.borrow(), vec![true, false]);
    }
}
