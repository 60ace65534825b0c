use std::rc::Rc;

use super::{Interaction, Widget, draw_rect};
use crate::{Color, ElementId, Event, EventKind, Renderer, TextAlign, Ui, Vec2};

/// Checkbox with an optional side label. Toggles itself on click and then
/// reports the new state through `on_change`.
pub struct Checkbox {
    pub(crate) label: String,
    pub(crate) checked: bool,
    pub(crate) interaction: Interaction,
    pub(crate) on_change: Option<Rc<dyn Fn(&mut Ui, bool)>>,
}

impl Checkbox {
    pub fn new(label: impl Into<String>) -> Self {
        Checkbox {
            label: label.into(),
            checked: false,
            interaction: Interaction::default(),
            on_change: None,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&mut Ui, bool) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let id = ui.spawn(Widget::Checkbox(self));
        ui.set_bounds(id, 0.0, 0.0, 20.0, 20.0);
        id
    }

    pub fn is_checked(ui: &Ui, id: ElementId) -> bool {
        match &ui[id].widget {
            Widget::Checkbox(c) => c.checked,
            _ => {
                log::warn!("Checkbox::is_checked: {id:?} is not a checkbox");
                false
            }
        }
    }

    pub fn set_checked(ui: &mut Ui, id: ElementId, checked: bool) {
        if let Widget::Checkbox(c) = ui.widget_mut(id) {
            c.checked = checked;
            ui.mark_dirty(id);
        } else {
            log::warn!("Checkbox::set_checked: {id:?} is not a checkbox");
        }
    }
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if !ui[id].is_enabled() {
        return;
    }
    let Widget::Checkbox(c) = ui.widget_mut(id) else {
        return;
    };
    let mut changed = c.interaction.observe(&event.kind);
    let mut notify = None;
    if matches!(event.kind, EventKind::Click { .. }) {
        c.checked = !c.checked;
        notify = Some((c.on_change.clone(), c.checked));
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
    let Widget::Checkbox(c) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = draw_rect(ui, id, offset);
    let enabled = el.is_enabled();

    let bg = if enabled {
        Color::WHITE
    } else {
        Color::from_rgb(179, 179, 179)
    };
    renderer.fill_rect(rect, bg, 2.0);

    let border = if enabled {
        Color::GRAY
    } else {
        Color::from_rgb(102, 102, 102)
    };
    renderer.stroke_rect(rect, 1.0, border, 2.0);

    if c.checked {
        let check = if enabled {
            Color::from_rgb(51, 153, 204)
        } else {
            Color::from_rgb(102, 102, 102)
        };
        let margin = 4.0;
        renderer.line(
            Vec2::new(rect.x + margin, rect.y + rect.h / 2.0),
            Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h - margin),
            2.0,
            check,
        );
        renderer.line(
            Vec2::new(rect.x + rect.w / 2.0, rect.y + rect.h - margin),
            Vec2::new(rect.x + rect.w - margin, rect.y + margin),
            2.0,
            check,
        );
    }

    if !c.label.is_empty() {
        let text_color = if enabled {
            el.style().foreground
        } else {
            Color::GRAY
        };
        renderer.text(
            Vec2::new(rect.x + rect.w + 5.0, rect.y + rect.h / 2.0),
            &c.label,
            &el.style().font,
            text_color,
            TextAlign::LEFT | TextAlign::MIDDLE,
        );
    }
}
