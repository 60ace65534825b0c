use std::cell::RefCell;
use std::rc::Rc;

use super::{Interaction, Widget, draw_rect};
use crate::{Color, ElementId, Event, EventKind, Renderer, TextAlign, Ui, Vec2};

/// Caller-owned, cheaply cloneable membership list for a set of mutually
/// exclusive radio buttons. Buttons register themselves when spawned; there
/// is no global registry, the application decides how long a group lives.
#[derive(Clone, Default)]
pub struct RadioGroup {
    members: Rc<RefCell<Vec<ElementId>>>,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> Vec<ElementId> {
        self.members.borrow().clone()
    }

    /// The currently checked member, if any.
    pub fn selected(&self, ui: &Ui) -> Option<ElementId> {
        self.members
            .borrow()
            .iter()
            .copied()
            .find(|&id| RadioButton::is_checked(ui, id))
    }

    fn register(&self, id: ElementId) {
        let mut members = self.members.borrow_mut();
        if !members.contains(&id) {
            members.push(id);
        }
    }
}

/// Radio button: a circle with a dot when selected. Checking one member of
/// a group unchecks every other member; unchecking never touches siblings.
pub struct RadioButton {
    pub(crate) label: String,
    pub(crate) checked: bool,
    pub(crate) interaction: Interaction,
    pub(crate) group: RadioGroup,
}

impl RadioButton {
    pub fn new(label: impl Into<String>, group: &RadioGroup) -> Self {
        RadioButton {
            label: label.into(),
            checked: false,
            interaction: Interaction::default(),
            group: group.clone(),
        }
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let group = self.group.clone();
        let id = ui.spawn(Widget::Radio(self));
        group.register(id);
        ui.set_bounds(id, 0.0, 0.0, 20.0, 20.0);
        id
    }

    pub fn is_checked(ui: &Ui, id: ElementId) -> bool {
        match &ui[id].widget {
            Widget::Radio(r) => r.checked,
            _ => {
                log::warn!("RadioButton::is_checked: {id:?} is not a radio button");
                false
            }
        }
    }

    pub fn set_checked(ui: &mut Ui, id: ElementId, checked: bool) {
        let group = match &ui[id].widget {
            Widget::Radio(r) => r.group.clone(),
            _ => {
                log::warn!("RadioButton::set_checked: {id:?} is not a radio button");
                return;
            }
        };
        if checked {
            for member in group.members() {
                if member == id || !ui.is_alive(member) {
                    continue;
                }
                if let Widget::Radio(r) = ui.widget_mut(member) {
                    if r.checked {
                        r.checked = false;
                        ui.mark_dirty(member);
                    }
                }
            }
        }
        if let Widget::Radio(r) = ui.widget_mut(id) {
            r.checked = checked;
            ui.mark_dirty(id);
        }
    }
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if !ui[id].is_enabled() {
        return;
    }
    let Widget::Radio(r) = ui.widget_mut(id) else {
        return;
    };
    let changed = r.interaction.observe(&event.kind);
    if changed {
        ui.mark_dirty(id);
    }
    if matches!(event.kind, EventKind::Click { .. }) {
        RadioButton::set_checked(ui, id, true);
    }
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let Widget::Radio(r) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = draw_rect(ui, id, offset);
    let enabled = el.is_enabled();

    let center = rect.center();
    let radius = rect.w.min(rect.h) / 2.0;

    let bg = if enabled {
        Color::WHITE
    } else {
        Color::from_rgb(179, 179, 179)
    };
    renderer.fill_circle(center, radius, bg);

    let border = if enabled {
        Color::GRAY
    } else {
        Color::from_rgb(102, 102, 102)
    };
    renderer.stroke_circle(center, radius, 1.0, border);

    if r.checked {
        let dot = if enabled {
            Color::from_rgb(51, 153, 204)
        } else {
            Color::from_rgb(102, 102, 102)
        };
        renderer.fill_circle(center, radius * 0.6, dot);
    }

    if !r.label.is_empty() {
        let text_color = if enabled {
            el.style().foreground
        } else {
            Color::GRAY
        };
        renderer.text(
            Vec2::new(rect.x + rect.w + 5.0, rect.y + rect.h / 2.0),
            &r.label,
            &el.style().font,
            text_color,
            TextAlign::LEFT | TextAlign::MIDDLE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerButton;

    fn three_radios(ui: &mut Ui) -> (RadioGroup, [ElementId; 3]) {
        let group = RadioGroup::new();
        let mut ids = [ElementId::default(); 3];
        for (i, id) in ids.iter_mut().enumerate() {
            let radio = RadioButton::new(format!("r{i}"), &group).spawn(ui);
            ui.set_bounds(radio, 10.0, 10.0 + 30.0 * i as f32, 20.0, 20.0);
            ui.add_child(ui.root(), radio).unwrap();
            *id = radio;
        }
        (group, ids)
    }

    #[test]
    fn checking_one_unchecks_the_rest() {
        let mut ui = Ui::new(200.0, 200.0);
        let (group, [a, b, c]) = three_radios(&mut ui);

        RadioButton::set_checked(&mut ui, a, true);
        RadioButton::set_checked(&mut ui, b, true);
        assert!(!RadioButton::is_checked(&ui, a));
        assert!(RadioButton::is_checked(&ui, b));
        assert!(!RadioButton::is_checked(&ui, c));
        assert_eq!(group.selected(&ui), Some(b));
    }

    #[test]
    fn unchecking_leaves_siblings_alone() {
        let mut ui = Ui::new(200.0, 200.0);
        let (_, [a, b, _c]) = three_radios(&mut ui);

        RadioButton::set_checked(&mut ui, a, true);
        RadioButton::set_checked(&mut ui, b, false);
        assert!(RadioButton::is_checked(&ui, a));
        assert!(!RadioButton::is_checked(&ui, b));
    }

    #[test]
    fn click_selects_exclusively() {
        let mut ui = Ui::new(200.0, 200.0);
        let (_, [a, b, _c]) = three_radios(&mut ui);
        RadioButton::set_checked(&mut ui, a, true);

        ui.pointer_button(15.0, 45.0, PointerButton::Primary, true);
        ui.pointer_button(15.0, 45.0, PointerButton::Primary, false);
        assert!(!RadioButton::is_checked(&ui, a));
        assert!(RadioButton::is_checked(&ui, b));
    }

    #[test]
    fn groups_are_independent() {
        let mut ui = Ui::new(200.0, 200.0);
        let (_, [a, _b, _c]) = three_radios(&mut ui);
        let other = RadioGroup::new();
        let lone = RadioButton::new("solo", &other).spawn(&mut ui);
        ui.add_child(ui.root(), lone).unwrap();

        RadioButton::set_checked(&mut ui, a, true);
        RadioButton::set_checked(&mut ui, lone, true);
        assert!(RadioButton::is_checked(&ui, a));
        assert!(RadioButton::is_checked(&ui, lone));
    }
}
