use super::button::{self, Button};
use super::{Interaction, Widget};
use crate::layout::{ColumnLayout, RowLayout};
use crate::{Color, ElementId, Event, EventKind, Renderer, Ui, Vec2};

/// Horizontal bar that hosts [`MenuItem`]s: a plain container with a
/// zero-spacing row layout, 30 px tall.
pub fn menu_bar(ui: &mut Ui) -> ElementId {
    let bar = ui.spawn(Widget::Panel);
    ui.set_layout(bar, RowLayout::new(0.0));
    ui.set_bounds(bar, 0.0, 0.0, 100.0, 30.0);
    bar
}

/// Bar entry that toggles a dropdown of actions. The dropdown is a hidden
/// column container; showing attaches it to the item's parent just below
/// the item, hiding detaches it again, so it overlays siblings instead of
/// being clipped into the bar.
pub struct MenuItem {
    pub(crate) label: String,
    pub(crate) interaction: Interaction,
    pub(crate) dropdown: Option<ElementId>,
    pub(crate) open: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        MenuItem {
            label: label.into(),
            interaction: Interaction::default(),
            dropdown: None,
            open: false,
        }
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let id = ui.spawn(Widget::MenuItem(self));
        ui.set_bounds(id, 0.0, 0.0, 80.0, 30.0);
        id
    }

    /// Appends an action to the dropdown, creating the dropdown on first
    /// use. The entry closes the dropdown after running `action`.
    pub fn add_entry(
        ui: &mut Ui,
        id: ElementId,
        label: impl Into<String>,
        action: impl Fn(&mut Ui) + 'static,
    ) {
        let dropdown = match &ui[id].widget {
            Widget::MenuItem(item) => item.dropdown,
            _ => {
                log::warn!("MenuItem::add_entry: {id:?} is not a menu item");
                return;
            }
        };
        let dropdown = match dropdown {
            Some(d) if ui.is_alive(d) => d,
            _ => {
                let d = ui.spawn(Widget::Panel);
                ui.set_layout(d, ColumnLayout::new(0.0));
                ui.set_visible(d, false);
                *ui.style_mut(d) = crate::Style::new()
                    .background(Color::from_rgb(77, 77, 77))
                    .border(1.0, Color::GRAY);
                if let Widget::MenuItem(item) = ui.widget_mut(id) {
                    item.dropdown = Some(d);
                }
                d
            }
        };

        let entry = Button::new(label)
            .on_click(move |ui| {
                action(ui);
                MenuItem::hide(ui, id);
            })
            .spawn(ui);
        ui.set_bounds(entry, 0.0, 0.0, 150.0, 25.0);
        ui.attach(dropdown, entry);
    }

    pub fn is_open(ui: &Ui, id: ElementId) -> bool {
        match &ui[id].widget {
            Widget::MenuItem(item) => item.open,
            _ => false,
        }
    }

    pub fn dropdown(ui: &Ui, id: ElementId) -> Option<ElementId> {
        match &ui[id].widget {
            Widget::MenuItem(item) => item.dropdown,
            _ => None,
        }
    }

    /// Shows the dropdown below the item, attached to the item's parent.
    /// Without a parent there is nowhere to overlay, so this is a no-op.
    pub fn show(ui: &mut Ui, id: ElementId) {
        let (dropdown, x, y, height) = {
            let el = &ui[id];
            let Widget::MenuItem(item) = &el.widget else {
                return;
            };
            let Some(dropdown) = item.dropdown else {
                return;
            };
            (dropdown, el.x(), el.y(), el.height())
        };
        if let Widget::MenuItem(item) = ui.widget_mut(id) {
            item.open = true;
        }
        ui.set_visible(dropdown, true);
        let entries = ui.children(dropdown).len();
        ui.set_bounds(dropdown, x, y + height, 150.0, entries as f32 * 25.0);
        if let Some(parent) = ui.parent(id) {
            if let Err(err) = ui.add_child(parent, dropdown) {
                log::warn!("MenuItem::show: could not attach dropdown: {err}");
                return;
            }
        }
        ui.layout_element(dropdown);
    }

    pub fn hide(ui: &mut Ui, id: ElementId) {
        let Widget::MenuItem(item) = ui.widget_mut(id) else {
            return;
        };
        let Some(dropdown) = item.dropdown else {
            item.open = false;
            return;
        };
        item.open = false;
        ui.set_visible(dropdown, false);
        if let Some(parent) = ui.parent(dropdown) {
            ui.remove_child(parent, dropdown);
        }
    }
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if !ui[id].is_enabled() {
        return;
    }
    let Widget::MenuItem(item) = ui.widget_mut(id) else {
        return;
    };
    let changed = item.interaction.observe(&event.kind);
    let toggle = matches!(event.kind, EventKind::Click { .. }).then_some(item.open);

    if changed {
        ui.mark_dirty(id);
    }
    match toggle {
        Some(true) => MenuItem::hide(ui, id),
        Some(false) => MenuItem::show(ui, id),
        None => {}
    }
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let Widget::MenuItem(item) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = super::draw_rect(ui, id, offset);

    let bg = if !el.is_enabled() {
        Color::from_rgb(51, 51, 51)
    } else if item.interaction.pressed {
        Color::from_rgb(51, 51, 64)
    } else if item.interaction.hovered {
        Color::from_rgb(89, 89, 89)
    } else {
        Color::from_rgb(64, 64, 64)
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
    button::paint_chrome(
        renderer,
        rect,
        bg,
        (1.0, border),
        &item.label,
        &el.style().font,
        text_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerButton;

    fn click(ui: &mut Ui, x: f32, y: f32) {
        ui.pointer_button(x, y, PointerButton::Primary, true);
        ui.pointer_button(x, y, PointerButton::Primary, false);
    }

    fn bar_with_item(ui: &mut Ui) -> (ElementId, ElementId) {
        let bar = menu_bar(ui);
        ui.set_width(bar, 300.0);
        ui.add_child(ui.root(), bar).unwrap();
        let item = MenuItem::new("File").spawn(ui);
        ui.add_child(bar, item).unwrap();
        ui.layout();
        (bar, item)
    }

    #[test]
    fn click_toggles_dropdown() {
        let mut ui = Ui::new(400.0, 300.0);
        let (bar, item) = bar_with_item(&mut ui);
        MenuItem::add_entry(&mut ui, item, "Open", |_| {});
        MenuItem::add_entry(&mut ui, item, "Quit", |_| {});

        click(&mut ui, 10.0, 10.0);
        assert!(MenuItem::is_open(&ui, item));
        let dropdown = MenuItem::dropdown(&ui, item).unwrap();
        assert_eq!(ui.parent(dropdown), Some(bar));
        assert!(ui[dropdown].is_visible());
        assert_eq!(ui[dropdown].height(), 50.0);
        // Placed right under the item.
        assert_eq!(ui[dropdown].y(), 30.0);

        click(&mut ui, 10.0, 10.0);
        assert!(!MenuItem::is_open(&ui, item));
        assert_eq!(ui.parent(dropdown), None);
    }

    #[test]
    fn entry_runs_action_and_closes() {
        let mut ui = Ui::new(400.0, 300.0);
        let (_bar, item) = bar_with_item(&mut ui);
        let ran = std::rc::Rc::new(std::cell::Cell::new(false));
        let ran_in = ran.clone();
        MenuItem::add_entry(&mut ui, item, "Open", move |_| ran_in.set(true));

        click(&mut ui, 10.0, 10.0);
        let dropdown = MenuItem::dropdown(&ui, item).unwrap();
        let entry = ui.children(dropdown)[0];
        let (ex, ey) = (ui.absolute_x(entry) + 5.0, ui.absolute_y(entry) + 5.0);
        click(&mut ui, ex, ey);

        assert!(ran.get());
        assert!(!MenuItem::is_open(&ui, item));
        assert!(!ui[dropdown].is_visible());
    }

    #[test]
    fn item_without_entries_stays_closed() {
        let mut ui = Ui::new(400.0, 300.0);
        let (_bar, item) = bar_with_item(&mut ui);
        click(&mut ui, 10.0, 10.0);
        // `open` is only set when a dropdown exists to show.
        assert!(!MenuItem::is_open(&ui, item));
    }
}
