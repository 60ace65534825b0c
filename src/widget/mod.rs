//! Concrete widgets. Every widget is a variant of [`Widget`] stored on a
//! common element record; per-kind behavior lives in free functions keyed by
//! [`WidgetKind`], and the hover/press bookkeeping every clickable widget
//! needs is factored into [`Interaction`] instead of a base class.

pub mod button;
pub mod checkbox;
pub mod label;
pub mod menu;
pub mod progress;
pub mod radio;
pub mod scroll;
pub mod slider;
pub mod tabs;
pub mod textfield;
pub mod toggle;

pub use button::Button;
pub use checkbox::Checkbox;
pub use label::Label;
pub use menu::{MenuItem, menu_bar};
pub use progress::ProgressBar;
pub use radio::{RadioButton, RadioGroup};
pub use scroll::ScrollContainer;
pub use slider::{Orientation, Slider};
pub use tabs::TabView;
pub use textfield::TextField;
pub use toggle::ToggleButton;

use crate::{ElementId, Event, EventKind, Phase, Rect, Renderer, Ui, Vec2};

/// Plain container: background/border paint, children, optional layout
/// manager, nothing else.
pub fn panel(ui: &mut Ui) -> ElementId {
    ui.spawn(Widget::Panel)
}

/// Widget payload of an element. `Panel` is the plain container used for
/// grouping, menu bars and anything that only needs background, border and
/// children.
pub enum Widget {
    Panel,
    Label(Label),
    Button(Button),
    Checkbox(Checkbox),
    Radio(RadioButton),
    Toggle(ToggleButton),
    Slider(Slider),
    Progress(ProgressBar),
    TextField(TextField),
    Scroll(ScrollContainer),
    MenuItem(MenuItem),
    TabView(TabView),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    Panel,
    Label,
    Button,
    Checkbox,
    Radio,
    Toggle,
    Slider,
    Progress,
    TextField,
    Scroll,
    MenuItem,
    TabView,
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Panel => WidgetKind::Panel,
            Widget::Label(_) => WidgetKind::Label,
            Widget::Button(_) => WidgetKind::Button,
            Widget::Checkbox(_) => WidgetKind::Checkbox,
            Widget::Radio(_) => WidgetKind::Radio,
            Widget::Toggle(_) => WidgetKind::Toggle,
            Widget::Slider(_) => WidgetKind::Slider,
            Widget::Progress(_) => WidgetKind::Progress,
            Widget::TextField(_) => WidgetKind::TextField,
            Widget::Scroll(_) => WidgetKind::Scroll,
            Widget::MenuItem(_) => WidgetKind::MenuItem,
            Widget::TabView(_) => WidgetKind::TabView,
        }
    }
}

/// Hover/press state shared by clickable widgets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    pub pressed: bool,
}

impl Interaction {
    /// Feeds one pointer event into the tracker. Returns true when the
    /// visual state changed (the widget should mark itself dirty).
    pub fn observe(&mut self, kind: &EventKind) -> bool {
        match kind {
            EventKind::PointerEnter { .. } => {
                let changed = !self.hovered;
                self.hovered = true;
                changed
            }
            EventKind::PointerLeave { .. } => {
                let changed = self.hovered || self.pressed;
                self.hovered = false;
                self.pressed = false;
                changed
            }
            EventKind::PointerDown { .. } => {
                let changed = !self.pressed;
                self.pressed = true;
                changed
            }
            EventKind::PointerUp { .. } => {
                let changed = self.pressed;
                self.pressed = false;
                changed
            }
            _ => false,
        }
    }
}

/// Built-in widget behavior, invoked before user listeners at every
/// delivery. Runs only in the target and bubble phases so an ancestor (e.g.
/// a scroll container under a wheel event aimed at its content) acts exactly
/// once per propagation.
pub(crate) fn handle_event(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if event.phase() == Phase::Capture {
        return;
    }
    match ui[id].widget.kind() {
        WidgetKind::Button => button::handle(ui, id, event),
        WidgetKind::Checkbox => checkbox::handle(ui, id, event),
        WidgetKind::Radio => radio::handle(ui, id, event),
        WidgetKind::Toggle => toggle::handle(ui, id, event),
        WidgetKind::Slider => slider::handle(ui, id, event),
        WidgetKind::TextField => textfield::handle(ui, id, event),
        WidgetKind::Scroll => scroll::handle(ui, id, event),
        WidgetKind::MenuItem => menu::handle(ui, id, event),
        WidgetKind::Panel
        | WidgetKind::Label
        | WidgetKind::Progress
        | WidgetKind::TabView => {}
    }
}

/// Paints the element itself. Returns true when the widget also painted its
/// children (scroll containers clip and offset them).
pub(crate) fn render(ui: &mut Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) -> bool {
    match ui[id].widget.kind() {
        WidgetKind::Panel | WidgetKind::TabView => {
            paint_base(ui, id, renderer, offset);
            false
        }
        WidgetKind::Label => {
            label::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::Button => {
            button::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::Checkbox => {
            checkbox::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::Radio => {
            radio::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::Toggle => {
            toggle::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::Slider => {
            slider::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::Progress => {
            progress::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::TextField => {
            textfield::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::MenuItem => {
            menu::render(ui, id, renderer, offset);
            false
        }
        WidgetKind::Scroll => {
            scroll::render(ui, id, renderer, offset);
            true
        }
    }
}

/// Time-driven widget state (caret blink). Called once per element per
/// frame with the external delta time.
pub(crate) fn update(ui: &mut Ui, id: ElementId, dt: f32) {
    if ui[id].widget.kind() == WidgetKind::TextField {
        textfield::update(ui, id, dt);
    }
}

/// Post-layout hook, after the container's manager and all children have
/// run: scroll containers measure their content, tab views re-anchor their
/// bar and content area.
pub(crate) fn after_layout(ui: &mut Ui, id: ElementId) {
    match ui[id].widget.kind() {
        WidgetKind::Scroll => scroll::after_layout(ui, id),
        WidgetKind::TabView => tabs::after_layout(ui, id),
        _ => {}
    }
}

/// Default paint: background fill when it has any alpha, border when it has
/// width and alpha.
pub(crate) fn paint_base(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let el = &ui[id];
    let rect = Rect::new(
        ui.absolute_x(id) + offset.x,
        ui.absolute_y(id) + offset.y,
        el.width(),
        el.height(),
    );
    let style = el.style();
    if style.background.alpha() > 0 {
        renderer.fill_rect(rect, style.background, style.border_radius);
    }
    if style.border_width > 0.0 && style.border_color.alpha() > 0 {
        renderer.stroke_rect(rect, style.border_width, style.border_color, style.border_radius);
    }
}

/// Absolute draw rect of an element, shifted by the enclosing scroll offset.
pub(crate) fn draw_rect(ui: &Ui, id: ElementId, offset: Vec2) -> Rect {
    let el = &ui[id];
    Rect::new(
        ui.absolute_x(id) + offset.x,
        ui.absolute_y(id) + offset.y,
        el.width(),
        el.height(),
    )
}
