use super::button::Button;
use super::Widget;
use crate::layout::RowLayout;
use crate::{Color, ElementId, UiError, Ui};

/// Tab strip over a content area. Each tab is a button wired to
/// `switch_to`; exactly one content child is visible at a time. The bar and
/// the content area are re-anchored after every layout pass so the view can
/// be resized freely.
pub struct TabView {
    pub(crate) tab_bar: ElementId,
    pub(crate) content_area: ElementId,
    pub(crate) active: usize,
}

const BAR_HEIGHT: f32 = 30.0;

impl TabView {
    pub fn new(ui: &mut Ui) -> ElementId {
        let bar = ui.spawn(Widget::Panel);
        ui.set_layout(bar, RowLayout::new(2.0));
        ui.style_mut(bar).background = Color::from_rgb(51, 51, 51);

        let content = ui.spawn(Widget::Panel);
        ui.style_mut(content).background = Color::from_rgb(38, 38, 38);

        let view = ui.spawn(Widget::TabView(TabView {
            tab_bar: bar,
            content_area: content,
            active: 0,
        }));
        ui.attach(view, bar);
        ui.attach(view, content);

        let (w, h) = (ui[view].width(), ui[view].height());
        ui.set_bounds(bar, 0.0, 0.0, w, BAR_HEIGHT);
        ui.set_bounds(content, 0.0, BAR_HEIGHT, w, h - BAR_HEIGHT);
        view
    }

    /// Appends a tab button titled `title` and adopts `content` into the
    /// content area, visible only while its tab is active.
    pub fn add_tab(
        ui: &mut Ui,
        id: ElementId,
        title: impl Into<String>,
        content: ElementId,
    ) -> Result<(), UiError> {
        let (bar, area, active) = match &ui[id].widget {
            Widget::TabView(tv) => (tv.tab_bar, tv.content_area, tv.active),
            _ => {
                log::warn!("TabView::add_tab: {id:?} is not a tab view");
                return Ok(());
            }
        };

        let index = ui.children(bar).len();
        let tab = Button::new(title)
            .on_click(move |ui| TabView::switch_to(ui, id, index))
            .spawn(ui);
        ui.set_bounds(tab, 0.0, 0.0, 100.0, BAR_HEIGHT);
        ui.attach(bar, tab);

        ui.add_child(area, content)?;
        ui.set_visible(content, index == active);
        ui.layout_element(id);
        Ok(())
    }

    pub fn switch_to(ui: &mut Ui, id: ElementId, index: usize) {
        let area = match &ui[id].widget {
            Widget::TabView(tv) => tv.content_area,
            _ => {
                log::warn!("TabView::switch_to: {id:?} is not a tab view");
                return;
            }
        };
        let panes = ui.children(area).to_vec();
        if index >= panes.len() {
            return;
        }
        for (i, pane) in panes.into_iter().enumerate() {
            ui.set_visible(pane, i == index);
        }
        if let Widget::TabView(tv) = ui.widget_mut(id) {
            tv.active = index;
        }
        ui.mark_dirty(id);
    }

    pub fn active(ui: &Ui, id: ElementId) -> usize {
        match &ui[id].widget {
            Widget::TabView(tv) => tv.active,
            _ => 0,
        }
    }

    pub fn tab_bar(ui: &Ui, id: ElementId) -> Option<ElementId> {
        match &ui[id].widget {
            Widget::TabView(tv) => Some(tv.tab_bar),
            _ => None,
        }
    }

    pub fn content_area(ui: &Ui, id: ElementId) -> Option<ElementId> {
        match &ui[id].widget {
            Widget::TabView(tv) => Some(tv.content_area),
            _ => None,
        }
    }
}

pub(crate) fn after_layout(ui: &mut Ui, id: ElementId) {
    let (bar, area) = match &ui[id].widget {
        Widget::TabView(tv) => (tv.tab_bar, tv.content_area),
        _ => return,
    };
    let (w, h) = (ui[id].width(), ui[id].height());
    ui.set_bounds(bar, 0.0, 0.0, w, BAR_HEIGHT);
    ui.set_bounds(area, 0.0, BAR_HEIGHT, w, h - BAR_HEIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerButton;

    fn tabbed(ui: &mut Ui) -> (ElementId, [ElementId; 3]) {
        let view = TabView::new(ui);
        ui.set_bounds(view, 0.0, 0.0, 400.0, 300.0);
        ui.add_child(ui.root(), view).unwrap();
        let mut panes = [ElementId::default(); 3];
        for (i, pane) in panes.iter_mut().enumerate() {
            let p = ui.spawn(Widget::Panel);
            TabView::add_tab(ui, view, format!("Tab {i}"), p).unwrap();
            *pane = p;
        }
        (view, panes)
    }

    #[test]
    fn only_active_pane_is_visible() {
        let mut ui = Ui::new(500.0, 400.0);
        let (view, [a, b, c]) = tabbed(&mut ui);
        assert_eq!(TabView::active(&ui, view), 0);
        assert!(ui[a].is_visible());
        assert!(!ui[b].is_visible());
        assert!(!ui[c].is_visible());

        TabView::switch_to(&mut ui, view, 2);
        assert!(!ui[a].is_visible());
        assert!(!ui[b].is_visible());
        assert!(ui[c].is_visible());
    }

    #[test]
    fn clicking_a_tab_switches() {
        let mut ui = Ui::new(500.0, 400.0);
        let (view, [_a, b, _c]) = tabbed(&mut ui);
        ui.layout();

        // Second tab button sits after the first (100 wide, 2 spacing).
        ui.pointer_button(150.0, 15.0, PointerButton::Primary, true);
        ui.pointer_button(150.0, 15.0, PointerButton::Primary, false);
        assert_eq!(TabView::active(&ui, view), 1);
        assert!(ui[b].is_visible());
    }

    #[test]
    fn out_of_range_switch_is_a_no_op() {
        let mut ui = Ui::new(500.0, 400.0);
        let (view, [a, ..]) = tabbed(&mut ui);
        TabView::switch_to(&mut ui, view, 9);
        assert_eq!(TabView::active(&ui, view), 0);
        assert!(ui[a].is_visible());
    }

    #[test]
    fn bar_and_content_track_view_size() {
        let mut ui = Ui::new(500.0, 400.0);
        let (view, _) = tabbed(&mut ui);
        ui.set_bounds(view, 0.0, 0.0, 320.0, 200.0);
        ui.layout();

        let bar = TabView::tab_bar(&ui, view).unwrap();
        let area = TabView::content_area(&ui, view).unwrap();
        assert_eq!(ui[bar].width(), 320.0);
        assert_eq!(ui[area].bounds(), crate::Rect::new(0.0, 30.0, 320.0, 170.0));
    }
}
