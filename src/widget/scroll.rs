use super::{Widget, draw_rect, paint_base};
use crate::{Color, ElementId, Event, EventKind, Rect, Renderer, Size, Ui, Vec2};

const WHEEL_STEP: f32 = 20.0;
const SCROLLBAR_WIDTH: f32 = 8.0;

/// Container that clips its children to its bounds and shifts their
/// rendering by a scroll offset. Wheel events scroll vertically; offsets are
/// clamped so content can never be scrolled past its extent. The offset
/// moves drawing only; hit-testing keeps using the laid-out positions.
pub struct ScrollContainer {
    pub(crate) scroll: Vec2,
    pub(crate) content: Size,
    pub(crate) show_scrollbars: bool,
}

impl ScrollContainer {
    pub fn new() -> Self {
        ScrollContainer {
            scroll: Vec2::ZERO,
            content: Size::default(),
            show_scrollbars: true,
        }
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        ui.spawn(Widget::Scroll(self))
    }

    pub fn scroll_x(ui: &Ui, id: ElementId) -> f32 {
        match &ui[id].widget {
            Widget::Scroll(s) => s.scroll.x,
            _ => 0.0,
        }
    }

    pub fn scroll_y(ui: &Ui, id: ElementId) -> f32 {
        match &ui[id].widget {
            Widget::Scroll(s) => s.scroll.y,
            _ => 0.0,
        }
    }

    pub fn content_size(ui: &Ui, id: ElementId) -> Size {
        match &ui[id].widget {
            Widget::Scroll(s) => s.content,
            _ => Size::default(),
        }
    }

    pub fn set_scroll_x(ui: &mut Ui, id: ElementId, x: f32) {
        let width = ui[id].width();
        if let Widget::Scroll(s) = ui.widget_mut(id) {
            let max = (s.content.width - width).max(0.0);
            s.scroll.x = x.clamp(0.0, max);
            ui.mark_dirty(id);
        } else {
            log::warn!("ScrollContainer::set_scroll_x: {id:?} is not a scroll container");
        }
    }

    pub fn set_scroll_y(ui: &mut Ui, id: ElementId, y: f32) {
        let height = ui[id].height();
        if let Widget::Scroll(s) = ui.widget_mut(id) {
            let max = (s.content.height - height).max(0.0);
            s.scroll.y = y.clamp(0.0, max);
            ui.mark_dirty(id);
        } else {
            log::warn!("ScrollContainer::set_scroll_y: {id:?} is not a scroll container");
        }
    }

    pub fn set_show_scrollbars(ui: &mut Ui, id: ElementId, show: bool) {
        if let Widget::Scroll(s) = ui.widget_mut(id) {
            s.show_scrollbars = show;
            ui.mark_dirty(id);
        }
    }
}

impl Default for ScrollContainer {
    fn default() -> Self {
        ScrollContainer::new()
    }
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if let EventKind::Wheel { delta, .. } = event.kind {
        let height = ui[id].height();
        if let Widget::Scroll(s) = ui.widget_mut(id) {
            let max = (s.content.height - height).max(0.0);
            s.scroll.y = (s.scroll.y + delta.y * WHEEL_STEP).clamp(0.0, max);
            ui.mark_dirty(id);
        }
    }
}

/// Content extent: the furthest bottom-right corner any visible child
/// reaches, in the container's local space.
pub(crate) fn after_layout(ui: &mut Ui, id: ElementId) {
    let mut content = Size::default();
    for &child in ui.children(id) {
        let Some(el) = ui.get(child) else {
            continue;
        };
        if !el.is_visible() {
            continue;
        }
        content.width = content.width.max(el.x() + el.width());
        content.height = content.height.max(el.y() + el.height());
    }
    let (w, h) = (ui[id].width(), ui[id].height());
    if let Widget::Scroll(s) = ui.widget_mut(id) {
        s.content = content;
        // Re-clamp in case the content shrank under the current offset.
        s.scroll.x = s.scroll.x.clamp(0.0, (content.width - w).max(0.0));
        s.scroll.y = s.scroll.y.clamp(0.0, (content.height - h).max(0.0));
    }
}

pub(crate) fn render(ui: &mut Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    paint_base(&*ui, id, renderer, offset);

    let rect = draw_rect(&*ui, id, offset);
    let (scroll, content, show_scrollbars) = match &ui[id].widget {
        Widget::Scroll(s) => (s.scroll, s.content, s.show_scrollbars),
        _ => return,
    };

    renderer.save();
    renderer.push_clip(rect);
    let child_offset = Vec2::new(offset.x - scroll.x, offset.y - scroll.y);
    for child in ui.children(id).to_vec() {
        if ui.get(child).is_some_and(|c| c.is_visible()) {
            ui.render_element(child, renderer, child_offset);
        }
    }
    renderer.pop_clip();
    renderer.restore();

    if show_scrollbars {
        draw_scrollbars(renderer, rect, scroll, content);
    }
}

fn draw_scrollbars(renderer: &mut dyn Renderer, rect: Rect, scroll: Vec2, content: Size) {
    let thumb_color = Color::from_rgba(102, 102, 102, 178);
    let track_color = Color::from_rgba(51, 51, 51, 76);

    if content.height > rect.h {
        let track_height = rect.h;
        let thumb_height = (rect.h / content.height * track_height).max(20.0);
        let thumb_y = scroll.y / (content.height - rect.h) * (track_height - thumb_height);
        renderer.fill_rect(
            Rect::new(rect.x + rect.w - SCROLLBAR_WIDTH, rect.y, SCROLLBAR_WIDTH, track_height),
            track_color,
            4.0,
        );
        renderer.fill_rect(
            Rect::new(
                rect.x + rect.w - SCROLLBAR_WIDTH,
                rect.y + thumb_y,
                SCROLLBAR_WIDTH,
                thumb_height,
            ),
            thumb_color,
            4.0,
        );
    }

    if content.width > rect.w {
        let track_width = rect.w;
        let thumb_width = (rect.w / content.width * track_width).max(20.0);
        let thumb_x = scroll.x / (content.width - rect.w) * (track_width - thumb_width);
        renderer.fill_rect(
            Rect::new(rect.x, rect.y + rect.h - SCROLLBAR_WIDTH, track_width, SCROLLBAR_WIDTH),
            track_color,
            4.0,
        );
        renderer.fill_rect(
            Rect::new(
                rect.x + thumb_x,
                rect.y + rect.h - SCROLLBAR_WIDTH,
                thumb_width,
                SCROLLBAR_WIDTH,
            ),
            thumb_color,
            4.0,
        );
    }
}
