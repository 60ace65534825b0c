use std::rc::Rc;

use unicode_segmentation::UnicodeSegmentation;

use super::{Widget, draw_rect};
use crate::{Color, ElementId, Event, EventKind, Key, Renderer, TextAlign, Ui, Vec2};

const BLINK_INTERVAL: f32 = 1.0;

/// Single-line text input. The caret is a byte index that always sits on a
/// grapheme boundary, so arrows and deletion treat emoji and combining marks
/// as one unit. The caret blink accumulates the frame delta; no wall clock.
pub struct TextField {
    pub(crate) text: String,
    pub(crate) cursor: usize,
    pub(crate) placeholder: String,
    pub(crate) on_change: Option<Rc<dyn Fn(&mut Ui, &str)>>,
    pub(crate) blink_elapsed: f32,
    pub(crate) cursor_visible: bool,
}

impl TextField {
    pub fn new() -> Self {
        TextField {
            text: String::new(),
            cursor: 0,
            placeholder: String::new(),
            on_change: None,
            blink_elapsed: 0.0,
            cursor_visible: true,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn on_change(mut self, handler: impl Fn(&mut Ui, &str) + 'static) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let id = ui.spawn(Widget::TextField(self));
        ui.set_bounds(id, 0.0, 0.0, 200.0, 30.0);
        id
    }

    pub fn text(ui: &Ui, id: ElementId) -> &str {
        match &ui[id].widget {
            Widget::TextField(tf) => &tf.text,
            _ => {
                log::warn!("TextField::text: {id:?} is not a text field");
                ""
            }
        }
    }

    /// Replaces the content and puts the caret at the end. Does not fire
    /// `on_change`; that is reserved for user edits.
    pub fn set_text(ui: &mut Ui, id: ElementId, text: impl Into<String>) {
        if let Widget::TextField(tf) = ui.widget_mut(id) {
            tf.text = text.into();
            tf.cursor = tf.text.len();
            ui.mark_dirty(id);
        } else {
            log::warn!("TextField::set_text: {id:?} is not a text field");
        }
    }

    pub fn cursor(ui: &Ui, id: ElementId) -> usize {
        match &ui[id].widget {
            Widget::TextField(tf) => tf.cursor,
            _ => 0,
        }
    }

    pub fn set_placeholder(ui: &mut Ui, id: ElementId, placeholder: impl Into<String>) {
        if let Widget::TextField(tf) = ui.widget_mut(id) {
            tf.placeholder = placeholder.into();
            ui.mark_dirty(id);
        }
    }

    pub fn set_on_change(ui: &mut Ui, id: ElementId, handler: impl Fn(&mut Ui, &str) + 'static) {
        if let Widget::TextField(tf) = ui.widget_mut(id) {
            tf.on_change = Some(Rc::new(handler));
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        TextField::new()
    }
}

fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            return i;
        }
    }
    text.len()
}

pub(crate) fn handle(ui: &mut Ui, id: ElementId, event: &mut Event) {
    if !ui[id].is_enabled() {
        return;
    }
    match &event.kind {
        EventKind::PointerDown { .. } => {
            // Focus itself is assigned by the context before this event is
            // delivered; the field only restarts the caret blink.
            if let Widget::TextField(tf) = ui.widget_mut(id) {
                tf.blink_elapsed = 0.0;
                tf.cursor_visible = true;
                ui.mark_dirty(id);
            }
        }
        EventKind::KeyDown { key, .. } => {
            if !ui.is_focused(id) {
                return;
            }
            let key = *key;
            key_down(ui, id, key);
        }
        _ => {}
    }
}

fn key_down(ui: &mut Ui, id: ElementId, key: Key) {
    let Widget::TextField(tf) = ui.widget_mut(id) else {
        return;
    };
    tf.blink_elapsed = 0.0;
    tf.cursor_visible = true;

    let mut edited = false;
    let mut moved = false;
    match key {
        Key::Backspace => {
            if tf.cursor > 0 {
                let prev = prev_grapheme_boundary(&tf.text, tf.cursor);
                tf.text.replace_range(prev..tf.cursor, "");
                tf.cursor = prev;
                edited = true;
            }
        }
        Key::Delete => {
            if tf.cursor < tf.text.len() {
                let next = next_grapheme_boundary(&tf.text, tf.cursor);
                tf.text.replace_range(tf.cursor..next, "");
                edited = true;
            }
        }
        Key::ArrowLeft => {
            if tf.cursor > 0 {
                tf.cursor = prev_grapheme_boundary(&tf.text, tf.cursor);
                moved = true;
            }
        }
        Key::ArrowRight => {
            if tf.cursor < tf.text.len() {
                tf.cursor = next_grapheme_boundary(&tf.text, tf.cursor);
                moved = true;
            }
        }
        Key::Home => {
            tf.cursor = 0;
            moved = true;
        }
        Key::End => {
            tf.cursor = tf.text.len();
            moved = true;
        }
        Key::Character(c) if !c.is_control() => {
            tf.text.insert(tf.cursor, c);
            tf.cursor += c.len_utf8();
            edited = true;
        }
        Key::Space => {
            tf.text.insert(tf.cursor, ' ');
            tf.cursor += 1;
            edited = true;
        }
        _ => {}
    }

    let cb = if edited { tf.on_change.clone() } else { None };
    let text = if edited { tf.text.clone() } else { String::new() };
    if edited || moved {
        ui.mark_dirty(id);
    }
    if let Some(cb) = cb {
        cb(ui, &text);
    }
}

pub(crate) fn update(ui: &mut Ui, id: ElementId, dt: f32) {
    if !ui.is_focused(id) {
        return;
    }
    let Widget::TextField(tf) = ui.widget_mut(id) else {
        return;
    };
    tf.blink_elapsed += dt;
    if tf.blink_elapsed >= BLINK_INTERVAL {
        tf.blink_elapsed = 0.0;
        tf.cursor_visible = !tf.cursor_visible;
        ui.mark_dirty(id);
    }
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    let Widget::TextField(tf) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = draw_rect(ui, id, offset);
    let focused = ui.is_focused(id);

    let bg = if focused {
        Color::WHITE
    } else {
        Color::from_rgb(242, 242, 242)
    };
    renderer.fill_rect(rect, bg, 4.0);

    let (border_color, border_width) = if focused {
        (Color::from_rgb(51, 153, 204), 2.0)
    } else {
        (Color::GRAY, 1.0)
    };
    renderer.stroke_rect(rect, border_width, border_color, 4.0);

    let font = &el.style().font;
    let text_pos = Vec2::new(rect.x + 5.0, rect.y + rect.h / 2.0);
    if !tf.text.is_empty() {
        renderer.text(
            text_pos,
            &tf.text,
            font,
            Color::BLACK,
            TextAlign::LEFT | TextAlign::MIDDLE,
        );
    } else if !tf.placeholder.is_empty() {
        renderer.text(
            text_pos,
            &tf.placeholder,
            font,
            Color::from_rgb(153, 153, 153),
            TextAlign::LEFT | TextAlign::MIDDLE,
        );
    }

    if focused && tf.cursor_visible {
        let before = &tf.text[..tf.cursor];
        let caret_offset = renderer.measure_text(before, font).width;
        renderer.line(
            Vec2::new(text_pos.x + caret_offset, rect.y + 5.0),
            Vec2::new(text_pos.x + caret_offset, rect.y + rect.h - 5.0),
            1.0,
            Color::BLACK,
        );
    }
}
