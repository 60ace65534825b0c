use super::{Widget, draw_rect, paint_base};
use crate::{ElementId, Renderer, TextAlign, Ui, Vec2};

/// Static text. The alignment flags pick the anchor point inside the padded
/// bounds; the backend anchors the glyph run around that point.
pub struct Label {
    pub(crate) text: String,
    pub(crate) align: TextAlign,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Label {
            text: text.into(),
            align: TextAlign::default(),
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn spawn(self, ui: &mut Ui) -> ElementId {
        let id = ui.spawn(Widget::Label(self));
        ui.set_bounds(id, 0.0, 0.0, 100.0, 20.0);
        id
    }

    pub fn text(ui: &Ui, id: ElementId) -> &str {
        match &ui[id].widget {
            Widget::Label(l) => &l.text,
            _ => {
                log::warn!("Label::text: {id:?} is not a label");
                ""
            }
        }
    }

    pub fn set_text(ui: &mut Ui, id: ElementId, text: impl Into<String>) {
        if let Widget::Label(l) = ui.widget_mut(id) {
            l.text = text.into();
            ui.mark_dirty(id);
        } else {
            log::warn!("Label::set_text: {id:?} is not a label");
        }
    }

    pub fn set_align(ui: &mut Ui, id: ElementId, align: TextAlign) {
        if let Widget::Label(l) = ui.widget_mut(id) {
            l.align = align;
            ui.mark_dirty(id);
        }
    }
}

pub(crate) fn render(ui: &Ui, id: ElementId, renderer: &mut dyn Renderer, offset: Vec2) {
    paint_base(ui, id, renderer, offset);

    let Widget::Label(l) = &ui[id].widget else {
        return;
    };
    let el = &ui[id];
    let rect = draw_rect(ui, id, offset);
    let padding = el.style().padding;

    let x = if l.align.contains(TextAlign::RIGHT) {
        rect.x + rect.w - padding.right
    } else if l.align.contains(TextAlign::CENTER) {
        rect.x + rect.w / 2.0
    } else {
        rect.x + padding.left
    };
    let y = if l.align.contains(TextAlign::BOTTOM) {
        rect.y + rect.h - padding.bottom
    } else if l.align.contains(TextAlign::MIDDLE) {
        rect.y + rect.h / 2.0
    } else {
        rect.y + padding.top
    };

    renderer.text(
        Vec2::new(x, y),
        &l.text,
        &el.style().font,
        el.style().foreground,
        l.align,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scene, SceneNode};

    #[test]
    fn draws_background_then_text() {
        let mut ui = Ui::new(300.0, 100.0);
        let label = Label::new("Ready").spawn(&mut ui);
        ui.set_bounds(label, 10.0, 10.0, 120.0, 20.0);
        ui.style_mut(label).background = crate::Color::DARK_GRAY;
        ui.add_child(ui.root(), label).unwrap();

        let mut scene = Scene::new();
        ui.render(&mut scene);

        let bg = scene
            .nodes
            .iter()
            .position(|n| matches!(n, SceneNode::Rect { .. }));
        let text = scene
            .nodes
            .iter()
            .position(|n| matches!(n, SceneNode::Text { text, .. } if text == "Ready"));
        assert!(bg.unwrap() < text.unwrap());
    }

    #[test]
    fn alignment_picks_the_anchor() {
        let mut ui = Ui::new(300.0, 100.0);
        let label = Label::new("Hi")
            .align(TextAlign::CENTER | TextAlign::MIDDLE)
            .spawn(&mut ui);
        ui.set_bounds(label, 0.0, 0.0, 100.0, 40.0);
        ui.add_child(ui.root(), label).unwrap();

        let mut scene = Scene::new();
        ui.render(&mut scene);
        let anchored = scene.nodes.iter().any(|n| {
            matches!(n, SceneNode::Text { pos, .. } if pos.x == 50.0 && pos.y == 20.0)
        });
        assert!(anchored);
    }
}
