//! Root of the retained tree: the arena, the structural invariants
//! (single ownership, dirty propagation), hit-testing, the capture/target/
//! bubble pipeline and the translation of raw input samples into typed
//! events. The embedding application polls its windowing layer and calls
//! [`Ui::pointer_move`], [`Ui::pointer_button`], [`Ui::wheel`], [`Ui::key`]
//! and [`Ui::resize`], then drives one [`Ui::update`] and one [`Ui::render`]
//! per frame.

use std::ops::Index;
use std::rc::Rc;

use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::element::{Element, ElementId, Handler, Listener, ListenerId};
use crate::layout::LayoutManager;
use crate::widget::{self, Widget};
use crate::{
    Event, EventKind, EventType, Key, Modifiers, Phase, PointerButton, Renderer, Size, UiError,
    Vec2,
};

pub struct Ui {
    arena: SlotMap<ElementId, Element>,
    root: ElementId,
    hovered: Option<ElementId>,
    focused: Option<ElementId>,
    pressed: Option<ElementId>,
    window: Size,
    pixel_ratio: f32,
    next_listener: u64,
}

impl Ui {
    pub fn new(width: f32, height: f32) -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Element::new(Widget::Panel));
        let mut ui = Ui {
            arena,
            root,
            hovered: None,
            focused: None,
            pressed: None,
            window: Size::new(width, height),
            pixel_ratio: 1.0,
            next_listener: 1,
        };
        ui.set_bounds(root, 0.0, 0.0, width, height);
        ui
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn window_size(&self) -> Size {
        self.window
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.pixel_ratio = ratio;
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.arena.get(id)
    }

    pub fn is_alive(&self, id: ElementId) -> bool {
        self.arena.contains_key(id)
    }

    fn live(&self, id: Option<ElementId>) -> Option<ElementId> {
        id.filter(|id| self.arena.contains_key(*id))
    }

    // ----- structure ---------------------------------------------------

    pub(crate) fn spawn(&mut self, widget: Widget) -> ElementId {
        self.arena.insert(Element::new(widget))
    }

    /// Links a freshly spawned child. Internal fast path: the caller
    /// guarantees `child` is alive, parentless and not an ancestor of
    /// `parent`.
    pub(crate) fn attach(&mut self, parent: ElementId, child: ElementId) {
        debug_assert!(self.arena.contains_key(parent));
        debug_assert!(self.arena[child].parent.is_none());
        self.arena[parent].children.push(child);
        self.arena[child].parent = Some(parent);
        self.mark_dirty(parent);
    }

    /// Appends `child` to `parent`'s children, detaching it from any
    /// previous owner first, so an element is owned by at most one container
    /// at any time. Insertion order is paint order; hit-testing walks it in
    /// reverse.
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), UiError> {
        if !self.arena.contains_key(parent) {
            return Err(UiError::DeadElement(parent));
        }
        if !self.arena.contains_key(child) {
            return Err(UiError::DeadElement(child));
        }
        // Walk up from the prospective parent; finding `child` there means
        // the attachment would close a loop.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(UiError::WouldCycle { parent, child });
            }
            cursor = self.arena[id].parent;
        }

        if let Some(old) = self.arena[child].parent {
            self.remove_child(old, child);
        }
        self.arena[parent].children.push(child);
        self.arena[child].parent = Some(parent);
        self.mark_dirty(parent);
        Ok(())
    }

    /// Removes `child` from `parent` by identity. Absent children are a
    /// no-op. The detached subtree stays alive until [`Ui::despawn`].
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) {
        let Some(el) = self.arena.get_mut(parent) else {
            log::warn!("remove_child: parent {parent:?} is dead");
            return;
        };
        let Some(pos) = el.children.iter().position(|&c| c == child) else {
            return;
        };
        el.children.remove(pos);
        if let Some(c) = self.arena.get_mut(child) {
            c.parent = None;
        }
        self.mark_dirty(parent);
    }

    pub fn remove_all_children(&mut self, parent: ElementId) {
        let children = self.children_of(parent);
        for child in children {
            self.remove_child(parent, child);
        }
    }

    /// Detaches and frees the element and its whole subtree.
    pub fn despawn(&mut self, id: ElementId) {
        if !self.arena.contains_key(id) {
            return;
        }
        if let Some(parent) = self.arena[id].parent {
            self.remove_child(parent, id);
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(el) = self.arena.remove(next) {
                stack.extend(el.children);
            }
        }
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.arena.get(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    fn children_of(&self, id: ElementId) -> Vec<ElementId> {
        self.children(id).to_vec()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.arena.get(id).and_then(|el| el.parent)
    }

    // ----- geometry and flags ------------------------------------------

    pub fn set_x(&mut self, id: ElementId, x: f32) {
        if let Some(el) = self.arena.get_mut(id) {
            el.x = x;
            self.mark_dirty(id);
        }
    }

    pub fn set_y(&mut self, id: ElementId, y: f32) {
        if let Some(el) = self.arena.get_mut(id) {
            el.y = y;
            self.mark_dirty(id);
        }
    }

    pub fn set_width(&mut self, id: ElementId, width: f32) {
        if let Some(el) = self.arena.get_mut(id) {
            el.width = width;
            self.mark_dirty(id);
        }
    }

    pub fn set_height(&mut self, id: ElementId, height: f32) {
        if let Some(el) = self.arena.get_mut(id) {
            el.height = height;
            self.mark_dirty(id);
        }
    }

    pub fn set_bounds(&mut self, id: ElementId, x: f32, y: f32, width: f32, height: f32) {
        if let Some(el) = self.arena.get_mut(id) {
            el.x = x;
            el.y = y;
            el.width = width;
            el.height = height;
            self.mark_dirty(id);
        }
    }

    pub fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(el) = self.arena.get_mut(id) {
            el.visible = visible;
            self.mark_dirty(id);
        }
    }

    pub fn set_enabled(&mut self, id: ElementId, enabled: bool) {
        if let Some(el) = self.arena.get_mut(id) {
            el.enabled = enabled;
            self.mark_dirty(id);
        }
    }

    pub fn set_style(&mut self, id: ElementId, style: crate::Style) {
        if let Some(el) = self.arena.get_mut(id) {
            el.style = style;
            self.mark_dirty(id);
        }
    }

    /// Mutable style access. Marks the element dirty up front.
    ///
    /// Panics if `id` is dead.
    pub fn style_mut(&mut self, id: ElementId) -> &mut crate::Style {
        self.mark_dirty(id);
        &mut self.arena[id].style
    }

    pub fn set_layout(&mut self, id: ElementId, manager: impl LayoutManager + 'static) {
        self.set_layout_shared(id, Rc::new(manager));
    }

    /// Assigns an already shared manager; the same instance may serve any
    /// number of containers.
    pub fn set_layout_shared(&mut self, id: ElementId, manager: Rc<dyn LayoutManager>) {
        if let Some(el) = self.arena.get_mut(id) {
            el.layout = Some(manager);
            self.mark_dirty(id);
        }
    }

    pub(crate) fn widget_mut(&mut self, id: ElementId) -> &mut Widget {
        &mut self.arena[id].widget
    }

    /// Derived, never stored: the sum of local x along the parent chain.
    pub fn absolute_x(&self, id: ElementId) -> f32 {
        let mut x = 0.0;
        let mut cursor = Some(id);
        while let Some(el) = cursor.and_then(|id| self.arena.get(id)) {
            x += el.x;
            cursor = el.parent;
        }
        x
    }

    pub fn absolute_y(&self, id: ElementId) -> f32 {
        let mut y = 0.0;
        let mut cursor = Some(id);
        while let Some(el) = cursor.and_then(|id| self.arena.get(id)) {
            y += el.y;
            cursor = el.parent;
        }
        y
    }

    pub fn absolute_origin(&self, id: ElementId) -> Vec2 {
        Vec2::new(self.absolute_x(id), self.absolute_y(id))
    }

    /// Closed-interval test against the element's absolute bounds.
    pub fn contains_point(&self, id: ElementId, p: Vec2) -> bool {
        let Some(el) = self.arena.get(id) else {
            return false;
        };
        let ax = self.absolute_x(id);
        let ay = self.absolute_y(id);
        p.x >= ax && p.x <= ax + el.width && p.y >= ay && p.y <= ay + el.height
    }

    // ----- dirty flag ---------------------------------------------------

    /// Sets the flag on the element and every ancestor up to the root.
    /// Idempotent; never touches descendants.
    pub fn mark_dirty(&mut self, id: ElementId) {
        let mut cursor = Some(id);
        while let Some(id) = cursor {
            let Some(el) = self.arena.get_mut(id) else {
                break;
            };
            el.dirty = true;
            cursor = el.parent;
        }
    }

    pub fn mark_clean(&mut self, id: ElementId) {
        if let Some(el) = self.arena.get_mut(id) {
            el.dirty = false;
        }
    }

    pub fn is_dirty(&self, id: ElementId) -> bool {
        self.arena.get(id).is_some_and(|el| el.dirty)
    }

    // ----- listeners ----------------------------------------------------

    pub fn add_listener(
        &mut self,
        id: ElementId,
        ty: EventType,
        handler: impl Fn(&mut Ui, &mut Event) + 'static,
    ) -> ListenerId {
        let token = ListenerId(self.next_listener);
        self.next_listener += 1;
        if let Some(el) = self.arena.get_mut(id) {
            el.listeners.entry(ty).or_default().push(Listener {
                id: token,
                handler: Rc::new(handler) as Handler,
            });
        } else {
            log::warn!("add_listener: element {id:?} is dead");
        }
        token
    }

    pub fn remove_listener(&mut self, id: ElementId, ty: EventType, token: ListenerId) {
        if let Some(el) = self.arena.get_mut(id) {
            if let Some(list) = el.listeners.get_mut(&ty) {
                list.retain(|l| l.id != token);
            }
        }
    }

    // ----- hit testing --------------------------------------------------

    /// Topmost visible, enabled element containing the point. Reverse
    /// insertion order, so the element painted last wins; `None` when the
    /// point lands on nothing (including outside the root).
    pub fn element_at(&self, p: Vec2) -> Option<ElementId> {
        self.hit_test(self.root, p)
    }

    fn hit_test(&self, id: ElementId, p: Vec2) -> Option<ElementId> {
        let el = self.arena.get(id)?;
        for &child in el.children.iter().rev() {
            let Some(c) = self.arena.get(child) else {
                continue;
            };
            if !c.visible || !c.enabled {
                continue;
            }
            if let Some(hit) = self.hit_test(child, p) {
                return Some(hit);
            }
        }
        if self.contains_point(id, p) { Some(id) } else { None }
    }

    // ----- focus/hover/press -------------------------------------------

    pub fn set_focus(&mut self, element: Option<ElementId>) {
        let element = self.live(element);
        if self.focused == element {
            return;
        }
        if let Some(old) = self.live(self.focused) {
            self.mark_dirty(old);
        }
        self.focused = element;
        if let Some(new) = element {
            self.mark_dirty(new);
        }
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.live(self.focused)
    }

    pub fn is_focused(&self, id: ElementId) -> bool {
        self.focused() == Some(id)
    }

    pub fn hovered(&self) -> Option<ElementId> {
        self.live(self.hovered)
    }

    pub fn pressed(&self) -> Option<ElementId> {
        self.live(self.pressed)
    }

    // ----- input translation -------------------------------------------

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        let hit = self.element_at(position);

        if hit != self.hovered() {
            if let Some(old) = self.hovered() {
                self.propagate(old, EventKind::PointerLeave { position });
            }
            if let Some(new) = hit {
                self.propagate(new, EventKind::PointerEnter { position });
            }
            self.hovered = hit;
        }

        if let Some(target) = hit {
            self.propagate(target, EventKind::PointerMove { position });
        }
        // While a press is active the pressed element keeps receiving moves
        // even once the pointer is past its bounds, so drags don't stall at
        // the edge of a slider track.
        if let Some(pressed) = self.pressed() {
            if hit != Some(pressed) {
                self.propagate(pressed, EventKind::PointerMove { position });
            }
        }
    }

    pub fn pointer_button(&mut self, x: f32, y: f32, button: PointerButton, pressed: bool) {
        let position = Vec2::new(x, y);
        let hit = self.element_at(position);

        if pressed {
            self.pressed = hit;
            if let Some(target) = hit {
                self.set_focus(Some(target));
                self.propagate(target, EventKind::PointerDown { position, button });
            }
        } else {
            let was_pressed = self.pressed();
            if let Some(target) = hit {
                self.propagate(target, EventKind::PointerUp { position, button });
                // A click exists only when press and release resolve to the
                // same element.
                if Some(target) == was_pressed {
                    self.propagate(target, EventKind::Click { position, button });
                }
            }
            if let Some(pressed_el) = was_pressed {
                if hit != Some(pressed_el) {
                    self.propagate(pressed_el, EventKind::PointerUp { position, button });
                }
            }
            self.pressed = None;
        }
    }

    pub fn wheel(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        let position = Vec2::new(x, y);
        if let Some(target) = self.element_at(position) {
            self.propagate(
                target,
                EventKind::Wheel {
                    position,
                    delta: Vec2::new(dx, dy),
                },
            );
        }
    }

    pub fn key(&mut self, key: Key, modifiers: Modifiers, pressed: bool) {
        if let Some(target) = self.focused() {
            let kind = if pressed {
                EventKind::KeyDown { key, modifiers }
            } else {
                EventKind::KeyUp { key, modifiers }
            };
            self.propagate(target, kind);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.window = Size::new(width, height);
        self.set_width(self.root, width);
        self.set_height(self.root, height);
        self.layout();
    }

    // ----- propagation --------------------------------------------------

    /// Runs the three-phase pipeline for an event aimed at `target`:
    /// capture walks `[root..target)` shallowest first, then the target
    /// itself, then bubble retraces the same chain deepest first. Any
    /// handler stopping propagation ends the remaining phases. Returns the
    /// event so callers can inspect its flags.
    pub fn propagate(&mut self, target: ElementId, kind: EventKind) -> Event {
        let mut event = Event::new(target, kind);
        if !self.arena.contains_key(target) {
            log::warn!("propagate: target {target:?} is dead");
            return event;
        }

        let mut chain: SmallVec<[ElementId; 8]> = SmallVec::new();
        let mut cursor = Some(target);
        while let Some(id) = cursor {
            chain.push(id);
            cursor = self.arena.get(id).and_then(|el| el.parent);
        }
        chain.reverse();
        let above_target = chain.len() - 1;

        event.set_phase(Phase::Capture);
        for &id in &chain[..above_target] {
            event.set_current_target(id);
            self.deliver(id, &mut event);
            if event.propagation_stopped() {
                return event;
            }
        }

        event.set_phase(Phase::Target);
        event.set_current_target(target);
        self.deliver(target, &mut event);
        if event.propagation_stopped() {
            return event;
        }

        event.set_phase(Phase::Bubble);
        for &id in chain[..above_target].iter().rev() {
            event.set_current_target(id);
            self.deliver(id, &mut event);
            if event.propagation_stopped() {
                return event;
            }
        }
        event
    }

    /// Invokes the element's built-in behavior, then its user listeners for
    /// the event's kind in registration order, over a snapshot of the list.
    fn deliver(&mut self, id: ElementId, event: &mut Event) {
        if !self.arena.contains_key(id) {
            // A handler earlier in the chain may have despawned this one.
            return;
        }
        widget::handle_event(self, id, event);
        let listeners = self
            .arena
            .get(id)
            .map(|el| el.snapshot_listeners(event.event_type()))
            .unwrap_or_default();
        for listener in listeners {
            (listener.handler)(self, event);
            if event.propagation_stopped() {
                break;
            }
        }
    }

    // ----- frame drive --------------------------------------------------

    /// Runs layout managers down the whole tree. Hidden subtrees are laid
    /// out too, so they can be shown without another pass.
    pub fn layout(&mut self) {
        self.layout_element(self.root);
    }

    pub fn layout_element(&mut self, id: ElementId) {
        let manager = self.arena.get(id).and_then(|el| el.layout.clone());
        if let Some(manager) = manager {
            manager.layout(self, id);
        }
        for child in self.children_of(id) {
            self.layout_element(child);
        }
        widget::after_layout(self, id);
    }

    /// Advances time-driven widget state. `dt` is in seconds; no wall clock
    /// is consulted anywhere in the tree.
    pub fn update(&mut self, dt: f32) {
        self.update_element(self.root, dt);
    }

    fn update_element(&mut self, id: ElementId, dt: f32) {
        if !self.arena.contains_key(id) {
            return;
        }
        widget::update(self, id, dt);
        for child in self.children_of(id) {
            self.update_element(child, dt);
        }
    }

    /// Paints the tree: each element draws itself, then its visible children
    /// in insertion order. Elements come out clean.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        renderer.begin_frame(self.window.width, self.window.height, self.pixel_ratio);
        self.render_element(self.root, renderer, Vec2::ZERO);
        renderer.end_frame();
    }

    /// `offset` is the accumulated scroll displacement of enclosing scroll
    /// containers; it shifts drawing only, never hit-testing.
    pub(crate) fn render_element(
        &mut self,
        id: ElementId,
        renderer: &mut dyn Renderer,
        offset: Vec2,
    ) {
        let Some(el) = self.arena.get(id) else {
            return;
        };
        if !el.visible {
            return;
        }
        let children_painted = widget::render(self, id, renderer, offset);
        if !children_painted {
            for child in self.children_of(id) {
                if self.arena.get(child).is_some_and(|c| c.visible) {
                    self.render_element(child, renderer, offset);
                }
            }
        }
        self.mark_clean(id);
    }
}

impl Index<ElementId> for Ui {
    type Output = Element;

    fn index(&self, id: ElementId) -> &Element {
        &self.arena[id]
    }
}
