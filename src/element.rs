use std::collections::HashMap;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::layout::LayoutManager;
use crate::widget::Widget;
use crate::{Event, EventType, Rect, Style, Ui};

slotmap::new_key_type! {
    /// Handle to an element in the tree arena. Weak by construction: a
    /// handle whose element was despawned simply stops resolving.
    pub struct ElementId;
}

/// User event handler. Receives the whole [`Ui`] so it can mutate any part
/// of the tree; dispatch always iterates a snapshot of the listener list, so
/// handlers may freely add or remove listeners mid-flight.
pub type Handler = Rc<dyn Fn(&mut Ui, &mut Event)>;

/// Token for removing a previously registered handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(pub(crate) u64);

#[derive(Clone)]
pub(crate) struct Listener {
    pub(crate) id: ListenerId,
    pub(crate) handler: Handler,
}

pub(crate) type ListenerMap = HashMap<EventType, SmallVec<[Listener; 2]>>;

/// One node of the retained tree: local geometry, flags, style, listener
/// registry and the widget payload. Structural links (parent handle, child
/// order) are maintained exclusively by [`Ui`].
pub struct Element {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) visible: bool,
    pub(crate) enabled: bool,
    pub(crate) dirty: bool,
    pub(crate) style: Style,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) layout: Option<Rc<dyn LayoutManager>>,
    pub(crate) listeners: ListenerMap,
    pub(crate) widget: Widget,
}

impl Element {
    pub(crate) fn new(widget: Widget) -> Self {
        Element {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            visible: true,
            enabled: true,
            dirty: true,
            style: Style::default(),
            parent: None,
            children: Vec::new(),
            layout: None,
            listeners: HashMap::new(),
            widget,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Local bounds, relative to the parent's origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn layout_manager(&self) -> Option<&Rc<dyn LayoutManager>> {
        self.layout.as_ref()
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub(crate) fn snapshot_listeners(&self, ty: EventType) -> SmallVec<[Listener; 2]> {
        self.listeners.get(&ty).cloned().unwrap_or_default()
    }
}
