use web_time::Instant;

use crate::{ElementId, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Tertiary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    F(u8),
}

/// Fieldless tag for an [`EventKind`], used to key listener lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    PointerMove,
    PointerDown,
    PointerUp,
    PointerEnter,
    PointerLeave,
    Click,
    Wheel,
    KeyDown,
    KeyUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Capture,
    Target,
    Bubble,
}

/// Closed set of input events. Pointer variants carry the cursor position in
/// window coordinates; `Wheel` additionally carries the signed scroll delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventKind {
    PointerMove {
        position: Vec2,
    },
    PointerDown {
        position: Vec2,
        button: PointerButton,
    },
    PointerUp {
        position: Vec2,
        button: PointerButton,
    },
    PointerEnter {
        position: Vec2,
    },
    PointerLeave {
        position: Vec2,
    },
    Click {
        position: Vec2,
        button: PointerButton,
    },
    Wheel {
        position: Vec2,
        delta: Vec2,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    KeyUp {
        key: Key,
        modifiers: Modifiers,
    },
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::PointerMove { .. } => EventType::PointerMove,
            EventKind::PointerDown { .. } => EventType::PointerDown,
            EventKind::PointerUp { .. } => EventType::PointerUp,
            EventKind::PointerEnter { .. } => EventType::PointerEnter,
            EventKind::PointerLeave { .. } => EventType::PointerLeave,
            EventKind::Click { .. } => EventType::Click,
            EventKind::Wheel { .. } => EventType::Wheel,
            EventKind::KeyDown { .. } => EventType::KeyDown,
            EventKind::KeyUp { .. } => EventType::KeyUp,
        }
    }

    /// Cursor position for pointer-family events, `None` for key events.
    pub fn position(&self) -> Option<Vec2> {
        match self {
            EventKind::PointerMove { position }
            | EventKind::PointerDown { position, .. }
            | EventKind::PointerUp { position, .. }
            | EventKind::PointerEnter { position }
            | EventKind::PointerLeave { position }
            | EventKind::Click { position, .. }
            | EventKind::Wheel { position, .. } => Some(*position),
            EventKind::KeyDown { .. } | EventKind::KeyUp { .. } => None,
        }
    }
}

/// A single input occurrence travelling through the tree. Created per input
/// sample, discarded once propagation completes; holds no ownership of any
/// element.
#[derive(Clone, Debug)]
pub struct Event {
    pub kind: EventKind,
    target: ElementId,
    current_target: ElementId,
    phase: Phase,
    propagation_stopped: bool,
    default_prevented: bool,
    timestamp: Instant,
}

impl Event {
    pub fn new(target: ElementId, kind: EventKind) -> Self {
        Event {
            kind,
            target,
            current_target: target,
            phase: Phase::Target,
            propagation_stopped: false,
            default_prevented: false,
            timestamp: Instant::now(),
        }
    }

    /// The element the event was logically aimed at; fixed for the event's
    /// whole lifetime.
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// The element currently being visited by propagation.
    pub fn current_target(&self) -> ElementId {
        self.current_target
    }

    pub(crate) fn set_current_target(&mut self, id: ElementId) {
        self.current_target = id;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Stops the event from reaching any further element (and any handler
    /// after the current one). A signal, not an error.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }
}
