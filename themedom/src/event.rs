use crate::document::NodeId;

/// Identifier of an active pointer (mouse, pen or touch contact).
pub type PointerId = u32;

/// Events with element targeting.
///
/// Coordinates are client (viewport) coordinates in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Primary button pressed.
    PointerDown {
        target: NodeId,
        pointer_id: PointerId,
        x: f32,
        y: f32,
    },
    /// Pointer moved, with or without a button held.
    PointerMove {
        target: NodeId,
        pointer_id: PointerId,
        x: f32,
        y: f32,
    },
    /// Primary button released.
    PointerUp {
        target: NodeId,
        pointer_id: PointerId,
        x: f32,
        y: f32,
    },
    /// Activation click.
    Click { target: NodeId, x: f32, y: f32 },
    /// Pointer entered the element's box. Does not bubble.
    PointerEnter { target: NodeId },
    /// Pointer left the element's box. Does not bubble.
    PointerLeave { target: NodeId },
    /// The element's scroll offset changed.
    Scroll { target: NodeId },
    /// An image finished loading.
    Load { target: NodeId },
    /// The element's layout size changed (resize observation).
    SizeChange { target: NodeId },
    /// A `details` element's `open` flag was toggled by its summary.
    Toggle { target: NodeId },
    /// The viewport was resized. Delivered to window listeners.
    Resize { width: f32, height: f32 },
}

/// Event type without payload, used to key listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    Click,
    PointerEnter,
    PointerLeave,
    Scroll,
    Load,
    SizeChange,
    Toggle,
    Resize,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::PointerDown { .. } => EventKind::PointerDown,
            Event::PointerMove { .. } => EventKind::PointerMove,
            Event::PointerUp { .. } => EventKind::PointerUp,
            Event::Click { .. } => EventKind::Click,
            Event::PointerEnter { .. } => EventKind::PointerEnter,
            Event::PointerLeave { .. } => EventKind::PointerLeave,
            Event::Scroll { .. } => EventKind::Scroll,
            Event::Load { .. } => EventKind::Load,
            Event::SizeChange { .. } => EventKind::SizeChange,
            Event::Toggle { .. } => EventKind::Toggle,
            Event::Resize { .. } => EventKind::Resize,
        }
    }

    /// The target element, or `None` for window-level events.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Event::PointerDown { target, .. }
            | Event::PointerMove { target, .. }
            | Event::PointerUp { target, .. }
            | Event::Click { target, .. }
            | Event::PointerEnter { target }
            | Event::PointerLeave { target }
            | Event::Scroll { target }
            | Event::Load { target }
            | Event::SizeChange { target }
            | Event::Toggle { target } => Some(*target),
            Event::Resize { .. } => None,
        }
    }

    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Event::PointerDown { pointer_id, .. }
            | Event::PointerMove { pointer_id, .. }
            | Event::PointerUp { pointer_id, .. } => Some(*pointer_id),
            _ => None,
        }
    }

    /// Whether the event propagates to ancestors, the document and the window.
    pub fn bubbles(&self) -> bool {
        matches!(
            self,
            Event::PointerDown { .. }
                | Event::PointerMove { .. }
                | Event::PointerUp { .. }
                | Event::Click { .. }
        )
    }

    /// Redirect a pointer event to a capturing element.
    pub fn retarget(self, node: NodeId) -> Self {
        match self {
            Event::PointerMove {
                pointer_id, x, y, ..
            } => Event::PointerMove {
                target: node,
                pointer_id,
                x,
                y,
            },
            Event::PointerUp {
                pointer_id, x, y, ..
            } => Event::PointerUp {
                target: node,
                pointer_id,
                x,
                y,
            },
            other => other,
        }
    }
}
