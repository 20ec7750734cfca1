//! Slider event handling.

use themedom::{Event, Listener, ListenerTarget};

use super::state::SliderScrollbar;
use crate::controller::ElementContext;
use crate::events::EventResult;

impl SliderScrollbar {
    /// Handle an event delivered through one of this slider's listeners.
    pub fn handle_event(
        &mut self,
        event: &Event,
        listener: &Listener,
        cx: &mut ElementContext<'_>,
    ) -> EventResult {
        let parts = *self.parts();
        match (event, listener.target) {
            (Event::Click { .. }, ListenerTarget::Node(node)) if Some(node) == parts.next => {
                self.advance(cx.document_mut());
                EventResult::Consumed
            }
            (Event::PointerDown { pointer_id, x, .. }, ListenerTarget::Node(node))
                if node == parts.thumb =>
            {
                self.begin_drag(*pointer_id, *x, cx);
                EventResult::Consumed
            }
            (Event::PointerDown { target, x, .. }, ListenerTarget::Node(node))
                if node == parts.scrollbar =>
            {
                // The thumb handles its own presses.
                if cx.document().contains(parts.thumb, *target) {
                    return EventResult::Ignored;
                }
                self.seek(*x, cx.document_mut());
                EventResult::Consumed
            }
            (Event::PointerMove { pointer_id, x, .. }, ListenerTarget::Window)
                if self.is_dragging_with(*pointer_id) =>
            {
                self.drag_to(*x, cx.document_mut());
                EventResult::Consumed
            }
            (Event::PointerUp { pointer_id, .. }, ListenerTarget::Window)
                if self.is_dragging_with(*pointer_id) =>
            {
                self.end_drag(cx);
                EventResult::Consumed
            }
            (Event::Scroll { .. }, _)
            | (Event::Resize { .. }, _)
            | (Event::Load { .. }, _)
            | (Event::SizeChange { .. }, _) => {
                self.update_thumb(cx.document_mut());
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
