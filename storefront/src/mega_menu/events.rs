use std::any::Any;

use themedom::{Event, Listener, ListenerTarget};

use super::state::{MegaMenu, close_open_menus};
use crate::controller::{Controller, ElementContext, Task};
use crate::events::EventResult;

impl Controller for MegaMenu {
    fn name(&self) -> &'static str {
        "header-menu"
    }

    fn connected(&mut self, cx: &mut ElementContext<'_>) {
        self.setup(cx);
    }

    fn disconnected(&mut self, _cx: &mut ElementContext<'_>) {
        // Timers are cancelled with the rest of the owner's work.
        for entry in &mut self.entries {
            entry.close_timer = None;
        }
    }

    fn handle_event(
        &mut self,
        event: &Event,
        listener: &Listener,
        cx: &mut ElementContext<'_>,
    ) -> EventResult {
        let ListenerTarget::Node(node) = listener.target else {
            return EventResult::Ignored;
        };
        let handled = match event {
            Event::PointerEnter { .. } => self.open(node, cx),
            Event::PointerLeave { .. } => self.schedule_close(node, cx),
            Event::Click { .. } if Self::hover_mode(cx) => {
                cx.prevent_default();
                true
            }
            Event::Toggle { target } if cx.document().has_attribute(*target, "open") => {
                close_open_menus(cx.document_mut(), Some(*target));
                true
            }
            _ => false,
        };
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn on_task(&mut self, task: Task, cx: &mut ElementContext<'_>) {
        if let Task::CloseMenu { menu } = task {
            self.close(menu, cx);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
