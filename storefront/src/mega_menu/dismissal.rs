use std::any::Any;

use themedom::{Event, EventKind, Listener, ListenerTarget};

use super::state::{close_open_menus, menu_selector};
use crate::controller::{Controller, ElementContext};
use crate::events::EventResult;

/// Closes every open header menu when a click lands outside all of them.
///
/// Installed once per page regardless of how many header menus exist.
#[derive(Debug, Default)]
pub struct MenuDismissal;

impl Controller for MenuDismissal {
    fn name(&self) -> &'static str {
        "menu-dismissal"
    }

    fn connected(&mut self, cx: &mut ElementContext<'_>) {
        cx.listen(ListenerTarget::Document, EventKind::Click);
    }

    fn handle_event(
        &mut self,
        event: &Event,
        _listener: &Listener,
        cx: &mut ElementContext<'_>,
    ) -> EventResult {
        let Event::Click { target, .. } = event else {
            return EventResult::Ignored;
        };
        if cx.document().closest(*target, &menu_selector()).is_some() {
            return EventResult::Ignored;
        }
        let closed = close_open_menus(cx.document_mut(), None);
        if closed > 0 {
            log::debug!("outside click closed {closed} menus");
        }
        EventResult::Consumed
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
