use std::any::Any;

use themedom::{Event, Listener, ListenerTarget};

use super::state::TabbedPanel;
use crate::controller::{Controller, ElementContext, Task};
use crate::events::EventResult;

impl Controller for TabbedPanel {
    fn name(&self) -> &'static str {
        "tabs-container"
    }

    fn connected(&mut self, cx: &mut ElementContext<'_>) {
        self.setup(cx);
    }

    fn disconnected(&mut self, cx: &mut ElementContext<'_>) {
        for slider in &mut self.sliders {
            slider.detach(cx);
        }
    }

    fn handle_event(
        &mut self,
        event: &Event,
        listener: &Listener,
        cx: &mut ElementContext<'_>,
    ) -> EventResult {
        if let Some(slider) = self.sliders.iter_mut().find(|s| s.owns(listener.id)) {
            return slider.handle_event(event, listener, cx);
        }

        match (event, listener.target) {
            (Event::Click { .. }, ListenerTarget::Node(title)) if self.titles.contains(&title) => {
                let Some(index) = cx.document().attribute(title, "index").map(str::to_string)
                else {
                    return EventResult::Ignored;
                };
                if self.activate(&index, cx) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_task(&mut self, task: Task, cx: &mut ElementContext<'_>) {
        if let Task::RefreshThumb { panel } = task
            && let Some(slider) = self.slider_mut(panel)
        {
            slider.update_thumb(cx.document_mut());
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
