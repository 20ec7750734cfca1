//! Event dispatch for the page.
//!
//! Events are delivered along their propagation path:
//! 1. Listeners on the target element
//! 2. Listeners on its ancestors (bubbling events only)
//! 3. Document listeners (bubbling events only)
//! 4. Window listeners (bubbling events and window resize)
//!
//! Pointer moves and releases go to the capturing element when a pointer is
//! captured. Events queued by handlers (scroll, size change, toggle) are
//! delivered after the current event, in order, until the queue is empty.

use std::time::Duration;

use themedom::{
    Event, Listener, ListenerTarget, NodeId, OwnerId, PointerId, Rect, ScrollBehavior, Selector,
    hit_test,
};

use super::Page;
use crate::controller::Task;

/// Pointer id used by the pointer conveniences.
pub const PRIMARY_POINTER: PointerId = 1;

/// Upper bound on queued events delivered after one operation.
const MAX_QUEUED_EVENTS: usize = 10_000;

/// Upper bound on frames run by [`Page::settle`].
const MAX_SETTLE_FRAMES: usize = 600;

// =============================================================================
// DispatchResult
// =============================================================================

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// No listener handled the event.
    NotHandled,
    /// At least one listener handled the event.
    Handled,
    /// A listener cancelled the default action.
    DefaultPrevented,
}

impl DispatchResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DispatchResult::NotHandled)
    }

    pub fn is_default_prevented(&self) -> bool {
        matches!(self, DispatchResult::DefaultPrevented)
    }
}

impl Page {
    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Deliver an event, run its default action and then every event the
    /// handlers queued.
    pub fn dispatch(&mut self, event: Event) -> DispatchResult {
        let result = self.deliver(event);
        self.drain_pending();
        result
    }

    fn deliver(&mut self, event: Event) -> DispatchResult {
        let event = match event
            .pointer_id()
            .and_then(|p| self.document.pointer_capture(p))
        {
            Some(captor) => event.retarget(captor),
            None => event,
        };

        if let Some(target) = event.target()
            && !self.document.is_connected(target)
        {
            log::trace!("dropping {:?} for detached {}", event.kind(), target);
            return DispatchResult::NotHandled;
        }

        match event {
            Event::Resize { width, height } => self.document.set_viewport(width, height),
            Event::Load { target } => self.document.mark_complete(target),
            _ => {}
        }

        let mut handled = false;
        let mut prevented = false;
        for target in self.propagation_path(&event) {
            if let ListenerTarget::Node(node) = target
                && !self.document.is_connected(node)
            {
                continue;
            }
            for listener in self.listeners.matching(target, event.kind()) {
                // Removed by an earlier handler of this event.
                if !self.listeners.contains(listener.id) {
                    continue;
                }
                if listener.options.once {
                    self.listeners.remove(listener.id);
                }
                if let Some((is_handled, is_prevented)) = self.invoke(&listener, &event) {
                    handled |= is_handled;
                    prevented |= is_prevented;
                }
            }
        }

        if prevented {
            return DispatchResult::DefaultPrevented;
        }
        self.default_action(&event);
        if handled {
            DispatchResult::Handled
        } else {
            DispatchResult::NotHandled
        }
    }

    fn propagation_path(&self, event: &Event) -> Vec<ListenerTarget> {
        let Some(target) = event.target() else {
            return vec![ListenerTarget::Window];
        };
        if !event.bubbles() {
            return vec![ListenerTarget::Node(target)];
        }
        std::iter::once(target)
            .chain(self.document.ancestors(target))
            .map(ListenerTarget::Node)
            .chain([ListenerTarget::Document, ListenerTarget::Window])
            .collect()
    }

    fn invoke(&mut self, listener: &Listener, event: &Event) -> Option<(bool, bool)> {
        let outcome = self.with_slot(listener.owner, listener.options.passive, |controller, cx| {
            let result = controller.handle_event(event, listener, cx);
            log::trace!(
                "{} {:?} via {:?} -> {:?}",
                controller.name(),
                event.kind(),
                listener.target,
                result
            );
            result.is_handled()
        });
        if outcome.is_none() {
            log::warn!("listener {:?} has no live owner", listener.id);
        }
        outcome
    }

    /// Built-in behaviour: a click inside a `details` element's `summary`
    /// toggles the element's `open` flag.
    fn default_action(&mut self, event: &Event) {
        let Event::Click { target, .. } = event else {
            return;
        };
        let Some(summary) = self.document.closest(*target, &Selector::tag("summary")) else {
            return;
        };
        let Some(details) = self
            .document
            .parent(summary)
            .filter(|&p| self.document.node(p).is_some_and(|n| n.tag() == "details"))
        else {
            return;
        };
        let open = !self.document.has_attribute(details, "open");
        self.document.set_flag(details, "open", open);
        self.document.queue_event(Event::Toggle { target: details });
    }

    pub(crate) fn drain_pending(&mut self) {
        let mut delivered = 0;
        while self.document.has_pending() {
            if delivered == MAX_QUEUED_EVENTS {
                log::warn!("stopped after {MAX_QUEUED_EVENTS} queued events");
                return;
            }
            if let Some(event) = self.document.next_pending() {
                self.deliver(event);
                delivered += 1;
            }
        }
    }

    fn run_task(&mut self, owner: OwnerId, task: Task) {
        let ran = self.with_slot(owner, false, |controller, cx| controller.on_task(task, cx));
        if ran.is_none() {
            log::warn!("{task:?} for {owner} has no live owner");
        }
        self.drain_pending();
    }

    // -------------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------------

    /// Move the virtual clock forward, firing due timers in deadline order.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some((owner, task)) = self.scheduler.pop_due(until) {
            self.run_task(owner, task);
        }
        self.scheduler.advance_to(until);
    }

    /// Run one animation frame: step smooth scrolls, deliver the resulting
    /// scroll events, then run the frame callbacks requested so far.
    pub fn run_frame(&mut self) {
        self.document.step_smooth_scrolls();
        self.drain_pending();
        for (owner, task) in self.scheduler.take_frames() {
            self.run_task(owner, task);
        }
    }

    /// Run frames until no scroll is animating and no frame is requested.
    /// Returns how many frames ran.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while (self.document.is_scroll_animating() || self.scheduler.has_frames())
            && frames < MAX_SETTLE_FRAMES
        {
            self.run_frame();
            frames += 1;
        }
        if frames == MAX_SETTLE_FRAMES {
            log::warn!("page did not settle after {MAX_SETTLE_FRAMES} frames");
        }
        frames
    }

    // -------------------------------------------------------------------------
    // Pointer
    // -------------------------------------------------------------------------

    fn target_at(&self, x: f32, y: f32) -> NodeId {
        hit_test(&self.document, x, y).unwrap_or(self.document.root())
    }

    pub fn pointer_down_at(&mut self, x: f32, y: f32) -> DispatchResult {
        let target = self.target_at(x, y);
        self.dispatch(Event::PointerDown {
            target,
            pointer_id: PRIMARY_POINTER,
            x,
            y,
        })
    }

    pub fn pointer_move_to(&mut self, x: f32, y: f32) -> DispatchResult {
        let target = self.target_at(x, y);
        self.dispatch(Event::PointerMove {
            target,
            pointer_id: PRIMARY_POINTER,
            x,
            y,
        })
    }

    pub fn pointer_up_at(&mut self, x: f32, y: f32) -> DispatchResult {
        let target = self.target_at(x, y);
        self.dispatch(Event::PointerUp {
            target,
            pointer_id: PRIMARY_POINTER,
            x,
            y,
        })
    }

    pub fn click_at(&mut self, x: f32, y: f32) -> DispatchResult {
        let target = self.target_at(x, y);
        self.dispatch(Event::Click { target, x, y })
    }

    /// Click the center of an element.
    pub fn click(&mut self, node: NodeId) -> DispatchResult {
        let (x, y) = self.document.bounding_client_rect(node).center();
        self.dispatch(Event::Click { target: node, x, y })
    }

    pub fn hover(&mut self, node: NodeId) -> DispatchResult {
        self.dispatch(Event::PointerEnter { target: node })
    }

    pub fn unhover(&mut self, node: NodeId) -> DispatchResult {
        self.dispatch(Event::PointerLeave { target: node })
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Resize the viewport and notify window listeners.
    pub fn resize_viewport(&mut self, width: f32, height: f32) -> DispatchResult {
        self.dispatch(Event::Resize { width, height })
    }

    /// Replace a node's layout rectangle. Size changes reach resize observers.
    pub fn set_layout(&mut self, node: NodeId, rect: Rect) {
        self.document.set_rect(node, rect);
        self.drain_pending();
    }

    /// Replace a scroll container's content width.
    pub fn set_scroll_width(&mut self, node: NodeId, width: f32) {
        self.document.set_scroll_width(node, width);
        self.drain_pending();
    }

    /// Scroll a container as a user or script would.
    pub fn scroll_to(&mut self, node: NodeId, left: f32, behavior: ScrollBehavior) {
        self.document.scroll_to(node, left, behavior);
        self.drain_pending();
    }

    /// Finish loading an image.
    pub fn load_image(&mut self, node: NodeId) -> DispatchResult {
        self.dispatch(Event::Load { target: node })
    }
}
