//! Controller trait and the context handed to controllers.

use std::any::Any;
use std::time::Duration;

use themedom::{
    Document, EventKind, FrameId, Listener, ListenerId, ListenerOptions, ListenerTarget,
    Listeners, NodeId, OwnerId, Scheduler, TimerId,
};

use crate::config::WidgetConfig;
use crate::events::EventResult;

/// Deferred work a controller asks the page to hand back later, either
/// after a timeout or on the next animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Recompute the scrollbar thumb of the slider inside `panel`.
    RefreshThumb { panel: NodeId },
    /// Close `menu` once the hover debounce has elapsed.
    CloseMenu { menu: NodeId },
}

/// A custom element controller or page-lifetime system.
///
/// The page owns controller instances and routes to them every event that
/// hits one of their listeners, plus the timers and frames they requested.
/// Handlers run to completion; events produced by their mutations are
/// dispatched after they return.
pub trait Controller {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Called once when the host element is attached (or the system is
    /// installed). Attach listeners here.
    fn connected(&mut self, cx: &mut ElementContext<'_>);

    /// Called before the host element is removed. Listeners, timers and
    /// frames owned by the controller are dropped by the page afterwards.
    fn disconnected(&mut self, _cx: &mut ElementContext<'_>) {}

    /// Handle an event delivered through `listener`.
    fn handle_event(
        &mut self,
        _event: &themedom::Event,
        _listener: &Listener,
        _cx: &mut ElementContext<'_>,
    ) -> EventResult {
        EventResult::Ignored
    }

    /// Run a task requested through [`ElementContext::set_timeout`] or
    /// [`ElementContext::request_frame`].
    fn on_task(&mut self, _task: Task, _cx: &mut ElementContext<'_>) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Access to the page for the duration of one handler call.
pub struct ElementContext<'a> {
    owner: OwnerId,
    host: Option<NodeId>,
    document: &'a mut Document,
    listeners: &'a mut Listeners,
    scheduler: &'a mut Scheduler<Task>,
    config: &'a WidgetConfig,
    passive: bool,
    default_prevented: bool,
}

impl<'a> ElementContext<'a> {
    pub(crate) fn new(
        owner: OwnerId,
        host: Option<NodeId>,
        document: &'a mut Document,
        listeners: &'a mut Listeners,
        scheduler: &'a mut Scheduler<Task>,
        config: &'a WidgetConfig,
    ) -> Self {
        Self {
            owner,
            host,
            document,
            listeners,
            scheduler,
            config,
            passive: false,
            default_prevented: false,
        }
    }

    pub(crate) fn passive(mut self, passive: bool) -> Self {
        self.passive = passive;
        self
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// The custom element this controller is attached to (None for systems).
    pub fn host(&self) -> Option<NodeId> {
        self.host
    }

    pub fn document(&self) -> &Document {
        self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        self.document
    }

    pub fn config(&self) -> &WidgetConfig {
        self.config
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    pub fn listen(&mut self, target: ListenerTarget, kind: EventKind) -> ListenerId {
        self.listen_with(target, kind, ListenerOptions::new())
    }

    pub fn listen_with(
        &mut self,
        target: ListenerTarget,
        kind: EventKind,
        options: ListenerOptions,
    ) -> ListenerId {
        self.listeners.add(self.owner, target, kind, options)
    }

    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // -------------------------------------------------------------------------
    // Timers and frames
    // -------------------------------------------------------------------------

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn set_timeout(&mut self, delay: Duration, task: Task) -> TimerId {
        self.scheduler.set_timeout(self.owner, delay, task)
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.scheduler.clear_timeout(id)
    }

    pub fn request_frame(&mut self, task: Task) -> FrameId {
        self.scheduler.request_frame(self.owner, task)
    }

    // -------------------------------------------------------------------------
    // Default action
    // -------------------------------------------------------------------------

    /// Cancel the event's default action. Ignored inside passive listeners.
    pub fn prevent_default(&mut self) {
        if self.passive {
            log::warn!("prevent_default ignored in passive listener of {}", self.owner);
            return;
        }
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
