//! Per-panel slider state.

use themedom::{
    Document, EventKind, ListenerId, ListenerOptions, ListenerTarget, NodeId, PointerId,
    ScrollBehavior, Selector,
};

use super::geometry::{self, ScrollMetrics, ThumbGeometry};
use crate::controller::{ElementContext, Task};

/// The elements a slider works on, all inside one panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderParts {
    pub panel: NodeId,
    /// The horizontally scrolling strip.
    pub slider: NodeId,
    /// Optional "next" button.
    pub next: Option<NodeId>,
    /// The scrollbar track.
    pub scrollbar: NodeId,
    /// The draggable thumb inside the track.
    pub thumb: NodeId,
}

impl SliderParts {
    /// Find the slider elements inside `panel`. Returns `None` when the
    /// strip, the track or the thumb is missing.
    pub fn locate(doc: &Document, panel: NodeId) -> Option<Self> {
        let find = |name: &str| doc.query(panel, &Selector::attr(name));
        Some(Self {
            panel,
            slider: find("data-slider")?,
            next: find("data-next"),
            scrollbar: find("data-scrollbar")?,
            thumb: find("data-thumb")?,
        })
    }
}

/// An in-flight thumb drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    /// Pointer X when the drag started.
    pub start_x: f32,
    /// Thumb offset when the drag started.
    pub start_offset: f32,
    pub(crate) move_listener: ListenerId,
    pub(crate) up_listener: ListenerId,
}

/// Scrollbar behaviour for one panel: thumb projection, click-to-seek,
/// drag-to-scroll and the next button.
#[derive(Debug)]
pub struct SliderScrollbar {
    parts: SliderParts,
    geometry: ThumbGeometry,
    current_offset: f32,
    drag: Option<DragSession>,
    listeners: Vec<ListenerId>,
    min_thumb_width: f32,
    next_step_ratio: f32,
}

impl SliderScrollbar {
    pub fn new(parts: SliderParts, min_thumb_width: f32, next_step_ratio: f32) -> Self {
        Self {
            parts,
            geometry: ThumbGeometry::Full,
            current_offset: 0.0,
            drag: None,
            listeners: Vec::new(),
            min_thumb_width,
            next_step_ratio,
        }
    }

    pub fn parts(&self) -> &SliderParts {
        &self.parts
    }

    pub fn panel(&self) -> NodeId {
        self.parts.panel
    }

    /// Thumb offset written by the last update.
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    pub fn geometry(&self) -> ThumbGeometry {
        self.geometry
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a drag is in progress with `pointer_id`.
    pub fn is_dragging_with(&self, pointer_id: PointerId) -> bool {
        self.drag.is_some_and(|d| d.pointer_id == pointer_id)
    }

    /// Whether `id` is one of this slider's listeners.
    pub fn owns(&self, id: ListenerId) -> bool {
        self.listeners.contains(&id)
            || self
                .drag
                .is_some_and(|d| d.move_listener == id || d.up_listener == id)
    }

    /// Attach listeners and draw the initial thumb.
    pub fn attach(&mut self, cx: &mut ElementContext<'_>) {
        let parts = self.parts;

        if let Some(next) = parts.next {
            self.track(cx.listen(ListenerTarget::Node(next), EventKind::Click));
        }
        self.track(cx.listen_with(
            ListenerTarget::Node(parts.slider),
            EventKind::Scroll,
            ListenerOptions::passive(),
        ));
        self.track(cx.listen(ListenerTarget::Node(parts.scrollbar), EventKind::PointerDown));
        self.track(cx.listen(ListenerTarget::Node(parts.thumb), EventKind::PointerDown));
        self.track(cx.listen(ListenerTarget::Window, EventKind::Resize));

        let pending_images: Vec<NodeId> = cx
            .document()
            .query_all(parts.panel, &Selector::tag("img"))
            .into_iter()
            .filter(|&img| !cx.document().is_complete(img))
            .collect();
        for img in pending_images {
            self.track(cx.listen_with(
                ListenerTarget::Node(img),
                EventKind::Load,
                ListenerOptions::once(),
            ));
        }

        self.track(cx.listen(ListenerTarget::Node(parts.slider), EventKind::SizeChange));
        self.track(cx.listen(ListenerTarget::Node(parts.scrollbar), EventKind::SizeChange));

        self.update_thumb(cx.document_mut());
        log::debug!(
            "slider attached to panel {} ({} listeners)",
            parts.panel,
            self.listeners.len()
        );
    }

    fn track(&mut self, id: ListenerId) {
        self.listeners.push(id);
    }

    /// Read the live scroll measurements.
    pub fn measure(&self, doc: &Document) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left: doc.scroll_left(self.parts.slider),
            scroll_width: doc.scroll_width(self.parts.slider),
            client_width: doc.client_width(self.parts.slider),
            track_width: doc.client_width(self.parts.scrollbar),
        }
    }

    /// Project the scroll position onto the thumb and write its style.
    pub fn update_thumb(&mut self, doc: &mut Document) {
        let metrics = self.measure(doc);
        let geometry = ThumbGeometry::compute(&metrics, self.min_thumb_width);
        if let Some(style) = doc.style_mut(self.parts.thumb) {
            style.width = Some(geometry.style_width());
            style.transform = Some(geometry.transform());
        }
        self.geometry = geometry;
        self.current_offset = geometry.offset();
        log::trace!(
            "thumb of panel {} -> width {} offset {}",
            self.parts.panel,
            geometry.style_width(),
            self.current_offset
        );
    }

    /// Jump so the thumb centers on `client_x`.
    pub fn seek(&mut self, client_x: f32, doc: &mut Document) {
        let metrics = self.measure(doc);
        let geometry = ThumbGeometry::compute(&metrics, self.min_thumb_width);
        let ThumbGeometry::Sized {
            width, track_max, ..
        } = geometry
        else {
            return;
        };
        if track_max <= 0.0 {
            return;
        }
        let track_left = doc.bounding_client_rect(self.parts.scrollbar).left();
        let offset = geometry::seek_offset(client_x, track_left, width, track_max);
        let left = geometry::offset_to_scroll(offset, track_max, metrics.max_scroll());
        doc.set_scroll_left(self.parts.slider, left);
        self.update_thumb(doc);
    }

    /// Start dragging the thumb with `pointer_id`.
    pub fn begin_drag(
        &mut self,
        pointer_id: PointerId,
        client_x: f32,
        cx: &mut ElementContext<'_>,
    ) {
        cx.prevent_default();
        if let Some(previous) = self.drag.take() {
            cx.unlisten(previous.move_listener);
            cx.unlisten(previous.up_listener);
        }
        cx.document_mut().set_pointer_capture(self.parts.thumb, pointer_id);
        let move_listener = cx.listen(ListenerTarget::Window, EventKind::PointerMove);
        let up_listener = cx.listen(ListenerTarget::Window, EventKind::PointerUp);
        self.drag = Some(DragSession {
            pointer_id,
            start_x: client_x,
            start_offset: self.current_offset,
            move_listener,
            up_listener,
        });
        log::debug!(
            "drag started on panel {} at x={} offset={}",
            self.parts.panel,
            client_x,
            self.current_offset
        );
    }

    /// Move the thumb to follow the pointer.
    pub fn drag_to(&mut self, client_x: f32, doc: &mut Document) {
        let Some(drag) = self.drag else {
            return;
        };
        let metrics = self.measure(doc);
        let geometry = ThumbGeometry::compute(&metrics, self.min_thumb_width);
        if !geometry.is_movable() {
            return;
        }
        let track_max = geometry.track_max();
        let offset = geometry::drag_offset(drag.start_offset, drag.start_x, client_x, track_max);
        let left = geometry::offset_to_scroll(offset, track_max, metrics.max_scroll());
        doc.set_scroll_left(self.parts.slider, left);
        self.update_thumb(doc);
    }

    /// Finish the drag session, releasing capture and window listeners.
    pub fn end_drag(&mut self, cx: &mut ElementContext<'_>) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        cx.unlisten(drag.move_listener);
        cx.unlisten(drag.up_listener);
        cx.document_mut().release_pointer_capture(self.parts.thumb, drag.pointer_id);
        log::debug!("drag ended on panel {}", self.parts.panel);
    }

    /// Smooth-scroll forward by a fraction of the visible strip.
    pub fn advance(&mut self, doc: &mut Document) {
        let step = doc.client_width(self.parts.slider) * self.next_step_ratio;
        doc.scroll_by(self.parts.slider, step, ScrollBehavior::Smooth);
    }

    /// Rewind the strip and refresh the thumb on the next frame.
    pub fn reset(&mut self, cx: &mut ElementContext<'_>) {
        cx.document_mut().scroll_to(self.parts.slider, 0.0, ScrollBehavior::Instant);
        cx.request_frame(Task::RefreshThumb {
            panel: self.parts.panel,
        });
    }

    /// Drop every listener and any drag in progress.
    pub fn detach(&mut self, cx: &mut ElementContext<'_>) {
        self.end_drag(cx);
        for id in self.listeners.drain(..) {
            cx.unlisten(id);
        }
    }
}
