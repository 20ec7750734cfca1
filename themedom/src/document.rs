use std::collections::{HashMap, VecDeque};
use std::fmt;

use crate::element::Element;
use crate::error::DomError;
use crate::event::{Event, PointerId};
use crate::layout::Rect;
use crate::scroll::{ScrollBehavior, ScrollBox};
use crate::selector::Selector;
use crate::style::InlineStyle;

/// Node identifier (index into the document arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The document root.
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live element in the document.
#[derive(Debug, Clone)]
pub struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    style: InlineStyle,
    rect: Rect,
    scroll: ScrollBox,
    complete: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    connected: bool,
}

impl Node {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(n, _)| n == name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    pub fn style(&self) -> &InlineStyle {
        &self.style
    }

    /// Layout rectangle before inline style is applied.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn scroll(&self) -> &ScrollBox {
        &self.scroll
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Arena-backed element tree plus the page-wide state elements share:
/// viewport size, pointer capture and the queue of events produced by
/// mutations (scroll, size change, toggle).
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    viewport: Rect,
    pointer_captures: HashMap<PointerId, NodeId>,
    pending: VecDeque<Event>,
}

impl Document {
    /// Build a document from a markup tree. The root's rect is the viewport.
    pub fn new(root: Element) -> Self {
        let viewport = Rect::from_size(root.rect.width, root.rect.height);
        let mut doc = Self {
            nodes: Vec::new(),
            viewport,
            pointer_captures: HashMap::new(),
            pending: VecDeque::new(),
        };
        doc.insert_tree(None, root);
        doc
    }

    fn insert_tree(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let Element {
            tag,
            attributes,
            rect,
            scroll_width,
            complete,
            children,
        } = element;
        self.nodes.push(Node {
            tag,
            attributes,
            style: InlineStyle::default(),
            rect,
            scroll: ScrollBox::new(scroll_width),
            complete,
            parent,
            children: Vec::new(),
            connected: true,
        });
        for child in children {
            let child_id = self.insert_tree(Some(id), child);
            self.nodes[id.index()].children.push(child_id);
        }
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.connected)
    }

    // -------------------------------------------------------------------------
    // Tree
    // -------------------------------------------------------------------------

    /// Insert a subtree as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, DomError> {
        match self.node(parent) {
            None => return Err(DomError::UnknownNode(parent)),
            Some(node) if !node.connected => return Err(DomError::Detached(parent)),
            Some(_) => {}
        }
        let id = self.insert_tree(Some(parent), element);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Remove a subtree from the document. Its nodes stay in the arena,
    /// disconnected, so stale ids never alias new nodes.
    pub fn detach(&mut self, id: NodeId) -> Result<(), DomError> {
        if id == NodeId::ROOT {
            return Err(DomError::RootRemoval);
        }
        let node = self.node(id).ok_or(DomError::UnknownNode(id))?;
        if !node.connected {
            return Err(DomError::Detached(id));
        }
        if let Some(parent) = node.parent {
            self.nodes[parent.index()].children.retain(|c| *c != id);
        }

        let subtree: Vec<NodeId> = std::iter::once(id).chain(self.descendants(id)).collect();
        for node in &subtree {
            self.nodes[node.index()].connected = false;
        }
        self.pointer_captures
            .retain(|_, captured| !subtree.contains(captured));
        self.pending
            .retain(|event| event.target().is_none_or(|t| !subtree.contains(&t)));
        Ok(())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |n| self.parent(*n))
    }

    /// Descendants in document (pre-)order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self
            .node(id)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            result.push(next);
            if let Some(node) = self.node(next) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        result
    }

    /// Whether `node` is `ancestor` or inside it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        selector.matches(self, id)
    }

    /// First descendant of `scope` matching the selector.
    pub fn query(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|id| selector.matches(self, *id))
    }

    /// All descendants of `scope` matching the selector, in document order.
    pub fn query_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|id| selector.matches(self, *id))
            .collect()
    }

    /// The node itself or its nearest ancestor matching the selector.
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|n| selector.matches(self, *n))
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.node(id).is_some_and(|n| n.has_attribute(name))
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(node) = self.node_mut(id) else {
            log::warn!("set_attribute on unknown node {id}");
            return;
        };
        match node.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Returns true if the attribute was present.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let before = node.attributes.len();
        node.attributes.retain(|(n, _)| n != name);
        node.attributes.len() != before
    }

    /// Add or remove a presence attribute.
    pub fn set_flag(&mut self, id: NodeId, name: &str, on: bool) {
        if on {
            if !self.has_attribute(id, name) {
                self.set_attribute(id, name, "");
            }
        } else {
            self.remove_attribute(id, name);
        }
    }

    // -------------------------------------------------------------------------
    // Style and layout
    // -------------------------------------------------------------------------

    pub fn style(&self, id: NodeId) -> Option<&InlineStyle> {
        self.node(id).map(|n| &n.style)
    }

    pub fn style_mut(&mut self, id: NodeId) -> Option<&mut InlineStyle> {
        self.node_mut(id).map(|n| &mut n.style)
    }

    /// Layout rectangle, before inline style. Empty for unknown nodes.
    pub fn rect(&self, id: NodeId) -> Rect {
        self.node(id).map(|n| n.rect).unwrap_or_default()
    }

    /// Replace a node's layout rectangle. A change in size queues a
    /// `SizeChange` event for resize observers.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let resized = !node.rect.same_size(&rect);
        node.rect = rect;
        if resized {
            self.clamp_scroll(id);
            self.pending.push_back(Event::SizeChange { target: id });
        }
    }

    /// The rendered box: layout rect with inline width and translations
    /// (own and inherited) applied. Percent widths resolve against the
    /// parent's rendered width.
    pub fn bounding_client_rect(&self, id: NodeId) -> Rect {
        let Some(node) = self.node(id) else {
            return Rect::default();
        };
        let mut rect = node.rect;
        if let Some(width) = node.style.width {
            let basis = node
                .parent
                .map(|p| self.bounding_client_rect(p).width)
                .unwrap_or(self.viewport.width);
            rect.width = width.resolve(basis);
        }
        rect.x += std::iter::once(id)
            .chain(self.ancestors(id))
            .filter_map(|n| self.node(n))
            .map(|n| n.style.translate_x())
            .sum::<f32>();
        rect
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Rect::from_size(width, height);
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_left(&self, id: NodeId) -> f32 {
        self.node(id).map_or(0.0, |n| n.scroll.left())
    }

    pub fn client_width(&self, id: NodeId) -> f32 {
        self.node(id).map_or(0.0, |n| n.rect.width)
    }

    pub fn scroll_width(&self, id: NodeId) -> f32 {
        self.node(id)
            .map_or(0.0, |n| n.scroll.scroll_width(n.rect.width))
    }

    pub fn max_scroll_left(&self, id: NodeId) -> f32 {
        self.node(id)
            .map_or(0.0, |n| n.scroll.max_left(n.rect.width))
    }

    /// Assign `scrollLeft`. The value is clamped and a `Scroll` event is
    /// queued if the position changed.
    pub fn set_scroll_left(&mut self, id: NodeId, left: f32) {
        self.scroll_to(id, left, ScrollBehavior::Instant);
    }

    pub fn scroll_to(&mut self, id: NodeId, left: f32, behavior: ScrollBehavior) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let client_width = node.rect.width;
        match behavior {
            ScrollBehavior::Instant => {
                if node.scroll.set_left(left, client_width) {
                    self.pending.push_back(Event::Scroll { target: id });
                }
            }
            ScrollBehavior::Smooth => node.scroll.set_target(left, client_width),
        }
    }

    pub fn scroll_by(&mut self, id: NodeId, dx: f32, behavior: ScrollBehavior) {
        if let Some(current) = self.node(id).map(|n| n.scroll.left()) {
            self.scroll_to(id, current + dx, behavior);
        }
    }

    /// Replace the scrollable content width, e.g. after images load.
    pub fn set_scroll_width(&mut self, id: NodeId, width: f32) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let client_width = node.rect.width;
        if node.scroll.set_content_width(width, client_width) {
            self.pending.push_back(Event::Scroll { target: id });
        }
    }

    fn clamp_scroll(&mut self, id: NodeId) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let left = node.scroll.left();
        let client_width = node.rect.width;
        if node.scroll.set_left(left, client_width) {
            self.pending.push_back(Event::Scroll { target: id });
        }
    }

    pub fn is_scroll_animating(&self) -> bool {
        self.nodes
            .iter()
            .any(|n| n.connected && n.scroll.is_animating())
    }

    /// Advance every smooth scroll by one frame, queueing `Scroll` events.
    pub fn step_smooth_scrolls(&mut self) {
        for (index, node) in self.nodes.iter_mut().enumerate() {
            if !node.connected {
                continue;
            }
            let client_width = node.rect.width;
            if node.scroll.step(client_width) {
                self.pending.push_back(Event::Scroll {
                    target: NodeId(index as u32),
                });
            }
        }
    }

    // -------------------------------------------------------------------------
    // Images
    // -------------------------------------------------------------------------

    pub fn is_complete(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.complete)
    }

    pub fn mark_complete(&mut self, id: NodeId) {
        if let Some(node) = self.node_mut(id) {
            node.complete = true;
        }
    }

    // -------------------------------------------------------------------------
    // Pointer capture
    // -------------------------------------------------------------------------

    pub fn set_pointer_capture(&mut self, id: NodeId, pointer: PointerId) {
        if self.is_connected(id) {
            self.pointer_captures.insert(pointer, id);
        }
    }

    /// Returns true if `id` held the capture.
    pub fn release_pointer_capture(&mut self, id: NodeId, pointer: PointerId) -> bool {
        if self.pointer_captures.get(&pointer) == Some(&id) {
            self.pointer_captures.remove(&pointer);
            true
        } else {
            false
        }
    }

    pub fn pointer_capture(&self, pointer: PointerId) -> Option<NodeId> {
        self.pointer_captures.get(&pointer).copied()
    }

    // -------------------------------------------------------------------------
    // Queued events
    // -------------------------------------------------------------------------

    pub fn queue_event(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    pub fn next_pending(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
