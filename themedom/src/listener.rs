//! Listener bookkeeping.
//!
//! The document model does not store callbacks. A listener records who
//! wants an event (`OwnerId`) and where (`ListenerTarget`); the host looks
//! up matching listeners and hands the event to the owning controller.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::document::NodeId;
use crate::event::EventKind;

/// Identifies the controller that owns a listener, timer or frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(u64);

impl OwnerId {
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "owner-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Window,
    Document,
    Node(NodeId),
}

/// Options accepted when attaching a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// The handler never prevents the default action.
    pub passive: bool,
    /// Remove the listener after its first invocation.
    pub once: bool,
}

impl ListenerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn passive() -> Self {
        Self {
            passive: true,
            ..Default::default()
        }
    }

    pub fn once() -> Self {
        Self {
            once: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listener {
    pub id: ListenerId,
    pub owner: OwnerId,
    pub target: ListenerTarget,
    pub kind: EventKind,
    pub options: ListenerOptions,
}

/// Registry of attached listeners, kept in registration order.
#[derive(Debug, Default)]
pub struct Listeners {
    entries: Vec<Listener>,
    next_id: u64,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        owner: OwnerId,
        target: ListenerTarget,
        kind: EventKind,
        options: ListenerOptions,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            owner,
            target,
            kind,
            options,
        });
        log::trace!(
            "listener {:?} added: {:?} {:?} for {}",
            id,
            target,
            kind,
            owner
        );
        id
    }

    /// Returns true if the listener was attached.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        self.entries.len() != before
    }

    /// Remove every listener of an owner. Returns how many were removed.
    pub fn remove_owner(&mut self, owner: OwnerId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|l| l.owner != owner);
        before - self.entries.len()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|l| l.id == id)
    }

    pub fn get(&self, id: ListenerId) -> Option<Listener> {
        self.entries.iter().find(|l| l.id == id).copied()
    }

    /// Listeners for `kind` on `target`, in registration order.
    pub fn matching(&self, target: ListenerTarget, kind: EventKind) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .copied()
            .collect()
    }

    pub fn count_for(&self, owner: OwnerId) -> usize {
        self.entries.iter().filter(|l| l.owner == owner).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
