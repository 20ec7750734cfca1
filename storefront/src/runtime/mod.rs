//! Page runtime - owns the document, the controllers and their listeners,
//! timers and animation frames.

mod dispatch;

use std::any::Any;

use themedom::{Document, DomError, Element, Listeners, NodeId, OwnerId, Scheduler};

use crate::config::WidgetConfig;
use crate::controller::{Controller, ElementContext, Task};
use crate::error::PageError;
use crate::registration::{lookup_element, registered_systems};
use crate::tabs::TabbedPanel;

pub use dispatch::{DispatchResult, PRIMARY_POINTER};

// =============================================================================
// Slot
// =============================================================================

/// A live controller instance.
struct Slot {
    owner: OwnerId,
    /// Host element, `None` for page-lifetime systems.
    host: Option<NodeId>,
    controller: Box<dyn Controller>,
}

// =============================================================================
// Page
// =============================================================================

/// A storefront page: document plus upgraded widgets.
pub struct Page {
    document: Document,
    listeners: Listeners,
    scheduler: Scheduler<Task>,
    config: WidgetConfig,
    slots: Vec<Slot>,
}

impl Page {
    /// Create a page with the default configuration.
    pub fn new(document: Document) -> Result<Self, PageError> {
        Self::with_config(document, WidgetConfig::default())
    }

    /// Create a page, install systems and upgrade every registered custom
    /// element in the document.
    pub fn with_config(document: Document, config: WidgetConfig) -> Result<Self, PageError> {
        config.validate()?;
        let mut page = Self {
            document,
            listeners: Listeners::new(),
            scheduler: Scheduler::new(),
            config,
            slots: Vec::new(),
        };

        for system in registered_systems() {
            log::debug!("installing system {}", system.name);
            page.connect(None, (system.factory)());
        }
        let root = page.document.root();
        page.upgrade(root);
        page.drain_pending();
        Ok(page)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    pub fn scheduler(&self) -> &Scheduler<Task> {
        &self.scheduler
    }

    /// Owner id of the controller hosted on `host`.
    pub fn owner_of(&self, host: NodeId) -> Option<OwnerId> {
        self.slots
            .iter()
            .find(|s| s.host == Some(host))
            .map(|s| s.owner)
    }

    /// Hosts of every live element controller, in upgrade order.
    pub fn hosts(&self) -> Vec<NodeId> {
        self.slots.iter().filter_map(|s| s.host).collect()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Upgrade `scope` and its descendants.
    fn upgrade(&mut self, scope: NodeId) {
        let nodes: Vec<NodeId> = std::iter::once(scope)
            .chain(self.document.descendants(scope))
            .collect();
        for node in nodes {
            if self.owner_of(node).is_some() {
                continue;
            }
            let Some(registration) = self
                .document
                .node(node)
                .and_then(|n| lookup_element(n.tag()))
            else {
                continue;
            };
            log::debug!("upgrading <{}> at {}", registration.tag, node);
            self.connect(Some(node), (registration.factory)(node));
        }
    }

    fn connect(&mut self, host: Option<NodeId>, controller: Box<dyn Controller>) {
        let owner = OwnerId::new();
        self.slots.push(Slot {
            owner,
            host,
            controller,
        });
        self.with_slot(owner, false, |controller, cx| controller.connected(cx));
    }

    /// Tear down a controller: let it clean up, then drop whatever it still
    /// owns.
    fn teardown(&mut self, owner: OwnerId) {
        self.with_slot(owner, false, |controller, cx| controller.disconnected(cx));
        let listeners = self.listeners.remove_owner(owner);
        let scheduled = self.scheduler.cancel_owner(owner);
        if let Some(index) = self.slots.iter().position(|s| s.owner == owner) {
            let slot = self.slots.remove(index);
            log::debug!(
                "{} {} torn down ({} listeners, {} timers/frames dropped)",
                slot.controller.name(),
                owner,
                listeners,
                scheduled
            );
        }
    }

    /// Insert a subtree and upgrade the custom elements in it.
    pub fn append(&mut self, parent: NodeId, element: Element) -> Result<NodeId, PageError> {
        let id = self.document.append(parent, element)?;
        self.upgrade(id);
        self.drain_pending();
        Ok(id)
    }

    /// Tear down the controllers hosted in a subtree, then detach it.
    pub fn remove(&mut self, node: NodeId) -> Result<(), PageError> {
        if node == self.document.root() {
            return Err(DomError::RootRemoval.into());
        }
        if self.document.node(node).is_none() {
            return Err(DomError::UnknownNode(node).into());
        }
        if !self.document.is_connected(node) {
            return Err(DomError::Detached(node).into());
        }

        let hosted: Vec<OwnerId> = self
            .slots
            .iter()
            .filter(|s| s.host.is_some_and(|h| self.document.contains(node, h)))
            .map(|s| s.owner)
            .collect();
        for owner in hosted {
            self.teardown(owner);
        }
        self.document.detach(node)?;
        self.drain_pending();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Controllers
    // -------------------------------------------------------------------------

    /// Run `f` against a controller with a fresh context. Returns the
    /// closure's result and whether it prevented the default action.
    fn with_slot<R>(
        &mut self,
        owner: OwnerId,
        passive: bool,
        f: impl FnOnce(&mut dyn Controller, &mut ElementContext<'_>) -> R,
    ) -> Option<(R, bool)> {
        let Page {
            document,
            listeners,
            scheduler,
            config,
            slots,
        } = self;
        let slot = slots.iter_mut().find(|s| s.owner == owner)?;
        let mut cx = ElementContext::new(owner, slot.host, document, listeners, scheduler, config)
            .passive(passive);
        let result = f(slot.controller.as_mut(), &mut cx);
        Some((result, cx.is_default_prevented()))
    }

    /// The controller on `host`, if it is a `T`.
    pub fn controller<T: Any>(&self, host: NodeId) -> Option<&T> {
        self.slots
            .iter()
            .find(|s| s.host == Some(host))
            .and_then(|s| s.controller.as_any().downcast_ref::<T>())
    }

    /// Run `f` against the `T` controller on `host`, then deliver the
    /// events its mutations queued.
    pub fn with_controller<T: Any, R>(
        &mut self,
        host: NodeId,
        f: impl FnOnce(&mut T, &mut ElementContext<'_>) -> R,
    ) -> Result<R, PageError> {
        let owner = self.owner_of(host).ok_or(PageError::NoController(host))?;
        let outcome = self.with_slot(owner, false, |controller, cx| {
            controller
                .as_any_mut()
                .downcast_mut::<T>()
                .map(|typed| f(typed, cx))
        });
        let result = match outcome {
            Some((Some(result), _)) => result,
            Some((None, _)) => {
                return Err(PageError::WrongController {
                    host,
                    expected: std::any::type_name::<T>(),
                });
            }
            None => return Err(PageError::NoController(host)),
        };
        self.drain_pending();
        Ok(result)
    }

    /// Activate the tab with `index` in the tab group on `host`.
    pub fn activate_tab(&mut self, host: NodeId, index: &str) -> Result<(), PageError> {
        let activated =
            self.with_controller::<TabbedPanel, _>(host, |tabs, cx| tabs.activate(index, cx))?;
        if activated {
            Ok(())
        } else {
            Err(PageError::UnknownTab(index.to_string()))
        }
    }
}
