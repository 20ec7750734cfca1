//! Registration types for inventory-based auto-discovery.
//!
//! Custom element controllers submit an [`ElementRegistration`] keyed by
//! tag name; page-lifetime systems submit a [`SystemRegistration`]. A
//! [`Page`](crate::Page) installs every system once and upgrades every
//! element whose tag is registered.

use themedom::NodeId;

use crate::controller::Controller;

/// Custom element registration entry for inventory.
pub struct ElementRegistration {
    /// Tag name the controller upgrades.
    pub tag: &'static str,
    /// Factory creating a controller for a host element.
    pub factory: fn(NodeId) -> Box<dyn Controller>,
}

impl ElementRegistration {
    /// Create a new element registration.
    pub const fn new(tag: &'static str, factory: fn(NodeId) -> Box<dyn Controller>) -> Self {
        Self { tag, factory }
    }
}

inventory::collect!(ElementRegistration);

/// Get all registered custom elements.
pub fn registered_elements() -> impl Iterator<Item = &'static ElementRegistration> {
    inventory::iter::<ElementRegistration>()
}

/// Find the registration for a tag name.
pub fn lookup_element(tag: &str) -> Option<&'static ElementRegistration> {
    registered_elements().find(|r| r.tag == tag)
}

/// System registration entry for inventory.
pub struct SystemRegistration {
    /// System name.
    pub name: &'static str,
    /// Factory function to create the system.
    pub factory: fn() -> Box<dyn Controller>,
}

impl SystemRegistration {
    /// Create a new system registration.
    pub const fn new(name: &'static str, factory: fn() -> Box<dyn Controller>) -> Self {
        Self { name, factory }
    }
}

inventory::collect!(SystemRegistration);

/// Get all registered systems.
pub fn registered_systems() -> impl Iterator<Item = &'static SystemRegistration> {
    inventory::iter::<SystemRegistration>()
}
