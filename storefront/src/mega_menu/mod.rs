//! Header dropdown menus (`header-menu`).
//!
//! At or above the breakpoint, hovering a `details.mega-menu` (or its
//! `.mega-menu__content`) opens it and closes the others; leaving it closes
//! it after a short debounce. Below the breakpoint the native disclosure
//! toggle applies. A page-wide system closes all menus on outside clicks.

mod dismissal;
mod events;
mod state;

pub use dismissal::MenuDismissal;
pub use state::{MegaMenu, MenuEntry, close_open_menus, menu_selector, open_menu_selector};

use themedom::NodeId;

use crate::controller::Controller;
use crate::registration::{ElementRegistration, SystemRegistration};

fn create(host: NodeId) -> Box<dyn Controller> {
    Box::new(MegaMenu::new(host))
}

fn create_dismissal() -> Box<dyn Controller> {
    Box::new(MenuDismissal)
}

inventory::submit! {
    ElementRegistration::new("header-menu", create)
}

inventory::submit! {
    SystemRegistration::new("menu-dismissal", create_dismissal)
}
