//! Tab groups (`tabs-container`).
//!
//! A group owns `tab-title` and `tab-content` descendants paired by their
//! `index` attribute. Clicking a title activates the pair, rewinds the
//! panel's product strip and points the optional `[data-more-link]` at
//! the panel's `data-collection-url`.

mod events;
mod selection;
mod state;

pub use selection::{FALLBACK_INDEX, TabSelection};
pub use state::TabbedPanel;

use themedom::NodeId;

use crate::controller::Controller;
use crate::registration::ElementRegistration;

fn create(host: NodeId) -> Box<dyn Controller> {
    Box::new(TabbedPanel::new(host))
}

inventory::submit! {
    ElementRegistration::new("tabs-container", create)
}
