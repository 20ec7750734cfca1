//! Prelude module for convenient imports.
//!
//! ```ignore
//! use storefront::prelude::*;
//! ```

// Page and configuration
pub use crate::config::{ConfigError, WidgetConfig};
pub use crate::error::PageError;
pub use crate::runtime::{DispatchResult, PRIMARY_POINTER, Page};

// Controllers
pub use crate::controller::{Controller, ElementContext, Task};
pub use crate::events::EventResult;
pub use crate::mega_menu::{MegaMenu, MenuDismissal};
pub use crate::slider::{SliderScrollbar, ThumbGeometry};
pub use crate::tabs::TabbedPanel;

// Document model
pub use themedom::{Document, Element, Event, Length, NodeId, Rect, ScrollBehavior, Transform};
