//! Storefront theme widgets: tab groups with scrollable product strips and
//! hover-driven header menus, running on the `themedom` document model.

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod mega_menu;
pub mod prelude;
pub mod registration;
pub mod runtime;
pub mod slider;
pub mod tabs;

pub use config::{ConfigError, WidgetConfig};
pub use controller::{Controller, ElementContext, Task};
pub use error::PageError;
pub use events::EventResult;
pub use runtime::{DispatchResult, PRIMARY_POINTER, Page};

// Re-export the document model
pub use themedom;
