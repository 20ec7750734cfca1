//! Headless document model for storefront theme widgets.
//!
//! Provides the subset of the browser contract the widgets rely on: an
//! element tree with attributes, inline style, layout rectangles and
//! horizontal scroll boxes, selector queries, listener bookkeeping, pointer
//! capture and a virtual clock for timers and animation frames.

pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod scheduler;
pub mod scroll;
pub mod selector;
pub mod style;

pub use document::{Document, Node, NodeId};
pub use element::Element;
pub use error::DomError;
pub use event::{Event, EventKind, PointerId};
pub use hit::hit_test;
pub use layout::Rect;
pub use listener::{Listener, ListenerId, ListenerOptions, ListenerTarget, Listeners, OwnerId};
pub use scheduler::{FrameId, Scheduler, TimerId};
pub use scroll::{ScrollBehavior, ScrollBox};
pub use selector::{Selector, SelectorError};
pub use style::{InlineStyle, Length, Transform};
