//! Horizontal product strip with a custom scrollbar.
//!
//! The thumb mirrors the strip's scroll position. Clicking the track jumps
//! the thumb under the pointer, dragging the thumb scrolls the strip, and
//! the optional next button scrolls forward smoothly. The thumb is
//! recomputed on scroll, window resize, image load and size changes of the
//! strip or the track.

mod events;
pub mod geometry;
mod state;

pub use geometry::{ScrollMetrics, ThumbGeometry};
pub use state::{DragSession, SliderParts, SliderScrollbar};
