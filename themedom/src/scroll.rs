//! Horizontal scroll box.

/// Fraction of the remaining distance covered per frame by a smooth scroll.
const SMOOTH_SCROLL_STEP: f32 = 0.35;

/// Distance (px) under which a smooth scroll snaps to its target.
const SMOOTH_SCROLL_SNAP: f32 = 1.0;

/// How a programmatic scroll reaches its destination.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately.
    #[default]
    Instant,
    /// Animate over the following frames.
    Smooth,
}

/// Horizontal scroll position of an element.
///
/// The client width is owned by layout, so every operation that clamps
/// takes it as an argument.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollBox {
    left: f32,
    content_width: Option<f32>,
    target: Option<f32>,
}

impl ScrollBox {
    pub fn new(content_width: Option<f32>) -> Self {
        Self {
            left: 0.0,
            content_width,
            target: None,
        }
    }

    /// Current `scrollLeft`.
    pub fn left(&self) -> f32 {
        self.left
    }

    /// `scrollWidth`: the content width, never less than the client width.
    pub fn scroll_width(&self, client_width: f32) -> f32 {
        self.content_width.unwrap_or(client_width).max(client_width)
    }

    pub fn max_left(&self, client_width: f32) -> f32 {
        (self.scroll_width(client_width) - client_width).max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Jump to `left`, clamped. Cancels any smooth scroll in progress.
    /// Returns true if the position changed.
    pub fn set_left(&mut self, left: f32, client_width: f32) -> bool {
        self.target = None;
        let clamped = left.clamp(0.0, self.max_left(client_width));
        if clamped != self.left {
            self.left = clamped;
            true
        } else {
            false
        }
    }

    /// Start a smooth scroll toward `left`, clamped.
    pub fn set_target(&mut self, left: f32, client_width: f32) {
        let clamped = left.clamp(0.0, self.max_left(client_width));
        self.target = if clamped != self.left {
            Some(clamped)
        } else {
            None
        };
    }

    /// Advance a smooth scroll by one frame. Returns true if the position changed.
    pub fn step(&mut self, client_width: f32) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let target = target.clamp(0.0, self.max_left(client_width));
        let remaining = target - self.left;
        if remaining.abs() <= SMOOTH_SCROLL_SNAP {
            self.target = None;
            let changed = self.left != target;
            self.left = target;
            changed
        } else {
            self.left += remaining * SMOOTH_SCROLL_STEP;
            true
        }
    }

    /// Replace the content width. Returns true if the position had to be clamped.
    pub fn set_content_width(&mut self, width: f32, client_width: f32) -> bool {
        self.content_width = Some(width);
        let max = self.max_left(client_width);
        if self.left > max {
            self.left = max;
            true
        } else {
            false
        }
    }
}
