//! Widget configuration.

use std::time::Duration;

use thiserror::Error;

/// Page-wide widget settings.
///
/// The defaults match the storefront theme: hover menus from 990 px up, a
/// 120 ms close debounce, an 80 px minimum scrollbar thumb and a next
/// button that advances 90% of the visible strip.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Minimum viewport width (px, inclusive) for hover-driven menus.
    pub breakpoint: f32,

    /// Delay before a menu closes after the pointer leaves it.
    pub close_delay: Duration,

    /// Hard floor for the scrollbar thumb width (px).
    pub min_thumb_width: f32,

    /// Fraction of the visible strip width the next button scrolls by.
    pub next_step_ratio: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            breakpoint: 990.0,
            close_delay: Duration::from_millis(120),
            min_thumb_width: 80.0,
            next_step_ratio: 0.9,
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hover breakpoint.
    pub fn breakpoint(mut self, px: f32) -> Self {
        self.breakpoint = px;
        self
    }

    /// Set the menu close debounce.
    pub fn close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    /// Set the minimum thumb width.
    pub fn min_thumb_width(mut self, px: f32) -> Self {
        self.min_thumb_width = px;
        self
    }

    /// Set the next-button step ratio.
    pub fn next_step_ratio(mut self, ratio: f32) -> Self {
        self.next_step_ratio = ratio;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.breakpoint.is_finite() && self.breakpoint > 0.0) {
            return Err(ConfigError::InvalidBreakpoint(self.breakpoint));
        }
        if !(self.min_thumb_width.is_finite() && self.min_thumb_width >= 0.0) {
            return Err(ConfigError::InvalidThumbWidth(self.min_thumb_width));
        }
        if !(self.next_step_ratio > 0.0 && self.next_step_ratio <= 1.0) {
            return Err(ConfigError::StepRatioOutOfRange(self.next_step_ratio));
        }
        Ok(())
    }
}

/// Errors reported by [`WidgetConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The breakpoint must be a positive width.
    #[error("breakpoint must be a positive width, got {0}")]
    InvalidBreakpoint(f32),

    /// The minimum thumb width must be zero or more.
    #[error("minimum thumb width must be zero or more, got {0}")]
    InvalidThumbWidth(f32),

    /// The step ratio must lie in (0, 1].
    #[error("next step ratio must be in (0, 1], got {0}")]
    StepRatioOutOfRange(f32),
}
