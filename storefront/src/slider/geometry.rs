//! Scrollbar thumb geometry.

use themedom::{Length, Transform};

/// Live scroll measurements read from the document at call time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current horizontal scroll offset of the strip.
    pub scroll_left: f32,
    /// Total content width of the strip.
    pub scroll_width: f32,
    /// Visible width of the strip.
    pub client_width: f32,
    /// Width of the scrollbar track.
    pub track_width: f32,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> f32 {
        self.scroll_width - self.client_width
    }

    /// Whether the content is wider than the visible strip.
    pub fn overflows(&self) -> bool {
        self.max_scroll() > 0.0
    }

    /// Normalized scroll position in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if !self.overflows() {
            return 0.0;
        }
        (self.scroll_left / self.max_scroll()).clamp(0.0, 1.0)
    }
}

/// Computed thumb size and position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThumbGeometry {
    /// No overflow: the thumb spans the whole track.
    #[default]
    Full,
    /// Overflowing content.
    Sized {
        /// Thumb width in px.
        width: f32,
        /// Distance of the thumb from the track start in px.
        offset: f32,
        /// Largest offset the thumb can take.
        track_max: f32,
    },
}

impl ThumbGeometry {
    /// Project scroll metrics onto the track.
    pub fn compute(metrics: &ScrollMetrics, min_width: f32) -> Self {
        if !metrics.overflows() {
            return ThumbGeometry::Full;
        }
        let visible_ratio = metrics.client_width / metrics.scroll_width;
        let width = (metrics.track_width * visible_ratio).max(min_width);
        let track_max = metrics.track_width - width;
        let offset = if track_max > 0.0 {
            track_max * metrics.progress()
        } else {
            0.0
        };
        ThumbGeometry::Sized {
            width,
            offset,
            track_max,
        }
    }

    pub fn offset(&self) -> f32 {
        match self {
            ThumbGeometry::Full => 0.0,
            ThumbGeometry::Sized { offset, .. } => *offset,
        }
    }

    pub fn track_max(&self) -> f32 {
        match self {
            ThumbGeometry::Full => 0.0,
            ThumbGeometry::Sized { track_max, .. } => *track_max,
        }
    }

    /// Thumb width in px, or `None` when it spans the track.
    pub fn width(&self) -> Option<f32> {
        match self {
            ThumbGeometry::Full => None,
            ThumbGeometry::Sized { width, .. } => Some(*width),
        }
    }

    /// Whether the thumb can move at all.
    pub fn is_movable(&self) -> bool {
        self.track_max() > 0.0
    }

    pub fn style_width(&self) -> Length {
        match self {
            ThumbGeometry::Full => Length::Percent(100.0),
            ThumbGeometry::Sized { width, .. } => Length::Px(*width),
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::TranslateX(self.offset())
    }
}

/// Scroll offset that corresponds to a thumb offset.
pub fn offset_to_scroll(offset: f32, track_max: f32, max_scroll: f32) -> f32 {
    if track_max <= 0.0 {
        return 0.0;
    }
    offset / track_max * max_scroll
}

/// Thumb offset for a click on the track, centering the thumb on the pointer.
pub fn seek_offset(pointer_x: f32, track_left: f32, thumb_width: f32, track_max: f32) -> f32 {
    let x = pointer_x - track_left - thumb_width / 2.0;
    x.clamp(0.0, track_max.max(0.0))
}

/// Thumb offset while dragging, relative to where the drag started.
pub fn drag_offset(start_offset: f32, start_x: f32, pointer_x: f32, track_max: f32) -> f32 {
    (start_offset + (pointer_x - start_x)).clamp(0.0, track_max.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f32) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_width: 1000.0,
            client_width: 400.0,
            track_width: 300.0,
        }
    }

    #[test]
    fn test_thumb_scales_with_visible_ratio() {
        let geometry = ThumbGeometry::compute(&metrics(300.0), 80.0);
        assert_eq!(geometry.width(), Some(120.0));
        assert_eq!(geometry.track_max(), 180.0);
        assert!((geometry.offset() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_thumb_respects_min_width() {
        let m = ScrollMetrics {
            scroll_left: 0.0,
            scroll_width: 10_000.0,
            client_width: 100.0,
            track_width: 300.0,
        };
        let geometry = ThumbGeometry::compute(&m, 80.0);
        assert_eq!(geometry.width(), Some(80.0));
        assert_eq!(geometry.track_max(), 220.0);
    }

    #[test]
    fn test_no_overflow_is_full() {
        let m = ScrollMetrics {
            scroll_left: 0.0,
            scroll_width: 400.0,
            client_width: 400.0,
            track_width: 300.0,
        };
        let geometry = ThumbGeometry::compute(&m, 80.0);
        assert_eq!(geometry, ThumbGeometry::Full);
        assert_eq!(geometry.style_width(), Length::Percent(100.0));
        assert_eq!(geometry.offset(), 0.0);
    }

    #[test]
    fn test_narrow_track_pins_offset() {
        let m = ScrollMetrics {
            scroll_left: 500.0,
            scroll_width: 1000.0,
            client_width: 400.0,
            track_width: 60.0,
        };
        let geometry = ThumbGeometry::compute(&m, 80.0);
        assert_eq!(geometry.offset(), 0.0);
        assert!(!geometry.is_movable());
    }

    #[test]
    fn test_seek_clamps_to_track() {
        assert_eq!(seek_offset(0.0, 10.0, 120.0, 180.0), 0.0);
        assert_eq!(seek_offset(1000.0, 10.0, 120.0, 180.0), 180.0);
        assert_eq!(seek_offset(160.0, 10.0, 120.0, 180.0), 90.0);
    }

    #[test]
    fn test_drag_offset_clamps() {
        assert_eq!(drag_offset(0.0, 100.0, 150.0, 180.0), 50.0);
        assert_eq!(drag_offset(170.0, 100.0, 150.0, 180.0), 180.0);
        assert_eq!(drag_offset(10.0, 100.0, 20.0, 180.0), 0.0);
    }

    #[test]
    fn test_offset_to_scroll_without_travel() {
        assert_eq!(offset_to_scroll(10.0, 0.0, 600.0), 0.0);
        assert!((offset_to_scroll(90.0, 180.0, 600.0) - 300.0).abs() < 1e-4);
    }
}
