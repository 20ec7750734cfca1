//! Inline style properties written by widgets.

use std::fmt;

/// A CSS length as written to an inline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    /// Resolve against the containing block's width.
    pub fn resolve(self, basis: f32) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Percent(pct) => basis * pct / 100.0,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{px}px"),
            Length::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// The transforms widgets apply. Only horizontal translation is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    TranslateX(f32),
}

impl Transform {
    pub fn translate_x(&self) -> f32 {
        match self {
            Transform::TranslateX(x) => *x,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::TranslateX(x) => write!(f, "translateX({x}px)"),
        }
    }
}

/// Inline `style` of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub width: Option<Length>,
    pub transform: Option<Transform>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal translation applied by the transform, 0 when unset.
    pub fn translate_x(&self) -> f32 {
        self.transform.map_or(0.0, |t| t.translate_x())
    }

    /// Serialize as a `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(width) = self.width {
            parts.push(format!("width: {width}"));
        }
        if let Some(transform) = self.transform {
            parts.push(format!("transform: {transform}"));
        }
        parts.join("; ")
    }
}
