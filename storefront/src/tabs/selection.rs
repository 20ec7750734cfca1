/// Index of the active tab, held by the tab group.
///
/// Every `active` and `aria-selected` flag in the group is derived from
/// this value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSelection {
    active: Option<String>,
}

/// Index used when no title is marked active.
pub const FALLBACK_INDEX: &str = "1";

impl TabSelection {
    pub fn new(active: Option<String>) -> Self {
        Self { active }
    }

    pub fn select(&mut self, index: &str) {
        self.active = Some(index.to_string());
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Active index, or the fallback when nothing is selected.
    pub fn active_or_fallback(&self) -> &str {
        self.active().unwrap_or(FALLBACK_INDEX)
    }

    pub fn is_active(&self, index: Option<&str>) -> bool {
        index.is_some() && index == self.active()
    }
}
