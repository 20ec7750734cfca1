use themedom::{Document, EventKind, ListenerTarget, NodeId, Selector};

use super::selection::TabSelection;
use crate::controller::ElementContext;
use crate::slider::{SliderParts, SliderScrollbar};

/// A group of tab titles and content panels.
#[derive(Debug)]
pub struct TabbedPanel {
    pub(crate) host: NodeId,
    pub(crate) titles: Vec<NodeId>,
    pub(crate) contents: Vec<NodeId>,
    pub(crate) more_link: Option<NodeId>,
    pub(crate) sliders: Vec<SliderScrollbar>,
    pub(crate) selection: TabSelection,
}

impl TabbedPanel {
    pub fn new(host: NodeId) -> Self {
        Self {
            host,
            titles: Vec::new(),
            contents: Vec::new(),
            more_link: None,
            sliders: Vec::new(),
            selection: TabSelection::default(),
        }
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn titles(&self) -> &[NodeId] {
        &self.titles
    }

    pub fn contents(&self) -> &[NodeId] {
        &self.contents
    }

    pub fn selection(&self) -> &TabSelection {
        &self.selection
    }

    pub fn sliders(&self) -> &[SliderScrollbar] {
        &self.sliders
    }

    /// The slider of a content panel, if the panel has one.
    pub fn slider(&self, panel: NodeId) -> Option<&SliderScrollbar> {
        self.sliders.iter().find(|s| s.panel() == panel)
    }

    pub(crate) fn slider_mut(&mut self, panel: NodeId) -> Option<&mut SliderScrollbar> {
        self.sliders.iter_mut().find(|s| s.panel() == panel)
    }

    fn index_of(doc: &Document, node: NodeId) -> Option<&str> {
        doc.attribute(node, "index")
    }

    /// Collect titles, panels and the link, then set up the panel sliders.
    pub(crate) fn setup(&mut self, cx: &mut ElementContext<'_>) {
        let doc = cx.document();
        self.titles = doc.query_all(self.host, &Selector::tag("tab-title"));
        self.contents = doc.query_all(self.host, &Selector::tag("tab-content"));
        self.more_link = doc.query(self.host, &Selector::attr("data-more-link"));

        let initial = self
            .titles
            .iter()
            .find(|&&t| doc.has_attribute(t, "active"))
            .and_then(|&t| Self::index_of(doc, t))
            .map(str::to_string);
        self.selection = TabSelection::new(initial);

        let (min_thumb, step) = (cx.config().min_thumb_width, cx.config().next_step_ratio);
        for &panel in &self.contents {
            let Some(parts) = SliderParts::locate(cx.document(), panel) else {
                log::debug!("panel {panel} has no slider, skipping");
                continue;
            };
            let mut slider = SliderScrollbar::new(parts, min_thumb, step);
            slider.attach(cx);
            self.sliders.push(slider);
        }

        for &title in &self.titles {
            cx.listen(ListenerTarget::Node(title), EventKind::Click);
        }

        self.sync_external_link(cx.document_mut());
        log::debug!(
            "tab group {} ready: {} titles, {} panels, {} sliders",
            self.host,
            self.titles.len(),
            self.contents.len(),
            self.sliders.len()
        );
    }

    /// Make `index` the active tab. Returns false, changing nothing, when
    /// no title carries that index.
    pub fn activate(&mut self, index: &str, cx: &mut ElementContext<'_>) -> bool {
        let known = self
            .titles
            .iter()
            .any(|&t| Self::index_of(cx.document(), t) == Some(index));
        if !known {
            log::warn!("tab group {} has no title with index '{}'", self.host, index);
            return false;
        }

        self.selection.select(index);
        self.apply_selection(cx.document_mut());

        let panel = self
            .contents
            .iter()
            .copied()
            .find(|&c| Self::index_of(cx.document(), c) == Some(index));
        if let Some(slider) = panel.and_then(|p| self.slider_mut(p)) {
            slider.reset(cx);
        }

        self.sync_external_link(cx.document_mut());
        log::debug!("tab group {} activated '{}'", self.host, index);
        true
    }

    fn apply_selection(&self, doc: &mut Document) {
        for &title in &self.titles {
            let on = self.selection.is_active(Self::index_of(doc, title));
            doc.set_flag(title, "active", on);
            doc.set_attribute(title, "aria-selected", if on { "true" } else { "false" });
        }
        for &content in &self.contents {
            let on = self.selection.is_active(Self::index_of(doc, content));
            doc.set_flag(content, "active", on);
        }
    }

    /// Point the external link at the active panel's collection.
    pub fn sync_external_link(&self, doc: &mut Document) {
        let Some(link) = self.more_link else {
            return;
        };
        let index = self.selection.active_or_fallback();
        let url = self
            .contents
            .iter()
            .find(|&&c| Self::index_of(doc, c) == Some(index))
            .and_then(|&c| doc.attribute(c, "data-collection-url"))
            .map(str::to_string);
        if let Some(url) = url {
            doc.set_attribute(link, "href", &url);
        }
    }
}
