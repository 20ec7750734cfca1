use themedom::{Document, EventKind, ListenerTarget, NodeId, Selector, TimerId};

use crate::controller::{ElementContext, Task};

/// `header-menu details.mega-menu`
pub fn menu_selector() -> Selector {
    Selector::tag("header-menu").descendant(Selector::tag("details").with_class("mega-menu"))
}

/// `header-menu details.mega-menu[open]`
pub fn open_menu_selector() -> Selector {
    menu_selector().with_attr("open")
}

/// Close every open menu in the document except `except`. Returns how many
/// were closed.
pub fn close_open_menus(doc: &mut Document, except: Option<NodeId>) -> usize {
    let open = doc.query_all(doc.root(), &open_menu_selector());
    let mut closed = 0;
    for menu in open.into_iter().filter(|&m| Some(m) != except) {
        doc.remove_attribute(menu, "open");
        closed += 1;
    }
    closed
}

/// One dropdown inside a header menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    /// The `details.mega-menu` disclosure element.
    pub details: NodeId,
    /// The `.mega-menu__content` panel, if present.
    pub content: Option<NodeId>,
    /// The `summary` trigger, if present.
    pub summary: Option<NodeId>,
    pub(crate) close_timer: Option<TimerId>,
}

impl MenuEntry {
    pub fn close_pending(&self) -> bool {
        self.close_timer.is_some()
    }

    fn involves(&self, node: NodeId) -> bool {
        self.details == node || self.content == Some(node) || self.summary == Some(node)
    }
}

/// Hover-driven dropdowns of a `header-menu`.
#[derive(Debug)]
pub struct MegaMenu {
    pub(crate) host: NodeId,
    pub(crate) entries: Vec<MenuEntry>,
}

impl MegaMenu {
    pub fn new(host: NodeId) -> Self {
        Self {
            host,
            entries: Vec::new(),
        }
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn entry(&self, details: NodeId) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.details == details)
    }

    pub(crate) fn entry_for(&mut self, node: NodeId) -> Option<&mut MenuEntry> {
        self.entries.iter_mut().find(|e| e.involves(node))
    }

    /// Whether hover handling is active at the current viewport width.
    pub fn hover_mode(cx: &ElementContext<'_>) -> bool {
        cx.document().viewport().width >= cx.config().breakpoint
    }

    pub(crate) fn setup(&mut self, cx: &mut ElementContext<'_>) {
        let doc = cx.document();
        let menus = doc.query_all(self.host, &Selector::tag("details").with_class("mega-menu"));
        self.entries = menus
            .into_iter()
            .map(|details| MenuEntry {
                details,
                content: doc.query(details, &Selector::class("mega-menu__content")),
                summary: doc.query(details, &Selector::tag("summary")),
                close_timer: None,
            })
            .collect();

        for entry in &self.entries {
            let hover_targets = std::iter::once(entry.details).chain(entry.content);
            for node in hover_targets {
                cx.listen(ListenerTarget::Node(node), EventKind::PointerEnter);
                cx.listen(ListenerTarget::Node(node), EventKind::PointerLeave);
            }
            if let Some(summary) = entry.summary {
                cx.listen(ListenerTarget::Node(summary), EventKind::Click);
            }
            cx.listen(ListenerTarget::Node(entry.details), EventKind::Toggle);
        }
        log::debug!("header menu {} bound {} menus", self.host, self.entries.len());
    }

    /// Open the menu containing `node`, closing every other open menu.
    pub(crate) fn open(&mut self, node: NodeId, cx: &mut ElementContext<'_>) -> bool {
        if !Self::hover_mode(cx) {
            return false;
        }
        let Some(entry) = self.entry_for(node) else {
            return false;
        };
        if let Some(timer) = entry.close_timer.take() {
            cx.clear_timeout(timer);
        }
        let details = entry.details;
        close_open_menus(cx.document_mut(), Some(details));
        cx.document_mut().set_flag(details, "open", true);
        log::trace!("menu {details} opened");
        true
    }

    /// Schedule the menu containing `node` to close after the debounce.
    pub(crate) fn schedule_close(&mut self, node: NodeId, cx: &mut ElementContext<'_>) -> bool {
        if !Self::hover_mode(cx) {
            return false;
        }
        let delay = cx.config().close_delay;
        let Some(entry) = self.entry_for(node) else {
            return false;
        };
        if let Some(timer) = entry.close_timer.take() {
            cx.clear_timeout(timer);
        }
        let details = entry.details;
        entry.close_timer = Some(cx.set_timeout(delay, Task::CloseMenu { menu: details }));
        log::trace!("menu {details} closing in {delay:?}");
        true
    }

    pub(crate) fn close(&mut self, menu: NodeId, cx: &mut ElementContext<'_>) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.details == menu) {
            entry.close_timer = None;
        }
        cx.document_mut().remove_attribute(menu, "open");
        log::trace!("menu {menu} closed");
    }
}
