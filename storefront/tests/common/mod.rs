#![allow(dead_code)]

use storefront::Page;
use storefront::tabs::TabbedPanel;
use storefront::themedom::{Document, Element, Length, NodeId, Selector, Transform};

pub const TITLE_Y: f32 = 0.0;
pub const PANEL_ONE_Y: f32 = 50.0;
pub const PANEL_TWO_Y: f32 = 500.0;
/// Track row is 320 px below the panel top.
pub const TRACK_OFFSET_Y: f32 = 320.0;
pub const TRACK_LEFT: f32 = 10.0;

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

pub fn find(doc: &Document, selector: &str) -> NodeId {
    let parsed = Selector::parse(selector).unwrap();
    doc.query(doc.root(), &parsed)
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
}

pub fn find_all(doc: &Document, selector: &str) -> Vec<NodeId> {
    let parsed = Selector::parse(selector).unwrap();
    doc.query_all(doc.root(), &parsed)
}

/// A content panel with a 400 px strip, a next button and a 300 px track.
pub fn panel(index: &str, y: f32, content_width: f32) -> Element {
    Element::new("tab-content")
        .attr("index", index)
        .bounds(0.0, y, 1280.0, 400.0)
        .child(
            Element::div()
                .data("slider", "")
                .bounds(0.0, y, 400.0, 300.0)
                .scroll_width(content_width)
                .child(Element::img(format!("product-{index}.jpg")).bounds(0.0, y, 200.0, 300.0)),
        )
        .child(Element::button().data("next", "").bounds(420.0, y, 40.0, 40.0))
        .child(
            Element::div()
                .data("scrollbar", "")
                .bounds(TRACK_LEFT, y + TRACK_OFFSET_Y, 300.0, 4.0)
                .child(
                    Element::div()
                        .data("thumb", "")
                        .bounds(TRACK_LEFT, y + TRACK_OFFSET_Y, 300.0, 4.0),
                ),
        )
}

pub fn title(index: &str, x: f32) -> Element {
    Element::new("tab-title")
        .attr("index", index)
        .attr("aria-selected", "false")
        .bounds(x, TITLE_Y, 100.0, 40.0)
}

/// Two tabs: "1" (active, 1000 px of content) and "2" (1200 px).
pub fn tabs_markup() -> Element {
    Element::new("body").bounds(0.0, 0.0, 1280.0, 1000.0).child(
        Element::new("tabs-container")
            .bounds(0.0, 0.0, 1280.0, 1000.0)
            .child(title("1", 0.0).flag("active").attr("aria-selected", "true"))
            .child(title("2", 100.0))
            .child(
                Element::link("#")
                    .data("more-link", "")
                    .bounds(1100.0, 0.0, 100.0, 40.0),
            )
            .child(
                panel("1", PANEL_ONE_Y, 1000.0)
                    .flag("active")
                    .data("collection-url", "/collections/new"),
            )
            .child(panel("2", PANEL_TWO_Y, 1200.0).data("collection-url", "/collections/sale")),
    )
}

pub fn tabs_page() -> Page {
    Page::new(Document::new(tabs_markup())).unwrap()
}

pub fn tabs_host(page: &Page) -> NodeId {
    find(page.document(), "tabs-container")
}

pub fn tabs(page: &Page) -> &TabbedPanel {
    page.controller::<TabbedPanel>(tabs_host(page)).unwrap()
}

/// Slider nodes of the panel with `index`: (panel, slider, scrollbar, thumb, next).
pub fn slider_nodes(page: &Page, index: &str) -> (NodeId, NodeId, NodeId, NodeId, NodeId) {
    let doc = page.document();
    let panel = find(doc, &format!("tab-content[index=\"{index}\"]"));
    let within = |name: &str| doc.query(panel, &Selector::attr(name)).unwrap();
    (
        panel,
        within("data-slider"),
        within("data-scrollbar"),
        within("data-thumb"),
        within("data-next"),
    )
}

pub fn thumb_width(page: &Page, thumb: NodeId) -> Option<Length> {
    page.document().style(thumb).and_then(|s| s.width)
}

pub fn thumb_offset(page: &Page, thumb: NodeId) -> f32 {
    page.document()
        .style(thumb)
        .and_then(|s| s.transform)
        .map_or(0.0, |t: Transform| t.translate_x())
}

pub fn current_offset(page: &Page, panel: NodeId) -> f32 {
    tabs(page).slider(panel).unwrap().current_offset()
}

/// Header with two mega menus and an unrelated block below.
pub fn menu_markup() -> Element {
    let menu = |x: f32, label: &str| {
        Element::new("details")
            .class("mega-menu")
            .attr("data-label", label)
            .bounds(x, 0.0, 100.0, 40.0)
            .child(Element::new("summary").bounds(x, 0.0, 100.0, 40.0))
            .child(
                Element::div()
                    .class("mega-menu__content")
                    .bounds(0.0, 40.0, 1280.0, 300.0),
            )
    };
    Element::new("body")
        .bounds(0.0, 0.0, 1280.0, 800.0)
        .child(
            Element::new("header-menu")
                .bounds(0.0, 0.0, 1280.0, 40.0)
                .child(menu(0.0, "shop"))
                .child(menu(100.0, "brands")),
        )
        .child(Element::div().class("outside").bounds(0.0, 500.0, 200.0, 100.0))
}

pub fn menu_page() -> Page {
    Page::new(Document::new(menu_markup())).unwrap()
}

pub fn menus(page: &Page) -> (NodeId, NodeId) {
    let all = find_all(page.document(), "details.mega-menu");
    (all[0], all[1])
}

pub fn is_open(page: &Page, menu: NodeId) -> bool {
    page.document().has_attribute(menu, "open")
}

pub fn open_count(page: &Page) -> usize {
    find_all(page.document(), "header-menu details.mega-menu[open]").len()
}
