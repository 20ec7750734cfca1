mod common;

use common::*;
use storefront::tabs::TabbedPanel;
use storefront::themedom::{Document, Element, NodeId, ScrollBehavior};
use storefront::{Page, PageError};

fn active_titles(page: &Page) -> Vec<String> {
    find_all(page.document(), "tab-title[active]")
        .into_iter()
        .filter_map(|t| page.document().attribute(t, "index").map(str::to_string))
        .collect()
}

fn active_contents(page: &Page) -> Vec<String> {
    find_all(page.document(), "tab-content[active]")
        .into_iter()
        .filter_map(|c| page.document().attribute(c, "index").map(str::to_string))
        .collect()
}

fn title_node(page: &Page, index: &str) -> NodeId {
    find(page.document(), &format!("tab-title[index=\"{index}\"]"))
}

fn more_link_href(page: &Page) -> Option<String> {
    let link = find(page.document(), "[data-more-link]");
    page.document().attribute(link, "href").map(str::to_string)
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn test_setup_collects_group() {
    let page = tabs_page();
    let group = tabs(&page);

    assert_eq!(group.titles().len(), 2);
    assert_eq!(group.contents().len(), 2);
    assert_eq!(group.sliders().len(), 2);
    assert_eq!(group.selection().active(), Some("1"));
}

#[test]
fn test_initial_markup_state_is_kept() {
    let page = tabs_page();

    assert_eq!(active_titles(&page), vec!["1"]);
    assert_eq!(active_contents(&page), vec!["1"]);
    assert_eq!(
        page.document().attribute(title_node(&page, "1"), "aria-selected"),
        Some("true")
    );
    assert_eq!(more_link_href(&page).as_deref(), Some("/collections/new"));
}

#[test]
fn test_panel_without_thumb_is_skipped() {
    let mut doc = Document::new(tabs_markup());
    let host = find(&doc, "tabs-container");
    doc.append(
        host,
        Element::new("tab-content").attr("index", "3").child(
            Element::div()
                .data("slider", "")
                .child(Element::div().data("scrollbar", "")),
        ),
    )
    .unwrap();
    let page = Page::new(doc).unwrap();

    let group = tabs(&page);
    assert_eq!(group.contents().len(), 3);
    assert_eq!(group.sliders().len(), 2);
}

#[test]
fn test_link_falls_back_to_first_index() {
    let markup = Element::new("body").child(
        Element::new("tabs-container")
            .child(title("1", 0.0))
            .child(title("2", 100.0))
            .child(Element::link("#").data("more-link", ""))
            .child(panel("1", PANEL_ONE_Y, 1000.0).data("collection-url", "/collections/first"))
            .child(panel("2", PANEL_TWO_Y, 1000.0).data("collection-url", "/collections/second")),
    );
    let page = Page::new(Document::new(markup)).unwrap();

    assert_eq!(tabs(&page).selection().active(), None);
    assert_eq!(more_link_href(&page).as_deref(), Some("/collections/first"));
}

#[test]
fn test_link_untouched_without_url() {
    let markup = Element::new("body").child(
        Element::new("tabs-container")
            .child(title("1", 0.0).flag("active"))
            .child(title("2", 100.0))
            .child(Element::link("/collections/all").data("more-link", ""))
            .child(panel("1", PANEL_ONE_Y, 1000.0).flag("active"))
            .child(panel("2", PANEL_TWO_Y, 1000.0).data("collection-url", "/collections/second")),
    );
    let mut page = Page::new(Document::new(markup)).unwrap();
    assert_eq!(more_link_href(&page).as_deref(), Some("/collections/all"));

    let host = tabs_host(&page);
    page.activate_tab(host, "2").unwrap();
    assert_eq!(more_link_href(&page).as_deref(), Some("/collections/second"));

    // Back to a panel without a URL: the link keeps its last target.
    page.activate_tab(host, "1").unwrap();
    assert_eq!(more_link_href(&page).as_deref(), Some("/collections/second"));
}

// ============================================================================
// Activation
// ============================================================================

#[test]
fn test_click_title_activates_pair() {
    let mut page = tabs_page();
    let second = title_node(&page, "2");

    page.click(second);

    assert_eq!(active_titles(&page), vec!["2"]);
    assert_eq!(active_contents(&page), vec!["2"]);
    assert_eq!(
        page.document().attribute(second, "aria-selected"),
        Some("true")
    );
    assert_eq!(
        page.document().attribute(title_node(&page, "1"), "aria-selected"),
        Some("false")
    );
    assert_eq!(more_link_href(&page).as_deref(), Some("/collections/sale"));
}

#[test]
fn test_click_inside_title_bubbles() {
    let markup = Element::new("body").child(
        Element::new("tabs-container")
            .child(title("1", 0.0).flag("active"))
            .child(title("2", 100.0).child(Element::new("span").bounds(110.0, 5.0, 50.0, 20.0)))
            .child(panel("1", PANEL_ONE_Y, 1000.0).flag("active"))
            .child(panel("2", PANEL_TWO_Y, 1000.0)),
    );
    let mut page = Page::new(Document::new(markup)).unwrap();

    page.click_at(120.0, 10.0);
    assert_eq!(active_titles(&page), vec!["2"]);
}

#[test]
fn test_exactly_one_pair_active_after_any_sequence() {
    let mut page = tabs_page();
    let host = tabs_host(&page);

    for index in ["2", "2", "1", "2", "1", "1"] {
        page.activate_tab(host, index).unwrap();
        assert_eq!(active_titles(&page), vec![index]);
        assert_eq!(active_contents(&page), vec![index]);
        assert_eq!(tabs(&page).selection().active(), Some(index));
    }
}

#[test]
fn test_unknown_index_is_rejected() {
    let mut page = tabs_page();
    let host = tabs_host(&page);

    let err = page.activate_tab(host, "9").unwrap_err();
    assert_eq!(err, PageError::UnknownTab("9".to_string()));
    assert_eq!(active_titles(&page), vec!["1"]);
    assert_eq!(active_contents(&page), vec!["1"]);
}

#[test]
fn test_activate_tab_needs_tab_group() {
    let mut page = tabs_page();
    let root = page.document().root();

    let err = page.activate_tab(root, "1").unwrap_err();
    assert_eq!(err, PageError::NoController(root));
}

// ============================================================================
// Panel reset
// ============================================================================

#[test]
fn test_activation_rewinds_panel_strip() {
    let mut page = tabs_page();
    let host = tabs_host(&page);
    let (panel, slider, _, _, _) = slider_nodes(&page, "2");

    page.scroll_to(slider, 500.0, ScrollBehavior::Instant);
    assert!(current_offset(&page, panel) > 0.0);

    page.activate_tab(host, "2").unwrap();
    assert_eq!(page.document().scroll_left(slider), 0.0);
    assert!(page.scheduler().has_frames());

    page.run_frame();
    assert!(!page.scheduler().has_frames());
    assert_close(current_offset(&page, panel), 0.0);
}

#[test]
fn test_rewind_cancels_smooth_scroll() {
    let mut page = tabs_page();
    let host = tabs_host(&page);
    let (panel, slider, _, _, next) = slider_nodes(&page, "2");

    page.click(next);
    page.run_frame();
    assert!(page.document().is_scroll_animating());

    page.activate_tab(host, "2").unwrap();
    page.settle();

    assert_eq!(page.document().scroll_left(slider), 0.0);
    assert_close(current_offset(&page, panel), 0.0);
}

#[test]
fn test_with_controller_exposes_group() {
    let mut page = tabs_page();
    let host = tabs_host(&page);

    let count = page
        .with_controller::<TabbedPanel, _>(host, |group, _| group.titles().len())
        .unwrap();
    assert_eq!(count, 2);
}
