mod common;

use std::time::Duration;

use common::*;
use storefront::mega_menu::MegaMenu;
use storefront::themedom::{Document, Element, EventKind, ListenerTarget, NodeId};
use storefront::{Page, WidgetConfig};

fn content_of(page: &Page, menu: NodeId) -> NodeId {
    page.controller::<MegaMenu>(find(page.document(), "header-menu"))
        .unwrap()
        .entry(menu)
        .and_then(|e| e.content)
        .unwrap()
}

fn summary_of(page: &Page, menu: NodeId) -> NodeId {
    page.controller::<MegaMenu>(find(page.document(), "header-menu"))
        .unwrap()
        .entry(menu)
        .and_then(|e| e.summary)
        .unwrap()
}

// ============================================================================
// Hover
// ============================================================================

#[test]
fn test_hover_opens_menu() {
    let mut page = menu_page();
    let (shop, brands) = menus(&page);

    page.hover(shop);

    assert!(is_open(&page, shop));
    assert!(!is_open(&page, brands));
}

#[test]
fn test_hover_switches_open_menu() {
    let mut page = menu_page();
    let (shop, brands) = menus(&page);

    page.hover(shop);
    page.hover(brands);

    assert!(!is_open(&page, shop));
    assert!(is_open(&page, brands));
}

#[test]
fn test_leave_closes_after_delay() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);

    page.hover(shop);
    page.unhover(shop);
    assert!(is_open(&page, shop));

    page.advance(Duration::from_millis(119));
    assert!(is_open(&page, shop));

    page.advance(Duration::from_millis(1));
    assert!(!is_open(&page, shop));
}

#[test]
fn test_entering_content_cancels_close() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);
    let content = content_of(&page, shop);

    page.hover(shop);
    page.unhover(shop);
    page.advance(Duration::from_millis(60));
    page.hover(content);
    page.advance(Duration::from_millis(500));

    assert!(is_open(&page, shop));
    assert_eq!(page.scheduler().pending_timers(), 0);
}

#[test]
fn test_repeated_leave_keeps_one_timer() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);
    let content = content_of(&page, shop);

    page.hover(shop);
    page.unhover(shop);
    page.advance(Duration::from_millis(100));
    page.unhover(content);
    assert_eq!(page.scheduler().pending_timers(), 1);

    // The restarted timer runs a full delay from the second leave.
    page.advance(Duration::from_millis(100));
    assert!(is_open(&page, shop));
    page.advance(Duration::from_millis(20));
    assert!(!is_open(&page, shop));
}

#[test]
fn test_summary_click_prevented_in_hover_mode() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);
    let summary = summary_of(&page, shop);

    let result = page.click(summary);

    assert!(result.is_default_prevented());
    assert!(!is_open(&page, shop));
}

#[test]
fn test_breakpoint_is_inclusive() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);

    page.resize_viewport(990.0, 800.0);
    page.hover(shop);
    assert!(is_open(&page, shop));
}

// ============================================================================
// Narrow viewport
// ============================================================================

#[test]
fn test_hover_ignored_below_breakpoint() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);

    page.resize_viewport(989.0, 800.0);
    page.hover(shop);
    assert!(!is_open(&page, shop));

    page.unhover(shop);
    assert_eq!(page.scheduler().pending_timers(), 0);
}

#[test]
fn test_summary_toggles_below_breakpoint() {
    let mut page = menu_page();
    let (shop, brands) = menus(&page);
    let shop_summary = summary_of(&page, shop);
    let brands_summary = summary_of(&page, brands);
    page.resize_viewport(800.0, 600.0);

    let result = page.click(shop_summary);
    assert!(!result.is_default_prevented());
    assert!(is_open(&page, shop));

    page.click(brands_summary);
    assert!(is_open(&page, brands));
    assert!(!is_open(&page, shop));

    page.click(brands_summary);
    assert_eq!(open_count(&page), 0);
}

#[test]
fn test_configured_breakpoint() {
    let config = WidgetConfig::new()
        .breakpoint(1400.0)
        .close_delay(Duration::from_millis(300));
    let mut page = Page::with_config(Document::new(menu_markup()), config).unwrap();
    let (shop, _) = menus(&page);

    page.hover(shop);
    assert!(!is_open(&page, shop));

    page.resize_viewport(1440.0, 900.0);
    page.hover(shop);
    page.unhover(shop);
    page.advance(Duration::from_millis(299));
    assert!(is_open(&page, shop));
    page.advance(Duration::from_millis(1));
    assert!(!is_open(&page, shop));
}

// ============================================================================
// Outside click
// ============================================================================

#[test]
fn test_outside_click_closes_all() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);

    page.hover(shop);
    page.click_at(50.0, 550.0);

    assert_eq!(open_count(&page), 0);
}

#[test]
fn test_click_inside_menu_keeps_it_open() {
    let mut page = menu_page();
    let (shop, _) = menus(&page);
    let content = content_of(&page, shop);

    page.hover(shop);
    page.click(content);

    assert!(is_open(&page, shop));
}

#[test]
fn test_single_dismissal_listener_for_many_menus() {
    let markup = menu_markup().child(
        Element::new("header-menu").child(
            Element::new("details")
                .class("mega-menu")
                .child(Element::new("summary")),
        ),
    );
    let mut page = Page::new(Document::new(markup)).unwrap();
    let all = find_all(page.document(), "details.mega-menu");
    assert_eq!(all.len(), 3);

    let document_clicks = page
        .listeners()
        .matching(ListenerTarget::Document, EventKind::Click)
        .len();
    assert_eq!(document_clicks, 1);

    page.hover(all[2]);
    assert!(is_open(&page, all[2]));
    page.click_at(50.0, 550.0);
    assert_eq!(open_count(&page), 0);
}

// ============================================================================
// Invariant
// ============================================================================

#[test]
fn test_at_most_one_menu_open() {
    let mut page = menu_page();
    let (shop, brands) = menus(&page);
    let shop_content = content_of(&page, shop);
    let brands_summary = summary_of(&page, brands);

    let steps: Vec<Box<dyn Fn(&mut Page)>> = vec![
        Box::new(move |p: &mut Page| {
            p.hover(shop);
        }),
        Box::new(move |p: &mut Page| {
            p.hover(brands);
        }),
        Box::new(move |p: &mut Page| {
            p.unhover(brands);
        }),
        Box::new(move |p: &mut Page| {
            p.hover(shop_content);
        }),
        Box::new(|p: &mut Page| p.advance(Duration::from_millis(50))),
        Box::new(move |p: &mut Page| {
            p.click(brands_summary);
        }),
        Box::new(|p: &mut Page| {
            p.resize_viewport(700.0, 800.0);
        }),
        Box::new(move |p: &mut Page| {
            p.click(brands_summary);
        }),
        Box::new(move |p: &mut Page| {
            p.hover(shop);
        }),
        Box::new(|p: &mut Page| p.advance(Duration::from_millis(500))),
        Box::new(|p: &mut Page| {
            p.resize_viewport(1280.0, 800.0);
        }),
        Box::new(move |p: &mut Page| {
            p.hover(shop);
        }),
        Box::new(move |p: &mut Page| {
            p.hover(brands);
        }),
    ];

    for step in steps.iter().cycle().take(steps.len() * 3) {
        step(&mut page);
        assert!(open_count(&page) <= 1);
    }
}
