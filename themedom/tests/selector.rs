use themedom::{Document, Element, NodeId, Selector, SelectorError};

fn header() -> Document {
    Document::new(
        Element::new("body")
            .child(
                Element::new("header-menu").child(
                    Element::new("details")
                        .class("mega-menu")
                        .flag("open")
                        .child(Element::new("summary"))
                        .child(Element::div().class("mega-menu__content")),
                ),
            )
            .child(
                Element::new("details")
                    .class("mega-menu")
                    .flag("open")
                    .child(Element::new("summary")),
            )
            .child(
                Element::new("tabs-container")
                    .child(Element::new("tab-content").attr("index", "1"))
                    .child(Element::new("tab-content").attr("index", "2")),
            ),
    )
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_round_trips_through_display() {
    for input in [
        "tab-title",
        "tab-content[index=\"2\"]",
        "[data-slider]",
        "details.mega-menu",
        "header-menu details.mega-menu[open]",
        "*",
    ] {
        let selector = Selector::parse(input).unwrap();
        assert_eq!(selector.to_string(), input);
    }
}

#[test]
fn test_parse_accepts_bare_and_single_quoted_values() {
    let bare: Selector = "tab-content[index=2]".parse().unwrap();
    let quoted: Selector = "tab-content[index='2']".parse().unwrap();
    let builder = Selector::tag("tab-content").with_attr_eq("index", "2");
    assert_eq!(bare, builder);
    assert_eq!(quoted, builder);
}

#[test]
fn test_parse_errors() {
    assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
    assert_eq!(
        Selector::parse("tab-content[index=\"2"),
        Err(SelectorError::UnterminatedAttribute { position: 11 })
    );
    assert_eq!(
        Selector::parse("details.[open]"),
        Err(SelectorError::ExpectedName { position: 8 })
    );
    assert_eq!(
        Selector::parse("a > b"),
        Err(SelectorError::UnexpectedChar {
            ch: '>',
            position: 2
        })
    );
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_descendant_combinator_scopes_matches() {
    let doc = header();
    let inside = Selector::parse("header-menu details.mega-menu[open]").unwrap();
    let anywhere = Selector::parse("details.mega-menu[open]").unwrap();

    assert_eq!(doc.query_all(doc.root(), &inside).len(), 1);
    assert_eq!(doc.query_all(doc.root(), &anywhere).len(), 2);
}

#[test]
fn test_closest_includes_self() {
    let doc = header();
    let content = doc
        .query(doc.root(), &Selector::class("mega-menu__content"))
        .unwrap();
    let menu =
        Selector::tag("header-menu").descendant(Selector::tag("details").with_class("mega-menu"));

    let details = doc.closest(content, &menu).unwrap();
    assert_eq!(doc.closest(details, &menu), Some(details));
    assert_eq!(doc.closest(NodeId::ROOT, &menu), None);
}

#[test]
fn test_query_scoped_to_subtree() {
    let doc = header();
    let tabs = doc.query(doc.root(), &Selector::tag("tabs-container")).unwrap();
    let second = doc
        .query(tabs, &Selector::tag("tab-content").with_attr_eq("index", "2"))
        .unwrap();
    assert_eq!(doc.attribute(second, "index"), Some("2"));
    assert_eq!(doc.query(tabs, &Selector::tag("summary")), None);
}
