//! Home page markup: a header with two mega menus and a featured
//! collections tab group.

use themedom::Element;

fn mega_menu(label: &str, x: f32) -> Element {
    Element::new("details")
        .class("mega-menu")
        .attr("data-label", label)
        .bounds(x, 0.0, 120.0, 60.0)
        .child(Element::new("summary").bounds(x, 0.0, 120.0, 60.0))
        .child(
            Element::div()
                .class("mega-menu__content")
                .bounds(0.0, 60.0, 1280.0, 320.0),
        )
}

fn tab_title(index: &str, label: &str, x: f32) -> Element {
    Element::new("tab-title")
        .attr("index", index)
        .attr("aria-selected", "false")
        .attr("data-label", label)
        .bounds(x, 420.0, 160.0, 40.0)
}

fn tab_content(index: &str, url: &str, products: usize) -> Element {
    let card_width = 240.0;
    let strip_width = products as f32 * card_width;
    let cards = (0..products).map(|n| {
        let image = Element::img(format!("/products/{index}-{n}.jpg"))
            .bounds(n as f32 * card_width, 480.0, card_width, 300.0);
        // The last two cards are lazy-loaded.
        if n + 2 >= products {
            image.loading()
        } else {
            image
        }
    });

    Element::new("tab-content")
        .attr("index", index)
        .data("collection-url", url)
        .bounds(0.0, 480.0, 1280.0, 380.0)
        .child(
            Element::div()
                .data("slider", "")
                .bounds(0.0, 480.0, 960.0, 300.0)
                .scroll_width(strip_width)
                .children(cards),
        )
        .child(Element::button().data("next", "").bounds(980.0, 600.0, 48.0, 48.0))
        .child(
            Element::div()
                .data("scrollbar", "")
                .bounds(40.0, 820.0, 600.0, 6.0)
                .child(Element::div().data("thumb", "").bounds(40.0, 820.0, 600.0, 6.0)),
        )
}

pub fn home_page() -> Element {
    Element::new("body")
        .bounds(0.0, 0.0, 1280.0, 900.0)
        .child(
            Element::new("header-menu")
                .bounds(0.0, 0.0, 1280.0, 60.0)
                .child(mega_menu("shop", 0.0))
                .child(mega_menu("brands", 120.0)),
        )
        .child(
            Element::new("tabs-container")
                .bounds(0.0, 400.0, 1280.0, 500.0)
                .child(
                    tab_title("1", "new-in", 0.0)
                        .flag("active")
                        .attr("aria-selected", "true"),
                )
                .child(tab_title("2", "sale", 160.0))
                .child(
                    Element::link("/collections")
                        .data("more-link", "")
                        .bounds(1100.0, 420.0, 140.0, 40.0),
                )
                .child(tab_content("1", "/collections/new-in", 12).flag("active"))
                .child(tab_content("2", "/collections/sale", 5)),
        )
}
