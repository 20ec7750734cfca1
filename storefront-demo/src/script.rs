//! Scripted visit of the home page.
//!
//! Each step drives the page the way a shopper would and reports the
//! attributes and styles the widgets wrote.

use std::time::Duration;

use storefront::prelude::*;
use storefront::tabs::TabbedPanel;
use themedom::Selector;
use tokio::time::sleep;

use crate::error::VisitError;

/// Wall-clock length of one animation frame.
const FRAME: Duration = Duration::from_millis(16);

pub struct Visit {
    page: Page,
    /// Slow the replay down to wall-clock speed.
    paced: bool,
}

impl Visit {
    pub fn new(page: Page, paced: bool) -> Self {
        Self { page, paced }
    }

    fn find(&self, selector: &str) -> Result<NodeId, VisitError> {
        let parsed = Selector::parse(selector)?;
        self.page
            .document()
            .query(self.page.document().root(), &parsed)
            .ok_or_else(|| VisitError::Missing(selector.to_string()))
    }

    /// Let `duration` pass on the page clock.
    async fn wait(&mut self, duration: Duration) {
        if self.paced {
            sleep(duration).await;
        }
        self.page.advance(duration);
    }

    /// Run frames until animations finish.
    async fn settle(&mut self) {
        let mut frames = 0;
        while self.page.document().is_scroll_animating() || self.page.scheduler().has_frames() {
            if self.paced {
                sleep(FRAME).await;
            }
            self.page.run_frame();
            frames += 1;
        }
        log::debug!("settled after {frames} frames");
    }

    fn report_menus(&self, step: &str) {
        let doc = self.page.document();
        let open: Vec<&str> = doc
            .query_all(doc.root(), &storefront::mega_menu::open_menu_selector())
            .into_iter()
            .filter_map(|m| doc.attribute(m, "data-label"))
            .collect();
        println!("{step:<32} open menus: {open:?}");
    }

    fn report_strip(&self, step: &str, index: &str) -> Result<(), VisitError> {
        let panel = self.find(&format!("tab-content[index=\"{index}\"]"))?;
        let host = self.find("tabs-container")?;
        let slider = self
            .page
            .controller::<TabbedPanel>(host)
            .and_then(|tabs| tabs.slider(panel))
            .ok_or_else(|| VisitError::NoSlider(index.to_string()))?;
        let strip = slider.parts().slider;
        let thumb = slider.parts().thumb;
        let style = self
            .page
            .document()
            .style(thumb)
            .map(|s| s.to_css())
            .unwrap_or_default();
        println!(
            "{step:<32} scrollLeft {:>7.1}  thumb [{style}]",
            self.page.document().scroll_left(strip)
        );
        Ok(())
    }

    fn report_tabs(&self, step: &str) -> Result<(), VisitError> {
        let doc = self.page.document();
        let active = doc
            .query(doc.root(), &Selector::tag("tab-title").with_attr("active"))
            .and_then(|t| doc.attribute(t, "data-label"));
        let link = self.find("[data-more-link]")?;
        println!(
            "{step:<32} active tab: {:?}  more link: {:?}",
            active.unwrap_or("-"),
            doc.attribute(link, "href").unwrap_or("-")
        );
        Ok(())
    }

    pub async fn run(mut self) -> Result<(), VisitError> {
        self.report_tabs("page loaded")?;
        self.report_strip("page loaded", "1")?;

        // Header menus
        let shop = self.find("details.mega-menu[data-label=shop]")?;
        let brands = self.find("details.mega-menu[data-label=brands]")?;
        self.page.hover(shop);
        self.report_menus("hover shop");
        self.page.unhover(shop);
        self.page.hover(brands);
        self.report_menus("move to brands");
        self.page.unhover(brands);
        let delay = self.page.config().close_delay;
        self.wait(delay).await;
        self.report_menus("leave header");

        // Product strip
        let next = self.find("tab-content[active] [data-next]")?;
        self.page.click(next);
        self.settle().await;
        self.report_strip("next button", "1")?;

        let scrollbar = self.find("tab-content[active] [data-scrollbar]")?;
        let thumb = self.find("tab-content[active] [data-thumb]")?;
        let track = self.page.document().bounding_client_rect(scrollbar);
        self.page.dispatch(Event::PointerDown {
            target: scrollbar,
            pointer_id: PRIMARY_POINTER,
            x: track.right() - 1.0,
            y: track.top(),
        });
        self.report_strip("click track end", "1")?;

        let grip = self.page.document().bounding_client_rect(thumb).center();
        self.page.dispatch(Event::PointerDown {
            target: thumb,
            pointer_id: PRIMARY_POINTER,
            x: grip.0,
            y: grip.1,
        });
        for step in 1..=5 {
            if self.paced {
                sleep(FRAME).await;
            }
            self.page.pointer_move_to(grip.0 - 40.0 * step as f32, grip.1);
        }
        self.page.pointer_up_at(grip.0 - 200.0, grip.1);
        self.report_strip("drag thumb back", "1")?;

        let active = self.find("tab-content[active]")?;
        let doc = self.page.document();
        let lazy: Vec<NodeId> = doc
            .query_all(active, &Selector::tag("img"))
            .into_iter()
            .filter(|&img| !doc.is_complete(img))
            .collect();
        for image in lazy {
            self.page.load_image(image);
        }
        self.report_strip("lazy images loaded", "1")?;

        // Tabs
        let sale = self.find("tab-title[index=\"2\"]")?;
        self.page.click(sale);
        self.settle().await;
        self.report_tabs("open sale tab")?;
        self.report_strip("open sale tab", "2")?;

        // Narrow viewport: menus toggle on click
        self.page.resize_viewport(768.0, 1024.0);
        let summary = self.find("details.mega-menu[data-label=shop] summary")?;
        self.page.click(summary);
        self.report_menus("tap shop on tablet");
        let outside = self.find("tabs-container")?;
        self.page.click(outside);
        self.report_menus("tap outside");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup;

    fn visit() -> Visit {
        let page = Page::new(Document::new(markup::home_page())).unwrap();
        Visit::new(page, false)
    }

    #[test]
    fn test_find_reports_bad_selector() {
        let err = visit().find("details[open").unwrap_err();
        assert!(matches!(err, VisitError::Selector(_)));
    }

    #[test]
    fn test_find_reports_missing_element() {
        let err = visit().find("tab-title[index=\"9\"]").unwrap_err();
        assert!(matches!(err, VisitError::Missing(ref s) if s == "tab-title[index=\"9\"]"));
        assert_eq!(err.to_string(), "nothing matches tab-title[index=\"9\"]");
    }

    #[test]
    fn test_report_strip_without_slider() {
        let err = visit().report_strip("check", "7").unwrap_err();
        assert!(matches!(err, VisitError::Missing(_)));
    }
}
