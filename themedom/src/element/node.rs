use crate::layout::Rect;

/// Builder for markup subtrees.
///
/// An `Element` is plain data. It becomes live once it is inserted into a
/// [`Document`](crate::Document), which flattens it into nodes.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub tag: String,
    pub attributes: Vec<(String, String)>,

    // Layout (supplied by the host, the model does not compute layout)
    pub rect: Rect,
    /// Scrollable content width. Defaults to the element's own width.
    pub scroll_width: Option<f32>,

    // Images
    /// False for an image whose resource has not finished loading.
    pub complete: bool,

    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attributes: Vec::new(),
            rect: Rect::default(),
            scroll_width: None,
            complete: true,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn img(src: impl Into<String>) -> Self {
        Self::new("img").attr("src", src)
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Set a boolean (presence) attribute.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    /// Set a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn class(mut self, class: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == "class") {
            Some((_, existing)) if existing.is_empty() => {
                *existing = class.to_string();
            }
            Some((_, existing)) => {
                existing.push(' ');
                existing.push_str(class);
            }
            None => self.attributes.push(("class".to_string(), class.to_string())),
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    // Layout
    pub fn rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn bounds(self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.rect(Rect::new(x, y, width, height))
    }

    pub fn scroll_width(mut self, width: f32) -> Self {
        self.scroll_width = Some(width);
        self
    }

    /// Mark an image as still loading.
    pub fn loading(mut self) -> Self {
        self.complete = false;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }
}
