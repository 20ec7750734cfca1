mod node;

pub use node::Element;

/// Find the first element with the given tag in a builder tree (pre-order).
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Option<&'a Element> {
    if root.tag == tag {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_by_tag(child, tag) {
            return Some(found);
        }
    }

    None
}
