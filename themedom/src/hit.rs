use crate::document::{Document, NodeId};

/// Find the deepest connected element whose rendered box contains the point.
///
/// Children are searched even when their parent's box misses the point, so
/// wrappers without layout never hide their contents.
pub fn hit_test(doc: &Document, x: f32, y: f32) -> Option<NodeId> {
    hit_test_node(doc, doc.root(), x, y)
}

fn hit_test_node(doc: &Document, id: NodeId, x: f32, y: f32) -> Option<NodeId> {
    let node = doc.node(id)?;
    if !node.is_connected() {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in node.children().iter().rev() {
        if let Some(hit) = hit_test_node(doc, *child, x, y) {
            return Some(hit);
        }
    }

    doc.bounding_client_rect(id).contains(x, y).then_some(id)
}
