//! edit::mutate
//!
//! Copy-on-write set/delete over canonical documents.
//!
//! Every mutation deep-copies the whole document and edits the copy; the
//! input document is never touched, so prior snapshots stay valid and
//! callers get trivial reference-equality change detection. An unresolvable
//! path is a reported condition, not an error: the returned document is
//! structurally equal to the input.
//!
//! Deep copy costs O(tree size) per edit, which is acceptable for
//! editor-sized trees and buys the absence of any cross-version aliasing.

use tracing::warn;

use crate::model::document::{LayoutDocument, Node};
use crate::model::path::NodePath;

/// Replace the node at `path` on a deep copy of `doc`.
///
/// The returned document is always an independent copy; when the path does
/// not resolve it is structurally equal to the input.
pub fn set(doc: &LayoutDocument, path: &NodePath, node: Node) -> LayoutDocument {
    let mut next = doc.clone();
    match slot_mut(&mut next, path) {
        Some(slot) => *slot = node,
        None => warn!(%path, "set: path did not resolve; document unchanged"),
    }
    next
}

/// Splice the node at `path` out of its owning collection, on a deep copy.
///
/// Requires a node-addressing path (length ≥ 3): pages and sections cannot
/// be deleted through this operation. An unresolvable path returns an
/// unmodified copy.
pub fn delete(doc: &LayoutDocument, path: &NodePath) -> LayoutDocument {
    let mut next = doc.clone();
    match owning_collection_mut(&mut next, path) {
        Some((collection, index)) => {
            collection.remove(index);
        }
        None => warn!(%path, "delete: path did not resolve; document unchanged"),
    }
    next
}

/// Mutable reference to the slot a path addresses.
fn slot_mut<'a>(doc: &'a mut LayoutDocument, path: &NodePath) -> Option<&'a mut Node> {
    let segments = path.segments();
    if !path.addresses_node() {
        return None;
    }

    let section = doc
        .pages
        .get_mut(segments[0])?
        .sections
        .get_mut(segments[1])?;
    let mut node = section.components.get_mut(segments[2])?;
    for &index in &segments[3..] {
        node = node.children.get_mut(index)?;
    }
    Some(node)
}

/// Mutable reference to the collection owning the addressed node, plus the
/// node's index within it.
fn owning_collection_mut<'a>(
    doc: &'a mut LayoutDocument,
    path: &NodePath,
) -> Option<(&'a mut Vec<Node>, usize)> {
    let segments = path.segments();
    if !path.addresses_node() {
        return None;
    }

    let section = doc
        .pages
        .get_mut(segments[0])?
        .sections
        .get_mut(segments[1])?;

    if segments.len() == 3 {
        let index = segments[2];
        if index >= section.components.len() {
            return None;
        }
        return Some((&mut section.components, index));
    }

    let mut node = section.components.get_mut(segments[2])?;
    for &index in &segments[3..segments.len() - 1] {
        node = node.children.get_mut(index)?;
    }
    let index = *segments.last().expect("checked length above");
    if index >= node.children.len() {
        return None;
    }
    Some((&mut node.children, index))
}
