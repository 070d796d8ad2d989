//! edit::resolve
//!
//! Read-only path resolution over a canonical document.
//!
//! Resolution fails closed: a path that is too short, names a missing page
//! or section, or runs off the end of any collection yields `None` with no
//! partial result. Conversion folds all historical child encodings into
//! `Node::children`, so past the component level there is exactly one
//! nested collection to index into.
//!
//! # Example
//!
//! ```
//! use weftwork::edit::resolve::resolve;
//! use weftwork::model::{LayoutDocument, Node, NodePath, Page, Section};
//!
//! let doc = LayoutDocument {
//!     pages: vec![Page {
//!         name: "A".into(),
//!         layout_type: "default".into(),
//!         sections: vec![Section {
//!             name: "S".into(),
//!             components: vec![Node::new("n0", "Text")],
//!         }],
//!     }],
//!     ..Default::default()
//! };
//!
//! let hit = resolve(&doc, &NodePath::new(vec![0, 0, 0])).unwrap();
//! assert_eq!(hit.node.id, "n0");
//! assert!(resolve(&doc, &NodePath::new(vec![0, 0, 9])).is_none());
//! ```

use crate::model::document::{LayoutDocument, Node};
use crate::model::path::NodePath;

/// A successfully resolved path: the node, its parent node (if the node is
/// not a top-level component), the collection that owns it, and its index
/// in that collection.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub node: &'a Node,
    pub parent: Option<&'a Node>,
    pub collection: &'a [Node],
    pub index: usize,
}

/// Resolve a path to a node. `None` for any invalid or out-of-range path.
pub fn resolve<'a>(doc: &'a LayoutDocument, path: &NodePath) -> Option<Resolved<'a>> {
    let segments = path.segments();
    if !path.addresses_node() {
        return None;
    }

    let page = doc.pages.get(segments[0])?;
    let section = page.sections.get(segments[1])?;

    let mut collection: &'a [Node] = &section.components;
    let mut parent: Option<&'a Node> = None;
    let mut index = segments[2];
    let mut node = collection.get(index)?;

    for &next in &segments[3..] {
        parent = Some(node);
        collection = &node.children;
        node = collection.get(next)?;
        index = next;
    }

    Some(Resolved {
        node,
        parent,
        collection,
        index,
    })
}
