//! model::document
//!
//! Canonical document types for the page → section → component tree.
//!
//! # Wire Shape
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "name": "Login",
//!       "layout_type": "default",
//!       "sections": [
//!         { "name": "Main Section", "components": [ { "id": "node-0", ... } ] }
//!       ]
//!     }
//!   ],
//!   "theme": { "primary": "#0D9488", ... },
//!   "tokens": { "gap": 16, ... }
//! }
//! ```
//!
//! # Invariants
//!
//! A [`LayoutDocument`] produced by the ingest pipeline satisfies:
//!
//! - Every node carries an `id` (synthesized from sibling position if the
//!   raw input had none).
//! - Node `type` tags are canonicalized against a fixed alias table, or
//!   passed through verbatim when unrecognized.
//! - `props` never contains the structural keys `children`, `items`,
//!   `fields`, or `buttons`; sub-structure lives only in `children`.
//!
//! Deserialization is tolerant (missing fields default) so documents the
//! pipeline wrote can always be read back, but arbitrary raw input should go
//! through [`crate::ingest::shape::normalize`] instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open property bag attached to nodes, themes, and tokens.
///
/// Values are arbitrary JSON leaves; unrecognized keys pass through the
/// pipeline untouched.
pub type Props = serde_json::Map<String, Value>;

/// A complete canonical layout document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Top-level pages, in presentation order.
    #[serde(default)]
    pub pages: Vec<Page>,

    /// Theme colors (`primary`, `background`, `surface`, `text`, ...).
    #[serde(default)]
    pub theme: Props,

    /// Spacing/radius design tokens (`gap`, `padding`, ...).
    #[serde(default)]
    pub tokens: Props,
}

impl LayoutDocument {
    /// Total number of top-level components across all pages and sections.
    pub fn component_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.sections)
            .map(|s| s.components.len())
            .sum()
    }
}

/// One page (historically "screen") of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub name: String,

    /// Free-form layout hint (e.g. `"default"`, `"scroll"`).
    #[serde(default = "default_layout_type")]
    pub layout_type: String,

    #[serde(default)]
    pub sections: Vec<Section>,
}

fn default_layout_type() -> String {
    "default".to_string()
}

/// A named group of components within a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub components: Vec<Node>,
}

/// One component in the canonical tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable identifier; synthesized from position when the input had none.
    #[serde(default)]
    pub id: String,

    /// Canonical type tag (see [`crate::render::tag`] for the vocabulary).
    /// Unrecognized tags survive verbatim.
    #[serde(rename = "type", default)]
    pub tag: String,

    /// Leaf attributes. Never contains structural keys after conversion.
    #[serde(default)]
    pub props: Props,

    /// Nested components. The only child collection in canonical form.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Construct a node with an id and tag and nothing else.
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_wire_shape_uses_type_key() {
        let node = Node::new("node-0", "Button");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], json!("Button"));
        assert_eq!(value["id"], json!("node-0"));
        assert!(value["props"].as_object().unwrap().is_empty());
        assert!(value["children"].as_array().unwrap().is_empty());
    }

    #[test]
    fn tolerant_deserialization_defaults_missing_fields() {
        let node: Node = serde_json::from_value(json!({ "type": "Text" })).unwrap();
        assert_eq!(node.tag, "Text");
        assert_eq!(node.id, "");
        assert!(node.children.is_empty());

        let page: Page = serde_json::from_value(json!({ "name": "Home" })).unwrap();
        assert_eq!(page.layout_type, "default");
        assert!(page.sections.is_empty());
    }

    #[test]
    fn subtree_len_counts_nested_children() {
        let mut root = Node::new("a", "Container");
        let mut mid = Node::new("b", "Card");
        mid.children.push(Node::new("c", "Text"));
        root.children.push(mid);
        assert_eq!(root.subtree_len(), 3);
    }

    #[test]
    fn component_count_spans_pages_and_sections() {
        let doc = LayoutDocument {
            pages: vec![Page {
                name: "A".into(),
                layout_type: "default".into(),
                sections: vec![
                    Section {
                        name: "S1".into(),
                        components: vec![Node::new("x", "Text")],
                    },
                    Section {
                        name: "S2".into(),
                        components: vec![Node::new("y", "Text"), Node::new("z", "Image")],
                    },
                ],
            }],
            theme: Props::new(),
            tokens: Props::new(),
        };
        assert_eq!(doc.component_count(), 3);
    }
}
