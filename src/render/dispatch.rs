//! render::dispatch
//!
//! Polymorphic dispatch from canonical tags to presentation handles.
//!
//! `dispatch` is pure per call: it maps one node (plus an explicit theme —
//! no ambient context) to a [`RenderNode`] the host renderer materializes.
//! Unknown tags never fail; they produce a visibly distinct placeholder
//! embedding the unrecognized tag, and their children are still dispatched
//! so the rest of the tree stays navigable.
//!
//! Theme coupling is deliberately narrow: a `Header` without an explicit
//! color inherits the theme text color, and a `Button` in its default
//! `"primary"` variant without an explicit background inherits the theme
//! primary color plus a fixed contrasting foreground. Nothing else reads
//! the theme.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::model::document::{Node, Props};
use crate::model::theme::{Theme, PRIMARY_FOREGROUND};
use crate::render::tag::{self, Category, TagSpec};

/// The element a render node materializes as.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderElement {
    /// A tag from the canonical vocabulary.
    Known {
        tag: &'static str,
        category: Category,
    },
    /// An unrecognized tag, preserved verbatim for diagnostics.
    Unknown { tag: String },
}

impl RenderElement {
    pub fn is_unknown(&self) -> bool {
        matches!(self, RenderElement::Unknown { .. })
    }
}

/// A presentation handle: resolved element, styled props, dispatched
/// children. Serializes for tooling that wants to inspect render trees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub element: RenderElement,
    pub id: String,
    pub props: Props,
    pub children: Vec<RenderNode>,
}

/// Dispatch one node (and, recursively, its children) against a theme.
pub fn dispatch(node: &Node, theme: &Theme) -> RenderNode {
    let children = node
        .children
        .iter()
        .map(|child| dispatch(child, theme))
        .collect();

    match tag::lookup(&node.tag) {
        Some(spec) => RenderNode {
            element: RenderElement::Known {
                tag: spec.name,
                category: spec.category,
            },
            id: node.id.clone(),
            props: styled_props(spec, node, theme),
            children,
        },
        None => {
            warn!(tag = %node.tag, id = %node.id, "dispatching unknown component type");
            let mut props = node.props.clone();
            props.insert(
                "label".into(),
                json!(format!("Unknown component: {}", node.tag)),
            );
            RenderNode {
                element: RenderElement::Unknown {
                    tag: node.tag.clone(),
                },
                id: node.id.clone(),
                props,
                children,
            }
        }
    }
}

/// Apply fixed per-tag prop defaults and the two sanctioned theme
/// injections.
fn styled_props(spec: &TagSpec, node: &Node, theme: &Theme) -> Props {
    let mut props = node.props.clone();
    match spec.name {
        "Header" => {
            props
                .entry("color")
                .or_insert_with(|| json!(theme.text()));
        }
        "Button" => {
            let variant = props
                .entry("variant")
                .or_insert_with(|| json!("primary"))
                .clone();
            if variant == json!("primary") && !props.contains_key("bg") {
                props.insert("bg".into(), json!(theme.primary()));
                props
                    .entry("color")
                    .or_insert_with(|| json!(PRIMARY_FOREGROUND));
            }
        }
        "TextInput" | "PasswordInput" | "IconInput" | "SearchInput" => {
            if !props.contains_key("label") {
                if let Some(placeholder) = props.get("placeholder").cloned() {
                    props.insert("label".into(), placeholder);
                }
            }
        }
        "Link" | "LinkButton" => {
            props.entry("href").or_insert_with(|| json!("#"));
            if !props.get("text").map(is_non_empty_string).unwrap_or(false) {
                if let Some(label) = props.get("label").cloned() {
                    props.insert("text".into(), label);
                }
            }
        }
        "Image" => {
            props.entry("fit").or_insert_with(|| json!("cover"));
        }
        _ => {}
    }
    props
}

fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().map(|s| !s.is_empty()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::theme;

    fn teal() -> Props {
        theme::default_theme()
    }

    #[test]
    fn known_tag_dispatches_with_category() {
        let props = teal();
        let theme = Theme::new(&props);
        let rendered = dispatch(&Node::new("a", "ProductCard"), &theme);
        assert_eq!(
            rendered.element,
            RenderElement::Known {
                tag: "ProductCard",
                category: Category::Commerce
            }
        );
    }

    #[test]
    fn unknown_tag_gets_placeholder_and_children_still_dispatch() {
        let props = teal();
        let theme = Theme::new(&props);
        let mut node = Node::new("w", "BogusWidget");
        node.children.push(Node::new("t", "Text"));
        node.children.push(Node::new("u", "AlsoBogus"));

        let rendered = dispatch(&node, &theme);
        assert!(rendered.element.is_unknown());
        assert_eq!(
            rendered.props["label"],
            json!("Unknown component: BogusWidget")
        );
        assert_eq!(rendered.children.len(), 2);
        assert!(!rendered.children[0].element.is_unknown());
        assert!(rendered.children[1].element.is_unknown());
    }

    #[test]
    fn header_inherits_theme_text_color() {
        let props = teal();
        let theme = Theme::new(&props);
        let rendered = dispatch(&Node::new("h", "Header"), &theme);
        assert_eq!(rendered.props["color"], json!("#0F172A"));

        let mut explicit = Node::new("h", "Header");
        explicit.props.insert("color".into(), json!("#FF0000"));
        let rendered = dispatch(&explicit, &theme);
        assert_eq!(rendered.props["color"], json!("#FF0000"));
    }

    #[test]
    fn primary_button_inherits_theme_background() {
        let props = teal();
        let theme = Theme::new(&props);
        let rendered = dispatch(&Node::new("b", "Button"), &theme);
        assert_eq!(rendered.props["variant"], json!("primary"));
        assert_eq!(rendered.props["bg"], json!("#0D9488"));
        assert_eq!(rendered.props["color"], json!(PRIMARY_FOREGROUND));
    }

    #[test]
    fn non_primary_button_keeps_its_own_styling() {
        let props = teal();
        let theme = Theme::new(&props);
        let mut node = Node::new("b", "Button");
        node.props.insert("variant".into(), json!("outline"));
        let rendered = dispatch(&node, &theme);
        assert!(!rendered.props.contains_key("bg"));

        let mut node = Node::new("b", "Button");
        node.props.insert("bg".into(), json!("#222222"));
        let rendered = dispatch(&node, &theme);
        assert_eq!(rendered.props["bg"], json!("#222222"));
    }

    #[test]
    fn text_input_label_falls_back_to_placeholder() {
        let props = teal();
        let theme = Theme::new(&props);
        let mut node = Node::new("i", "TextInput");
        node.props.insert("placeholder".into(), json!("Email"));
        let rendered = dispatch(&node, &theme);
        assert_eq!(rendered.props["label"], json!("Email"));
    }

    #[test]
    fn link_defaults_href_and_maps_label_to_text() {
        let props = teal();
        let theme = Theme::new(&props);
        let mut node = Node::new("l", "Link");
        node.props.insert("label".into(), json!("Forgot password?"));
        let rendered = dispatch(&node, &theme);
        assert_eq!(rendered.props["href"], json!("#"));
        assert_eq!(rendered.props["text"], json!("Forgot password?"));
    }

    #[test]
    fn image_defaults_to_cover_fit() {
        let props = teal();
        let theme = Theme::new(&props);
        let rendered = dispatch(&Node::new("img", "Image"), &theme);
        assert_eq!(rendered.props["fit"], json!("cover"));
    }

    #[test]
    fn dispatch_does_not_mutate_the_node() {
        let props = teal();
        let theme = Theme::new(&props);
        let node = Node::new("b", "Button");
        let before = node.clone();
        let _ = dispatch(&node, &theme);
        assert_eq!(node, before);
    }
}
