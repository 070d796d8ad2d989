//! ingest::convert
//!
//! Recursive canonicalization of raw component nodes.
//!
//! Conversion is a total, pure function over any JSON input: malformed
//! entries are repaired or skipped, never rejected. It performs, per node:
//!
//! - type tag canonicalization against a fixed alias table (unknown tags
//!   pass through verbatim for the dispatcher's unknown-type path);
//! - children-source resolution with fixed precedence — node-level
//!   `children`, then `props.items`, then `props.children`; exactly one
//!   source wins, sources are never merged;
//! - form hoisting: `props.fields` and `props.buttons` become first-class
//!   children (fields first, then buttons), with password fields receiving
//!   `secure: true`;
//! - unconditional stripping of structural keys from `props`;
//! - id synthesis from sibling position when the input carries none;
//! - wholesale replacement from a shared-component [`Catalog`] when the
//!   node's id matches an entry (the catalog wins over the inline
//!   definition).

use std::collections::HashMap;

use serde_json::{json, Value};
use tracing::debug;

use crate::model::document::{Node, Props};

/// Props keys that encode sub-structure rather than leaf attributes.
pub const STRUCTURAL_KEYS: &[&str] = &["children", "items", "fields", "buttons"];

/// Alias table mapping lowercased raw tags to canonical tags.
///
/// Every canonical tag also maps its own lowercase form to itself, so
/// conversion is stable under repetition.
const ALIASES: &[(&str, &str)] = &[
    // Inputs
    ("textinput", "TextInput"),
    ("textfield", "TextInput"),
    ("text_field", "TextInput"),
    ("input", "TextInput"),
    ("passwordinput", "PasswordInput"),
    ("password", "PasswordInput"),
    ("pwd", "PasswordInput"),
    ("iconinput", "IconInput"),
    ("searchinput", "SearchInput"),
    ("checkbox", "Checkbox"),
    ("switch", "Switch"),
    ("toggle", "Switch"),
    ("quantitycontrol", "QuantityControl"),
    ("stepper", "QuantityControl"),
    // Buttons
    ("button", "Button"),
    ("cta", "Button"),
    ("action", "Button"),
    ("submit", "Button"),
    ("primarybutton", "Button"),
    ("gradientbutton", "GradientButton"),
    ("socialbutton", "SocialButton"),
    ("iconbutton", "IconButton"),
    ("floatingactionbutton", "FloatingActionButton"),
    ("fab", "FloatingActionButton"),
    ("linkbutton", "LinkButton"),
    ("link", "Link"),
    ("anchor", "Link"),
    ("a", "Link"),
    // Layout
    ("container", "Container"),
    ("card", "Card"),
    ("panel", "Card"),
    ("featurecard", "Card"),
    ("stack", "Stack"),
    ("grid", "Grid"),
    ("spacer", "Spacer"),
    ("form", "Form"),
    ("group", "Form"),
    ("formsection", "FormSection"),
    ("div", "Div"),
    // Content
    ("header", "Header"),
    ("heading", "Header"),
    ("footer", "Footer"),
    ("text", "Text"),
    ("label", "Text"),
    ("paragraph", "Text"),
    ("divider", "Divider"),
    ("badge", "Badge"),
    ("chip", "Badge"),
    ("alert", "Alert"),
    ("emptystate", "EmptyState"),
    ("listitem", "ListItem"),
    ("statcard", "StatCard"),
    ("progressbar", "ProgressBar"),
    ("rating", "Rating"),
    // Media
    ("image", "Image"),
    ("heroimage", "Image"),
    ("banner", "Image"),
    ("avatar", "Avatar"),
    ("hero", "Hero"),
    ("herosection", "Hero"),
    ("illustrationheader", "IllustrationHeader"),
    ("imagegallery", "ImageGallery"),
    ("video", "Video"),
    // Commerce
    ("productcard", "ProductCard"),
    ("cartitem", "CartItem"),
    ("pricebreakdown", "PriceBreakdown"),
    // Navigation
    ("appbar", "AppBar"),
    ("tabbar", "TabBar"),
    ("navbar", "NavBar"),
    ("nav", "NavBar"),
];

/// Shared-component catalog: id → canonical node.
///
/// Consulted before tree assembly; a matching entry replaces the inline
/// definition wholesale. Plain borrowing lookup, no ownership transfer.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, Node>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a JSON object of id → node definitions.
    ///
    /// Entries that fail to deserialize as nodes are skipped.
    pub fn from_value(value: &Value) -> Self {
        let mut catalog = Self::new();
        if let Some(object) = value.as_object() {
            for (id, raw) in object {
                match serde_json::from_value::<Node>(raw.clone()) {
                    Ok(mut node) => {
                        if node.id.is_empty() {
                            node.id = id.clone();
                        }
                        catalog.insert(id.clone(), node);
                    }
                    Err(err) => debug!(id = %id, %err, "skipping malformed catalog entry"),
                }
            }
        }
        catalog
    }

    pub fn insert(&mut self, id: impl Into<String>, node: Node) {
        self.entries.insert(id.into(), node);
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonicalize a raw type tag.
///
/// Lookup is case-insensitive; a `custom` prefix is stripped and retried
/// (`"CustomCard"` → `"Card"`). Empty tags become `"Div"`. Unknown tags are
/// returned verbatim so the dispatcher can surface them.
pub fn canonicalize_tag(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Div".to_string();
    }
    let key = trimmed.to_ascii_lowercase();
    if let Some(canonical) = alias_lookup(&key) {
        return canonical.to_string();
    }
    if let Some(stripped) = key.strip_prefix("custom") {
        if let Some(canonical) = alias_lookup(stripped) {
            return canonical.to_string();
        }
    }
    trimmed.to_string()
}

fn alias_lookup(key: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
}

/// Convert a list of raw component values into canonical nodes.
///
/// Non-object entries are skipped. Ids are synthesized from the entry's
/// position in this list when absent.
pub fn convert_nodes(raw: &[Value], catalog: Option<&Catalog>) -> Vec<Node> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| convert_node(value, index, catalog))
        .collect()
}

/// Convert one raw component value. Returns `None` for non-object input.
fn convert_node(raw: &Value, index: usize, catalog: Option<&Catalog>) -> Option<Node> {
    let Some(object) = raw.as_object() else {
        debug!(index, "skipping non-object component entry");
        return None;
    };

    let explicit_id = object.get("id").and_then(Value::as_str);

    // Catalog wins over the inline definition.
    if let (Some(catalog), Some(id)) = (catalog, explicit_id) {
        if let Some(shared) = catalog.get(id) {
            return Some(shared.clone());
        }
    }

    // Historical payloads use "kind" interchangeably with "type".
    let raw_tag = object
        .get("type")
        .or_else(|| object.get("kind"))
        .and_then(Value::as_str)
        .unwrap_or("");
    let tag = canonicalize_tag(raw_tag);

    let mut props: Props = object
        .get("props")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    // Exactly one children source wins; sources are never merged.
    let child_source: Vec<Value> = if let Some(children) = object.get("children").and_then(Value::as_array) {
        children.clone()
    } else if let Some(items) = props.get("items").and_then(Value::as_array) {
        items.clone()
    } else if let Some(children) = props.get("children").and_then(Value::as_array) {
        children.clone()
    } else {
        Vec::new()
    };
    let mut children = convert_nodes(&child_source, catalog);

    if tag == "Form" {
        hoist_form_controls(&props, &mut children, catalog);
    }

    for key in STRUCTURAL_KEYS {
        props.remove(*key);
    }

    let id = explicit_id
        .map(str::to_owned)
        .unwrap_or_else(|| format!("node-{index}"));

    Some(Node {
        id,
        tag,
        props,
        children,
    })
}

/// Hoist a form's `fields` and `buttons` descriptor arrays into children.
///
/// Fields come first in original order, then buttons. Missing types default
/// to `TextInput` / `Button`; missing ids are synthesized as `field-{i}` /
/// `btn-{i}`. A field whose raw type mentions "password" gets `secure: true`
/// injected so downstream renderers mask it.
fn hoist_form_controls(props: &Props, children: &mut Vec<Node>, catalog: Option<&Catalog>) {
    if let Some(fields) = props.get("fields").and_then(Value::as_array) {
        for (index, entry) in fields.iter().enumerate() {
            if let Some(node) = hoist_control(entry, index, "TextInput", "field", catalog) {
                children.push(node);
            }
        }
    }
    if let Some(buttons) = props.get("buttons").and_then(Value::as_array) {
        for (index, entry) in buttons.iter().enumerate() {
            if let Some(node) = hoist_control(entry, index, "Button", "btn", catalog) {
                children.push(node);
            }
        }
    }
}

fn hoist_control(
    entry: &Value,
    index: usize,
    default_tag: &str,
    id_prefix: &str,
    catalog: Option<&Catalog>,
) -> Option<Node> {
    let Some(object) = entry.as_object() else {
        debug!(index, id_prefix, "skipping non-object form control");
        return None;
    };

    let raw_tag = object
        .get("type")
        .or_else(|| object.get("kind"))
        .and_then(Value::as_str)
        .unwrap_or("");
    let tag = if raw_tag.trim().is_empty() {
        default_tag.to_string()
    } else {
        canonicalize_tag(raw_tag)
    };

    let mut props: Props = object
        .get("props")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    if raw_tag.to_ascii_lowercase().contains("password") {
        props.insert("secure".into(), json!(true));
    }
    for key in STRUCTURAL_KEYS {
        props.remove(*key);
    }

    let children = object
        .get("children")
        .and_then(Value::as_array)
        .map(|raw| convert_nodes(raw, catalog))
        .unwrap_or_default();

    let id = object
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{id_prefix}-{index}"));

    Some(Node {
        id,
        tag,
        props,
        children,
    })
}
