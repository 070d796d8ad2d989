//! ingest::shape
//!
//! Coercion of arbitrary raw input into a canonical [`LayoutDocument`].
//!
//! The generation pipeline has produced several historical shapes:
//!
//! - `{ "pages": [...] }` — current
//! - `{ "screens": [...] }` — legacy; each screen becomes a page wrapping
//!   its components in one synthetic `"Main Section"`
//! - `{ "screen": ... }` — older still; a single screen (or screen list)
//!   promoted to `screens`
//! - `{ "layout": X }` — any of the above wrapped one level deep
//!
//! Normalization is total over present input: `None` is returned only for
//! JSON null (absence); anything else — wrong types, missing keys, junk
//! entries — yields a best-effort well-formed document, never an error.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use weftwork::ingest::shape::normalize;
//!
//! let raw = json!({ "screens": [{ "name": "Login", "components": [] }] });
//! let doc = normalize(&raw).unwrap();
//! assert_eq!(doc.pages[0].name, "Login");
//! assert_eq!(doc.pages[0].sections[0].name, "Main Section");
//!
//! assert!(normalize(&json!(null)).is_none());
//! ```

use serde_json::Value;
use tracing::debug;

use crate::ingest::convert::{convert_nodes, Catalog};
use crate::ingest::enrich;
use crate::model::document::{LayoutDocument, Page, Props, Section};
use crate::model::theme;

/// Name given to the synthetic section wrapping a legacy screen's components.
pub const LEGACY_SECTION_NAME: &str = "Main Section";

/// How default geometry is assigned at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Jitter from the thread RNG (the original system's behavior).
    Random,
    /// Jitter from a seeded RNG, for reproducible output.
    Seeded(u64),
    /// Leave geometry untouched.
    Skip,
}

/// Configurable shape normalizer.
///
/// The [`normalize`] free function covers the common case; the builder
/// carries a fallback palette, a shared-component catalog, and the geometry
/// mode.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    palette: Option<String>,
    catalog: Option<Catalog>,
    geometry: Option<Geometry>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fallback palette by name (unknown names fall back to teal).
    pub fn with_palette(mut self, name: impl Into<String>) -> Self {
        self.palette = Some(name.into());
        self
    }

    /// Shared-component catalog consulted during conversion.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Coerce raw input into a canonical document.
    ///
    /// Returns `None` only for JSON null. Geometry enrichment runs here,
    /// exactly once, before the document is handed to the caller.
    pub fn normalize(&self, raw: &Value) -> Option<LayoutDocument> {
        if raw.is_null() {
            return None;
        }

        // One level of unwrap for `{ "layout": X }` envelopes.
        let root = match raw.get("layout") {
            Some(inner) if inner.is_object() => inner,
            _ => raw,
        };

        let catalog = self.catalog.as_ref();
        let pages = match root.as_object() {
            Some(object) => self.collect_pages(object, catalog),
            None => {
                debug!("non-object input; producing empty document");
                Vec::new()
            }
        };

        let palette = self.palette.as_deref().unwrap_or(theme::DEFAULT_PALETTE);
        let mut doc = LayoutDocument {
            pages,
            theme: fill_defaults(
                root.get("theme"),
                theme::palette_props(palette).unwrap_or_else(theme::default_theme),
            ),
            tokens: fill_defaults(root.get("tokens"), theme::default_tokens()),
        };

        match self.geometry.unwrap_or(Geometry::Random) {
            Geometry::Random => enrich::ensure_geometry(&mut doc),
            Geometry::Seeded(seed) => enrich::ensure_geometry_seeded(&mut doc, seed),
            Geometry::Skip => {}
        }

        Some(doc)
    }

    fn collect_pages(
        &self,
        object: &serde_json::Map<String, Value>,
        catalog: Option<&Catalog>,
    ) -> Vec<Page> {
        if let Some(pages) = object.get("pages").and_then(Value::as_array) {
            return pages
                .iter()
                .enumerate()
                .filter_map(|(index, raw)| parse_page(raw, index, catalog))
                .collect();
        }

        // Legacy screen shapes.
        let screens: Vec<&Value> = if let Some(list) = object.get("screens").and_then(Value::as_array)
        {
            list.iter().collect()
        } else {
            match object.get("screen") {
                Some(Value::Array(list)) => list.iter().collect(),
                Some(single) if single.is_object() => vec![single],
                _ => Vec::new(),
            }
        };
        if !screens.is_empty() {
            debug!(count = screens.len(), "migrating legacy screens to pages");
        }
        screens
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| parse_screen(raw, index, catalog))
            .collect()
    }
}

/// Normalize with default options (teal palette, no catalog, random jitter).
pub fn normalize(raw: &Value) -> Option<LayoutDocument> {
    Normalizer::new().normalize(raw)
}

fn parse_page(raw: &Value, index: usize, catalog: Option<&Catalog>) -> Option<Page> {
    let object = match raw.as_object() {
        Some(object) => object,
        None => {
            debug!(index, "skipping non-object page entry");
            return None;
        }
    };

    let sections = if let Some(list) = object.get("sections").and_then(Value::as_array) {
        list.iter()
            .enumerate()
            .filter_map(|(i, raw)| parse_section(raw, i, catalog))
            .collect()
    } else if let Some(components) = object.get("components").and_then(Value::as_array) {
        // A page that still looks like a screen gets the synthetic section.
        vec![Section {
            name: LEGACY_SECTION_NAME.to_string(),
            components: convert_nodes(components, catalog),
        }]
    } else {
        Vec::new()
    };

    Some(Page {
        name: name_or(object, "name", || format!("Page {}", index + 1)),
        layout_type: name_or(object, "layout_type", || "default".to_string()),
        sections,
    })
}

fn parse_screen(raw: &Value, index: usize, catalog: Option<&Catalog>) -> Option<Page> {
    let object = match raw.as_object() {
        Some(object) => object,
        None => {
            debug!(index, "skipping non-object screen entry");
            return None;
        }
    };

    let components = object
        .get("components")
        .and_then(Value::as_array)
        .map(|list| convert_nodes(list, catalog))
        .unwrap_or_default();

    Some(Page {
        name: name_or(object, "name", || format!("Page {}", index + 1)),
        layout_type: name_or(object, "layout_type", || "default".to_string()),
        sections: vec![Section {
            name: LEGACY_SECTION_NAME.to_string(),
            components,
        }],
    })
}

fn parse_section(raw: &Value, index: usize, catalog: Option<&Catalog>) -> Option<Section> {
    let object = match raw.as_object() {
        Some(object) => object,
        None => {
            debug!(index, "skipping non-object section entry");
            return None;
        }
    };

    let components = object
        .get("components")
        .and_then(Value::as_array)
        .map(|list| convert_nodes(list, catalog))
        .unwrap_or_default();

    Some(Section {
        name: name_or(object, "name", || format!("Section {}", index + 1)),
        components,
    })
}

fn name_or(
    object: &serde_json::Map<String, Value>,
    key: &str,
    fallback: impl FnOnce() -> String,
) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(fallback)
}

/// Gap-fill a theme/tokens map: provided keys win, defaults fill the rest.
/// Non-object input is replaced by the defaults entirely.
fn fill_defaults(raw: Option<&Value>, defaults: Props) -> Props {
    let mut filled = defaults;
    if let Some(Value::Object(given)) = raw {
        for (key, value) in given {
            filled.insert(key.clone(), value.clone());
        }
    }
    filled
}
