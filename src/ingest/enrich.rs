//! ingest::enrich
//!
//! One-time geometry defaults for free-form canvas placement.
//!
//! Every component needs a position and size before the editor canvas can
//! place it. Enrichment runs exactly once at ingestion, before the document
//! is shared with any reader; it is the single sanctioned in-place mutation
//! in the crate. Positions are jittered inside a fixed band so freshly
//! dropped components do not stack on one point.
//!
//! The default entry point draws from the thread RNG, matching the original
//! system's non-deterministic placement. [`ensure_geometry_with`] exposes the
//! RNG seam for callers that need reproducible output (tests, the CLI's
//! `--seed` flag).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Map, Value};

use crate::model::document::{LayoutDocument, Node, Props};

/// Jitter band for default x/y placement, inclusive.
pub const JITTER_MIN: i64 = 24;
pub const JITTER_MAX: i64 = 64;

/// Fixed default size for components without one.
pub const DEFAULT_WIDTH: i64 = 300;
pub const DEFAULT_HEIGHT: i64 = 140;

/// Assign default geometry to every component, drawing jitter from the
/// thread RNG.
pub fn ensure_geometry(doc: &mut LayoutDocument) {
    ensure_geometry_with(doc, &mut rand::thread_rng());
}

/// Assign default geometry with a seeded RNG, for reproducible placement.
pub fn ensure_geometry_seeded(doc: &mut LayoutDocument, seed: u64) {
    ensure_geometry_with(doc, &mut StdRng::seed_from_u64(seed));
}

/// Assign default geometry drawing jitter from the supplied RNG.
///
/// Walks page → section → components → children recursively, plus any
/// residual `items`/`children` arrays still sitting inside props (documents
/// that bypassed conversion keep their structure navigable).
pub fn ensure_geometry_with<R: Rng + ?Sized>(doc: &mut LayoutDocument, rng: &mut R) {
    for page in &mut doc.pages {
        for section in &mut page.sections {
            for node in &mut section.components {
                enrich_node(node, rng);
            }
        }
    }
}

fn enrich_node<R: Rng + ?Sized>(node: &mut Node, rng: &mut R) {
    place(&mut node.props, rng);
    for child in &mut node.children {
        enrich_node(child, rng);
    }
    for key in ["items", "children"] {
        if let Some(Value::Array(entries)) = node.props.get_mut(key) {
            for entry in entries {
                enrich_value(entry, rng);
            }
        }
    }
}

/// Geometry enrichment for raw node-shaped JSON values.
fn enrich_value<R: Rng + ?Sized>(value: &mut Value, rng: &mut R) {
    let Some(object) = value.as_object_mut() else {
        return;
    };

    let props = object
        .entry("props")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(props) = props.as_object_mut() {
        place(props, rng);
    }

    if let Some(Value::Array(children)) = object.get_mut("children") {
        for child in children {
            enrich_value(child, rng);
        }
    }
    if let Some(props) = object.get_mut("props").and_then(Value::as_object_mut) {
        for key in ["items", "children"] {
            if let Some(Value::Array(entries)) = props.get_mut(key) {
                for entry in entries {
                    enrich_value(entry, rng);
                }
            }
        }
    }
}

/// Fill missing position (jittered) and missing or non-numeric size (fixed).
fn place<R: Rng + ?Sized>(props: &mut Props, rng: &mut R) {
    if !props.contains_key("x") {
        props.insert("x".into(), json!(rng.gen_range(JITTER_MIN..=JITTER_MAX)));
    }
    if !props.contains_key("y") {
        props.insert("y".into(), json!(rng.gen_range(JITTER_MIN..=JITTER_MAX)));
    }
    if !props.get("width").map(Value::is_number).unwrap_or(false) {
        props.insert("width".into(), json!(DEFAULT_WIDTH));
    }
    if !props.get("height").map(Value::is_number).unwrap_or(false) {
        props.insert("height".into(), json!(DEFAULT_HEIGHT));
    }
}
