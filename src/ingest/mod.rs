//! ingest
//!
//! The raw-input-to-canonical-document pipeline.
//!
//! # Modules
//!
//! - [`extract`] - Layered JSON recovery from free text
//! - [`shape`] - Tolerant coercion of historical document shapes
//! - [`convert`] - Recursive node canonicalization and form hoisting
//! - [`enrich`] - One-time geometry defaults for canvas placement
//!
//! # Flow
//!
//! ```text
//! free text ──extract──▶ Value ──shape──▶ skeleton ──convert──▶ nodes
//!                                               └──enrich (once)──▶ LayoutDocument
//! ```
//!
//! Absence (JSON null) propagates as `None`; malformance is always repaired,
//! never raised. The only hard failure is exhausting every extraction layer.

pub mod convert;
pub mod enrich;
pub mod extract;
pub mod shape;

pub use convert::{canonicalize_tag, convert_nodes, Catalog};
pub use extract::{extract_json, ExtractError};
pub use shape::{normalize, Geometry, Normalizer};
