//! model
//!
//! Strong domain types for canonical layout documents.
//!
//! # Modules
//!
//! - [`document`] - LayoutDocument, Page, Section, Node, Props
//! - [`path`] - NodePath positional addressing
//! - [`theme`] - Fallback palettes, default tokens, theme view
//!
//! # Design Principles
//!
//! - The canonical tree has exactly one nested collection (`Node::children`);
//!   all historical child encodings are folded into it at ingest time.
//! - Property bags stay open: unknown keys pass through untouched.
//! - Documents are plain owned data; `Clone` is a full deep copy.

pub mod document;
pub mod path;
pub mod theme;

pub use document::{LayoutDocument, Node, Page, Props, Section};
pub use path::NodePath;
pub use theme::Theme;
