//! Weftwork - canonicalization and path-addressed editing for generated UI
//! layout documents.
//!
//! An upstream generation pipeline produces hierarchical UI descriptions as
//! heterogeneous, sometimes malformed JSON. Weftwork coerces every
//! historical shape into one canonical page → section → component tree and
//! exposes copy-on-write edits addressed by positional paths, plus
//! presentation dispatch over a fixed component vocabulary.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface (parses args, delegates to the library)
//! - [`ingest`] - extract → shape → convert → enrich pipeline
//! - [`edit`] - Fail-closed path resolution and copy-on-write mutation
//! - [`render`] - Canonical tag vocabulary and presentation dispatch
//! - [`model`] - Domain types: document, path, theme
//! - [`config`] - Global TOML configuration
//! - [`ui`] - Output formatting for the binary
//!
//! # Correctness Invariants
//!
//! 1. Ingestion is total: present-but-malformed input is repaired, never
//!    raised; only absence (JSON null) yields no document.
//! 2. Canonical props never contain structural keys; sub-structure lives
//!    only in `children`.
//! 3. Every mutation returns an independent deep copy; prior snapshots are
//!    never aliased or modified.
//! 4. Unknown component types degrade to diagnostics, never failures.

pub mod cli;
pub mod config;
pub mod edit;
pub mod ingest;
pub mod model;
pub mod render;
pub mod ui;
