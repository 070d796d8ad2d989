//! cli
//!
//! Command-line interface layer: argument parsing and command handlers.
//!
//! The CLI is a thin shell over the library — it owns I/O and formatting,
//! and delegates every document operation to `ingest`, `edit`, and
//! `render`.

pub mod args;
pub mod commands;
