//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each handler validates its arguments, calls into the library
//! (`ingest` / `edit` / `render`), and formats output. Handlers never
//! mutate documents in place; edits flow through the copy-on-write API.

mod completion;
mod edit_cmd;
mod normalize;
mod render_cmd;

pub use completion::completion;
pub use edit_cmd::{delete, resolve, set};
pub use normalize::normalize;
pub use render_cmd::render;

use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::args::Command;
use crate::config::GlobalConfig;
use crate::model::document::LayoutDocument;
use crate::model::path::NodePath;
use crate::ui::{self, Verbosity};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, config: &GlobalConfig, verbosity: Verbosity) -> Result<()> {
    match command {
        Command::Normalize {
            file,
            catalog,
            seed,
            no_geometry,
            palette,
            recover,
            output,
            pretty,
        } => normalize(
            config,
            verbosity,
            file.as_deref(),
            catalog.as_deref(),
            seed,
            no_geometry,
            palette.as_deref(),
            recover,
            output.as_ref(),
            pretty,
        ),
        Command::Resolve { file, path, pretty } => resolve(config, &file, &path, pretty),
        Command::Set {
            file,
            path,
            node,
            output,
            pretty,
        } => set(
            config,
            verbosity,
            &file,
            &path,
            &node,
            output.as_ref(),
            pretty,
        ),
        Command::Delete {
            file,
            path,
            output,
            pretty,
        } => delete(config, verbosity, &file, &path, output.as_ref(), pretty),
        Command::Render { file, page, pretty } => render(config, &file, page, pretty),
        Command::Completion { shell } => completion(shell),
    }
}

/// Read input from a file, or stdin when the path is absent or `-`.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Load a canonical document from disk.
fn load_document(path: &Path) -> Result<LayoutDocument> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a canonical layout document", path.display()))
}

/// Parse a dot-separated index path.
fn parse_path(text: &str) -> Result<NodePath> {
    text.parse()
        .with_context(|| format!("invalid path '{text}'"))
}

/// Write a JSON payload to a file or stdout.
fn write_output<T: Serialize>(payload: &T, output: Option<&PathBuf>, pretty: bool) -> Result<()> {
    match output {
        Some(path) => {
            let text = if pretty {
                serde_json::to_string_pretty(payload)?
            } else {
                serde_json::to_string(payload)?
            };
            std::fs::write(path, text + "\n")
                .with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            ui::print_json(payload, pretty)?;
            Ok(())
        }
    }
}
