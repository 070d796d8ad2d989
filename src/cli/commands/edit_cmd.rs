//! resolve / set / delete commands - path-addressed document edits

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};

use crate::cli::commands::{load_document, parse_path, write_output};
use crate::config::GlobalConfig;
use crate::edit;
use crate::model::document::Node;
use crate::ui::{self, Verbosity};

pub fn resolve(config: &GlobalConfig, file: &Path, path: &str, pretty: bool) -> Result<()> {
    let doc = load_document(file)?;
    let path = parse_path(path)?;
    let Some(hit) = edit::resolve(&doc, &path) else {
        bail!("no node at path {path}");
    };
    write_output(hit.node, None, pretty || config.pretty.unwrap_or(false))
}

pub fn set(
    config: &GlobalConfig,
    verbosity: Verbosity,
    file: &Path,
    path: &str,
    node: &str,
    output: Option<&PathBuf>,
    pretty: bool,
) -> Result<()> {
    let doc = load_document(file)?;
    let path = parse_path(path)?;
    let replacement = parse_node(node)?;

    if edit::resolve(&doc, &path).is_none() {
        bail!("no node at path {path}; document left unchanged");
    }
    let next = edit::set(&doc, &path, replacement);
    ui::info(format!("replaced node at {path}"), verbosity);
    write_output(&next, output, pretty || config.pretty.unwrap_or(false))
}

pub fn delete(
    config: &GlobalConfig,
    verbosity: Verbosity,
    file: &Path,
    path: &str,
    output: Option<&PathBuf>,
    pretty: bool,
) -> Result<()> {
    let doc = load_document(file)?;
    let path = parse_path(path)?;

    if edit::resolve(&doc, &path).is_none() {
        bail!("no node at path {path}; document left unchanged");
    }
    let next = edit::delete(&doc, &path);
    ui::info(format!("deleted node at {path}"), verbosity);
    write_output(&next, output, pretty || config.pretty.unwrap_or(false))
}

/// Parse a replacement node from inline JSON or an `@file` reference.
fn parse_node(spec: &str) -> Result<Node> {
    let text = match spec.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read node file {path}"))?,
        None => spec.to_string(),
    };
    serde_json::from_str(&text).context("replacement node is not valid node JSON")
}
