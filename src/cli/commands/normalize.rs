//! normalize command - raw JSON (or free text) to canonical document

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use serde_json::Value;

use crate::cli::commands::{read_input, write_output};
use crate::config::GlobalConfig;
use crate::ingest::extract::extract_json;
use crate::ingest::shape::{Geometry, Normalizer};
use crate::ingest::Catalog;
use crate::ui::{self, Verbosity};

#[allow(clippy::too_many_arguments)]
pub fn normalize(
    config: &GlobalConfig,
    verbosity: Verbosity,
    file: Option<&Path>,
    catalog: Option<&Path>,
    seed: Option<u64>,
    no_geometry: bool,
    palette: Option<&str>,
    recover: bool,
    output: Option<&PathBuf>,
    pretty: bool,
) -> Result<()> {
    let text = read_input(file)?;

    let raw: Value = match serde_json::from_str(text.trim()) {
        Ok(value) => value,
        Err(parse_err) if recover => extract_json(&text)
            .with_context(|| format!("strict parse also failed: {parse_err}"))?,
        Err(parse_err) => {
            return Err(parse_err)
                .context("input is not valid JSON (pass --recover for free-text payloads)");
        }
    };

    let mut normalizer = Normalizer::new().with_geometry(match (seed, no_geometry) {
        (_, true) => Geometry::Skip,
        (Some(seed), _) => Geometry::Seeded(seed),
        (None, false) => Geometry::Random,
    });
    if let Some(name) = palette.or(config.palette.as_deref()) {
        normalizer = normalizer.with_palette(name);
    }
    if let Some(path) = catalog {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("catalog {} is not valid JSON", path.display()))?;
        normalizer = normalizer.with_catalog(Catalog::from_value(&value));
    }

    let Some(doc) = normalizer.normalize(&raw) else {
        bail!("input document is null; nothing to normalize");
    };

    ui::info(
        format!(
            "normalized {} page(s), {} component(s)",
            doc.pages.len(),
            doc.component_count()
        ),
        verbosity,
    );
    write_output(&doc, output, pretty || config.pretty.unwrap_or(false))
}
