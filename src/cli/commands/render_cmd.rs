//! render command - dump the dispatched render tree

use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::cli::commands::{load_document, write_output};
use crate::config::GlobalConfig;
use crate::model::theme::Theme;
use crate::render::{dispatch, RenderNode};

/// Render-tree wire shape mirroring the document's page/section nesting.
#[derive(Debug, Serialize)]
struct RenderedPage {
    name: String,
    sections: Vec<RenderedSection>,
}

#[derive(Debug, Serialize)]
struct RenderedSection {
    name: String,
    nodes: Vec<RenderNode>,
}

pub fn render(config: &GlobalConfig, file: &Path, page: Option<usize>, pretty: bool) -> Result<()> {
    let doc = load_document(file)?;
    let theme = Theme::new(&doc.theme);

    let selected: Vec<_> = match page {
        Some(index) => match doc.pages.get(index) {
            Some(page) => vec![page],
            None => bail!("document has no page {index}"),
        },
        None => doc.pages.iter().collect(),
    };

    let rendered: Vec<RenderedPage> = selected
        .into_iter()
        .map(|page| RenderedPage {
            name: page.name.clone(),
            sections: page
                .sections
                .iter()
                .map(|section| RenderedSection {
                    name: section.name.clone(),
                    nodes: section
                        .components
                        .iter()
                        .map(|node| dispatch(node, &theme))
                        .collect(),
                })
                .collect(),
        })
        .collect();

    write_output(&rendered, None, pretty || config.pretty.unwrap_or(false))
}
