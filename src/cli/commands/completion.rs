//! completion command - shell completion generation

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

pub fn completion(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    generate(shell, &mut command, "weft", &mut std::io::stdout());
    Ok(())
}
