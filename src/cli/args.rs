//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--debug`: verbose diagnostics on stderr
//! - `--quiet` / `-q`: suppress informational output
//!
//! Document-producing commands share `-o/--output` (default stdout) and
//! `--pretty`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Weftwork - canonicalize and edit generated UI layout documents
#[derive(Parser, Debug)]
#[command(name = "weft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug diagnostics
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize raw generated JSON into a canonical layout document
    #[command(
        long_about = "Normalize raw generated JSON into a canonical layout document.\n\n\
            Accepts every historical input shape ({pages}, legacy {screens}, a \
            {layout} envelope), canonicalizes component types, hoists form \
            fields and buttons into children, and assigns default canvas \
            geometry. Malformed input is repaired, never rejected; only a \
            JSON null input produces no document.",
        after_help = "\
EXAMPLES:
    # Normalize a file, pretty-printed
    weft normalize layout.json --pretty

    # Normalize from stdin with reproducible geometry
    cat layout.json | weft normalize --seed 42

    # Recover a document from a model reply with prose around the JSON
    weft normalize reply.txt --recover"
    )]
    Normalize {
        /// Input file ('-' or omitted reads stdin)
        file: Option<PathBuf>,

        /// Shared-component catalog file (JSON object of id -> node)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Seed for reproducible default geometry
        #[arg(long, conflicts_with = "no_geometry")]
        seed: Option<u64>,

        /// Skip default geometry assignment entirely
        #[arg(long)]
        no_geometry: bool,

        /// Fallback palette name (teal, blue, green, purple, gray)
        #[arg(long)]
        palette: Option<String>,

        /// Recover JSON embedded in free text before normalizing
        #[arg(long)]
        recover: bool,

        /// Output file (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the node addressed by a path (exit 1 when not found)
    Resolve {
        /// Canonical document file
        file: PathBuf,

        /// Dot-separated index path, e.g. 0.0.2 or 0.0.2.1
        path: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Replace the node at a path, writing a new document
    Set {
        /// Canonical document file
        file: PathBuf,

        /// Dot-separated index path
        path: String,

        /// Replacement node as inline JSON, or @file
        #[arg(long)]
        node: String,

        /// Output file (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Delete the node at a path, writing a new document
    Delete {
        /// Canonical document file
        file: PathBuf,

        /// Dot-separated index path (length >= 3; pages/sections are kept)
        path: String,

        /// Output file (default stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Dispatch a document and dump the resulting render tree
    Render {
        /// Canonical document file
        file: PathBuf,

        /// Restrict output to one page index
        #[arg(long)]
        page: Option<usize>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn normalize_parses_flags() {
        let cli = Cli::parse_from([
            "weft",
            "normalize",
            "layout.json",
            "--seed",
            "7",
            "--palette",
            "blue",
            "--pretty",
        ]);
        match cli.command {
            Command::Normalize {
                file,
                seed,
                palette,
                pretty,
                ..
            } => {
                assert_eq!(file, Some(PathBuf::from("layout.json")));
                assert_eq!(seed, Some(7));
                assert_eq!(palette.as_deref(), Some("blue"));
                assert!(pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn seed_conflicts_with_no_geometry() {
        let result = Cli::try_parse_from([
            "weft",
            "normalize",
            "layout.json",
            "--seed",
            "7",
            "--no-geometry",
        ]);
        assert!(result.is_err());
    }
}
