//! weft - canonicalize and edit generated UI layout documents.

use tracing_subscriber::EnvFilter;

use weftwork::cli::args::Cli;
use weftwork::cli::commands;
use weftwork::config;
use weftwork::ui::{self, Verbosity};

fn main() {
    let cli = Cli::parse_args();

    let default_filter = if cli.debug { "weftwork=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let config = match config::load_global() {
        Ok(config) => config,
        Err(err) => {
            ui::error(err);
            std::process::exit(1);
        }
    };

    if let Err(err) = commands::dispatch(cli.command, &config, verbosity) {
        ui::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
