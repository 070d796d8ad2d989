//! ui
//!
//! Terminal output helpers for the `weft` binary.
//!
//! Informational output respects `--quiet`; errors always print. Document
//! payloads go to stdout (optionally pretty-printed) so they can be piped;
//! everything else goes to stderr.

use std::fmt::Display;

use serde::Serialize;

/// Output verbosity derived from global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Debug,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print an informational message to stderr (suppressed by `--quiet`).
pub fn info(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("{}", message);
    }
}

/// Print an error message to stderr (never suppressed).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Serialize a payload to stdout as JSON.
pub fn print_json<T: Serialize>(payload: &T, pretty: bool) -> serde_json::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    println!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }
}
