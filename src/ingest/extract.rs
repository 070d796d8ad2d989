//! ingest::extract
//!
//! Layered recovery of a JSON document embedded in free text.
//!
//! Generation services frequently wrap their JSON payload in prose or
//! markdown fences. Recovery tries progressively looser strategies:
//!
//! 1. Direct parse of the whole input.
//! 2. Contents of the first fenced code block (```` ``` ```` / ```` ```json ````).
//! 3. First balanced `{...}` or `[...]` substring (string- and escape-aware).
//! 4. Cleanup: the span from the first opening to the last closing delimiter.
//!
//! Exhausting every layer is the one hard failure in this crate and is
//! explicit: [`ExtractError::NoJson`] is distinguishable from a successfully
//! parsed but empty document.
//!
//! # Example
//!
//! ```
//! use weftwork::ingest::extract::extract_json;
//!
//! let reply = "Here is your layout:\n```json\n{\"pages\": []}\n```\nEnjoy!";
//! let value = extract_json(reply).unwrap();
//! assert!(value["pages"].as_array().unwrap().is_empty());
//!
//! assert!(extract_json("no structured data here").is_err());
//! ```

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors from free-text JSON recovery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no parseable JSON document found in input")]
    NoJson,
}

/// Recover a JSON value from free text, trying each layer in order.
pub fn extract_json(text: &str) -> Result<Value, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::NoJson);
    }

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    if let Some(body) = fenced_block(trimmed) {
        if let Ok(value) = serde_json::from_str(body.trim()) {
            debug!("recovered JSON from fenced code block");
            return Ok(value);
        }
    }

    if let Some(span) = balanced_span(trimmed) {
        if let Ok(value) = serde_json::from_str(span) {
            debug!("recovered JSON from balanced delimiter scan");
            return Ok(value);
        }
    }

    if let Some(span) = outermost_span(trimmed) {
        if let Ok(value) = serde_json::from_str(span.trim()) {
            debug!("recovered JSON from outermost delimiter cleanup");
            return Ok(value);
        }
    }

    Err(ExtractError::NoJson)
}

/// The body of the first fenced code block, language tag stripped.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // Skip the rest of the fence line (optional "json" tag).
    let line_end = after_fence.find('\n')?;
    let body = &after_fence[line_end + 1..];
    let close = body.find("```")?;
    Some(&body[..close])
}

/// The first complete `{...}` or `[...]` substring.
///
/// Tracks string literals and escapes so braces inside strings do not
/// unbalance the scan. Only the opening delimiter's kind is counted, which
/// is sufficient: the matching closer of a well-formed document closes the
/// outermost value.
fn balanced_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let bytes = text.as_bytes();
    let open = bytes[start];
    let close = if open == b'{' { b'}' } else { b']' };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
        } else if byte == b'"' {
            in_string = true;
        } else if byte == open {
            depth += 1;
        } else if byte == close {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(&text[start..=start + offset]);
            }
        }
    }
    None
}

/// The span from the first opening delimiter to the last matching closer.
fn outermost_span(text: &str) -> Option<&str> {
    let start = text.find(['{', '['])?;
    let close = if text.as_bytes()[start] == b'{' { '}' } else { ']' };
    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}
