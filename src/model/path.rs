//! model::path
//!
//! Positional addressing of nodes within a [`LayoutDocument`].
//!
//! A path is an ordered sequence of non-negative indices:
//!
//! ```text
//! [page, section, component, child, child, ...]
//! ```
//!
//! The first index selects a page, the second a section, the third a
//! component in that section, and every later index a child of the current
//! node. A path must have at least three segments to address a node; shorter
//! paths never resolve.
//!
//! # Example
//!
//! ```
//! use weftwork::model::path::NodePath;
//!
//! let path: NodePath = "0.2.1".parse().unwrap();
//! assert_eq!(path.segments(), &[0, 2, 1]);
//! assert!(path.addresses_node());
//! assert_eq!(path.to_string(), "0.2.1");
//!
//! assert!("0.x.1".parse::<NodePath>().is_err());
//! ```
//!
//! [`LayoutDocument`]: crate::model::document::LayoutDocument

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of segments for a path to address a node.
pub const MIN_NODE_SEGMENTS: usize = 3;

/// Errors from parsing a textual path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathParseError {
    #[error("path is empty")]
    Empty,

    #[error("invalid path segment '{0}': expected a non-negative integer")]
    InvalidSegment(String),
}

/// An ordered index path into the page → section → component tree.
///
/// Construction does not validate depth: resolution fails closed instead,
/// so a too-short or out-of-range path is a reported condition, never a
/// panic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Create a path from raw indices.
    pub fn new(segments: impl Into<Vec<usize>>) -> Self {
        Self(segments.into())
    }

    /// The raw index segments.
    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this path is deep enough to address a node
    /// (`len >= MIN_NODE_SEGMENTS`). Pages and sections are not addressable.
    pub fn addresses_node(&self) -> bool {
        self.0.len() >= MIN_NODE_SEGMENTS
    }

    /// Page index, if present.
    pub fn page(&self) -> Option<usize> {
        self.0.first().copied()
    }

    /// Section index, if present.
    pub fn section(&self) -> Option<usize> {
        self.0.get(1).copied()
    }

    /// Child path extended by one more index.
    pub fn child(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(index);
        Self(segments)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(segments: Vec<usize>) -> Self {
        Self(segments)
    }
}

impl From<&[usize]> for NodePath {
    fn from(segments: &[usize]) -> Self {
        Self(segments.to_vec())
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for NodePath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PathParseError::Empty);
        }
        let mut segments = Vec::new();
        for part in trimmed.split('.') {
            let index: usize = part
                .parse()
                .map_err(|_| PathParseError::InvalidSegment(part.to_string()))?;
            segments.push(index);
        }
        Ok(Self(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        let path: NodePath = "0.1.2.3".parse().unwrap();
        assert_eq!(path.segments(), &[0, 1, 2, 3]);
        assert_eq!(path.to_string(), "0.1.2.3");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<NodePath>(), Err(PathParseError::Empty));
        assert_eq!("   ".parse::<NodePath>(), Err(PathParseError::Empty));
    }

    #[test]
    fn parse_rejects_non_numeric_segments() {
        assert_eq!(
            "0.a.1".parse::<NodePath>(),
            Err(PathParseError::InvalidSegment("a".to_string()))
        );
        assert!("0..1".parse::<NodePath>().is_err());
        assert!("-1.0.0".parse::<NodePath>().is_err());
    }

    #[test]
    fn addresses_node_requires_three_segments() {
        assert!(!NodePath::new(vec![]).addresses_node());
        assert!(!NodePath::new(vec![0]).addresses_node());
        assert!(!NodePath::new(vec![0, 1]).addresses_node());
        assert!(NodePath::new(vec![0, 1, 2]).addresses_node());
        assert!(NodePath::new(vec![0, 1, 2, 0, 4]).addresses_node());
    }

    #[test]
    fn accessors_and_child_extension() {
        let path = NodePath::new(vec![2, 0, 1]);
        assert_eq!(path.page(), Some(2));
        assert_eq!(path.section(), Some(0));
        assert_eq!(path.child(5).segments(), &[2, 0, 1, 5]);
    }

    #[test]
    fn serde_is_transparent() {
        let path = NodePath::new(vec![0, 1, 2]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[0,1,2]");
        let back: NodePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
