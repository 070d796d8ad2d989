//! render
//!
//! Canonical tag vocabulary and presentation dispatch.
//!
//! # Modules
//!
//! - [`tag`] - The fixed ~45-tag vocabulary with categories
//! - [`dispatch`] - Node → presentation handle, with unknown-tag fallback
//!
//! The theme is passed explicitly into dispatch; there is no ambient or
//! global theme lookup.

pub mod dispatch;
pub mod tag;

pub use dispatch::{dispatch, RenderElement, RenderNode};
pub use tag::{Category, TagSpec, VOCABULARY};
