//! edit
//!
//! Path-addressed lookup and copy-on-write mutation.
//!
//! # Modules
//!
//! - [`resolve`] - Fail-closed path resolution
//! - [`mutate`] - Deep-copy set/delete built on the same traversal
//!
//! # Snapshot Model
//!
//! Documents are immutable by convention after ingestion. Every mutation
//! returns a fresh deep copy; callers serialize edits by always applying the
//! next mutation to the latest snapshot. No locking is needed because no
//! two snapshots share structure.

pub mod mutate;
pub mod resolve;

pub use mutate::{delete, set};
pub use resolve::{resolve, Resolved};
