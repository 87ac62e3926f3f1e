//! Resource identifiers and text ranges that locate markers.
//!
//! This crate provides [`ResourceUri`], the normalized identifier markers are
//! grouped by, and [`TextRange`] for 1-indexed line/column locations.

#![warn(missing_docs)]

pub mod range;
pub mod uri;

pub use range::TextRange;
pub use uri::ResourceUri;
