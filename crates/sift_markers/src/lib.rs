//! Grouping, filtering and display ordering of problem markers.
//!
//! Producers hand in flat batches of [`RawMarker`]s. The [`MarkersModel`]
//! groups them into [`Resource`]s by normalized resource identifier, replaces
//! them per owner, and exposes filtered [`ResourceView`]s. Display order is
//! applied on request through [`Resource::compare`] and [`Marker::compare`].

#![warn(missing_docs)]

pub mod filter;
pub mod marker;
pub mod model;
pub mod raw;
pub mod resource;
pub mod severity;
pub mod stats;

pub use filter::{FilterError, FilterOptions, MarkerFilter};
pub use marker::Marker;
pub use model::MarkersModel;
pub use raw::RawMarker;
pub use resource::{Resource, ResourceView};
pub use severity::Severity;
pub use stats::MarkerStats;
