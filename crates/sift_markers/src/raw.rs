//! Marker records as delivered by diagnostics producers.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use sift_source::{ResourceUri, TextRange};

/// A single problem report as produced upstream, before it enters the model.
///
/// Raw markers are plain immutable records. Two records are the same marker
/// when all fields are equal, which is how a [`Marker`](crate::Marker) is
/// matched back to the record it wraps.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMarker {
    /// The id of the producer that reported this marker.
    pub owner: String,
    /// The resource the marker is attached to.
    pub resource: ResourceUri,
    /// How severe the problem is.
    pub severity: Severity,
    /// The problem description.
    pub message: String,
    /// First line of the marked range (1-indexed).
    pub start_line: u32,
    /// First column of the marked range (1-indexed).
    pub start_column: u32,
    /// Last line of the marked range (1-indexed).
    pub end_line: u32,
    /// Last column of the marked range (1-indexed).
    pub end_column: u32,
    /// The tool that reported the problem, e.g. `rustc` or `clippy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// A producer-specific problem code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl RawMarker {
    /// Creates a raw marker without source or code.
    pub fn new(
        owner: impl Into<String>,
        resource: ResourceUri,
        severity: Severity,
        message: impl Into<String>,
        range: TextRange,
    ) -> Self {
        Self {
            owner: owner.into(),
            resource,
            severity,
            message: message.into(),
            start_line: range.start_line,
            start_column: range.start_column,
            end_line: range.end_line,
            end_column: range.end_column,
            source: None,
            code: None,
        }
    }

    /// Sets the reporting tool.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the problem code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns the marked range.
    pub fn range(&self) -> TextRange {
        TextRange::new(
            self.start_line,
            self.start_column,
            self.end_line,
            self.end_column,
        )
    }
}
