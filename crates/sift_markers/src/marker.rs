//! Markers as held by the model: a raw record plus its cached sort key.

use crate::raw::RawMarker;
use crate::severity::Severity;
use sift_source::{ResourceUri, TextRange};
use std::cmp::Ordering;
use std::fmt;

/// One marker inside the model.
///
/// Wraps exactly one [`RawMarker`] together with the owner it was ingested
/// under. The severity rank and range are cached at construction for sorting;
/// markers deliberately have no value equality, use [`wraps`](Marker::wraps)
/// to match one against a raw record.
#[derive(Clone, Debug)]
pub struct Marker {
    owner: String,
    raw: RawMarker,
    rank: u8,
    range: TextRange,
}

impl Marker {
    /// Wraps a raw marker ingested under `owner`.
    pub fn new(owner: impl Into<String>, raw: RawMarker) -> Self {
        let rank = raw.severity.rank();
        let range = raw.range();
        Self {
            owner: owner.into(),
            raw,
            rank,
            range,
        }
    }

    /// Orders markers most severe first, then by start line, start column,
    /// end line, end column and finally message.
    ///
    /// Markers agreeing on all six keys compare equal; sort with a stable sort
    /// to keep their input order.
    pub fn compare(a: &Marker, b: &Marker) -> Ordering {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.range.cmp(&b.range))
            .then_with(|| a.raw.message.cmp(&b.raw.message))
    }

    /// Returns the owner this marker was ingested under.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the wrapped record.
    pub fn raw(&self) -> &RawMarker {
        &self.raw
    }

    /// Returns `true` if this marker wraps a record equal to `raw`.
    pub fn wraps(&self, raw: &RawMarker) -> bool {
        self.raw == *raw
    }

    /// Returns the resource this marker is attached to.
    pub fn resource(&self) -> &ResourceUri {
        &self.raw.resource
    }

    /// Returns the marker severity.
    pub fn severity(&self) -> Severity {
        self.raw.severity
    }

    /// Returns the problem description.
    pub fn message(&self) -> &str {
        &self.raw.message
    }

    /// Returns the marked range.
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Returns the reporting tool, if any.
    pub fn source(&self) -> Option<&str> {
        self.raw.source.as_deref()
    }

    /// Returns the problem code, if any.
    pub fn code(&self) -> Option<&str> {
        self.raw.code.as_deref()
    }
}

/// Renders the marker as labelled fields, one per line.
///
/// Intended for logs and debugging output, not for parsing.
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "file: '{}'", self.raw.resource)?;
        writeln!(f, "severity: '{}'", self.raw.severity.label())?;
        writeln!(f, "message: '{}'", self.raw.message)?;
        writeln!(
            f,
            "at: '{},{}'",
            self.range.start_line, self.range.start_column
        )?;
        writeln!(f, "source: '{}'", self.source().unwrap_or_default())?;
        write!(f, "code: '{}'", self.code().unwrap_or_default())
    }
}
