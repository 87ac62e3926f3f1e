//! Per-severity marker counts.

use crate::marker::Marker;
use crate::severity::Severity;
use serde::Serialize;
use std::ops::AddAssign;

/// Marker counts broken down by severity.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct MarkerStats {
    /// Number of error markers.
    pub errors: usize,
    /// Number of warning markers.
    pub warnings: usize,
    /// Number of info markers.
    pub infos: usize,
    /// Number of hint markers.
    pub hints: usize,
}

impl MarkerStats {
    /// Counts the given markers.
    pub fn from_markers<'a>(markers: impl IntoIterator<Item = &'a Marker>) -> Self {
        let mut stats = Self::default();
        for marker in markers {
            stats.record(marker.severity());
        }
        stats
    }

    /// Counts one marker of the given severity.
    pub fn record(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.infos += 1,
            Severity::Hint => self.hints += 1,
        }
    }

    /// Returns the count for a single severity.
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.errors,
            Severity::Warning => self.warnings,
            Severity::Info => self.infos,
            Severity::Hint => self.hints,
        }
    }

    /// Returns the total number of markers counted.
    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.infos + self.hints
    }
}

impl AddAssign for MarkerStats {
    fn add_assign(&mut self, other: Self) {
        self.errors += other.errors;
        self.warnings += other.warnings;
        self.infos += other.infos;
        self.hints += other.hints;
    }
}
