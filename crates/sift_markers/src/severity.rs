//! Marker severity levels and their display ranks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a marker.
///
/// Declared from least severe (`Hint`) to most severe (`Error`), matching the
/// derived `PartialOrd`/`Ord` implementation. Display ordering uses
/// [`rank`](Severity::rank), where the most severe level comes first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A hint that carries no severity of its own; shown with an empty label.
    Hint,
    /// An informational message.
    Info,
    /// A potential problem.
    Warning,
    /// A definite problem.
    Error,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Hint,
    ];

    /// Returns the display rank: `Error` = 0, `Warning` = 1, `Info` = 2, `Hint` = 3.
    ///
    /// Lower ranks sort first.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
            Severity::Hint => 3,
        }
    }

    /// Maps the numeric severity codes used by editor protocols
    /// (`Hint` = 1, `Info` = 2, `Warning` = 4, `Error` = 8).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Severity::Hint),
            2 => Some(Severity::Info),
            4 => Some(Severity::Warning),
            8 => Some(Severity::Error),
            _ => None,
        }
    }

    /// Returns the human-readable name (`Error`, `Warning`, `Info`, `Hint`).
    pub fn name(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
            Severity::Hint => "Hint",
        }
    }

    /// Returns the label shown in marker renderings.
    ///
    /// `Hint` has no label of its own and renders as the empty string.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Hint => "",
            other => other.name(),
        }
    }

    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
