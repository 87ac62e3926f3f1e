//! Marker filters: arbitrary predicates and the standard problems-panel filter.

use crate::marker::Marker;
use crate::severity::Severity;
use globset::{Glob, GlobSet, GlobSetBuilder};
use sift_source::ResourceUri;

/// A predicate deciding which markers are visible.
///
/// Implemented for every `Fn(&Marker) -> bool` closure, so ad-hoc predicates
/// can be installed on a [`MarkersModel`](crate::MarkersModel) directly.
pub trait MarkerFilter {
    /// Returns `true` if `marker` should be visible.
    fn matches(&self, marker: &Marker) -> bool;
}

impl<F> MarkerFilter for F
where
    F: Fn(&Marker) -> bool,
{
    fn matches(&self, marker: &Marker) -> bool {
        self(marker)
    }
}

/// Errors raised while building [`FilterOptions`].
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// A resource glob could not be compiled.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob {
        /// The offending pattern.
        pattern: String,
        /// The reason reported by the glob compiler.
        message: String,
    },
}

/// The standard marker filter: severity toggles, a text query and
/// include/exclude globs over resource paths.
///
/// Globs are matched against the resource path without its leading `/`, so
/// `src/**` matches `file:///src/lib.rs`.
#[derive(Clone, Debug)]
pub struct FilterOptions {
    text: String,
    hidden: Vec<Severity>,
    include: Option<GlobSet>,
    exclude: Option<GlobSet>,
}

impl FilterOptions {
    /// Creates options that let every marker through.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            hidden: Vec::new(),
            include: None,
            exclude: None,
        }
    }

    /// Only shows markers whose message, source or code contains `text`,
    /// ignoring case. An empty query matches everything.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.trim().to_lowercase();
        self
    }

    /// Hides markers of the given severity.
    pub fn hide(mut self, severity: Severity) -> Self {
        if !self.hidden.contains(&severity) {
            self.hidden.push(severity);
        }
        self
    }

    /// Restricts visible markers to resources matching one of `patterns`.
    ///
    /// An empty pattern list removes the restriction.
    pub fn include<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self, FilterError> {
        self.include = compile_globs(patterns)?;
        Ok(self)
    }

    /// Hides markers of resources matching any of `patterns`.
    pub fn exclude<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self, FilterError> {
        self.exclude = compile_globs(patterns)?;
        Ok(self)
    }

    /// Returns `true` if markers of `severity` are shown.
    pub fn shows(&self, severity: Severity) -> bool {
        !self.hidden.contains(&severity)
    }

    /// Returns `true` if these options let every marker through.
    pub fn is_unrestricted(&self) -> bool {
        self.text.is_empty()
            && self.hidden.is_empty()
            && self.include.is_none()
            && self.exclude.is_none()
    }

    /// Returns `true` if markers on `uri` pass the include/exclude globs.
    pub fn matches_resource(&self, uri: &ResourceUri) -> bool {
        let path = uri.path().trim_start_matches('/');
        if let Some(include) = &self.include {
            if !include.is_match(path) {
                return false;
            }
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(path),
            None => true,
        }
    }

    fn matches_text(&self, marker: &Marker) -> bool {
        if self.text.is_empty() {
            return true;
        }
        [Some(marker.message()), marker.source(), marker.code()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&self.text))
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerFilter for FilterOptions {
    fn matches(&self, marker: &Marker) -> bool {
        self.shows(marker.severity())
            && self.matches_resource(marker.resource())
            && self.matches_text(marker)
    }
}

fn compile_globs<S: AsRef<str>>(patterns: &[S]) -> Result<Option<GlobSet>, FilterError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let glob = Glob::new(pattern).map_err(|e| FilterError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    let set = builder.build().map_err(|e| FilterError::InvalidGlob {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        message: e.to_string(),
    })?;
    Ok(Some(set))
}
