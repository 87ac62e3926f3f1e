//! The markers model: grouping, owner-scoped replacement and filtered reads.

use crate::filter::MarkerFilter;
use crate::marker::Marker;
use crate::raw::RawMarker;
use crate::resource::{Resource, ResourceView};
use crate::stats::MarkerStats;
use indexmap::IndexMap;
use sift_source::ResourceUri;
use std::fmt;

/// Holds the current snapshot of markers grouped by resource.
///
/// Resources are kept in grouping order: the order in which their first marker
/// arrived. Reads never sort; callers apply [`Resource::compare`] /
/// [`ResourceView::compare`] and [`Marker::compare`] when they want display
/// order, or use [`sorted_resources`](Self::sorted_resources).
///
/// The model is single-writer state with no internal locking.
pub struct MarkersModel {
    resources: IndexMap<String, Resource>,
    filter: Option<Box<dyn MarkerFilter>>,
}

impl MarkersModel {
    /// Builds a model from an initial set of markers, each ingested under its
    /// own `owner` field.
    pub fn new(initial: impl IntoIterator<Item = RawMarker>) -> Self {
        let mut model = Self {
            resources: IndexMap::new(),
            filter: None,
        };
        for raw in initial {
            let owner = raw.owner.clone();
            model.ingest(owner, raw);
        }
        tracing::debug!(
            resources = model.resources.len(),
            markers = model.marker_count(),
            "built markers model"
        );
        model
    }

    /// Replaces every marker of `owner` with `markers`.
    ///
    /// Markers of other owners are untouched. Resources emptied by the removal
    /// are dropped unless the new batch refills them, in which case they keep
    /// their position. Unknown owners and empty batches are fine.
    pub fn update_markers(&mut self, owner: &str, markers: impl IntoIterator<Item = RawMarker>) {
        let removed: usize = self
            .resources
            .values_mut()
            .map(|resource| resource.remove_owner(owner))
            .sum();

        let mut added = 0;
        for raw in markers {
            self.ingest(owner.to_string(), raw);
            added += 1;
        }

        self.resources.retain(|_, resource| !resource.is_empty());

        tracing::debug!(
            owner,
            removed,
            added,
            resources = self.resources.len(),
            "updated markers"
        );
    }

    /// Installs `filter`, replacing any previous one.
    ///
    /// Stored markers are not touched; only subsequent reads change.
    pub fn set_filter(&mut self, filter: impl MarkerFilter + 'static) {
        self.filter = Some(Box::new(filter));
        tracing::debug!("marker filter set");
    }

    /// Removes the active filter so every marker is visible again.
    pub fn clear_filter(&mut self) {
        self.filter = None;
        tracing::debug!("marker filter cleared");
    }

    /// Returns `true` if a filter is installed.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Visits each resource with at least one visible marker, in grouping order.
    ///
    /// Each view holds only the visible markers of its resource, in insertion
    /// order. Views are computed on every call.
    pub fn for_each_filtered_resource<'a>(&'a self, mut visitor: impl FnMut(ResourceView<'a>)) {
        for resource in self.resources.values() {
            let view = match &self.filter {
                None => ResourceView::all(resource),
                Some(filter) => {
                    let visible = resource
                        .markers()
                        .iter()
                        .filter(|marker| filter.matches(marker))
                        .collect();
                    ResourceView::new(resource, visible)
                }
            };
            if !view.is_empty() {
                visitor(view);
            }
        }
    }

    /// Collects the visible resources in grouping order.
    pub fn filtered_resources(&self) -> Vec<ResourceView<'_>> {
        let mut views = Vec::new();
        self.for_each_filtered_resource(|view| views.push(view));
        views
    }

    /// Collects the visible resources in display order: resources by
    /// [`ResourceView::compare`], markers within each by [`Marker::compare`].
    pub fn sorted_resources(&self) -> Vec<ResourceView<'_>> {
        let mut views = self.filtered_resources();
        views.sort_by(ResourceView::compare);
        for view in &mut views {
            view.sort_markers();
        }
        views
    }

    /// Iterates over all resources in grouping order, ignoring the filter.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    /// Looks up a resource by identifier, ignoring the filter.
    pub fn resource(&self, uri: &ResourceUri) -> Option<&Resource> {
        self.resources.get(uri.as_str())
    }

    /// Returns `true` if the model holds any marker.
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    /// Returns `true` if any marker passes the active filter.
    pub fn has_filtered_resources(&self) -> bool {
        let mut found = false;
        self.for_each_filtered_resource(|_| found = true);
        found
    }

    /// Returns the total number of stored markers.
    pub fn marker_count(&self) -> usize {
        self.resources.values().map(Resource::len).sum()
    }

    /// Counts all stored markers by severity.
    pub fn stats(&self) -> MarkerStats {
        let mut stats = MarkerStats::default();
        for resource in self.resources.values() {
            stats += resource.stats();
        }
        stats
    }

    /// Counts the visible markers by severity.
    pub fn filtered_stats(&self) -> MarkerStats {
        let mut stats = MarkerStats::default();
        self.for_each_filtered_resource(|view| stats += view.stats());
        stats
    }

    fn ingest(&mut self, owner: String, raw: RawMarker) {
        let key = raw.resource.as_str().to_string();
        let resource = self
            .resources
            .entry(key)
            .or_insert_with(|| Resource::new(raw.resource.clone()));
        resource.push(Marker::new(owner, raw));
    }
}

impl fmt::Debug for MarkersModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkersModel")
            .field("resources", &self.resources.values().collect::<Vec<_>>())
            .field("has_filter", &self.has_filter())
            .finish()
    }
}

impl Default for MarkersModel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
