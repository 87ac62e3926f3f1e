//! Resources: the per-file grouping of markers and their display ordering.

use crate::marker::Marker;
use crate::severity::Severity;
use crate::stats::MarkerStats;
use sift_source::ResourceUri;
use std::cmp::Ordering;

/// One resource and the markers currently attached to it, in insertion order.
///
/// While held by a [`MarkersModel`](crate::MarkersModel) a resource always has
/// at least one marker; the model drops resources whose last marker goes away.
#[derive(Clone, Debug)]
pub struct Resource {
    uri: ResourceUri,
    markers: Vec<Marker>,
}

impl Resource {
    /// Creates a resource with no markers.
    pub fn new(uri: ResourceUri) -> Self {
        Self {
            uri,
            markers: Vec::new(),
        }
    }

    /// Orders resources most severe first, then by path.
    ///
    /// Resources without any marker sort after all others. See
    /// [`ResourceUri::cmp_path`] for the path ordering.
    pub fn compare(a: &Resource, b: &Resource) -> Ordering {
        compare_by_severity_then_path(a.worst_severity(), &a.uri, b.worst_severity(), &b.uri)
    }

    /// Returns the resource identifier.
    pub fn uri(&self) -> &ResourceUri {
        &self.uri
    }

    /// Returns the file name of the resource.
    pub fn name(&self) -> &str {
        self.uri.name()
    }

    /// Returns the markers attached to this resource.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns the number of attached markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` if no markers are attached.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns the most severe level among the markers, or `None` when empty.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.markers.iter().map(Marker::severity).max()
    }

    /// Counts the markers by severity.
    pub fn stats(&self) -> MarkerStats {
        MarkerStats::from_markers(&self.markers)
    }

    /// Sorts the markers with [`Marker::compare`], keeping ties in place.
    pub fn sort_markers(&mut self) {
        self.markers.sort_by(Marker::compare);
    }

    /// Appends a marker.
    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Removes every marker ingested under `owner`, returning how many went.
    pub fn remove_owner(&mut self, owner: &str) -> usize {
        let before = self.markers.len();
        self.markers.retain(|m| m.owner() != owner);
        before - self.markers.len()
    }
}

/// A read-only view of a resource restricted to the markers passing a filter.
///
/// Views are built fresh on every read of the model, so they always reflect
/// the filter that was active at that moment.
#[derive(Clone, Debug)]
pub struct ResourceView<'a> {
    resource: &'a Resource,
    markers: Vec<&'a Marker>,
}

impl<'a> ResourceView<'a> {
    /// Creates a view over `resource` showing the given subset of its markers.
    pub fn new(resource: &'a Resource, markers: Vec<&'a Marker>) -> Self {
        Self { resource, markers }
    }

    /// Creates a view showing every marker of `resource`.
    pub fn all(resource: &'a Resource) -> Self {
        Self::new(resource, resource.markers.iter().collect())
    }

    /// Same ordering as [`Resource::compare`], over the visible markers only.
    pub fn compare(a: &ResourceView<'_>, b: &ResourceView<'_>) -> Ordering {
        compare_by_severity_then_path(a.worst_severity(), a.uri(), b.worst_severity(), b.uri())
    }

    /// Returns the underlying resource with all its markers.
    pub fn resource(&self) -> &'a Resource {
        self.resource
    }

    /// Returns the resource identifier.
    pub fn uri(&self) -> &'a ResourceUri {
        &self.resource.uri
    }

    /// Returns the file name of the resource.
    pub fn name(&self) -> &'a str {
        self.resource.name()
    }

    /// Returns the visible markers.
    pub fn markers(&self) -> &[&'a Marker] {
        &self.markers
    }

    /// Returns the number of visible markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` if no markers are visible.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns the most severe level among the visible markers.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.markers.iter().map(|m| m.severity()).max()
    }

    /// Counts the visible markers by severity.
    pub fn stats(&self) -> MarkerStats {
        MarkerStats::from_markers(self.markers.iter().copied())
    }

    /// Sorts the visible markers with [`Marker::compare`], keeping ties in place.
    pub fn sort_markers(&mut self) {
        self.markers.sort_by(|a, b| Marker::compare(a, b));
    }
}

fn compare_by_severity_then_path(
    a_worst: Option<Severity>,
    a_uri: &ResourceUri,
    b_worst: Option<Severity>,
    b_uri: &ResourceUri,
) -> Ordering {
    let by_severity = match (a_worst, b_worst) {
        (Some(a), Some(b)) => a.rank().cmp(&b.rank()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_severity.then_with(|| a_uri.cmp_path(b_uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawMarker;
    use sift_source::TextRange;

    fn marker(owner: &str, path: &str, severity: Severity, line: u32) -> Marker {
        let raw = RawMarker::new(
            owner,
            ResourceUri::file(path),
            severity,
            "some message",
            TextRange::new(line, 5, line + 1, 10),
        );
        Marker::new(owner, raw)
    }

    fn resource(path: &str, severities: &[Severity]) -> Resource {
        let mut res = Resource::new(ResourceUri::file(path));
        for (i, &severity) in severities.iter().enumerate() {
            res.push(marker("owner", path, severity, i as u32 + 1));
        }
        res
    }

    #[test]
    fn worst_severity_is_most_severe() {
        let res = resource("a", &[Severity::Info, Severity::Error, Severity::Hint]);
        assert_eq!(res.worst_severity(), Some(Severity::Error));
        assert_eq!(resource("b", &[]).worst_severity(), None);
    }

    #[test]
    fn stats_counts_by_severity() {
        let res = resource("a", &[Severity::Info, Severity::Error, Severity::Error]);
        let stats = res.stats();
        assert_eq!(stats.errors, 2);
        assert_eq!(stats.infos, 1);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn remove_owner_keeps_other_owners() {
        let mut res = Resource::new(ResourceUri::file("a"));
        res.push(marker("x", "a", Severity::Error, 1));
        res.push(marker("y", "a", Severity::Error, 2));
        res.push(marker("x", "a", Severity::Warning, 3));
        assert_eq!(res.remove_owner("x"), 2);
        assert_eq!(res.len(), 1);
        assert_eq!(res.markers()[0].owner(), "y");
        assert_eq!(res.remove_owner("unknown"), 0);
    }

    #[test]
    fn more_severe_resource_first() {
        let warning = resource("a/res1", &[Severity::Warning]);
        let error = resource("z/res9", &[Severity::Hint, Severity::Error]);
        assert_eq!(Resource::compare(&error, &warning), Ordering::Less);
        assert_eq!(Resource::compare(&warning, &error), Ordering::Greater);
    }

    #[test]
    fn hint_only_resource_after_info() {
        let hint = resource("a", &[Severity::Hint]);
        let info = resource("z", &[Severity::Info]);
        assert_eq!(Resource::compare(&info, &hint), Ordering::Less);
    }

    #[test]
    fn empty_resource_sorts_last() {
        let empty = resource("a", &[]);
        let hint = resource("z", &[Severity::Hint]);
        assert_eq!(Resource::compare(&hint, &empty), Ordering::Less);
        assert_eq!(Resource::compare(&empty, &hint), Ordering::Greater);
    }

    #[test]
    fn same_severity_compares_path() {
        let a = resource("a/res2", &[Severity::Error]);
        let b = resource("res4", &[Severity::Error]);
        assert_eq!(Resource::compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn view_uses_visible_markers_only() {
        let res = resource("a", &[Severity::Error, Severity::Info]);
        let info_only: Vec<&Marker> = res
            .markers()
            .iter()
            .filter(|m| m.severity() == Severity::Info)
            .collect();
        let view = ResourceView::new(&res, info_only);
        assert_eq!(view.len(), 1);
        assert_eq!(view.worst_severity(), Some(Severity::Info));
        assert_eq!(view.stats().errors, 0);

        let other = ResourceView::all(&res);
        assert_eq!(ResourceView::compare(&other, &view), Ordering::Less);
    }

    #[test]
    fn view_sorts_markers() {
        let res = resource("a", &[Severity::Hint, Severity::Warning, Severity::Error]);
        let mut view = ResourceView::all(&res);
        view.sort_markers();
        let severities: Vec<Severity> = view.markers().iter().map(|m| m.severity()).collect();
        assert_eq!(
            severities,
            vec![Severity::Error, Severity::Warning, Severity::Hint]
        );
        // The underlying resource keeps insertion order.
        assert_eq!(res.markers()[0].severity(), Severity::Hint);
    }
}
