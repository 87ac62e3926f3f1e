//! Text and JSON renderings of the marker view.

use serde::Serialize;
use sift_markers::{Marker, MarkerStats, ResourceView, Severity};
use sift_source::TextRange;

/// JSON shape of one resource in the view.
#[derive(Serialize)]
pub struct ResourceReport<'a> {
    /// Normalized resource identifier.
    pub resource: &'a str,
    /// Decoded resource path.
    pub path: &'a str,
    /// Counts of the visible markers.
    pub stats: MarkerStats,
    /// Visible markers in view order.
    pub markers: Vec<MarkerReport<'a>>,
}

/// JSON shape of one marker in the view.
#[derive(Serialize)]
pub struct MarkerReport<'a> {
    /// Producer the marker was ingested under.
    pub owner: &'a str,
    /// Marker severity.
    pub severity: Severity,
    /// Problem description.
    pub message: &'a str,
    /// Marked range.
    pub range: TextRange,
    /// Reporting tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    /// Problem code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'a str>,
}

impl<'a> MarkerReport<'a> {
    fn new(marker: &'a Marker) -> Self {
        Self {
            owner: marker.owner(),
            severity: marker.severity(),
            message: marker.message(),
            range: marker.range(),
            source: marker.source(),
            code: marker.code(),
        }
    }
}

/// Renders the view for a terminal, one header line per resource followed by
/// one indented line per marker.
///
/// ```text
/// /src/lib.rs (1 error, 1 warning)
///   error    10:5   mismatched types [rustc E0308]
///   warning  3:1    needless return
/// ```
pub fn render_text(views: &[ResourceView<'_>]) -> String {
    let mut out = String::new();
    for view in views {
        out.push_str(&format!("{} ({})\n", view.uri().path(), describe(&view.stats())));
        for marker in view.markers() {
            out.push_str(&render_marker_line(marker));
            out.push('\n');
        }
    }
    out
}

fn render_marker_line(marker: &Marker) -> String {
    let range = marker.range();
    let position = format!("{}:{}", range.start_line, range.start_column);
    let mut line = format!(
        "  {:<8} {:<6} {}",
        marker.severity().name().to_lowercase(),
        position,
        marker.message()
    );
    let origin: Vec<&str> = [marker.source(), marker.code()].into_iter().flatten().collect();
    if !origin.is_empty() {
        line.push_str(&format!(" [{}]", origin.join(" ")));
    }
    line
}

/// Renders the view as pretty-printed JSON.
pub fn render_json(views: &[ResourceView<'_>]) -> serde_json::Result<String> {
    let reports: Vec<ResourceReport<'_>> = views
        .iter()
        .map(|view| ResourceReport {
            resource: view.uri().as_str(),
            path: view.uri().path(),
            stats: view.stats(),
            markers: view.markers().iter().map(|&m| MarkerReport::new(m)).collect(),
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

/// Describes counts as e.g. `2 errors, 1 warning`, omitting zero counts.
pub fn describe(stats: &MarkerStats) -> String {
    let parts: Vec<String> = Severity::ALL
        .iter()
        .filter_map(|&severity| {
            let count = stats.count(severity);
            (count > 0).then(|| {
                let noun = severity.name().to_lowercase();
                if count == 1 {
                    format!("{count} {noun}")
                } else {
                    format!("{count} {noun}s")
                }
            })
        })
        .collect();
    if parts.is_empty() {
        "no problems".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sift_markers::{MarkersModel, RawMarker};
    use sift_source::ResourceUri;

    fn model() -> MarkersModel {
        MarkersModel::new(vec![
            RawMarker::new(
                "clippy",
                ResourceUri::file("src/lib.rs"),
                Severity::Warning,
                "needless return",
                TextRange::new(3, 1, 3, 7),
            ),
            RawMarker::new(
                "rustc",
                ResourceUri::file("src/lib.rs"),
                Severity::Error,
                "mismatched types",
                TextRange::new(10, 5, 10, 9),
            )
            .with_source("rustc")
            .with_code("E0308"),
            RawMarker::new(
                "rustc",
                ResourceUri::file("README.md"),
                Severity::Hint,
                "unused file",
                TextRange::new(1, 1, 1, 1),
            ),
        ])
    }

    #[test]
    fn text_rendering_in_sorted_order() {
        let model = model();
        let text = render_text(&model.sorted_resources());
        assert_eq!(
            text,
            "/src/lib.rs (1 error, 1 warning)\n\
             \x20 error    10:5   mismatched types [rustc E0308]\n\
             \x20 warning  3:1    needless return\n\
             /README.md (1 hint)\n\
             \x20 hint     1:1    unused file\n"
        );
    }

    #[test]
    fn json_rendering_has_markers() {
        let model = model();
        let json = render_json(&model.filtered_resources()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let resources = value.as_array().unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0]["resource"], "file:///src/lib.rs");
        assert_eq!(resources[0]["stats"]["errors"], 1);
        assert_eq!(resources[0]["markers"][1]["code"], "E0308");
        assert_eq!(resources[0]["markers"][1]["range"]["startLine"], 10);
        assert!(resources[0]["markers"][0].get("code").is_none());
    }

    #[test]
    fn describe_counts() {
        let stats = MarkerStats {
            errors: 2,
            warnings: 1,
            infos: 0,
            hints: 0,
        };
        assert_eq!(describe(&stats), "2 errors, 1 warning");
        assert_eq!(describe(&MarkerStats::default()), "no problems");
    }
}
