//! `sift stats` — print marker counts per severity.

use serde::Serialize;
use sift_config::OutputFormat;
use sift_markers::{MarkerStats, MarkersModel};

use crate::pipeline::{build_model, load_snapshot, merge_filter_config, resolve_config};
use crate::report::describe;
use crate::{GlobalArgs, StatsArgs};

/// JSON shape of the `sift stats` output.
#[derive(Serialize, Debug, PartialEq)]
pub struct StatsReport {
    /// Number of resources holding any marker.
    pub resources: usize,
    /// Number of resources with a visible marker.
    pub visible_resources: usize,
    /// Counts over all stored markers.
    pub total: MarkerStats,
    /// Counts over the visible markers.
    pub visible: MarkerStats,
}

impl StatsReport {
    /// Collects the counts from a model.
    pub fn from_model(model: &MarkersModel) -> Self {
        Self {
            resources: model.resources().count(),
            visible_resources: model.filtered_resources().len(),
            total: model.stats(),
            visible: model.filtered_stats(),
        }
    }
}

/// Runs the `sift stats` command. Always returns exit code 0.
pub fn run(args: &StatsArgs, global: &GlobalArgs) -> anyhow::Result<i32> {
    let config = resolve_config(global)?;
    let filter = merge_filter_config(&config.filter, &args.filter);
    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.display.format);

    let model = build_model(load_snapshot(&args.snapshot)?, &filter)?;
    let report = StatsReport::from_model(&model);

    match format {
        OutputFormat::Text => {
            println!("total:   {} in {} resource(s)", describe(&report.total), report.resources);
            if model.has_filter() {
                println!(
                    "visible: {} in {} resource(s)",
                    describe(&report.visible),
                    report.visible_resources
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(0)
}
