//! `sift show` — print the filtered marker view.

use sift_config::{OutputFormat, ViewOrder};

use crate::pipeline::{build_model, load_snapshot, merge_filter_config, resolve_config};
use crate::report::{describe, render_json, render_text};
use crate::{GlobalArgs, ShowArgs};

/// Runs the `sift show` command.
///
/// Returns exit code 1 if any visible marker is an error, 0 otherwise.
pub fn run(args: &ShowArgs, global: &GlobalArgs) -> anyhow::Result<i32> {
    let config = resolve_config(global)?;
    let filter = merge_filter_config(&config.filter, &args.filter);
    let order = args.order.map(ViewOrder::from).unwrap_or(config.display.order);
    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.display.format);

    let markers = load_snapshot(&args.snapshot)?;
    let model = build_model(markers, &filter)?;

    let views = match order {
        ViewOrder::Sorted => model.sorted_resources(),
        ViewOrder::Grouped => model.filtered_resources(),
    };

    match format {
        OutputFormat::Text => print!("{}", render_text(&views)),
        OutputFormat::Json => println!("{}", render_json(&views)?),
    }

    let stats = model.filtered_stats();
    if !global.quiet && format == OutputFormat::Text {
        eprintln!(
            "   Result: {} in {} resource(s)",
            describe(&stats),
            views.len()
        );
        let hidden = model.marker_count() - stats.total();
        if hidden > 0 {
            eprintln!("   {hidden} marker(s) hidden by filter");
        }
    }

    Ok(if stats.errors > 0 { 1 } else { 0 })
}
