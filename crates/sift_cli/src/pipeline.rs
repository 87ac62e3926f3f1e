//! Shared pipeline helpers for CLI commands.
//!
//! Contains the steps common to `show` and `stats`: configuration lookup,
//! merging filter flags over the configuration, snapshot loading and model
//! construction.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use sift_config::{FilterConfig, SiftConfig, CONFIG_FILE_NAME};
use sift_markers::{FilterError, FilterOptions, MarkersModel, RawMarker, Severity};

use crate::{FilterArgs, GlobalArgs};

/// Walks up from `start` looking for the nearest directory containing `sift.toml`.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads the effective configuration.
///
/// If `--config` is given that file must exist. Otherwise the nearest
/// `sift.toml` above the current directory is used, or the defaults when
/// there is none.
pub fn resolve_config(global: &GlobalArgs) -> anyhow::Result<SiftConfig> {
    if let Some(ref config_path) = global.config {
        return sift_config::load_config_file(Path::new(config_path))
            .with_context(|| format!("loading {config_path}"));
    }
    let cwd = std::env::current_dir().context("resolving current directory")?;
    match find_config_dir(&cwd) {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using configuration");
            sift_config::load_config(&dir)
                .with_context(|| format!("loading {}", dir.join(CONFIG_FILE_NAME).display()))
        }
        None => Ok(SiftConfig::default()),
    }
}

/// Merges command-line filter flags over the `[filter]` configuration.
///
/// `--text` and a non-empty `--include` replace the configured values,
/// `--hide` turns severities off and `--exclude` adds to the configured list.
pub fn merge_filter_config(config: &FilterConfig, args: &FilterArgs) -> FilterConfig {
    let mut merged = config.clone();
    if let Some(text) = &args.text {
        merged.text = text.clone();
    }
    for &severity in &args.hide {
        match Severity::from(severity) {
            Severity::Error => merged.show_errors = false,
            Severity::Warning => merged.show_warnings = false,
            Severity::Info => merged.show_infos = false,
            Severity::Hint => merged.show_hints = false,
        }
    }
    if !args.include.is_empty() {
        merged.include = args.include.clone();
    }
    for pattern in &args.exclude {
        if !merged.exclude.contains(pattern) {
            merged.exclude.push(pattern.clone());
        }
    }
    merged
}

/// Parses a snapshot: a JSON array of marker records.
pub fn parse_snapshot(content: &str) -> Result<Vec<RawMarker>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Reads and parses a snapshot file, or stdin when `path` is `-`.
pub fn load_snapshot(path: &str) -> anyhow::Result<Vec<RawMarker>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading snapshot {path}"))?
    };
    let markers = parse_snapshot(&content).with_context(|| format!("parsing snapshot {path}"))?;
    tracing::debug!(path, markers = markers.len(), "loaded snapshot");
    Ok(markers)
}

/// Builds marker filter options from the `[filter]` configuration section.
pub fn filter_options(config: &FilterConfig) -> Result<FilterOptions, FilterError> {
    let mut options = FilterOptions::new()
        .with_text(&config.text)
        .include(config.include.as_slice())?
        .exclude(config.exclude.as_slice())?;
    let toggles = [
        (Severity::Error, config.show_errors),
        (Severity::Warning, config.show_warnings),
        (Severity::Info, config.show_infos),
        (Severity::Hint, config.show_hints),
    ];
    for (severity, shown) in toggles {
        if !shown {
            options = options.hide(severity);
        }
    }
    Ok(options)
}

/// Builds the model for `markers` and installs the configured filter.
pub fn build_model(markers: Vec<RawMarker>, filter: &FilterConfig) -> anyhow::Result<MarkersModel> {
    let options = filter_options(filter)?;
    let mut model = MarkersModel::new(markers);
    if !options.is_unrestricted() {
        model.set_filter(options);
    }
    Ok(model)
}
