//! Configuration types deserialized from `sift.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The top-level configuration parsed from `sift.toml`.
///
/// Every section is optional; an absent file or section yields the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiftConfig {
    /// The marker filter applied before display.
    #[serde(default)]
    pub filter: FilterConfig,
    /// Ordering and output format settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// The default marker filter.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Case-insensitive text that the message, source or code must contain.
    #[serde(default)]
    pub text: String,
    /// Whether error markers are shown.
    #[serde(default = "default_true")]
    pub show_errors: bool,
    /// Whether warning markers are shown.
    #[serde(default = "default_true")]
    pub show_warnings: bool,
    /// Whether info markers are shown.
    #[serde(default = "default_true")]
    pub show_infos: bool,
    /// Whether hint markers are shown.
    #[serde(default = "default_true")]
    pub show_hints: bool,
    /// Resource globs to restrict the view to (e.g., `"src/**"`).
    ///
    /// Accepts either a single string or a list of strings.
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub include: Vec<String>,
    /// Resource globs to hide (e.g., `["target/**", "**/generated/**"]`).
    #[serde(default, deserialize_with = "deserialize_string_or_vec")]
    pub exclude: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            show_errors: true,
            show_warnings: true,
            show_infos: true,
            show_hints: true,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Deserializes a field that can be either a single string or a list of strings.
///
/// Allows `exclude = "target/**"` as well as `exclude = ["target/**", "out/**"]`.
fn deserialize_string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.push(val);
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Display settings for the marker view.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// How resources and markers are ordered.
    #[serde(default)]
    pub order: ViewOrder,
    /// How the view is written out.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Ordering of the marker view.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewOrder {
    /// Most severe resources first, then by path; markers by severity and position (default).
    #[default]
    Sorted,
    /// Resources in the order their first marker arrived; markers in arrival order.
    Grouped,
}

/// Output format of the marker view.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default).
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn view_order_all_variants() {
        for (input, expected) in [("sorted", ViewOrder::Sorted), ("grouped", ViewOrder::Grouped)] {
            let toml = format!("[display]\norder = \"{input}\"\n");
            let config = load_config_from_str(&toml).unwrap();
            assert_eq!(config.display.order, expected);
        }
    }

    #[test]
    fn output_format_all_variants() {
        for (input, expected) in [("text", OutputFormat::Text), ("json", OutputFormat::Json)] {
            let toml = format!("[display]\nformat = \"{input}\"\n");
            let config = load_config_from_str(&toml).unwrap();
            assert_eq!(config.display.format, expected);
        }
    }

    #[test]
    fn documented_defaults_match_default_impl() {
        let toml = r#"
[filter]
text = ""
show_errors = true
show_warnings = true
show_infos = true
show_hints = true
include = []
exclude = []

[display]
order = "sorted"
format = "text"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.filter, FilterConfig::default());
        assert!(config.filter.exclude.is_empty());
        assert_eq!(config.display.order, ViewOrder::default());
        assert_eq!(config.display.format, OutputFormat::default());
    }

    #[test]
    fn exclude_single_string() {
        let config = load_config_from_str("[filter]\nexclude = \"target/**\"\n").unwrap();
        assert_eq!(config.filter.exclude, vec!["target/**"]);
    }

    #[test]
    fn include_list() {
        let config = load_config_from_str("[filter]\ninclude = [\"src/**\", \"tests/**\"]\n").unwrap();
        assert_eq!(config.filter.include, vec!["src/**", "tests/**"]);
    }

    #[test]
    fn unset_toggles_default_to_shown() {
        let config = load_config_from_str("[filter]\nshow_hints = false\n").unwrap();
        assert!(config.filter.show_errors);
        assert!(config.filter.show_warnings);
        assert!(config.filter.show_infos);
        assert!(!config.filter.show_hints);
    }

    #[test]
    fn unknown_order_rejected() {
        assert!(load_config_from_str("[display]\norder = \"random\"\n").is_err());
    }
}
