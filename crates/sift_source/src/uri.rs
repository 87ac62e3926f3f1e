//! Normalized resource identifiers used as the grouping key for markers.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use url::Url;

/// Bytes escaped in the path of a `file` URI.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// A normalized identifier for a file or other resource that markers attach to.
///
/// Two identifiers are equal when their normalized string forms are equal;
/// that string is what the markers model groups by. File paths are normalized
/// into `file://` URIs by [`ResourceUri::file`], so `a/res1`, `/a/res1`,
/// `file:///a/res1` and `file://localhost/a/res1` all denote the same resource.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourceUri {
    uri: String,
    path: String,
}

impl ResourceUri {
    /// Creates a `file://` identifier from a filesystem path.
    ///
    /// Backslashes become `/`, a leading `/` is ensured, and bytes that may
    /// not appear in a URI path are percent-encoded.
    pub fn file(path: &str) -> Self {
        let mut path = path.replace('\\', "/");
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        let uri = format!("file://{}", utf8_percent_encode(&path, PATH));
        Self { uri, path }
    }

    /// Parses an identifier from its string form.
    ///
    /// Absolute URLs with a scheme of two or more characters are kept in
    /// their [`Url`] serialization. `file` URLs without a host (including
    /// `localhost`) are re-normalized through [`ResourceUri::file`]. Anything
    /// else, including Windows drive paths such as `C:\src\top.rs`, is
    /// treated as a file path.
    pub fn parse(s: &str) -> Self {
        let url = match Url::parse(s) {
            Ok(url) if url.scheme().len() >= 2 => url,
            _ => return Self::file(s),
        };
        let path = percent_decode_str(url.path()).decode_utf8_lossy().into_owned();
        if url.scheme() == "file" && url.host_str().map_or(true, str::is_empty) {
            return Self::file(&path);
        }
        Self {
            uri: url.into(),
            path,
        }
    }

    /// Returns the normalized string form of this identifier.
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Returns the percent-decoded path component (e.g. `/a/res1`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the last segment of the path, typically the file name.
    pub fn name(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }

    /// Returns `true` if this identifier uses the `file` scheme.
    pub fn is_file(&self) -> bool {
        self.uri.starts_with("file:")
    }

    /// Compares two identifiers by path for display ordering.
    ///
    /// Paths are compared as ordinary strings, ignoring letter case, so that
    /// `a/res1 < a/res2 < b/res3 < c/res2 < res4`. Paths differing only in
    /// case fall back to ordinal comparison, then to the full URI, which keeps
    /// the order total.
    pub fn cmp_path(&self, other: &Self) -> Ordering {
        let a = self.path.chars().flat_map(char::to_lowercase);
        let b = other.path.chars().flat_map(char::to_lowercase);
        a.cmp(b)
            .then_with(|| self.path.cmp(&other.path))
            .then_with(|| self.uri.cmp(&other.uri))
    }
}

impl PartialEq for ResourceUri {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for ResourceUri {}

impl Hash for ResourceUri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl From<String> for ResourceUri {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<&str> for ResourceUri {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<ResourceUri> for String {
    fn from(uri: ResourceUri) -> Self {
        uri.uri
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_from_relative_path() {
        let uri = ResourceUri::file("a/res1");
        assert_eq!(uri.as_str(), "file:///a/res1");
        assert_eq!(uri.path(), "/a/res1");
        assert_eq!(uri.name(), "res1");
        assert!(uri.is_file());
    }

    #[test]
    fn file_encodes_spaces() {
        let uri = ResourceUri::file("some resource");
        assert_eq!(uri.as_str(), "file:///some%20resource");
        assert_eq!(uri.path(), "/some resource");
    }

    #[test]
    fn file_normalizes_backslashes() {
        let uri = ResourceUri::file("src\\lib.rs");
        assert_eq!(uri.as_str(), "file:///src/lib.rs");
    }

    #[test]
    fn equivalent_spellings_are_equal() {
        let a = ResourceUri::file("a/res1");
        let b = ResourceUri::parse("/a/res1");
        let c = ResourceUri::parse("file:///a/res1");
        let d = ResourceUri::parse("FILE:///a/res1");
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
    }

    #[test]
    fn parse_decodes_file_uri() {
        let uri = ResourceUri::parse("file:///some%20resource");
        assert_eq!(uri, ResourceUri::file("some resource"));
        assert_eq!(uri.path(), "/some resource");
    }

    #[test]
    fn parse_keeps_other_schemes() {
        let uri = ResourceUri::parse("untitled:Untitled-1");
        assert_eq!(uri.as_str(), "untitled:Untitled-1");
        assert_eq!(uri.path(), "Untitled-1");
        assert!(!uri.is_file());

        let remote = ResourceUri::parse("vscode-remote://host/src/main.rs");
        assert_eq!(remote.path(), "/src/main.rs");
        assert_eq!(remote.name(), "main.rs");
    }

    #[test]
    fn parse_drive_letter_as_path() {
        let uri = ResourceUri::parse("C:\\src\\top.rs");
        assert_eq!(uri.as_str(), "file:///C:/src/top.rs");
    }

    #[test]
    fn localhost_file_uri_is_the_same_resource() {
        let local = ResourceUri::parse("file://localhost/src/lib.rs");
        assert_eq!(local, ResourceUri::parse("file:///src/lib.rs"));
        assert_eq!(local.as_str(), "file:///src/lib.rs");
    }

    #[test]
    fn file_uri_with_host_keeps_host() {
        let unc = ResourceUri::parse("file://server/share/top.rs");
        assert_eq!(unc.as_str(), "file://server/share/top.rs");
        assert_eq!(unc.path(), "/share/top.rs");
        assert!(unc.is_file());
    }

    #[test]
    fn malformed_escapes_survive_decoding() {
        let uri = ResourceUri::parse("file:///a%2");
        assert_eq!(uri.path(), "/a%2");
        assert_eq!(uri.as_str(), "file:///a%252");
        assert_eq!(ResourceUri::parse("file:///a%41").path(), "/aA");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let uri = ResourceUri::file("notes #1?.md");
        assert_eq!(uri.as_str(), "file:///notes%20%231%3F.md");
        assert_eq!(ResourceUri::parse(uri.as_str()), uri);
    }

    #[test]
    fn path_order_is_string_order() {
        let mut uris: Vec<ResourceUri> = ["res4", "c/res2", "a/res2", "b/res3", "a/res1"]
            .into_iter()
            .map(ResourceUri::file)
            .collect();
        uris.sort_by(ResourceUri::cmp_path);
        let paths: Vec<&str> = uris.iter().map(ResourceUri::path).collect();
        assert_eq!(paths, ["/a/res1", "/a/res2", "/b/res3", "/c/res2", "/res4"]);
    }

    #[test]
    fn path_order_ignores_case() {
        let upper = ResourceUri::file("B/x");
        let lower = ResourceUri::file("a/x");
        assert_eq!(lower.cmp_path(&upper), Ordering::Less);
        assert_ne!(
            ResourceUri::file("A/x").cmp_path(&ResourceUri::file("a/x")),
            Ordering::Equal
        );
    }

    #[test]
    fn serde_as_string() {
        let uri = ResourceUri::file("a/res1");
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, r#""file:///a/res1""#);
        let back: ResourceUri = serde_json::from_str(r#""a/res1""#).unwrap();
        assert_eq!(back, uri);
    }
}
