//! Textual shapes recognized inside unit files.
//!
//! Marker: the word `disabled`, optional whitespace, `:`, optional
//! whitespace, then `true` or `false`. Declaration opener:
//! `module.exports = {` or `export default {`, whitespace flexible.

use std::sync::LazyLock;

use disco_core::EnabledMarker;
use regex::Regex;

// Patterns are literals covered by the tests below.
pub(crate) static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdisabled\s*:\s*(true|false)\b").expect("marker pattern"));

pub(crate) static MARKER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdisabled\s*:").expect("marker key pattern"));

pub(crate) static MARKER_TRUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdisabled\s*:\s*true\b").expect("marker true pattern"));

pub(crate) static MARKER_FALSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdisabled\s*:\s*false\b").expect("marker false pattern"));

pub(crate) static DECLARATION_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(module\.exports\s*=\s*\{|export\s+default\s*\{)").expect("declaration pattern")
});

/// Read the marker state from unit text. The first marker wins.
#[must_use]
pub fn read_marker(text: &str) -> EnabledMarker {
    match MARKER.captures(text).and_then(|caps| caps.get(1)) {
        Some(value) if value.as_str() == "true" => EnabledMarker::Disabled,
        Some(_) => EnabledMarker::Enabled,
        None => EnabledMarker::Unmarked,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("module.exports = {\n    disabled: true,\n};", EnabledMarker::Disabled)]
    #[case("module.exports = { disabled:false };", EnabledMarker::Enabled)]
    #[case("module.exports = {\n  name: 'ping',\n};", EnabledMarker::Unmarked)]
    #[case("module.exports = { isdisabled: true };", EnabledMarker::Unmarked)]
    #[case("export default {\n\tdisabled :  true\n}", EnabledMarker::Disabled)]
    fn reads_marker(#[case] text: &str, #[case] expected: EnabledMarker) {
        assert_eq!(read_marker(text), expected);
    }

    #[test]
    fn declaration_opener_matches_both_export_styles() {
        assert!(DECLARATION_OPEN.is_match("module.exports={"));
        assert!(DECLARATION_OPEN.is_match("export default {"));
        assert!(!DECLARATION_OPEN.is_match("const exports = {"));
    }
}
