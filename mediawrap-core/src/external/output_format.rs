//! Output format defaulting for mediainfo option lists.
//!
//! mediainfo prints plain text unless told otherwise. Callers of this crate get
//! JSON unless they pass their own `--Output=<format>` selector.

use crate::config::DEFAULT_OUTPUT_FORMAT;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an explicit format selector such as `--Output=XML`.
/// Only ASCII word characters are accepted in the format name.
static OUTPUT_FORMAT_RX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^--Output=(?-u:\w)+$").expect("output format pattern is valid")
});

/// Returns true if `option` selects an output format.
pub fn is_output_format_option(option: &str) -> bool {
    OUTPUT_FORMAT_RX.is_match(option)
}

/// Returns the name of the first selected output format, if any.
pub fn output_format<S: AsRef<str>>(options: &[S]) -> Option<&str> {
    options
        .iter()
        .map(|option| option.as_ref())
        .find(|option| is_output_format_option(option))
        .and_then(|option| option.strip_prefix("--Output="))
}

/// Appends `--Output=JSON` to `options` unless a format selector is already
/// present. The list is modified in place and returned for chaining.
pub fn set_output_format(options: &mut Vec<String>) -> &mut Vec<String> {
    if !options.iter().any(|option| is_output_format_option(option)) {
        options.push(DEFAULT_OUTPUT_FORMAT.to_string());
    }
    options
}
