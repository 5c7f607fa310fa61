use std::sync::LazyLock;

use regex::Regex;

/// Root-level completed task marker.
pub const CHECKED_MARKER: &str = "- [x]";
/// Root-level open task marker.
pub const UNCHECKED_MARKER: &str = "- [ ]";

static NESTED_CHECKBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s+- \[(x| )\]").expect("valid nested checkbox pattern"));

static EMPTY_UNCHECKED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[ \]\s*$").expect("valid empty checkbox pattern"));

pub fn is_checked(line: &str) -> bool {
    line.starts_with(CHECKED_MARKER)
}

pub fn is_unchecked(line: &str) -> bool {
    line.starts_with(UNCHECKED_MARKER)
}

/// A root checkbox line of either state.
pub fn is_task(line: &str) -> bool {
    is_checked(line) || is_unchecked(line)
}

/// An indented checkbox line, which belongs to the entry above it.
pub fn is_nested(line: &str) -> bool {
    NESTED_CHECKBOX.is_match(line)
}

/// `- [ ]` with nothing but whitespace after it.
pub fn is_empty_unchecked(line: &str) -> bool {
    EMPTY_UNCHECKED.is_match(line)
}
