use serde::{Deserialize, Serialize};

use crate::parse::marker;

/// Classification of an entry, taken from its root line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// `- [x] ...`
    Checked,
    /// `- [ ] ...` with a description
    Unchecked,
    /// `- [ ]` followed only by whitespace
    EmptyUnchecked,
    /// Free text, blank lines, dividers and anything not matching a marker
    NonTask,
}

impl EntryKind {
    /// Classify a single root line.
    pub fn of_line(line: &str) -> EntryKind {
        if marker::is_checked(line) {
            EntryKind::Checked
        } else if marker::is_empty_unchecked(line) {
            EntryKind::EmptyUnchecked
        } else if marker::is_unchecked(line) {
            EntryKind::Unchecked
        } else {
            EntryKind::NonTask
        }
    }

    /// Whether the entry is an open task (placeholders included).
    pub fn is_open(self) -> bool {
        matches!(self, EntryKind::Unchecked | EntryKind::EmptyUnchecked)
    }
}

/// A root line plus its contiguous nested lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The original lines joined with `\n`, indentation untouched
    pub text: String,
    /// Index of the root line
    pub start_line: usize,
    /// First line index after this entry
    pub next_line: usize,
    /// Start boundary of the preceding entry, `None` at the top of the buffer
    pub previous_line: Option<usize>,
}

impl Entry {
    /// The entry returned for "no previous entry".
    pub fn empty() -> Self {
        Entry {
            text: String::new(),
            start_line: 0,
            next_line: 0,
            previous_line: None,
        }
    }

    /// The root line of the entry.
    pub fn root_line(&self) -> &str {
        self.text.split('\n').next().unwrap_or_default()
    }

    pub fn kind(&self) -> EntryKind {
        EntryKind::of_line(self.root_line())
    }

    /// Number of physical lines spanned.
    pub fn line_span(&self) -> usize {
        self.next_line.saturating_sub(self.start_line)
    }

    /// Copy of the entry text with `indent` prepended to every line.
    pub fn indented(&self, indent: &str) -> String {
        self.text
            .split('\n')
            .map(|line| format!("{indent}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of the change-detection precheck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeInfo {
    /// An open task sits below a checked one
    pub change: bool,
    /// Start line of the first checked entry, only set when `change` is true
    pub first_line_changed: Option<usize>,
}

impl ChangeInfo {
    pub fn unchanged() -> Self {
        ChangeInfo {
            change: false,
            first_line_changed: None,
        }
    }

    /// Line the host should place its cursor on after rewriting.
    pub fn cursor_line(&self) -> usize {
        self.first_line_changed.unwrap_or(0)
    }
}
