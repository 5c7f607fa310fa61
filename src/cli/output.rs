use std::path::Path;

use serde::Serialize;

use crate::io::document::SortOutcome;
use crate::model::entry::ChangeInfo;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct SortJson {
    pub path: String,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_line: Option<usize>,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub path: String,
    pub change: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_line_changed: Option<usize>,
    pub last_incomplete_line: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn sort_to_json(path: &Path, outcome: &SortOutcome) -> SortJson {
    SortJson {
        path: path.display().to_string(),
        changed: outcome.changed,
        cursor_line: outcome.cursor_line.filter(|_| outcome.changed),
    }
}

pub fn check_to_json(path: &Path, info: &ChangeInfo, last_incomplete_line: usize) -> CheckJson {
    CheckJson {
        path: path.display().to_string(),
        change: info.change,
        first_line_changed: info.first_line_changed,
        last_incomplete_line,
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

pub fn format_sort(path: &Path, outcome: &SortOutcome) -> String {
    if outcome.changed {
        format!("sorted {}", path.display())
    } else {
        format!("{} already sorted", path.display())
    }
}

/// One line per file. Line numbers are 1-based for humans.
pub fn format_check(path: &Path, info: &ChangeInfo) -> String {
    match info.first_line_changed {
        Some(line) if info.change => format!(
            "{}: needs sorting (checked task at line {} is above open tasks)",
            path.display(),
            line + 1
        ),
        _ => format!("{}: ok", path.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_text_uses_one_based_lines() {
        let info = ChangeInfo {
            change: true,
            first_line_changed: Some(0),
        };
        assert_eq!(
            format_check(Path::new("todo.md"), &info),
            "todo.md: needs sorting (checked task at line 1 is above open tasks)"
        );
        assert_eq!(
            format_check(Path::new("todo.md"), &ChangeInfo::unchanged()),
            "todo.md: ok"
        );
    }

    #[test]
    fn check_json_skips_missing_line() {
        let json = check_to_json(Path::new("todo.md"), &ChangeInfo::unchanged(), 3);
        assert_eq!(
            serde_json::to_string(&json).unwrap(),
            r#"{"path":"todo.md","change":false,"last_incomplete_line":3}"#
        );
    }

    #[test]
    fn sort_json_reports_cursor_only_after_rewrite() {
        let outcome = SortOutcome {
            content: String::new(),
            changed: true,
            cursor_line: Some(2),
        };
        let json = sort_to_json(Path::new("a.md"), &outcome);
        assert_eq!(
            serde_json::to_string(&json).unwrap(),
            r#"{"path":"a.md","changed":true,"cursor_line":2}"#
        );
    }
}
