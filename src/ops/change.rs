use crate::model::buffer::LineBuffer;
use crate::model::entry::{ChangeInfo, EntryKind};
use crate::parse::marker::is_task;
use crate::parse::segment::{entries, entry_at};
use crate::util::diagnostics::{Diagnostic, Diagnostics, NoopDiagnostics};

/// Read-only precheck: does an open task sit below a checked one?
pub fn needs_change<B: LineBuffer + ?Sized>(buffer: &B) -> ChangeInfo {
    needs_change_with(buffer, &NoopDiagnostics)
}

pub fn needs_change_with<B: LineBuffer + ?Sized>(
    buffer: &B,
    diagnostics: &dyn Diagnostics,
) -> ChangeInfo {
    let mut first_checked = None;

    for entry in entries(buffer) {
        let kind = entry.kind();
        match (first_checked, kind) {
            (None, EntryKind::Checked) => first_checked = Some(entry.start_line),
            (Some(first), kind) if kind.is_open() => {
                diagnostics.emit(Diagnostic::ChangeNeeded {
                    first_line_changed: first,
                });
                return ChangeInfo {
                    change: true,
                    first_line_changed: Some(first),
                };
            }
            _ => {}
        }
    }

    diagnostics.emit(Diagnostic::NoChangeNeeded);
    ChangeInfo::unchanged()
}

/// Start line of the last open root task, or the last line when there is
/// none. In a sorted buffer this is where the open partition ends.
pub fn last_incomplete_line<B: LineBuffer + ?Sized>(buffer: &B) -> usize {
    let mut i = buffer.line_count();
    while i > 0 {
        i -= 1;
        let Some(line) = buffer.line(i) else {
            continue;
        };
        if !is_task(line) {
            continue;
        }
        let entry = entry_at(buffer, i);
        if entry.kind().is_open() {
            return entry.start_line;
        }
    }
    buffer.line_count().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::buffer::TextBuffer;
    use crate::util::diagnostics::RecordingDiagnostics;

    const NESTED_OPEN: &str = "- [ ] x
- [ ] e
\t- [ ] f
\t- [ ] g
\t\t- [ ] h
\t\t- [ ] i
- [ ] b
\t\t- [ ] c
- [ ] d
- [ ] a";

    fn check(text: &str) -> ChangeInfo {
        needs_change(&TextBuffer::from_text(text))
    }

    #[test]
    fn all_unchecked_needs_nothing() {
        assert_eq!(check(NESTED_OPEN), ChangeInfo::unchanged());
    }

    #[test]
    fn checked_nested_line_needs_nothing() {
        let text = NESTED_OPEN.replacen("\t- [ ] f", "\t- [x] f", 1);
        assert_eq!(check(&text), ChangeInfo::unchanged());

        let text = NESTED_OPEN.replacen("\t\t- [ ] h", "\t\t- [x] h", 1);
        assert_eq!(check(&text), ChangeInfo::unchanged());
    }

    #[test]
    fn first_line_checked() {
        let text = NESTED_OPEN.replacen("- [ ] x", "- [x] x", 1);
        let info = check(&text);
        assert!(info.change);
        assert_eq!(info.first_line_changed, Some(0));
    }

    #[test]
    fn second_entry_checked() {
        let text = NESTED_OPEN.replacen("- [ ] e", "- [x] e", 1);
        assert_eq!(check(&text).first_line_changed, Some(1));
    }

    #[test]
    fn second_to_last_checked() {
        let text = NESTED_OPEN.replacen("- [ ] d", "- [x] d", 1);
        assert_eq!(
            check(&text),
            ChangeInfo {
                change: true,
                first_line_changed: Some(8),
            }
        );
    }

    #[test]
    fn last_checked_is_already_in_place() {
        let text = NESTED_OPEN.replacen("- [ ] a", "- [x] a", 1);
        assert_eq!(check(&text), ChangeInfo::unchanged());
    }

    #[test]
    fn reports_first_checked_line_not_the_offending_one() {
        let text = "- [ ] x
- [x] e
\t- [ ] f
- [x] b
\t\t- [ ] c
- [x] d
- [ ] a";
        assert_eq!(check(text).first_line_changed, Some(1));
    }

    #[test]
    fn placeholder_below_checked_needs_change() {
        assert!(check("- [ ] b\n- [x] 11\n- [ ]").change);
    }

    #[test]
    fn free_text_below_checked_needs_nothing() {
        assert_eq!(check("- [x] a\n\nnotes"), ChangeInfo::unchanged());
    }

    #[test]
    fn emits_diagnostics() {
        let rec = RecordingDiagnostics::new();
        needs_change_with(&TextBuffer::from_text("- [x] x\n- [ ] e"), &rec);
        assert_eq!(
            rec.take(),
            vec![Diagnostic::ChangeNeeded {
                first_line_changed: 0
            }]
        );

        needs_change_with(&TextBuffer::from_text("- [ ] x"), &rec);
        assert_eq!(rec.take(), vec![Diagnostic::NoChangeNeeded]);
    }

    #[test]
    fn last_incomplete_line_finds_the_boundary() {
        let b = TextBuffer::from_text("- [ ] a\n  - [x] a.1\n- [ ] b\n  - [ ] b.1\n- [x] c\n- [x] d");
        assert_eq!(last_incomplete_line(&b), 2);
    }

    #[test]
    fn last_incomplete_line_checks_the_first_line() {
        let b = TextBuffer::from_text("- [ ] a\n- [x] b");
        assert_eq!(last_incomplete_line(&b), 0);
    }

    #[test]
    fn last_incomplete_line_without_open_tasks() {
        let b = TextBuffer::from_text("- [x] a\n- [x] b\nnotes");
        assert_eq!(last_incomplete_line(&b), 2);
        assert_eq!(last_incomplete_line(&Vec::<String>::new()), 0);
    }
}
