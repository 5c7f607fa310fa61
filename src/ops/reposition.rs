use crate::model::buffer::LineBuffer;
use crate::model::config::SortConfig;
use crate::model::entry::EntryKind;
use crate::parse::segment::{entries, previous_entry};
use crate::util::diagnostics::{Diagnostic, Diagnostics, NoopDiagnostics};

/// Rebuild the buffer with open entries first and checked entries last.
///
/// Both partitions keep the order in which entries appear. An empty `- [ ]`
/// placeholder directly below a checked entry is re-nested under it with a
/// two-space indent and sinks with it.
pub fn reposition<B: LineBuffer + ?Sized>(buffer: &B) -> String {
    reposition_with(buffer, &SortConfig::default(), &NoopDiagnostics)
}

pub fn reposition_with<B: LineBuffer + ?Sized>(
    buffer: &B,
    config: &SortConfig,
    diagnostics: &dyn Diagnostics,
) -> String {
    let mut incomplete: Vec<String> = Vec::new();
    let mut complete: Vec<String> = Vec::new();

    for entry in entries(buffer) {
        let kind = entry.kind();
        diagnostics.emit(Diagnostic::Classified {
            start_line: entry.start_line,
            kind,
            lines: entry.line_span(),
        });

        match kind {
            EntryKind::Checked => complete.push(entry.text),
            EntryKind::EmptyUnchecked => {
                let previous = previous_entry(buffer, &entry);
                if previous.kind() == EntryKind::Checked {
                    diagnostics.emit(Diagnostic::PlaceholderNested {
                        start_line: entry.start_line,
                        parent_line: previous.start_line,
                    });
                    complete.push(entry.indented(&config.nest_indent));
                } else {
                    incomplete.push(entry.text);
                }
            }
            EntryKind::Unchecked | EntryKind::NonTask => incomplete.push(entry.text),
        }
    }

    diagnostics.emit(Diagnostic::Partitioned {
        incomplete: incomplete.len(),
        complete: complete.len(),
    });

    incomplete.extend(complete);
    incomplete.join("\n")
}
