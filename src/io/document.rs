use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::buffer::TextBuffer;
use crate::model::config::SortConfig;
use crate::ops::change::needs_change_with;
use crate::ops::reposition::reposition_with;
use crate::util::diagnostics::Diagnostics;

/// Error type for reading and writing task documents
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// A task list loaded from disk.
///
/// The final line terminator is stripped before the text reaches the buffer,
/// so it never takes part in sorting, and is restored by [`Document::render`].
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub buffer: TextBuffer,
    trailing_newline: bool,
}

impl Document {
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        let (body, trailing_newline) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };
        Document {
            path: path.into(),
            buffer: TextBuffer::from_text(body),
            trailing_newline,
        }
    }

    /// File content for a replacement body.
    pub fn render(&self, body: &str) -> String {
        if self.trailing_newline {
            format!("{body}\n")
        } else {
            body.to_string()
        }
    }
}

/// What sorting a single document did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    /// The file content after sorting (unchanged content when already sorted)
    pub content: String,
    /// Whether the content differs from what was read
    pub changed: bool,
    /// Line the cursor belongs on after the rewrite
    pub cursor_line: Option<usize>,
}

pub fn read_document(path: &Path) -> Result<Document, DocumentError> {
    let text = fs::read_to_string(path).map_err(|e| DocumentError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Document::from_text(path, &text))
}

/// Write a file through a temporary sibling so readers never see a partial
/// file.
pub fn write_document(path: &Path, content: &str) -> Result<(), DocumentError> {
    atomic_write(path, content.as_bytes()).map_err(|e| DocumentError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Sort a document in memory, without touching the disk.
pub fn sort_text(doc: &Document, config: &SortConfig, diagnostics: &dyn Diagnostics) -> SortOutcome {
    let original = doc.render(&doc.buffer.text());
    let info = needs_change_with(&doc.buffer, diagnostics);
    if !info.change {
        return SortOutcome {
            content: original,
            changed: false,
            cursor_line: None,
        };
    }

    let content = doc.render(&reposition_with(&doc.buffer, config, diagnostics));
    SortOutcome {
        changed: content != original,
        content,
        cursor_line: Some(info.cursor_line()),
    }
}

/// Read, sort, and write back `path` when the precheck asks for it.
pub fn sort_document(
    path: &Path,
    config: &SortConfig,
    diagnostics: &dyn Diagnostics,
) -> Result<SortOutcome, DocumentError> {
    let doc = read_document(path)?;
    let outcome = sort_text(&doc, config, diagnostics);
    if outcome.changed {
        write_document(path, &outcome.content)?;
        tracing::info!(path = %path.display(), "sorted");
    } else {
        tracing::debug!(path = %path.display(), "already sorted");
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::diagnostics::NoopDiagnostics;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn trailing_newline_stays_at_the_end() {
        let doc = Document::from_text("todo.md", "- [x] a\n- [ ] b\n");
        assert_eq!(doc.buffer.text(), "- [x] a\n- [ ] b");
        let outcome = sort_text(&doc, &SortConfig::default(), &NoopDiagnostics);
        assert_eq!(outcome.content, "- [ ] b\n- [x] a\n");
        assert!(outcome.changed);
        assert_eq!(outcome.cursor_line, Some(0));
    }

    #[test]
    fn missing_trailing_newline_is_not_added() {
        let doc = Document::from_text("todo.md", "- [x] a\n- [ ] b");
        let outcome = sort_text(&doc, &SortConfig::default(), &NoopDiagnostics);
        assert_eq!(outcome.content, "- [ ] b\n- [x] a");
    }

    #[test]
    fn sorted_text_is_untouched() {
        let doc = Document::from_text("todo.md", "# Today\n\n- [ ] a\n- [x] b\n\n");
        let outcome = sort_text(&doc, &SortConfig::default(), &NoopDiagnostics);
        assert!(!outcome.changed);
        assert_eq!(outcome.content, "# Today\n\n- [ ] a\n- [x] b\n\n");
        assert_eq!(outcome.cursor_line, None);
    }

    #[test]
    fn sort_document_rewrites_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("todo.md");
        fs::write(&path, "- [x] a\n  - [ ] a.1\n- [ ] b\n").unwrap();

        let outcome = sort_document(&path, &SortConfig::default(), &NoopDiagnostics).unwrap();
        assert!(outcome.changed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "- [ ] b\n- [x] a\n  - [ ] a.1\n"
        );

        let again = sort_document(&path, &SortConfig::default(), &NoopDiagnostics).unwrap();
        assert!(!again.changed);
    }

    #[test]
    fn read_error_names_the_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.md");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, DocumentError::ReadError { .. }));
        assert!(err.to_string().contains("missing.md"));
    }
}
