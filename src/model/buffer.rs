/// Read access to a line-addressable text buffer.
///
/// Indices are 0-based. Reads outside `0..line_count()` return `None`.
pub trait LineBuffer {
    fn line(&self, index: usize) -> Option<&str>;
    fn line_count(&self) -> usize;
}

impl<S: AsRef<str>> LineBuffer for [S] {
    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

impl<S: AsRef<str>> LineBuffer for Vec<S> {
    fn line(&self, index: usize) -> Option<&str> {
        self.as_slice().line(index)
    }

    fn line_count(&self) -> usize {
        self.len()
    }
}

/// Cursor position inside a buffer. `ch` counts characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub ch: usize,
}

/// An in-memory editor buffer.
///
/// Text is split on `\n` exactly, so an empty text is a single empty line and
/// a trailing newline produces a trailing empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        TextBuffer {
            lines: text.split('\n').map(str::to_string).collect(),
            cursor: Cursor::default(),
        }
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Replace the whole content. The cursor is clamped to the new text.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.cursor = self.clamp(self.cursor);
    }

    /// Move the cursor, clamping it to an existing position.
    pub fn move_cursor(&mut self, cursor: Cursor) {
        self.cursor = self.clamp(cursor);
    }

    fn clamp(&self, cursor: Cursor) -> Cursor {
        let line = cursor.line.min(self.lines.len().saturating_sub(1));
        let width = self.lines.get(line).map_or(0, |l| l.chars().count());
        Cursor {
            line,
            ch: cursor.ch.min(width),
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        TextBuffer::from_text("")
    }
}

impl LineBuffer for TextBuffer {
    fn line(&self, index: usize) -> Option<&str> {
        self.lines.line(index)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_lines() {
        let buf = TextBuffer::from_text("- [ ] a\n\n- [x] b\n");
        assert_eq!(buf.line_count(), 4);
        assert_eq!(buf.line(1), Some(""));
        assert_eq!(buf.line(3), Some(""));
        assert_eq!(buf.line(4), None);
        assert_eq!(buf.text(), "- [ ] a\n\n- [x] b\n");
    }

    #[test]
    fn empty_text_is_one_line() {
        let buf = TextBuffer::default();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(0), Some(""));
    }

    #[test]
    fn slices_are_line_buffers() {
        let lines = ["- [ ] a", "  - [x] b"];
        assert_eq!(lines[..].line_count(), 2);
        assert_eq!(lines[..].line(1), Some("  - [x] b"));

        let owned = vec!["x".to_string()];
        assert_eq!(owned.line(0), Some("x"));
        assert_eq!(owned.line(1), None);
    }

    #[test]
    fn cursor_is_clamped_to_text() {
        let mut buf = TextBuffer::from_text("- [ ] é\nab");
        buf.move_cursor(Cursor { line: 0, ch: 99 });
        assert_eq!(buf.cursor(), Cursor { line: 0, ch: 7 });

        buf.move_cursor(Cursor { line: 9, ch: 1 });
        assert_eq!(buf.cursor(), Cursor { line: 1, ch: 1 });

        buf.set_text("x");
        assert_eq!(buf.cursor(), Cursor { line: 0, ch: 1 });
    }
}
