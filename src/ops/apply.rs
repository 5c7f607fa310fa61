use crate::model::buffer::{Cursor, LineBuffer, TextBuffer};
use crate::model::config::SortConfig;
use crate::ops::change::needs_change_with;
use crate::ops::reposition::reposition_with;
use crate::util::diagnostics::Diagnostics;

/// A host buffer that can be rewritten in place.
pub trait Editor: LineBuffer {
    fn set_value(&mut self, text: &str);
    fn set_cursor(&mut self, cursor: Cursor);
}

impl Editor for TextBuffer {
    fn set_value(&mut self, text: &str) {
        self.set_text(text);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.move_cursor(cursor);
    }
}

/// Handle a content-changed notification from the host.
///
/// Runs the precheck and, only when it reports an open task below a checked
/// one, replaces the whole text and puts the cursor at the end of the first
/// changed line. Returns the cursor that was set. Calling this again on the
/// rewritten buffer is a no-op, so hosts that re-raise the notification after
/// `set_value` do not loop.
pub fn on_content_changed<E: Editor + ?Sized>(
    editor: &mut E,
    config: &SortConfig,
    diagnostics: &dyn Diagnostics,
) -> Option<Cursor> {
    let info = needs_change_with(&*editor, diagnostics);
    if !info.change {
        return None;
    }

    let text = reposition_with(&*editor, config, diagnostics);
    editor.set_value(&text);

    let line = info.cursor_line();
    let ch = editor.line(line).map_or(0, |l| l.chars().count());
    let cursor = Cursor { line, ch };
    editor.set_cursor(cursor);
    Some(cursor)
}
