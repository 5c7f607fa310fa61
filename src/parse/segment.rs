use crate::model::buffer::LineBuffer;
use crate::model::entry::Entry;
use crate::parse::marker::is_nested;

/// Segment the entry containing `index`.
///
/// `None` stands for "no previous entry" and yields [`Entry::empty`]. Any
/// index inside a nested block resolves to the whole parent entry. An index
/// at or past the end of the buffer yields an empty entry positioned at
/// `line_count()`.
pub fn segment<B: LineBuffer + ?Sized>(buffer: &B, index: Option<usize>) -> Entry {
    match index {
        Some(index) => entry_at(buffer, index),
        None => Entry::empty(),
    }
}

/// Segment the entry containing line `index`.
pub fn entry_at<B: LineBuffer + ?Sized>(buffer: &B, index: usize) -> Entry {
    let count = buffer.line_count();
    if index >= count {
        return Entry {
            text: String::new(),
            start_line: count,
            next_line: count,
            previous_line: (count > 0).then(|| previous_boundary(buffer, count)),
        };
    }

    let root = owning_root(buffer, index);

    let mut text = buffer.line(root).unwrap_or_default().to_string();
    let mut next = root + 1;
    while let Some(line) = buffer.line(next) {
        if !is_nested(line) {
            break;
        }
        text.push('\n');
        text.push_str(line);
        next += 1;
    }

    Entry {
        text,
        start_line: root,
        next_line: next,
        previous_line: (root > 0).then(|| previous_boundary(buffer, root)),
    }
}

/// The entry that precedes `entry`, or [`Entry::empty`] at the top.
pub fn previous_entry<B: LineBuffer + ?Sized>(buffer: &B, entry: &Entry) -> Entry {
    segment(buffer, entry.previous_line)
}

/// Walk back from a nested line to the line that owns it. A nested block at
/// the very top has no owner, so line 0 stands in as its root.
fn owning_root<B: LineBuffer + ?Sized>(buffer: &B, index: usize) -> usize {
    let mut root = index;
    while root > 0 && buffer.line(root).is_some_and(is_nested) {
        root -= 1;
    }
    root
}

/// Start boundary of the entry ending just before `root`. Stops at line 0
/// whatever it contains. Requires `root > 0`.
fn previous_boundary<B: LineBuffer + ?Sized>(buffer: &B, root: usize) -> usize {
    let mut i = root - 1;
    while i > 0 && buffer.line(i).is_some_and(is_nested) {
        i -= 1;
    }
    i
}

/// Iterator over consecutive entries from the top of a buffer.
pub struct Entries<'a, B: LineBuffer + ?Sized> {
    buffer: &'a B,
    next: usize,
}

impl<B: LineBuffer + ?Sized> Iterator for Entries<'_, B> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if self.next >= self.buffer.line_count() {
            return None;
        }
        let entry = entry_at(self.buffer, self.next);
        self.next = entry.next_line.max(self.next + 1);
        Some(entry)
    }
}

/// Walk `buffer` entry by entry.
pub fn entries<B: LineBuffer + ?Sized>(buffer: &B) -> Entries<'_, B> {
    Entries { buffer, next: 0 }
}
