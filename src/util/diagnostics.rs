//! Injected debug output for the sorting passes.
//!
//! The core never logs on its own. Callers pass a [`Diagnostics`]
//! implementation: [`NoopDiagnostics`] by default, [`TracingDiagnostics`] from
//! the CLI, and [`RecordingDiagnostics`] in tests that want to assert on what
//! a pass reported.

use std::cell::RefCell;

use crate::model::entry::EntryKind;

/// One event emitted by a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An entry was classified while walking the buffer
    Classified {
        start_line: usize,
        kind: EntryKind,
        lines: usize,
    },
    /// An empty placeholder was moved under the checked entry above it
    PlaceholderNested { start_line: usize, parent_line: usize },
    /// The precheck found an open task below a checked one
    ChangeNeeded { first_line_changed: usize },
    /// The precheck found the buffer already in order
    NoChangeNeeded,
    /// The repositioner finished building its partitions
    Partitioned { incomplete: usize, complete: usize },
}

pub trait Diagnostics {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::Classified {
                start_line,
                kind,
                lines,
            } => tracing::trace!(start_line, ?kind, lines, "entry classified"),
            Diagnostic::PlaceholderNested {
                start_line,
                parent_line,
            } => tracing::debug!(start_line, parent_line, "placeholder nested under checked entry"),
            Diagnostic::ChangeNeeded { first_line_changed } => {
                tracing::debug!(first_line_changed, "need to change")
            }
            Diagnostic::NoChangeNeeded => tracing::debug!("no need to change"),
            Diagnostic::Partitioned {
                incomplete,
                complete,
            } => tracing::debug!(incomplete, complete, "partitions built"),
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: RefCell<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        self.events.take()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, diagnostic: Diagnostic) {
        self.events.borrow_mut().push(diagnostic);
    }
}
