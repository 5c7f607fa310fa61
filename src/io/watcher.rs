use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the sort loop.
#[derive(Debug)]
pub enum FileEvent {
    /// One or more watched documents changed on disk.
    Changed(Vec<PathBuf>),
}

/// Watches a fixed set of task documents.
///
/// The parent directories are watched rather than the files themselves,
/// since atomic writes replace the file and would drop a per-file watch.
pub struct DocumentWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl DocumentWatcher {
    /// Start watching `files`. Paths should be canonical so they compare equal
    /// to the paths notify reports.
    pub fn start(files: &[PathBuf]) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let targets: HashSet<PathBuf> = files.iter().cloned().collect();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) => {}
                    _ => return,
                }

                let relevant: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| targets.contains(p))
                    .collect();

                if !relevant.is_empty() {
                    let _ = tx.send(FileEvent::Changed(relevant));
                }
            },
            Config::default(),
        )?;

        let dirs: HashSet<&Path> = files.iter().filter_map(|f| f.parent()).collect();
        for dir in dirs {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
        }

        Ok(DocumentWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }

    /// Block until the next event, or until `timeout` passes.
    pub fn wait(&self, timeout: Duration) -> Option<FileEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Paths touched by a batch of events, deduplicated, in first-seen order.
    pub fn changed_paths(events: Vec<FileEvent>) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut paths = Vec::new();
        for FileEvent::Changed(batch) in events {
            for path in batch {
                if seen.insert(path.clone()) {
                    paths.push(path);
                }
            }
        }
        paths
    }
}
