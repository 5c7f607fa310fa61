use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::document::{self, sort_text};
use crate::io::logging;
use crate::io::watcher::DocumentWatcher;
use crate::model::config::SinkConfig;
use crate::ops::{last_incomplete_line, needs_change_with};
use crate::util::diagnostics::TracingDiagnostics;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a command. `Ok(false)` means the command worked but found files that
/// still need sorting.
pub fn dispatch(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    logging::init_logging(&config.log.filter, cli.verbose);
    tracing::debug!(?config, "config loaded");

    let json = cli.json;
    match cli.command {
        Commands::Sort(args) => cmd_sort(args, &config, json),
        Commands::Check(args) => cmd_check(args, json),
        Commands::Watch(args) => cmd_watch(args, &config, json),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_sort(
    args: SortArgs,
    config: &SinkConfig,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut results = Vec::new();

    for path in &args.files {
        if args.stdout {
            let doc = document::read_document(path)?;
            let outcome = sort_text(&doc, &config.sort, &TracingDiagnostics);
            print!("{}", outcome.content);
            continue;
        }

        let outcome = document::sort_document(path, &config.sort, &TracingDiagnostics)?;
        if json {
            results.push(sort_to_json(path, &outcome));
        } else {
            println!("{}", format_sort(path, &outcome));
        }
    }

    if json && !args.stdout {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(true)
}

fn cmd_check(args: CheckArgs, json: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let mut results = Vec::new();
    let mut clean = true;

    for path in &args.files {
        let doc = document::read_document(path)?;
        let info = needs_change_with(&doc.buffer, &TracingDiagnostics);
        clean &= !info.change;

        if json {
            results.push(check_to_json(path, &info, last_incomplete_line(&doc.buffer)));
        } else {
            println!("{}", format_check(path, &info));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(clean)
}

fn cmd_watch(
    args: WatchArgs,
    config: &SinkConfig,
    json: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let files = args
        .files
        .iter()
        .map(|f| {
            std::fs::canonicalize(f).map_err(|e| format!("cannot resolve '{}': {}", f.display(), e))
        })
        .collect::<Result<Vec<PathBuf>, String>>()?;

    for path in &files {
        sort_and_report(path, config, json)?;
    }

    let watcher = DocumentWatcher::start(&files)?;
    tracing::info!(files = files.len(), "watching");

    loop {
        let Some(first) = watcher.wait(Duration::from_millis(500)) else {
            continue;
        };
        let mut events = vec![first];
        events.extend(watcher.poll());

        for path in DocumentWatcher::changed_paths(events) {
            // The file can be mid-save or gone; the next event retries.
            if let Err(e) = sort_and_report(&path, config, json) {
                tracing::warn!(path = %path.display(), error = %e, "sort failed");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sort one file and report it only when it was rewritten. Our own writes
/// come back as change events and end here as no-ops.
fn sort_and_report(
    path: &Path,
    config: &SinkConfig,
    json: bool,
) -> Result<(), document::DocumentError> {
    let outcome = document::sort_document(path, &config.sort, &TracingDiagnostics)?;
    if outcome.changed {
        if json {
            if let Ok(line) = serde_json::to_string(&sort_to_json(path, &outcome)) {
                println!("{}", line);
            }
        } else {
            println!("{}", format_sort(path, &outcome));
        }
    }
    Ok(())
}
