use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sink", about = concat!("[x] sink v", env!("CARGO_PKG_VERSION"), " - done tasks go to the bottom"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use this config file instead of looking for sink.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Move checked tasks below open ones, rewriting files in place
    Sort(SortArgs),
    /// Report which files have open tasks below checked ones
    Check(CheckArgs),
    /// Sort files now and again every time they change
    Watch(WatchArgs),
}

#[derive(Args)]
pub struct SortArgs {
    /// Markdown files to sort
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Print the sorted text instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Markdown files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args)]
pub struct WatchArgs {
    /// Markdown files to watch
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
