pub mod config_io;
pub mod document;
pub mod logging;
pub mod watcher;
