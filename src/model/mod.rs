pub mod buffer;
pub mod config;
pub mod entry;

pub use buffer::*;
pub use config::*;
pub use entry::*;
