pub mod marker;
pub mod segment;

pub use segment::{Entries, entries, entry_at, previous_entry, segment};
