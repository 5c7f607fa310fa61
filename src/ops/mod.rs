pub mod apply;
pub mod change;
pub mod reposition;

pub use apply::{Editor, on_content_changed};
pub use change::{last_incomplete_line, needs_change, needs_change_with};
pub use reposition::{reposition, reposition_with};
