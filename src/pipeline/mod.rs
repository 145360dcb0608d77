//! Pipeline entry points for cleaner operations.
//!
//! - `BatchCursor`: paginated iteration over the post store
//! - `run_cleaner`: full removal run over all published posts

pub mod clean;
pub mod cursor;

pub use clean::{CleanStats, run_cleaner};
pub use cursor::BatchCursor;
