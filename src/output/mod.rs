// Output module - rendering fetched records (terminal or file)

pub mod text;

pub use text::{open_sink, render_records};

use crate::error::SearchError;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, SearchError>;
