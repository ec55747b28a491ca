use super::types::IndexPath;
use thiserror::Error;

/// Errors reported for caller mistakes. Fetch failures are not errors; they
/// surface as empty pages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadMoreError {
    /// The row does not exist in its section.
    #[error("row {path} is beyond bounds ({rows} rows in section {})", .path.section)]
    RowOutOfBounds {
        /// Requested position.
        path: IndexPath,
        /// Rows currently in the section.
        rows: usize,
    },

    /// The list has only the content and footer sections.
    #[error("section {0} does not exist")]
    UnknownSection(usize),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
