//! Error types for trigtab-plot.

use thiserror::Error;

/// Plotting error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Column lookup or numeric conversion failed.
    #[error(transparent)]
    Core(#[from] trigtab_core::Error),

    /// The table holds no rows to plot.
    #[error("Cannot plot an empty table")]
    EmptyTable,

    /// The drawing backend reported a failure.
    #[error("Render error: {0}")]
    Render(String),

    /// Output path has an extension no backend handles.
    #[error("Unsupported output format: {0:?}")]
    UnsupportedFormat(String),
}

/// Result type alias for plotting operations.
pub type Result<T> = std::result::Result<T, Error>;
