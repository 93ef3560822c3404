//! Error types for trigtab-db.

use thiserror::Error;

/// Database adapter error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Credentials or connection parameters are missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filter parsing or table construction failed.
    #[error(transparent)]
    Core(#[from] trigtab_core::Error),

    /// The queried table does not exist; the message lists the tables that do.
    #[error(
        "Table {table:?} does not exist, the following table names are acceptable:\n    {}",
        .available.join("\n    ")
    )]
    UnknownTable {
        /// The table name that was queried.
        table: String,
        /// Table names present in the database.
        available: Vec<String>,
    },

    /// A column uses a type the adapter cannot convert.
    #[error("Unsupported type {type_name:?} for column {column:?}")]
    UnsupportedType {
        /// Column whose value could not be converted.
        column: String,
        /// PostgreSQL type name reported by the driver.
        type_name: String,
    },

    /// Error propagated from the database driver.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for database operations.
pub type Result<T> = std::result::Result<T, Error>;
