//! Error types for the dialect adapters.

use thiserror::Error;

use crate::capabilities::AccessMode;

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by an external collaborator (query execution, row iteration).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for dialect adapter operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or malformed.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The adapter cannot build a connection for this access mode.
    #[error("Unsupported access mode [{mode}] for {dialect}")]
    UnsupportedAccessMode {
        dialect: &'static str,
        mode: AccessMode,
    },

    /// Querying the data dictionary failed.
    #[error("Unable to determine if indexes exist on table [{table}]")]
    Introspection {
        table: String,
        #[source]
        source: BoxError,
    },

    /// No adapter is registered under this identifier.
    #[error("Unknown dialect: {name}")]
    UnknownDialect { name: String },

    /// Invalid connect string.
    #[error("Invalid connect string: {message}")]
    InvalidConnectString { message: String },

    /// Reading a variables file failed.
    #[error("Unable to load variables: {0}")]
    Variables(#[from] dotenvy::Error),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Error for a native URL requested without a database name.
    pub fn missing_database_name() -> Self {
        Self::invalid_input("database name must not be empty")
    }

    /// Wrap a collaborator failure raised while probing `table`.
    pub fn introspection(table: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Introspection {
            table: table.into(),
            source: source.into(),
        }
    }

    /// Whether this is an [`Error::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
