//! Error types for the recipebox library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all recipebox operations.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Removal or edit addressed a position outside `[0, len)`
    #[error("Position {position} is out of range for {list} (length {len})")]
    IndexOutOfRange {
        list: &'static str,
        position: i64,
        len: usize,
    },
    /// Negative or non-finite quantity handed to the formatter
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },
    /// Persistence collaborator rejected a submission; the message is shown
    /// to the user verbatim
    #[error("{message}")]
    SubmissionFailed { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Recipe not found for the given identifier
    #[error("Recipe with ID {id} not found")]
    RecipeNotFound { id: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> RecipeError {
        RecipeError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RecipeError {
        RecipeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RecipeError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a background task join failure.
    pub(crate) fn join(e: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {e}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RecipeError::database(message).with_source(e))
    }
}

/// Result type alias for recipebox operations
pub type Result<T> = std::result::Result<T, RecipeError>;
