//! Error types for sqlite_fdw_import

use thiserror::Error;

/// Result type for sqlite_fdw_import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for sqlite_fdw_import
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not handle type {0} from a sqlite db")]
    UnsupportedType(String),

    #[error("Could not handle type {declaration} of column {column} in sqlite table {table}")]
    ColumnTranslation {
        table: String,
        column: String,
        declaration: String,
    },

    #[error("Missing required option: {0}")]
    MissingRequiredOption(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl Error {
    /// The raw declared type behind a classification failure, if any
    pub fn declaration(&self) -> Option<&str> {
        match self {
            Error::UnsupportedType(declaration) => Some(declaration),
            Error::ColumnTranslation { declaration, .. } => Some(declaration),
            _ => None,
        }
    }
}

/// Convert Serde JSON errors to sqlite_fdw_import errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::SerializationError(error.to_string())
    }
}

/// Convert TOML deserialization errors to sqlite_fdw_import errors
impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::ConfigError(format!("Failed to parse config file: {}", error))
    }
}
