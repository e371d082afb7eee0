//! Error types for trophy-cache

use thiserror::Error;

/// Result type alias for trophy operations
pub type Result<T> = std::result::Result<T, TrophyError>;

/// Error types for trophy operations
#[derive(Error, Debug)]
pub enum TrophyError {
    /// The factory has no constructor for this identifier
    #[error("Unknown entity type '{0}'")]
    UnknownEntityType(String),

    /// The factory recognised the type but could not load the description
    #[error("Unable to load entity '{entity_type}': {reason}")]
    EntityLoad { entity_type: String, reason: String },

    /// A description could not be converted into a tag tree
    #[error("Malformed tag: {0}")]
    MalformedTag(String),

    /// A nested passenger description is not usable
    #[error("Malformed sub-object: {0}")]
    MalformedSubObject(String),

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input or output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}
