//! Application-level errors

use thiserror::Error;

/// Errors of the ambient layers. The tree and the facade never fail; these
/// cover configuration and terminal I/O around them.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
