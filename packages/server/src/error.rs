//! Server startup and runtime errors.

use thiserror::Error;

/// Errors that stop the server process
#[derive(Debug, Error)]
pub enum ServerError {
    /// Opening the database or applying migrations failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Binding or serving the listener failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
