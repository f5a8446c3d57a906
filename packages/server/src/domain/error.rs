//! Domain layer error definitions.

use thiserror::Error;

use super::value_object::ChatId;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// SenderId must be a positive integer
    #[error("SenderId must be a positive integer (got {0})")]
    InvalidSender(i64),

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    EmptyText,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} bytes (got {actual})")]
    TextTooLong { max: usize, actual: usize },
}

/// Errors returned by a `ChatRepository` implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached
    #[error("storage connection error: {0}")]
    Connection(String),

    /// A query against the backing store failed
    #[error("storage query error: {0}")]
    Query(String),

    /// The chat a message was stored into does not exist (anymore)
    #[error("chat {0} does not exist in storage")]
    ChatNotFound(ChatId),
}

/// Errors related to Chat aggregate operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Caller input was rejected before any storage access
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// The requested chat has never been created
    #[error("chat {0} does not exist")]
    NotFound(ChatId),

    /// There is no message to return
    #[error("chat {0} has no messages")]
    EmptyChat(ChatId),

    /// Failure reported by the persistence layer, passed through unchanged
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
