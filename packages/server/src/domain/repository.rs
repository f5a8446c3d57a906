//! Repository trait (persistence port) for chats and their messages.
//!
//! The domain layer owns this contract; implementations live in
//! `infrastructure::repository` (dependency inversion).

use async_trait::async_trait;

use super::{ChatId, Message, MessageId, error::RepositoryError};

/// Storage contract the `Chat` aggregate depends on.
///
/// Implementations own all shared mutable state (tables, pools, locks).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Allocate a fresh, unique chat.
    async fn create_chat(&self) -> Result<ChatId, RepositoryError>;

    /// Pure existence check; never creates anything.
    async fn chat_exists(&self, chat_id: ChatId) -> Result<bool, RepositoryError>;

    /// Persist a validated message under its chat and return the id assigned to it.
    ///
    /// # Errors
    ///
    /// - `ChatNotFound` if the message's chat does not exist
    async fn store(&self, message: Message) -> Result<MessageId, RepositoryError>;

    /// All messages of a chat, in the order they were stored.
    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError>;
}
