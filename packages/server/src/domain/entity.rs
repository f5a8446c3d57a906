//! Core domain models for the chat application.

use super::value_object::{ChatId, MessageId, MessageText, SenderId, Timestamp};

/// Represents a chat message in the domain model.
///
/// Fields are private: a `Message` can only come out of `MessageFactory`
/// (validated) or `Message::restore` (a row read back from storage), and a
/// retrieved copy is a detached value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Assigned by the persistence layer; `None` until stored
    id: Option<MessageId>,
    /// Chat the message belongs to
    chat_id: ChatId,
    /// Author of the message
    sender_id: SenderId,
    /// Message body
    text: MessageText,
    /// Timestamp when the message was sent
    timestamp: Timestamp,
}

impl Message {
    /// Create a new, not yet persisted message from validated parts
    pub fn new(
        chat_id: ChatId,
        sender_id: SenderId,
        text: MessageText,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: None,
            chat_id,
            sender_id,
            text,
            timestamp,
        }
    }

    /// Rehydrate a message from a storage row.
    ///
    /// Performs no validation: rows are trusted to have been validated
    /// before they were written.
    pub fn restore(
        id: MessageId,
        chat_id: ChatId,
        sender_id: i64,
        text: String,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: Some(id),
            chat_id,
            sender_id: SenderId::from_trusted(sender_id),
            text: MessageText::from_trusted(text),
            timestamp,
        }
    }

    pub fn id(&self) -> Option<MessageId> {
        self.id
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn sender_id(&self) -> SenderId {
        self.sender_id
    }

    pub fn text(&self) -> &MessageText {
        &self.text
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Whether this message was sent strictly before `other`
    pub fn is_earlier_than(&self, other: &Message) -> bool {
        self.timestamp < other.timestamp
    }

    /// Copy of this message carrying the id the store assigned to it
    pub fn with_id(self, id: MessageId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
