//! Domain factories for creating domain entities.

use super::{
    ChatId, Message, MessageText, SenderId, Timestamp,
    error::ValueObjectError,
    value_object::DEFAULT_MAX_TEXT_LENGTH,
};

/// Factory for creating new `Message` instances.
///
/// Holds the configured text size limit so callers only pass raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFactory {
    max_text_length: usize,
}

impl MessageFactory {
    pub fn new(max_text_length: usize) -> Self {
        Self { max_text_length }
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Validate raw input and build a message stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `InvalidSender` if `sender_id <= 0`
    /// - `EmptyText` / `TextTooLong` if the text is empty or oversized
    ///
    /// The sender is checked before the text.
    pub fn create(
        &self,
        chat_id: ChatId,
        sender_id: i64,
        text: String,
    ) -> Result<Message, ValueObjectError> {
        self.create_at(chat_id, sender_id, text, Timestamp::now())
    }

    /// Same as `create`, with an explicit timestamp.
    pub fn create_at(
        &self,
        chat_id: ChatId,
        sender_id: i64,
        text: String,
        timestamp: Timestamp,
    ) -> Result<Message, ValueObjectError> {
        let sender_id = SenderId::new(sender_id)?;
        let text = MessageText::new(text, self.max_text_length)?;
        Ok(Message::new(chat_id, sender_id, text, timestamp))
    }
}

impl Default for MessageFactory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_LENGTH)
    }
}
