//! HTTP API request/response DTOs for the chat application.

use serde::{Deserialize, Serialize};

use crate::domain::{ChatId, Message, SenderId};

/// Message as returned by the message endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: i64,
    pub text: String,
    pub timestamp: String, // RFC 3339
    pub chat_id: i64,
    pub sender_id: i64,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().map_or(0, |id| id.value()),
            text: message.text().as_str().to_string(),
            timestamp: realchat_shared::time::timestamp_to_rfc3339(message.timestamp().value()),
            chat_id: message.chat_id().value(),
            sender_id: message.sender_id().value(),
        }
    }
}

/// Request body for sending a message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub sender_id: i64,
    pub text: String,
}

/// Response for chat creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCreatedDto {
    pub id: i64,
}

/// Response for a stored message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSentDto {
    pub id: i64,
    pub chat_id: i64,
}

/// Participants of a chat, in order of first appearance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantsDto {
    pub chat_id: i64,
    pub participants: Vec<i64>,
}

impl ParticipantsDto {
    pub fn new(chat_id: ChatId, participants: &[SenderId]) -> Self {
        Self {
            chat_id: chat_id.value(),
            participants: participants.iter().map(SenderId::value).collect(),
        }
    }
}
