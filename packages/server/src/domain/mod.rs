//! Domain layer for the chat application.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod chat;
pub mod entity;
pub mod error;
pub mod factory;
pub mod participant;
pub mod repository;
pub mod value_object;

pub use chat::Chat;
pub use entity::Message;
pub use error::{ChatError, RepositoryError, ValueObjectError};
pub use factory::MessageFactory;
pub use participant::derive_participants;
pub use repository::ChatRepository;
#[cfg(test)]
pub use repository::MockChatRepository;
pub use value_object::{ChatId, MessageId, MessageText, SenderId, Timestamp};
