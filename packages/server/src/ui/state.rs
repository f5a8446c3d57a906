//! Server state shared by all handlers.

use std::sync::Arc;

use crate::domain::{ChatRepository, MessageFactory};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn ChatRepository>,
    /// Message validation rules (configured maximum text length)
    pub message_factory: MessageFactory,
}

impl AppState {
    pub fn new(repository: Arc<dyn ChatRepository>, message_factory: MessageFactory) -> Self {
        Self {
            repository,
            message_factory,
        }
    }
}
