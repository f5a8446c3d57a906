//! Handler modules for HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{
    create_chat, get_last_message, get_messages, get_participants, health_check, send_message,
};
