//! Message-board chat server library.
//!
//! Clients create chats, post messages into a chat, and read back message
//! history and the set of participants.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
