//! Server configuration from command-line flags and environment variables.

use clap::Parser;

use crate::domain::value_object::DEFAULT_MAX_TEXT_LENGTH;

/// Realchat server configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "realchat-server", version, about = "Message-board chat server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "REALCHAT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "REALCHAT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database URL (e.g. `sqlite://realchat.db`). Chats are kept in memory when unset.
    #[arg(long, env = "REALCHAT_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum message text size in bytes
    #[arg(long, env = "REALCHAT_MAX_MESSAGE_LENGTH", default_value_t = DEFAULT_MAX_TEXT_LENGTH)]
    pub max_message_length: usize,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "REALCHAT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` string to bind the listener to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
