//! Message-board chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin realchat-server -- --database-url sqlite://realchat.db
//! ```

use clap::Parser;
use realchat_server::ServerConfig;
use realchat_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = realchat_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
