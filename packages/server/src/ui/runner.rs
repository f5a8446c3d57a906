//! Server bootstrap: storage selection, routing, and serving.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    domain::{ChatRepository, MessageFactory},
    error::ServerError,
    infrastructure::repository::{DatabasePool, InMemoryChatRepository, SqliteChatRepository},
};

use super::{handler, signal::shutdown_signal, state::AppState};

/// Build the HTTP router for the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/chats", post(handler::create_chat))
        .route(
            "/api/chats/{chat_id}/messages",
            get(handler::get_messages).post(handler::send_message),
        )
        .route(
            "/api/chats/{chat_id}/messages/last",
            get(handler::get_last_message),
        )
        .route(
            "/api/chats/{chat_id}/participants",
            get(handler::get_participants),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chat server until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let (repository, pool): (Arc<dyn ChatRepository>, Option<DatabasePool>) =
        match &config.database_url {
            Some(url) => {
                let pool = DatabasePool::connect(url).await?;
                (Arc::new(SqliteChatRepository::new(pool.clone())), Some(pool))
            }
            None => {
                tracing::warn!("No database URL configured, chats are kept in memory only");
                (Arc::new(InMemoryChatRepository::new()), None)
            }
        };

    let state = AppState::new(
        repository,
        MessageFactory::new(config.max_message_length),
    );
    let app = build_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("Server stopped");
    Ok(())
}
