//! Test fixtures: an in-process server bound to an ephemeral port.

use std::{net::SocketAddr, sync::Arc};

use realchat_server::{
    domain::{ChatRepository, MessageFactory},
    infrastructure::repository::{DatabasePool, InMemoryChatRepository, SqliteChatRepository},
    ui::{build_router, state::AppState},
};
use tokio::task::JoinHandle;

pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
    // Keeps the SQLite file alive for the lifetime of the server
    _dir: Option<tempfile::TempDir>,
}

impl TestServer {
    /// Start a server backed by an in-memory repository.
    pub async fn start() -> Self {
        Self::start_with(Arc::new(InMemoryChatRepository::new()), MessageFactory::default(), None)
            .await
    }

    /// Start a server whose first created chat gets `first_chat_id`.
    pub async fn start_with_first_chat_id(first_chat_id: i64) -> Self {
        Self::start_with(
            Arc::new(InMemoryChatRepository::with_first_chat_id(first_chat_id)),
            MessageFactory::default(),
            None,
        )
        .await
    }

    /// Start a server with a custom maximum message size.
    pub async fn start_with_max_message_length(max_message_length: usize) -> Self {
        Self::start_with(
            Arc::new(InMemoryChatRepository::new()),
            MessageFactory::new(max_message_length),
            None,
        )
        .await
    }

    /// Start a server backed by a SQLite database in a temporary directory.
    pub async fn start_with_sqlite() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("realchat.db").display());
        let pool = DatabasePool::connect(&url)
            .await
            .expect("Failed to open database");
        Self::start_with(
            Arc::new(SqliteChatRepository::new(pool)),
            MessageFactory::default(),
            Some(dir),
        )
        .await
    }

    async fn start_with(
        repository: Arc<dyn ChatRepository>,
        factory: MessageFactory,
        dir: Option<tempfile::TempDir>,
    ) -> Self {
        let app = build_router(AppState::new(repository, factory));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            addr,
            handle,
            _dir: dir,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
