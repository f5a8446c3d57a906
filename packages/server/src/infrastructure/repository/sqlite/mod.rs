//! SQLite 実装（sqlx）

mod chat;
mod pool;

pub use chat::SqliteChatRepository;
pub use pool::DatabasePool;
