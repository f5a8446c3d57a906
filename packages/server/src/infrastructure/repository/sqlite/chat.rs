//! SQLite Chat Repository 実装
//!
//! ドメイン層が定義する ChatRepository trait を sqlx で実装します。
//! 書き込みは writer プール、読み込みは reader プールを使用します。
//!
//! ```text
//! DB Row → MessageRow → Message (ドメインモデル)
//! ```

use async_trait::async_trait;
use sqlx::Row;

use super::pool::DatabasePool;
use crate::domain::{ChatId, ChatRepository, Message, MessageId, RepositoryError, Timestamp};

/// SQLite を使用する Chat Repository 実装
#[derive(Debug, Clone)]
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// 新しい SqliteChatRepository を作成
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// message テーブルの 1 行
struct MessageRow {
    id: i64,
    chat_id: i64,
    sender_id: i64,
    text: String,
    timestamp: i64,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            sender_id: row.try_get("sender_id")?,
            text: row.try_get("text")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Message {
        Message::restore(
            MessageId::new(self.id),
            ChatId::new(self.chat_id),
            self.sender_id,
            self.text,
            Timestamp::new(self.timestamp),
        )
    }
}

/// sqlx のエラーを RepositoryError に変換
fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            RepositoryError::Connection(e.to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

#[async_trait]
impl ChatRepository for SqliteChatRepository {
    async fn create_chat(&self) -> Result<ChatId, RepositoryError> {
        let result = sqlx::query("INSERT INTO chat DEFAULT VALUES")
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;
        Ok(ChatId::new(result.last_insert_rowid()))
    }

    async fn chat_exists(&self, chat_id: ChatId) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT EXISTS (SELECT 1 FROM chat WHERE id = ?)")
            .bind(chat_id.value())
            .fetch_one(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;
        Ok(found != 0)
    }

    async fn store(&self, message: Message) -> Result<MessageId, RepositoryError> {
        let chat_id = message.chat_id();
        let result = sqlx::query(
            "INSERT INTO message (chat_id, sender_id, text, timestamp) VALUES (?, ?, ?, ?)",
        )
        .bind(chat_id.value())
        .bind(message.sender_id().value())
        .bind(message.text().as_str())
        .bind(message.timestamp().value())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::ChatNotFound(chat_id)
            }
            other => map_sqlx_error(other),
        })?;
        Ok(MessageId::new(result.last_insert_rowid()))
    }

    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, chat_id, sender_id, text, timestamp FROM message WHERE chat_id = ? ORDER BY id ASC",
        )
        .bind(chat_id.value())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(map_sqlx_error)?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let message_row = MessageRow::from_row(row).map_err(map_sqlx_error)?;
            messages.push(message_row.into_message());
        }
        Ok(messages)
    }
}
