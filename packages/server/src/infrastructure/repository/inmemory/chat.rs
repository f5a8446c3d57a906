//! InMemory Chat Repository 実装
//!
//! ドメイン層が定義する ChatRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//! テストや、データベース URL を指定せずに起動した場合に使用されます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatId, ChatRepository, Message, MessageId, RepositoryError};

/// インメモリの保存領域
#[derive(Debug)]
struct ChatStore {
    /// 次に採番する chat ID
    next_chat_id: i64,
    /// 次に採番する message ID（全 chat で共通）
    next_message_id: i64,
    /// chat ID ごとのメッセージ履歴（保存順）
    chats: HashMap<ChatId, Vec<Message>>,
}

/// インメモリ Chat Repository 実装
///
/// ドメイン層の ChatRepository trait を実装します（依存性の逆転）。
#[derive(Debug)]
pub struct InMemoryChatRepository {
    store: Mutex<ChatStore>,
}

impl InMemoryChatRepository {
    /// 新しい InMemoryChatRepository を作成（chat ID は 1 から採番）
    pub fn new() -> Self {
        Self::with_first_chat_id(1)
    }

    /// 最初に採番する chat ID を指定して作成
    pub fn with_first_chat_id(first_chat_id: i64) -> Self {
        Self {
            store: Mutex::new(ChatStore {
                next_chat_id: first_chat_id,
                next_message_id: 1,
                chats: HashMap::new(),
            }),
        }
    }
}

impl Default for InMemoryChatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatRepository for InMemoryChatRepository {
    async fn create_chat(&self) -> Result<ChatId, RepositoryError> {
        let mut store = self.store.lock().await;
        let chat_id = ChatId::new(store.next_chat_id);
        store.next_chat_id += 1;
        store.chats.insert(chat_id, Vec::new());
        Ok(chat_id)
    }

    async fn chat_exists(&self, chat_id: ChatId) -> Result<bool, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.chats.contains_key(&chat_id))
    }

    async fn store(&self, message: Message) -> Result<MessageId, RepositoryError> {
        let mut guard = self.store.lock().await;
        let store = &mut *guard;
        let chat_id = message.chat_id();
        let messages = store
            .chats
            .get_mut(&chat_id)
            .ok_or(RepositoryError::ChatNotFound(chat_id))?;

        let message_id = MessageId::new(store.next_message_id);
        store.next_message_id += 1;
        messages.push(message.with_id(message_id));
        Ok(message_id)
    }

    async fn get_messages(&self, chat_id: ChatId) -> Result<Vec<Message>, RepositoryError> {
        let store = self.store.lock().await;
        Ok(store.chats.get(&chat_id).cloned().unwrap_or_default())
    }
}
