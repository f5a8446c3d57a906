//! Chat aggregate.
//!
//! A `Chat` is a handle bound to a chat id that is known to exist. It keeps
//! no cached view of the chat: every read goes through the repository, so a
//! message is visible to `messages()` as soon as `send_message()` returns.

use std::{fmt, sync::Arc};

use super::{
    ChatId, ChatRepository, Message, MessageFactory, MessageId, SenderId,
    error::ChatError, participant::derive_participants,
};

/// Consistency boundary for message validation and participant derivation.
#[derive(Clone)]
pub struct Chat {
    id: ChatId,
    repository: Arc<dyn ChatRepository>,
    factory: MessageFactory,
}

impl Chat {
    /// Create a brand-new chat through the repository.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Storage` if the repository fails to allocate the chat
    pub async fn create(
        repository: Arc<dyn ChatRepository>,
        factory: MessageFactory,
    ) -> Result<Self, ChatError> {
        let id = repository.create_chat().await?;
        tracing::info!("Created chat {}", id);
        Ok(Self {
            id,
            repository,
            factory,
        })
    }

    /// Bind to an existing chat.
    ///
    /// Existence is checked here, once; later operations do not re-check it.
    ///
    /// # Errors
    ///
    /// - `ChatError::NotFound` if no chat with this id exists
    /// - `ChatError::Storage` if the existence check fails
    pub async fn load(
        repository: Arc<dyn ChatRepository>,
        factory: MessageFactory,
        id: ChatId,
    ) -> Result<Self, ChatError> {
        if !repository.chat_exists(id).await? {
            return Err(ChatError::NotFound(id));
        }
        Ok(Self {
            id,
            repository,
            factory,
        })
    }

    pub fn id(&self) -> ChatId {
        self.id
    }

    /// Validate and store a new message from `sender_id`.
    ///
    /// Validation happens before any storage access, so invalid input never
    /// reaches the repository.
    ///
    /// # Returns
    ///
    /// The id the repository assigned to the stored message
    pub async fn send_message(&self, sender_id: i64, text: String) -> Result<MessageId, ChatError> {
        let message = self.factory.create(self.id, sender_id, text)?;
        let message_id = self.repository.store(message).await?;
        tracing::info!(
            "Stored message {} from sender {} in chat {}",
            message_id,
            sender_id,
            self.id
        );
        Ok(message_id)
    }

    /// Full message history, in store order.
    pub async fn messages(&self) -> Result<Vec<Message>, ChatError> {
        Ok(self.repository.get_messages(self.id).await?)
    }

    /// The most recent message.
    ///
    /// The message with the greatest timestamp wins; on equal timestamps the
    /// one stored last wins.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyChat` if the chat has no messages yet
    pub async fn last_message(&self) -> Result<Message, ChatError> {
        self.messages()
            .await?
            .into_iter()
            .max_by_key(Message::timestamp)
            .ok_or(ChatError::EmptyChat(self.id))
    }

    /// Distinct senders of this chat, in order of first appearance.
    pub async fn participants(&self) -> Result<Vec<SenderId>, ChatError> {
        let messages = self.messages().await?;
        Ok(derive_participants(&messages))
    }
}

impl fmt::Debug for Chat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chat")
            .field("id", &self.id)
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        MockChatRepository, Timestamp,
        error::{RepositoryError, ValueObjectError},
    };
    use mockall::predicate::eq;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - Chat 集約の生成・読み込み・メッセージ送信・履歴取得・参加者導出
    //
    // 【なぜこのテストが必要か】
    // - 不正な入力が Repository に到達しないことを保証する
    // - Repository のエラーが加工されずに呼び出し元へ伝わることを保証する
    //
    // 【どのようなシナリオをテストするか】
    // 1. 存在しない / 存在する chat の読み込み
    // 2. 不正な送信者・本文での送信（store が呼ばれない）
    // 3. 最新メッセージの取得（空の chat、同時刻のメッセージ）
    // 4. Repository 障害の伝播
    // ========================================

    fn stored(id: i64, chat_id: i64, sender_id: i64, text: &str, timestamp: i64) -> Message {
        Message::restore(
            MessageId::new(id),
            ChatId::new(chat_id),
            sender_id,
            text.to_string(),
            Timestamp::new(timestamp),
        )
    }

    fn existing_chat(mock: MockChatRepository, id: i64) -> Chat {
        Chat {
            id: ChatId::new(id),
            repository: Arc::new(mock),
            factory: MessageFactory::default(),
        }
    }

    #[tokio::test]
    async fn test_create_uses_allocated_id() {
        // テスト項目: Repository が採番した ID で chat が作成される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_create_chat()
            .times(1)
            .returning(|| Ok(ChatId::new(42)));
        mock.expect_chat_exists().never();

        // when (操作):
        let chat = Chat::create(Arc::new(mock), MessageFactory::default()).await;

        // then (期待する結果):
        assert_eq!(chat.unwrap().id(), ChatId::new(42));
    }

    #[tokio::test]
    async fn test_load_nonexistent_chat_fails() {
        // テスト項目: 存在しない chat の読み込みは NotFound になる
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_chat_exists()
            .with(eq(ChatId::new(404)))
            .returning(|_| Ok(false));

        // when (操作):
        let result = Chat::load(Arc::new(mock), MessageFactory::default(), ChatId::new(404)).await;

        // then (期待する結果):
        assert_eq!(result.unwrap_err(), ChatError::NotFound(ChatId::new(404)));
    }

    #[tokio::test]
    async fn test_load_existing_chat_succeeds() {
        // テスト項目: 存在する chat は読み込める
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_chat_exists()
            .with(eq(ChatId::new(3)))
            .returning(|_| Ok(true));

        // when (操作):
        let result = Chat::load(Arc::new(mock), MessageFactory::default(), ChatId::new(3)).await;

        // then (期待する結果):
        assert_eq!(result.unwrap().id(), ChatId::new(3));
    }

    #[tokio::test]
    async fn test_load_propagates_storage_error() {
        // テスト項目: 存在確認の失敗はそのまま Storage エラーとして返される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_chat_exists()
            .returning(|_| Err(RepositoryError::Connection("refused".to_string())));

        // when (操作):
        let result = Chat::load(Arc::new(mock), MessageFactory::default(), ChatId::new(1)).await;

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            ChatError::Storage(RepositoryError::Connection("refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_send_message_stores_validated_message() {
        // テスト項目: 有効なメッセージは chat ID 付きで store に渡される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_store()
            .withf(|m| {
                m.id().is_none()
                    && m.chat_id() == ChatId::new(7)
                    && m.sender_id().value() == 1
                    && m.text().as_str() == "hi"
            })
            .times(1)
            .returning(|_| Ok(MessageId::new(100)));
        let chat = existing_chat(mock, 7);

        // when (操作):
        let result = chat.send_message(1, "hi".to_string()).await;

        // then (期待する結果):
        assert_eq!(result, Ok(MessageId::new(100)));
    }

    #[tokio::test]
    async fn test_send_message_invalid_sender_never_stores() {
        // テスト項目: 不正な送信者 ID では store が呼ばれない
        // given (前提条件):
        for sender_id in [0, -1, i64::MIN] {
            let mut mock = MockChatRepository::new();
            mock.expect_store().never();
            let chat = existing_chat(mock, 1);

            // when (操作):
            let result = chat.send_message(sender_id, "x".to_string()).await;

            // then (期待する結果):
            assert_eq!(
                result,
                Err(ChatError::Validation(ValueObjectError::InvalidSender(
                    sender_id
                )))
            );
        }
    }

    #[tokio::test]
    async fn test_send_message_invalid_text_never_stores() {
        // テスト項目: 空・上限超過の本文では store が呼ばれない
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_store().never();
        let chat = Chat {
            id: ChatId::new(1),
            repository: Arc::new(mock),
            factory: MessageFactory::new(5),
        };

        // when (操作):
        let empty = chat.send_message(1, String::new()).await;
        let too_long = chat.send_message(1, "123456".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            empty,
            Err(ChatError::Validation(ValueObjectError::EmptyText))
        );
        assert_eq!(
            too_long,
            Err(ChatError::Validation(ValueObjectError::TextTooLong {
                max: 5,
                actual: 6
            }))
        );
    }

    #[tokio::test]
    async fn test_send_message_does_not_recheck_existence() {
        // テスト項目: 送信時に chat の存在確認を再度行わない
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_chat_exists().never();
        mock.expect_store().returning(|_| Ok(MessageId::new(1)));
        let chat = existing_chat(mock, 1);

        // when (操作):
        let result = chat.send_message(1, "hello".to_string()).await;

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_message_propagates_storage_error() {
        // テスト項目: store の失敗はそのまま返される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_store()
            .returning(|_| Err(RepositoryError::ChatNotFound(ChatId::new(1))));
        let chat = existing_chat(mock, 1);

        // when (操作):
        let result = chat.send_message(1, "hello".to_string()).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ChatError::Storage(RepositoryError::ChatNotFound(
                ChatId::new(1)
            )))
        );
    }

    #[tokio::test]
    async fn test_messages_reads_through_every_time() {
        // テスト項目: 履歴取得のたびに Repository を参照し、同じ結果を返す
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_get_messages()
            .with(eq(ChatId::new(2)))
            .times(2)
            .returning(|_| Ok(vec![stored(1, 2, 1, "a", 10), stored(2, 2, 3, "b", 20)]));
        let chat = existing_chat(mock, 2);

        // when (操作):
        let first = chat.messages().await.unwrap();
        let second = chat.messages().await.unwrap();

        // then (期待する結果):
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_last_message_empty_chat() {
        // テスト項目: メッセージがない chat の最新メッセージは EmptyChat エラー
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_get_messages().returning(|_| Ok(Vec::new()));
        let chat = existing_chat(mock, 5);

        // when (操作):
        let result = chat.last_message().await;

        // then (期待する結果):
        assert_eq!(result, Err(ChatError::EmptyChat(ChatId::new(5))));
    }

    #[tokio::test]
    async fn test_last_message_greatest_timestamp() {
        // テスト項目: 最もタイムスタンプが大きいメッセージが返される
        // given (前提条件): 保存順とタイムスタンプ順が一致しない
        let mut mock = MockChatRepository::new();
        mock.expect_get_messages().returning(|_| {
            Ok(vec![
                stored(1, 1, 1, "t1", 100),
                stored(2, 1, 2, "t3", 300),
                stored(3, 1, 1, "t2", 200),
            ])
        });
        let chat = existing_chat(mock, 1);

        // when (操作):
        let result = chat.last_message().await.unwrap();

        // then (期待する結果):
        assert_eq!(result.text().as_str(), "t3");
    }

    #[tokio::test]
    async fn test_last_message_tie_prefers_later_insertion() {
        // テスト項目: 同時刻のメッセージは後から保存されたものが返される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_get_messages().returning(|_| {
            Ok(vec![
                stored(1, 1, 1, "first", 100),
                stored(2, 1, 2, "second", 100),
            ])
        });
        let chat = existing_chat(mock, 1);

        // when (操作):
        let result = chat.last_message().await.unwrap();

        // then (期待する結果):
        assert_eq!(result.id(), Some(MessageId::new(2)));
    }

    #[tokio::test]
    async fn test_participants_first_appearance_order() {
        // テスト項目: 参加者は初出順・重複なしで返される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_get_messages().returning(|_| {
            Ok(vec![
                stored(1, 1, 5, "a", 1),
                stored(2, 1, 7, "b", 2),
                stored(3, 1, 5, "c", 3),
                stored(4, 1, 9, "d", 4),
            ])
        });
        let chat = existing_chat(mock, 1);

        // when (操作):
        let participants = chat.participants().await.unwrap();

        // then (期待する結果):
        let ids: Vec<i64> = participants.into_iter().map(|p| p.value()).collect();
        assert_eq!(ids, vec![5, 7, 9]);
    }

    #[tokio::test]
    async fn test_participants_propagates_storage_error() {
        // テスト項目: 履歴取得の失敗は参加者取得でもそのまま返される
        // given (前提条件):
        let mut mock = MockChatRepository::new();
        mock.expect_get_messages()
            .returning(|_| Err(RepositoryError::Query("no such table".to_string())));
        let chat = existing_chat(mock, 1);

        // when (操作):
        let result = chat.participants().await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ChatError::Storage(RepositoryError::Query(
                "no such table".to_string()
            )))
        );
    }
}
