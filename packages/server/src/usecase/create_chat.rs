//! UseCase: チャット作成処理

use std::sync::Arc;

use crate::domain::{Chat, ChatError, ChatId, ChatRepository, MessageFactory};

/// チャット作成のユースケース
pub struct CreateChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// メッセージ生成ルール（本文の最大長）
    factory: MessageFactory,
}

impl CreateChatUseCase {
    /// 新しい CreateChatUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, factory: MessageFactory) -> Self {
        Self {
            repository,
            factory,
        }
    }

    /// チャット作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(ChatId)` - 採番されたチャット ID
    /// * `Err(ChatError)` - 作成失敗（Storage）
    pub async fn execute(&self) -> Result<ChatId, ChatError> {
        let chat = Chat::create(self.repository.clone(), self.factory).await?;
        Ok(chat.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::InMemoryChatRepository;

    #[tokio::test]
    async fn test_create_chat_success() {
        // テスト項目: チャットを作成すると存在確認できる ID が返される
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let usecase = CreateChatUseCase::new(repository.clone(), MessageFactory::default());

        // when (操作):
        let result = usecase.execute().await;

        // then (期待する結果):
        let chat_id = result.unwrap();
        assert!(repository.chat_exists(chat_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_chat_twice_yields_distinct_ids() {
        // テスト項目: 作成のたびに異なる ID が採番される
        // given (前提条件):
        let repository = Arc::new(InMemoryChatRepository::new());
        let usecase = CreateChatUseCase::new(repository, MessageFactory::default());

        // when (操作):
        let first = usecase.execute().await.unwrap();
        let second = usecase.execute().await.unwrap();

        // then (期待する結果):
        assert_ne!(first, second);
    }
}
