//! UseCase: チャット参照処理（履歴・参加者・最新メッセージ）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetChatUseCase の history() / participants() / last_message()
//!
//! ### なぜこのテストが必要か
//! - 送信したメッセージが次の読み込みで必ず見えること（キャッシュを持たない）を保証
//! - 参加者が初出順・重複なしで返されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：複数の送信者によるメッセージ
//! - エッジケース：メッセージのないチャット
//! - 異常系：存在しないチャット

use std::sync::Arc;

use crate::domain::{Chat, ChatError, ChatId, ChatRepository, Message, MessageFactory, SenderId};

/// チャット参照のユースケース
pub struct GetChatUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// メッセージ生成ルール（Chat 集約の生成に必要）
    factory: MessageFactory,
}

impl GetChatUseCase {
    /// 新しい GetChatUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, factory: MessageFactory) -> Self {
        Self {
            repository,
            factory,
        }
    }

    async fn load(&self, chat_id: ChatId) -> Result<Chat, ChatError> {
        Chat::load(self.repository.clone(), self.factory, chat_id).await
    }

    /// メッセージ履歴を保存順で取得
    pub async fn history(&self, chat_id: ChatId) -> Result<Vec<Message>, ChatError> {
        self.load(chat_id).await?.messages().await
    }

    /// 参加者（送信者 ID）を初出順で取得
    pub async fn participants(&self, chat_id: ChatId) -> Result<Vec<SenderId>, ChatError> {
        self.load(chat_id).await?.participants().await
    }

    /// 最新のメッセージを取得
    ///
    /// メッセージがない場合は `ChatError::EmptyChat`
    pub async fn last_message(&self, chat_id: ChatId) -> Result<Message, ChatError> {
        self.load(chat_id).await?.last_message().await
    }
}
