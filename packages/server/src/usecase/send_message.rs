//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - チャットの読み込みとメッセージの保存
//!
//! ### なぜこのテストが必要か
//! - 存在しないチャットへの送信が NotFound になることを保証
//! - 不正な入力がバリデーションエラーになり、履歴に残らないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージ送信後、履歴から読み返せる
//! - 異常系：存在しないチャット、不正な送信者 ID、空の本文

use std::sync::Arc;

use crate::domain::{Chat, ChatError, ChatId, ChatRepository, MessageFactory, MessageId};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn ChatRepository>,
    /// メッセージ生成ルール（本文の最大長）
    factory: MessageFactory,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn ChatRepository>, factory: MessageFactory) -> Self {
        Self {
            repository,
            factory,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `chat_id` - 送信先のチャット ID
    /// * `sender_id` - 送信者 ID（未検証の値）
    /// * `text` - メッセージ本文（未検証の値）
    ///
    /// # Returns
    ///
    /// * `Ok(MessageId)` - 保存されたメッセージの ID
    /// * `Err(ChatError)` - 送信失敗
    pub async fn execute(
        &self,
        chat_id: ChatId,
        sender_id: i64,
        text: String,
    ) -> Result<MessageId, ChatError> {
        // 1. チャットの存在確認（ここで一度だけ行う）
        let chat = Chat::load(self.repository.clone(), self.factory, chat_id).await?;

        // 2. メッセージを検証して保存
        chat.send_message(sender_id, text).await
    }
}
