//! UseCase 層
//!
//! アプリケーションの処理手順を実装するレイヤー。
//! UI 層から呼び出され、Domain 層（Chat 集約）を操作します。

pub mod create_chat;
pub mod get_chat;
pub mod send_message;

pub use create_chat::CreateChatUseCase;
pub use get_chat::GetChatUseCase;
pub use send_message::SendMessageUseCase;
