//! HTTP API endpoint handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    domain::ChatId,
    infrastructure::dto::http::{
        ChatCreatedDto, MessageDto, MessageSentDto, ParticipantsDto, SendMessageRequest,
    },
    ui::{error::ApiError, state::AppState},
    usecase::{CreateChatUseCase, GetChatUseCase, SendMessageUseCase},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Create a new chat
pub async fn create_chat(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ChatCreatedDto>), ApiError> {
    let usecase = CreateChatUseCase::new(state.repository.clone(), state.message_factory);
    let chat_id = usecase.execute().await?;

    Ok((
        StatusCode::CREATED,
        Json(ChatCreatedDto {
            id: chat_id.value(),
        }),
    ))
}

/// Get the message history of a chat
pub async fn get_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    tracing::debug!("Reading history of chat {}", chat_id);
    let usecase = GetChatUseCase::new(state.repository.clone(), state.message_factory);
    let messages = usecase.history(ChatId::new(chat_id)).await?;

    Ok(Json(messages.iter().map(MessageDto::from).collect()))
}

/// Get the most recent message of a chat
pub async fn get_last_message(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<MessageDto>, ApiError> {
    let usecase = GetChatUseCase::new(state.repository.clone(), state.message_factory);
    let message = usecase.last_message(ChatId::new(chat_id)).await?;

    Ok(Json(MessageDto::from(&message)))
}

/// Get the participants of a chat
pub async fn get_participants(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<Json<ParticipantsDto>, ApiError> {
    let chat_id = ChatId::new(chat_id);
    let usecase = GetChatUseCase::new(state.repository.clone(), state.message_factory);
    let participants = usecase.participants(chat_id).await?;

    Ok(Json(ParticipantsDto::new(chat_id, &participants)))
}

/// Send a message into a chat
pub async fn send_message(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageSentDto>), ApiError> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let usecase = SendMessageUseCase::new(state.repository.clone(), state.message_factory);
    let message_id = usecase
        .execute(ChatId::new(chat_id), request.sender_id, request.text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageSentDto {
            id: message_id.value(),
            chat_id,
        }),
    ))
}
