use axum::{Json, body::Bytes, extract::State};

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    let payload = ChatRequest::from_json(&body).inspect_err(|e| {
        tracing::debug!(error = %e, "rejecting chat request");
    })?;

    let reply = state
        .responder
        .respond(&payload.message, payload.coordinates.as_deref())
        .await;

    Ok(Json(ChatReply { reply }))
}
