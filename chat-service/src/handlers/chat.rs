use crate::models::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{body::Bytes, extract::State, Json};

/// `POST /api/chat`
///
/// Always answers 200; provider failures fall back to FAQ or apology text.
/// The body is read raw so that malformed JSON still gets an answer.
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Json<ChatResponse> {
    let request = ChatRequest::from_body(&body);
    let resolution = state.resolver.resolve(&request.question).await;

    Json(ChatResponse {
        answer: resolution.answer,
    })
}
