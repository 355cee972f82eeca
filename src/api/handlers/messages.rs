use super::types::MessageResponse;
use axum::{response::IntoResponse, Json};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/messages/hello",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse),
    ),
    tag = "messages"
)]
#[instrument]
pub async fn hello() -> impl IntoResponse {
    Json(MessageResponse {
        message: "Hello World".to_string(),
    })
}
