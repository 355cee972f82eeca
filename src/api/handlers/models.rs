use super::types::{ModelName, ModelResponse};
use crate::api::{error::ValidationErrorBody, extract::ValidPath};
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ModelPath {
    pub model_name: ModelName,
}

#[utoipa::path(
    get,
    path = "/models/{model_name}",
    params(ModelPath),
    responses(
        (status = 200, description = "Message for the model", body = ModelResponse),
        (status = 422, description = "Unknown model name", body = ValidationErrorBody),
    ),
    tag = "models"
)]
#[instrument]
pub async fn get_model(ValidPath(path): ValidPath<ModelPath>) -> impl IntoResponse {
    Json(ModelResponse {
        model_name: path.model_name,
        message: path.model_name.message().to_string(),
    })
}
