use super::types::ItemResponse;
use crate::api::{error::ValidationErrorBody, extract::ValidPath};
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct ItemPath {
    /// Numeric item id.
    pub item_id: i64,
}

#[utoipa::path(
    get,
    path = "/items/{item_id}",
    params(ItemPath),
    responses(
        (status = 200, description = "Item id echoed back", body = ItemResponse),
        (status = 422, description = "item_id is not an integer", body = ValidationErrorBody),
    ),
    tag = "items"
)]
#[instrument]
pub async fn get_item(ValidPath(path): ValidPath<ItemPath>) -> impl IntoResponse {
    Json(ItemResponse { item: path.item_id })
}
