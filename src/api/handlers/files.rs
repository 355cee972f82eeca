use super::types::FileResponse;
use crate::api::extract::ValidPath;
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct FilePath {
    /// Remainder of the request path, slashes included.
    pub file_path: String,
}

#[utoipa::path(
    get,
    path = "/files/{file_path}",
    params(FilePath),
    responses(
        (status = 200, description = "File path echoed back", body = FileResponse),
    ),
    tag = "files"
)]
#[instrument]
pub async fn read_file(ValidPath(path): ValidPath<FilePath>) -> impl IntoResponse {
    Json(FileResponse {
        file_path: path.file_path,
    })
}

/// `/files/` itself: the wildcard needs at least one character, so the empty
/// remainder gets its own route.
#[utoipa::path(
    get,
    path = "/files/",
    responses(
        (status = 200, description = "Empty file path", body = FileResponse),
    ),
    tag = "files"
)]
#[instrument]
pub async fn read_file_root() -> impl IntoResponse {
    Json(FileResponse {
        file_path: String::new(),
    })
}
