//! Error responses shared by every route.
//!
//! Validation failures are reported as `422` with a `detail` list, one entry
//! per failing input, each carrying its location (`path`, `query` or `body`
//! followed by the field path), a message and a short error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Where a rejected input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Path,
    Query,
    Body,
}

impl Source {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
            Self::Body => "body",
        }
    }
}

/// One entry of a validation error body.
#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Input location, e.g. `["query", "x"]`.
    pub loc: Vec<String>,
    pub msg: String,
    /// One of `missing`, `parsing`, `json_invalid`, `value_error`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    #[must_use]
    pub fn new(source: Source, field: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        let loc = std::iter::once(source.as_str())
            .chain(field.iter().copied())
            .map(str::to_string)
            .collect();

        Self {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    #[must_use]
    pub fn missing(source: Source, field: &str) -> Self {
        Self::new(source, &[field], "Field required", "missing")
    }
}

/// Body of a `422` response.
#[derive(ToSchema, Serialize, Debug)]
pub struct ValidationErrorBody {
    pub detail: Vec<FieldError>,
}

/// Body of a `404` response.
#[derive(ToSchema, Serialize, Debug)]
pub struct NotFoundBody {
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    #[error("not found")]
    NotFound,
    /// Transport-level rejection whose status is decided by `axum`.
    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl ApiError {
    #[must_use]
    pub fn validation(error: FieldError) -> Self {
        Self::Validation(vec![error])
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Rejected(status, _) => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(detail) => (status, Json(ValidationErrorBody { detail })).into_response(),
            Self::NotFound => (
                status,
                Json(NotFoundBody {
                    detail: "Not Found".to_string(),
                }),
            )
                .into_response(),
            Self::Rejected(_, message) => (status, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    #[test]
    fn field_error_prefixes_source() {
        let error = FieldError::new(Source::Query, &["x"], "bad", "parsing");
        assert_eq!(error.loc, vec!["query".to_string(), "x".to_string()]);
        assert_eq!(error.kind, "parsing");
    }

    #[test]
    fn missing_field_has_fixed_message() {
        let error = FieldError::missing(Source::Body, "price");
        assert_eq!(error.msg, "Field required");
        assert_eq!(error.kind, "missing");
        assert_eq!(error.loc, vec!["body".to_string(), "price".to_string()]);
    }

    #[tokio::test]
    async fn validation_renders_detail_list() -> Result<()> {
        let response =
            ApiError::validation(FieldError::missing(Source::Query, "y")).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let value: Value = serde_json::from_slice(&body)?;
        assert_eq!(
            value,
            json!({"detail": [{"loc": ["query", "y"], "msg": "Field required", "type": "missing"}]})
        );
        Ok(())
    }

    #[tokio::test]
    async fn not_found_renders_detail_string() -> Result<()> {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let value: Value = serde_json::from_slice(&body)?;
        assert_eq!(value, json!({"detail": "Not Found"}));
        Ok(())
    }

    #[test]
    fn rejected_keeps_status() {
        let error = ApiError::Rejected(StatusCode::PAYLOAD_TOO_LARGE, "too big".to_string());
        assert_eq!(error.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(error.to_string(), "too big");
    }
}
