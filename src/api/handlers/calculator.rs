//! Calculator endpoints.
//!
//! Both routes return `x + y`. `/calculator/soustraction` differs from
//! `/calculator/addition` only in requiring both operands.

use crate::api::{error::ValidationErrorBody, extract::ValidQuery};
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OptionalOperands {
    /// Defaults to 0.
    #[serde(default)]
    pub x: i64,
    /// Defaults to 0.
    #[serde(default)]
    pub y: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RequiredOperands {
    pub x: i64,
    pub y: i64,
}

/// Widened so two `i64` operands never overflow.
fn add(x: i64, y: i64) -> i128 {
    i128::from(x) + i128::from(y)
}

#[utoipa::path(
    get,
    path = "/calculator/addition",
    params(OptionalOperands),
    responses(
        (status = 200, description = "x + y as a bare number", body = i128),
        (status = 422, description = "x or y is not an integer", body = ValidationErrorBody),
    ),
    tag = "calculator"
)]
#[instrument]
pub async fn addition(ValidQuery(operands): ValidQuery<OptionalOperands>) -> impl IntoResponse {
    Json(add(operands.x, operands.y))
}

#[utoipa::path(
    get,
    path = "/calculator/soustraction",
    params(RequiredOperands),
    responses(
        (status = 200, description = "x + y as a bare number", body = i128),
        (status = 422, description = "x or y is missing or not an integer", body = ValidationErrorBody),
    ),
    tag = "calculator"
)]
#[instrument]
pub async fn soustraction(
    ValidQuery(operands): ValidQuery<RequiredOperands>,
) -> impl IntoResponse {
    Json(add(operands.x, operands.y))
}

#[cfg(test)]
mod tests {
    use super::add;

    #[test]
    fn add_handles_signs() {
        assert_eq!(add(3, 4), 7);
        assert_eq!(add(-3, 4), 1);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn add_does_not_overflow() {
        assert_eq!(add(i64::MAX, i64::MAX), i128::from(i64::MAX) * 2);
        assert_eq!(add(i64::MIN, -1), i128::from(i64::MIN) - 1);
    }
}
