//! User endpoints.
//!
//! `/users/me` is registered as a literal route so it always wins over the
//! parametric `/users/{user_id}`.

use super::types::{OwnedItemResponse, UserResponse};
use crate::api::{
    error::ValidationErrorBody,
    extract::{lenient_bool, ValidPath, ValidQuery},
};
use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use tracing::instrument;
use utoipa::IntoParams;

const CURRENT_USER_ID: &str = "the current user id";
const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UserPath {
    pub user_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct UserItemPath {
    /// Numeric owner id.
    pub user_id: i64,
    pub item_id: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserItemQuery {
    /// Free-form query echoed back when present.
    pub q: Option<String>,
    /// Omit the long description.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub short: bool,
}

#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
    ),
    tag = "users"
)]
#[instrument]
pub async fn read_user_me() -> impl IntoResponse {
    Json(UserResponse {
        user_id: CURRENT_USER_ID.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(UserPath),
    responses(
        (status = 200, description = "User id echoed back", body = UserResponse),
    ),
    tag = "users"
)]
#[instrument]
pub async fn read_user(ValidPath(path): ValidPath<UserPath>) -> impl IntoResponse {
    Json(UserResponse {
        user_id: path.user_id,
    })
}

#[utoipa::path(
    get,
    path = "/users/{user_id}/items/{item_id}",
    params(UserItemPath, UserItemQuery),
    responses(
        (status = 200, description = "Item owned by the user", body = OwnedItemResponse),
        (status = 422, description = "user_id is not an integer or short is not a boolean", body = ValidationErrorBody),
    ),
    tag = "users"
)]
#[instrument]
pub async fn read_user_item(
    ValidPath(path): ValidPath<UserItemPath>,
    ValidQuery(query): ValidQuery<UserItemQuery>,
) -> impl IntoResponse {
    Json(owned_item(path, query))
}

fn owned_item(path: UserItemPath, query: UserItemQuery) -> OwnedItemResponse {
    OwnedItemResponse {
        item_id: path.item_id,
        owner_id: path.user_id,
        q: query.q,
        description: (!query.short).then(|| LONG_DESCRIPTION.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> UserItemPath {
        UserItemPath {
            user_id: 5,
            item_id: "abc".to_string(),
        }
    }

    #[test]
    fn short_drops_description() {
        let item = owned_item(
            path(),
            UserItemQuery {
                q: None,
                short: true,
            },
        );
        assert_eq!(item.owner_id, 5);
        assert_eq!(item.item_id, "abc");
        assert!(item.description.is_none());
        assert!(item.q.is_none());
    }

    #[test]
    fn long_form_carries_description_and_q() {
        let item = owned_item(
            path(),
            UserItemQuery {
                q: Some("search".to_string()),
                short: false,
            },
        );
        assert_eq!(item.description.as_deref(), Some(LONG_DESCRIPTION));
        assert_eq!(item.q.as_deref(), Some("search"));
    }
}
