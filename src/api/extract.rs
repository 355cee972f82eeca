//! Validating extractors.
//!
//! `ValidPath`, `ValidQuery` and `ValidJson` wrap the usual `axum` extractors
//! and turn every coercion or shape failure into [`ApiError::Validation`] with
//! the location of the failing input, so handlers only ever see typed values.

use crate::api::error::{ApiError, FieldError, Source};
use axum::{
    async_trait,
    body::Bytes,
    extract::{
        path::ErrorKind, rejection::PathRejection, FromRequest, FromRequestParts, Path, Request,
    },
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap, StatusCode},
};
use serde::{
    de::{self, DeserializeOwned, Unexpected},
    Deserialize, Deserializer,
};
use serde_json::error::Category;
use std::borrow::Cow;
use tracing::debug;

/// Path parameters deserialized into `T`.
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

/// Query string deserialized into `T`; absent keys fall back to `T`'s serde defaults.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

/// JSON body deserialized into `T`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                // Single-parameter routes let us name the field even when the
                // deserializer only reports a bare message (unknown enum variant).
                let single_key = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
                    .await
                    .ok()
                    .and_then(|Path(params)| match params.as_slice() {
                        [(key, _)] => Some(key.clone()),
                        _ => None,
                    });

                let error = path_error(rejection, single_key.as_deref());
                debug!("Rejected path parameters: {error:?}");
                Err(error)
            }
        }
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        parse_query(query).map(Self).map_err(|error| {
            debug!("Rejected query string: {error:?}");
            error
        })
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Err(ApiError::Rejected(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Rejected(rejection.status(), rejection.body_text()))?;

        parse_json(&bytes).map(Self).map_err(|error| {
            debug!("Rejected request body: {error:?}");
            error
        })
    }
}

fn path_error(rejection: PathRejection, single_key: Option<&str>) -> ApiError {
    let err = match rejection {
        PathRejection::FailedToDeserializePathParams(err) => err,
        other => return ApiError::Rejected(other.status(), other.body_text()),
    };

    let field: Vec<&str> = single_key.into_iter().collect();
    let error = match err.kind() {
        ErrorKind::ParseErrorAtKey {
            key,
            value,
            expected_type,
        } => FieldError::new(
            Source::Path,
            &[key.as_str()],
            parse_message(value, expected_type),
            "parsing",
        ),
        ErrorKind::ParseError {
            value,
            expected_type,
        } => FieldError::new(
            Source::Path,
            &field,
            parse_message(value, expected_type),
            "parsing",
        ),
        ErrorKind::Message(message) => {
            FieldError::new(Source::Path, &field, message.clone(), "value_error")
        }
        _ => FieldError::new(Source::Path, &field, err.body_text(), "value_error"),
    };

    ApiError::validation(error)
}

fn parse_message(value: &str, expected_type: &str) -> String {
    let expected = match expected_type {
        "i8" | "i16" | "i32" | "i64" | "i128" | "u8" | "u16" | "u32" | "u64" | "u128" => {
            "integer"
        }
        "f32" | "f64" => "number",
        "bool" => "boolean",
        other => other,
    };
    format!("Input should be a valid {expected}, unable to parse `{value}`")
}

/// Deserialize a raw query string into `T`. A repeated key keeps its last value.
///
/// # Errors
/// Returns [`ApiError::Validation`] naming the first key that failed.
pub fn parse_query<T: DeserializeOwned>(query: &str) -> Result<T, ApiError> {
    let query = last_value_wins(query);
    let deserializer =
        serde_urlencoded::Deserializer::new(form_urlencoded::parse(query.as_bytes()));

    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        ApiError::validation(field_error(Source::Query, &path, &message, "parsing"))
    })
}

/// Re-encode `query` with one pair per key: first position, last value.
fn last_value_wins(query: &str) -> String {
    let mut pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = Vec::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match pairs.iter_mut().find(|(seen, _)| *seen == key) {
            Some(pair) => pair.1 = value,
            None => pairs.push((key, value)),
        }
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Deserialize a JSON document into `T`, rejecting trailing data.
///
/// # Errors
/// Returns [`ApiError::Validation`] for empty bodies, malformed JSON and
/// missing or wrong-typed fields.
pub fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::validation(FieldError::new(
            Source::Body,
            &[],
            "Field required",
            "missing",
        )));
    }

    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        let kind = match inner.classify() {
            Category::Data => "parsing",
            Category::Syntax | Category::Eof | Category::Io => "json_invalid",
        };
        ApiError::validation(field_error(
            Source::Body,
            &path,
            strip_position(&inner.to_string()),
            kind,
        ))
    })?;

    deserializer.end().map_err(|err| {
        ApiError::validation(FieldError::new(
            Source::Body,
            &[],
            strip_position(&err.to_string()),
            "json_invalid",
        ))
    })?;

    Ok(value)
}

fn field_error(source: Source, path: &str, message: &str, kind: &str) -> FieldError {
    // serde_path_to_error renders the root as "."
    let mut field: Vec<&str> = path.split('.').filter(|part| !part.is_empty()).collect();

    match missing_field(message) {
        Some(name) => {
            field.push(name);
            FieldError::new(source, &field, "Field required", "missing")
        }
        None => FieldError::new(source, &field, message, kind),
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
}

fn strip_position(message: &str) -> &str {
    message
        .rsplit_once(" at line ")
        .map_or(message, |(head, _)| head)
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };

    let Ok(value) = value.to_str() else {
        return false;
    };

    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Accept the usual textual spellings of a boolean flag.
///
/// # Errors
/// Fails on anything outside `true/false`, `1/0`, `yes/no`, `on/off`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::invalid_value(Unexpected::Str(&raw), &"a boolean")),
    }
}
