use crate::api::{
    error::{FieldError, NotFoundBody, ValidationErrorBody},
    handlers::{calculator, files, health, items, messages, models, products, users},
};
use axum::routing::{get, options};
use utoipa::{
    openapi::{Contact, Info, InfoBuilder, License, OpenApiBuilder, Tag},
    OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

/// Greedy file routes. `routes!` would register `{file_path}` as a single
/// segment, so these are wired with axum's wildcard and documented here.
#[derive(OpenApi)]
#[openapi(
    paths(files::read_file, files::read_file_root),
    components(schemas(ValidationErrorBody, FieldError, NotFoundBody))
)]
struct FileRoutes;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Build the router that also drives the `OpenAPI` document.
///
/// Endpoints added with `.routes(routes!(...))` are served and documented in
/// one step. `OPTIONS /health` is served but not documented.
pub(crate) fn api_router() -> OpenApiRouter {
    let router = OpenApiRouter::with_openapi(cargo_openapi())
        .routes(routes!(health::health))
        .routes(routes!(messages::hello))
        .routes(routes!(items::get_item))
        .routes(routes!(users::read_user_me))
        .routes(routes!(users::read_user))
        .routes(routes!(users::read_user_item))
        .routes(routes!(models::get_model))
        .routes(routes!(calculator::addition))
        .routes(routes!(calculator::soustraction))
        .routes(routes!(products::create_product))
        .routes(routes!(products::read_product))
        .routes(routes!(products::read_product_number))
        .routes(routes!(products::create_product_price))
        .routes(routes!(products::create_product_id))
        .routes(routes!(products::create_product_attrs))
        .route("/health", options(health::health))
        .route("/files/", get(files::read_file_root))
        .route("/files/*file_path", get(files::read_file));

    let (router, mut doc) = router.split_for_parts();
    doc.merge(FileRoutes::openapi());
    doc.tags = Some(tags());

    OpenApiRouter::with_openapi(doc).merge(OpenApiRouter::from(router))
}

fn tags() -> Vec<Tag> {
    [
        ("health", "Build information"),
        ("messages", "Static greetings"),
        ("items", "Typed path parameters"),
        ("users", "Literal vs parametric routes"),
        ("models", "Enum-constrained path segment"),
        ("files", "Greedy path parameter"),
        ("calculator", "Query parameters with defaults"),
        ("products", "Validated product payloads"),
    ]
    .into_iter()
    .map(|(name, description)| {
        let mut tag = Tag::new(name);
        tag.description = Some(description.to_string());
        tag
    })
    .collect()
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    OpenApiBuilder::new().info(cargo_info()).build()
}

fn cargo_info() -> Info {
    // Cargo.toml metadata rather than utoipa's crate-info defaults.
    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(optional_str(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    info.contact = cargo_contact(env!("CARGO_PKG_AUTHORS"));
    info.license = cargo_license();
    info
}

fn cargo_contact(authors: &str) -> Option<Contact> {
    // Cargo authors are `:` separated and may include "Name <email>".
    let primary = authors.split(':').next().map(str::trim)?;
    if primary.is_empty() {
        return None;
    }

    let (name, email) = parse_author(primary);
    if name.is_none() && email.is_none() {
        return None;
    }

    let mut contact = Contact::new();
    contact.name = name.map(str::to_string);
    contact.email = email.map(str::to_string);
    Some(contact)
}

fn cargo_license() -> Option<License> {
    let identifier = optional_str(env!("CARGO_PKG_LICENSE"))?;
    let mut license = License::new(identifier);
    license.identifier = Some(identifier.to_string());
    Some(license)
}

fn optional_str(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_author(author: &str) -> (Option<&str>, Option<&str>) {
    match author.split_once('<') {
        Some((name, email)) => (
            optional_str(name),
            optional_str(email.trim_end_matches('>')),
        ),
        None => (optional_str(author), None),
    }
}
