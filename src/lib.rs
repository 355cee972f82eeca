//! # Showcase
//!
//! `showcase` is a small HTTP API built on `axum` that demonstrates typed
//! routing: integer and string path parameters, a closed enum path segment, a
//! greedy file path, query parameters with defaults and validated JSON bodies
//! for a `Product` record.
//!
//! Every handler is stateless. Parameter coercion and body validation happen in
//! the extractors under [`api::extract`], which reject bad input with `422` and
//! a field-level `detail` list before any handler runs.

pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
