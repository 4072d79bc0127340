pub mod error;
pub mod health;
pub mod hello;
pub mod profile;
pub mod repertoire;

pub use error::AppError;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use repertory_core::output::format_json;
use serde::Serialize;

/// Respond with `value` rendered by the store-aware JSON formatter, so
/// numbers keep their integer or decimal form.
pub(crate) fn json_response<T: Serialize>(status: StatusCode, value: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        format_json(value),
    )
        .into_response()
}
