//! HTTP request handlers for the mock server.

pub mod companies;
pub mod records;

pub use companies::*;
pub use records::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::MockRecord;

/// An RFC 7807 problem response, the shape the Lockstep API uses for errors.
pub(crate) fn problem(status: StatusCode, title: &str, detail: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({
            "title": title,
            "status": status.as_u16(),
            "detail": detail.into(),
        })),
    )
        .into_response()
}

pub(crate) fn not_found<T: MockRecord>(id: &str) -> Response {
    problem(
        StatusCode::NOT_FOUND,
        "Not Found",
        format!("{} '{id}' was not found", T::NAME),
    )
}
