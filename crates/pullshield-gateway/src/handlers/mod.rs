//! HTTP handlers: JSON stats, shield redirects, and the docs page.

pub mod api;
pub mod docs;
pub mod shield;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use pullshield_core::error::{ClientCode, PullShieldError};

/// Transport-level status for a domain error.
pub(crate) fn http_status(err: &PullShieldError) -> StatusCode {
    match err.client_code() {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::AllSourcesFailed => StatusCode::INTERNAL_SERVER_ERROR,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// A pre-serialized JSON body with the given status.
pub(crate) fn json_body(status: StatusCode, body: String) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
