//! Axum router wiring.
//!
//! Five routes: the docs page, the two stats shapes, and the two shield
//! shapes. Every response carries `Access-Control-Allow-Origin: *` via a
//! router-level layer.

use axum::http::{header, HeaderValue};
use axum::middleware::map_response;
use axum::response::Response;
use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::docs::index))
        .route("/api/:owner/:pkg", get(handlers::api::user_package_stats))
        .route(
            "/api/:owner/:repo/:pkg",
            get(handlers::api::repo_package_stats),
        )
        .route(
            "/shield/:owner/:pkg",
            get(handlers::shield::user_package_shield),
        )
        .route(
            "/shield/:owner/:repo/:pkg",
            get(handlers::shield::repo_package_shield),
        )
        .layer(map_response(allow_any_origin))
        .with_state(state)
}

async fn allow_any_origin(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    response
}
