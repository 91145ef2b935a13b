//! Shield endpoints: 302 to the dynamic-badge renderer.
//!
//! The redirect target embeds this gateway's own `/api/...` URL so the
//! renderer performs its own fetch of the JSON body. Badge appearance comes
//! from the `badge` config section.

use axum::extract::{Host, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::app_state::AppState;

pub async fn repo_package_shield(
    State(app): State<AppState>,
    Host(host): Host,
    Path((owner, repo, pkg)): Path<(String, String, String)>,
) -> Response {
    redirect(&app, &host, &format!("{owner}/{repo}/{pkg}"))
}

pub async fn user_package_shield(
    State(app): State<AppState>,
    Host(host): Host,
    Path((owner, pkg)): Path<(String, String)>,
) -> Response {
    redirect(&app, &host, &format!("{owner}/{pkg}"))
}

fn redirect(app: &AppState, host: &str, path: &str) -> Response {
    let api_url = format!("{}/api/{path}", app.public_base(host));
    let badge = badge_url(app, &api_url);
    (StatusCode::FOUND, [(header::LOCATION, badge)]).into_response()
}

fn badge_url(app: &AppState, api_url: &str) -> String {
    let cfg = &app.cfg().badge;
    let mut target = app.badge_base().clone();
    target
        .query_pairs_mut()
        .append_pair("url", api_url)
        .append_pair("query", &cfg.query)
        .append_pair("style", &cfg.style)
        .append_pair("logo", &cfg.logo)
        .append_pair("label", &cfg.label)
        .append_pair("color", &cfg.color);
    target.to_string()
}
