//! JSON stats endpoints.
//!
//! `/api/:owner/:pkg` and `/api/:owner/:repo/:pkg` resolve the package page,
//! fetch + aggregate, and emit the stats body. Responses are cached by full
//! request URL; a `no-cache` query key (value ignored) skips the lookup and
//! refreshes the stored entry.
//!
//! Status policy: a pattern miss on a reachable page is a 200 with
//! success=false and null counts (badge renderers expect 200s); only
//! all-sources-failed becomes a 500.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};

use pullshield_core::package::PackageRef;
use pullshield_core::response::{ErrorResponse, RepoIdentity, StatsResponse};

use crate::app_state::AppState;
use crate::fetch;
use crate::handlers::{http_status, json_body};

pub async fn repo_package_stats(
    State(app): State<AppState>,
    Path((owner, repo, pkg)): Path<(String, String, String)>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    handle(app, PackageRef::repo_scoped(owner, repo, pkg), uri, params).await
}

pub async fn user_package_stats(
    State(app): State<AppState>,
    Path((owner, pkg)): Path<(String, String)>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    handle(app, PackageRef::user_scoped(owner, pkg), uri, params).await
}

async fn handle(
    app: AppState,
    pkg: PackageRef,
    uri: Uri,
    params: HashMap<String, String>,
) -> Response {
    let cache_key = uri.to_string();
    let bypass = params.contains_key("no-cache");

    if !bypass {
        if let Some(body) = app.cache().get(&cache_key) {
            tracing::debug!(key = %cache_key, "served from cache");
            return json_body(StatusCode::OK, body);
        }
    }

    let candidates = pkg.candidate_urls(app.upstream_base());
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    match fetch::fetch_package_stats(app.http(), app.extractor(), &candidates).await {
        Ok(stats) => {
            let url = stats
                .urls
                .first()
                .cloned()
                .unwrap_or_else(|| pkg.page_url(app.upstream_base()));
            let resp = StatsResponse {
                success: stats.formatted.is_some(),
                download_count: stats.formatted,
                download_count_raw: stats.raw,
                repo: RepoIdentity {
                    url,
                    urls: Some(stats.urls),
                    owner: pkg.owner,
                    repo: pkg.repo,
                    package: pkg.package,
                },
                timestamp,
            };

            let body = match serde_json::to_string(&resp) {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!(error = %e, "stats body serialization failed");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };
            app.cache().put(&cache_key, &body);
            json_body(StatusCode::OK, body)
        }
        Err(err) => {
            tracing::warn!(
                owner = %pkg.owner,
                package = %pkg.package,
                error = %err,
                "package stats fetch failed"
            );
            let resp = ErrorResponse {
                repo: RepoIdentity {
                    url: pkg.page_url(app.upstream_base()),
                    urls: None,
                    owner: pkg.owner,
                    repo: pkg.repo,
                    package: pkg.package,
                },
                success: false,
                error: err.to_string(),
                timestamp,
            };

            let body = match serde_json::to_string(&resp) {
                Ok(b) => b,
                Err(e) => {
                    tracing::error!(error = %e, "error body serialization failed");
                    return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                }
            };
            json_body(http_status(&err), body)
        }
    }
}
