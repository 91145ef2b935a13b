//! Upstream package-page fetching.
//!
//! One GET per candidate URL, all issued concurrently; the handler waits for
//! every probe to settle before aggregating, so a partial failure never
//! aborts the rest. Non-2xx statuses and transport errors both become
//! `SourceFailure`s tagged with their URL. No timeout, retry, or backoff
//! here; a hanging upstream is bounded by the client's own connection
//! handling.

use futures_util::future::join_all;

use pullshield_core::stats::{
    aggregate_sources, PackageStats, SourceFailure, SourcePage, StatsExtractor,
};
use pullshield_core::Result;

pub async fn fetch_package_stats(
    client: &reqwest::Client,
    extractor: &StatsExtractor,
    urls: &[String],
) -> Result<PackageStats> {
    let probes = urls.iter().map(|url| fetch_one(client, extractor, url));
    let outcomes = join_all(probes).await;
    aggregate_sources(outcomes)
}

async fn fetch_one(
    client: &reqwest::Client,
    extractor: &StatsExtractor,
    url: &str,
) -> std::result::Result<SourcePage, SourceFailure> {
    let response = match client.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            return Err(SourceFailure {
                url: url.to_string(),
                reason: format!("{url} -> {e}"),
            })
        }
    };

    if !response.status().is_success() {
        return Err(SourceFailure {
            url: url.to_string(),
            reason: format!("{url} -> {}", response.status().as_u16()),
        });
    }

    let html = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            return Err(SourceFailure {
                url: url.to_string(),
                reason: format!("{url} -> {e}"),
            })
        }
    };

    tracing::debug!(%url, bytes = html.len(), "fetched package page");
    Ok(SourcePage {
        url: url.to_string(),
        stats: extractor.extract(&html),
    })
}
