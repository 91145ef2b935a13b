//! Shared application state for the pullshield gateway.
//!
//! Holds the validated config, the shared upstream HTTP client, the compiled
//! extraction pattern, and the response cache. Startup errors are explicit
//! (Result instead of panic).

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use pullshield_core::error::{PullShieldError, Result};
use pullshield_core::stats::StatsExtractor;

use crate::cache::ResponseCache;
use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    http: reqwest::Client,
    extractor: StatsExtractor,
    cache: ResponseCache,
    badge_base: Url,
    upstream_base: String,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let extractor = StatsExtractor::new()?;

        let badge_base = Url::parse(&cfg.badge.base)
            .map_err(|e| PullShieldError::BadRequest(format!("badge.base invalid: {e}")))?;

        let upstream_base = cfg.upstream.base.trim_end_matches('/').to_string();
        let cache = ResponseCache::new(Duration::from_secs(cfg.cache.ttl_secs));

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                http: reqwest::Client::new(),
                extractor,
                cache,
                badge_base,
                upstream_base,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    pub fn extractor(&self) -> &StatsExtractor {
        &self.inner.extractor
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.inner.cache
    }

    /// Badge renderer endpoint, parsed once at boot.
    pub fn badge_base(&self) -> &Url {
        &self.inner.badge_base
    }

    /// Upstream host with any trailing slash trimmed.
    pub fn upstream_base(&self) -> &str {
        &self.inner.upstream_base
    }

    /// Origin used for self-referencing URLs in shield redirects.
    pub fn public_base(&self, host: &str) -> String {
        match &self.inner.cfg.gateway.public_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("http://{host}"),
        }
    }
}
