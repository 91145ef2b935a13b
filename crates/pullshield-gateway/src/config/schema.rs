use serde::Deserialize;
use url::Url;

use pullshield_core::error::{PullShieldError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub cache: CacheSection,

    #[serde(default)]
    pub upstream: UpstreamSection,

    #[serde(default)]
    pub badge: BadgeSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PullShieldError::BadRequest("version must be 1".into()));
        }

        self.gateway.validate()?;
        self.cache.validate()?;
        self.upstream.validate()?;
        self.badge.validate()?;

        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            cache: CacheSection::default(),
            upstream: UpstreamSection::default(),
            badge: BadgeSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Externally visible origin used when building shield redirect targets.
    /// When unset, the request's Host header is used with an http scheme.
    #[serde(default)]
    pub public_base: Option<String>,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            public_base: None,
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.listen.is_empty() {
            return Err(PullShieldError::BadRequest(
                "gateway.listen must not be empty".into(),
            ));
        }
        if let Some(base) = &self.public_base {
            validate_http_url("gateway.public_base", base)?;
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheSection {
    /// Response cache TTL in seconds. 0 disables caching.
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl CacheSection {
    pub fn validate(&self) -> Result<()> {
        if self.ttl_secs > 604_800 {
            return Err(PullShieldError::BadRequest(
                "cache.ttl_secs must be at most 604800 (7 days)".into(),
            ));
        }
        Ok(())
    }
}

fn default_cache_ttl_secs() -> u64 {
    10_800 // 3 hours
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// Host serving the package pages.
    #[serde(default = "default_upstream_base")]
    pub base: String,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            base: default_upstream_base(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        validate_http_url("upstream.base", &self.base)
    }
}

fn default_upstream_base() -> String {
    "https://github.com".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BadgeSection {
    /// Dynamic-badge renderer endpoint.
    #[serde(default = "default_badge_base")]
    pub base: String,

    /// JSON key the renderer reads from the stats body.
    #[serde(default = "default_badge_query")]
    pub query: String,

    #[serde(default = "default_badge_style")]
    pub style: String,

    #[serde(default = "default_badge_logo")]
    pub logo: String,

    #[serde(default = "default_badge_label")]
    pub label: String,

    #[serde(default = "default_badge_color")]
    pub color: String,
}

impl Default for BadgeSection {
    fn default() -> Self {
        Self {
            base: default_badge_base(),
            query: default_badge_query(),
            style: default_badge_style(),
            logo: default_badge_logo(),
            label: default_badge_label(),
            color: default_badge_color(),
        }
    }
}

impl BadgeSection {
    pub fn validate(&self) -> Result<()> {
        validate_http_url("badge.base", &self.base)?;
        if self.query.is_empty() {
            return Err(PullShieldError::BadRequest(
                "badge.query must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_badge_base() -> String {
    "https://img.shields.io/badge/dynamic/json".into()
}
fn default_badge_query() -> String {
    "downloadCount".into()
}
fn default_badge_style() -> String {
    "for-the-badge".into()
}
fn default_badge_logo() -> String {
    "docker".into()
}
fn default_badge_label() -> String {
    "Docker Pulls".into()
}
fn default_badge_color() -> String {
    "2496ed".into()
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let parsed = Url::parse(value)
        .map_err(|e| PullShieldError::BadRequest(format!("{field} is not a valid url: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(PullShieldError::BadRequest(format!(
            "{field} must use http or https"
        )));
    }
    Ok(())
}
