//! JSON response contracts (stable API).
//!
//! Field names and key sets mirror what badge renderers already consume:
//! the success body always carries the (nullable) count fields plus the
//! probed URL list; the error body carries no count keys at all, just the
//! identity plus the failure message.

use serde::Serialize;

/// The `repo` object embedded in both bodies.
#[derive(Debug, Clone, Serialize)]
pub struct RepoIdentity {
    /// The resolved source page (first successful URL on success, first
    /// candidate on failure).
    pub url: String,
    /// All successfully probed URLs; absent on the error body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Vec<String>>,
    pub owner: String,
    pub repo: Option<String>,
    pub package: String,
}

/// 200 body. `success` is false when the pattern missed (counts null).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub download_count: Option<String>,
    pub download_count_raw: Option<u64>,
    pub repo: RepoIdentity,
    pub success: bool,
    /// ISO-8601 UTC, millisecond precision.
    pub timestamp: String,
}

/// 500 body: every candidate source failed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub repo: RepoIdentity,
    pub success: bool,
    pub error: String,
    pub timestamp: String,
}
