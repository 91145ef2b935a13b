//! Multi-source aggregation, independent of fetching.
//!
//! The gateway probes one or more candidate URLs; each probe settles into a
//! `SourcePage` (fetched and scanned) or a `SourceFailure` (non-2xx status
//! or transport error). Aggregation rules:
//! - every source failed -> hard failure carrying all reasons;
//! - any page yielded a raw count -> raw counts are summed and the formatted
//!   count is the grouped rendering of that sum;
//! - no raw counts at all -> the first page's formatted text is kept (which
//!   may be `None` when the pattern missed everywhere).

use crate::error::{PullShieldError, Result};
use crate::stats::extract::PageStats;

/// A document that was fetched and scanned.
#[derive(Debug, Clone)]
pub struct SourcePage {
    pub url: String,
    pub stats: PageStats,
}

/// A document that failed to fetch.
///
/// `reason` is pre-tagged with the URL (`"{url} -> {status-or-error}"`) so
/// joined messages stay attributable.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub url: String,
    pub reason: String,
}

/// Aggregated stats across all successfully fetched sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageStats {
    pub formatted: Option<String>,
    pub raw: Option<u64>,
    /// URLs that fetched successfully, in probe order.
    pub urls: Vec<String>,
}

/// Combine per-source outcomes into one result.
pub fn aggregate_sources(
    outcomes: Vec<std::result::Result<SourcePage, SourceFailure>>,
) -> Result<PackageStats> {
    if outcomes.is_empty() {
        return Err(PullShieldError::BadRequest("no source urls supplied".into()));
    }

    let mut pages = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(page) => pages.push(page),
            Err(failure) => {
                tracing::debug!(url = %failure.url, reason = %failure.reason, "source skipped");
                failures.push(failure);
            }
        }
    }

    if pages.is_empty() {
        let reasons = failures
            .iter()
            .map(|f| f.reason.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(PullShieldError::AllSourcesFailed(reasons));
    }

    let has_raw = pages.iter().any(|p| p.stats.raw.is_some());
    let (formatted, raw) = if has_raw {
        let sum: u64 = pages.iter().filter_map(|p| p.stats.raw).sum();
        (Some(format_grouped(sum)), Some(sum))
    } else {
        let first = pages.first().and_then(|p| p.stats.formatted.clone());
        (first, None)
    };

    Ok(PackageStats {
        formatted,
        raw,
        urls: pages.into_iter().map(|p| p.url).collect(),
    })
}

/// Render a count with thousands separators ("1234567" -> "1,234,567").
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
