//! Download-count extraction and multi-source aggregation.
//!
//! Two independent halves:
//! - `extract`: the anchored HTML pattern that pulls a download count out of
//!   a single package page.
//! - `aggregate`: combines per-source outcomes (pages and failures) into one
//!   `PackageStats`, with no knowledge of HTTP.
//!
//! Keeping the pattern in one narrowly-scoped unit means upstream markup
//! drift only ever touches `extract`.

pub mod aggregate;
pub mod extract;

pub use aggregate::{aggregate_sources, format_grouped, PackageStats, SourceFailure, SourcePage};
pub use extract::{PageStats, StatsExtractor};
