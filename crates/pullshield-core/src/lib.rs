//! pullshield core: extraction, aggregation, and wire contracts.
//!
//! This crate defines the download-count extraction pattern, the multi-source
//! aggregation step, package page addressing, and the JSON response shapes
//! shared by the gateway and integration tests. It intentionally carries no
//! HTTP or runtime dependencies so the scraping logic can be exercised
//! against canned fixtures.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PullShieldError`/`Result` so a
//! malformed upstream page or a bad request never crashes the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod package;
pub mod response;
pub mod stats;

/// Shared result type.
pub use error::{PullShieldError, Result};
