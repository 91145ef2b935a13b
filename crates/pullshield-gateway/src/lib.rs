//! pullshield gateway library entry.
//!
//! This crate wires the router, handlers, upstream fetching, response cache,
//! and config into a cohesive HTTP service. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod cache;
pub mod config;
pub mod fetch;
pub mod handlers;
pub mod router;
