//! Top-level facade crate for pullshield.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use pullshield_core::*;
}

pub mod gateway {
    pub use pullshield_gateway::*;
}
