//! Adapters - Concrete implementations of ports and the inbound HTTP surface.

pub mod aws;
pub mod http;
