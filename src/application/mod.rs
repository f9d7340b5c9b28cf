//! Application services - use-case orchestration over the ports.

pub mod gateway;
