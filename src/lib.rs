//! Feira - Shopping Task Gateway
//!
//! A thin HTTP gateway that accepts image uploads and task records and
//! forwards them to four backing services: S3 (image bytes), DynamoDB (task
//! records), SQS (task-created events), and SNS (notifications).
//!
//! Hexagonal Architecture:
//! - domain/: Pure logic (task records, image keys, event payloads)
//! - ports/: Trait definitions for the outbound collaborators
//! - adapters/: AWS implementations and the inbound HTTP surface
//! - application/: Gateway service, generic over the ports
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports for convenience
pub use application::gateway::GatewayService;
pub use config::AppConfig;
