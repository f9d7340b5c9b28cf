//! Inbound HTTP adapter: router, handlers, DTOs, and the JSON error envelope.

pub mod error;
pub mod handlers;
pub mod types;

use crate::application::gateway::GatewayService;
use crate::ports::notifier::Notifier;
use crate::ports::queue::EventQueue;
use crate::ports::repository::TaskRepository;
use crate::ports::storage::ObjectStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the gateway route table over any set of port implementations.
pub fn router<S, R, Q, N>(gateway: Arc<GatewayService<S, R, Q, N>>) -> Router
where
    S: ObjectStore + 'static,
    R: TaskRepository + 'static,
    Q: EventQueue + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/upload/base64", post(handlers::upload_base64))
        .route("/api/upload/multipart", post(handlers::upload_multipart))
        .route(
            "/api/tasks",
            post(handlers::create_task).get(handlers::list_tasks),
        )
        .route("/api/images", get(handlers::list_images))
        .with_state(gateway)
}
