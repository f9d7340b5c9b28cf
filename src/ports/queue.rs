use crate::domain::events::TaskEvent;
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventQueue: Send + Sync {
    /// Send one task event to the queue
    async fn send_event(&self, event: TaskEvent) -> Result<(), Box<dyn Error + Send + Sync>>;
}
