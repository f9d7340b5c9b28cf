use crate::domain::events::TaskNotification;
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish one notification to the topic
    async fn publish(
        &self,
        notification: TaskNotification,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}
