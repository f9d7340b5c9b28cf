use crate::domain::task::Task;
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Put one task item, replacing any existing item with the same id
    async fn put_task(&self, task: &Task) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Full, unfiltered scan of the task table (single page, no pagination)
    async fn scan_tasks(&self) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>>;
}
