use serde::{Deserialize, Serialize};

/// Message sent to the task queue after a task record is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEvent {
    pub action: String,
    pub task_id: String,
    pub timestamp: i64,
}

impl TaskEvent {
    pub fn created(task_id: &str, timestamp: i64) -> Self {
        Self {
            action: "task_created".to_string(),
            task_id: task_id.to_string(),
            timestamp,
        }
    }
}

/// Notification published to the topic after a task record is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNotification {
    pub event: String,
    pub task_id: String,
    pub title: String,
    pub timestamp: i64,
}

impl TaskNotification {
    /// Subject line attached to task-created notifications.
    pub const CREATED_SUBJECT: &'static str = "New task created";

    pub fn created(task_id: &str, title: &str, timestamp: i64) -> Self {
        Self {
            event: "task_created".to_string(),
            task_id: task_id.to_string(),
            title: title.to_string(),
            timestamp,
        }
    }
}
