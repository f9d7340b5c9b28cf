//! Request and response bodies for the gateway routes.

use crate::domain::image::ImageEntry;
use crate::domain::task::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadBase64Request {
    pub image_base64: Option<String>,
    pub task_id: Option<String>,
    pub file_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_base64: Option<String>,
    pub location: String,
    pub created_at: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: &'static str,
    pub image_url: String,
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub success: bool,
    pub message: &'static str,
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub success: bool,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    pub success: bool,
    pub images: Vec<ImageEntry>,
}
