use crate::domain::events::{TaskEvent, TaskNotification};
use crate::domain::image::{object_url, task_image_key, ImageEntry, UploadedImage};
use crate::domain::now_millis;
use crate::domain::task::{NewTask, Task};
use crate::ports::notifier::Notifier;
use crate::ports::queue::EventQueue;
use crate::ports::repository::TaskRepository;
use crate::ports::storage::ObjectStore;
use std::error::Error;

/// Content type applied to decoded inline image payloads.
const INLINE_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

pub struct GatewayService<S, R, Q, N> {
    storage: S,
    repo: R,
    queue: Q,
    notifier: N,
    public_base_url: String,
    bucket: String,
}

impl<S, R, Q, N> GatewayService<S, R, Q, N>
where
    S: ObjectStore,
    R: TaskRepository,
    Q: EventQueue,
    N: Notifier,
{
    pub fn new(
        storage: S,
        repo: R,
        queue: Q,
        notifier: N,
        public_base_url: String,
        bucket: String,
    ) -> Self {
        Self {
            storage,
            repo,
            queue,
            notifier,
            public_base_url,
            bucket,
        }
    }

    fn locator(&self, key: &str) -> String {
        object_url(&self.public_base_url, &self.bucket, key)
    }

    /// Write one object and return its public locator and key.
    pub async fn store_image(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedImage, Box<dyn Error + Send + Sync>> {
        let size = body.len();
        self.storage.put_object(key, body, content_type).await?;
        tracing::info!(key, size, "image stored");

        Ok(UploadedImage {
            image_url: self.locator(key),
            key: key.to_string(),
        })
    }

    /// Create one task: optional image upload, document-store put, queue
    /// send, topic publish. The first failure aborts the remaining steps;
    /// completed side effects are not rolled back.
    pub async fn create_task(&self, input: NewTask) -> Result<Task, Box<dyn Error + Send + Sync>> {
        let now = now_millis();

        // 1. Upload the embedded image, if any
        let image_url = match input.image {
            Some(body) => {
                let key = task_image_key(&input.id, now);
                let uploaded = self
                    .store_image(&key, body, INLINE_IMAGE_CONTENT_TYPE)
                    .await?;
                Some(uploaded.image_url)
            }
            None => None,
        };

        // 2. Put the task item (last write wins)
        let task = Task {
            id: input.id,
            title: input.title,
            description: input.description,
            image_url,
            location: input.location,
            created_at: input.created_at.unwrap_or(now),
            updated_at: now,
        };
        self.repo.put_task(&task).await?;

        // 3. Task-created event to the queue
        self.queue
            .send_event(TaskEvent::created(&task.id, now_millis()))
            .await?;

        // 4. Task-created notification to the topic
        self.notifier
            .publish(TaskNotification::created(&task.id, &task.title, now_millis()))
            .await?;

        tracing::info!(task_id = %task.id, "task created");
        Ok(task)
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>> {
        self.repo.scan_tasks().await
    }

    /// List every bucket entry, each augmented with its public locator.
    pub async fn list_images(&self) -> Result<Vec<ImageEntry>, Box<dyn Error + Send + Sync>> {
        let objects = self.storage.list_objects().await?;
        Ok(objects
            .into_iter()
            .map(|object| ImageEntry {
                url: self.locator(&object.key),
                key: object.key,
                size: object.size,
                last_modified: object.last_modified,
                etag: object.etag,
            })
            .collect())
    }
}
