use super::error::ApiError;
use super::types::{
    CreateTaskRequest, HealthResponse, ImagesResponse, TaskResponse, TasksResponse,
    UploadBase64Request, UploadResponse,
};
use crate::application::gateway::GatewayService;
use crate::domain::image::{decode_base64_image, inline_image_key, multipart_image_key};
use crate::domain::now_millis;
use crate::domain::task::NewTask;
use crate::ports::notifier::Notifier;
use crate::ports::queue::EventQueue;
use crate::ports::repository::TaskRepository;
use crate::ports::storage::ObjectStore;
use axum::extract::{Multipart, State};
use axum::Json;
use std::sync::Arc;

struct FilePart {
    file_name: String,
    content_type: String,
    body: Vec<u8>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Backend is running",
    })
}

pub async fn upload_base64<S, R, Q, N>(
    State(gateway): State<Arc<GatewayService<S, R, Q, N>>>,
    Json(request): Json<UploadBase64Request>,
) -> Result<Json<UploadResponse>, ApiError>
where
    S: ObjectStore,
    R: TaskRepository,
    Q: EventQueue,
    N: Notifier,
{
    let encoded = request
        .image_base64
        .as_deref()
        .filter(|payload| !payload.is_empty())
        .ok_or_else(|| ApiError::validation("Image data is required"))?;
    let body = decode_base64_image(encoded)
        .map_err(|_| ApiError::validation("Invalid base64 image data"))?;

    let key = inline_image_key(
        request.task_id.as_deref(),
        request.file_name.as_deref(),
        now_millis(),
    );
    let uploaded = gateway
        .store_image(&key, body, "image/jpeg")
        .await
        .map_err(|source| ApiError::backing("Failed to upload image", source))?;

    Ok(Json(UploadResponse {
        success: true,
        message: "Image uploaded successfully",
        image_url: uploaded.image_url,
        key: uploaded.key,
    }))
}

pub async fn upload_multipart<S, R, Q, N>(
    State(gateway): State<Arc<GatewayService<S, R, Q, N>>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError>
where
    S: ObjectStore,
    R: TaskRepository,
    Q: EventQueue,
    N: Notifier,
{
    let mut task_id = None;
    let mut file: Option<FilePart> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::validation("Invalid multipart form data"))?
    {
        match field.name() {
            Some("taskId") => {
                task_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|_| ApiError::validation("Invalid multipart form data"))?,
                );
            }
            Some("image") => {
                let file_name = field.file_name().unwrap_or("file").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let body = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::validation("Invalid multipart form data"))?;
                file = Some(FilePart {
                    file_name,
                    content_type,
                    body: body.to_vec(),
                });
            }
            _ => continue,
        }
    }

    let file = file.ok_or_else(|| ApiError::validation("No file uploaded"))?;
    let key = multipart_image_key(task_id.as_deref(), &file.file_name, now_millis());
    let uploaded = gateway
        .store_image(&key, file.body, &file.content_type)
        .await
        .map_err(|source| ApiError::backing("Failed to upload image", source))?;

    Ok(Json(UploadResponse {
        success: true,
        message: "Image uploaded successfully",
        image_url: uploaded.image_url,
        key: uploaded.key,
    }))
}

pub async fn create_task<S, R, Q, N>(
    State(gateway): State<Arc<GatewayService<S, R, Q, N>>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError>
where
    S: ObjectStore,
    R: TaskRepository,
    Q: EventQueue,
    N: Notifier,
{
    let image = match request
        .image_base64
        .as_deref()
        .filter(|payload| !payload.is_empty())
    {
        Some(encoded) => Some(
            decode_base64_image(encoded)
                .map_err(|_| ApiError::validation("Invalid base64 image data"))?,
        ),
        None => None,
    };

    let task = gateway
        .create_task(NewTask {
            id: request.id,
            title: request.title,
            description: request.description,
            image,
            location: request.location,
            created_at: request.created_at,
        })
        .await
        .map_err(|source| ApiError::backing("Failed to save task", source))?;

    Ok(Json(TaskResponse {
        success: true,
        message: "Task saved successfully",
        task,
    }))
}

pub async fn list_tasks<S, R, Q, N>(
    State(gateway): State<Arc<GatewayService<S, R, Q, N>>>,
) -> Result<Json<TasksResponse>, ApiError>
where
    S: ObjectStore,
    R: TaskRepository,
    Q: EventQueue,
    N: Notifier,
{
    let tasks = gateway
        .list_tasks()
        .await
        .map_err(|source| ApiError::backing("Failed to fetch tasks", source))?;

    Ok(Json(TasksResponse {
        success: true,
        tasks,
    }))
}

pub async fn list_images<S, R, Q, N>(
    State(gateway): State<Arc<GatewayService<S, R, Q, N>>>,
) -> Result<Json<ImagesResponse>, ApiError>
where
    S: ObjectStore,
    R: TaskRepository,
    Q: EventQueue,
    N: Notifier,
{
    let images = gateway
        .list_images()
        .await
        .map_err(|source| ApiError::backing("Failed to list images", source))?;

    Ok(Json(ImagesResponse {
        success: true,
        images,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::router;
    use crate::ports::notifier::MockNotifier;
    use crate::ports::queue::MockEventQueue;
    use crate::ports::repository::MockTaskRepository;
    use crate::ports::storage::MockObjectStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use tower::ServiceExt;

    const BASE: &str = "http://10.0.2.2:4566";
    const BUCKET: &str = "shopping-images";
    const BOUNDARY: &str = "feira-test-boundary";

    fn app(
        storage: MockObjectStore,
        repo: MockTaskRepository,
        queue: MockEventQueue,
        notifier: MockNotifier,
    ) -> Router {
        router(Arc::new(GatewayService::new(
            storage,
            repo,
            queue,
            notifier,
            BASE.to_string(),
            BUCKET.to_string(),
        )))
    }

    fn upload_only_app(storage: MockObjectStore) -> Router {
        app(
            storage,
            MockTaskRepository::new(),
            MockEventQueue::new(),
            MockNotifier::new(),
        )
    }

    fn json_request(uri: &str, payload: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    fn multipart_request(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = health().await;
        assert_eq!(response.0.status, "ok");
        assert_eq!(response.0.message, "Backend is running");
    }

    #[tokio::test]
    async fn upload_base64_without_payload_is_rejected_before_storage() {
        let mut storage = MockObjectStore::new();
        storage.expect_put_object().times(0);

        let response = upload_only_app(storage)
            .oneshot(json_request(
                "/api/upload/base64",
                serde_json::json!({"taskId": "t1"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Image data is required");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn upload_base64_stores_decoded_payload() {
        let mut storage = MockObjectStore::new();
        storage
            .expect_put_object()
            .withf(|key, body, content_type| {
                key == "images/t1/photo.jpg"
                    && *body == vec![0u8, 0, 0]
                    && content_type == "image/jpeg"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let payload = serde_json::json!({
            "imageBase64": "data:image/jpeg;base64,AAAA",
            "taskId": "t1",
            "fileName": "photo",
        });
        let response = upload_only_app(storage)
            .oneshot(json_request("/api/upload/base64", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Image uploaded successfully");
        assert_eq!(json["key"], "images/t1/photo.jpg");
        assert_eq!(
            json["imageUrl"],
            "http://10.0.2.2:4566/shopping-images/images/t1/photo.jpg"
        );
    }

    #[tokio::test]
    async fn upload_base64_rejects_malformed_payload_before_storage() {
        let mut storage = MockObjectStore::new();
        storage.expect_put_object().times(0);

        let response = upload_only_app(storage)
            .oneshot(json_request(
                "/api/upload/base64",
                serde_json::json!({"imageBase64": "not base64!!"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Invalid base64 image data");
    }

    #[tokio::test]
    async fn upload_base64_surfaces_storage_failure() {
        let mut storage = MockObjectStore::new();
        storage
            .expect_put_object()
            .times(1)
            .returning(|_, _, _| Err("bucket missing".into()));

        let payload = serde_json::json!({"imageBase64": "AAAA"});
        let response = upload_only_app(storage)
            .oneshot(json_request("/api/upload/base64", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Failed to upload image");
        assert_eq!(json["details"], "bucket missing");
    }

    #[tokio::test]
    async fn upload_multipart_without_file_is_rejected_before_storage() {
        let mut storage = MockObjectStore::new();
        storage.expect_put_object().times(0);

        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"taskId\"\r\n\r\nt1\r\n--{BOUNDARY}--\r\n"
        );
        let response = upload_only_app(storage)
            .oneshot(multipart_request("/api/upload/multipart", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn upload_multipart_preserves_file_name_and_content_type() {
        let mut storage = MockObjectStore::new();
        storage
            .expect_put_object()
            .withf(|key, body, content_type| {
                key.starts_with("images/t1/")
                    && key.ends_with("_cat.png")
                    && *body == b"pretend-png".to_vec()
                    && content_type == "image/png"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"taskId\"\r\n\r\nt1\r\n\
             --{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"cat.png\"\r\nContent-Type: image/png\r\n\r\npretend-png\r\n\
             --{BOUNDARY}--\r\n"
        );
        let response = upload_only_app(storage)
            .oneshot(multipart_request("/api/upload/multipart", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        let key = json["key"].as_str().unwrap();
        assert!(key.starts_with("images/t1/"));
        assert!(key.ends_with("_cat.png"));
    }

    #[tokio::test]
    async fn upload_multipart_skips_unknown_fields() {
        let mut storage = MockObjectStore::new();
        storage
            .expect_put_object()
            .withf(|key, _, _| key.ends_with("_cat.png"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nignored\r\n\
             --{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"cat.png\"\r\nContent-Type: image/png\r\n\r\npretend-png\r\n\
             --{BOUNDARY}--\r\n"
        );
        let response = upload_only_app(storage)
            .oneshot(multipart_request("/api/upload/multipart", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_task_without_image_returns_saved_task() {
        let mut storage = MockObjectStore::new();
        storage.expect_put_object().times(0);
        let mut repo = MockTaskRepository::new();
        repo.expect_put_task().times(1).returning(|_| Ok(()));
        let mut queue = MockEventQueue::new();
        queue.expect_send_event().times(1).returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier.expect_publish().times(1).returning(|_| Ok(()));

        let payload = serde_json::json!({
            "id": "t1",
            "title": "Milk",
            "description": "2%",
            "location": "store",
        });
        let response = app(storage, repo, queue, notifier)
            .oneshot(json_request("/api/tasks", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Task saved successfully");
        assert_eq!(json["task"]["id"], "t1");
        assert!(json["task"]["imageUrl"].is_null());
    }

    #[tokio::test]
    async fn create_task_failure_uses_generic_envelope() {
        let mut storage = MockObjectStore::new();
        storage.expect_put_object().times(0);
        let mut repo = MockTaskRepository::new();
        repo.expect_put_task()
            .times(1)
            .returning(|_| Err("table missing".into()));
        let mut queue = MockEventQueue::new();
        queue.expect_send_event().times(0);
        let mut notifier = MockNotifier::new();
        notifier.expect_publish().times(0);

        let payload = serde_json::json!({
            "id": "t1",
            "title": "Milk",
            "description": "2%",
            "location": "store",
        });
        let response = app(storage, repo, queue, notifier)
            .oneshot(json_request("/api/tasks", payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Failed to save task");
        assert_eq!(json["details"], "table missing");
    }

    #[tokio::test]
    async fn list_tasks_returns_empty_collection() {
        let mut repo = MockTaskRepository::new();
        repo.expect_scan_tasks().times(1).returning(|| Ok(vec![]));

        let response = app(
            MockObjectStore::new(),
            repo,
            MockEventQueue::new(),
            MockNotifier::new(),
        )
        .oneshot(
            Request::builder()
                .uri("/api/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["tasks"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn list_tasks_surfaces_scan_failure() {
        let mut repo = MockTaskRepository::new();
        repo.expect_scan_tasks()
            .times(1)
            .returning(|| Err("scan failed".into()));

        let response = app(
            MockObjectStore::new(),
            repo,
            MockEventQueue::new(),
            MockNotifier::new(),
        )
        .oneshot(
            Request::builder()
                .uri("/api/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Failed to fetch tasks");
        assert_eq!(json["details"], "scan failed");
    }

    #[tokio::test]
    async fn list_images_returns_augmented_entries() {
        let mut storage = MockObjectStore::new();
        storage.expect_list_objects().times(1).returning(|| {
            Ok(vec![crate::domain::image::StoredObject {
                key: "images/t1/1.jpg".to_string(),
                size: 42,
                last_modified: Some("2024-01-01T00:00:00Z".to_string()),
                etag: None,
            }])
        });

        let response = upload_only_app(storage)
            .oneshot(
                Request::builder()
                    .uri("/api/images")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["images"][0]["key"], "images/t1/1.jpg");
        assert_eq!(
            json["images"][0]["url"],
            "http://10.0.2.2:4566/shopping-images/images/t1/1.jpg"
        );
    }
}
