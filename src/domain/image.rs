use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

/// Matches the `data:image/...;base64,` prefix clients embed in inline uploads.
static DATA_URI_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^data:image/\w+;base64,").unwrap());

/// An entry from the bucket listing, before the public locator is attached.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub size: i64,
    pub last_modified: Option<String>,
    pub etag: Option<String>,
}

/// A bucket entry as returned to clients, augmented with its public locator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    pub key: String,
    pub size: i64,
    pub last_modified: Option<String>,
    pub etag: Option<String>,
    pub url: String,
}

/// Result of a single object-store write.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub image_url: String,
    pub key: String,
}

/// Decode an inline image payload, stripping the data-URI prefix if present.
pub fn decode_base64_image(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let stripped = DATA_URI_PREFIX.replace(encoded, "");
    STANDARD.decode(stripped.as_bytes())
}

/// Key for an inline upload: `images/<taskId|uuid>/<fileName|millis>.jpg`.
pub fn inline_image_key(task_id: Option<&str>, file_name: Option<&str>, now_ms: i64) -> String {
    let owner = owner_segment(task_id);
    match file_name.filter(|name| !name.is_empty()) {
        Some(name) => format!("images/{}/{}.jpg", owner, name),
        None => format!("images/{}/{}.jpg", owner, now_ms),
    }
}

/// Key for a multipart upload: `images/<taskId|uuid>/<millis>_<fileName>`.
pub fn multipart_image_key(task_id: Option<&str>, file_name: &str, now_ms: i64) -> String {
    format!("images/{}/{}_{}", owner_segment(task_id), now_ms, file_name)
}

/// Key for an image embedded in a create-task request: `images/<taskId>/<millis>.jpg`.
pub fn task_image_key(task_id: &str, now_ms: i64) -> String {
    format!("images/{}/{}.jpg", task_id, now_ms)
}

/// Public locator for a stored object: `<base>/<bucket>/<key>`.
pub fn object_url(public_base_url: &str, bucket: &str, key: &str) -> String {
    format!("{}/{}/{}", public_base_url, bucket, key)
}

// An empty task id from a client is treated as absent.
fn owner_segment(task_id: Option<&str>) -> String {
    match task_id.filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => Uuid::new_v4().to_string(),
    }
}
