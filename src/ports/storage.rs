use crate::domain::image::StoredObject;
use async_trait::async_trait;
use std::error::Error;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Write one object with the given content type and public-read visibility
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// List every object in the bucket (single page, no pagination)
    async fn list_objects(&self) -> Result<Vec<StoredObject>, Box<dyn Error + Send + Sync>>;
}
