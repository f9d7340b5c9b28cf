use crate::domain::image::StoredObject;
use crate::ports::storage::ObjectStore;
use async_trait::async_trait;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use std::error::Error;

/// S3Adapter implements ObjectStore for AWS S3.
#[derive(Clone)]
pub struct S3Adapter {
    client: Client,
    bucket: String,
}

impl S3Adapter {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectStore for S3Adapter {
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let byte_stream = aws_sdk_s3::primitives::ByteStream::from(body);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(byte_stream)
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await?;
        Ok(())
    }

    async fn list_objects(&self) -> Result<Vec<StoredObject>, Box<dyn Error + Send + Sync>> {
        let resp = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .send()
            .await?;

        let objects = resp
            .contents
            .unwrap_or_default()
            .into_iter()
            .map(|object| StoredObject {
                key: object.key.unwrap_or_default(),
                size: object.size.unwrap_or_default(),
                last_modified: object.last_modified.map(|ts| ts.to_string()),
                etag: object.e_tag,
            })
            .collect();
        Ok(objects)
    }
}
