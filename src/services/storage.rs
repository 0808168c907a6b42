use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

/// Narrow view of the object store used by the upload path.
///
/// Implementations must be safe to share across requests and across the
/// concurrent writes of a single batch.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Writes `body` under `key`, overwriting any existing object.
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> Result<()>;

    fn bucket(&self) -> &str;
}

pub struct S3StorageService {
    client: Client,
    bucket: String,
}

impl S3StorageService {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl StorageService for S3StorageService {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> Result<()> {
        let res = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await;

        if let Err(e) = res {
            tracing::error!(
                "S3 put_object failed: bucket={}, key={}, error={}",
                self.bucket,
                key,
                DisplayErrorContext(&e)
            );
            // Prefer the store's own message ("Access Denied") over the SDK wrapper text.
            let message = e
                .as_service_error()
                .and_then(|se| se.message())
                .map(str::to_owned)
                .unwrap_or_else(|| DisplayErrorContext(&e).to_string());
            return Err(anyhow::anyhow!(message));
        }
        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
