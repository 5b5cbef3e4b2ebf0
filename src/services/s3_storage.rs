use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use tracing::info;

use crate::{
    application::{error::ApplicationError, services::ObjectStorage},
    services::error::StorageError,
};

/// S3-backed object storage. Holds only the SDK client, which pools
/// connections internally, so one instance serves all requests.
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStorage {
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), ApplicationError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| StorageError::UploadFailed(format!("cannot read {:?}: {}", path, e)))?;

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        info!("uploaded object to s3://{}/{}", bucket, key);
        Ok(())
    }

    async fn signed_url(
        &self,
        bucket: &str,
        key: &str,
        ttl: Duration,
    ) -> Result<String, ApplicationError> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| StorageError::SigningFailed(e.to_string()))?;

        // The signature is computed locally; no network round trip.
        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::SigningFailed(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }
}
