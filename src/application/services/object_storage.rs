use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::error::ApplicationError;

/// Stateless façade over the remote object store. Safe for concurrent
/// use by simultaneous upload pipelines.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a local file's contents under `bucket/key`. On failure the
    /// caller treats the object as absent; no partial visibility is
    /// assumed.
    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), ApplicationError>;

    /// Produce a time-limited retrieval URL for `bucket/key`. The
    /// signature is computed locally and must be fresh per call.
    async fn signed_url(
        &self,
        bucket: &str,
        key: &str,
        ttl: Duration,
    ) -> Result<String, ApplicationError>;
}
