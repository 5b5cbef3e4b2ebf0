//! Stub collaborators for exercising the upload pipeline without a
//! database, an object store, or the external media tools.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    adapters::state::AppState,
    application::{
        error::ApplicationError,
        repositories::video_repository::VideoRepository,
        services::{MediaProbe, ObjectStorage, TokenValidator, Transcoder},
    },
    domain::{
        config::AppConfig,
        models::{aspect::AspectClass, video::Video},
    },
    services::ProcessingError,
};

pub const TEST_BUCKET: &str = "vod-videos-test";

pub fn sample_video(id: Uuid, user_id: Uuid) -> Video {
    Video {
        id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        title: "test clip".to_string(),
        description: None,
        thumbnail_url: None,
        video_url: None,
        user_id,
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        port: 8080,
        s3_bucket: TEST_BUCKET.to_string(),
        aws_region: "us-east-1".to_string(),
        jwt_secret: "test-secret".to_string(),
        database_url: String::new(),
        assets_root: std::env::temp_dir(),
    }
}

/// In-memory video repository.
pub struct StubVideoRepository {
    videos: Mutex<HashMap<Uuid, Video>>,
    fail_update: AtomicBool,
}

impl StubVideoRepository {
    pub fn with_video(video: Video) -> Self {
        let mut videos = HashMap::new();
        videos.insert(video.id, video);
        Self {
            videos: Mutex::new(videos),
            fail_update: AtomicBool::new(false),
        }
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn set_video_url(&self, id: Uuid, url: Option<String>) {
        self.videos
            .lock()
            .unwrap()
            .get_mut(&id)
            .expect("unknown video")
            .video_url = url;
    }

    pub fn stored_video(&self, id: Uuid) -> Video {
        self.videos
            .lock()
            .unwrap()
            .get(&id)
            .expect("unknown video")
            .clone()
    }
}

#[async_trait]
impl VideoRepository for StubVideoRepository {
    async fn get_video(&self, id: Uuid) -> Result<Video, ApplicationError> {
        self.videos
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ApplicationError::NotFound)
    }

    async fn update_video(&self, video: &Video) -> Result<(), ApplicationError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(ApplicationError::DatabaseError(
                "update rejected by stub".to_string(),
            ));
        }
        self.videos.lock().unwrap().insert(video.id, video.clone());
        Ok(())
    }
}

/// Resolves any bearer token to a fixed principal.
pub struct StaticTokenValidator(pub Uuid);

impl TokenValidator for StaticTokenValidator {
    fn validate(&self, _token: &str) -> Result<Uuid, ApplicationError> {
        Ok(self.0)
    }
}

/// Records uploads and issues a distinct signed URL per call.
pub struct RecordingObjectStorage {
    pub uploads: Mutex<Vec<(String, String, String)>>,
    signing_counter: AtomicUsize,
}

impl RecordingObjectStorage {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            signing_counter: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ObjectStorage for RecordingObjectStorage {
    async fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), ApplicationError> {
        // The local file must exist and be readable at upload time.
        tokio::fs::metadata(path)
            .await
            .map_err(|e| ApplicationError::InternalError(e.to_string()))?;
        self.uploads.lock().unwrap().push((
            bucket.to_string(),
            key.to_string(),
            content_type.to_string(),
        ));
        Ok(())
    }

    async fn signed_url(
        &self,
        bucket: &str,
        key: &str,
        ttl: Duration,
    ) -> Result<String, ApplicationError> {
        let n = self.signing_counter.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "https://signed.example/{}/{}?expires={}&sig={}",
            bucket,
            key,
            ttl.as_secs(),
            n
        ))
    }
}

/// Returns a canned aspect class, or a probe error when `None` (as if
/// the file had no media streams). Records every probed path.
pub struct StubMediaProbe {
    aspect: Option<AspectClass>,
    pub seen: Mutex<Vec<PathBuf>>,
}

impl StubMediaProbe {
    pub fn new(aspect: Option<AspectClass>) -> Self {
        Self {
            aspect,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl MediaProbe for StubMediaProbe {
    async fn aspect_class(&self, path: &Path) -> Result<AspectClass, ApplicationError> {
        self.seen.lock().unwrap().push(path.to_path_buf());
        match self.aspect {
            Some(aspect) => Ok(aspect),
            None => Err(ProcessingError::Probe("no media streams found".to_string()).into()),
        }
    }
}

/// Copies the input instead of remuxing it, with the production output
/// path convention. Records every output path.
pub struct CopyTranscoder {
    pub outputs: Mutex<Vec<PathBuf>>,
}

impl CopyTranscoder {
    pub fn new() -> Self {
        Self {
            outputs: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Transcoder for CopyTranscoder {
    async fn faststart(&self, input: &Path) -> Result<PathBuf, ApplicationError> {
        let mut output = input.as_os_str().to_owned();
        output.push(".processing");
        let output = PathBuf::from(output);
        tokio::fs::copy(input, &output)
            .await
            .map_err(|e| ApplicationError::InternalError(e.to_string()))?;
        self.outputs.lock().unwrap().push(output.clone());
        Ok(output)
    }
}

/// One video record, its owner, and stub collaborators wired into an
/// `AppState`. Stubs stay accessible for assertions after requests run.
pub struct TestHarness {
    pub video_id: Uuid,
    pub owner: Uuid,
    pub requester: Uuid,
    pub repository: Arc<StubVideoRepository>,
    pub storage: Arc<RecordingObjectStorage>,
    pub probe: Arc<StubMediaProbe>,
    pub transcoder: Arc<CopyTranscoder>,
    pub config: Arc<AppConfig>,
}

impl TestHarness {
    pub fn new(aspect: Option<AspectClass>) -> Self {
        let owner = Uuid::new_v4();
        let video_id = Uuid::new_v4();
        Self {
            video_id,
            owner,
            requester: owner,
            repository: Arc::new(StubVideoRepository::with_video(sample_video(
                video_id, owner,
            ))),
            storage: Arc::new(RecordingObjectStorage::new()),
            probe: Arc::new(StubMediaProbe::new(aspect)),
            transcoder: Arc::new(CopyTranscoder::new()),
            config: Arc::new(test_config()),
        }
    }

    pub fn with_assets_root(mut self, assets_root: PathBuf) -> Self {
        let mut config = (*self.config).clone();
        config.assets_root = assets_root;
        self.config = Arc::new(config);
        self
    }

    pub fn state(&self) -> AppState {
        AppState {
            config: self.config.clone(),
            video_repository: self.repository.clone(),
            token_validator: Arc::new(StaticTokenValidator(self.requester)),
            object_storage: self.storage.clone(),
            media_probe: self.probe.clone(),
            transcoder: self.transcoder.clone(),
        }
    }
}
