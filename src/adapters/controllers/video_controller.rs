use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::HeaderMap,
    Json,
};
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    adapters::{
        controllers::{bearer_token, normalize_media_type, signed_video_url},
        dto::video_dto::VideoResponse,
        state::AppState,
    },
    application::{
        error::ApplicationError, repositories::video_repository::VideoRepository,
        services::ObjectStorage, services::TokenValidator,
    },
    domain::models::{asset::asset_key, reference::StoredReference},
};

/// Upper bound on an upload request body.
pub const VIDEO_UPLOAD_LIMIT: usize = 10 << 30; // 10 GiB

/// The one media type accepted for video uploads.
const VIDEO_MEDIA_TYPE: &str = "video/mp4";

pub struct VideoController;

impl VideoController {
    /// POST /api/videos/{videoID}/upload
    ///
    /// Runs the whole pipeline: authorize, stage the multipart stream to
    /// a temp file, probe the aspect ratio, rewrite for faststart,
    /// upload to the object store, persist the compact reference, and
    /// respond with the record carrying a fresh presigned URL. Both temp
    /// files are dropped on every exit path.
    pub async fn upload_video(
        State(app_state): State<AppState>,
        Path(video_id): Path<Uuid>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> Result<Json<VideoResponse>, ApplicationError> {
        let token = bearer_token(&headers)?;
        let user_id = app_state.token_validator.validate(token)?;

        info!("uploading video {} by user {}", video_id, user_id);

        let mut video = app_state.video_repository.get_video(video_id).await?;
        if video.user_id != user_id {
            warn!(
                "user {} attempted to upload to video {} owned by {}",
                user_id, video_id, video.user_id
            );
            return Err(ApplicationError::Unauthorized);
        }

        // Stage the file part to local disk. The NamedTempFile guard
        // removes it when this function returns, success or not.
        let mut staged: Option<tempfile::NamedTempFile> = None;
        while let Some(mut field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart body: {}", e);
            ApplicationError::BadRequest("Invalid multipart body".to_string())
        })? {
            if field.name() != Some("video") {
                continue;
            }

            let media_type = normalize_media_type(field.content_type().unwrap_or(""));
            if media_type != VIDEO_MEDIA_TYPE {
                return Err(ApplicationError::BadRequest(
                    "Invalid file type, only MP4 is allowed".to_string(),
                ));
            }

            let tmp = tempfile::Builder::new()
                .prefix("upload-")
                .suffix(".mp4")
                .tempfile()
                .map_err(|e| {
                    ApplicationError::InternalError(format!("Unable to create temp file: {}", e))
                })?;

            let mut out = tokio::fs::File::create(tmp.path()).await.map_err(|e| {
                ApplicationError::InternalError(format!("Unable to open temp file: {}", e))
            })?;

            while let Some(chunk) = field.chunk().await.map_err(|e| {
                warn!("Upload stream aborted: {}", e);
                ApplicationError::BadRequest("Invalid multipart body".to_string())
            })? {
                out.write_all(&chunk).await.map_err(|e| {
                    ApplicationError::InternalError(format!(
                        "Could not write file to disk: {}",
                        e
                    ))
                })?;
            }

            out.flush().await.map_err(|e| {
                ApplicationError::InternalError(format!("Could not write file to disk: {}", e))
            })?;

            staged = Some(tmp);
            break;
        }

        let staged = staged.ok_or_else(|| {
            ApplicationError::BadRequest("Missing 'video' form field".to_string())
        })?;

        // Probe and transcode read the file by path, not by handle.
        let aspect = app_state.media_probe.aspect_class(staged.path()).await?;

        let processed_path = app_state.transcoder.faststart(staged.path()).await?;
        // Guard the transcoder output the same way as the staged file.
        let processed = tempfile::TempPath::from_path(processed_path);

        let key = asset_key(aspect.key_prefix(), VIDEO_MEDIA_TYPE);
        let bucket = app_state.config.s3_bucket.clone();

        app_state
            .object_storage
            .upload_file(&bucket, &key, &processed, VIDEO_MEDIA_TYPE)
            .await?;

        video.video_url = Some(StoredReference::new(bucket.clone(), key.clone()).encode());
        if let Err(e) = app_state.video_repository.update_video(&video).await {
            // The object is now orphaned in the store; no compensating
            // delete is attempted.
            error!(
                "record update failed after upload, object {}/{} is orphaned",
                bucket, key
            );
            return Err(e);
        }

        let signed = signed_video_url(&video, &*app_state.object_storage).await?;
        Ok(Json(VideoResponse::from_video(video, signed)))
    }

    /// GET /api/videos/{videoID}
    pub async fn get_video(
        State(video_repository): State<Arc<dyn VideoRepository>>,
        State(token_validator): State<Arc<dyn TokenValidator>>,
        State(object_storage): State<Arc<dyn ObjectStorage>>,
        Path(video_id): Path<Uuid>,
        headers: HeaderMap,
    ) -> Result<Json<VideoResponse>, ApplicationError> {
        let token = bearer_token(&headers)?;
        let user_id = token_validator.validate(token)?;

        let video = video_repository.get_video(video_id).await?;
        if video.user_id != user_id {
            return Err(ApplicationError::Unauthorized);
        }

        let signed = signed_video_url(&video, &*object_storage).await?;
        Ok(Json(VideoResponse::from_video(video, signed)))
    }
}
