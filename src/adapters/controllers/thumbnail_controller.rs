use axum::{
    extract::{Multipart, Path, State},
    http::HeaderMap,
    Json,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    adapters::{
        controllers::{bearer_token, normalize_media_type, signed_video_url},
        dto::video_dto::VideoResponse,
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::asset::{asset_name, is_image},
};

/// Upper bound on a thumbnail request body.
pub const THUMBNAIL_UPLOAD_LIMIT: usize = 10 << 20; // 10 MiB

pub struct ThumbnailController;

impl ThumbnailController {
    /// POST /api/thumbnails/{videoID}
    ///
    /// Stores the image in the local assets directory and points the
    /// record's thumbnail URL at the statically served copy.
    pub async fn upload_thumbnail(
        State(app_state): State<AppState>,
        Path(video_id): Path<Uuid>,
        headers: HeaderMap,
        mut multipart: Multipart,
    ) -> Result<Json<VideoResponse>, ApplicationError> {
        let token = bearer_token(&headers)?;
        let user_id = app_state.token_validator.validate(token)?;

        info!("uploading thumbnail for video {} by user {}", video_id, user_id);

        let mut video = app_state.video_repository.get_video(video_id).await?;
        if video.user_id != user_id {
            warn!(
                "user {} attempted to set a thumbnail on video {} owned by {}",
                user_id, video_id, video.user_id
            );
            return Err(ApplicationError::Unauthorized);
        }

        let mut part: Option<(Vec<u8>, String)> = None;
        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart body: {}", e);
            ApplicationError::BadRequest("Invalid multipart body".to_string())
        })? {
            if field.name() != Some("thumbnail") {
                continue;
            }

            let media_type = normalize_media_type(field.content_type().unwrap_or(""));
            if !is_image(&media_type) {
                return Err(ApplicationError::BadRequest(
                    "Invalid file type, only JPEG and PNG are allowed".to_string(),
                ));
            }

            let bytes = field.bytes().await.map_err(|e| {
                warn!("Upload stream aborted: {}", e);
                ApplicationError::BadRequest("Invalid multipart body".to_string())
            })?;

            part = Some((bytes.to_vec(), media_type));
            break;
        }

        let (bytes, media_type) = part.ok_or_else(|| {
            ApplicationError::BadRequest("Missing 'thumbnail' form field".to_string())
        })?;

        let name = asset_name(&media_type);
        let disk_path = app_state.config.assets_root.join(&name);
        tokio::fs::write(&disk_path, &bytes).await.map_err(|e| {
            ApplicationError::InternalError(format!("Could not write thumbnail to disk: {}", e))
        })?;

        video.thumbnail_url = Some(format!(
            "http://localhost:{}/assets/{}",
            app_state.config.port, name
        ));
        app_state.video_repository.update_video(&video).await?;

        let signed = signed_video_url(&video, &*app_state.object_storage).await?;
        Ok(Json(VideoResponse::from_video(video, signed)))
    }
}
