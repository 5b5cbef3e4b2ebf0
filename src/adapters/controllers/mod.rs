pub mod thumbnail_controller;
pub mod video_controller;

use std::time::Duration;

use axum::http::{header, HeaderMap};

use crate::{
    application::{error::ApplicationError, services::ObjectStorage},
    domain::models::{reference::StoredReference, video::Video},
};

/// Window during which a signed retrieval URL stays valid. URLs are
/// recomputed on every read, never stored.
pub const SIGNED_URL_TTL: Duration = Duration::from_secs(3600);

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApplicationError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApplicationError::Unauthorized)
}

/// Expand a record's stored `"<bucket>,<key>"` reference into a fresh
/// presigned URL. A record with no reference yields `None`.
pub async fn signed_video_url(
    video: &Video,
    object_storage: &dyn ObjectStorage,
) -> Result<Option<String>, ApplicationError> {
    let Some(raw) = &video.video_url else {
        return Ok(None);
    };

    let reference = StoredReference::decode(raw)
        .map_err(|e| ApplicationError::InternalError(e.to_string()))?;

    let url = object_storage
        .signed_url(&reference.bucket, &reference.key, SIGNED_URL_TTL)
        .await?;

    Ok(Some(url))
}

/// Strip parameters from a declared media type: `video/mp4; codecs=avc1`
/// becomes `video/mp4`.
pub fn normalize_media_type(declared: &str) -> String {
    declared
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
