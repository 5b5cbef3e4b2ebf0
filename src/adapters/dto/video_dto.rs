use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::models::video::Video;

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

impl VideoResponse {
    /// The response carries a presigned URL in place of the compact
    /// stored reference; the record itself is never exposed raw.
    pub fn from_video(video: Video, signed_video_url: Option<String>) -> Self {
        Self {
            id: video.id,
            created_at: video.created_at,
            updated_at: video.updated_at,
            title: video.title,
            description: video.description,
            thumbnail_url: video.thumbnail_url,
            video_url: signed_video_url,
            user_id: video.user_id,
        }
    }
}
