use async_trait::async_trait;
use sqlx::query_as;
use uuid::Uuid;

use crate::{
    application::{error::ApplicationError, repositories::video_repository::VideoRepository},
    domain::models::video::Video,
};

pub struct PgVideoRepository {
    pool: sqlx::PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn get_video(&self, id: Uuid) -> Result<Video, ApplicationError> {
        let query = r#"
            SELECT id, created_at, updated_at, title, description,
                   thumbnail_url, video_url, user_id
            FROM videos
            WHERE id = $1
        "#;

        let video: Option<Video> = query_as::<_, Video>(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        video.ok_or(ApplicationError::NotFound)
    }

    async fn update_video(&self, video: &Video) -> Result<(), ApplicationError> {
        let query = r#"
            UPDATE videos
            SET title = $2, description = $3, thumbnail_url = $4,
                video_url = $5, updated_at = now()
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(video.id)
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.thumbnail_url)
            .bind(&video.video_url)
            .execute(&self.pool)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ApplicationError::NotFound);
        }

        Ok(())
    }
}
