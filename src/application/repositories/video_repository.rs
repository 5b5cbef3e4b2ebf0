use async_trait::async_trait;
use uuid::Uuid;

use crate::{application::error::ApplicationError, domain::models::video::Video};

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn get_video(&self, id: Uuid) -> Result<Video, ApplicationError>;
    async fn update_video(&self, video: &Video) -> Result<(), ApplicationError>;
}
