use axum::extract::FromRef;
use std::sync::Arc;

use crate::{
    application::{
        repositories::video_repository::VideoRepository,
        services::{MediaProbe, ObjectStorage, TokenValidator, Transcoder},
    },
    domain::config::AppConfig,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub video_repository: Arc<dyn VideoRepository>,
    pub token_validator: Arc<dyn TokenValidator>,
    pub object_storage: Arc<dyn ObjectStorage>,
    pub media_probe: Arc<dyn MediaProbe>,
    pub transcoder: Arc<dyn Transcoder>,
}
