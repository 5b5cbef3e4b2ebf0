mod adapters;
mod application;
mod domain;
mod services;

use std::sync::Arc;

use adapters::{
    controllers::{
        thumbnail_controller::{ThumbnailController, THUMBNAIL_UPLOAD_LIMIT},
        video_controller::{VideoController, VIDEO_UPLOAD_LIMIT},
    },
    repositories::PgVideoRepository,
    state::AppState,
};
use application::{
    repositories::video_repository::VideoRepository,
    services::{MediaProbe, ObjectStorage, TokenValidator, Transcoder},
};
use aws_config::{BehaviorVersion, Region};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use domain::config::AppConfig;
use services::{FfmpegTranscoder, FfprobeMediaProbe, JwtTokenValidator, S3ObjectStorage};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

async fn hello_world() -> &'static str {
    "Hello, world!"
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Initialize AWS SDK crypto provider (required for aws-sdk-s3)
    // This must be called before any AWS SDK operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let config = AppConfig::from_env();

    tracing::info!("Starting vod-service on port {}", config.port);

    // Configure CORS
    let cors = if let Ok(allowed_origins) = std::env::var("CORS_ALLOWED_ORIGINS") {
        // Parse comma-separated origins
        let origins: Vec<_> = allowed_origins
            .split(',')
            .map(|s| s.trim().parse().expect("Invalid CORS origin"))
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Allow all origins if not specified (only for development)
        CorsLayer::permissive()
    };

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.");
    tracing::info!("Database connection established");

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await;
    let s3_client = aws_sdk_s3::Client::new(&aws_config);

    // Thumbnails are served straight from this directory.
    tokio::fs::create_dir_all(&config.assets_root)
        .await
        .expect("Failed to create assets directory");
    let assets_root = config.assets_root.clone();
    let port = config.port;
    let token_validator = JwtTokenValidator::new(&config.jwt_secret);

    let app_state = AppState {
        config: Arc::new(config),
        video_repository: Arc::new(PgVideoRepository::new(pool)) as Arc<dyn VideoRepository>,
        token_validator: Arc::new(token_validator) as Arc<dyn TokenValidator>,
        object_storage: Arc::new(S3ObjectStorage::new(s3_client)) as Arc<dyn ObjectStorage>,
        media_probe: Arc::new(FfprobeMediaProbe) as Arc<dyn MediaProbe>,
        transcoder: Arc::new(FfmpegTranscoder) as Arc<dyn Transcoder>,
    };

    let router = Router::new()
        .route("/", get(hello_world))
        .route(
            "/api/videos/{video_id}/upload",
            post(VideoController::upload_video).layer(DefaultBodyLimit::max(VIDEO_UPLOAD_LIMIT)),
        )
        .route("/api/videos/{video_id}", get(VideoController::get_video))
        .route(
            "/api/thumbnails/{video_id}",
            post(ThumbnailController::upload_thumbnail)
                .layer(DefaultBodyLimit::max(THUMBNAIL_UPLOAD_LIMIT)),
        )
        .nest_service("/assets", ServeDir::new(assets_root))
        .layer(cors)
        .with_state(app_state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
