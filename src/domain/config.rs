use std::path::PathBuf;

/// Service configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub s3_bucket: String,
    pub aws_region: String,
    pub jwt_secret: String,
    pub database_url: String,
    pub assets_root: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16");

        let s3_bucket =
            std::env::var("S3_BUCKET").expect("ERROR: S3_BUCKET environment variable must be set");

        let aws_region = std::env::var("AWS_REGION")
            .expect("ERROR: AWS_REGION environment variable must be set");

        let jwt_secret = std::env::var("JWT_SECRET")
            .expect("ERROR: JWT_SECRET environment variable must be set");

        let database_url = std::env::var("DATABASE_URL")
            .expect("ERROR: DATABASE_URL environment variable must be set");

        let assets_root = std::env::var("ASSETS_ROOT")
            .unwrap_or_else(|_| "assets".to_string())
            .into();

        Self {
            port,
            s3_bucket,
            aws_region,
            jwt_secret,
            database_url,
            assets_root,
        }
    }
}
