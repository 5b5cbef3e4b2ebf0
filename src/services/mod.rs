mod error;
mod ffmpeg_media;
mod jwt_auth;
mod s3_storage;

pub use error::{ProcessingError, StorageError};
pub use ffmpeg_media::{FfmpegTranscoder, FfprobeMediaProbe};
pub use jwt_auth::JwtTokenValidator;
pub use s3_storage::S3ObjectStorage;
