use thiserror::Error;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),
}

impl From<StorageError> for ApplicationError {
    fn from(error: StorageError) -> Self {
        ApplicationError::InternalError(format!("Storage error: {}", error))
    }
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Probe failed: {0}")]
    Probe(String),

    #[error("Transcode failed: {0}")]
    Transcode(String),
}

impl From<ProcessingError> for ApplicationError {
    fn from(error: ProcessingError) -> Self {
        ApplicationError::InternalError(format!("Processing error: {}", error))
    }
}
