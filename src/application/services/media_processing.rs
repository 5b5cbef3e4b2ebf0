use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{application::error::ApplicationError, domain::models::aspect::AspectClass};

/// Inspects a local media file and classifies its aspect ratio.
///
/// Production runs an external inspection tool; tests substitute a fake
/// that returns canned results without spawning a subprocess.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    async fn aspect_class(&self, path: &Path) -> Result<AspectClass, ApplicationError>;
}

/// Rewrites a local media file for progressive playback.
///
/// Returns the path of the new file; the caller owns it and is
/// responsible for removing it.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn faststart(&self, input: &Path) -> Result<PathBuf, ApplicationError>;
}
