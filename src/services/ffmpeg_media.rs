use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::{
    application::{
        error::ApplicationError,
        services::{MediaProbe, Transcoder},
    },
    domain::models::aspect::AspectClass,
    services::error::ProcessingError,
};

/// Suffix appended to the input path to form the transcoder output path.
const PROCESSED_SUFFIX: &str = ".processing";

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

/// Width and height of the first stream ffprobe reports. Missing
/// dimension fields (audio-only streams) read as zero.
fn parse_stream_dimensions(stdout: &[u8]) -> Result<(u32, u32), ProcessingError> {
    let output: FfprobeOutput = serde_json::from_slice(stdout)
        .map_err(|e| ProcessingError::Probe(format!("could not parse ffprobe output: {}", e)))?;

    let stream = output
        .streams
        .first()
        .ok_or_else(|| ProcessingError::Probe("no media streams found".to_string()))?;

    Ok((stream.width, stream.height))
}

/// Probes media files by shelling out to `ffprobe`.
pub struct FfprobeMediaProbe;

#[async_trait]
impl MediaProbe for FfprobeMediaProbe {
    async fn aspect_class(&self, path: &Path) -> Result<AspectClass, ApplicationError> {
        let output = Command::new("ffprobe")
            .args(["-v", "error", "-print_format", "json", "-show_streams"])
            .arg(path)
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| ProcessingError::Probe(format!("failed to run ffprobe: {}", e)))?;

        if !output.status.success() {
            return Err(
                ProcessingError::Probe(format!("ffprobe exited with {}", output.status)).into(),
            );
        }

        let (width, height) = parse_stream_dimensions(&output.stdout)?;
        let class = AspectClass::classify(width, height);
        debug!("probed {:?}: {}x{} -> {:?}", path, width, height, class);
        Ok(class)
    }
}

/// Remuxes media files by shelling out to `ffmpeg`. Stream data is
/// copied verbatim; only the container index moves to the front.
pub struct FfmpegTranscoder;

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn faststart(&self, input: &Path) -> Result<PathBuf, ApplicationError> {
        let mut output = input.as_os_str().to_owned();
        output.push(PROCESSED_SUFFIX);
        let output = PathBuf::from(output);

        let status = Command::new("ffmpeg")
            .arg("-i")
            .arg(input)
            .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
            .arg(&output)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| ProcessingError::Transcode(format!("failed to run ffmpeg: {}", e)))?;

        if !status.success() {
            // Do not leave a partial output behind.
            let _ = tokio::fs::remove_file(&output).await;
            return Err(
                ProcessingError::Transcode(format!("ffmpeg exited with {}", status)).into(),
            );
        }

        Ok(output)
    }
}
