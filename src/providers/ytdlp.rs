use async_trait::async_trait;
use log::debug;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;

use crate::errors::ProviderError;
use crate::metadata::VideoMetadata;
use crate::providers::CaptionSource;

// @module: yt-dlp backed caption source

/// Caption source backed by the yt-dlp binary
#[derive(Debug, Clone)]
pub struct YtDlpSource {
    // @field: Binary to invoke
    command: String,
}

impl YtDlpSource {
    /// Create a source invoking the given yt-dlp binary
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<Output, ProviderError> {
        debug!("Running {} {}", self.command, args.join(" "));

        // No timeout: cancellation is by process termination only
        let output = Command::new(&self.command)
            .args(args)
            .output()
            .await
            .map_err(|e| ProviderError::SpawnFailed {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ProviderError::ExitFailure {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl Default for YtDlpSource {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl CaptionSource for YtDlpSource {
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, ProviderError> {
        let output = self.run(&["-J", url]).await?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        VideoMetadata::from_json(&stdout).map_err(|e| ProviderError::ParseError {
            command: self.command.clone(),
            message: e.to_string(),
        })
    }

    async fn download_captions(
        &self,
        url: &str,
        language: &str,
        output_dir: &Path,
        video_id: &str,
    ) -> Result<(), ProviderError> {
        // Per-video-id output template keeps candidate selection scoped
        let template = output_dir.join(format!("{}.%(ext)s", video_id));
        let template = template.to_string_lossy().into_owned();

        self.run(&[
            url,
            "--skip-download",
            "--write-subs",
            "--write-auto-subs",
            "--sub-lang",
            language,
            "--convert-subs",
            "srt",
            "-o",
            template.as_str(),
        ])
        .await?;

        Ok(())
    }
}
