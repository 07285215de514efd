/*!
 * External collaborator interfaces for the pipeline.
 *
 * This module abstracts the two opaque collaborators behind narrow traits:
 * - `CaptionSource`: resolves a video URL to caption files and a metadata record
 * - `Summarizer`: distills a transcript into a Markdown body
 *
 * The subprocess-backed implementations live in `ytdlp` and `fabric`; the
 * `mock` module provides fixture-driven implementations so the core pipeline
 * can be tested without live network or process calls.
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::Path;

use crate::errors::ProviderError;
use crate::metadata::VideoMetadata;

/// Source of caption files and video metadata
///
/// Implementations are expected to write zero or more caption files into
/// `output_dir` using the `<video_id>.<...>.srt` naming convention; the
/// caller selects among the candidates afterwards.
#[async_trait]
pub trait CaptionSource: Send + Sync + Debug {
    /// Fetch the metadata record for a video URL
    ///
    /// # Arguments
    /// * `url` - The video page URL
    ///
    /// # Returns
    /// * `Result<VideoMetadata, ProviderError>` - The parsed metadata record or an error
    async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, ProviderError>;

    /// Download caption files for a video into the output directory
    ///
    /// Finding no captions is not an error here; the provider simply writes
    /// no files and the caller decides how to degrade.
    async fn download_captions(
        &self,
        url: &str,
        language: &str,
        output_dir: &Path,
        video_id: &str,
    ) -> Result<(), ProviderError>;
}

/// Text-distillation collaborator
#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    /// Distill the prepared input stream into a Markdown body
    ///
    /// # Arguments
    /// * `input` - Labeled section header, title and transcript as one stream
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The Markdown body, or an error on abnormal exit
    async fn summarize(&self, input: &str) -> Result<String, ProviderError>;
}

pub mod ytdlp;
pub mod fabric;
pub mod mock;
