/*!
 * Mock collaborator implementations for testing.
 *
 * This module provides mocks that simulate different behaviors:
 * - `MockCaptionSource::with_captions(...)` - Writes a fixture caption file
 * - `MockCaptionSource::without_captions(...)` - Returns metadata but no captions
 * - `MockCaptionSource::failing()` - Always fails with a collaborator error
 * - `MockSummarizer::working()` - Echoes a fixed body and records its inputs
 * - `MockSummarizer::failing()` - Always fails with a non-zero exit error
 */

// Allow dead code - mocks are for test consumers of the library
#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::metadata::VideoMetadata;
use crate::providers::{CaptionSource, Summarizer};

/// Behavior mode for the mock caption source
#[derive(Debug, Clone)]
pub enum MockCaptionBehavior {
    /// Writes the given SRT content as `<video_id>.<language>.srt`
    WithCaptions(String),
    /// Returns metadata but writes no caption file
    WithoutCaptions,
    /// Always fails with a collaborator error
    Failing,
}

/// Mock caption source serving a fixed metadata record
#[derive(Debug)]
pub struct MockCaptionSource {
    /// Metadata record returned by fetch_metadata
    metadata: VideoMetadata,
    /// Behavior mode
    behavior: MockCaptionBehavior,
}

impl MockCaptionSource {
    /// Create a source that writes a fixture caption file on download
    pub fn with_captions(metadata: VideoMetadata, srt_content: impl Into<String>) -> Self {
        Self {
            metadata,
            behavior: MockCaptionBehavior::WithCaptions(srt_content.into()),
        }
    }

    /// Create a source that finds no captions
    pub fn without_captions(metadata: VideoMetadata) -> Self {
        Self {
            metadata,
            behavior: MockCaptionBehavior::WithoutCaptions,
        }
    }

    /// Create a source that always fails
    pub fn failing() -> Self {
        Self {
            metadata: VideoMetadata::default(),
            behavior: MockCaptionBehavior::Failing,
        }
    }

    fn failure(&self) -> ProviderError {
        ProviderError::ExitFailure {
            command: "mock-provider".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "simulated provider failure".to_string(),
        }
    }
}

#[async_trait]
impl CaptionSource for MockCaptionSource {
    async fn fetch_metadata(&self, _url: &str) -> Result<VideoMetadata, ProviderError> {
        match self.behavior {
            MockCaptionBehavior::Failing => Err(self.failure()),
            _ => Ok(self.metadata.clone()),
        }
    }

    async fn download_captions(
        &self,
        _url: &str,
        language: &str,
        output_dir: &Path,
        video_id: &str,
    ) -> Result<(), ProviderError> {
        match &self.behavior {
            MockCaptionBehavior::WithCaptions(content) => {
                let path = output_dir.join(format!("{}.{}.srt", video_id, language));
                std::fs::write(&path, content).map_err(|e| ProviderError::SpawnFailed {
                    command: "mock-provider".to_string(),
                    message: e.to_string(),
                })?;
                Ok(())
            }
            MockCaptionBehavior::WithoutCaptions => Ok(()),
            MockCaptionBehavior::Failing => Err(self.failure()),
        }
    }
}

/// Mock summarizer that records every input it receives
#[derive(Debug)]
pub struct MockSummarizer {
    /// Whether summarize calls should fail
    fail: bool,
    /// The body returned on success
    body: String,
    /// Inputs received so far, observable from tests
    inputs: Arc<Mutex<Vec<String>>>,
}

impl MockSummarizer {
    /// Create a working summarizer returning a fixed Markdown body
    pub fn working() -> Self {
        Self {
            fail: false,
            body: "## WISDOM\n\n- mock insight".to_string(),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a summarizer that always fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            body: String::new(),
            inputs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded inputs
    pub fn inputs(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.inputs)
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, input: &str) -> Result<String, ProviderError> {
        self.inputs
            .lock()
            .map_err(|_| ProviderError::SpawnFailed {
                command: "mock-summarizer".to_string(),
                message: "input recorder poisoned".to_string(),
            })?
            .push(input.to_string());

        if self.fail {
            return Err(ProviderError::ExitFailure {
                command: "mock-summarizer".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "simulated summarizer failure".to_string(),
            });
        }

        Ok(self.body.clone())
    }
}
