/*!
 * End-to-end tests for the transcript pipeline with mock collaborators
 */

use anyhow::Result;
use ytwisdom::{Config, Controller};
use ytwisdom::providers::mock::{MockCaptionSource, MockSummarizer};
use crate::common;

fn controller_with(captions: MockCaptionSource) -> Controller {
    Controller::with_collaborators(
        Config::default(),
        Box::new(captions),
        Box::new(MockSummarizer::working()),
    )
}

/// Test the transcript pipeline writes caption and text artifacts
#[tokio::test]
async fn test_run_transcript_withCaptions_shouldWriteBothArtifacts() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let captions = MockCaptionSource::with_captions(common::sample_metadata(), common::sample_srt());
    let controller = controller_with(captions);

    let artifacts = controller
        .run_transcript("https://example.com/watch?v=abc123", temp_dir.path())
        .await?;

    // The caption file is the provider's output, passed through unmodified
    assert_eq!(
        artifacts.caption_file.file_name().unwrap().to_string_lossy(),
        "abc123.en.srt"
    );
    assert_eq!(std::fs::read_to_string(&artifacts.caption_file)?, common::sample_srt());

    // The transcript artifact carries the flattened form
    assert_eq!(
        artifacts.transcript_file.file_name().unwrap().to_string_lossy(),
        "my-title.txt"
    );
    assert_eq!(
        std::fs::read_to_string(&artifacts.transcript_file)?,
        "Hello world Goodbye"
    );

    Ok(())
}

/// Test a missing caption file is fatal in the transcript pipeline
#[tokio::test]
async fn test_run_transcript_withoutCaptions_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let captions = MockCaptionSource::without_captions(common::sample_metadata());
    let controller = controller_with(captions);

    let result = controller
        .run_transcript("https://example.com/watch?v=abc123", temp_dir.path())
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("No caption file found"));

    Ok(())
}

/// Test a missing title aborts the transcript pipeline
#[tokio::test]
async fn test_run_transcript_withMissingTitle_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let metadata = ytwisdom::VideoMetadata::default();
    let captions = MockCaptionSource::with_captions(metadata, common::sample_srt());
    let controller = controller_with(captions);

    let result = controller
        .run_transcript("https://example.com/watch?v=abc123", temp_dir.path())
        .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("no usable video title"));

    Ok(())
}
