/*!
 * End-to-end tests for the note pipeline with mock collaborators
 */

use anyhow::Result;
use ytwisdom::{Config, Controller};
use ytwisdom::providers::mock::{MockCaptionSource, MockSummarizer};
use crate::common;

fn controller_with(captions: MockCaptionSource, summarizer: MockSummarizer) -> Controller {
    Controller::with_collaborators(Config::default(), Box::new(captions), Box::new(summarizer))
}

/// Test the full note pipeline with captions available
#[tokio::test]
async fn test_run_note_withCaptions_shouldWriteNote() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let captions = MockCaptionSource::with_captions(common::sample_metadata(), common::sample_srt());
    let summarizer = MockSummarizer::working();
    let inputs = summarizer.inputs();
    let controller = controller_with(captions, summarizer);

    let note_path = controller
        .run_note("https://example.com/watch?v=abc123", temp_dir.path())
        .await?;

    // Filename is <created>--<slug>.md with a freshly computed creation date
    let created = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(
        note_path.file_name().unwrap().to_string_lossy(),
        format!("{}--my-title.md", created)
    );

    let note = std::fs::read_to_string(&note_path)?;
    assert!(note.contains("transcript_quality: \"auto\""));
    assert!(note.contains("topics:\n  - \"a\"\n  - \"b\"\n"));
    assert!(note.ends_with("## WISDOM\n\n- mock insight"));

    // The summarizer received the line-preserved transcript
    let recorded = inputs.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], "INPUT:\n\nMy Title!\n\nHello world\nGoodbye");

    Ok(())
}

/// Test the degraded path: no captions still produces a note
#[tokio::test]
async fn test_run_note_withoutCaptions_shouldDegradeToEmptyTranscript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let captions = MockCaptionSource::without_captions(common::sample_metadata());
    let summarizer = MockSummarizer::working();
    let inputs = summarizer.inputs();
    let controller = controller_with(captions, summarizer);

    let note_path = controller
        .run_note("https://example.com/watch?v=abc123", temp_dir.path())
        .await?;

    let note = std::fs::read_to_string(&note_path)?;
    assert!(note.contains("transcript_quality: \"none\""));

    // The summarizer is still invoked, with an empty transcript body
    let recorded = inputs.lock().unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0], "INPUT:\n\nMy Title!\n\n");

    Ok(())
}

/// Test a summarizer failure aborts without a partial note
#[tokio::test]
async fn test_run_note_withFailingSummarizer_shouldWriteNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let captions = MockCaptionSource::with_captions(common::sample_metadata(), common::sample_srt());
    let controller = controller_with(captions, MockSummarizer::failing());

    let result = controller
        .run_note("https://example.com/watch?v=abc123", temp_dir.path())
        .await;
    assert!(result.is_err());

    // No partial Markdown file was written
    let md_files: Vec<_> = std::fs::read_dir(temp_dir.path())?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
        .collect();
    assert!(md_files.is_empty());

    Ok(())
}

/// Test a failing provider propagates before any file write
#[tokio::test]
async fn test_run_note_withFailingProvider_shouldPropagate() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = controller_with(MockCaptionSource::failing(), MockSummarizer::working());

    let result = controller
        .run_note("https://example.com/watch?v=abc123", temp_dir.path())
        .await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("simulated provider failure"));

    Ok(())
}

/// Test a missing title still assembles a note with the fallback title
#[tokio::test]
async fn test_run_note_withMissingTitle_shouldFallBackToUntitled() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let metadata = ytwisdom::VideoMetadata::default();
    let captions = MockCaptionSource::without_captions(metadata);
    let controller = controller_with(captions, MockSummarizer::working());

    let note_path = controller
        .run_note("https://example.com/watch?v=abc123", temp_dir.path())
        .await?;

    let note = std::fs::read_to_string(&note_path)?;
    assert!(note.contains("title: \"Untitled\""));
    assert!(note_path.file_name().unwrap().to_string_lossy().ends_with("--untitled.md"));

    Ok(())
}
