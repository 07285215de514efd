/*!
 * Tests for note assembly and front-matter serialization
 */

use chrono::NaiveDate;
use ytwisdom::VideoMetadata;
use ytwisdom::note_assembler::{self, TranscriptQuality};
use crate::common;

fn created() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

/// Test front-matter keys appear in the fixed order
#[test]
fn test_assemble_withFullMetadata_shouldOrderKeys() {
    let metadata = common::sample_metadata();
    let note = note_assembler::assemble(&metadata, "https://req", "BODY", TranscriptQuality::Auto, created());

    let expected_order = [
        "title:",
        "source_type:",
        "original_url:",
        "created:",
        "source_date:",
        "duration_seconds:",
        "language:",
        "uploader:",
        "people:",
        "topics:",
        "tags:",
        "description:",
        "transcript_source:",
        "transcript_quality:",
    ];

    let mut last_index = 0;
    for key in expected_order {
        let index = note.find(key).unwrap_or_else(|| panic!("missing key {}", key));
        assert!(index > last_index || last_index == 0, "key {} out of order", key);
        last_index = index;
    }
}

/// Test scalar rendering of a fully populated record
#[test]
fn test_assemble_withFullMetadata_shouldRenderScalars() {
    let metadata = common::sample_metadata();
    let note = note_assembler::assemble(&metadata, "https://req", "BODY", TranscriptQuality::Auto, created());

    assert!(note.starts_with("---\n"));
    assert!(note.contains("title: \"My Title!\""));
    assert!(note.contains("source_type: \"youtube_podcast\""));
    assert!(note.contains("original_url: \"https://example.com/watch?v=abc123\""));
    assert!(note.contains("created: \"2026-08-30\""));
    assert!(note.contains("source_date: \"2024-01-15\""));
    assert!(note.contains("duration_seconds: 742"));
    assert!(note.contains("language: \"en\""));
    assert!(note.contains("uploader: \"Some Uploader\""));
    assert!(note.contains("people: []"));
    assert!(note.contains("description: \"First line of description.\""));
    assert!(note.contains("transcript_source: \"yt-dlp\""));
    assert!(note.contains("transcript_quality: \"auto\""));
}

/// Test absent optionals render as the bare null token
#[test]
fn test_assemble_withAbsentOptionals_shouldRenderNullTokens() {
    let metadata = VideoMetadata::default();
    let note = note_assembler::assemble(&metadata, "https://req", "", TranscriptQuality::None, created());

    assert!(note.contains("source_date: null"));
    assert!(note.contains("duration_seconds: null"));
    assert!(!note.contains("source_date: \"\""));
    assert!(note.contains("title: \"Untitled\""));
    assert!(note.contains("uploader: \"Unknown\""));
    assert!(note.contains("original_url: \"https://req\""));
    assert!(note.contains("transcript_quality: \"none\""));
}

/// Test topics come from metadata tags when present
#[test]
fn test_assemble_withTags_shouldListTopics() {
    let metadata = common::sample_metadata();
    let note = note_assembler::assemble(&metadata, "https://req", "", TranscriptQuality::Auto, created());

    assert!(note.contains("topics:\n  - \"a\"\n  - \"b\"\n"));
    // Fixed category tag, independent of the video's own tags
    assert!(note.contains("tags:\n  - \"YouTube\"\n"));
}

/// Test topics fall back to a single default entry without tags
#[test]
fn test_assemble_withoutTags_shouldUseDefaultTopic() {
    let metadata = VideoMetadata::default();
    let note = note_assembler::assemble(&metadata, "https://req", "", TranscriptQuality::None, created());

    assert!(note.contains("topics:\n  - \"youtube\"\n"));
}

/// Test the body is embedded verbatim after the closing delimiter
#[test]
fn test_assemble_withBody_shouldEmbedVerbatim() {
    let metadata = common::sample_metadata();
    let body = "## WISDOM\n\n- point one\n- point two";
    let note = note_assembler::assemble(&metadata, "https://req", body, TranscriptQuality::Auto, created());

    assert!(note.ends_with(&format!("---\n\n{}", body)));
}

/// Test the description is the truncated first line of a long description
#[test]
fn test_assemble_withLongDescription_shouldTruncateFirstLine() {
    let long_line = "x".repeat(400);
    let metadata = VideoMetadata::from_json(&format!(
        r#"{{"title": "T", "description": "{}\nsecond line"}}"#,
        long_line
    ))
    .unwrap();
    let note = note_assembler::assemble(&metadata, "https://req", "", TranscriptQuality::Auto, created());

    let expected = format!("description: \"{}\"", "x".repeat(280));
    assert!(note.contains(&expected));
    assert!(!note.contains("second line"));
}

/// Test embedded quotes are escaped via JSON quoting
#[test]
fn test_yaml_str_withQuotes_shouldEscape() {
    assert_eq!(note_assembler::yaml_str("plain"), "\"plain\"");
    assert_eq!(note_assembler::yaml_str("say \"hi\""), "\"say \\\"hi\\\"\"");
}

/// Test the note filename combines creation date and slug
#[test]
fn test_note_filename_withTitle_shouldCombineDateAndSlug() {
    assert_eq!(
        note_assembler::note_filename(created(), "My Title!"),
        "2026-08-30--my-title.md"
    );
    assert_eq!(
        note_assembler::note_filename(created(), "!!!"),
        "2026-08-30--video.md"
    );
}

/// Test summarizer input layout: header, title, transcript
#[test]
fn test_summarizer_input_withTranscript_shouldLayoutSections() {
    assert_eq!(
        note_assembler::summarizer_input("Title", "line one\nline two"),
        "INPUT:\n\nTitle\n\nline one\nline two"
    );
    // The summarizer is invoked even with an empty transcript
    assert_eq!(note_assembler::summarizer_input("Title", ""), "INPUT:\n\nTitle\n\n");
}
