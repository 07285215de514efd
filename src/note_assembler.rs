use chrono::NaiveDate;

use crate::metadata::{VideoMetadata, normalize_date, slugify};

// @module: Markdown note assembly with ordered YAML front matter

/// Fixed content-class tag recorded in every note
const SOURCE_TYPE: &str = "youtube_podcast";
/// Provenance marker for the transcript source
const TRANSCRIPT_SOURCE: &str = "yt-dlp";
/// Topic used when the provider supplied no tags
const DEFAULT_TOPIC: &str = "youtube";
/// The single fixed category tag on every note
const CATEGORY_TAG: &str = "YouTube";
/// Maximum length of the front-matter description, in characters
const DESCRIPTION_MAX_CHARS: usize = 280;

/// Provenance of the transcript embedded in a note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptQuality {
    /// Auto-generated subtitles were found and normalized
    Auto,
    /// No caption file was located; the transcript is empty
    None,
}

impl TranscriptQuality {
    /// Front-matter token for this quality level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
        }
    }
}

/// A single front-matter value with its rendering rule.
///
/// Fields render differently when absent: optional scalars serialize as the
/// bare token `null` (never an empty string), lists as a block of quoted
/// items or the inline empty list.
#[derive(Debug, Clone)]
enum FieldValue {
    /// Always-present string, JSON-quoted
    Str(String),
    /// Optional string: quoted when present, `null` when absent
    OptStr(Option<String>),
    /// Optional number: bare when present, `null` when absent
    OptNum(Option<u64>),
    /// List of strings: `[]` when empty, one quoted item per line otherwise
    List(Vec<String>),
}

/// Quote a string using JSON conventions, a valid YAML subset.
///
/// Keeps the serializer dependency-free of a YAML crate while handling
/// embedded quotes and non-ASCII text correctly.
pub fn yaml_str(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn render_field(key: &str, value: &FieldValue, lines: &mut Vec<String>) {
    match value {
        FieldValue::Str(v) => lines.push(format!("{}: {}", key, yaml_str(v))),
        FieldValue::OptStr(Some(v)) => lines.push(format!("{}: {}", key, yaml_str(v))),
        FieldValue::OptStr(None) => lines.push(format!("{}: null", key)),
        FieldValue::OptNum(Some(n)) => lines.push(format!("{}: {}", key, n)),
        FieldValue::OptNum(None) => lines.push(format!("{}: null", key)),
        FieldValue::List(items) if items.is_empty() => lines.push(format!("{}: []", key)),
        FieldValue::List(items) => {
            lines.push(format!("{}:", key));
            for item in items {
                lines.push(format!("  - {}", yaml_str(item)));
            }
        }
    }
}

/// First line of the raw description, truncated to the note limit
fn short_description(description: &str) -> String {
    description
        .trim()
        .lines()
        .next()
        .unwrap_or("")
        .chars()
        .take(DESCRIPTION_MAX_CHARS)
        .collect()
}

/// Build the summarizer input stream: labeled header, title, transcript.
///
/// The transcript is the line-preserved form; when no captions were found it
/// is the empty string, and the summarizer is invoked all the same.
pub fn summarizer_input(title: &str, transcript: &str) -> String {
    format!("INPUT:\n\n{}\n\n{}", title, transcript)
}

/// Output filename for a note: `<created>--<slug(title)>.md`.
///
/// Both parts are computed fresh each run, so re-running for the same video
/// on a later date produces a new file instead of an overwrite.
pub fn note_filename(created: NaiveDate, title: &str) -> String {
    format!("{}--{}.md", created.format("%Y-%m-%d"), slugify(title))
}

/// Assemble the complete Markdown note: front matter, blank line, body.
///
/// The front-matter key order is fixed and significant for diff-friendliness;
/// it is built as an explicit ordered sequence of (key, value) pairs. The
/// summarizer body is embedded verbatim with no further transformation.
pub fn assemble(
    metadata: &VideoMetadata,
    request_url: &str,
    body: &str,
    quality: TranscriptQuality,
    created: NaiveDate,
) -> String {
    let topics: Vec<String> = if metadata.resolved_tags().is_empty() {
        vec![DEFAULT_TOPIC.to_string()]
    } else {
        metadata.resolved_tags().to_vec()
    };

    let fields: Vec<(&str, FieldValue)> = vec![
        ("title", FieldValue::Str(metadata.display_title().to_string())),
        ("source_type", FieldValue::Str(SOURCE_TYPE.to_string())),
        ("original_url", FieldValue::Str(metadata.resolved_url(request_url).to_string())),
        ("created", FieldValue::Str(created.format("%Y-%m-%d").to_string())),
        ("source_date", FieldValue::OptStr(normalize_date(metadata.upload_date.as_deref()))),
        ("duration_seconds", FieldValue::OptNum(metadata.duration)),
        ("language", FieldValue::Str(metadata.resolved_language().to_string())),
        ("uploader", FieldValue::Str(metadata.resolved_uploader().to_string())),
        ("people", FieldValue::List(Vec::new())),
        ("topics", FieldValue::List(topics)),
        ("tags", FieldValue::List(vec![CATEGORY_TAG.to_string()])),
        ("description", FieldValue::Str(short_description(metadata.resolved_description()))),
        ("transcript_source", FieldValue::Str(TRANSCRIPT_SOURCE.to_string())),
        ("transcript_quality", FieldValue::Str(quality.as_str().to_string())),
    ];

    let mut lines: Vec<String> = Vec::with_capacity(fields.len() + 4);
    lines.push("---".to_string());
    for (key, value) in &fields {
        render_field(key, value, &mut lines);
    }
    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(body.to_string());

    lines.join("\n")
}
