use std::path::Path;
use anyhow::{Result, Context};
use once_cell::sync::Lazy;
use regex::Regex;

// @module: SRT caption to plain-text normalization

// @const: Timestamp line prefix (HH:MM:SS,mmm)
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}:\d{2}:\d{2},\d{3}").unwrap()
});

// @const: Cue ordinal line (digits only)
static CUE_ORDINAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+$").unwrap()
});

// @const: Inline markup tags, non-greedy
static MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>").unwrap()
});

// @const: Any run of whitespace
static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// Classification decision for a single physical caption line.
///
/// The normalizer is deliberately not a cue-grammar parser: each line is
/// classified on its own, independent of cue grouping, so malformed cue
/// structure can never make normalization fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Structural noise (blank line, cue ordinal, timestamp line)
    Discard,
    /// Caption text, with inline markup already stripped
    Keep(String),
}

/// The two transcript serializations derived from one caption file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptPair {
    /// Space-joined, whitespace-collapsed flowing text
    pub flattened: String,

    /// Newline-joined text, one logical line per surviving caption line
    pub line_preserved: String,
}

/// Caption file normalizer
pub struct CaptionNormalizer;

impl CaptionNormalizer {
    /// Classify a single physical line of an SRT file.
    ///
    /// Blank lines, cue ordinals and timestamp lines are discarded. Everything
    /// else is kept with inline `<...>` markup stripped; a line that consisted
    /// only of markup is kept as empty text and absorbed by the flatten pass.
    pub fn classify_line(line: &str) -> LineClass {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineClass::Discard;
        }
        if CUE_ORDINAL_REGEX.is_match(trimmed) {
            return LineClass::Discard;
        }
        if TIMESTAMP_REGEX.is_match(trimmed) {
            return LineClass::Discard;
        }

        LineClass::Keep(MARKUP_REGEX.replace_all(trimmed, "").to_string())
    }

    /// Normalize raw SRT content into both transcript serializations.
    ///
    /// This is a pure function: the same input bytes always produce
    /// byte-identical output. An input with no surviving text lines yields
    /// empty strings in both forms, not an error.
    pub fn normalize(raw: &str) -> TranscriptPair {
        let kept: Vec<String> = raw
            .lines()
            .filter_map(|line| match Self::classify_line(line) {
                LineClass::Keep(text) => Some(text),
                LineClass::Discard => None,
            })
            .collect();

        TranscriptPair {
            flattened: Self::collapse_whitespace(&kept.join(" ")),
            line_preserved: kept.join("\n"),
        }
    }

    /// Normalize an SRT file on disk.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, matching
    /// how auto-generated caption files are handled elsewhere.
    pub fn normalize_file<P: AsRef<Path>>(path: P) -> Result<TranscriptPair> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read caption file: {}", path.display()))?;
        Ok(Self::normalize(&String::from_utf8_lossy(&bytes)))
    }

    /// Collapse every whitespace run to a single space and trim the ends.
    /// Idempotent by construction.
    pub fn collapse_whitespace(text: &str) -> String {
        WHITESPACE_RUN_REGEX.replace_all(text, " ").trim().to_string()
    }
}
