use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

// @module: Video metadata record and normalization helpers

// @const: Compact upload date (exactly 8 digits)
static COMPACT_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{8}$").unwrap()
});

// @const: Characters outside word/whitespace/hyphen
static NON_SLUG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s-]").unwrap()
});

// @const: Runs of whitespace/underscore/hyphen
static SLUG_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s_-]+").unwrap()
});

/// Fallback slug when a title reduces to nothing
const SLUG_FALLBACK: &str = "video";

/// Metadata record returned by the caption provider.
///
/// Every field is optional at the wire level; the resolver methods apply the
/// documented fallback chains, so call sites never see raw absence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoMetadata {
    /// Video title
    #[serde(default)]
    pub title: Option<String>,

    /// Uploader name (first choice for attribution)
    #[serde(default)]
    pub uploader: Option<String>,

    /// Channel name (attribution fallback)
    #[serde(default)]
    pub channel: Option<String>,

    /// Raw upload date, typically compact YYYYMMDD
    #[serde(default)]
    pub upload_date: Option<String>,

    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<u64>,

    /// Provider-supplied tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,

    /// Full video description
    #[serde(default)]
    pub description: Option<String>,

    /// Canonical URL for the video page
    #[serde(default)]
    pub webpage_url: Option<String>,

    /// Language code of the video
    #[serde(default)]
    pub language: Option<String>,

    /// Provider video identifier
    #[serde(default)]
    pub id: Option<String>,
}

impl VideoMetadata {
    /// Parse a metadata record from the provider's JSON output
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The title if the provider returned a usable one
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Title with the documented fallback for the note pipeline
    pub fn display_title(&self) -> &str {
        self.title().unwrap_or("Untitled")
    }

    /// Uploader resolved through the `uploader` -> `channel` chain
    pub fn resolved_uploader(&self) -> &str {
        self.uploader
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.channel.as_deref().filter(|c| !c.is_empty()))
            .unwrap_or("Unknown")
    }

    /// Canonical URL, falling back to the URL the run was invoked with
    pub fn resolved_url<'a>(&'a self, request_url: &'a str) -> &'a str {
        self.webpage_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(request_url)
    }

    /// Language code, defaulting to English
    pub fn resolved_language(&self) -> &str {
        self.language.as_deref().filter(|l| !l.is_empty()).unwrap_or("en")
    }

    /// Provider identifier, falling back to a slug of the title
    pub fn resolved_id(&self) -> String {
        self.id
            .as_deref()
            .filter(|i| !i.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| slugify(self.display_title()))
    }

    /// Tag list, empty when the provider reported none
    pub fn resolved_tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Raw description, empty string when absent
    pub fn resolved_description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Normalize a raw upload date to ISO format where possible.
///
/// Exactly eight digits are parsed strictly as YYYYMMDD: a valid calendar
/// date comes back as `YYYY-MM-DD`, an invalid one (month 13, day 32) comes
/// back as `None` rather than an error. Absent or empty input is `None`.
/// Any other non-empty string passes through unchanged; this function does
/// not attempt to parse free-form date formats.
pub fn normalize_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.map(str::trim).filter(|d| !d.is_empty())?;

    if COMPACT_DATE_REGEX.is_match(raw) {
        return NaiveDate::parse_from_str(raw, "%Y%m%d")
            .ok()
            .map(|date| date.format("%Y-%m-%d").to_string());
    }

    Some(raw.to_string())
}

/// Create a filesystem/URL friendly slug from arbitrary text.
///
/// Lowercases and trims, removes everything outside word/whitespace/hyphen
/// characters, collapses separator runs to a single hyphen and strips edge
/// hyphens. Total and deterministic: no input produces an error, and an
/// input that reduces to nothing yields the literal `"video"`. Distinct
/// titles that slugify identically collide by design.
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped = NON_SLUG_REGEX.replace_all(&lowered, "");
    let hyphenated = SLUG_SEPARATOR_REGEX.replace_all(&stripped, "-");
    let slug = hyphenated.trim_matches('-');

    if slug.is_empty() {
        SLUG_FALLBACK.to_string()
    } else {
        slug.to_string()
    }
}
