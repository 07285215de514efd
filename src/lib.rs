/*!
 * # ytwisdom - YouTube transcripts and wisdom notes
 *
 * A Rust library for turning a video URL into clean transcripts and
 * summarized Markdown notes.
 *
 * ## Features
 *
 * - Fetch auto-generated or manual subtitles via yt-dlp
 * - Normalize SRT captions into flattened and line-preserved transcripts
 * - Normalize video metadata (dates, slugs, fallback chains)
 * - Assemble Markdown notes with ordered YAML front matter
 * - Distill transcripts through a Fabric pattern
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `caption_normalizer`: SRT caption to plain-text normalization
 * - `metadata`: Video metadata record and normalization helpers
 * - `note_assembler`: Front-matter and note document assembly
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `providers`: External collaborator clients:
 *   - `providers::ytdlp`: yt-dlp caption source
 *   - `providers::fabric`: Fabric summarizer
 *   - `providers::mock`: Fixture collaborators for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod caption_normalizer;
pub mod metadata;
pub mod note_assembler;
pub mod app_controller;
pub mod providers;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, TranscriptArtifacts};
pub use caption_normalizer::{CaptionNormalizer, LineClass, TranscriptPair};
pub use metadata::{VideoMetadata, normalize_date, slugify};
pub use note_assembler::TranscriptQuality;
pub use errors::{AppError, ProviderError};
