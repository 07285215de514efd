use anyhow::Result;
use log::{warn, info, debug};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::caption_normalizer::{CaptionNormalizer, TranscriptPair};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::metadata::slugify;
use crate::note_assembler::{self, TranscriptQuality};
use crate::providers::{CaptionSource, Summarizer};
use crate::providers::fabric::FabricSummarizer;
use crate::providers::ytdlp::YtDlpSource;

// @module: Application controller for the transcript and note pipelines

/// Artifacts produced by the transcript pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptArtifacts {
    /// The timed caption file, passed through from the provider unmodified
    pub caption_file: PathBuf,

    /// The flattened plain-text transcript
    pub transcript_file: PathBuf,
}

/// Main application controller running the sequential pipelines
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Caption and metadata collaborator
    captions: Box<dyn CaptionSource>,

    // @field: Text-distillation collaborator
    summarizer: Box<dyn Summarizer>,
}

impl Controller {
    // @method: Create a controller with subprocess-backed collaborators
    pub fn with_config(config: Config) -> Result<Self> {
        let captions = Box::new(YtDlpSource::new(config.provider.command.clone()));
        let summarizer = Box::new(FabricSummarizer::new(
            config.summarizer.command.clone(),
            config.summarizer.pattern.clone(),
        ));

        Ok(Self {
            config,
            captions,
            summarizer,
        })
    }

    /// Create a controller with explicit collaborators - used by tests and external consumers
    #[allow(dead_code)]
    pub fn with_collaborators(
        config: Config,
        captions: Box<dyn CaptionSource>,
        summarizer: Box<dyn Summarizer>,
    ) -> Self {
        Self {
            config,
            captions,
            summarizer,
        }
    }

    /// Fetch metadata and captions, returning the selected caption file if any.
    ///
    /// The provider may write several caption candidates (e.g. `id.en.srt`
    /// next to `id.en-orig.srt`); the most recently modified file matching
    /// the video id prefix and `.srt` suffix wins.
    async fn fetch(&self, url: &str, output_dir: &Path) -> Result<(crate::metadata::VideoMetadata, Option<PathBuf>)> {
        println!("[+] Fetching metadata for {} ...", url);
        let metadata = self.captions.fetch_metadata(url).await.map_err(AppError::from)?;

        let video_id = metadata.resolved_id();
        FileManager::ensure_dir(output_dir)?;

        println!("[+] Downloading {} subtitles ...", self.config.language);
        self.captions
            .download_captions(url, &self.config.language, output_dir, &video_id)
            .await
            .map_err(AppError::from)?;

        let caption_file = FileManager::find_newest_with_affixes(output_dir, &video_id, ".srt")?;
        match &caption_file {
            Some(path) => debug!("Selected caption file: {}", path.display()),
            None => debug!("No caption file matched {}*.srt", video_id),
        }

        Ok((metadata, caption_file))
    }

    /// Run the transcript pipeline: caption file plus clean text artifact.
    ///
    /// A missing caption file is fatal here since no text artifact can be
    /// produced, unlike the note pipeline which degrades instead.
    pub async fn run_transcript(&self, url: &str, output_dir: &Path) -> Result<TranscriptArtifacts> {
        let (metadata, caption_file) = self.fetch(url, output_dir).await?;

        let title = metadata.title().ok_or(AppError::MissingTitle)?;

        let caption_file = caption_file
            .ok_or_else(|| AppError::NoCaptionFound(self.config.language.clone()))?;

        let pair = CaptionNormalizer::normalize_file(&caption_file)?;

        let transcript_file = output_dir.join(format!("{}.txt", slugify(title)));
        FileManager::write_to_file(&transcript_file, &pair.flattened)?;

        println!("[+] Detected subtitle file: {}", caption_file.display());
        println!("[+] Saved pure text transcript: {}", transcript_file.display());
        info!("Transcript written for '{}'", title);

        Ok(TranscriptArtifacts {
            caption_file,
            transcript_file,
        })
    }

    /// Run the note pipeline: summarized Markdown note with front matter.
    ///
    /// A missing caption file degrades to an empty transcript recorded as
    /// `transcript_quality: "none"`; the summarizer is still invoked. A
    /// summarizer failure aborts the whole assembly with no partial note.
    pub async fn run_note(&self, url: &str, output_dir: &Path) -> Result<PathBuf> {
        let (metadata, caption_file) = self.fetch(url, output_dir).await?;

        let (pair, quality) = match &caption_file {
            Some(path) => (CaptionNormalizer::normalize_file(path)?, TranscriptQuality::Auto),
            None => {
                println!("[!] No subtitles found. Transcript will be empty.");
                warn!("No caption file located; proceeding with empty transcript");
                (TranscriptPair::default(), TranscriptQuality::None)
            }
        };

        let title = metadata.display_title();

        println!("[+] Calling summarizer on transcript ...");
        let input = note_assembler::summarizer_input(title, &pair.line_preserved);
        let body = self.summarizer.summarize(&input).await.map_err(AppError::from)?;

        println!("[+] Building note front matter ...");
        let created = chrono::Local::now().date_naive();
        let document = note_assembler::assemble(&metadata, url, &body, quality, created);

        let note_path = output_dir.join(note_assembler::note_filename(created, title));
        FileManager::write_to_file(&note_path, &document)?;

        println!("[+] Wrote Markdown note: {}", note_path.display());
        info!("Note written for '{}'", title);

        Ok(note_path)
    }
}
