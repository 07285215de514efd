use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::PathBuf;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Subtitle language code requested from the provider
    #[serde(default = "default_language")]
    pub language: String,

    /// Caption provider config
    #[serde(default)]
    pub provider: CaptionProviderConfig,

    /// Summarizer config
    #[serde(default)]
    pub summarizer: SummarizerConfig,

    /// Output directory for generated artifacts; defaults to ~/fabric/youtube
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Caption provider (yt-dlp) configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaptionProviderConfig {
    // @field: Provider binary
    #[serde(default = "default_provider_command")]
    pub command: String,
}

impl Default for CaptionProviderConfig {
    fn default() -> Self {
        Self {
            command: default_provider_command(),
        }
    }
}

/// Summarizer (Fabric) configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummarizerConfig {
    // @field: Summarizer binary
    #[serde(default = "default_summarizer_command")]
    pub command: String,

    // @field: Distillation pattern name
    #[serde(default = "default_summarizer_pattern")]
    pub pattern: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            command: default_summarizer_command(),
            pattern: default_summarizer_pattern(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_provider_command() -> String {
    "yt-dlp".to_string()
}

fn default_summarizer_command() -> String {
    "fabric".to_string()
}

fn default_summarizer_pattern() -> String {
    "extract_article_wisdom".to_string()
}

impl Config {
    /// Resolve the output directory, falling back to ~/fabric/youtube
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fabric")
                .join("youtube"),
        }
    }

    /// Validate the configuration after loading and CLI overrides
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("Subtitle language must not be empty"));
        }
        if self.provider.command.trim().is_empty() {
            return Err(anyhow!("Caption provider command must not be empty"));
        }
        if self.summarizer.command.trim().is_empty() {
            return Err(anyhow!("Summarizer command must not be empty"));
        }
        if self.summarizer.pattern.trim().is_empty() {
            return Err(anyhow!("Summarizer pattern must not be empty"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            provider: CaptionProviderConfig::default(),
            summarizer: SummarizerConfig::default(),
            output_dir: None,
            log_level: LogLevel::default(),
        }
    }
}
