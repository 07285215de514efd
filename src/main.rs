// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod caption_normalizer;
mod metadata;
mod note_assembler;
mod file_utils;
mod app_controller;
mod providers;
mod errors;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a summarized Markdown note from a video URL (default command)
    Note(RunArgs),

    /// Fetch subtitles and write a clean text transcript only
    Transcript(RunArgs),

    /// Generate shell completions for ytwisdom
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct RunArgs {
    /// Video URL to process
    #[arg(value_name = "URL")]
    url: String,

    /// Output directory for generated artifacts
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Subtitle language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Summarizer pattern name
    #[arg(short, long)]
    pattern: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// ytwisdom - YouTube transcripts and wisdom notes
///
/// Fetches subtitles and metadata for a video URL, derives clean transcripts,
/// and assembles Fabric-distilled Markdown notes with YAML front matter.
#[derive(Parser, Debug)]
#[command(name = "ytwisdom")]
#[command(author = "ytwisdom contributors")]
#[command(version = "1.0.0")]
#[command(about = "YouTube transcript fetcher and wisdom-note assembler")]
#[command(long_about = "ytwisdom fetches subtitles for a video URL, normalizes them into a clean
transcript, and can distill the transcript into a Markdown note with YAML
front matter using a Fabric pattern.

EXAMPLES:
    ytwisdom \"https://youtu.be/VIDEO_ID\"              # Note into ~/fabric/youtube
    ytwisdom \"https://youtu.be/VIDEO_ID\" ./notes      # Note into ./notes
    ytwisdom transcript \"https://youtu.be/VIDEO_ID\"   # SRT + clean text only
    ytwisdom -l es \"https://youtu.be/VIDEO_ID\"        # Spanish subtitles
    ytwisdom completions bash > ytwisdom.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

COLLABORATORS:
    yt-dlp - metadata and subtitle download (must be on PATH)
    fabric - transcript distillation (must be on PATH)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video URL to process
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Output directory for generated artifacts
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Subtitle language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Summarizer pattern name
    #[arg(short, long)]
    pattern: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "ytwisdom", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Note(args)) => run(args, Mode::Note).await,
        Some(Commands::Transcript(args)) => run(args, Mode::Transcript).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let url = cli.url.ok_or_else(|| {
                anyhow!("URL is required when no subcommand is specified")
            })?;

            let args = RunArgs {
                url,
                output_dir: cli.output_dir,
                language: cli.language,
                pattern: cli.pattern,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run(args, Mode::Note).await
        }
    }
}

/// Which pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Note,
    Transcript,
}

async fn run(options: RunArgs, mode: Mode) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(language) = &options.language {
            config.language = language.clone();
        }

        if let Some(pattern) = &options.pattern {
            config.summarizer.pattern = pattern.clone();
        }

        // Update log level in config if specified via command line
        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(language) = &options.language {
            config.language = language.clone();
        }

        if let Some(pattern) = &options.pattern {
            config.summarizer.pattern = pattern.clone();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Resolve the output directory before handing off to the controller
    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| config.resolved_output_dir());

    // Create controller
    let controller = Controller::with_config(config)?;

    match mode {
        Mode::Note => {
            controller.run_note(&options.url, &output_dir).await?;
        }
        Mode::Transcript => {
            controller.run_transcript(&options.url, &output_dir).await?;
        }
    }

    Ok(())
}
