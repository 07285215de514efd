use async_trait::async_trait;
use log::debug;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::errors::ProviderError;
use crate::providers::Summarizer;

// @module: Fabric backed summarizer

/// Summarizer backed by the fabric binary running a distillation pattern
#[derive(Debug, Clone)]
pub struct FabricSummarizer {
    // @field: Binary to invoke
    command: String,

    // @field: Pattern name passed to --pattern
    pattern: String,
}

impl FabricSummarizer {
    /// Create a summarizer invoking the given binary with the given pattern
    pub fn new(command: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            pattern: pattern.into(),
        }
    }
}

impl Default for FabricSummarizer {
    fn default() -> Self {
        Self::new("fabric", "extract_article_wisdom")
    }
}

#[async_trait]
impl Summarizer for FabricSummarizer {
    async fn summarize(&self, input: &str) -> Result<String, ProviderError> {
        debug!("Running {} --pattern {}", self.command, self.pattern);

        let mut child = Command::new(&self.command)
            .args(["--pattern", &self.pattern])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ProviderError::SpawnFailed {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input.as_bytes())
                .await
                .map_err(|e| ProviderError::SpawnFailed {
                    command: self.command.clone(),
                    message: format!("Failed to write to stdin: {}", e),
                })?;
            // Close stdin so the pattern sees end-of-input
        }

        // No timeout: cancellation is by process termination only
        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ProviderError::SpawnFailed {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(ProviderError::ExitFailure {
                command: self.command.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
