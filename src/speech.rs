//! Speech synthesis and recognition
//!
//! Wraps whichever synthesizer and recognizer binaries the capability probe
//! found. Text is cleaned of display markup before it is spoken, and starting
//! a new utterance cancels the one in flight. Recognition runs the binary to
//! completion and returns one utterance as text.

use crate::errors::{HealthError, Result};
use std::path::{Path, PathBuf};
use tokio::process::{Child, Command};

/// Characters stripped from text before synthesis
const MARKUP_CHARS: &[char] = &['*', '#', '•'];

/// Remove display markup so it is not read aloud
pub fn clean_for_speech(text: &str) -> String {
    let cleaned: String = text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Handle to the synthesizer binary
pub struct SpeechEngine {
    binary: PathBuf,
    language: String,
    current: Option<Child>,
}

impl SpeechEngine {
    pub fn new(binary: &Path, language: &str) -> Self {
        SpeechEngine {
            binary: binary.to_path_buf(),
            language: language.to_string(),
            current: None,
        }
    }

    /// Speak `text`, cancelling any utterance already in progress.
    ///
    /// The child runs detached; callers poll or cancel, they never block on
    /// completion.
    pub async fn speak(&mut self, text: &str) -> Result<()> {
        self.cancel().await;

        let cleaned = clean_for_speech(text);
        if cleaned.is_empty() {
            return Ok(());
        }

        let mut command = Command::new(&self.binary);
        self.apply_args(&mut command, &cleaned);

        let child = command
            .spawn()
            .map_err(|e| HealthError::SpeechError(format!("Failed to start synthesizer: {}", e)))?;

        self.current = Some(child);
        Ok(())
    }

    /// Kill the in-flight utterance, if any
    pub async fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            // Best effort; the child may already have exited
            let _ = child.kill().await;
        }
    }

    /// True while the last utterance is still running
    pub fn is_speaking(&mut self) -> bool {
        match self.current.as_mut() {
            Some(child) => match child.try_wait() {
                Ok(None) => true,
                _ => {
                    self.current = None;
                    false
                }
            },
            None => false,
        }
    }

    /// Each synthesizer takes the language flag differently
    fn apply_args(&self, command: &mut Command, text: &str) {
        let name = self
            .binary
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        match name {
            "say" => {
                command.arg(text);
            }
            "espeak" | "espeak-ng" => {
                command.arg("-v").arg(&self.language).arg(text);
            }
            "spd-say" => {
                command.arg("-l").arg(&self.language).arg(text);
            }
            _ => {
                command.arg(text);
            }
        }
    }
}

/// Handle to the recognizer binary
pub struct Recognizer {
    binary: PathBuf,
}

impl Recognizer {
    pub fn new(binary: &Path) -> Self {
        Recognizer {
            binary: binary.to_path_buf(),
        }
    }

    /// Capture one utterance and return it as text.
    ///
    /// Blocks until the recognizer exits. The recognizer is expected to print
    /// the transcript on stdout; a nonzero exit or an empty transcript is an
    /// error.
    pub async fn capture(&self) -> Result<String> {
        let output = Command::new(&self.binary)
            .output()
            .await
            .map_err(|e| HealthError::SpeechError(format!("Failed to start recognizer: {}", e)))?;

        if !output.status.success() {
            return Err(HealthError::SpeechError(format!(
                "Recognizer exited with {}",
                output.status
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if text.is_empty() {
            return Err(HealthError::SpeechError(
                "Recognizer produced no text".to_string(),
            ));
        }

        Ok(text)
    }
}
