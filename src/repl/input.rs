//! Line editing for the interactive session
//!
//! Thin wrapper over rustyline that folds the editor's error-shaped control
//! flow (Ctrl-C, Ctrl-D) into an explicit outcome the session loop can match
//! on. History lives next to the config in the user's home directory and is
//! flushed on shutdown.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Prompt shown for every line
const PROMPT: &str = ">healthbuddy: ";

/// What one call to [`InputHandler::read_line`] produced
#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A trimmed, possibly empty line
    Line(String),
    /// Ctrl-C: drop the current line, keep the session
    Interrupted,
    /// Ctrl-D: end of input
    Eof,
}

/// Readline wrapper with optional persistent history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    /// Create a handler, loading history from `history_file` when it exists.
    ///
    /// Pass `None` for a session with in-memory history only.
    pub fn new(history_file: Option<PathBuf>) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        if let Some(path) = history_file.as_ref() {
            if path.exists() {
                let _ = editor.load_history(path);
            }
        }

        Ok(InputHandler {
            editor,
            history_path: history_file,
        })
    }

    /// Read one line from the user.
    ///
    /// Non-empty lines are recorded in history. Interrupt and EOF are normal
    /// outcomes here; `Err` is reserved for real editor failures.
    pub fn read_line(&mut self) -> Result<ReadOutcome> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(ReadOutcome::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(anyhow::anyhow!("readline failed: {}", err)),
        }
    }

    /// Flush history to disk, if a history file was configured
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    /// Number of history entries currently loaded
    pub fn history_len(&self) -> usize {
        use rustyline::history::History;
        self.editor.history().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(handler: &mut InputHandler, entry: &str) {
        let _ = handler.editor.add_history_entry(entry);
    }

    #[test]
    fn test_starts_empty_without_history_file() {
        let handler = InputHandler::new(None).unwrap();
        assert_eq!(handler.history_len(), 0);
    }

    #[test]
    fn test_missing_history_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let handler = InputHandler::new(Some(temp_dir.path().join("no-such-file"))).unwrap();
        assert_eq!(handler.history_len(), 0);
    }

    #[test]
    fn test_history_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("history");

        {
            let mut handler = InputHandler::new(Some(history_path.clone())).unwrap();
            record(&mut handler, "/symptoms");
            record(&mut handler, "what causes migraines");
            handler.save_history().unwrap();
        }

        let reopened = InputHandler::new(Some(history_path)).unwrap();
        assert_eq!(reopened.history_len(), 2);
    }

    #[test]
    fn test_save_without_history_file_is_noop() {
        let mut handler = InputHandler::new(None).unwrap();
        record(&mut handler, "hello");
        assert!(handler.save_history().is_ok());
    }
}
