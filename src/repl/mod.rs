//! REPL (Read-Eval-Print Loop) module for the interactive session
//!
//! Ties together input handling (rustyline), the slash-command system,
//! display rendering, and the chat backend.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::app::AppState;
use crate::chat::request_reply_verbose;
use crate::cli::Verbosity;
use crate::gemini::ChatBackend;
use crate::repl::commands::{is_command, Command, CommandHandler};
use crate::repl::input::{InputHandler, ReadOutcome};
use crate::speech::{Recognizer, SpeechEngine};

pub use crate::repl::display::DisplayManager;

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    display_manager: DisplayManager,
    app: AppState,
    backend: Arc<dyn ChatBackend>,
    speech: Option<SpeechEngine>,
    recognizer: Option<Recognizer>,
}

impl ReplSession {
    /// Create a REPL session with persistent history at
    /// ~/.healthbuddy_history
    pub fn new(app: AppState, backend: Arc<dyn ChatBackend>) -> Result<Self> {
        let input_handler = InputHandler::new(Self::history_path())?;

        let display_manager = DisplayManager::new(app.dark_theme);
        let speech = app.capabilities.synthesizer.as_ref().map(|binary| {
            SpeechEngine::new(binary, &app.config.ui.language)
        });
        let recognizer = app
            .capabilities
            .recognizer
            .as_ref()
            .map(|binary| Recognizer::new(binary));

        Ok(ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            display_manager,
            app,
            backend,
            speech,
            recognizer,
        })
    }

    fn history_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".healthbuddy_history"))
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str, model: &str) {
        self.display_manager.show_banner(version, model);
    }

    /// Run the interactive loop until exit or EOF
    pub async fn run(&mut self, verbosity: Verbosity) -> Result<()> {
        loop {
            match self.input_handler.read_line() {
                Ok(ReadOutcome::Line(input)) => {
                    if !self.handle_input(&input, verbosity).await? {
                        break;
                    }
                }
                // Ctrl-D
                Ok(ReadOutcome::Eof) => {
                    println!();
                    break;
                }
                // Ctrl-C cancels the line (and any utterance), not the session
                Ok(ReadOutcome::Interrupted) => {
                    if let Some(speech) = self.speech.as_mut() {
                        speech.cancel().await;
                    }
                    println!("Use /exit to quit");
                }
                Err(e) => {
                    self.save()?;
                    return Err(e);
                }
            }
        }

        self.save()
    }

    /// Handle user input (command or chat message)
    ///
    /// Returns true if session should continue, false to exit
    pub async fn handle_input(&mut self, input: &str, verbosity: Verbosity) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        if is_command(input) {
            let command = self.command_handler.parse(input);

            // /listen needs the recognizer and the chat backend, so it is
            // handled here rather than in the command handler.
            if command == Command::Listen && self.recognizer.is_some() {
                return self.listen(verbosity).await;
            }

            return self.command_handler.execute(
                command,
                &mut self.app,
                &mut self.display_manager,
            );
        }

        self.send_message(input, verbosity).await;
        Ok(true)
    }

    /// Capture one utterance and send it as a chat message
    async fn listen(&mut self, verbosity: Verbosity) -> Result<bool> {
        let recognizer = match self.recognizer.as_ref() {
            Some(recognizer) => recognizer,
            None => return Ok(true),
        };

        self.display_manager.show_info("Listening...");

        match recognizer.capture().await {
            Ok(heard) => {
                self.display_manager.show_info(&format!("Heard: {}", heard));
                self.send_message(&heard, verbosity).await;
            }
            Err(e) => self.display_manager.show_error(&e.to_string()),
        }

        Ok(true)
    }

    /// Send one chat message and render the reply
    async fn send_message(&mut self, message: &str, verbosity: Verbosity) {
        self.app.chat.push_user(message);

        if verbosity.show_progress() {
            self.display_manager.start_thinking();
        }

        let (reply, error) = request_reply_verbose(Arc::clone(&self.backend), message).await;

        if let Some(error) = error {
            self.display_manager.stop_spinner();
            self.display_manager
                .show_debug(&error, verbosity.show_errors());
        }

        self.app.chat.push_bot(&reply);
        self.display_manager.show_reply(&reply);

        if self.app.speak_replies {
            if let Some(speech) = self.speech.as_mut() {
                if let Err(e) = speech.speak(&reply).await {
                    self.display_manager
                        .show_debug(&e.to_string(), verbosity.show_errors());
                }
            }
        }
    }

    /// Get application state (immutable)
    pub fn app(&self) -> &AppState {
        &self.app
    }

    /// Get application state (mutable)
    pub fn app_mut(&mut self) -> &mut AppState {
        &mut self.app
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.command_handler.is_verbose()
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.command_handler.set_verbose(enable);
    }

    /// Save input history on shutdown
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()?;
        Ok(())
    }
}
