//! Command handler for REPL built-in commands
//!
//! Slash commands cover view switching, the symptom-checker flow, catalog
//! browsing, and session management. Anything without a / prefix is treated
//! as a chat message by the caller.

use crate::app::{ActiveView, AppState};
use crate::catalog::{
    filter_diseases, find_facilities, tips_by_category, DiseaseFilter, FacilityFilter,
    FacilityType, TipCategory, SYMPTOMS,
};
use crate::repl::display::DisplayManager;
use anyhow::Result;
use colored::*;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    View { name: Option<String> },
    Symptoms,
    Toggle { id: String },
    Review,
    Back,
    Remove { id: String },
    Analyze,
    Reset,
    Diseases { query: Option<String> },
    Facilities { kind: Option<String> },
    Tips { category: Option<String> },
    Theme,
    Speak { enable: bool },
    Listen,
    Status,
    Clear,
    Exit,
    Unknown { input: String },
}

/// Command handler for parsing and executing REPL commands
pub struct CommandHandler {
    verbose: bool,
}

impl CommandHandler {
    /// Create new command handler
    pub fn new() -> Self {
        CommandHandler { verbose: false }
    }

    /// Parse input string into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !trimmed.starts_with('/') {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        if parts.is_empty() {
            return Command::Unknown {
                input: input.to_string(),
            };
        }

        let rest = || parts.get(1).map(|s| s.to_string());

        match parts[0].to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "view" => Command::View { name: rest() },
            "symptoms" => Command::Symptoms,
            "toggle" | "add" => match rest() {
                Some(id) => Command::Toggle { id },
                None => Command::Unknown {
                    input: input.to_string(),
                },
            },
            "review" | "continue" => Command::Review,
            "back" => Command::Back,
            "remove" => match rest() {
                Some(id) => Command::Remove { id },
                None => Command::Unknown {
                    input: input.to_string(),
                },
            },
            "analyze" => Command::Analyze,
            "reset" => Command::Reset,
            "diseases" => Command::Diseases { query: rest() },
            "facilities" | "finder" => Command::Facilities { kind: rest() },
            "tips" => Command::Tips { category: rest() },
            "theme" => Command::Theme,
            "speak" => {
                let enable = parts
                    .get(1)
                    .map(|s| s.to_lowercase() == "on" || s == &"1" || s == &"true")
                    .unwrap_or(true);
                Command::Speak { enable }
            }
            "listen" => Command::Listen,
            "status" => Command::Status,
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown {
                input: input.to_string(),
            },
        }
    }

    /// Execute a command
    ///
    /// Returns true if REPL should continue, false if should exit
    pub fn execute(
        &mut self,
        command: Command,
        app: &mut AppState,
        display: &mut DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Help => {
                self.show_help();
                Ok(true)
            }
            Command::Exit => {
                println!("{}", "Take care!".green());
                Ok(false)
            }
            Command::View { name } => {
                match name {
                    Some(name) => match name.parse::<ActiveView>() {
                        Ok(view) => {
                            app.switch_view(view);
                            println!("{}", format!("Switched to {} view", view).cyan());
                        }
                        Err(e) => display.show_error(&e),
                    },
                    None => {
                        println!("Current view: {}", app.view.to_string().cyan());
                        let names: Vec<String> =
                            ActiveView::all().iter().map(|v| v.to_string()).collect();
                        println!("Available: {}", names.join(", "));
                    }
                }
                Ok(true)
            }
            Command::Symptoms => {
                app.switch_view(ActiveView::Symptoms);
                display.show_checker_step(app.checker.state());
                display.show_symptoms(SYMPTOMS, app.checker.selection().ids());
                Ok(true)
            }
            Command::Toggle { id } => {
                match app.checker.toggle(&id) {
                    Ok(true) => println!("{}", format!("Added {}", id).green()),
                    Ok(false) => println!("{}", format!("Removed {}", id).yellow()),
                    Err(e) => display.show_error(&e.to_string()),
                }
                Ok(true)
            }
            Command::Review => {
                match app.checker.continue_to_review() {
                    Ok(()) => {
                        display.show_checker_step(app.checker.state());
                        display.show_symptoms(SYMPTOMS, app.checker.selection().ids());
                        println!(
                            "Run {} to classify, {} to keep editing",
                            "/analyze".green(),
                            "/back".green()
                        );
                    }
                    Err(e) => display.show_error(&e.to_string()),
                }
                Ok(true)
            }
            Command::Back => {
                if let Err(e) = app.checker.back_to_selection() {
                    display.show_error(&e.to_string());
                } else {
                    display.show_checker_step(app.checker.state());
                }
                Ok(true)
            }
            Command::Remove { id } => {
                if let Err(e) = app.checker.remove_symptom(&id) {
                    display.show_error(&e.to_string());
                } else {
                    println!("{}", format!("Removed {}", id).yellow());
                    display.show_checker_step(app.checker.state());
                }
                Ok(true)
            }
            Command::Analyze => {
                match app.checker.analyze() {
                    Ok(results) => {
                        let results = results.to_vec();
                        display.show_checker_step(app.checker.state());
                        display.show_candidates(&results);
                    }
                    Err(e) => display.show_error(&e.to_string()),
                }
                Ok(true)
            }
            Command::Reset => {
                match app.checker.reset() {
                    Ok(()) => println!("{}", "Checker reset. Selection cleared.".yellow()),
                    Err(e) => display.show_error(&e.to_string()),
                }
                Ok(true)
            }
            Command::Diseases { query } => {
                app.switch_view(ActiveView::Diseases);
                let filter = DiseaseFilter {
                    search: query,
                    ..Default::default()
                };
                let results = filter_diseases(&filter);
                if results.is_empty() {
                    println!("{}", "No diseases match.".yellow());
                } else {
                    for disease in results {
                        display.show_disease(disease);
                    }
                    println!();
                }
                Ok(true)
            }
            Command::Facilities { kind } => {
                app.switch_view(ActiveView::Finder);
                let facility_type = match kind {
                    Some(ref k) => match k.parse::<FacilityType>() {
                        Ok(t) => Some(t),
                        Err(e) => {
                            display.show_error(&e);
                            return Ok(true);
                        }
                    },
                    None => None,
                };
                let filter = FacilityFilter {
                    facility_type,
                    ..Default::default()
                };
                let coords = app.capabilities.coordinates;
                let ranked: Vec<_> = find_facilities(&filter, coords)
                    .into_iter()
                    .map(|f| {
                        let distance = match coords {
                            Some((lat, lon)) => f.distance_from(lat, lon),
                            None => f.distance_km,
                        };
                        (distance, f)
                    })
                    .collect();
                display.show_facilities(&ranked);
                Ok(true)
            }
            Command::Tips { category } => {
                app.switch_view(ActiveView::Tips);
                let category = match category {
                    Some(ref c) => match c.parse::<TipCategory>() {
                        Ok(t) => Some(t),
                        Err(e) => {
                            display.show_error(&e);
                            return Ok(true);
                        }
                    },
                    None => None,
                };
                display.show_tips(&tips_by_category(category));
                Ok(true)
            }
            Command::Theme => {
                let dark = app.toggle_theme();
                display.set_dark_theme(dark);
                let name = if dark { "dark" } else { "light" };
                println!("{}", format!("Theme: {}", name).cyan());
                Ok(true)
            }
            Command::Speak { enable } => {
                if !app.capabilities.speech_output.is_available() {
                    display.show_warning("No speech synthesizer available on this system");
                } else {
                    app.speak_replies = enable;
                    let status = if enable { "enabled" } else { "disabled" };
                    println!("{}", format!("Spoken replies {}", status).cyan());
                }
                Ok(true)
            }
            // The session intercepts Listen when a recognizer is present;
            // reaching this arm means there is none.
            Command::Listen => {
                display.show_warning("No speech recognizer available on this system");
                Ok(true)
            }
            Command::Status => {
                self.show_status(app);
                Ok(true)
            }
            Command::Clear => {
                display.clear_screen()?;
                Ok(true)
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                Ok(true)
            }
        }
    }

    /// Display help information
    fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = vec![
            ("/help, /h", "Show this help message"),
            ("/view [name]", "Show or switch the active view"),
            ("/symptoms", "List symptoms and the current selection"),
            ("/toggle <id>", "Add or remove a symptom"),
            ("/review", "Freeze the selection for review"),
            ("/back", "Return from review to selection"),
            ("/remove <id>", "Remove a symptom while reviewing"),
            ("/analyze", "Classify the reviewed selection"),
            ("/reset", "Clear the checker and start over"),
            ("/diseases [query]", "Browse the disease catalog"),
            ("/facilities [type]", "List healthcare facilities by distance"),
            ("/tips [category]", "Show health tips"),
            ("/theme", "Toggle dark theme"),
            ("/speak [on|off]", "Toggle spoken replies"),
            ("/listen", "Capture one spoken message"),
            ("/status", "Show session status"),
            ("/clear, /cls", "Clear screen"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<20} {}", cmd.green(), desc);
        }

        println!("\n{}", "Usage:".bold());
        println!("  - Type a health question directly (no / prefix)");
        println!("  - Use {} for input history", "UP/DOWN arrows".cyan());
        println!("  - Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Display session status
    fn show_status(&self, app: &AppState) {
        println!("\n{}", "Session Status:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        println!("  Active View:      {}", app.view.to_string().green());
        println!(
            "  Chat Messages:    {}",
            app.chat.len().to_string().green()
        );
        println!(
            "  Checker State:    {}",
            app.checker.state().display_name().green()
        );
        println!(
            "  Symptoms Chosen:  {}",
            app.checker.selection().len().to_string().green()
        );
        println!(
            "  Speech Output:    {}",
            app.capabilities.speech_output.to_string().green()
        );
        println!(
            "  Speech Input:     {}",
            app.capabilities.speech_input.to_string().green()
        );
        println!(
            "  Geolocation:      {}",
            app.capabilities.geolocation.to_string().green()
        );
        println!(
            "  Verbose Mode:     {}",
            if self.verbose { "On".green() } else { "Off".red() }
        );
        println!();
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode
    pub fn set_verbose(&mut self, enable: bool) {
        self.verbose = enable;
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if input is a command (starts with /)
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}
