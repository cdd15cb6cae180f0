//! Display manager for REPL terminal UI
//!
//! Formatted rendering for chat messages, classifier output, and the
//! catalogs, plus a spinner for in-flight assistant requests.

use crate::catalog::{Disease, HealthTip, HealthcareFacility, Symptom};
use crate::checker::{CandidateCondition, CheckerState};
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Medical disclaimer shown with classifier output
pub const DISCLAIMER: &str =
    "This is not a medical diagnosis. Consult a healthcare professional for medical advice.";

/// Display manager for REPL UI
pub struct DisplayManager {
    spinner: Option<ProgressBar>,
    dark_theme: bool,
}

impl DisplayManager {
    pub fn new(dark_theme: bool) -> Self {
        DisplayManager {
            spinner: None,
            dark_theme,
        }
    }

    pub fn set_dark_theme(&mut self, dark: bool) {
        self.dark_theme = dark;
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, model: &str) {
        let width = 64;
        let top = "=".repeat(width).cyan();
        let title = format!("  HealthBuddy {} - Terminal Health Assistant", version);
        let theme = if self.dark_theme { "dark" } else { "light" };
        let info = format!("  Model: {} | Theme: {} | Mode: REPL", model, theme);

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Ask a health question (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Start the "waiting for the assistant" spinner
    pub fn start_thinking(&mut self) {
        self.stop_spinner();

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        self.spinner = Some(pb);
    }

    /// Clear the spinner, if running
    pub fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    /// Render one assistant reply
    pub fn show_reply(&mut self, text: &str) {
        self.stop_spinner();
        println!("\n{} {}\n", "assistant:".bold().cyan(), text);
    }

    /// Render classifier candidates with the disclaimer
    pub fn show_candidates(&self, candidates: &[CandidateCondition]) {
        self.show_section("Possible Conditions");

        for (i, candidate) in candidates.iter().enumerate() {
            let urgency = match candidate.urgency.to_string().as_str() {
                "urgent" | "emergency" => candidate.urgency.to_string().red().bold(),
                "soon" => candidate.urgency.to_string().yellow(),
                _ => candidate.urgency.to_string().green(),
            };

            println!(
                "  {}. {} {} | severity: {} | urgency: {}",
                (i + 1).to_string().cyan(),
                candidate.name.bold(),
                format!("({}%)", candidate.probability).dimmed(),
                candidate.severity,
                urgency
            );
            println!("     {}", candidate.description.dimmed());
            for action in &candidate.recommended_actions {
                println!("     - {}", action);
            }
        }

        println!("\n{}\n", DISCLAIMER.yellow());
    }

    /// Render the checker's current step header
    pub fn show_checker_step(&self, state: CheckerState) {
        println!(
            "\n{} {}",
            format!("[Step {}/3]", state.step()).cyan(),
            state.display_name().bold()
        );
    }

    /// Render the symptom catalog grouped for selection
    pub fn show_symptoms(&self, symptoms: &[Symptom], selected: &[&str]) {
        self.show_section("Symptoms");

        for symptom in symptoms {
            let marker = if selected.contains(&symptom.id) {
                "[x]".green()
            } else {
                "[ ]".dimmed()
            };
            println!(
                "  {} {:<20} {} ({})",
                marker,
                symptom.id,
                symptom.name,
                symptom.category.to_string().dimmed()
            );
        }
        println!();
    }

    /// Render one disease card
    pub fn show_disease(&self, disease: &Disease) {
        println!("\n{}", disease.name.bold().cyan());
        println!(
            "{}",
            format!(
                "{} | severity: {} | prevalence: {}",
                disease.category, disease.severity, disease.prevalence
            )
            .dimmed()
        );
        println!("  {}", disease.description);
        println!("  Symptoms: {}", disease.symptoms.join(", "));
        println!("  Prevention: {}", disease.prevention.join(", "));
        println!("  {} {}", "Seek help:".yellow(), disease.when_to_seek_help.join("; "));
    }

    /// Render a facility listing
    pub fn show_facilities(&self, facilities: &[(f64, &HealthcareFacility)]) {
        self.show_section("Healthcare Facilities");

        for (i, (distance, facility)) in facilities.iter().enumerate() {
            let open = if facility.is_open {
                "open".green()
            } else {
                "closed".red()
            };
            println!(
                "  {}. {} {} | {:.1} km | rating {:.1} | {}",
                (i + 1).to_string().cyan(),
                facility.name.bold(),
                format!("({})", facility.facility_type).dimmed(),
                distance,
                facility.rating,
                open
            );
            println!("     {} | {}", facility.address.dimmed(), facility.phone.dimmed());
        }
        println!();
    }

    /// Render the tips list
    pub fn show_tips(&self, tips: &[&HealthTip]) {
        self.show_section("Health Tips");

        for tip in tips {
            println!(
                "  {} {} {}",
                "•".cyan(),
                tip.title.bold(),
                format!("({}, {})", tip.category, tip.difficulty).dimmed()
            );
            println!("    {}", tip.description);
        }
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Display debug message (only if verbose)
    pub fn show_debug(&self, debug: &str, verbose: bool) {
        if verbose {
            println!("{} {}", "Debug:".dimmed(), debug.dimmed());
        }
    }

    /// Display prompt for user input
    pub fn show_prompt(&self) -> io::Result<()> {
        print!("{}", ">healthbuddy: ".green().bold());
        io::stdout().flush()
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(false)
    }
}
