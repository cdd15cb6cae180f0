//! Command-line argument parsing for HealthBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};

/// HealthBuddy - Terminal health assistant with symptom checking and chat
#[derive(Parser, Debug)]
#[command(name = "healthbuddy")]
#[command(version)]
#[command(about = "AI health assistant: chat, symptom checker, disease and facility lookup", long_about = None)]
pub struct Args {
    /// One-shot question for the assistant (starts the REPL when omitted)
    #[arg(value_name = "MESSAGE")]
    pub message: Option<String>,

    /// Gemini model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// API base URL override
    #[arg(long)]
    pub base_url: Option<String>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress all output except final result)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start interactive REPL mode
    Start,

    /// Run the symptom checker over the given symptom ids
    Check {
        /// Symptom ids (e.g. fever cough fatigue)
        #[arg(value_name = "SYMPTOM", required = true)]
        symptoms: Vec<String>,
    },

    /// Browse the disease catalog
    Diseases {
        /// Free-text search over names, descriptions, and symptoms
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category (infectious, chronic, mental, genetic, autoimmune)
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by severity (low, medium, high, critical)
        #[arg(long)]
        severity: Option<String>,
    },

    /// List healthcare facilities
    Facilities {
        /// Filter by type (hospital, clinic, emergency, pharmacy)
        #[arg(short, long)]
        kind: Option<String>,

        /// Free-text search over names and services
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show health tips
    Tips {
        /// Filter by category (nutrition, exercise, mental, prevention, sleep, general)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Run system diagnostics and health checks
    Doctor,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// A positional message and a subcommand are mutually exclusive
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_some() && self.message.is_some() {
            return Err("Cannot specify a message with a subcommand.".to_string());
        }
        Ok(())
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if should show progress spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show backend errors behind fallback replies
    pub fn show_errors(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(message: Option<&str>, verbose: u8, quiet: bool, command: Option<Commands>) -> Args {
        Args {
            message: message.map(|s| s.to_string()),
            model: None,
            base_url: None,
            verbose,
            quiet,
            command,
        }
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(args(None, 0, true, None).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(args(None, 0, false, None).verbosity(), Verbosity::Normal);
        assert_eq!(args(None, 1, false, None).verbosity(), Verbosity::Verbose);
        assert_eq!(args(None, 3, false, None).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_message_without_subcommand_is_valid() {
        assert!(args(Some("is fever serious"), 0, false, None).validate().is_ok());
        assert!(args(None, 0, false, None).validate().is_ok());
    }

    #[test]
    fn test_message_with_subcommand_rejected() {
        let a = args(Some("hello"), 0, false, Some(Commands::Doctor));
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_check_parses_multiple_symptoms() {
        let parsed = Args::parse_from(["healthbuddy", "check", "fever", "cough", "fatigue"]);
        match parsed.command {
            Some(Commands::Check { symptoms }) => {
                assert_eq!(symptoms, ["fever", "cough", "fatigue"]);
            }
            _ => panic!("expected Check subcommand"),
        }
    }

    #[test]
    fn test_quiet_suppresses_progress() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert!(Verbosity::Verbose.show_errors());
        assert!(!Verbosity::Normal.show_errors());
    }
}
