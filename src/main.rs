//! HealthBuddy - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;

use healthbuddy::app::AppState;
use healthbuddy::capabilities::Capabilities;
use healthbuddy::catalog::{
    filter_diseases, find_facilities, tips_by_category, DiseaseFilter, FacilityFilter,
};
use healthbuddy::chat::request_reply_verbose;
use healthbuddy::checker::{analyze, SelectionSet};
use healthbuddy::cli::{Args, Commands};
use healthbuddy::config::Config;
use healthbuddy::doctor::Doctor;
use healthbuddy::gemini::GeminiClient;
use healthbuddy::repl::{DisplayManager, ReplSession};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(message) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), message);
        std::process::exit(2);
    }

    let config = load_config(&args);
    let capabilities = Capabilities::probe(&config);

    match &args.command {
        Some(Commands::Start) => {
            run_repl(&args, config, capabilities).await?;
        }
        Some(Commands::Check { symptoms }) => {
            run_check(symptoms, config)?;
        }
        Some(Commands::Diseases {
            search,
            category,
            severity,
        }) => {
            show_diseases(search.clone(), category.as_deref(), severity.as_deref())?;
        }
        Some(Commands::Facilities { kind, search }) => {
            show_facilities(kind.as_deref(), search.clone(), &capabilities)?;
        }
        Some(Commands::Tips { category }) => {
            show_tips(category.as_deref())?;
        }
        Some(Commands::Doctor) => {
            run_doctor(config, capabilities).await;
        }
        Some(Commands::Config) => {
            show_config(&config)?;
        }
        None => match &args.message {
            Some(message) => {
                run_one_shot(&args, message, config).await?;
            }
            None => {
                run_repl(&args, config, capabilities).await?;
            }
        },
    }

    Ok(())
}

/// Load config from disk, applying CLI overrides
fn load_config(args: &Args) -> Config {
    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!(
            "{} Could not load config: {} (using defaults)",
            "Warning:".yellow(),
            e
        );
        Config::default()
    });

    if let Some(model) = &args.model {
        config.api.model = Some(model.clone());
    }
    if let Some(base_url) = &args.base_url {
        config.api.base_url = Some(base_url.clone());
    }

    config
}

/// Build the Gemini client, failing with a clear message when no key is set
fn build_client(config: &Config) -> Result<GeminiClient> {
    let key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured. Set GEMINI_API_KEY or add one to {}",
            Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string())
        )
    })?;

    Ok(GeminiClient::new(config.api_base(), config.model(), &key)?)
}

/// Interactive REPL mode
async fn run_repl(args: &Args, config: Config, capabilities: Capabilities) -> Result<()> {
    let client = build_client(&config)?;
    let model = client.model().to_string();

    let app = AppState::new(config, capabilities);
    let mut session = ReplSession::new(app, Arc::new(client))?;

    let verbosity = args.verbosity();
    if verbosity.show_progress() {
        session.show_welcome(env!("CARGO_PKG_VERSION"), &model);
    }
    session.set_verbose(verbosity.show_errors());

    session.run(verbosity).await
}

/// One-shot question without entering the REPL
async fn run_one_shot(args: &Args, message: &str, config: Config) -> Result<()> {
    let client = build_client(&config)?;
    let backend: Arc<dyn healthbuddy::gemini::ChatBackend> = Arc::new(client);

    let (reply, error) = request_reply_verbose(backend, message).await;

    if let Some(error) = error {
        if args.verbosity().show_errors() {
            eprintln!("{} {}", "Debug:".dimmed(), error.dimmed());
        }
    }

    println!("{}", reply);
    Ok(())
}

/// Classify a symptom list given on the command line
fn run_check(symptoms: &[String], config: Config) -> Result<()> {
    let mut selection = SelectionSet::new();
    for id in symptoms {
        if let Err(e) = selection.toggle(id) {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(2);
        }
    }

    let candidates = analyze(&selection)?;
    let display = DisplayManager::new(config.ui.dark_theme);
    display.show_candidates(&candidates);
    Ok(())
}

/// Print matching disease cards
fn show_diseases(
    search: Option<String>,
    category: Option<&str>,
    severity: Option<&str>,
) -> Result<()> {
    let filter = DiseaseFilter {
        search,
        category: parse_opt(category)?,
        severity: parse_opt(severity)?,
    };

    let results = filter_diseases(&filter);
    if results.is_empty() {
        println!("{}", "No diseases match.".yellow());
        return Ok(());
    }

    let display = DisplayManager::default();
    for disease in results {
        display.show_disease(disease);
    }
    println!();
    Ok(())
}

/// Print the facility list ranked by distance
fn show_facilities(
    kind: Option<&str>,
    search: Option<String>,
    capabilities: &Capabilities,
) -> Result<()> {
    let filter = FacilityFilter {
        search,
        facility_type: parse_opt(kind)?,
    };

    let coords = capabilities.coordinates;
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

    DisplayManager::default().show_facilities(&ranked);
    Ok(())
}

/// Print health tips, optionally filtered by category
fn show_tips(category: Option<&str>) -> Result<()> {
    let tips = tips_by_category(parse_opt(category)?);
    DisplayManager::default().show_tips(&tips);
    Ok(())
}

/// Run diagnostics; exit code 1 when any check fails
async fn run_doctor(config: Config, capabilities: Capabilities) {
    let doctor = Doctor::new(config, capabilities);
    let checks = doctor.run_diagnostics().await;

    Doctor::display_results(&checks);

    if !Doctor::overall_status(&checks) {
        std::process::exit(1);
    }
}

/// Display current configuration with the key redacted
fn show_config(config: &Config) -> Result<()> {
    println!("\n{}", "Configuration:".bold().cyan());
    println!("{}", "=".repeat(50));
    println!("  File:          {}", Config::config_path()?.display());
    println!("  API Base:      {}", config.api_base());
    println!("  Model:         {}", config.model());
    println!(
        "  API Key:       {}",
        if config.api_key().is_some() {
            "set".green()
        } else {
            "not set".red()
        }
    );
    println!("  Language:      {}", config.ui.language);
    println!("  Dark Theme:    {}", config.ui.dark_theme);
    println!("  Speak Replies: {}", config.ui.speak_replies);
    match config.coordinates() {
        Some((lat, lon)) => println!("  Location:      {}, {}", lat, lon),
        None => println!("  Location:      not set"),
    }
    println!();
    Ok(())
}

/// Parse an optional CLI filter value, surfacing bad input as an error
fn parse_opt<T: std::str::FromStr<Err = String>>(value: Option<&str>) -> Result<Option<T>> {
    match value {
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(None),
    }
}
