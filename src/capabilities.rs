//! Runtime capability probes
//!
//! Optional host features (speech synthesis, speech recognition, location)
//! are probed once at startup and the result is threaded through as
//! configuration. Nothing re-checks capabilities ad hoc, and a missing
//! capability hides the feature instead of erroring.

use crate::config::Config;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of one capability probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// Feature present and usable
    Available,
    /// Feature not present on this host
    Unavailable,
    /// Feature present but access was refused or the input was invalid
    Denied,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Availability::Available => "available",
            Availability::Unavailable => "unavailable",
            Availability::Denied => "denied",
        };
        write!(f, "{}", name)
    }
}

/// Speech synthesizer binaries recognized on PATH, in preference order
const SYNTHESIZERS: &[&str] = &["say", "espeak-ng", "espeak", "spd-say"];

/// Speech recognizer binaries recognized on PATH
const RECOGNIZERS: &[&str] = &["whisper-cli", "vosk-transcriber"];

/// Environment variable holding "lat,lon" coordinates
pub const GEO_ENV_VAR: &str = "HEALTHBUDDY_GEO";

/// Startup capability report
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub speech_output: Availability,
    pub speech_input: Availability,
    pub geolocation: Availability,
    /// Synthesizer binary found by the probe, when available
    pub synthesizer: Option<PathBuf>,
    /// Recognizer binary found by the probe, when available
    pub recognizer: Option<PathBuf>,
    /// Coordinates resolved by the probe, when available
    pub coordinates: Option<(f64, f64)>,
}

impl Capabilities {
    /// Probe the host once.
    ///
    /// Coordinates come from the config file first, then the environment
    /// variable; a malformed environment value is reported as Denied.
    pub fn probe(config: &Config) -> Self {
        let synthesizer = find_on_path(SYNTHESIZERS);
        let recognizer = find_on_path(RECOGNIZERS);

        let (geolocation, coordinates) = probe_location(config);

        Capabilities {
            speech_output: presence(&synthesizer),
            speech_input: presence(&recognizer),
            geolocation,
            synthesizer,
            recognizer,
            coordinates,
        }
    }

    /// A report with every capability absent, for tests and quiet mode
    pub fn none() -> Self {
        Capabilities {
            speech_output: Availability::Unavailable,
            speech_input: Availability::Unavailable,
            geolocation: Availability::Unavailable,
            synthesizer: None,
            recognizer: None,
            coordinates: None,
        }
    }
}

fn presence(path: &Option<PathBuf>) -> Availability {
    if path.is_some() {
        Availability::Available
    } else {
        Availability::Unavailable
    }
}

/// Locate the first of `names` on PATH
fn find_on_path(names: &[&str]) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;

    for dir in env::split_paths(&path_var) {
        for name in names {
            let candidate = dir.join(name);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Best-effort single read of coordinates
fn probe_location(config: &Config) -> (Availability, Option<(f64, f64)>) {
    if let Some(coords) = config.coordinates() {
        return (Availability::Available, Some(coords));
    }

    match env::var(GEO_ENV_VAR) {
        Ok(value) => match parse_coordinates(&value) {
            Some(coords) => (Availability::Available, Some(coords)),
            None => (Availability::Denied, None),
        },
        Err(_) => (Availability::Unavailable, None),
    }
}

/// Parse "lat,lon" with both values in range
pub fn parse_coordinates(value: &str) -> Option<(f64, f64)> {
    let (lat, lon) = value.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;

    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Some((lat, lon))
    } else {
        None
    }
}
