//! Doctor command for system diagnostics
//!
//! Runs health checks covering the Gemini endpoint, the API key, the config
//! file, and the optional host capabilities.

use crate::capabilities::{Availability, Capabilities};
use crate::config::Config;
use crate::gemini::GeminiClient;
use colored::Colorize;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

/// Doctor diagnostics system
pub struct Doctor {
    config: Config,
    capabilities: Capabilities,
}

impl Doctor {
    /// Create a new doctor instance
    pub fn new(config: Config, capabilities: Capabilities) -> Self {
        Self {
            config,
            capabilities,
        }
    }

    /// Run all health checks
    pub async fn run_diagnostics(&self) -> Vec<HealthCheck> {
        let mut checks = Vec::new();

        checks.push(self.check_config_file());
        checks.push(self.check_api_key());
        checks.push(self.check_gemini_endpoint().await);
        checks.push(self.check_speech_output());
        checks.push(self.check_geolocation());

        checks
    }

    /// Check 1: config file exists and is readable
    fn check_config_file(&self) -> HealthCheck {
        let status = match Config::config_path() {
            Ok(path) if path.exists() => HealthStatus::Pass,
            Ok(path) => HealthStatus::Warn(format!(
                "No config file at {} (defaults in use)",
                path.display()
            )),
            Err(e) => HealthStatus::Fail(format!("Cannot resolve config path: {}", e)),
        };

        HealthCheck {
            name: "Config File".to_string(),
            status,
        }
    }

    /// Check 2: an API key is set somewhere
    fn check_api_key(&self) -> HealthCheck {
        let status = match self.config.api_key() {
            Some(key) if !key.trim().is_empty() => HealthStatus::Pass,
            _ => HealthStatus::Fail(
                "No API key in config or GEMINI_API_KEY environment variable".to_string(),
            ),
        };

        HealthCheck {
            name: "API Key".to_string(),
            status,
        }
    }

    /// Check 3: Gemini endpoint reachable
    async fn check_gemini_endpoint(&self) -> HealthCheck {
        let key = self.config.api_key().unwrap_or_default();
        let status = match GeminiClient::new(self.config.api_base(), self.config.model(), &key) {
            Ok(client) => {
                if client.is_reachable().await {
                    HealthStatus::Pass
                } else {
                    HealthStatus::Fail(format!("Cannot reach {}", self.config.api_base()))
                }
            }
            Err(e) => HealthStatus::Fail(format!("Cannot build HTTP client: {}", e)),
        };

        HealthCheck {
            name: "Gemini Endpoint".to_string(),
            status,
        }
    }

    /// Check 4: a speech synthesizer is installed
    fn check_speech_output(&self) -> HealthCheck {
        let status = match (&self.capabilities.speech_output, &self.capabilities.synthesizer) {
            (Availability::Available, Some(_)) => HealthStatus::Pass,
            _ => HealthStatus::Warn(
                "No speech synthesizer on PATH (spoken replies disabled)".to_string(),
            ),
        };

        HealthCheck {
            name: "Speech Output".to_string(),
            status,
        }
    }

    /// Check 5: coordinates for the facility finder
    fn check_geolocation(&self) -> HealthCheck {
        let status = match self.capabilities.geolocation {
            Availability::Available => HealthStatus::Pass,
            Availability::Unavailable => HealthStatus::Warn(
                "No coordinates configured (facility distances are estimates)".to_string(),
            ),
            Availability::Denied => HealthStatus::Fail(
                "Coordinates are set but malformed; expected \"lat,lon\"".to_string(),
            ),
        };

        HealthCheck {
            name: "Geolocation".to_string(),
            status,
        }
    }

    /// Display diagnostics results
    pub fn display_results(checks: &[HealthCheck]) {
        println!("\n{}\n", "HealthBuddy System Diagnostics".bold());
        println!("{:<20} {}", "Check", "Status");
        println!("{}", "=".repeat(50));

        for check in checks {
            let message = match &check.status {
                HealthStatus::Pass => "PASS".green().to_string(),
                HealthStatus::Warn(msg) => format!("WARN: {}", msg).yellow().to_string(),
                HealthStatus::Fail(msg) => format!("FAIL: {}", msg).red().to_string(),
            };

            println!("{:<20} {}", check.name, message);
        }

        println!();
    }

    /// Get overall health status
    pub fn overall_status(checks: &[HealthCheck]) -> bool {
        !checks.iter().any(|c| matches!(c.status, HealthStatus::Fail(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> Doctor {
        Doctor::new(Config::default(), Capabilities::none())
    }

    #[test]
    fn test_health_status_equality() {
        assert_eq!(HealthStatus::Pass, HealthStatus::Pass);
        assert_eq!(
            HealthStatus::Warn("test".to_string()),
            HealthStatus::Warn("test".to_string())
        );
    }

    #[test]
    fn test_overall_status_pass_with_warnings() {
        let checks = vec![
            HealthCheck {
                name: "Test 1".to_string(),
                status: HealthStatus::Pass,
            },
            HealthCheck {
                name: "Test 2".to_string(),
                status: HealthStatus::Warn("warning".to_string()),
            },
        ];
        assert!(Doctor::overall_status(&checks));
    }

    #[test]
    fn test_overall_status_fail() {
        let checks = vec![HealthCheck {
            name: "Test 1".to_string(),
            status: HealthStatus::Fail("error".to_string()),
        }];
        assert!(!Doctor::overall_status(&checks));
    }

    #[test]
    fn test_speech_check_warns_without_synthesizer() {
        let check = doctor().check_speech_output();
        assert_eq!(check.name, "Speech Output");
        assert!(matches!(check.status, HealthStatus::Warn(_)));
    }

    #[test]
    fn test_geolocation_denied_fails() {
        let mut caps = Capabilities::none();
        caps.geolocation = Availability::Denied;
        let doctor = Doctor::new(Config::default(), caps);

        let check = doctor.check_geolocation();
        assert!(matches!(check.status, HealthStatus::Fail(_)));
    }
}
