//! Static health catalogs
//!
//! All browsable data in HealthBuddy is fixed at compile time: the symptom
//! table, the disease database, the mock facility list, and the health tips.
//! Screens filter these catalogs client-side; nothing is fetched or stored.

pub mod diseases;
pub mod facilities;
pub mod symptoms;
pub mod tips;

pub use diseases::{filter_diseases, Disease, DiseaseCategory, DiseaseFilter, DISEASES};
pub use facilities::{find_facilities, FacilityFilter, FacilityType, HealthcareFacility, FACILITIES};
pub use symptoms::{find_symptom, Symptom, SymptomCategory, SymptomSeverity, SYMPTOMS};
pub use tips::{tips_by_category, HealthTip, TipCategory, TipDifficulty, HEALTH_TIPS};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk class shared by diseases and classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityClass {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityClass::Low => "low",
            SeverityClass::Medium => "medium",
            SeverityClass::High => "high",
            SeverityClass::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SeverityClass {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(SeverityClass::Low),
            "medium" => Ok(SeverityClass::Medium),
            "high" => Ok(SeverityClass::High),
            "critical" => Ok(SeverityClass::Critical),
            other => Err(format!("unknown severity level: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(SeverityClass::Low < SeverityClass::Medium);
        assert!(SeverityClass::High < SeverityClass::Critical);
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("HIGH".parse::<SeverityClass>().unwrap(), SeverityClass::High);
        assert!("extreme".parse::<SeverityClass>().is_err());
    }
}
