//! Symptom catalog for the checker
//!
//! A fixed table of selectable symptoms, defined once at compile time and
//! never mutated. Identifiers are the keys used by the classifier rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body-system grouping for a symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomCategory {
    General,
    Respiratory,
    Neurological,
    Digestive,
    Cardiovascular,
    Musculoskeletal,
}

impl SymptomCategory {
    /// All categories in display order
    pub fn all() -> &'static [SymptomCategory] {
        &[
            SymptomCategory::General,
            SymptomCategory::Respiratory,
            SymptomCategory::Neurological,
            SymptomCategory::Digestive,
            SymptomCategory::Cardiovascular,
            SymptomCategory::Musculoskeletal,
        ]
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymptomCategory::General => "general",
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Neurological => "neurological",
            SymptomCategory::Digestive => "digestive",
            SymptomCategory::Cardiovascular => "cardiovascular",
            SymptomCategory::Musculoskeletal => "musculoskeletal",
        };
        write!(f, "{}", name)
    }
}

/// Severity tag attached to a symptom entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for SymptomSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymptomSeverity::Mild => "mild",
            SymptomSeverity::Moderate => "moderate",
            SymptomSeverity::Severe => "severe",
        };
        write!(f, "{}", name)
    }
}

/// One selectable symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symptom {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SymptomCategory,
    pub severity: SymptomSeverity,
}

/// The full symptom catalog
pub const SYMPTOMS: &[Symptom] = &[
    // General
    Symptom { id: "fever", name: "Fever/High Temperature", category: SymptomCategory::General, severity: SymptomSeverity::Moderate },
    Symptom { id: "fatigue", name: "Fatigue/Weakness", category: SymptomCategory::General, severity: SymptomSeverity::Mild },
    Symptom { id: "chills", name: "Chills", category: SymptomCategory::General, severity: SymptomSeverity::Mild },
    Symptom { id: "sweating", name: "Excessive Sweating", category: SymptomCategory::General, severity: SymptomSeverity::Mild },
    Symptom { id: "weight_loss", name: "Unexplained Weight Loss", category: SymptomCategory::General, severity: SymptomSeverity::Moderate },
    // Respiratory
    Symptom { id: "cough", name: "Cough", category: SymptomCategory::Respiratory, severity: SymptomSeverity::Mild },
    Symptom { id: "shortness_breath", name: "Shortness of Breath", category: SymptomCategory::Respiratory, severity: SymptomSeverity::Severe },
    Symptom { id: "chest_pain", name: "Chest Pain", category: SymptomCategory::Respiratory, severity: SymptomSeverity::Severe },
    Symptom { id: "wheezing", name: "Wheezing", category: SymptomCategory::Respiratory, severity: SymptomSeverity::Moderate },
    Symptom { id: "sore_throat", name: "Sore Throat", category: SymptomCategory::Respiratory, severity: SymptomSeverity::Mild },
    // Neurological
    Symptom { id: "headache", name: "Headache", category: SymptomCategory::Neurological, severity: SymptomSeverity::Mild },
    Symptom { id: "dizziness", name: "Dizziness", category: SymptomCategory::Neurological, severity: SymptomSeverity::Moderate },
    Symptom { id: "confusion", name: "Confusion/Memory Issues", category: SymptomCategory::Neurological, severity: SymptomSeverity::Severe },
    Symptom { id: "vision_problems", name: "Vision Problems", category: SymptomCategory::Neurological, severity: SymptomSeverity::Moderate },
    Symptom { id: "numbness", name: "Numbness/Tingling", category: SymptomCategory::Neurological, severity: SymptomSeverity::Moderate },
    // Digestive
    Symptom { id: "nausea", name: "Nausea/Vomiting", category: SymptomCategory::Digestive, severity: SymptomSeverity::Moderate },
    Symptom { id: "abdominal_pain", name: "Abdominal Pain", category: SymptomCategory::Digestive, severity: SymptomSeverity::Moderate },
    Symptom { id: "diarrhea", name: "Diarrhea", category: SymptomCategory::Digestive, severity: SymptomSeverity::Mild },
    Symptom { id: "constipation", name: "Constipation", category: SymptomCategory::Digestive, severity: SymptomSeverity::Mild },
    Symptom { id: "loss_appetite", name: "Loss of Appetite", category: SymptomCategory::Digestive, severity: SymptomSeverity::Mild },
    // Cardiovascular
    Symptom { id: "rapid_heartbeat", name: "Rapid Heartbeat", category: SymptomCategory::Cardiovascular, severity: SymptomSeverity::Moderate },
    Symptom { id: "chest_pressure", name: "Chest Pressure", category: SymptomCategory::Cardiovascular, severity: SymptomSeverity::Severe },
    Symptom { id: "swelling", name: "Swelling in Legs/Feet", category: SymptomCategory::Cardiovascular, severity: SymptomSeverity::Moderate },
    Symptom { id: "fainting", name: "Fainting/Near Fainting", category: SymptomCategory::Cardiovascular, severity: SymptomSeverity::Severe },
    // Musculoskeletal
    Symptom { id: "joint_pain", name: "Joint Pain", category: SymptomCategory::Musculoskeletal, severity: SymptomSeverity::Mild },
    Symptom { id: "muscle_aches", name: "Muscle Aches", category: SymptomCategory::Musculoskeletal, severity: SymptomSeverity::Mild },
    Symptom { id: "back_pain", name: "Back Pain", category: SymptomCategory::Musculoskeletal, severity: SymptomSeverity::Moderate },
    Symptom { id: "stiffness", name: "Stiffness", category: SymptomCategory::Musculoskeletal, severity: SymptomSeverity::Mild },
];

/// Look up a symptom by identifier
pub fn find_symptom(id: &str) -> Option<&'static Symptom> {
    SYMPTOMS.iter().find(|s| s.id == id)
}

/// All symptoms in one category, in catalog order
pub fn symptoms_in_category(category: SymptomCategory) -> Vec<&'static Symptom> {
    SYMPTOMS.iter().filter(|s| s.category == category).collect()
}
