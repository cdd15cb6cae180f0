//! Disease reference database
//!
//! Six common conditions with educational detail, filtered client-side by
//! free-text search, category, and severity.

use crate::catalog::SeverityClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Disease classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseCategory {
    Infectious,
    Chronic,
    Mental,
    Genetic,
    Autoimmune,
}

impl fmt::Display for DiseaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiseaseCategory::Infectious => "infectious",
            DiseaseCategory::Chronic => "chronic",
            DiseaseCategory::Mental => "mental",
            DiseaseCategory::Genetic => "genetic",
            DiseaseCategory::Autoimmune => "autoimmune",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for DiseaseCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "infectious" => Ok(DiseaseCategory::Infectious),
            "chronic" => Ok(DiseaseCategory::Chronic),
            "mental" => Ok(DiseaseCategory::Mental),
            "genetic" => Ok(DiseaseCategory::Genetic),
            "autoimmune" => Ok(DiseaseCategory::Autoimmune),
            other => Err(format!("unknown disease category: {}", other)),
        }
    }
}

/// One disease entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disease {
    pub id: &'static str,
    pub name: &'static str,
    pub category: DiseaseCategory,
    pub severity: SeverityClass,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub risk_factors: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub treatment: &'static [&'static str],
    pub complications: &'static [&'static str],
    pub prevalence: &'static str,
    pub affected_systems: &'static [&'static str],
    pub common_age: &'static str,
    pub description: &'static str,
    pub when_to_seek_help: &'static [&'static str],
}

/// The disease database
pub const DISEASES: &[Disease] = &[
    Disease {
        id: "hypertension",
        name: "Hypertension (High Blood Pressure)",
        category: DiseaseCategory::Chronic,
        severity: SeverityClass::Medium,
        symptoms: &["Usually no symptoms", "Headaches (severe cases)", "Dizziness", "Blurred vision", "Chest pain"],
        causes: &["Unknown (primary)", "Kidney disease", "Adrenal disorders", "Thyroid problems", "Blood vessel defects"],
        risk_factors: &["Age", "Family history", "Obesity", "Sedentary lifestyle", "High sodium intake", "Smoking", "Diabetes"],
        prevention: &["Regular exercise", "Healthy diet (low sodium)", "Maintain healthy weight", "Limit alcohol", "Don't smoke", "Manage stress"],
        treatment: &["Lifestyle changes", "ACE inhibitors", "Diuretics", "Beta-blockers", "Calcium channel blockers", "Regular monitoring"],
        complications: &["Heart attack", "Stroke", "Heart failure", "Kidney damage", "Vision problems"],
        prevalence: "Affects 1 in 3 adults worldwide",
        affected_systems: &["Cardiovascular", "Renal", "Nervous"],
        common_age: "Adults over 30, increases with age",
        description: "A condition where blood pressure in arteries is persistently elevated, often called the \"silent killer\" due to lack of symptoms.",
        when_to_seek_help: &["Blood pressure consistently above 140/90", "Severe headache", "Chest pain", "Difficulty breathing", "Vision changes"],
    },
    Disease {
        id: "type2_diabetes",
        name: "Type 2 Diabetes",
        category: DiseaseCategory::Chronic,
        severity: SeverityClass::High,
        symptoms: &["Increased thirst", "Frequent urination", "Increased hunger", "Fatigue", "Blurred vision", "Slow-healing wounds"],
        causes: &["Insulin resistance", "Insufficient insulin production", "Genetic factors", "Lifestyle factors"],
        risk_factors: &["Obesity", "Age over 45", "Family history", "Physical inactivity", "High blood pressure", "Abnormal cholesterol"],
        prevention: &["Healthy diet", "Regular exercise", "Weight management", "Limit refined sugars", "Regular health checkups"],
        treatment: &["Metformin", "Insulin therapy", "Lifestyle modifications", "Blood sugar monitoring", "Diet management"],
        complications: &["Heart disease", "Stroke", "Kidney disease", "Eye damage", "Nerve damage", "Foot problems"],
        prevalence: "Over 400 million people worldwide",
        affected_systems: &["Endocrine", "Cardiovascular", "Nervous", "Renal"],
        common_age: "Usually develops after age 40, but increasing in younger adults",
        description: "A chronic condition affecting how the body processes blood sugar (glucose), characterized by insulin resistance.",
        when_to_seek_help: &["Blood sugar consistently above 126 mg/dL", "Symptoms of diabetic ketoacidosis", "Severe dehydration", "Persistent infections"],
    },
    Disease {
        id: "depression",
        name: "Depression",
        category: DiseaseCategory::Mental,
        severity: SeverityClass::Medium,
        symptoms: &["Persistent sadness", "Loss of interest", "Fatigue", "Sleep problems", "Appetite changes", "Difficulty concentrating", "Feelings of worthlessness"],
        causes: &["Genetic factors", "Brain chemistry imbalance", "Hormonal changes", "Trauma", "Chronic illness", "Substance abuse"],
        risk_factors: &["Family history", "Major life changes", "Chronic illness", "Personality traits", "Substance abuse", "Medications"],
        prevention: &["Regular exercise", "Healthy sleep habits", "Social connections", "Stress management", "Avoid alcohol/drugs", "Seek early help"],
        treatment: &["Psychotherapy", "Antidepressants", "Cognitive behavioral therapy", "Lifestyle changes", "Support groups"],
        complications: &["Suicide risk", "Substance abuse", "Relationship problems", "Work/school difficulties", "Physical health problems"],
        prevalence: "Affects over 280 million people worldwide",
        affected_systems: &["Nervous", "Endocrine"],
        common_age: "Can occur at any age, often begins in teens/early adulthood",
        description: "A mental health disorder characterized by persistent feelings of sadness and loss of interest in activities.",
        when_to_seek_help: &["Persistent symptoms for 2+ weeks", "Thoughts of self-harm", "Unable to function daily", "Substance abuse", "Severe mood changes"],
    },
    Disease {
        id: "covid19",
        name: "COVID-19",
        category: DiseaseCategory::Infectious,
        severity: SeverityClass::Medium,
        symptoms: &["Fever", "Cough", "Shortness of breath", "Loss of taste/smell", "Fatigue", "Body aches", "Sore throat"],
        causes: &["SARS-CoV-2 virus infection"],
        risk_factors: &["Age over 65", "Chronic diseases", "Immunocompromised", "Obesity", "Close contact with infected person"],
        prevention: &["Vaccination", "Mask wearing", "Hand hygiene", "Social distancing", "Avoid crowds", "Good ventilation"],
        treatment: &["Rest and fluids", "Symptom management", "Antiviral medications (if indicated)", "Oxygen therapy (severe cases)", "Hospitalization if needed"],
        complications: &["Pneumonia", "Acute respiratory distress", "Multi-organ failure", "Long COVID", "Blood clots"],
        prevalence: "Global pandemic, millions affected worldwide",
        affected_systems: &["Respiratory", "Cardiovascular", "Nervous", "Immune"],
        common_age: "All ages, severe illness more common in older adults",
        description: "A contagious respiratory illness caused by the SARS-CoV-2 virus, ranging from mild to severe symptoms.",
        when_to_seek_help: &["Difficulty breathing", "Chest pain", "High fever", "Confusion", "Severe dehydration", "Persistent symptoms"],
    },
    Disease {
        id: "asthma",
        name: "Asthma",
        category: DiseaseCategory::Chronic,
        severity: SeverityClass::Medium,
        symptoms: &["Wheezing", "Shortness of breath", "Chest tightness", "Coughing (especially at night)", "Difficulty speaking"],
        causes: &["Genetic predisposition", "Environmental factors", "Allergens", "Respiratory infections", "Air pollution"],
        risk_factors: &["Family history", "Allergies", "Eczema", "Obesity", "Smoking exposure", "Occupational chemicals"],
        prevention: &["Avoid triggers", "Control allergies", "Get vaccinated", "Maintain healthy weight", "Avoid smoking", "Use air purifiers"],
        treatment: &["Quick-relief inhalers", "Long-term control medications", "Allergy medications", "Immunotherapy", "Action plan"],
        complications: &["Severe asthma attacks", "Sleep problems", "Permanent lung changes", "Side effects from medications"],
        prevalence: "Affects over 300 million people globally",
        affected_systems: &["Respiratory"],
        common_age: "Often begins in childhood, can develop at any age",
        description: "A chronic respiratory condition where airways become inflamed and narrowed, making breathing difficult.",
        when_to_seek_help: &["Severe breathing difficulty", "No improvement with rescue inhaler", "Can't speak in full sentences", "Frequent attacks"],
    },
    Disease {
        id: "migraine",
        name: "Migraine",
        category: DiseaseCategory::Chronic,
        severity: SeverityClass::Medium,
        symptoms: &["Severe headache", "Nausea", "Vomiting", "Light sensitivity", "Sound sensitivity", "Visual aura", "Dizziness"],
        causes: &["Genetic factors", "Hormonal changes", "Stress", "Sleep changes", "Weather changes", "Certain foods", "Medications"],
        risk_factors: &["Family history", "Age (20s-50s)", "Female gender", "Hormonal changes", "Stress", "Sleep disorders"],
        prevention: &["Identify triggers", "Regular sleep schedule", "Stress management", "Regular meals", "Stay hydrated", "Limit caffeine"],
        treatment: &["Pain relievers", "Triptans", "Preventive medications", "Lifestyle modifications", "Rest in dark room"],
        complications: &["Chronic migraine", "Medication overuse headache", "Depression", "Anxiety", "Sleep disorders"],
        prevalence: "Affects 1 billion people worldwide",
        affected_systems: &["Nervous"],
        common_age: "Most common in adults 20-50 years old",
        description: "A neurological condition characterized by recurring severe headaches often accompanied by other symptoms.",
        when_to_seek_help: &["Sudden severe headache", "Headache with fever/stiff neck", "Vision changes", "Weakness", "Frequent severe headaches"],
    },
];

/// Filter criteria for disease search
#[derive(Debug, Clone, Default)]
pub struct DiseaseFilter {
    pub search: Option<String>,
    pub category: Option<DiseaseCategory>,
    pub severity: Option<SeverityClass>,
}

impl Disease {
    /// Case-insensitive substring match over name, symptoms, and description
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self
                .symptoms
                .iter()
                .any(|s| s.to_lowercase().contains(&term))
    }
}

/// Apply a filter to the disease database, preserving catalog order
pub fn filter_diseases(filter: &DiseaseFilter) -> Vec<&'static Disease> {
    DISEASES
        .iter()
        .filter(|d| {
            filter
                .search
                .as_deref()
                .map_or(true, |term| d.matches_search(term))
        })
        .filter(|d| filter.category.map_or(true, |c| d.category == c))
        .filter(|d| filter.severity.map_or(true, |s| d.severity == s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_returns_all() {
        let all = filter_diseases(&DiseaseFilter::default());
        assert_eq!(all.len(), DISEASES.len());
    }

    #[test]
    fn test_search_by_name() {
        let filter = DiseaseFilter {
            search: Some("asthma".to_string()),
            ..Default::default()
        };
        let results = filter_diseases(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "asthma");
    }

    #[test]
    fn test_search_by_symptom() {
        // "Wheezing" appears in asthma's symptom list
        let filter = DiseaseFilter {
            search: Some("wheez".to_string()),
            ..Default::default()
        };
        let results = filter_diseases(&filter);
        assert!(results.iter().any(|d| d.id == "asthma"));
    }

    #[test]
    fn test_category_filter() {
        let filter = DiseaseFilter {
            category: Some(DiseaseCategory::Mental),
            ..Default::default()
        };
        let results = filter_diseases(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "depression");
    }

    #[test]
    fn test_severity_filter() {
        let filter = DiseaseFilter {
            severity: Some(SeverityClass::High),
            ..Default::default()
        };
        let results = filter_diseases(&filter);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "type2_diabetes");
    }

    #[test]
    fn test_combined_filters() {
        let filter = DiseaseFilter {
            search: Some("blood".to_string()),
            category: Some(DiseaseCategory::Chronic),
            severity: Some(SeverityClass::Medium),
        };
        let results = filter_diseases(&filter);
        assert!(results.iter().any(|d| d.id == "hypertension"));
        assert!(results.iter().all(|d| d.category == DiseaseCategory::Chronic));
    }

    #[test]
    fn test_no_match() {
        let filter = DiseaseFilter {
            search: Some("zzzz-no-such-disease".to_string()),
            ..Default::default()
        };
        assert!(filter_diseases(&filter).is_empty());
    }
}
