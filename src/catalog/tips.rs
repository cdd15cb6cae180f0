//! Health tips catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tip topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Nutrition,
    Exercise,
    Mental,
    Prevention,
    Sleep,
    General,
}

impl fmt::Display for TipCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TipCategory::Nutrition => "nutrition",
            TipCategory::Exercise => "exercise",
            TipCategory::Mental => "mental",
            TipCategory::Prevention => "prevention",
            TipCategory::Sleep => "sleep",
            TipCategory::General => "general",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for TipCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nutrition" => Ok(TipCategory::Nutrition),
            "exercise" => Ok(TipCategory::Exercise),
            "mental" => Ok(TipCategory::Mental),
            "prevention" => Ok(TipCategory::Prevention),
            "sleep" => Ok(TipCategory::Sleep),
            "general" => Ok(TipCategory::General),
            other => Err(format!("unknown tip category: {}", other)),
        }
    }
}

/// How demanding a tip is to adopt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipDifficulty {
    Easy,
    Moderate,
    Challenging,
}

impl fmt::Display for TipDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TipDifficulty::Easy => "easy",
            TipDifficulty::Moderate => "moderate",
            TipDifficulty::Challenging => "challenging",
        };
        write!(f, "{}", name)
    }
}

/// One wellness tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthTip {
    pub id: &'static str,
    pub title: &'static str,
    pub category: TipCategory,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub how_to: &'static [&'static str],
    pub frequency: &'static str,
    pub difficulty: TipDifficulty,
}

/// The tips catalog
pub const HEALTH_TIPS: &[HealthTip] = &[
    HealthTip {
        id: "hydration",
        title: "Stay Hydrated Daily",
        category: TipCategory::General,
        description: "Proper hydration is essential for all bodily functions, including temperature regulation, joint lubrication, and nutrient transport.",
        benefits: &["Improved energy levels", "Better skin health", "Enhanced cognitive function", "Optimal kidney function", "Better digestion"],
        how_to: &["Drink 8-10 glasses of water daily", "Start your day with a glass of water", "Carry a water bottle with you", "Eat water-rich foods like fruits and vegetables", "Monitor urine color (should be pale yellow)"],
        frequency: "Throughout the day",
        difficulty: TipDifficulty::Easy,
    },
    HealthTip {
        id: "physical-activity",
        title: "Regular Physical Activity",
        category: TipCategory::Exercise,
        description: "Regular exercise strengthens your heart, improves circulation, and helps maintain a healthy weight while boosting mental health.",
        benefits: &["Stronger cardiovascular system", "Better mood and reduced stress", "Improved bone density", "Enhanced immune function", "Better sleep quality"],
        how_to: &["Aim for 150 minutes of moderate exercise weekly", "Include both cardio and strength training", "Start with 10-minute walks if you're a beginner", "Choose activities you enjoy", "Schedule exercise like any important appointment"],
        frequency: "3-5 times per week",
        difficulty: TipDifficulty::Moderate,
    },
    HealthTip {
        id: "balanced-nutrition",
        title: "Balanced Nutrition",
        category: TipCategory::Nutrition,
        description: "A balanced diet provides essential nutrients for optimal body function, disease prevention, and maintaining energy levels.",
        benefits: &["Stable energy throughout the day", "Stronger immune system", "Better weight management", "Reduced risk of chronic diseases", "Improved mental clarity"],
        how_to: &["Fill half your plate with fruits and vegetables", "Choose whole grains over refined grains", "Include lean proteins in every meal", "Limit processed foods and added sugars", "Practice portion control"],
        frequency: "Every meal",
        difficulty: TipDifficulty::Moderate,
    },
    HealthTip {
        id: "quality-sleep",
        title: "Quality Sleep Habits",
        category: TipCategory::Sleep,
        description: "Good sleep is crucial for physical recovery, mental health, immune function, and overall well-being.",
        benefits: &["Better memory and concentration", "Improved immune function", "Better mood regulation", "Enhanced physical recovery", "Reduced risk of chronic diseases"],
        how_to: &["Maintain consistent sleep schedule", "Create a relaxing bedtime routine", "Keep bedroom cool, dark, and quiet", "Avoid screens 1 hour before bed", "Limit caffeine intake after 2 PM"],
        frequency: "7-9 hours nightly",
        difficulty: TipDifficulty::Moderate,
    },
    HealthTip {
        id: "stress-management",
        title: "Stress Management",
        category: TipCategory::Mental,
        description: "Managing stress effectively is essential for mental health and can prevent many physical health problems.",
        benefits: &["Lower blood pressure", "Reduced anxiety and depression", "Better immune function", "Improved relationships", "Enhanced decision-making"],
        how_to: &["Practice deep breathing exercises", "Try meditation or mindfulness", "Regular physical activity", "Maintain social connections", "Set realistic goals and priorities"],
        frequency: "Daily practice",
        difficulty: TipDifficulty::Moderate,
    },
    HealthTip {
        id: "preventive-checkups",
        title: "Preventive Health Checkups",
        category: TipCategory::Prevention,
        description: "Regular health screenings can detect problems early when they're easier to treat and prevent complications.",
        benefits: &["Early disease detection", "Better treatment outcomes", "Peace of mind", "Cost savings on healthcare", "Improved life expectancy"],
        how_to: &["Schedule annual physical exams", "Get age-appropriate screenings", "Stay up-to-date with vaccinations", "Monitor blood pressure regularly", "Keep track of family health history"],
        frequency: "Annually or as recommended",
        difficulty: TipDifficulty::Easy,
    },
    HealthTip {
        id: "fresh-air",
        title: "Fresh Air and Sunlight",
        category: TipCategory::General,
        description: "Spending time outdoors provides vitamin D, fresh air, and connection with nature, all beneficial for health.",
        benefits: &["Vitamin D production", "Improved mood", "Better air quality exposure", "Enhanced immune function", "Reduced stress levels"],
        how_to: &["Spend 15-30 minutes outside daily", "Take walks in parks or natural areas", "Exercise outdoors when possible", "Open windows for fresh air circulation", "Practice outdoor hobbies"],
        frequency: "Daily",
        difficulty: TipDifficulty::Easy,
    },
    HealthTip {
        id: "hand-hygiene",
        title: "Hand Hygiene",
        category: TipCategory::Prevention,
        description: "Proper hand washing is one of the most effective ways to prevent the spread of infections and illness.",
        benefits: &["Reduced infection risk", "Protection of others", "Lower healthcare costs", "Fewer sick days", "Better overall health"],
        how_to: &["Wash hands for at least 20 seconds", "Use soap and warm water", "Clean under fingernails", "Dry with clean towel or air dry", "Use hand sanitizer when soap unavailable"],
        frequency: "Multiple times daily",
        difficulty: TipDifficulty::Easy,
    },
];

/// Tips for one category, or the whole catalog when `category` is `None`
pub fn tips_by_category(category: Option<TipCategory>) -> Vec<&'static HealthTip> {
    HEALTH_TIPS
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tips() {
        assert_eq!(tips_by_category(None).len(), HEALTH_TIPS.len());
    }

    #[test]
    fn test_category_filter() {
        let prevention = tips_by_category(Some(TipCategory::Prevention));
        assert_eq!(prevention.len(), 2);
        assert!(prevention.iter().all(|t| t.category == TipCategory::Prevention));
    }

    #[test]
    fn test_tip_ids_unique() {
        let mut ids: Vec<&str> = HEALTH_TIPS.iter().map(|t| t.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Sleep".parse::<TipCategory>().unwrap(), TipCategory::Sleep);
        assert!("gaming".parse::<TipCategory>().is_err());
    }
}
