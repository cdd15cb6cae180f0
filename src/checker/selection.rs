//! Selection set for the symptom checker
//!
//! Tracks which symptom identifiers the user has chosen. Toggling is an
//! idempotent symmetric difference: toggling the same id twice restores the
//! prior set. Insertion order is preserved for display.

use crate::catalog::symptoms::find_symptom;
use crate::errors::{HealthError, Result};

/// Set of selected symptom identifiers
///
/// Backed by an order-preserving vector; the catalog is small enough that
/// linear membership checks are fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<&'static str>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        SelectionSet::default()
    }

    /// Toggle a symptom in or out of the selection.
    ///
    /// Returns true if the symptom is selected after the call. Unknown
    /// identifiers are rejected so the selection only ever contains catalog
    /// entries.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let symptom =
            find_symptom(id).ok_or_else(|| HealthError::UnknownSymptom(id.to_string()))?;

        if let Some(pos) = self.ids.iter().position(|s| *s == symptom.id) {
            self.ids.remove(pos);
            Ok(false)
        } else {
            self.ids.push(symptom.id);
            Ok(true)
        }
    }

    /// Check membership
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| *s == id)
    }

    /// Number of selected symptoms
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected identifiers in insertion order
    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    /// Size of the intersection with a fixed rule group
    pub fn intersection_size(&self, group: &[&str]) -> usize {
        self.ids.iter().filter(|id| group.contains(*id)).count()
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("fever").unwrap());
        assert!(selection.contains("fever"));
        assert_eq!(selection.len(), 1);

        assert!(!selection.toggle("fever").unwrap());
        assert!(!selection.contains("fever"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_unknown_symptom_rejected() {
        let mut selection = SelectionSet::new();
        let result = selection.toggle("toothache");
        assert!(matches!(result, Err(HealthError::UnknownSymptom(_))));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut selection = SelectionSet::new();
        selection.toggle("cough").unwrap();
        selection.toggle("fever").unwrap();
        selection.toggle("headache").unwrap();
        assert_eq!(selection.ids(), &["cough", "fever", "headache"]);
    }

    #[test]
    fn test_intersection_size() {
        let mut selection = SelectionSet::new();
        selection.toggle("cough").unwrap();
        selection.toggle("fever").unwrap();
        assert_eq!(selection.intersection_size(&["cough", "wheezing"]), 1);
        assert_eq!(selection.intersection_size(&["cough", "fever"]), 2);
        assert_eq!(selection.intersection_size(&["numbness"]), 0);
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::new();
        selection.toggle("fever").unwrap();
        selection.clear();
        assert!(selection.is_empty());
    }

    /// Toggling any catalog symptom twice returns the set to its prior value
    #[quickcheck]
    fn prop_toggle_round_trip(index: usize) -> bool {
        let id = crate::catalog::SYMPTOMS[index % crate::catalog::SYMPTOMS.len()].id;

        let mut selection = SelectionSet::new();
        selection.toggle("fatigue").unwrap();
        let before = selection.clone();

        // fatigue may be the chosen id; two toggles must still restore it
        selection.toggle(id).unwrap();
        selection.toggle(id).unwrap();

        selection == before
    }
}
