//! Healthcare facility finder data
//!
//! A static mock facility list. When coordinates are available the list is
//! re-ranked by great-circle distance; otherwise the baked-in distances are
//! used as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Facility kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilityType {
    Hospital,
    Clinic,
    Emergency,
    Pharmacy,
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FacilityType::Hospital => "hospital",
            FacilityType::Clinic => "clinic",
            FacilityType::Emergency => "emergency",
            FacilityType::Pharmacy => "pharmacy",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for FacilityType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hospital" => Ok(FacilityType::Hospital),
            "clinic" => Ok(FacilityType::Clinic),
            "emergency" => Ok(FacilityType::Emergency),
            "pharmacy" => Ok(FacilityType::Pharmacy),
            other => Err(format!("unknown facility type: {}", other)),
        }
    }
}

/// One healthcare facility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthcareFacility {
    pub id: &'static str,
    pub name: &'static str,
    pub facility_type: FacilityType,
    pub address: &'static str,
    pub phone: &'static str,
    pub rating: f64,
    pub distance_km: f64,
    pub open_hours: &'static str,
    pub specialties: &'static [&'static str],
    pub latitude: f64,
    pub longitude: f64,
    pub is_open: bool,
}

/// The mock facility list
pub const FACILITIES: &[HealthcareFacility] = &[
    HealthcareFacility {
        id: "city-general",
        name: "City General Hospital",
        facility_type: FacilityType::Hospital,
        address: "123 Healthcare Avenue, Downtown",
        phone: "+1 (555) 123-4567",
        rating: 4.5,
        distance_km: 2.3,
        open_hours: "24/7",
        specialties: &["Emergency Care", "Cardiology", "Surgery", "Pediatrics"],
        latitude: 40.7128,
        longitude: -74.0060,
        is_open: true,
    },
    HealthcareFacility {
        id: "quickcare",
        name: "QuickCare Medical Clinic",
        facility_type: FacilityType::Clinic,
        address: "456 Wellness Street, Midtown",
        phone: "+1 (555) 234-5678",
        rating: 4.2,
        distance_km: 1.2,
        open_hours: "8:00 AM - 8:00 PM",
        specialties: &["Primary Care", "Urgent Care", "Vaccinations"],
        latitude: 40.7580,
        longitude: -73.9855,
        is_open: true,
    },
    HealthcareFacility {
        id: "emergency-response",
        name: "Emergency Response Center",
        facility_type: FacilityType::Emergency,
        address: "789 Rescue Road, Emergency District",
        phone: "+1 (555) 345-6789",
        rating: 4.8,
        distance_km: 0.8,
        open_hours: "24/7",
        specialties: &["Trauma Care", "Emergency Medicine", "Ambulance Services"],
        latitude: 40.7489,
        longitude: -73.9680,
        is_open: true,
    },
    HealthcareFacility {
        id: "family-health",
        name: "Family Health Center",
        facility_type: FacilityType::Clinic,
        address: "321 Community Lane, Suburbs",
        phone: "+1 (555) 456-7890",
        rating: 4.3,
        distance_km: 3.1,
        open_hours: "9:00 AM - 6:00 PM",
        specialties: &["Family Medicine", "Pediatrics", "Women's Health"],
        latitude: 40.7282,
        longitude: -74.0776,
        is_open: false,
    },
    HealthcareFacility {
        id: "medipharm",
        name: "MediPharm Plus",
        facility_type: FacilityType::Pharmacy,
        address: "654 Pharmacy Plaza, Healthcare District",
        phone: "+1 (555) 567-8901",
        rating: 4.1,
        distance_km: 1.8,
        open_hours: "7:00 AM - 10:00 PM",
        specialties: &["Prescription Medications", "Health Products", "Consultations"],
        latitude: 40.7505,
        longitude: -73.9934,
        is_open: true,
    },
];

/// Filter criteria for facility search
#[derive(Debug, Clone, Default)]
pub struct FacilityFilter {
    pub search: Option<String>,
    pub facility_type: Option<FacilityType>,
}

impl HealthcareFacility {
    /// Case-insensitive substring match over name, address, and specialties
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.address.to_lowercase().contains(&term)
            || self
                .specialties
                .iter()
                .any(|s| s.to_lowercase().contains(&term))
    }

    /// Great-circle distance in kilometers from the given coordinates
    pub fn distance_from(&self, lat: f64, lon: f64) -> f64 {
        haversine_km(lat, lon, self.latitude, self.longitude)
    }
}

/// Haversine distance between two coordinate pairs, in kilometers
fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Apply a filter and sort ascending by distance.
///
/// With coordinates the sort key is the computed great-circle distance;
/// without them it falls back to the static mock distances.
pub fn find_facilities(
    filter: &FacilityFilter,
    coordinates: Option<(f64, f64)>,
) -> Vec<&'static HealthcareFacility> {
    let mut results: Vec<&'static HealthcareFacility> = FACILITIES
        .iter()
        .filter(|f| {
            filter
                .facility_type
                .map_or(true, |t| f.facility_type == t)
        })
        .filter(|f| {
            filter
                .search
                .as_deref()
                .map_or(true, |term| f.matches_search(term))
        })
        .collect();

    match coordinates {
        Some((lat, lon)) => results.sort_by(|a, b| {
            a.distance_from(lat, lon)
                .partial_cmp(&b.distance_from(lat, lon))
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        None => results.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_sorted_by_mock_distance() {
        let results = find_facilities(&FacilityFilter::default(), None);
        assert_eq!(results.len(), FACILITIES.len());
        for pair in results.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert_eq!(results[0].id, "emergency-response");
    }

    #[test]
    fn test_type_filter() {
        let filter = FacilityFilter {
            facility_type: Some(FacilityType::Clinic),
            ..Default::default()
        };
        let results = find_facilities(&filter, None);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|f| f.facility_type == FacilityType::Clinic));
    }

    #[test]
    fn test_search_by_specialty() {
        let filter = FacilityFilter {
            search: Some("pediatrics".to_string()),
            ..Default::default()
        };
        let results = find_facilities(&filter, None);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_coordinate_sort() {
        // Standing at the Family Health Center, it should rank first
        let coords = Some((40.7282, -74.0776));
        let results = find_facilities(&FacilityFilter::default(), coords);
        assert_eq!(results[0].id, "family-health");
    }

    #[test]
    fn test_haversine_zero_distance() {
        assert!(haversine_km(40.0, -74.0, 40.0, -74.0) < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        // New York to Los Angeles is roughly 3940 km
        let d = haversine_km(40.7128, -74.0060, 34.0522, -118.2437);
        assert!(d > 3900.0 && d < 4000.0, "got {}", d);
    }

    #[test]
    fn test_facility_type_parse() {
        assert_eq!("Hospital".parse::<FacilityType>().unwrap(), FacilityType::Hospital);
        assert!("spa".parse::<FacilityType>().is_err());
    }
}
