//! Listing scorer used while browsing properties.
//!
//! This is a separate family from the coliving scorers: it matches generic
//! search preferences against listing features and has no notion of
//! residents or roommate compatibility.

use crate::models::results::to_score;
use crate::models::{ListingMatchBreakdown, MatchResult, PropertyFeatures, UserPreferences};

pub const BUDGET_MAX: f64 = 25.0;
pub const LOCATION_MAX: f64 = 20.0;
pub const LIFESTYLE_MAX: f64 = 20.0;
pub const FEATURES_MAX: f64 = 15.0;
pub const TIMING_MAX: f64 = 10.0;
pub const DURATION_MAX: f64 = 10.0;

const NEUTRAL_BUDGET: f64 = 15.0;
const NEUTRAL_LOCATION: f64 = 10.0;
const NEUTRAL_HABIT: f64 = 7.0;
const NEUTRAL_TIMING: f64 = 7.0;
const NEUTRAL_DURATION: f64 = 7.0;

/// Budget points reach zero at this share over the maximum
const BUDGET_CUTOFF: f64 = 0.3;

/// Calculate how well a listing fits a user's browsing preferences
///
/// Scoring (0-100): budget 25, location 20, lifestyle 20, features 15,
/// timing 10, duration 10.
pub fn calculate_match_score(preferences: &UserPreferences, property: &PropertyFeatures) -> MatchResult {
    let breakdown = ListingMatchBreakdown {
        budget: budget_score(preferences, property),
        location: location_score(preferences, property),
        lifestyle: lifestyle_score(preferences, property),
        features: features_score(preferences, property),
        timing: timing_score(preferences, property),
        duration: duration_score(preferences, property),
    };

    let mut strengths = Vec::new();
    let mut considerations = Vec::new();
    let mut dealbreakers = Vec::new();
    describe(preferences, property, &breakdown, &mut strengths, &mut considerations, &mut dealbreakers);

    let has_budget = preferences.min_budget.is_some() && preferences.max_budget.is_some();
    let has_location = !preferences.preferred_cities.is_empty() || !preferences.preferred_neighborhoods.is_empty();

    MatchResult {
        score: to_score(breakdown.total()),
        breakdown,
        strengths,
        considerations,
        dealbreakers,
        is_score_reliable: has_budget && has_location,
    }
}

fn over_ratio(price: f64, max_budget: f64) -> f64 {
    if max_budget <= 0.0 {
        return f64::INFINITY;
    }
    (price - max_budget) / max_budget
}

fn budget_score(preferences: &UserPreferences, property: &PropertyFeatures) -> f64 {
    let Some(max_budget) = preferences.max_budget else {
        return NEUTRAL_BUDGET;
    };
    let min_budget = preferences.min_budget.unwrap_or(0.0);
    let price = property.price;

    let points = if price > max_budget {
        let over = over_ratio(price, max_budget);
        BUDGET_MAX * (1.0 - over / BUDGET_CUTOFF)
    } else if price < min_budget && min_budget > 0.0 {
        let below = (min_budget - price) / min_budget;
        (BUDGET_MAX - below * BUDGET_MAX).max(18.0)
    } else {
        BUDGET_MAX
    };

    points.clamp(0.0, BUDGET_MAX)
}

fn contains_ignore_case(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(value))
}

fn location_score(preferences: &UserPreferences, property: &PropertyFeatures) -> f64 {
    let wants_neighborhood = !preferences.preferred_neighborhoods.is_empty();
    let wants_city = !preferences.preferred_cities.is_empty();

    if !wants_neighborhood && !wants_city {
        return NEUTRAL_LOCATION;
    }

    let neighborhood_match = property
        .neighborhood
        .as_deref()
        .is_some_and(|n| contains_ignore_case(&preferences.preferred_neighborhoods, n));
    if neighborhood_match {
        return LOCATION_MAX;
    }

    if contains_ignore_case(&preferences.preferred_cities, &property.city) {
        return if wants_neighborhood { 12.0 } else { 16.0 };
    }

    0.0
}

fn lifestyle_score(preferences: &UserPreferences, property: &PropertyFeatures) -> f64 {
    let smoking = match (preferences.smoking, property.smoking_allowed) {
        (Some(true), Some(false)) => 0.0,
        (Some(false), Some(true)) => 6.0,
        (Some(_), _) => 10.0,
        (None, _) => NEUTRAL_HABIT,
    };

    let pets = match (preferences.pets, property.pets_allowed) {
        (Some(true), Some(false)) => 0.0,
        (Some(_), _) => 10.0,
        (None, _) => NEUTRAL_HABIT,
    };

    (smoking + pets).clamp(0.0, LIFESTYLE_MAX)
}

/// Points for a room count, losing `per_missing` for each room short
fn room_points(wanted: Option<u8>, actual: u8, max: f64, per_missing: f64) -> f64 {
    match wanted {
        Some(wanted) if actual < wanted => (max - (wanted - actual) as f64 * per_missing).max(0.0),
        _ => max,
    }
}

fn amenity_points(wanted: Option<bool>, present: bool) -> f64 {
    if wanted == Some(true) && !present {
        0.0
    } else {
        2.0
    }
}

fn features_score(preferences: &UserPreferences, property: &PropertyFeatures) -> f64 {
    let points = room_points(preferences.min_bedrooms, property.bedrooms, 5.0, 2.5)
        + room_points(preferences.min_bathrooms, property.bathrooms, 4.0, 2.0)
        + amenity_points(preferences.furnished, property.furnished)
        + amenity_points(preferences.balcony, property.balcony)
        + amenity_points(preferences.parking, property.parking);

    points.clamp(0.0, FEATURES_MAX)
}

/// Days the listing opens after the desired move-in date, if late
fn days_late(preferences: &UserPreferences, property: &PropertyFeatures) -> Option<i64> {
    let desired = preferences.desired_move_in_date?;
    let available = property.available_from?;
    let days = (available - desired).num_days();
    (days > 0).then_some(days)
}

fn timing_score(preferences: &UserPreferences, property: &PropertyFeatures) -> f64 {
    if preferences.desired_move_in_date.is_none() {
        return NEUTRAL_TIMING;
    }

    match days_late(preferences, property) {
        None => TIMING_MAX,
        Some(1..=14) => 7.0,
        Some(15..=30) => 5.0,
        Some(31..=60) => 2.0,
        Some(_) => 0.0,
    }
}

fn duration_score(preferences: &UserPreferences, property: &PropertyFeatures) -> f64 {
    let Some(desired) = preferences.desired_lease_duration_months else {
        return NEUTRAL_DURATION;
    };

    if let Some(min) = property.min_lease_duration_months.filter(|min| desired < *min) {
        return match min - desired {
            0..=3 => 6.0,
            4..=6 => 3.0,
            _ => 0.0,
        };
    }

    if let Some(max) = property.max_lease_duration_months.filter(|max| desired > *max) {
        return if desired - max <= 6 { 6.0 } else { 3.0 };
    }

    DURATION_MAX
}

fn describe(
    preferences: &UserPreferences,
    property: &PropertyFeatures,
    breakdown: &ListingMatchBreakdown,
    strengths: &mut Vec<String>,
    considerations: &mut Vec<String>,
    dealbreakers: &mut Vec<String>,
) {
    if let Some(max_budget) = preferences.max_budget {
        if property.price > max_budget {
            let over = over_ratio(property.price, max_budget);
            if over.is_finite() {
                considerations.push(format!("Price is {}% over your budget", (over * 100.0).round()));
            }
            if over > BUDGET_CUTOFF {
                dealbreakers.push(format!(
                    "Price far exceeds your budget ({}€ vs {}€ max)",
                    property.price, max_budget
                ));
            }
        } else if breakdown.budget >= BUDGET_MAX {
            strengths.push("Within your budget".to_string());
        }
    }

    if breakdown.location >= LOCATION_MAX {
        if let Some(neighborhood) = &property.neighborhood {
            strengths.push(format!("In your preferred neighborhood ({})", neighborhood));
        }
    } else if breakdown.location > NEUTRAL_LOCATION {
        strengths.push(format!("In one of your preferred cities ({})", property.city));
    } else if breakdown.location == 0.0 {
        considerations.push("Outside your preferred areas".to_string());
    }

    if preferences.smoking == Some(true) && property.smoking_allowed == Some(false) {
        dealbreakers.push("Smoking is not allowed in this property".to_string());
    }
    if preferences.pets == Some(true) && property.pets_allowed == Some(false) {
        dealbreakers.push("Pets are not allowed in this property".to_string());
    }

    if breakdown.features >= FEATURES_MAX {
        strengths.push("Has all the features you asked for".to_string());
    } else {
        considerations.push("Some requested features are missing".to_string());
    }

    if let Some(days) = days_late(preferences, property) {
        considerations.push(format!("Available {} days after your move-in date", days));
    } else if preferences.desired_move_in_date.is_some() {
        strengths.push("Available by your move-in date".to_string());
    }

    if let (Some(desired), Some(min)) = (
        preferences.desired_lease_duration_months,
        property.min_lease_duration_months,
    ) {
        if min > desired {
            considerations.push(format!(
                "Minimum lease of {} months exceeds your desired {} months",
                min, desired
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_preferences() -> UserPreferences {
        UserPreferences {
            min_budget: Some(600.0),
            max_budget: Some(900.0),
            preferred_cities: vec!["Brussels".to_string(), "Bruxelles".to_string()],
            preferred_neighborhoods: vec!["Ixelles".to_string(), "Saint-Gilles".to_string()],
            smoking: Some(false),
            pets: Some(false),
            min_bedrooms: Some(2),
            min_bathrooms: Some(1),
            furnished: Some(true),
            balcony: Some(true),
            parking: Some(false),
            desired_move_in_date: NaiveDate::from_ymd_opt(2025, 11, 15),
            desired_lease_duration_months: Some(12),
            ..Default::default()
        }
    }

    fn create_perfect_property() -> PropertyFeatures {
        PropertyFeatures {
            price: 750.0,
            city: "Brussels".to_string(),
            neighborhood: Some("Ixelles".to_string()),
            address: Some("Rue du Trone 45".to_string()),
            bedrooms: 4,
            bathrooms: 2,
            furnished: true,
            balcony: true,
            parking: false,
            available_from: NaiveDate::from_ymd_opt(2025, 11, 1),
            min_lease_duration_months: Some(6),
            max_lease_duration_months: Some(12),
            smoking_allowed: Some(false),
            pets_allowed: Some(false),
        }
    }

    #[test]
    fn test_perfect_listing() {
        let result = calculate_match_score(&create_preferences(), &create_perfect_property());

        assert_eq!(result.breakdown.budget, 25.0);
        assert_eq!(result.breakdown.location, 20.0);
        assert_eq!(result.breakdown.lifestyle, 20.0);
        assert_eq!(result.breakdown.features, 15.0);
        assert_eq!(result.breakdown.timing, 10.0);
        assert_eq!(result.breakdown.duration, 10.0);
        assert_eq!(result.score, 100);
        assert!(result.dealbreakers.is_empty());
        assert!(result.is_score_reliable);
    }

    #[test]
    fn test_budget_decays_to_zero_at_cutoff() {
        let preferences = create_preferences();
        let mut property = create_perfect_property();

        property.price = 990.0;
        assert!((budget_score(&preferences, &property) - 25.0 * (2.0 / 3.0)).abs() < 1e-9);

        property.price = 1200.0;
        assert_eq!(budget_score(&preferences, &property), 0.0);

        property.price = 300.0;
        assert_eq!(budget_score(&preferences, &property), 18.0);
    }

    #[test]
    fn test_location_tiers() {
        let mut preferences = create_preferences();
        let mut property = create_perfect_property();

        property.neighborhood = Some("Woluwe".to_string());
        assert_eq!(location_score(&preferences, &property), 12.0);

        preferences.preferred_neighborhoods.clear();
        assert_eq!(location_score(&preferences, &property), 16.0);

        property.city = "Antwerp".to_string();
        assert_eq!(location_score(&preferences, &property), 0.0);

        preferences.preferred_cities.clear();
        assert_eq!(location_score(&preferences, &property), NEUTRAL_LOCATION);
    }

    #[test]
    fn test_non_smoker_in_smoking_property_loses_a_little() {
        let preferences = create_preferences();
        let mut property = create_perfect_property();
        property.smoking_allowed = Some(true);

        assert_eq!(lifestyle_score(&preferences, &property), 16.0);
    }

    #[test]
    fn test_timing_bands() {
        let preferences = create_preferences();
        let mut property = create_perfect_property();

        property.available_from = NaiveDate::from_ymd_opt(2025, 11, 25);
        assert_eq!(timing_score(&preferences, &property), 7.0);

        property.available_from = NaiveDate::from_ymd_opt(2025, 12, 10);
        assert_eq!(timing_score(&preferences, &property), 5.0);

        property.available_from = NaiveDate::from_ymd_opt(2026, 1, 1);
        assert_eq!(timing_score(&preferences, &property), 2.0);

        property.available_from = NaiveDate::from_ymd_opt(2026, 6, 1);
        assert_eq!(timing_score(&preferences, &property), 0.0);
    }

    #[test]
    fn test_duration_bands() {
        let preferences = create_preferences();
        let mut property = create_perfect_property();

        property.min_lease_duration_months = Some(24);
        assert_eq!(duration_score(&preferences, &property), 0.0);

        property.min_lease_duration_months = Some(15);
        assert_eq!(duration_score(&preferences, &property), 6.0);

        property.min_lease_duration_months = Some(1);
        property.max_lease_duration_months = Some(3);
        assert_eq!(duration_score(&preferences, &property), 3.0);
    }

    #[test]
    fn test_poor_listing_reports_problems() {
        let preferences = create_preferences();
        let property = PropertyFeatures {
            price: 1200.0,
            city: "Brussels".to_string(),
            neighborhood: Some("Woluwe".to_string()),
            bedrooms: 1,
            bathrooms: 1,
            available_from: NaiveDate::from_ymd_opt(2026, 1, 1),
            min_lease_duration_months: Some(24),
            max_lease_duration_months: Some(36),
            smoking_allowed: Some(true),
            pets_allowed: Some(false),
            ..Default::default()
        };

        let result = calculate_match_score(&preferences, &property);

        assert!(result.score < 55);
        assert!(result.considerations.iter().any(|c| c.contains("33% over your budget")));
        assert!(result.dealbreakers.iter().any(|d| d.contains("far exceeds")));
        assert!(result
            .considerations
            .contains(&"Minimum lease of 24 months exceeds your desired 12 months".to_string()));
    }

    #[test]
    fn test_empty_preferences_are_neutral() {
        let result = calculate_match_score(&UserPreferences::default(), &create_perfect_property());

        assert_eq!(result.breakdown.budget, NEUTRAL_BUDGET);
        assert_eq!(result.breakdown.location, NEUTRAL_LOCATION);
        assert_eq!(result.breakdown.lifestyle, 14.0);
        assert_eq!(result.breakdown.features, 15.0);
        assert_eq!(result.breakdown.timing, NEUTRAL_TIMING);
        assert_eq!(result.breakdown.duration, NEUTRAL_DURATION);
        assert!(!result.is_score_reliable);
    }
}
