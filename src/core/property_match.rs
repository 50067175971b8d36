use chrono::{NaiveDate, Utc};

use crate::core::compatibility::calculate_user_compatibility_at;
use crate::models::results::to_score;
use crate::models::{
    PropertyMatchBreakdown, PropertyMatchResult, PropertySearcherProfile, PropertyWithResidents,
    ResidentMatch,
};

pub const FILTERS_MAX: f64 = 40.0;
pub const RESIDENTS_MAX: f64 = 35.0;
pub const LIFESTYLE_MAX: f64 = 15.0;
pub const PRACTICAL_MAX: f64 = 10.0;

/// Resident score for an empty property, roughly half of 35
pub const NO_RESIDENTS_SCORE: f64 = 18.0;

const BUDGET_POINTS: f64 = 15.0;
const LOCATION_POINTS: f64 = 10.0;
const PROPERTY_TYPE_POINTS: f64 = 7.0;
const PROPERTY_TYPE_PARTIAL: f64 = 2.0;
const BEDROOM_POINTS: f64 = 5.0;
const FURNISHED_POINTS: f64 = 3.0;
const REQUIRED_AMENITY_POINTS: f64 = 5.0;
const PREFERRED_AMENITY_POINTS: f64 = 5.0;

const SMOKING_POINTS: f64 = 7.0;
const PETS_POINTS: f64 = 8.0;

/// Total rent above this share over budget is a dealbreaker
const HARD_OVER_BUDGET: f64 = 0.2;

/// Searcher fields checked for score reliability, at least this many present
const RELIABLE_FIELD_COUNT: usize = 4;

/// Calculate how well a property fits a searcher as of today
pub fn calculate_property_searcher_match(
    property: &PropertyWithResidents,
    searcher: &PropertySearcherProfile,
) -> PropertyMatchResult {
    calculate_property_searcher_match_at(property, searcher, Utc::now().date_naive())
}

/// Calculate how well a property fits a searcher
///
/// Scoring (0-100):
/// - property filters: 40 (budget, location, type, bedrooms, amenities)
/// - resident compatibility: 35 (average against every current resident)
/// - property lifestyle: 15 (smoking and pets rules)
/// - location & practical: 10 (availability, minimum stay)
pub fn calculate_property_searcher_match_at(
    property: &PropertyWithResidents,
    searcher: &PropertySearcherProfile,
    today: NaiveDate,
) -> PropertyMatchResult {
    let resident_matches = resident_matches(property, searcher, today);

    let breakdown = PropertyMatchBreakdown {
        property_filters: property_filters_score(property, searcher),
        resident_compatibility: resident_compatibility_score(&resident_matches),
        property_lifestyle: property_lifestyle_score(property, searcher),
        location_practical: location_practical_score(property, today),
    };

    PropertyMatchResult {
        score: to_score(breakdown.total()),
        breakdown,
        strengths: strengths(&breakdown, property, searcher, &resident_matches),
        considerations: considerations(&breakdown, property, searcher, today),
        dealbreakers: dealbreakers(property, searcher),
        resident_matches,
        is_score_reliable: is_searcher_reliable(searcher),
    }
}

/// Searcher-side reliability: at least four of eight key fields present
pub fn is_searcher_reliable(searcher: &PropertySearcherProfile) -> bool {
    let profile = &searcher.profile;
    let present = [
        profile.min_budget.is_some(),
        profile.max_budget.is_some(),
        profile.cleanliness_level.is_some(),
        profile.social_energy.is_some(),
        profile.smoking.is_some(),
        profile.pets.is_some(),
        profile.smoking_tolerance.is_some(),
        profile.pets_tolerance.is_some(),
    ]
    .iter()
    .filter(|p| **p)
    .count();

    present >= RELIABLE_FIELD_COUNT
}

/// Share of `max_budget` the total cost exceeds it by, if it does
fn over_budget_ratio(total: f64, max_budget: f64) -> Option<f64> {
    if total <= max_budget {
        return None;
    }
    if max_budget <= 0.0 {
        return Some(f64::INFINITY);
    }
    Some((total - max_budget) / max_budget)
}

/// Budget fit (0-15) for a total monthly cost
pub(crate) fn budget_points(total: f64, min_budget: f64, max_budget: f64) -> f64 {
    if total >= min_budget && total <= max_budget {
        return BUDGET_POINTS;
    }

    if total < min_budget {
        let below = if min_budget > 0.0 {
            (min_budget - total) / min_budget
        } else {
            0.0
        };
        return (BUDGET_POINTS - below * 20.0).max(10.0);
    }

    match over_budget_ratio(total, max_budget) {
        Some(over) if over <= 0.1 => 10.0,
        Some(over) if over <= 0.2 => 5.0,
        _ => 0.0,
    }
}

/// Bidirectional, case-insensitive substring match against the city
fn city_matches(city: &str, neighborhoods: &[String]) -> bool {
    let city = city.to_lowercase();
    neighborhoods.iter().any(|n| {
        let n = n.to_lowercase();
        city.contains(&n) || n.contains(&city)
    })
}

fn missing_required_amenities<'a>(
    property: &PropertyWithResidents,
    searcher: &'a PropertySearcherProfile,
) -> Vec<&'a str> {
    searcher
        .required_amenities
        .iter()
        .filter(|a| !property.has_amenity(a))
        .map(String::as_str)
        .collect()
}

/// Property filters (0-40)
///
/// Only categories the searcher filled in count toward the maximum; the
/// result is the earned share of that maximum scaled to 40. A searcher with
/// no filters at all gets 0.
fn property_filters_score(property: &PropertyWithResidents, searcher: &PropertySearcherProfile) -> f64 {
    let profile = &searcher.profile;
    let mut score = 0.0;
    let mut max_possible_score = 0.0;

    if let Some((min_budget, max_budget)) = profile.budget_range() {
        max_possible_score += BUDGET_POINTS;
        score += budget_points(property.total_monthly_cost(), min_budget, max_budget);
    }

    if let Some(neighborhoods) = profile.preferred_neighborhoods.as_ref().filter(|n| !n.is_empty()) {
        max_possible_score += LOCATION_POINTS;
        if city_matches(&property.city, neighborhoods) {
            score += LOCATION_POINTS;
        }
    }

    if !searcher.preferred_property_types.is_empty() {
        max_possible_score += PROPERTY_TYPE_POINTS;
        score += if searcher.preferred_property_types.contains(&property.property_type) {
            PROPERTY_TYPE_POINTS
        } else {
            PROPERTY_TYPE_PARTIAL
        };
    }

    if let Some(min_bedrooms) = searcher.min_bedrooms {
        max_possible_score += BEDROOM_POINTS;
        let missing = min_bedrooms.saturating_sub(property.bedrooms) as f64;
        score += (BEDROOM_POINTS - missing * 2.0).max(0.0);
    }

    if let Some(required) = searcher.furnished_required {
        max_possible_score += FURNISHED_POINTS;
        if !required || property.furnished {
            score += FURNISHED_POINTS;
        }
    }

    if !searcher.required_amenities.is_empty() {
        max_possible_score += REQUIRED_AMENITY_POINTS;
        if missing_required_amenities(property, searcher).is_empty() {
            score += REQUIRED_AMENITY_POINTS;
        }
    }

    if !searcher.preferred_amenities.is_empty() {
        max_possible_score += PREFERRED_AMENITY_POINTS;
        let matched = searcher
            .preferred_amenities
            .iter()
            .filter(|a| property.has_amenity(a))
            .count();
        let ratio = matched as f64 / searcher.preferred_amenities.len() as f64;
        score += (ratio * PREFERRED_AMENITY_POINTS).round();
    }

    if max_possible_score == 0.0 {
        return 0.0;
    }

    (score / max_possible_score * FILTERS_MAX).round().clamp(0.0, FILTERS_MAX)
}

/// Every resident scored against the searcher, best first
fn resident_matches(
    property: &PropertyWithResidents,
    searcher: &PropertySearcherProfile,
    today: NaiveDate,
) -> Vec<ResidentMatch> {
    let mut matches: Vec<ResidentMatch> = property
        .residents
        .iter()
        .map(|resident| ResidentMatch {
            resident: resident.clone(),
            compatibility_score: calculate_user_compatibility_at(&searcher.profile, resident, today).score,
        })
        .collect();

    // Stable: equal scores keep resident order
    matches.sort_by(|a, b| b.compatibility_score.cmp(&a.compatibility_score));
    matches
}

/// Resident compatibility (0-35)
fn resident_compatibility_score(resident_matches: &[ResidentMatch]) -> f64 {
    if resident_matches.is_empty() {
        return NO_RESIDENTS_SCORE;
    }

    let total: f64 = resident_matches.iter().map(|m| m.compatibility_score as f64).sum();
    let average = total / resident_matches.len() as f64;

    (average / 100.0 * RESIDENTS_MAX).round().clamp(0.0, RESIDENTS_MAX)
}

/// Property lifestyle (0-15): house rules against the searcher's habits
///
/// Only the habits the searcher stated count toward the maximum, and the
/// earned share is scaled to 15. Neither stated lands on 7.5.
fn property_lifestyle_score(property: &PropertyWithResidents, searcher: &PropertySearcherProfile) -> f64 {
    let mut score = 0.0;
    let mut max_possible_score = 0.0;

    if let Some(smoking) = searcher.profile.smoking {
        max_possible_score += SMOKING_POINTS;
        if !smoking || property.smoking_allowed {
            score += SMOKING_POINTS;
        }
    }

    if let Some(pets) = searcher.profile.pets {
        max_possible_score += PETS_POINTS;
        if !pets || property.pets_allowed {
            score += PETS_POINTS;
        }
    }

    if max_possible_score == 0.0 {
        return LIFESTYLE_MAX / 2.0;
    }

    (score / max_possible_score * LIFESTYLE_MAX).round().clamp(0.0, LIFESTYLE_MAX)
}

fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Location & practical (0-10): availability and minimum stay
fn location_practical_score(property: &PropertyWithResidents, today: NaiveDate) -> f64 {
    let availability: f64 = if property.is_available {
        5.0
    } else if let Some(from) = property.available_from {
        match days_until(from, today) {
            i64::MIN..=30 => 4.0,
            31..=60 => 3.0,
            _ => 1.0,
        }
    } else {
        0.0
    };

    let minimum_stay: f64 = match property.minimum_stay_months {
        None | Some(0..=3) => 5.0,
        Some(4..=6) => 3.0,
        Some(_) => 1.0,
    };

    (availability + minimum_stay).clamp(0.0, PRACTICAL_MAX)
}

fn strengths(
    breakdown: &PropertyMatchBreakdown,
    property: &PropertyWithResidents,
    searcher: &PropertySearcherProfile,
    resident_matches: &[ResidentMatch],
) -> Vec<String> {
    let profile = &searcher.profile;
    let mut strengths = Vec::new();

    if breakdown.property_filters >= 32.0 {
        strengths.push("Excellent match for your search criteria".to_string());
    } else if breakdown.property_filters >= 24.0 {
        strengths.push("Good fit for your requirements".to_string());
    }

    if breakdown.resident_compatibility >= 28.0 {
        strengths.push("Very compatible with current residents".to_string());
    } else if breakdown.resident_compatibility >= 21.0 {
        strengths.push("Good compatibility with housemates".to_string());
    }

    if let Some((min_budget, max_budget)) = profile.budget_range() {
        let total = property.total_monthly_cost();
        if total >= min_budget && total <= max_budget {
            strengths.push("Within your budget range".to_string());
        }
    }

    if let Some(neighborhoods) = &profile.preferred_neighborhoods {
        if city_matches(&property.city, neighborhoods) {
            strengths.push(format!("Located in your preferred area ({})", property.city));
        }
    }

    if !searcher.required_amenities.is_empty() && missing_required_amenities(property, searcher).is_empty() {
        strengths.push("Has all your required amenities".to_string());
    }

    if let Some(best) = resident_matches.first() {
        if best.compatibility_score >= 70 {
            strengths.push(format!(
                "Great compatibility with {} ({}%)",
                best.resident.first_name, best.compatibility_score
            ));
        }
    }

    strengths
}

fn considerations(
    breakdown: &PropertyMatchBreakdown,
    property: &PropertyWithResidents,
    searcher: &PropertySearcherProfile,
    today: NaiveDate,
) -> Vec<String> {
    let mut considerations = Vec::new();

    if breakdown.property_filters < 24.0 {
        considerations.push("Some of your criteria may not be fully met".to_string());
    }

    if breakdown.resident_compatibility < 21.0 && !property.residents.is_empty() {
        considerations.push("Compatibility with current residents could be better".to_string());
    }

    if let Some(max_budget) = searcher.profile.max_budget {
        let total = property.total_monthly_cost();
        if let Some(over) = over_budget_ratio(total, max_budget).filter(|o| o.is_finite()) {
            considerations.push(format!(
                "Rent is {}% over your budget ({}€ vs {}€)",
                (over * 100.0).round(),
                total,
                max_budget
            ));
        }
    }

    if let Some(months) = property.minimum_stay_months.filter(|m| *m > 6) {
        considerations.push(format!("Requires minimum {} months commitment", months));
    }

    if !property.is_available {
        if let Some(from) = property.available_from {
            let days = days_until(from, today);
            if days > 30 {
                considerations.push(format!("Available in {} months", (days as f64 / 30.0).round()));
            }
        }
    }

    considerations
}

fn dealbreakers(property: &PropertyWithResidents, searcher: &PropertySearcherProfile) -> Vec<String> {
    let profile = &searcher.profile;
    let mut dealbreakers = Vec::new();

    if profile.smoking == Some(true) && !property.smoking_allowed {
        dealbreakers.push("You smoke but smoking is not allowed in this property".to_string());
    }

    if profile.pets == Some(true) && !property.pets_allowed {
        dealbreakers.push("You have pets but pets are not allowed in this property".to_string());
    }

    let missing = missing_required_amenities(property, searcher);
    if !missing.is_empty() {
        dealbreakers.push(format!("Missing required amenities: {}", missing.join(", ")));
    }

    if let Some(max_budget) = profile.max_budget {
        let total = property.total_monthly_cost();
        if over_budget_ratio(total, max_budget).is_some_and(|over| over > HARD_OVER_BUDGET) {
            dealbreakers.push(format!(
                "Rent significantly exceeds your budget ({}€ vs {}€ max)",
                total, max_budget
            ));
        }
    }

    if let Some(min_bedrooms) = searcher.min_bedrooms {
        if property.bedrooms < min_bedrooms {
            dealbreakers.push(format!(
                "Not enough bedrooms ({} vs {} required)",
                property.bedrooms, min_bedrooms
            ));
        }
    }

    dealbreakers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn create_property() -> PropertyWithResidents {
        PropertyWithResidents {
            id: "p1".to_string(),
            city: "Ixelles".to_string(),
            property_type: "apartment".to_string(),
            bedrooms: 3,
            bathrooms: 1,
            furnished: true,
            amenities: vec!["wifi".to_string(), "washing_machine".to_string()],
            monthly_rent: 700.0,
            charges: Some(50.0),
            is_available: true,
            ..Default::default()
        }
    }

    fn create_searcher() -> PropertySearcherProfile {
        let mut profile = UserProfile::new("s1", "Marie", "Dubois");
        profile.min_budget = Some(600.0);
        profile.max_budget = Some(900.0);
        PropertySearcherProfile::from(profile)
    }

    #[test]
    fn test_budget_points_bands() {
        assert_eq!(budget_points(900.0, 600.0, 900.0), 15.0);
        assert_eq!(budget_points(600.0, 600.0, 900.0), 15.0);
        assert_eq!(budget_points(990.0, 600.0, 900.0), 10.0);
        assert_eq!(budget_points(1080.0, 600.0, 900.0), 5.0);
        assert_eq!(budget_points(1081.0, 600.0, 900.0), 0.0);
        // 10% under the minimum
        assert_eq!(budget_points(540.0, 600.0, 900.0), 13.0);
        assert_eq!(budget_points(100.0, 600.0, 900.0), 10.0);
    }

    #[test]
    fn test_budget_at_max_is_full_marks() {
        let mut property = create_property();
        property.monthly_rent = 850.0;
        property.charges = Some(50.0);

        // Budget is the only filter, so its 15/15 scales to 40
        assert_eq!(property_filters_score(&property, &create_searcher()), 40.0);
    }

    #[test]
    fn test_no_filters_scores_zero() {
        let searcher = PropertySearcherProfile::from(UserProfile::new("s1", "A", "B"));
        assert_eq!(property_filters_score(&create_property(), &searcher), 0.0);
    }

    #[test]
    fn test_filters_ratio_over_enabled_categories() {
        let mut searcher = create_searcher();
        searcher.preferred_property_types = vec!["studio".to_string()];
        searcher.required_amenities = vec!["parking".to_string()];

        // budget 15 + type 2 + amenities 0 over 27
        let expected = (17.0_f64 / 27.0 * 40.0).round();
        assert_eq!(property_filters_score(&create_property(), &searcher), expected);
    }

    #[test]
    fn test_city_match_is_bidirectional() {
        assert!(city_matches("Bruxelles-Ixelles", &["ixelles".to_string()]));
        assert!(city_matches("Ixelles", &["Ixelles centre".to_string()]));
        assert!(!city_matches("Uccle", &["Ixelles".to_string()]));
    }

    #[test]
    fn test_bedroom_shortfall_penalty() {
        let mut searcher = PropertySearcherProfile::from(UserProfile::new("s1", "A", "B"));
        searcher.min_bedrooms = Some(5);

        // 2 missing bedrooms: 5 - 4 = 1 of 5
        assert_eq!(property_filters_score(&create_property(), &searcher), 8.0);
    }

    #[test]
    fn test_empty_property_gets_neutral_resident_score() {
        let result = calculate_property_searcher_match_at(&create_property(), &create_searcher(), today());
        assert_eq!(result.breakdown.resident_compatibility, NO_RESIDENTS_SCORE);
        assert!(result.resident_matches.is_empty());
    }

    #[test]
    fn test_property_lifestyle_defaults_to_half() {
        let searcher = PropertySearcherProfile::from(UserProfile::new("s1", "A", "B"));
        assert_eq!(property_lifestyle_score(&create_property(), &searcher), 7.5);
    }

    #[test]
    fn test_property_lifestyle_scales_over_stated_habits() {
        let property = create_property();

        let mut searcher = PropertySearcherProfile::from(UserProfile::new("s1", "A", "B"));
        searcher.profile.smoking = Some(false);
        assert_eq!(property_lifestyle_score(&property, &searcher), 15.0);

        let mut searcher = PropertySearcherProfile::from(UserProfile::new("s1", "A", "B"));
        searcher.profile.pets = Some(false);
        assert_eq!(property_lifestyle_score(&property, &searcher), 15.0);

        let mut searcher = PropertySearcherProfile::from(UserProfile::new("s1", "A", "B"));
        searcher.profile.smoking = Some(true);
        assert_eq!(property_lifestyle_score(&property, &searcher), 0.0);

        // Pets allowed, smoking not: 8 of 15
        let mut property = create_property();
        property.pets_allowed = true;
        searcher.profile.pets = Some(true);
        assert_eq!(property_lifestyle_score(&property, &searcher), 8.0);
    }

    #[test]
    fn test_smoker_in_non_smoking_property() {
        let mut searcher = create_searcher();
        searcher.profile.smoking = Some(true);
        searcher.profile.pets = Some(false);

        let property = create_property();
        let result = calculate_property_searcher_match_at(&property, &searcher, today());

        assert_eq!(result.breakdown.property_lifestyle, 8.0);
        assert!(result.dealbreakers.iter().any(|d| d.contains("smok")));
    }

    fn create_resident(id: &str, cleanliness: u8, smoking: bool) -> UserProfile {
        let mut resident = UserProfile::new(id, id, "Resident");
        resident.cleanliness_level = Some(cleanliness);
        resident.social_energy = Some(if smoking { 1 } else { 8 });
        resident.smoking = Some(smoking);
        resident.pets = Some(smoking);
        resident.smoking_tolerance = Some(smoking);
        resident.pets_tolerance = Some(smoking);
        resident.core_values = Some(vec![if smoking { "nightlife" } else { "respect" }.to_string()]);
        resident
    }

    #[test]
    fn test_residents_sorted_with_ties_in_input_order() {
        let mut searcher = create_searcher();
        searcher.profile.cleanliness_level = Some(9);
        searcher.profile.social_energy = Some(8);
        searcher.profile.smoking = Some(false);
        searcher.profile.pets = Some(false);
        searcher.profile.smoking_tolerance = Some(false);
        searcher.profile.pets_tolerance = Some(false);
        searcher.profile.core_values = Some(vec!["respect".to_string()]);

        let mut property = create_property();
        property.residents = vec![
            create_resident("low", 1, true),
            create_resident("twin-a", 9, false),
            create_resident("twin-b", 9, false),
        ];

        let result = calculate_property_searcher_match_at(&property, &searcher, today());
        let order: Vec<&str> = result.resident_matches.iter().map(|m| m.resident.user_id.as_str()).collect();
        assert_eq!(order, vec!["twin-a", "twin-b", "low"]);

        let scores: Vec<u8> = result.resident_matches.iter().map(|m| m.compatibility_score).collect();
        assert_eq!(scores[0], scores[1]);
        assert!(scores[2] < scores[1]);

        let average = scores.iter().map(|s| *s as f64).sum::<f64>() / 3.0;
        assert_eq!(result.breakdown.resident_compatibility, (average / 100.0 * 35.0).round());
    }

    #[test]
    fn test_availability_decay() {
        let mut property = create_property();
        property.is_available = false;
        property.minimum_stay_months = None;

        property.available_from = NaiveDate::from_ymd_opt(2026, 11, 10);
        assert_eq!(location_practical_score(&property, today()), 9.0);

        property.available_from = NaiveDate::from_ymd_opt(2026, 12, 10);
        assert_eq!(location_practical_score(&property, today()), 8.0);

        property.available_from = NaiveDate::from_ymd_opt(2027, 3, 1);
        assert_eq!(location_practical_score(&property, today()), 6.0);

        property.available_from = None;
        assert_eq!(location_practical_score(&property, today()), 5.0);
    }

    #[test]
    fn test_minimum_stay_bands() {
        let mut property = create_property();
        property.minimum_stay_months = Some(3);
        assert_eq!(location_practical_score(&property, today()), 10.0);
        property.minimum_stay_months = Some(6);
        assert_eq!(location_practical_score(&property, today()), 8.0);
        property.minimum_stay_months = Some(12);
        assert_eq!(location_practical_score(&property, today()), 6.0);
    }

    #[test]
    fn test_over_budget_breakpoints() {
        let searcher = create_searcher();
        let mut property = create_property();

        // 15% over: consideration only
        property.monthly_rent = 985.0;
        property.charges = Some(50.0);
        let result = calculate_property_searcher_match_at(&property, &searcher, today());
        assert!(result.considerations.iter().any(|c| c.contains("15% over your budget")));
        assert!(!result.dealbreakers.iter().any(|d| d.contains("budget")));

        // 25% over: dealbreaker as well
        property.monthly_rent = 1075.0;
        let result = calculate_property_searcher_match_at(&property, &searcher, today());
        assert!(result.considerations.iter().any(|c| c.contains("25% over your budget")));
        assert!(result.dealbreakers.iter().any(|d| d.contains("significantly exceeds")));
    }

    #[test]
    fn test_reliability_needs_four_fields() {
        let mut searcher = create_searcher();
        assert!(!is_searcher_reliable(&searcher));

        searcher.profile.smoking = Some(false);
        searcher.profile.pets = Some(true);
        assert!(is_searcher_reliable(&searcher));
    }

    #[test]
    fn test_missing_required_amenities_are_listed() {
        let mut searcher = create_searcher();
        searcher.required_amenities = vec!["wifi".into(), "parking".into(), "garden".into()];

        let result = calculate_property_searcher_match_at(&create_property(), &searcher, today());
        assert!(result
            .dealbreakers
            .contains(&"Missing required amenities: parking, garden".to_string()));
    }
}
