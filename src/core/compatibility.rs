use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Utc};

use crate::core::completeness::calculate_profile_completeness;
use crate::models::results::to_score;
use crate::models::{
    CompatibilityBreakdown, CompatibilityResult, CompletenessPair, GenderPreference, UserProfile,
};

pub const LIFESTYLE_MAX: f64 = 30.0;
pub const SOCIAL_MAX: f64 = 25.0;
pub const PRACTICAL_MAX: f64 = 20.0;
pub const VALUES_MAX: f64 = 15.0;
pub const PREFERENCES_MAX: f64 = 10.0;

// Neutral points awarded when either side leaves a field empty.
// Each sits below a good match and above the worst mismatch.
const NEUTRAL_CLEANLINESS: f64 = 4.0;
const NEUTRAL_WAKE_UP: f64 = 3.5;
const NEUTRAL_SLEEP: f64 = 3.5;
const NEUTRAL_HOUSE_RULES: f64 = 3.5;
const NEUTRAL_COOKING: f64 = 2.5;
const NEUTRAL_SOCIAL_ENERGY: f64 = 4.0;
const NEUTRAL_SHARING: f64 = 3.5;
const NEUTRAL_CULTURAL: f64 = 2.5;
const NEUTRAL_EVENTS: f64 = 2.5;
const NEUTRAL_BUDGET: f64 = 3.5;
const NEUTRAL_AGE: f64 = 3.0;
const NEUTRAL_COLIVING_SIZE: f64 = 3.0;
const NEUTRAL_GENDER: f64 = 1.5;
const NEUTRAL_VALUES: f64 = 12.0;

const HABIT_PENALTY: f64 = 5.0;
const NEIGHBORHOOD_BONUS: f64 = 3.0;

/// Calculate compatibility between two users as of today
pub fn calculate_user_compatibility(user1: &UserProfile, user2: &UserProfile) -> CompatibilityResult {
    calculate_user_compatibility_at(user1, user2, Utc::now().date_naive())
}

/// Calculate compatibility between two users
///
/// Scoring (0-100):
/// - lifestyle: 30
/// - social: 25
/// - practical: 20
/// - values: 15
/// - preferences: 10
///
/// `today` is the reference date for ages. Dealbreakers are reported but
/// never zero the total.
pub fn calculate_user_compatibility_at(
    user1: &UserProfile,
    user2: &UserProfile,
    today: NaiveDate,
) -> CompatibilityResult {
    let user1_completeness = calculate_profile_completeness(user1);
    let user2_completeness = calculate_profile_completeness(user2);
    let is_score_reliable = user1_completeness.is_complete && user2_completeness.is_complete;

    let breakdown = CompatibilityBreakdown {
        lifestyle: lifestyle_score(user1, user2),
        social: social_score(user1, user2),
        practical: practical_score(user1, user2, today),
        values: values_score(user1, user2),
        preferences: preferences_score(user1, user2),
    };

    let mut considerations = considerations(&breakdown, user1, user2);
    for (name, completeness) in [("User 1", &user1_completeness), ("User 2", &user2_completeness)] {
        if !completeness.missing_categories.is_empty() {
            let labels: Vec<&str> = completeness.missing_categories.iter().map(|c| c.label()).collect();
            considerations.push(format!("{}'s profile is missing: {}", name, labels.join(", ")));
        }
    }

    CompatibilityResult {
        score: to_score(breakdown.total()),
        breakdown,
        strengths: strengths(&breakdown, user1, user2),
        considerations,
        dealbreakers: dealbreakers(user1, user2, today),
        profile_completeness: CompletenessPair {
            user1: user1_completeness,
            user2: user2_completeness,
        },
        is_score_reliable,
    }
}

/// Whole years between `date_of_birth` and `today`
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

fn finish(points: f64, max: f64) -> f64 {
    points.clamp(0.0, max).round()
}

/// Points left after subtracting a per-unit penalty for the gap
#[inline]
fn gap_points(a: u8, b: u8, max: f64, per_unit: f64) -> f64 {
    let diff = (a as f64 - b as f64).abs();
    (max - diff * per_unit).max(0.0)
}

fn pair<T: Copy>(a: Option<T>, b: Option<T>) -> Option<(T, T)> {
    Some((a?, b?))
}

/// Lifestyle (0-30): cleanliness, routines, house rules, cooking
fn lifestyle_score(user1: &UserProfile, user2: &UserProfile) -> f64 {
    let cleanliness = pair(user1.cleanliness_level, user2.cleanliness_level)
        .map_or(NEUTRAL_CLEANLINESS, |(a, b)| gap_points(a, b, 8.0, 0.8));

    let wake_up = pair(user1.wake_up_time, user2.wake_up_time)
        .map_or(NEUTRAL_WAKE_UP, |(a, b)| if a == b { 5.0 } else { 3.0 });

    let sleep = pair(user1.sleep_time, user2.sleep_time)
        .map_or(NEUTRAL_SLEEP, |(a, b)| if a == b { 5.0 } else { 3.0 });

    let house_rules = pair(user1.house_rules_preference, user2.house_rules_preference)
        .map_or(NEUTRAL_HOUSE_RULES, |(a, b)| gap_points(a, b, 7.0, 0.7));

    let cooking = pair(user1.cooking_frequency, user2.cooking_frequency)
        .map_or(NEUTRAL_COOKING, |(a, b)| gap_points(a.level(), b.level(), 5.0, 1.25));

    finish(cleanliness + wake_up + sleep + house_rules + cooking, LIFESTYLE_MAX)
}

/// Social (0-25): energy, sharing, cultural openness, events
fn social_score(user1: &UserProfile, user2: &UserProfile) -> f64 {
    let energy = pair(user1.social_energy, user2.social_energy)
        .map_or(NEUTRAL_SOCIAL_ENERGY, |(a, b)| gap_points(a, b, 8.0, 0.8));

    let sharing = pair(user1.openness_to_sharing, user2.openness_to_sharing)
        .map_or(NEUTRAL_SHARING, |(a, b)| gap_points(a.level(), b.level(), 7.0, 2.0));

    // Two open people score higher than two conservative ones
    let cultural = pair(user1.cultural_openness, user2.cultural_openness)
        .map_or(NEUTRAL_CULTURAL, |(a, b)| {
            let average = (a.level() + b.level()) as f64 / 2.0;
            average / 4.0 * 5.0
        });

    let events = pair(user1.event_participation_interest, user2.event_participation_interest)
        .map_or(NEUTRAL_EVENTS, |(a, b)| gap_points(a.level(), b.level(), 5.0, 1.5));

    finish(energy + sharing + cultural + events, SOCIAL_MAX)
}

/// Practical (0-20): budget overlap, age, coliving size, gender preference
fn practical_score(user1: &UserProfile, user2: &UserProfile, today: NaiveDate) -> f64 {
    let budget = pair(user1.budget_range(), user2.budget_range())
        .map_or(NEUTRAL_BUDGET, |((min1, max1), (min2, max2))| {
            let overlap = max1.min(max2) - min1.max(min2);
            let average_range = ((max1 - min1 + max2 - min2) / 2.0).max(1.0);
            if overlap > 0.0 {
                (overlap / average_range).min(1.0) * 7.0
            } else {
                0.0
            }
        });

    let age = pair(user1.date_of_birth, user2.date_of_birth)
        .map_or(NEUTRAL_AGE, |(dob1, dob2)| {
            let age1 = calculate_age(dob1, today);
            let age2 = calculate_age(dob2, today);

            if within_age_range(user1, age2) && within_age_range(user2, age1) {
                6.0
            } else {
                match (age1 - age2).abs() {
                    0..=5 => 4.0,
                    6..=10 => 2.0,
                    _ => 0.0,
                }
            }
        });

    let coliving_size = pair(user1.preferred_coliving_size, user2.preferred_coliving_size)
        .map_or(NEUTRAL_COLIVING_SIZE, |(a, b)| if a == b { 4.0 } else { 2.0 });

    let gender = match (
        user1.gender_preference,
        user2.gender_preference,
        user1.gender.as_deref(),
        user2.gender.as_deref(),
    ) {
        (Some(pref1), Some(pref2), Some(gender1), Some(gender2)) => {
            let wants_same = pref1 == GenderPreference::SameGender || pref2 == GenderPreference::SameGender;
            if wants_same && !gender1.eq_ignore_ascii_case(gender2) {
                0.0
            } else {
                3.0
            }
        }
        _ => NEUTRAL_GENDER,
    };

    finish(budget + age + coliving_size + gender, PRACTICAL_MAX)
}

/// True when `age` fits `user`'s stated range, or no range is stated
fn within_age_range(user: &UserProfile, age: i32) -> bool {
    match user.age_range() {
        Some((min, max)) => age >= min as i32 && age <= max as i32,
        None => true,
    }
}

/// Values (0-15): shared core values over the union of both sets
fn values_score(user1: &UserProfile, user2: &UserProfile) -> f64 {
    let (values1, values2) = match (&user1.core_values, &user2.core_values) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
        _ => return NEUTRAL_VALUES,
    };

    let set1: HashSet<&str> = values1.iter().map(String::as_str).collect();
    let set2: HashSet<&str> = values2.iter().map(String::as_str).collect();
    let union = set1.union(&set2).count();

    if union == 0 {
        return NEUTRAL_VALUES;
    }

    let shared = set1.intersection(&set2).count();
    finish(shared as f64 / union as f64 * VALUES_MAX, VALUES_MAX)
}

fn smoking_conflict(smoker: &UserProfile, other: &UserProfile) -> bool {
    smoker.smoking == Some(true) && other.smoking_tolerance == Some(false)
}

fn pets_conflict(owner: &UserProfile, other: &UserProfile) -> bool {
    owner.pets == Some(true) && other.pets_tolerance == Some(false)
}

fn share_neighborhood(user1: &UserProfile, user2: &UserProfile) -> bool {
    match (&user1.preferred_neighborhoods, &user2.preferred_neighborhoods) {
        (Some(a), Some(b)) => a
            .iter()
            .any(|n1| b.iter().any(|n2| n1.to_lowercase() == n2.to_lowercase())),
        _ => false,
    }
}

/// Preferences (0-10): starts full, loses points for tolerance conflicts
fn preferences_score(user1: &UserProfile, user2: &UserProfile) -> f64 {
    let conflicts = [
        smoking_conflict(user1, user2),
        smoking_conflict(user2, user1),
        pets_conflict(user1, user2),
        pets_conflict(user2, user1),
    ]
    .iter()
    .filter(|c| **c)
    .count();

    let mut score = (PREFERENCES_MAX - conflicts as f64 * HABIT_PENALTY).max(0.0);

    if share_neighborhood(user1, user2) {
        score += NEIGHBORHOOD_BONUS;
    }

    finish(score, PREFERENCES_MAX)
}

fn cleanliness_gap(user1: &UserProfile, user2: &UserProfile) -> Option<u8> {
    pair(user1.cleanliness_level, user2.cleanliness_level).map(|(a, b)| a.abs_diff(b))
}

fn strengths(breakdown: &CompatibilityBreakdown, user1: &UserProfile, user2: &UserProfile) -> Vec<String> {
    let mut strengths = Vec::new();

    if breakdown.lifestyle >= 25.0 {
        strengths.push("Very similar daily routines and lifestyle habits".to_string());
    } else if breakdown.lifestyle >= 20.0 {
        strengths.push("Compatible lifestyle preferences".to_string());
    }

    if breakdown.social >= 20.0 {
        strengths.push("Great social compatibility and communication style".to_string());
    } else if breakdown.social >= 15.0 {
        strengths.push("Good social vibe match".to_string());
    }

    if breakdown.practical >= 16.0 {
        strengths.push("Practical aspects align well (budget, location, preferences)".to_string());
    }

    if breakdown.values >= 12.0 {
        strengths.push("Shared core values and principles".to_string());
    }

    if user1.shared_meals_interest == Some(true) && user2.shared_meals_interest == Some(true) {
        strengths.push("Both enjoy sharing meals".to_string());
    }

    if cleanliness_gap(user1, user2).is_some_and(|gap| gap <= 2) {
        strengths.push("Similar cleanliness standards".to_string());
    }

    strengths
}

fn considerations(breakdown: &CompatibilityBreakdown, user1: &UserProfile, user2: &UserProfile) -> Vec<String> {
    let mut considerations = Vec::new();

    if breakdown.lifestyle < 20.0 {
        considerations.push("Different daily routines - may need to discuss schedules".to_string());
    }

    if breakdown.social < 15.0 {
        considerations.push("Different social preferences - communication will be key".to_string());
    }

    if breakdown.practical < 12.0 {
        considerations.push("Some practical aspects may need discussion (budget, location)".to_string());
    }

    if cleanliness_gap(user1, user2).is_some_and(|gap| gap > 3) {
        considerations.push("Different cleanliness standards - consider house rules".to_string());
    }

    if pair(user1.guest_frequency, user2.guest_frequency).is_some_and(|(a, b)| a != b) {
        considerations.push("Different preferences for having guests over".to_string());
    }

    considerations
}

fn dealbreakers(user1: &UserProfile, user2: &UserProfile, today: NaiveDate) -> Vec<String> {
    let mut dealbreakers = Vec::new();

    if smoking_conflict(user1, user2) {
        dealbreakers.push("User 1 smokes but User 2 does not tolerate smoking".to_string());
    }
    if smoking_conflict(user2, user1) {
        dealbreakers.push("User 2 smokes but User 1 does not tolerate smoking".to_string());
    }
    if pets_conflict(user1, user2) {
        dealbreakers.push("User 1 has pets but User 2 does not tolerate pets".to_string());
    }
    if pets_conflict(user2, user1) {
        dealbreakers.push("User 2 has pets but User 1 does not tolerate pets".to_string());
    }

    if let Some((dob1, dob2)) = pair(user1.date_of_birth, user2.date_of_birth) {
        let age1 = calculate_age(dob1, today);
        let age2 = calculate_age(dob2, today);

        if let Some((min, max)) = user1.age_range() {
            if !within_age_range(user1, age2) {
                dealbreakers.push(format!(
                    "Age mismatch: User 2 ({}) outside User 1's preferred range ({}-{})",
                    age2, min, max
                ));
            }
        }
        if let Some((min, max)) = user2.age_range() {
            if !within_age_range(user2, age1) {
                dealbreakers.push(format!(
                    "Age mismatch: User 1 ({}) outside User 2's preferred range ({}-{})",
                    age1, min, max
                ));
            }
        }
    }

    dealbreakers
}
