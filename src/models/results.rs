use serde::{Deserialize, Serialize};
use crate::models::domain::UserProfile;

/// Checklist category used by the matching completeness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileCategory {
    Lifestyle,
    Social,
    Practical,
    Values,
    Preferences,
}

impl ProfileCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProfileCategory::Lifestyle => "Lifestyle",
            ProfileCategory::Social => "Social preferences",
            ProfileCategory::Practical => "Practical criteria",
            ProfileCategory::Values => "Values",
            ProfileCategory::Preferences => "Tolerances",
        }
    }
}

/// How much of the matching checklist a profile fills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompleteness {
    pub percentage: u8,
    pub filled_fields: usize,
    pub total_fields: usize,
    pub is_complete: bool,
    pub missing_categories: Vec<ProfileCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCompletion {
    pub category: String,
    pub label: String,
    pub filled: usize,
    pub total: usize,
    pub is_complete: bool,
}

/// Completion of the full personal profile, used to unlock matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalProfileCompletion {
    pub percentage: u8,
    pub filled_fields: usize,
    pub total_fields: usize,
    pub is_unlocked: bool,
    pub categories: Vec<CategoryCompletion>,
    pub required_for_unlock: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    pub lifestyle: f64,
    pub social: f64,
    pub practical: f64,
    pub values: f64,
    pub preferences: f64,
}

impl CompatibilityBreakdown {
    pub fn total(&self) -> f64 {
        self.lifestyle + self.social + self.practical + self.values + self.preferences
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessPair {
    pub user1: ProfileCompleteness,
    pub user2: ProfileCompleteness,
}

/// User-to-user compatibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub score: u8,
    pub breakdown: CompatibilityBreakdown,
    pub strengths: Vec<String>,
    pub considerations: Vec<String>,
    pub dealbreakers: Vec<String>,
    pub profile_completeness: CompletenessPair,
    pub is_score_reliable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMatchBreakdown {
    pub property_filters: f64,
    pub resident_compatibility: f64,
    pub property_lifestyle: f64,
    pub location_practical: f64,
}

impl PropertyMatchBreakdown {
    pub fn total(&self) -> f64 {
        self.property_filters + self.resident_compatibility + self.property_lifestyle + self.location_practical
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentMatch {
    pub resident: UserProfile,
    pub compatibility_score: u8,
}

/// Property-to-searcher match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMatchResult {
    pub score: u8,
    pub breakdown: PropertyMatchBreakdown,
    pub strengths: Vec<String>,
    pub considerations: Vec<String>,
    pub dealbreakers: Vec<String>,
    pub resident_matches: Vec<ResidentMatch>,
    pub is_score_reliable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingMatchBreakdown {
    pub budget: f64,
    pub location: f64,
    pub lifestyle: f64,
    pub features: f64,
    pub timing: f64,
    pub duration: f64,
}

impl ListingMatchBreakdown {
    pub fn total(&self) -> f64 {
        self.budget + self.location + self.lifestyle + self.features + self.timing + self.duration
    }
}

/// Generic listing match used while browsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u8,
    pub breakdown: ListingMatchBreakdown,
    pub strengths: Vec<String>,
    pub considerations: Vec<String>,
    pub dealbreakers: Vec<String>,
    pub is_score_reliable: bool,
}

/// Display tier for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityLabel {
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
}

/// Round a summed breakdown into the 0-100 score
pub(crate) fn to_score(total: f64) -> u8 {
    total.round().clamp(0.0, 100.0) as u8
}
