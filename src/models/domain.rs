use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Morning/evening routine bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineTime {
    Early,
    Moderate,
    Late,
}

/// Five-level activity frequency (cooking, exercise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Never,
    Rarely,
    Sometimes,
    Often,
    Daily,
}

impl Frequency {
    pub fn level(self) -> u8 {
        match self {
            Frequency::Never => 0,
            Frequency::Rarely => 1,
            Frequency::Sometimes => 2,
            Frequency::Often => 3,
            Frequency::Daily => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestFrequency {
    Never,
    Rarely,
    Sometimes,
    Often,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharingOpenness {
    Private,
    Moderate,
    Open,
    VeryOpen,
}

impl SharingOpenness {
    pub fn level(self) -> u8 {
        match self {
            SharingOpenness::Private => 1,
            SharingOpenness::Moderate => 2,
            SharingOpenness::Open => 3,
            SharingOpenness::VeryOpen => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulturalOpenness {
    Conservative,
    Moderate,
    Open,
    VeryOpen,
}

impl CulturalOpenness {
    pub fn level(self) -> u8 {
        match self {
            CulturalOpenness::Conservative => 1,
            CulturalOpenness::Moderate => 2,
            CulturalOpenness::Open => 3,
            CulturalOpenness::VeryOpen => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventInterest {
    Low,
    Medium,
    High,
}

impl EventInterest {
    pub fn level(self) -> u8 {
        match self {
            EventInterest::Low => 1,
            EventInterest::Medium => 2,
            EventInterest::High => 3,
        }
    }
}

/// Preferred household size: 2-3, 4-6, 7-10, 10+
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColivingSize {
    Small,
    Medium,
    Large,
    VeryLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPreference {
    NoPreference,
    SameGender,
    Mixed,
}

/// A person's matching-relevant attributes.
///
/// Only the identity fields are required. Every other field is optional and
/// `None` means "no preference expressed", which the scorers translate into a
/// per-term neutral default rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub occupation_status: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,

    #[serde(default)]
    pub languages_spoken: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
    #[serde(default)]
    pub important_qualities: Option<Vec<String>>,

    #[serde(default)]
    #[validate(range(min = 1, max = 10))]
    pub cleanliness_level: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 10))]
    pub social_energy: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 10))]
    pub house_rules_preference: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 10))]
    pub shared_space_importance: Option<u8>,

    #[serde(default)]
    pub wake_up_time: Option<RoutineTime>,
    #[serde(default)]
    pub sleep_time: Option<RoutineTime>,
    #[serde(default)]
    pub cooking_frequency: Option<Frequency>,
    #[serde(default)]
    pub exercise_frequency: Option<Frequency>,
    #[serde(default)]
    pub guest_frequency: Option<GuestFrequency>,
    #[serde(default)]
    pub openness_to_sharing: Option<SharingOpenness>,
    #[serde(default)]
    pub cultural_openness: Option<CulturalOpenness>,
    #[serde(default)]
    pub event_participation_interest: Option<EventInterest>,
    #[serde(default)]
    pub shared_meals_interest: Option<bool>,

    #[serde(default)]
    pub smoking: Option<bool>,
    #[serde(default)]
    pub pets: Option<bool>,
    #[serde(default)]
    pub drinks_alcohol: Option<bool>,
    #[serde(default)]
    pub smoking_tolerance: Option<bool>,
    #[serde(default)]
    pub pets_tolerance: Option<bool>,

    #[serde(default)]
    pub core_values: Option<Vec<String>>,

    #[serde(default)]
    pub preferred_coliving_size: Option<ColivingSize>,
    #[serde(default)]
    pub gender_preference: Option<GenderPreference>,
    #[serde(default)]
    pub age_range_min: Option<u8>,
    #[serde(default)]
    pub age_range_max: Option<u8>,
    #[serde(default)]
    pub preferred_neighborhoods: Option<Vec<String>>,
    #[serde(default)]
    pub min_budget: Option<f64>,
    #[serde(default)]
    pub max_budget: Option<f64>,
}

impl UserProfile {
    /// Minimal profile carrying only identity fields
    pub fn new(user_id: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Both budget bounds, when stated
    pub fn budget_range(&self) -> Option<(f64, f64)> {
        Some((self.min_budget?, self.max_budget?))
    }

    /// Both age-range bounds, when stated
    pub fn age_range(&self) -> Option<(u8, u8)> {
        Some((self.age_range_min?, self.age_range_max?))
    }
}

/// A user profile extended with property search filters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PropertySearcherProfile {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: UserProfile,
    #[serde(default)]
    pub preferred_property_types: Vec<String>,
    #[serde(default)]
    pub min_bedrooms: Option<u8>,
    #[serde(default)]
    pub furnished_required: Option<bool>,
    #[serde(default)]
    pub required_amenities: Vec<String>,
    #[serde(default)]
    pub preferred_amenities: Vec<String>,
}

impl From<UserProfile> for PropertySearcherProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }
}

/// A rental listing with its current occupants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PropertyWithResidents {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub city: String,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub bedrooms: u8,
    #[serde(default)]
    pub bathrooms: u8,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[validate(range(min = 0.0))]
    pub monthly_rent: f64,
    #[serde(default)]
    pub charges: Option<f64>,
    #[serde(default)]
    pub deposit: Option<f64>,
    #[serde(default)]
    pub minimum_stay_months: Option<u16>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    pub smoking_allowed: bool,
    #[serde(default)]
    pub pets_allowed: bool,
    #[serde(default)]
    #[validate(nested)]
    pub residents: Vec<UserProfile>,
}

impl PropertyWithResidents {
    /// Rent plus monthly charges
    pub fn total_monthly_cost(&self) -> f64 {
        self.monthly_rent + self.charges.unwrap_or(0.0)
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// Generic browsing preferences used by the listing scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserPreferences {
    #[serde(default)]
    pub min_budget: Option<f64>,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub preferred_cities: Vec<String>,
    #[serde(default)]
    pub preferred_neighborhoods: Vec<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 10))]
    pub cleanliness_level: Option<u8>,
    #[serde(default)]
    #[validate(range(min = 1, max = 10))]
    pub noise_tolerance: Option<u8>,
    #[serde(default)]
    pub guest_frequency: Option<GuestFrequency>,
    #[serde(default)]
    pub smoking: Option<bool>,
    #[serde(default)]
    pub pets: Option<bool>,
    #[serde(default)]
    pub min_bedrooms: Option<u8>,
    #[serde(default)]
    pub min_bathrooms: Option<u8>,
    #[serde(default)]
    pub furnished: Option<bool>,
    #[serde(default)]
    pub balcony: Option<bool>,
    #[serde(default)]
    pub parking: Option<bool>,
    #[serde(default)]
    pub desired_move_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub desired_lease_duration_months: Option<u16>,
    #[serde(default)]
    pub age_range_min: Option<u8>,
    #[serde(default)]
    pub age_range_max: Option<u8>,
}

/// Listing attributes seen while browsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PropertyFeatures {
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub city: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub bedrooms: u8,
    #[serde(default)]
    pub bathrooms: u8,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub balcony: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    #[serde(default)]
    pub min_lease_duration_months: Option<u16>,
    #[serde(default)]
    pub max_lease_duration_months: Option<u16>,
    #[serde(default)]
    pub smoking_allowed: Option<bool>,
    #[serde(default)]
    pub pets_allowed: Option<bool>,
}

/// Account data that lives outside the matching profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedProfileData {
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub kyc_verified: Option<bool>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
}
