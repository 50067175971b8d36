use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{
    ExtendedProfileData, PropertyFeatures, PropertySearcherProfile, PropertyWithResidents,
    UserPreferences, UserProfile,
};

/// Score one user against another
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCompatibilityRequest {
    #[validate(nested)]
    pub user1: UserProfile,
    #[validate(nested)]
    pub user2: UserProfile,
}

/// Score a property (and its residents) for a searcher
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PropertyMatchRequest {
    #[validate(nested)]
    pub property: PropertyWithResidents,
    #[validate(nested)]
    pub searcher: PropertySearcherProfile,
}

/// Score a browsed listing against generic preferences
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListingMatchRequest {
    #[validate(nested)]
    pub preferences: UserPreferences,
    #[validate(nested)]
    pub property: PropertyFeatures,
}

/// Rank roommate candidates for a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRoommatesRequest {
    #[validate(nested)]
    pub user: UserProfile,
    #[validate(nested)]
    pub candidates: Vec<UserProfile>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Rank properties for a searcher
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankPropertiesRequest {
    #[validate(nested)]
    pub searcher: PropertySearcherProfile,
    #[validate(nested)]
    pub properties: Vec<PropertyWithResidents>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Compute both completeness reports for a profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompletenessRequest {
    #[validate(nested)]
    pub user: UserProfile,
    #[serde(default)]
    pub extended: ExtendedProfileData,
}
