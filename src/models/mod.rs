// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod results;

pub use domain::{
    ColivingSize, CulturalOpenness, EventInterest, ExtendedProfileData, Frequency, GenderPreference,
    GuestFrequency, PropertyFeatures, PropertySearcherProfile, PropertyWithResidents, RoutineTime,
    SharingOpenness, UserPreferences, UserProfile,
};
pub use requests::{
    CompletenessRequest, ListingMatchRequest, PropertyMatchRequest, RankPropertiesRequest,
    RankRoommatesRequest, UserCompatibilityRequest,
};
pub use responses::{
    CompletenessResponse, ErrorResponse, HealthResponse, RankedResponse, ScoredResponse,
};
pub use results::{
    CategoryCompletion, CompatibilityBreakdown, CompatibilityResult, CompletenessPair,
    ListingMatchBreakdown, MatchResult, PersonalProfileCompletion, ProfileCategory,
    ProfileCompleteness, PropertyMatchBreakdown, PropertyMatchResult, QualityLabel, ResidentMatch,
};
