//! Coliving Match - compatibility scoring for a coliving marketplace
//!
//! This library scores how well two residents would live together, how well a
//! property (and the people already living there) suits a searcher, and how a
//! browsed listing fits a set of generic preferences. Every score lands on a
//! 0-100 scale with a per-dimension breakdown and human-readable reasons.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    calculate_match_score, calculate_personal_profile_completion, calculate_profile_completeness,
    calculate_property_searcher_match, calculate_user_compatibility, get_compatibility_quality,
    get_match_quality, get_property_match_quality, Matcher,
};
pub use crate::error::ApiError;
pub use crate::models::{
    CompatibilityResult, MatchResult, PropertyFeatures, PropertyMatchResult, PropertySearcherProfile,
    PropertyWithResidents, UserPreferences, UserProfile,
};
