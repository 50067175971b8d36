// Core algorithm exports
pub mod compatibility;
pub mod completeness;
pub mod listing_match;
pub mod matcher;
pub mod property_match;
pub mod quality;

pub use compatibility::{calculate_age, calculate_user_compatibility, calculate_user_compatibility_at};
pub use completeness::{calculate_personal_profile_completion, calculate_profile_completeness};
pub use listing_match::calculate_match_score;
pub use matcher::{Matcher, Ranked, RankedMatches};
pub use property_match::{
    calculate_property_searcher_match, calculate_property_searcher_match_at, is_searcher_reliable,
};
pub use quality::{get_compatibility_quality, get_match_quality, get_property_match_quality};
