use serde::{Deserialize, Serialize};
use crate::models::results::{PersonalProfileCompletion, ProfileCompleteness, QualityLabel};

/// A scoring result paired with its display tier
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResponse<T> {
    pub result: T,
    pub quality: QualityLabel,
}

/// Response for the ranking endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResponse<T> {
    pub matches: Vec<T>,
    pub total_candidates: usize,
    pub total_results: usize,
}

/// Completeness reports for a single profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletenessResponse {
    pub matching: ProfileCompleteness,
    pub personal: PersonalProfileCompletion,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
