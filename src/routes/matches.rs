use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::{
    calculate_match_score, calculate_personal_profile_completion, calculate_profile_completeness,
    calculate_property_searcher_match, calculate_user_compatibility, get_compatibility_quality,
    get_match_quality, get_property_match_quality, Matcher, RankedMatches,
};
use crate::error::ApiError;
use crate::models::{
    CompletenessRequest, CompletenessResponse, HealthResponse, ListingMatchRequest,
    PropertyMatchRequest, RankPropertiesRequest, RankRoommatesRequest, RankedResponse,
    ScoredResponse, UserCompatibilityRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matching: MatchingSettings) -> Self {
        Self {
            matcher: Matcher::new(matching.min_score),
            matching,
        }
    }

    /// Requested limit, or the configured default; rejects anything above the maximum
    fn resolve_limit(&self, requested: Option<u16>) -> Result<usize, ApiError> {
        match requested {
            Some(limit) if limit > self.matching.max_limit => Err(ApiError::LimitExceeded {
                requested: limit,
                max: self.matching.max_limit,
            }),
            Some(limit) => Ok(limit as usize),
            None => Ok(self.matching.default_limit.min(self.matching.max_limit) as usize),
        }
    }
}

/// Configure all scoring routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/users", web::post().to(user_compatibility))
        .route("/compatibility/property", web::post().to(property_compatibility))
        .route("/matches/listing", web::post().to(listing_match))
        .route("/matches/roommates", web::post().to(rank_roommates))
        .route("/matches/properties", web::post().to(rank_properties))
        .route("/profiles/completeness", web::post().to(profile_completeness));
}

fn ranked_response<C, R>(ranked: RankedMatches<C, R>) -> RankedResponse<crate::core::Ranked<C, R>> {
    RankedResponse {
        total_results: ranked.matches.len(),
        total_candidates: ranked.total_candidates,
        matches: ranked.matches,
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// User-to-user compatibility
///
/// POST /api/v1/compatibility/users
async fn user_compatibility(req: web::Json<UserCompatibilityRequest>) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for compatibility request: {}", errors);
        return Err(errors.into());
    }

    let result = calculate_user_compatibility(&req.user1, &req.user2);

    tracing::info!(
        "Compatibility {} <-> {}: {} (reliable: {})",
        req.user1.user_id,
        req.user2.user_id,
        result.score,
        result.is_score_reliable
    );

    let quality = get_compatibility_quality(result.score);
    Ok(HttpResponse::Ok().json(ScoredResponse { result, quality }))
}

/// Property-to-searcher match, residents included
///
/// POST /api/v1/compatibility/property
async fn property_compatibility(req: web::Json<PropertyMatchRequest>) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for property match request: {}", errors);
        return Err(errors.into());
    }

    let result = calculate_property_searcher_match(&req.property, &req.searcher);

    tracing::info!(
        "Property {} for searcher {}: {} ({} residents, {} dealbreakers)",
        req.property.id,
        req.searcher.profile.user_id,
        result.score,
        req.property.residents.len(),
        result.dealbreakers.len()
    );

    let quality = get_property_match_quality(result.score);
    Ok(HttpResponse::Ok().json(ScoredResponse { result, quality }))
}

/// Generic listing match for browsing
///
/// POST /api/v1/matches/listing
async fn listing_match(req: web::Json<ListingMatchRequest>) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for listing match request: {}", errors);
        return Err(errors.into());
    }

    let result = calculate_match_score(&req.preferences, &req.property);
    tracing::debug!("Listing in {} scored {}", req.property.city, result.score);

    let quality = get_match_quality(result.score);
    Ok(HttpResponse::Ok().json(ScoredResponse { result, quality }))
}

/// Rank roommate candidates for a user
///
/// POST /api/v1/matches/roommates
///
/// Request body:
/// ```json
/// {
///   "user": { "user_id": "string", ... },
///   "candidates": [{ "user_id": "string", ... }],
///   "limit": 20
/// }
/// ```
async fn rank_roommates(
    state: web::Data<AppState>,
    req: web::Json<RankRoommatesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for roommate ranking request: {}", errors);
        return Err(errors.into());
    }

    let limit = state.resolve_limit(req.limit)?;
    let RankRoommatesRequest { user, candidates, .. } = req.into_inner();

    tracing::info!(
        "Ranking {} roommate candidates for user: {}, limit: {}, min score: {}",
        candidates.len(),
        user.user_id,
        limit,
        state.matcher.min_score()
    );

    let response = ranked_response(state.matcher.rank_roommates(&user, candidates, limit));

    tracing::info!(
        "Returning {} roommates for user {} (from {} candidates)",
        response.total_results,
        user.user_id,
        response.total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Rank properties for a searcher
///
/// POST /api/v1/matches/properties
async fn rank_properties(
    state: web::Data<AppState>,
    req: web::Json<RankPropertiesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for property ranking request: {}", errors);
        return Err(errors.into());
    }

    let limit = state.resolve_limit(req.limit)?;
    let RankPropertiesRequest { searcher, properties, .. } = req.into_inner();

    tracing::info!(
        "Ranking {} properties for searcher: {}, limit: {}, min score: {}",
        properties.len(),
        searcher.profile.user_id,
        limit,
        state.matcher.min_score()
    );

    let response = ranked_response(state.matcher.rank_properties(&searcher, properties, limit));

    tracing::info!(
        "Returning {} properties for searcher {} (from {} candidates)",
        response.total_results,
        searcher.profile.user_id,
        response.total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Both completeness reports for one profile
///
/// POST /api/v1/profiles/completeness
async fn profile_completeness(req: web::Json<CompletenessRequest>) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for completeness request: {}", errors);
        return Err(errors.into());
    }

    let response = CompletenessResponse {
        matching: calculate_profile_completeness(&req.user),
        personal: calculate_personal_profile_completion(&req.user, &req.extended),
    };

    tracing::debug!(
        "Completeness for {}: matching {}%, personal {}%",
        req.user.user_id,
        response.matching.percentage,
        response.personal.percentage
    );

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_state(default_limit: u16, max_limit: u16) -> AppState {
        AppState::new(MatchingSettings {
            default_limit,
            max_limit,
            min_score: 0,
        })
    }

    #[test]
    fn test_resolve_limit() {
        let state = create_state(20, 50);
        assert_eq!(state.resolve_limit(None).unwrap(), 20);
        assert_eq!(state.resolve_limit(Some(50)).unwrap(), 50);
        assert!(matches!(
            state.resolve_limit(Some(51)),
            Err(ApiError::LimitExceeded { requested: 51, max: 50 })
        ));
    }

    #[test]
    fn test_default_limit_capped_by_max() {
        let state = create_state(200, 100);
        assert_eq!(state.resolve_limit(None).unwrap(), 100);
    }

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
