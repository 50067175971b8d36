use chrono::Utc;

use crate::core::{
    compatibility::calculate_user_compatibility_at,
    listing_match::calculate_match_score,
    property_match::calculate_property_searcher_match_at,
};
use crate::models::{
    CompatibilityResult, MatchResult, PropertyFeatures, PropertyMatchResult, PropertySearcherProfile,
    PropertyWithResidents, UserPreferences, UserProfile,
};

/// A candidate paired with its score
#[derive(Debug, Clone, serde::Serialize)]
pub struct Ranked<C, R> {
    pub candidate: C,
    pub result: R,
}

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankedMatches<C, R> {
    pub matches: Vec<Ranked<C, R>>,
    /// Candidates received, before any filtering
    pub total_candidates: usize,
}

/// Ranking orchestrator: score every candidate, filter, sort, truncate
///
/// # Pipeline Stages
/// 1. Drop the subject itself (roommate ranking only)
/// 2. Score with the engine for the candidate kind
/// 3. Drop results under `min_score`
/// 4. Stable sort by score, highest first, then truncate
#[derive(Debug, Clone)]
pub struct Matcher {
    min_score: u8,
}

impl Matcher {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Keep every candidate regardless of score
    pub fn unfiltered() -> Self {
        Self { min_score: 0 }
    }

    pub fn min_score(&self) -> u8 {
        self.min_score
    }

    fn rank<C, R>(
        &self,
        candidates: Vec<C>,
        limit: usize,
        score: impl Fn(&C) -> R,
        score_of: impl Fn(&R) -> u8,
    ) -> RankedMatches<C, R> {
        let total_candidates = candidates.len();

        let mut matches: Vec<Ranked<C, R>> = candidates
            .into_iter()
            .map(|candidate| {
                let result = score(&candidate);
                Ranked { candidate, result }
            })
            .filter(|ranked| score_of(&ranked.result) >= self.min_score)
            .collect();

        matches.sort_by(|a, b| score_of(&b.result).cmp(&score_of(&a.result)));
        matches.truncate(limit);

        tracing::debug!(
            "Ranked {} of {} candidates (min score {}, limit {})",
            matches.len(),
            total_candidates,
            self.min_score,
            limit
        );

        RankedMatches {
            matches,
            total_candidates,
        }
    }

    /// Rank potential roommates for a user
    pub fn rank_roommates(
        &self,
        user: &UserProfile,
        candidates: Vec<UserProfile>,
        limit: usize,
    ) -> RankedMatches<UserProfile, CompatibilityResult> {
        let today = Utc::now().date_naive();
        let total_candidates = candidates.len();
        let candidates = candidates
            .into_iter()
            .filter(|candidate| candidate.user_id != user.user_id)
            .collect();

        let mut ranked = self.rank(
            candidates,
            limit,
            |candidate| calculate_user_compatibility_at(user, candidate, today),
            |result| result.score,
        );
        ranked.total_candidates = total_candidates;
        ranked
    }

    /// Rank properties for a searcher
    pub fn rank_properties(
        &self,
        searcher: &PropertySearcherProfile,
        properties: Vec<PropertyWithResidents>,
        limit: usize,
    ) -> RankedMatches<PropertyWithResidents, PropertyMatchResult> {
        let today = Utc::now().date_naive();
        self.rank(
            properties,
            limit,
            |property| calculate_property_searcher_match_at(property, searcher, today),
            |result| result.score,
        )
    }

    /// Rank browsed listings against generic preferences
    pub fn rank_listings(
        &self,
        preferences: &UserPreferences,
        listings: Vec<PropertyFeatures>,
        limit: usize,
    ) -> RankedMatches<PropertyFeatures, MatchResult> {
        self.rank(
            listings,
            limit,
            |listing| calculate_match_score(preferences, listing),
            |result| result.score,
        )
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::unfiltered()
    }
}
