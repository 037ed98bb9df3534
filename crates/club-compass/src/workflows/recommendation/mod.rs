//! Ranks catalog clubs against a quiz score vector.

mod rules;

use serde::{Deserialize, Serialize};

use crate::workflows::catalog::{Club, ClubId};
use crate::workflows::quiz::domain::TraitScores;
use rules::{
    affinity_for, AFFINITY_MULTIPLIER, AFFINITY_THRESHOLD, BONUS_THRESHOLD, TRAIT_BONUSES,
};

/// Recommendations returned per submission unless configured otherwise.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

const MAX_REASONS_SHOWN: usize = 2;
const FALLBACK_REASON: &str = "diverse skills";
const PERCENTAGE_FLOOR: u32 = 5;
const PERCENTAGE_SCORE_CAP: u32 = 95;

/// A ranked club suggestion with a short justification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub club_id: ClubId,
    pub club_name: String,
    pub match_percentage: u32,
    pub reason: String,
}

/// Intermediate per-club result kept for ranking on the raw score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubMatch {
    pub club_id: ClubId,
    pub club_name: String,
    pub match_score: u32,
    pub reasons: Vec<&'static str>,
}

impl ClubMatch {
    /// Display percentage in 5..=100.
    pub fn match_percentage(&self) -> u32 {
        self.match_score.min(PERCENTAGE_SCORE_CAP) + PERCENTAGE_FLOOR
    }

    /// Only the first two reasons make it into the text; later ones still count toward the score.
    pub fn reason(&self) -> String {
        let phrase = if self.reasons.is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            self.reasons
                .iter()
                .take(MAX_REASONS_SHOWN)
                .copied()
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("You'd be great here because of your {phrase}!")
    }

    fn into_recommendation(self) -> Recommendation {
        Recommendation {
            match_percentage: self.match_percentage(),
            reason: self.reason(),
            club_id: self.club_id,
            club_name: self.club_name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Scores one club: at most one domain affinity plus any trait bonuses.
    pub fn score_club(&self, scores: &TraitScores, club: &Club) -> ClubMatch {
        let mut match_score = 0;
        let mut reasons = Vec::new();

        if let Some(affinity) = affinity_for(club.domain) {
            let trait_score = scores.get(affinity.trait_key);
            if trait_score > AFFINITY_THRESHOLD {
                match_score = trait_score.saturating_mul(AFFINITY_MULTIPLIER);
                reasons.push(affinity.reason);
            }
        }

        for bonus in &TRAIT_BONUSES {
            if scores.get(bonus.trait_key) > BONUS_THRESHOLD {
                match_score = match_score.saturating_add(bonus.points);
                reasons.push(bonus.reason);
            }
        }

        ClubMatch {
            club_id: club.id.clone(),
            club_name: club.name.clone(),
            match_score,
            reasons,
        }
    }

    /// Every club scored, ordered by raw score. Equal scores keep catalog order.
    pub fn rank(&self, scores: &TraitScores, catalog: &[Club]) -> Vec<ClubMatch> {
        let mut matches: Vec<ClubMatch> = catalog
            .iter()
            .map(|club| self.score_club(scores, club))
            .collect();
        matches.sort_by(|left, right| right.match_score.cmp(&left.match_score));
        matches
    }

    pub fn recommend(&self, scores: &TraitScores, catalog: &[Club]) -> Vec<Recommendation> {
        self.rank(scores, catalog)
            .into_iter()
            .take(self.limit)
            .map(ClubMatch::into_recommendation)
            .collect()
    }
}
