use std::sync::Arc;

use tracing::info;

use super::bank::QuestionBank;
use super::domain::{QuestionView, QuizSubmission};
use super::engine::QuizEngine;
use super::repository::{QuizResult, QuizResultRecord, QuizResultRepository};
use crate::workflows::catalog::{ClubRepository, CATALOG_FETCH_LIMIT};
use crate::workflows::identity::UserId;
use crate::workflows::recommendation::RecommendationEngine;
use crate::workflows::storage::RepositoryError;

/// Service composing the quiz engine, the recommendation engine, and storage.
pub struct QuizService<C, R> {
    engine: QuizEngine,
    recommender: RecommendationEngine,
    clubs: Arc<C>,
    results: Arc<R>,
}

impl<C, R> QuizService<C, R>
where
    C: ClubRepository + 'static,
    R: QuizResultRepository + 'static,
{
    pub fn new(bank: Arc<QuestionBank>, clubs: Arc<C>, results: Arc<R>) -> Self {
        Self::with_engines(
            QuizEngine::new(bank),
            RecommendationEngine::default(),
            clubs,
            results,
        )
    }

    pub fn with_engines(
        engine: QuizEngine,
        recommender: RecommendationEngine,
        clubs: Arc<C>,
        results: Arc<R>,
    ) -> Self {
        Self {
            engine,
            recommender,
            clubs,
            results,
        }
    }

    pub fn questions(&self) -> Vec<QuestionView> {
        self.engine.bank().public_view()
    }

    /// Score a submission, rank the catalog, and persist the outcome for the caller.
    pub fn submit(
        &self,
        user_id: &UserId,
        submission: QuizSubmission,
    ) -> Result<QuizResult, QuizServiceError> {
        let outcome = self.engine.score(&submission.answers);
        let catalog = self.clubs.list(None, CATALOG_FETCH_LIMIT)?;
        let recommendations = self.recommender.recommend(&outcome.scores, &catalog);

        let result = QuizResult {
            personality_type: outcome.personality.label().to_string(),
            personality_description: outcome.personality.description().to_string(),
            recommendations,
        };

        let record = QuizResultRecord::new(user_id.clone(), submission.answers, result.clone());
        self.results.insert(record)?;

        info!(
            user = %user_id,
            personality = ?outcome.personality,
            recommended = result.recommendations.len(),
            "quiz submission scored"
        );

        Ok(result)
    }

    /// The caller's most recent result, if they have taken the quiz.
    pub fn latest(&self, user_id: &UserId) -> Result<Option<QuizResult>, QuizServiceError> {
        let record = self.results.latest_for(user_id)?;
        Ok(record.map(|record| record.result()))
    }
}

/// Error raised by the quiz service. Scoring itself never fails; only storage can.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
