use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::Answer;
use crate::workflows::identity::UserId;
use crate::workflows::recommendation::Recommendation;
use crate::workflows::storage::RepositoryError;

/// Result returned to the caller after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub personality_type: String,
    pub personality_description: String,
    pub recommendations: Vec<Recommendation>,
}

/// Stored form of a quiz submission and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResultRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub answers: Vec<Answer>,
    pub personality_type: String,
    pub personality_description: String,
    pub recommendations: Vec<Recommendation>,
    pub created_at: DateTime<Utc>,
}

impl QuizResultRecord {
    pub fn new(user_id: UserId, answers: Vec<Answer>, result: QuizResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            answers,
            personality_type: result.personality_type,
            personality_description: result.personality_description,
            recommendations: result.recommendations,
            created_at: Utc::now(),
        }
    }

    pub fn result(&self) -> QuizResult {
        QuizResult {
            personality_type: self.personality_type.clone(),
            personality_description: self.personality_description.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

/// Storage abstraction for quiz outcomes. Later submissions supersede earlier ones.
pub trait QuizResultRepository: Send + Sync {
    fn insert(&self, record: QuizResultRecord) -> Result<(), RepositoryError>;
    /// Most recent record by `created_at`; on equal timestamps the later insert wins.
    fn latest_for(&self, user_id: &UserId) -> Result<Option<QuizResultRecord>, RepositoryError>;
}
