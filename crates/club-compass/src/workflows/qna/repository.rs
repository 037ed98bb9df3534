use super::domain::{Question, QuestionId, Reply};
use crate::workflows::storage::RepositoryError;

/// Upper bound on threads returned by a single listing.
pub const QNA_FETCH_LIMIT: usize = 100;

/// Storage abstraction for Q&A threads.
pub trait QuestionRepository: Send + Sync {
    fn insert(&self, question: Question) -> Result<Question, RepositoryError>;
    fn fetch(&self, id: &QuestionId) -> Result<Option<Question>, RepositoryError>;
    /// Newest threads first.
    fn recent(&self, limit: usize) -> Result<Vec<Question>, RepositoryError>;
    /// Appends a reply; fails with [`RepositoryError::NotFound`] for an unknown thread.
    fn add_reply(&self, id: &QuestionId, reply: Reply) -> Result<Question, RepositoryError>;
    /// Returns whether a thread was removed.
    fn remove(&self, id: &QuestionId) -> Result<bool, RepositoryError>;
}
