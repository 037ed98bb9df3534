use std::sync::Arc;

use tracing::info;

use super::domain::{Question, QuestionCreate, QuestionId, QuestionView, Reply, ReplyCreate};
use super::repository::{QuestionRepository, QNA_FETCH_LIMIT};
use crate::workflows::identity::{UserId, UserProfile};
use crate::workflows::storage::RepositoryError;

pub struct QnaService<Q> {
    questions: Arc<Q>,
}

impl<Q> QnaService<Q>
where
    Q: QuestionRepository + 'static,
{
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }

    pub fn ask(
        &self,
        author: &UserProfile,
        request: QuestionCreate,
    ) -> Result<QuestionView, QnaServiceError> {
        let title = request.title.trim();
        let description = request.description.trim();
        if title.is_empty() || description.is_empty() {
            return Err(QnaServiceError::MissingFields);
        }

        let stored = self.questions.insert(Question::new(
            author.clone(),
            title.to_string(),
            description.to_string(),
            request.is_anonymous,
        ))?;

        info!(
            question = %stored.id,
            anonymous = stored.is_anonymous,
            "question posted"
        );
        Ok(stored.view_for(&author.user_id))
    }

    pub fn list(&self, viewer: &UserId) -> Result<Vec<QuestionView>, QnaServiceError> {
        Ok(self
            .questions
            .recent(QNA_FETCH_LIMIT)?
            .iter()
            .map(|question| question.view_for(viewer))
            .collect())
    }

    pub fn get(&self, viewer: &UserId, id: &QuestionId) -> Result<QuestionView, QnaServiceError> {
        self.questions
            .fetch(id)?
            .map(|question| question.view_for(viewer))
            .ok_or(QnaServiceError::UnknownQuestion)
    }

    pub fn reply(
        &self,
        author: &UserProfile,
        id: &QuestionId,
        request: ReplyCreate,
    ) -> Result<QuestionView, QnaServiceError> {
        let content = request.content.trim();
        if content.is_empty() {
            return Err(QnaServiceError::EmptyReply);
        }

        let updated = self
            .questions
            .add_reply(id, Reply::new(author, content))
            .map_err(|err| match err {
                RepositoryError::NotFound => QnaServiceError::UnknownQuestion,
                other => QnaServiceError::Repository(other),
            })?;

        Ok(updated.view_for(&author.user_id))
    }

    /// Only the thread's author may delete it.
    pub fn delete(&self, caller: &UserId, id: &QuestionId) -> Result<(), QnaServiceError> {
        let question = self
            .questions
            .fetch(id)?
            .ok_or(QnaServiceError::UnknownQuestion)?;
        if !question.is_authored_by(caller) {
            return Err(QnaServiceError::NotAuthor);
        }

        if !self.questions.remove(id)? {
            return Err(QnaServiceError::UnknownQuestion);
        }
        info!(question = %id, "question deleted");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QnaServiceError {
    #[error("Title and description are required")]
    MissingFields,
    #[error("Reply content is required")]
    EmptyReply,
    #[error("Question not found")]
    UnknownQuestion,
    #[error("Only the author can delete this question")]
    NotAuthor,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
