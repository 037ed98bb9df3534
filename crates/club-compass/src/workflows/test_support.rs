use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::bookmarks::{Bookmark, BookmarkRepository};
use crate::workflows::catalog::{
    Club, ClubCatalogImporter, ClubDomain, ClubId, ClubRepository, InMemoryClubRepository,
};
use crate::workflows::identity::{UserId, UserProfile, UserRole};
use crate::workflows::qna::{Question, QuestionId, QuestionRepository, Reply};
use crate::workflows::quiz::{QuizResultRecord, QuizResultRepository};
use crate::workflows::storage::RepositoryError;

pub(crate) fn user(id: &str) -> UserId {
    UserId(id.to_string())
}

pub(crate) fn seeded_clubs() -> Arc<MemoryClubs> {
    let clubs = Arc::new(InMemoryClubRepository::new());
    clubs
        .replace_all(ClubCatalogImporter::standard().expect("bundled catalog parses"))
        .expect("seed succeeds");
    clubs
}

pub(crate) type MemoryClubs = InMemoryClubRepository;

pub(crate) struct UnavailableClubs;

impl ClubRepository for UnavailableClubs {
    fn list(
        &self,
        _domain: Option<ClubDomain>,
        _limit: usize,
    ) -> Result<Vec<Club>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ClubId) -> Result<Option<Club>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch_many(&self, _ids: &[ClubId]) -> Result<Vec<Club>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn replace_all(&self, _clubs: Vec<Club>) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default)]
pub(crate) struct MemoryResults {
    pub(crate) records: Mutex<Vec<QuizResultRecord>>,
}

impl QuizResultRepository for MemoryResults {
    fn insert(&self, record: QuizResultRecord) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("results mutex poisoned")
            .push(record);
        Ok(())
    }

    fn latest_for(&self, user_id: &UserId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("results mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| &record.user_id == user_id)
            .max_by_key(|record| record.created_at)
            .cloned())
    }
}

#[derive(Default)]
pub(crate) struct MemoryBookmarks {
    bookmarks: Mutex<Vec<Bookmark>>,
}

impl BookmarkRepository for MemoryBookmarks {
    fn insert(&self, bookmark: Bookmark) -> Result<Bookmark, RepositoryError> {
        let mut guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        if guard.iter().any(|existing| {
            existing.user_id == bookmark.user_id && existing.club_id == bookmark.club_id
        }) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(bookmark.clone());
        Ok(bookmark)
    }

    fn remove(&self, user_id: &UserId, club_id: &ClubId) -> Result<bool, RepositoryError> {
        let mut guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        let before = guard.len();
        guard.retain(|bookmark| !(&bookmark.user_id == user_id && &bookmark.club_id == club_id));
        Ok(guard.len() != before)
    }

    fn exists(&self, user_id: &UserId, club_id: &ClubId) -> Result<bool, RepositoryError> {
        let guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        Ok(guard
            .iter()
            .any(|bookmark| &bookmark.user_id == user_id && &bookmark.club_id == club_id))
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>, RepositoryError> {
        let guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        Ok(guard
            .iter()
            .filter(|bookmark| &bookmark.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(crate) struct MemoryQuestions {
    questions: Mutex<Vec<Question>>,
}

impl QuestionRepository for MemoryQuestions {
    fn insert(&self, question: Question) -> Result<Question, RepositoryError> {
        let mut guard = self.questions.lock().expect("question mutex poisoned");
        if guard.iter().any(|existing| existing.id == question.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(question.clone());
        Ok(question)
    }

    fn fetch(&self, id: &QuestionId) -> Result<Option<Question>, RepositoryError> {
        let guard = self.questions.lock().expect("question mutex poisoned");
        Ok(guard.iter().find(|question| &question.id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<Question>, RepositoryError> {
        let guard = self.questions.lock().expect("question mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }

    fn add_reply(&self, id: &QuestionId, reply: Reply) -> Result<Question, RepositoryError> {
        let mut guard = self.questions.lock().expect("question mutex poisoned");
        let question = guard
            .iter_mut()
            .find(|question| &question.id == id)
            .ok_or(RepositoryError::NotFound)?;
        question.replies.push(reply);
        Ok(question.clone())
    }

    fn remove(&self, id: &QuestionId) -> Result<bool, RepositoryError> {
        let mut guard = self.questions.lock().expect("question mutex poisoned");
        let before = guard.len();
        guard.retain(|question| &question.id != id);
        Ok(guard.len() != before)
    }
}

pub(crate) fn profile(id: &str, name: &str, role: UserRole) -> UserProfile {
    UserProfile {
        user_id: user(id),
        name: name.to_string(),
        role,
        verified: role == UserRole::Senior,
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
