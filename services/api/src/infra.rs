use club_compass::workflows::bookmarks::{Bookmark, BookmarkRepository};
use club_compass::workflows::catalog::ClubId;
use club_compass::workflows::identity::UserId;
use club_compass::workflows::qna::{Question, QuestionId, QuestionRepository, Reply};
use club_compass::workflows::quiz::{QuizResultRecord, QuizResultRepository};
use club_compass::workflows::storage::RepositoryError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Results keyed by user; submissions append so the newest entry is last.
#[derive(Default, Clone)]
pub(crate) struct InMemoryQuizResultRepository {
    records: Arc<Mutex<HashMap<UserId, Vec<QuizResultRecord>>>>,
}

impl QuizResultRepository for InMemoryQuizResultRepository {
    fn insert(&self, record: QuizResultRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("results mutex poisoned");
        guard
            .entry(record.user_id.clone())
            .or_default()
            .push(record);
        Ok(())
    }

    fn latest_for(&self, user_id: &UserId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("results mutex poisoned");
        Ok(guard
            .get(user_id)
            .and_then(|records| records.iter().max_by_key(|record| record.created_at))
            .cloned())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryBookmarkRepository {
    bookmarks: Arc<Mutex<HashMap<UserId, Vec<Bookmark>>>>,
}

impl BookmarkRepository for InMemoryBookmarkRepository {
    fn insert(&self, bookmark: Bookmark) -> Result<Bookmark, RepositoryError> {
        let mut guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        let saved = guard.entry(bookmark.user_id.clone()).or_default();
        if saved.iter().any(|existing| existing.club_id == bookmark.club_id) {
            return Err(RepositoryError::Conflict);
        }
        saved.push(bookmark.clone());
        Ok(bookmark)
    }

    fn remove(&self, user_id: &UserId, club_id: &ClubId) -> Result<bool, RepositoryError> {
        let mut guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        let Some(saved) = guard.get_mut(user_id) else {
            return Ok(false);
        };
        let before = saved.len();
        saved.retain(|bookmark| &bookmark.club_id != club_id);
        Ok(saved.len() != before)
    }

    fn exists(&self, user_id: &UserId, club_id: &ClubId) -> Result<bool, RepositoryError> {
        let guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        Ok(guard
            .get(user_id)
            .is_some_and(|saved| saved.iter().any(|bookmark| &bookmark.club_id == club_id)))
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>, RepositoryError> {
        let guard = self.bookmarks.lock().expect("bookmark mutex poisoned");
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }
}

/// Threads in posting order; listings walk it backwards.
#[derive(Default, Clone)]
pub(crate) struct InMemoryQuestionRepository {
    questions: Arc<Mutex<Vec<Question>>>,
}

impl QuestionRepository for InMemoryQuestionRepository {
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

#[cfg(test)]
mod tests {
    use super::*;
    use club_compass::workflows::identity::{UserProfile, UserRole};

    fn user(id: &str) -> UserId {
        UserId(id.to_string())
    }

    #[test]
    fn bookmark_repository_rejects_duplicates_per_user() {
        let repository = InMemoryBookmarkRepository::default();
        let club = ClubId("club-nss".to_string());

        repository
            .insert(Bookmark::new(user("a"), club.clone()))
            .expect("first insert");
        assert!(matches!(
            repository.insert(Bookmark::new(user("a"), club.clone())),
            Err(RepositoryError::Conflict)
        ));
        repository
            .insert(Bookmark::new(user("b"), club.clone()))
            .expect("other user insert");

        assert!(repository.remove(&user("a"), &club).expect("remove"));
        assert!(!repository.remove(&user("a"), &club).expect("second remove"));
        assert!(repository.exists(&user("b"), &club).expect("exists"));
    }

    #[test]
    fn question_repository_lists_newest_first_and_appends_replies() {
        let repository = InMemoryQuestionRepository::default();
        let author = UserProfile {
            user_id: user("fresher-1"),
            name: "Nia".to_string(),
            role: UserRole::Fresher,
            verified: false,
        };

        let first = repository
            .insert(Question::new(
                author.clone(),
                "Library hours".to_string(),
                "Open on Sundays?".to_string(),
                false,
            ))
            .expect("insert first");
        let second = repository
            .insert(Question::new(
                author.clone(),
                "Gym access".to_string(),
                "Do freshers get a pass?".to_string(),
                true,
            ))
            .expect("insert second");

        let recent = repository.recent(10).expect("recent");
        assert_eq!(recent[0].id, second.id);
        assert_eq!(recent[1].id, first.id);
        assert_eq!(repository.recent(1).expect("recent").len(), 1);

        let updated = repository
            .add_reply(&first.id, Reply::new(&author, "Yes, 10 to 4."))
            .expect("reply appended");
        assert_eq!(updated.replies.len(), 1);
        assert!(matches!(
            repository.add_reply(
                &QuestionId("missing".to_string()),
                Reply::new(&author, "hi")
            ),
            Err(RepositoryError::NotFound)
        ));

        assert!(repository.remove(&first.id).expect("remove"));
        assert!(!repository.remove(&first.id).expect("second remove"));
    }
}
