use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflows::catalog::ClubId;
use crate::workflows::identity::UserId;
use crate::workflows::storage::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub user_id: UserId,
    pub club_id: ClubId,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(user_id: UserId, club_id: ClubId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            club_id,
            created_at: Utc::now(),
        }
    }
}

/// Storage abstraction for bookmarks, keyed by (user, club).
pub trait BookmarkRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the pair already exists.
    fn insert(&self, bookmark: Bookmark) -> Result<Bookmark, RepositoryError>;
    /// Returns whether a bookmark was removed.
    fn remove(&self, user_id: &UserId, club_id: &ClubId) -> Result<bool, RepositoryError>;
    fn exists(&self, user_id: &UserId, club_id: &ClubId) -> Result<bool, RepositoryError>;
    fn for_user(&self, user_id: &UserId) -> Result<Vec<Bookmark>, RepositoryError>;
}
