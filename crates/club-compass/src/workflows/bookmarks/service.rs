use std::sync::Arc;

use tracing::info;

use super::repository::{Bookmark, BookmarkRepository};
use crate::workflows::catalog::{Club, ClubId, ClubRepository};
use crate::workflows::identity::UserId;
use crate::workflows::storage::RepositoryError;

pub struct BookmarkService<C, B> {
    clubs: Arc<C>,
    bookmarks: Arc<B>,
}

impl<C, B> BookmarkService<C, B>
where
    C: ClubRepository + 'static,
    B: BookmarkRepository + 'static,
{
    pub fn new(clubs: Arc<C>, bookmarks: Arc<B>) -> Self {
        Self { clubs, bookmarks }
    }

    pub fn add(&self, user_id: &UserId, club_id: ClubId) -> Result<Bookmark, BookmarkServiceError> {
        if self.clubs.fetch(&club_id)?.is_none() {
            return Err(BookmarkServiceError::UnknownClub(club_id));
        }
        if self.bookmarks.exists(user_id, &club_id)? {
            return Err(BookmarkServiceError::AlreadyBookmarked);
        }

        let stored = self
            .bookmarks
            .insert(Bookmark::new(user_id.clone(), club_id))
            .map_err(|err| match err {
                RepositoryError::Conflict => BookmarkServiceError::AlreadyBookmarked,
                other => BookmarkServiceError::Repository(other),
            })?;

        info!(user = %user_id, club = %stored.club_id, "club bookmarked");
        Ok(stored)
    }

    pub fn remove(&self, user_id: &UserId, club_id: &ClubId) -> Result<(), BookmarkServiceError> {
        if self.bookmarks.remove(user_id, club_id)? {
            Ok(())
        } else {
            Err(BookmarkServiceError::NotBookmarked)
        }
    }

    /// Clubs the user has bookmarked, in catalog order.
    pub fn list(&self, user_id: &UserId) -> Result<Vec<Club>, BookmarkServiceError> {
        let club_ids: Vec<ClubId> = self
            .bookmarks
            .for_user(user_id)?
            .into_iter()
            .map(|bookmark| bookmark.club_id)
            .collect();

        if club_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self.clubs.fetch_many(&club_ids)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookmarkServiceError {
    #[error("Club already bookmarked")]
    AlreadyBookmarked,
    #[error("Bookmark not found")]
    NotBookmarked,
    #[error("Club not found")]
    UnknownClub(ClubId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
