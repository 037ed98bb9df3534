use std::sync::{Arc, Mutex};

use super::domain::{Club, ClubDomain, ClubId};
use super::repository::ClubRepository;
use crate::workflows::storage::RepositoryError;

/// Process-local catalog kept in seed order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryClubRepository {
    clubs: Arc<Mutex<Vec<Club>>>,
}

impl InMemoryClubRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClubRepository for InMemoryClubRepository {
    fn list(&self, domain: Option<ClubDomain>, limit: usize) -> Result<Vec<Club>, RepositoryError> {
        let guard = self.clubs.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|club| domain.map_or(true, |domain| club.domain == domain))
            .take(limit)
            .cloned()
            .collect())
    }

    fn fetch(&self, id: &ClubId) -> Result<Option<Club>, RepositoryError> {
        let guard = self.clubs.lock().expect("catalog mutex poisoned");
        Ok(guard.iter().find(|club| &club.id == id).cloned())
    }

    fn fetch_many(&self, ids: &[ClubId]) -> Result<Vec<Club>, RepositoryError> {
        let guard = self.clubs.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|club| ids.contains(&club.id))
            .cloned()
            .collect())
    }

    fn replace_all(&self, clubs: Vec<Club>) -> Result<usize, RepositoryError> {
        let mut guard = self.clubs.lock().expect("catalog mutex poisoned");
        *guard = clubs;
        Ok(guard.len())
    }
}
