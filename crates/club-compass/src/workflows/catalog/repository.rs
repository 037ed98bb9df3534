use super::domain::{Club, ClubDomain, ClubId};
use crate::workflows::storage::RepositoryError;

/// Upper bound on clubs returned from a single catalog read.
pub const CATALOG_FETCH_LIMIT: usize = 100;

/// Storage abstraction for the club catalog. Reads preserve insertion order.
pub trait ClubRepository: Send + Sync {
    fn list(&self, domain: Option<ClubDomain>, limit: usize) -> Result<Vec<Club>, RepositoryError>;
    fn fetch(&self, id: &ClubId) -> Result<Option<Club>, RepositoryError>;
    fn fetch_many(&self, ids: &[ClubId]) -> Result<Vec<Club>, RepositoryError>;
    /// Drops the current catalog and loads `clubs` in its place.
    fn replace_all(&self, clubs: Vec<Club>) -> Result<usize, RepositoryError>;
}
