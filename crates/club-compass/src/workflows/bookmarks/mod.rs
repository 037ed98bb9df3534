//! Per-user saved clubs.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{Bookmark, BookmarkRepository};
pub use router::bookmark_router;
pub use service::{BookmarkService, BookmarkServiceError};
