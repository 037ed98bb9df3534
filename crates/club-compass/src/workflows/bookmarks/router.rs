use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::BookmarkRepository;
use super::service::{BookmarkService, BookmarkServiceError};
use crate::workflows::catalog::{ClubId, ClubRepository};
use crate::workflows::identity::CallerId;

#[derive(Debug, Deserialize)]
pub(crate) struct BookmarkCreate {
    pub(crate) club_id: ClubId,
}

pub fn bookmark_router<C, B>(service: Arc<BookmarkService<C, B>>) -> Router
where
    C: ClubRepository + 'static,
    B: BookmarkRepository + 'static,
{
    Router::new()
        .route(
            "/api/bookmarks",
            get(list_handler::<C, B>).post(create_handler::<C, B>),
        )
        .route("/api/bookmarks/:club_id", delete(delete_handler::<C, B>))
        .with_state(service)
}

fn error_response(error: BookmarkServiceError) -> Response {
    let status = match &error {
        BookmarkServiceError::AlreadyBookmarked => StatusCode::BAD_REQUEST,
        BookmarkServiceError::NotBookmarked | BookmarkServiceError::UnknownClub(_) => {
            StatusCode::NOT_FOUND
        }
        BookmarkServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn create_handler<C, B>(
    State(service): State<Arc<BookmarkService<C, B>>>,
    CallerId(user_id): CallerId,
    axum::Json(request): axum::Json<BookmarkCreate>,
) -> Response
where
    C: ClubRepository + 'static,
    B: BookmarkRepository + 'static,
{
    match service.add(&user_id, request.club_id) {
        Ok(_) => {
            let payload = json!({ "message": "Club bookmarked successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<C, B>(
    State(service): State<Arc<BookmarkService<C, B>>>,
    CallerId(user_id): CallerId,
    Path(club_id): Path<String>,
) -> Response
where
    C: ClubRepository + 'static,
    B: BookmarkRepository + 'static,
{
    match service.remove(&user_id, &ClubId(club_id)) {
        Ok(()) => {
            let payload = json!({ "message": "Bookmark removed successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn list_handler<C, B>(
    State(service): State<Arc<BookmarkService<C, B>>>,
    CallerId(user_id): CallerId,
) -> Response
where
    C: ClubRepository + 'static,
    B: BookmarkRepository + 'static,
{
    match service.list(&user_id) {
        Ok(clubs) => (StatusCode::OK, axum::Json(clubs)).into_response(),
        Err(err) => error_response(err),
    }
}
