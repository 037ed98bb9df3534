use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ClubDomain, ClubId};
use super::repository::{ClubRepository, CATALOG_FETCH_LIMIT};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClubQuery {
    #[serde(default)]
    pub(crate) domain: Option<String>,
}

/// Read-only catalog endpoints.
pub fn catalog_router<C>(clubs: Arc<C>) -> Router
where
    C: ClubRepository + 'static,
{
    Router::new()
        .route("/api/clubs", get(list_handler::<C>))
        .route("/api/clubs/:club_id", get(club_handler::<C>))
        .with_state(clubs)
}

pub(crate) async fn list_handler<C>(
    State(clubs): State<Arc<C>>,
    Query(query): Query<ClubQuery>,
) -> Response
where
    C: ClubRepository + 'static,
{
    let domain = match query.domain.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<ClubDomain>() {
            Ok(domain) => Some(domain),
            // An unrecognized domain matches no club.
            Err(_) => return (StatusCode::OK, axum::Json(json!([]))).into_response(),
        },
    };

    match clubs.list(domain, CATALOG_FETCH_LIMIT) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn club_handler<C>(
    State(clubs): State<Arc<C>>,
    Path(club_id): Path<String>,
) -> Response
where
    C: ClubRepository + 'static,
{
    match clubs.fetch(&ClubId(club_id)) {
        Ok(Some(club)) => (StatusCode::OK, axum::Json(club)).into_response(),
        Ok(None) => {
            let payload = json!({ "error": "Club not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
