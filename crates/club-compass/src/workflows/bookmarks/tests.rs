use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::{bookmark_router, BookmarkService, BookmarkServiceError};
use crate::workflows::catalog::ClubId;
use crate::workflows::identity::USER_ID_HEADER;
use crate::workflows::storage::RepositoryError;
use crate::workflows::test_support::*;

fn build_service() -> BookmarkService<MemoryClubs, MemoryBookmarks> {
    BookmarkService::new(seeded_clubs(), Arc::new(MemoryBookmarks::default()))
}

fn club_id(raw: &str) -> ClubId {
    ClubId(raw.to_string())
}

#[test]
fn add_then_list_returns_clubs_in_catalog_order() {
    let service = build_service();
    let caller = user("fresher-1");

    service
        .add(&caller, club_id("club-photography"))
        .expect("bookmark photography");
    service
        .add(&caller, club_id("club-codecraft"))
        .expect("bookmark codecraft");

    let clubs = service.list(&caller).expect("list succeeds");
    let ids: Vec<_> = clubs.iter().map(|club| club.id.as_str()).collect();
    assert_eq!(ids, vec!["club-codecraft", "club-photography"]);

    assert!(service
        .list(&user("someone-else"))
        .expect("list succeeds")
        .is_empty());
}

#[test]
fn duplicate_bookmarks_are_rejected() {
    let service = build_service();
    let caller = user("fresher-2");

    service
        .add(&caller, club_id("club-nss"))
        .expect("first bookmark");
    match service.add(&caller, club_id("club-nss")) {
        Err(BookmarkServiceError::AlreadyBookmarked) => {}
        other => panic!("expected duplicate rejection, got {other:?}"),
    }

    service
        .add(&user("fresher-3"), club_id("club-nss"))
        .expect("other users may bookmark the same club");
}

#[test]
fn unknown_clubs_and_missing_bookmarks_are_not_found() {
    let service = build_service();
    let caller = user("fresher-4");

    assert!(matches!(
        service.add(&caller, club_id("club-unknown")),
        Err(BookmarkServiceError::UnknownClub(_))
    ));
    assert!(matches!(
        service.remove(&caller, &club_id("club-nss")),
        Err(BookmarkServiceError::NotBookmarked)
    ));

    service
        .add(&caller, club_id("club-nss"))
        .expect("bookmark nss");
    service
        .remove(&caller, &club_id("club-nss"))
        .expect("remove succeeds");
    assert!(service.list(&caller).expect("list succeeds").is_empty());
}

#[test]
fn catalog_outage_surfaces_repository_error() {
    let service = BookmarkService::new(
        Arc::new(UnavailableClubs),
        Arc::new(MemoryBookmarks::default()),
    );

    match service.add(&user("fresher-5"), club_id("club-nss")) {
        Err(BookmarkServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository error, got {other:?}"),
    }
}

#[tokio::test]
async fn routes_map_errors_to_status_codes() {
    let router = bookmark_router(Arc::new(build_service()));
    let create = || {
        Request::post("/api/bookmarks")
            .header(header::CONTENT_TYPE, "application/json")
            .header(USER_ID_HEADER, "user-7")
            .body(Body::from(json!({ "club_id": "club-cricket" }).to_string()))
            .expect("request builds")
    };

    let response = router.clone().oneshot(create()).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.clone().oneshot(create()).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("Club already bookmarked"));

    let response = router
        .clone()
        .oneshot(
            Request::get("/api/bookmarks")
                .header(USER_ID_HEADER, "user-7")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["name"], json!("Cricket Club"));
    assert_eq!(payload[0]["domain"], json!("Sports"));

    let delete = || {
        Request::delete("/api/bookmarks/club-cricket")
            .header(USER_ID_HEADER, "user-7")
            .body(Body::empty())
            .expect("request builds")
    };
    let response = router.clone().oneshot(delete()).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(delete()).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("Bookmark not found"));
}
