use crate::infra::AppState;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use club_compass::config::CorsConfig;
use club_compass::workflows::bookmarks::{bookmark_router, BookmarkRepository, BookmarkService};
use club_compass::workflows::catalog::{catalog_router, ClubRepository};
use club_compass::workflows::qna::{qna_router, QnaService, QuestionRepository};
use club_compass::workflows::quiz::{quiz_router, QuizResultRepository, QuizService};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Merges the feature routers with the operational endpoints.
pub(crate) fn with_club_routes<C, R, B, Q>(
    clubs: Arc<C>,
    quiz: Arc<QuizService<C, R>>,
    bookmarks: Arc<BookmarkService<C, B>>,
    qna: Arc<QnaService<Q>>,
) -> axum::Router
where
    C: ClubRepository + 'static,
    R: QuizResultRepository + 'static,
    B: BookmarkRepository + 'static,
    Q: QuestionRepository + 'static,
{
    quiz_router(quiz)
        .merge(catalog_router(clubs))
        .merge(bookmark_router(bookmarks))
        .merge(qna_router(qna))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

/// Wildcard origins never carry credentials; an explicit allow-list does.
pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AnyOrigin => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::Origins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(%origin, "ignoring CORS origin that is not a valid header value");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_credentials(true)
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
        }
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{
        InMemoryBookmarkRepository, InMemoryQuestionRepository, InMemoryQuizResultRepository,
    };
    use axum::body::Body;
    use axum::http::{Method, Request};
    use club_compass::workflows::catalog::{ClubCatalogImporter, InMemoryClubRepository};
    use club_compass::workflows::identity::USER_ID_HEADER;
    use club_compass::workflows::quiz::QuestionBank;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool, cors: &CorsConfig) -> axum::Router {
        let clubs = Arc::new(InMemoryClubRepository::default());
        clubs
            .replace_all(ClubCatalogImporter::standard().expect("bundled catalog parses"))
            .expect("seed succeeds");
        let quiz = Arc::new(QuizService::new(
            Arc::new(QuestionBank::standard()),
            clubs.clone(),
            Arc::new(InMemoryQuizResultRepository::default()),
        ));
        let bookmarks = Arc::new(BookmarkService::new(
            clubs.clone(),
            Arc::new(InMemoryBookmarkRepository::default()),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };

        let qna = Arc::new(QnaService::new(Arc::new(
            InMemoryQuestionRepository::default(),
        )));

        with_club_routes(clubs, quiz, bookmarks, qna)
            .layer(Extension(state))
            .layer(cors_layer(cors))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let response = app(false, &CorsConfig::AnyOrigin)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true, &CorsConfig::AnyOrigin)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn merged_router_serves_every_area() {
        let router = app(true, &CorsConfig::AnyOrigin);

        let response = router
            .clone()
            .oneshot(Request::get("/api/quiz/questions").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        let payload = json_body(response).await;
        assert_eq!(payload["questions"].as_array().map(Vec::len), Some(10));

        let response = router
            .clone()
            .oneshot(
                Request::get("/api/clubs?domain=Literary")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        let payload = json_body(response).await;
        assert_eq!(payload.as_array().map(Vec::len), Some(2));

        let response = router
            .clone()
            .oneshot(Request::get("/api/bookmarks").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = router
            .clone()
            .oneshot(
                Request::get("/api/bookmarks")
                    .header(USER_ID_HEADER, "student-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(json_body(response).await, json!([]));

        let response = router
            .oneshot(
                Request::get("/api/questions")
                    .header(USER_ID_HEADER, "student-1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn wildcard_cors_allows_any_origin_without_credentials() {
        let response = app(true, &CorsConfig::AnyOrigin)
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://fresher.example")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn origin_list_echoes_allowed_origin_with_credentials() {
        let cors = CorsConfig::Origins(vec!["https://clubs.college.edu".to_string()]);

        let response = app(true, &cors)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/quiz/submit")
                    .header(header::ORIGIN, "https://clubs.college.edu")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type, x-user-id")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");

        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("https://clubs.college.edu"))
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some(&HeaderValue::from_static("true"))
        );

        let response = app(true, &cors)
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "https://elsewhere.example")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
