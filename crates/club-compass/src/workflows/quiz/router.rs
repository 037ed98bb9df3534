use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::QuizSubmission;
use super::repository::QuizResultRepository;
use super::service::QuizService;
use crate::workflows::catalog::ClubRepository;
use crate::workflows::identity::CallerId;

/// Router builder exposing the quiz endpoints.
pub fn quiz_router<C, R>(service: Arc<QuizService<C, R>>) -> Router
where
    C: ClubRepository + 'static,
    R: QuizResultRepository + 'static,
{
    Router::new()
        .route("/api/quiz/questions", get(questions_handler::<C, R>))
        .route("/api/quiz/submit", post(submit_handler::<C, R>))
        .route("/api/quiz/result", get(result_handler::<C, R>))
        .with_state(service)
}

pub(crate) async fn questions_handler<C, R>(
    State(service): State<Arc<QuizService<C, R>>>,
) -> Response
where
    C: ClubRepository + 'static,
    R: QuizResultRepository + 'static,
{
    let payload = json!({ "questions": service.questions() });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn submit_handler<C, R>(
    State(service): State<Arc<QuizService<C, R>>>,
    CallerId(user_id): CallerId,
    axum::Json(submission): axum::Json<QuizSubmission>,
) -> Response
where
    C: ClubRepository + 'static,
    R: QuizResultRepository + 'static,
{
    match service.submit(&user_id, submission) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn result_handler<C, R>(
    State(service): State<Arc<QuizService<C, R>>>,
    CallerId(user_id): CallerId,
) -> Response
where
    C: ClubRepository + 'static,
    R: QuizResultRepository + 'static,
{
    match service.latest(&user_id) {
        // No result yet serializes as `null`.
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
