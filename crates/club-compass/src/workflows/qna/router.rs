use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{QuestionCreate, QuestionId, ReplyCreate};
use super::repository::QuestionRepository;
use super::service::{QnaService, QnaServiceError};
use crate::workflows::identity::{CallerId, CallerProfile};

pub fn qna_router<Q>(service: Arc<QnaService<Q>>) -> Router
where
    Q: QuestionRepository + 'static,
{
    Router::new()
        .route("/api/questions", get(list_handler::<Q>).post(create_handler::<Q>))
        .route(
            "/api/questions/:question_id",
            get(detail_handler::<Q>).delete(delete_handler::<Q>),
        )
        .route("/api/questions/:question_id/replies", post(reply_handler::<Q>))
        .with_state(service)
}

fn error_response(error: QnaServiceError) -> Response {
    let status = match &error {
        QnaServiceError::MissingFields | QnaServiceError::EmptyReply => StatusCode::BAD_REQUEST,
        QnaServiceError::UnknownQuestion => StatusCode::NOT_FOUND,
        QnaServiceError::NotAuthor => StatusCode::FORBIDDEN,
        QnaServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn list_handler<Q>(
    State(service): State<Arc<QnaService<Q>>>,
    CallerId(viewer): CallerId,
) -> Response
where
    Q: QuestionRepository + 'static,
{
    match service.list(&viewer) {
        Ok(questions) => (StatusCode::OK, axum::Json(questions)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<Q>(
    State(service): State<Arc<QnaService<Q>>>,
    CallerProfile(author): CallerProfile,
    axum::Json(request): axum::Json<QuestionCreate>,
) -> Response
where
    Q: QuestionRepository + 'static,
{
    match service.ask(&author, request) {
        Ok(question) => (StatusCode::OK, axum::Json(question)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn detail_handler<Q>(
    State(service): State<Arc<QnaService<Q>>>,
    CallerId(viewer): CallerId,
    Path(question_id): Path<String>,
) -> Response
where
    Q: QuestionRepository + 'static,
{
    match service.get(&viewer, &QuestionId(question_id)) {
        Ok(question) => (StatusCode::OK, axum::Json(question)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn reply_handler<Q>(
    State(service): State<Arc<QnaService<Q>>>,
    CallerProfile(author): CallerProfile,
    Path(question_id): Path<String>,
    axum::Json(request): axum::Json<ReplyCreate>,
) -> Response
where
    Q: QuestionRepository + 'static,
{
    match service.reply(&author, &QuestionId(question_id), request) {
        Ok(question) => (StatusCode::OK, axum::Json(question)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<Q>(
    State(service): State<Arc<QnaService<Q>>>,
    CallerId(caller): CallerId,
    Path(question_id): Path<String>,
) -> Response
where
    Q: QuestionRepository + 'static,
{
    match service.delete(&caller, &QuestionId(question_id)) {
        Ok(()) => {
            let payload = json!({ "message": "Question deleted successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}
