use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use super::archetypes::{all_profiles, ArchetypeId};
use super::bank::{ARCHETYPE_BANK, MBTI_BANK};
use super::domain::{AnswerSet, Choice, ChoiceError, QuestionId, QuizMode};
use super::repository::QuizResultRepository;
use super::service::{QuizService, QuizServiceError, SessionId};
use super::evaluate_mbti;
use super::session::SessionError;
use super::views::QuestionList;
use crate::accounts::RepositoryError;
use crate::error::error_response;
use crate::identity;

/// Router exposing the quiz banks, sessions, stored results, and reference content.
pub fn quiz_router<R>(service: Arc<QuizService<R>>) -> Router
where
    R: QuizResultRepository + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler))
        .route("/api/v1/quiz/sessions", post(start_handler::<R>))
        .route(
            "/api/v1/quiz/sessions/:session_id",
            delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/answers",
            post(answer_handler::<R>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/save",
            post(save_handler::<R>),
        )
        .route("/api/v1/quiz/result", get(result_handler::<R>))
        .route("/api/v1/quiz/archetypes", get(archetypes_handler))
        .route(
            "/api/v1/quiz/archetypes/:archetype_id",
            get(archetype_handler),
        )
        .route("/api/v1/quiz/mbti", post(mbti_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    pub mode: Option<String>,
    /// `archetype` (default) or `mbti`.
    pub variant: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StartRequest {
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub question_id: u32,
    pub choice: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MbtiRequest {
    #[serde(default)]
    pub mode: Option<String>,
    pub answers: BTreeMap<u32, String>,
}

fn parse_mode(raw: Option<&str>) -> Result<QuizMode, Response> {
    match raw {
        None => Ok(QuizMode::default()),
        Some(value) => value
            .parse()
            .map_err(|message: String| error_response(StatusCode::BAD_REQUEST, message)),
    }
}

fn parse_choice(raw: &str) -> Result<Choice, Response> {
    raw.parse()
        .map_err(|error: ChoiceError| error_response(StatusCode::BAD_REQUEST, error.to_string()))
}

fn service_error_response(error: QuizServiceError) -> Response {
    let status = match &error {
        QuizServiceError::Session(SessionError::UnknownQuestion { .. }) => StatusCode::BAD_REQUEST,
        QuizServiceError::Session(
            SessionError::AlreadyCompleted | SessionError::UnexpectedQuestion { .. },
        ) => StatusCode::CONFLICT,
        QuizServiceError::SessionNotFound | QuizServiceError::AccountNotFound => {
            StatusCode::NOT_FOUND
        }
        QuizServiceError::NotCompleted => StatusCode::CONFLICT,
        QuizServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        QuizServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

pub(crate) async fn questions_handler(Query(query): Query<QuestionsQuery>) -> Response {
    let mode = match parse_mode(query.mode.as_deref()) {
        Ok(mode) => mode,
        Err(response) => return response,
    };

    let list = match query.variant.as_deref().map(str::trim) {
        None | Some("archetype") => QuestionList::new(mode, &ARCHETYPE_BANK.sequence(mode)),
        Some("mbti") => QuestionList::new(mode, &MBTI_BANK.sequence(mode)),
        Some(other) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("unknown quiz variant '{other}'"),
            )
        }
    };

    (StatusCode::OK, Json(list)).into_response()
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    headers: HeaderMap,
    request: Option<Json<StartRequest>>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let owner = match identity::caller(&headers) {
        Ok(owner) => owner,
        Err(error) => return error.into_response(),
    };
    let requested = request.and_then(|Json(request)| request.mode);
    let mode = match parse_mode(requested.as_deref()) {
        Ok(mode) => mode,
        Err(response) => return response,
    };

    match service.start(&owner, mode).await {
        Ok(started) => (StatusCode::CREATED, Json(started)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let owner = match identity::caller(&headers) {
        Ok(owner) => owner,
        Err(error) => return error.into_response(),
    };
    let choice = match parse_choice(&request.choice) {
        Ok(choice) => choice,
        Err(response) => return response,
    };

    let session_id = SessionId(session_id);
    match service
        .submit_answer(&owner, &session_id, QuestionId(request.question_id), choice)
        .await
    {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn save_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let owner = match identity::caller(&headers) {
        Ok(owner) => owner,
        Err(error) => return error.into_response(),
    };

    match service.retry_save(&owner, &SessionId(session_id)).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    headers: HeaderMap,
    Path(session_id): Path<String>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let owner = match identity::caller(&headers) {
        Ok(owner) => owner,
        Err(error) => return error.into_response(),
    };

    if service.discard(&owner, &SessionId(session_id)) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        service_error_response(QuizServiceError::SessionNotFound)
    }
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    headers: HeaderMap,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let owner = match identity::caller(&headers) {
        Ok(owner) => owner,
        Err(error) => return error.into_response(),
    };

    match service.result(&owner).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn archetypes_handler() -> Response {
    (StatusCode::OK, Json(all_profiles())).into_response()
}

pub(crate) async fn archetype_handler(Path(archetype_id): Path<String>) -> Response {
    match archetype_id.parse::<ArchetypeId>() {
        Ok(id) => (StatusCode::OK, Json(id.profile())).into_response(),
        Err(error) => error_response(StatusCode::NOT_FOUND, error.to_string()),
    }
}

pub(crate) async fn mbti_handler(Json(request): Json<MbtiRequest>) -> Response {
    let mode = match parse_mode(request.mode.as_deref()) {
        Ok(mode) => mode,
        Err(response) => return response,
    };

    let mut answers = AnswerSet::new();
    for (id, raw) in &request.answers {
        let choice = match parse_choice(raw) {
            Ok(choice) => choice,
            Err(response) => return response,
        };
        if MBTI_BANK.get(QuestionId(*id)).is_none() {
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("question {id} is not part of this quiz"),
            );
        }
        answers.record(QuestionId(*id), choice);
    }

    (StatusCode::OK, Json(evaluate_mbti(mode, &answers))).into_response()
}
