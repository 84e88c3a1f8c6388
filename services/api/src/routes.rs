use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use cyrano::accounts::{accounts_router, AccountService, AnalysisRepository, UserRepository};
use cyrano::analysis::{analysis_router, AnalysisProvider, AnalysisService};
use cyrano::quiz::{quiz_router, QuizResultRepository, QuizService};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Assemble every module router plus the operational endpoints.
pub(crate) fn with_service_routes<R, U, A, P>(
    quiz: Arc<QuizService<R>>,
    accounts: Arc<AccountService<U, A>>,
    analysis: Arc<AnalysisService<U, A, P>>,
) -> Router
where
    R: QuizResultRepository + 'static,
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
    P: AnalysisProvider + 'static,
{
    quiz_router(quiz)
        .merge(accounts_router(accounts))
        .merge(analysis_router(analysis))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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
