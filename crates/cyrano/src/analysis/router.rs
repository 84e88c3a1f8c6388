use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use super::client::{AnalysisProvider, ProviderError};
use super::service::{AnalysisError, AnalysisService};
use crate::accounts::{AnalysisRepository, UserRepository};
use crate::error::error_response;
use crate::identity;

pub fn analysis_router<U, A, P>(service: Arc<AnalysisService<U, A, P>>) -> Router
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
    P: AnalysisProvider + 'static,
{
    Router::new()
        .route("/api/v1/analyze", post(analyze_handler::<U, A, P>))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyzeRequest {
    #[serde(default)]
    pub conversation: String,
}

fn analysis_error_response(error: AnalysisError) -> Response {
    let status = match &error {
        AnalysisError::UserNotFound => StatusCode::NOT_FOUND,
        AnalysisError::OutOfCredits => StatusCode::FORBIDDEN,
        AnalysisError::ConversationTooShort => StatusCode::BAD_REQUEST,
        AnalysisError::Provider(ProviderError::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
        AnalysisError::Provider(_) => StatusCode::BAD_GATEWAY,
        AnalysisError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

pub(crate) async fn analyze_handler<U, A, P>(
    State(service): State<Arc<AnalysisService<U, A, P>>>,
    headers: HeaderMap,
    Json(request): Json<AnalyzeRequest>,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
    P: AnalysisProvider + 'static,
{
    let caller = match identity::caller(&headers) {
        Ok(caller) => caller,
        Err(error) => return error.into_response(),
    };

    match service.analyze(&caller, &request.conversation).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => analysis_error_response(error),
    }
}
