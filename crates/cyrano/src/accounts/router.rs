use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::{UserId, UserQuery, UserUpdate};
use super::repository::{AnalysisRepository, RepositoryError, UserRepository};
use super::service::{AccountService, AdminError};
use crate::error::error_response;
use crate::identity;

/// Router for sign-in, the caller's own account, and the admin console.
pub fn accounts_router<U, A>(service: Arc<AccountService<U, A>>) -> Router
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    Router::new()
        .route("/api/v1/auth/sign-in", post(sign_in_handler::<U, A>))
        .route("/api/v1/me", get(me_handler::<U, A>))
        .route("/api/v1/admin/users", get(list_users_handler::<U, A>))
        .route(
            "/api/v1/admin/users/:user_id",
            get(user_detail_handler::<U, A>)
                .patch(update_user_handler::<U, A>)
                .delete(delete_user_handler::<U, A>),
        )
        .route("/api/v1/admin/stats", get(stats_handler::<U, A>))
        .with_state(service)
}

fn admin_error_response(error: AdminError) -> Response {
    let status = match &error {
        AdminError::Forbidden => StatusCode::FORBIDDEN,
        AdminError::UserNotFound | AdminError::Repository(RepositoryError::NotFound) => {
            StatusCode::NOT_FOUND
        }
        AdminError::SelfDeletion | AdminError::EmptyUpdate => StatusCode::BAD_REQUEST,
        AdminError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AdminError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, error.to_string())
}

pub(crate) async fn sign_in_handler<U, A>(
    State(service): State<Arc<AccountService<U, A>>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    let profile = match identity::profile(&headers) {
        Ok(profile) => profile,
        Err(error) => return error.into_response(),
    };

    match service.sign_in(profile).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(error) => admin_error_response(error),
    }
}

pub(crate) async fn me_handler<U, A>(
    State(service): State<Arc<AccountService<U, A>>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    let caller = match identity::caller(&headers) {
        Ok(caller) => caller,
        Err(error) => return error.into_response(),
    };

    match service.me(&caller).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(error) => admin_error_response(error),
    }
}

pub(crate) async fn list_users_handler<U, A>(
    State(service): State<Arc<AccountService<U, A>>>,
    headers: HeaderMap,
    Query(query): Query<UserQuery>,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    let caller = match identity::caller(&headers) {
        Ok(caller) => caller,
        Err(error) => return error.into_response(),
    };

    match service.list_users(&caller, &query).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(error) => admin_error_response(error),
    }
}

pub(crate) async fn user_detail_handler<U, A>(
    State(service): State<Arc<AccountService<U, A>>>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    let caller = match identity::caller(&headers) {
        Ok(caller) => caller,
        Err(error) => return error.into_response(),
    };

    match service.user_detail(&caller, &UserId(user_id)).await {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(error) => admin_error_response(error),
    }
}

pub(crate) async fn update_user_handler<U, A>(
    State(service): State<Arc<AccountService<U, A>>>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(update): Json<UserUpdate>,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    let caller = match identity::caller(&headers) {
        Ok(caller) => caller,
        Err(error) => return error.into_response(),
    };

    match service.update_user(&caller, &UserId(user_id), update).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(error) => admin_error_response(error),
    }
}

pub(crate) async fn delete_user_handler<U, A>(
    State(service): State<Arc<AccountService<U, A>>>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    let caller = match identity::caller(&headers) {
        Ok(caller) => caller,
        Err(error) => return error.into_response(),
    };

    match service.delete_user(&caller, &UserId(user_id)).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(error) => admin_error_response(error),
    }
}

pub(crate) async fn stats_handler<U, A>(
    State(service): State<Arc<AccountService<U, A>>>,
    headers: HeaderMap,
) -> Response
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    let caller = match identity::caller(&headers) {
        Ok(caller) => caller,
        Err(error) => return error.into_response(),
    };

    match service.stats(&caller).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => admin_error_response(error),
    }
}
