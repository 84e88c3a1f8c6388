//! Caller identity forwarded by the upstream identity provider as request headers.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::accounts::{UserId, UserProfile};
use crate::error::error_response;

pub const USER_HEADER: &str = "x-cyrano-user";
pub const EMAIL_HEADER: &str = "x-cyrano-email";
pub const NAME_HEADER: &str = "x-cyrano-name";
pub const IMAGE_HEADER: &str = "x-cyrano-image";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("missing x-cyrano-user header")]
    Missing,
    #[error("identity header {0} is not valid text")]
    Malformed(&'static str),
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        error_response(StatusCode::UNAUTHORIZED, self.to_string())
    }
}

fn optional_header(headers: &HeaderMap, name: &'static str) -> Result<Option<String>, IdentityError> {
    match headers.get(name) {
        None => Ok(None),
        Some(value) => {
            let text = value.to_str().map_err(|_| IdentityError::Malformed(name))?;
            let trimmed = text.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
    }
}

/// The authenticated user id. Blank counts as missing.
pub fn caller(headers: &HeaderMap) -> Result<UserId, IdentityError> {
    optional_header(headers, USER_HEADER)?
        .map(UserId)
        .ok_or(IdentityError::Missing)
}

/// The full set of identity claims, for sign-in.
pub fn profile(headers: &HeaderMap) -> Result<UserProfile, IdentityError> {
    Ok(UserProfile {
        id: caller(headers)?,
        name: optional_header(headers, NAME_HEADER)?,
        email: optional_header(headers, EMAIL_HEADER)?,
        image: optional_header(headers, IMAGE_HEADER)?,
    })
}
