//! # Authentication Module
//!
//! Every timetable endpoint requires a bearer token. The token is not
//! inspected locally; it is handed to the account service, which answers with
//! the user id and role it belongs to.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use timetable_core::{errors::ScheduleError, models::auth::Caller};
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

/// Extractor for the validated caller of a request
///
/// Rejects with 401 when the `Authorization` header is missing, is not a
/// bearer token, or the account service does not accept the token.
///
/// # Example
///
/// ```ignore
/// async fn handler(Authenticated(caller): Authenticated) -> String {
///     format!("Hello user {}", caller.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Authenticated(pub Caller);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let caller = state.tokens.validate(token).await?;
        debug!("Authenticated user {} as {:?}", caller.user_id, caller.role);

        Ok(Authenticated(caller))
    }
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ScheduleError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| ScheduleError::Authentication("Missing authorization header".to_string()))?
        .to_str()
        .map_err(|_| invalid_header())?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(invalid_header()),
    }
}

fn invalid_header() -> ScheduleError {
    ScheduleError::Authentication("Invalid authorization header format".to_string())
}
