use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use timetable_core::{
    collaborators::TokenValidator,
    errors::{ScheduleError, ScheduleResult},
    models::auth::{invalid_token, Caller, TokenClaims},
};
use tracing::{debug, error};

/// Validates tokens against the account service's `Validate` endpoint.
#[derive(Clone)]
pub struct HttpTokenValidator {
    client: Client,
    validate_url: String,
}

impl HttpTokenValidator {
    pub fn new(client: Client, validate_url: impl Into<String>) -> Self {
        Self {
            client,
            validate_url: validate_url.into(),
        }
    }
}

#[async_trait]
impl TokenValidator for HttpTokenValidator {
    async fn validate(&self, token: &str) -> ScheduleResult<Caller> {
        let response = self
            .client
            .get(&self.validate_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                error!("Account service request failed: {}", e);
                ScheduleError::Upstream(format!("Account service unavailable: {}", e))
            })?;

        if response.status() != StatusCode::OK {
            debug!("Account service rejected token with {}", response.status());
            return Err(invalid_token());
        }

        let claims: TokenClaims = response.json().await.map_err(|e| {
            debug!("Unreadable token validation response: {}", e);
            invalid_token()
        })?;

        claims.into_caller(token)
    }
}
