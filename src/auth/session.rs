use async_trait::async_trait;
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed-in visitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Session service request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Session service returned status {0}")]
    Status(u16),
}

/// Checks the caller's session. Anonymous callers yield `Ok(None)`;
/// only a failure of the session service itself is an error.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    async fn verify(&self, headers: &HeaderMap) -> Result<Option<Session>, AuthError>;
}

/// Verifier used when no session service is configured.
pub struct AnonymousVerifier;

#[async_trait]
impl SessionVerifier for AnonymousVerifier {
    async fn verify(&self, _headers: &HeaderMap) -> Result<Option<Session>, AuthError> {
        Ok(None)
    }
}
