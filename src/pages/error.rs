use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::auth::AuthError;
use crate::tmdb::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Unusable resource identifier, or the provider has no such resource.
    #[error("Not Found")]
    NotFound,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl IntoResponse for LoadError {
    fn into_response(self) -> Response {
        let status = match &self {
            LoadError::NotFound => StatusCode::NOT_FOUND,
            LoadError::Auth(e) => {
                error!(error = %e, "Session check failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            LoadError::Provider(e) => {
                warn!(error = %e, "Metadata provider request failed");
                StatusCode::BAD_GATEWAY
            }
            LoadError::Encode(e) => {
                error!(error = %e, "Response encoding failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status.into_response()
    }
}
