use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::config::SupabaseConfig;
use crate::util::cookie_value;
use super::session::{AuthError, Session, SessionVerifier};

const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// Validates access tokens against the Supabase auth `user` endpoint.
pub struct SupabaseVerifier {
    http: reqwest::Client,
    user_url: String,
    anon_key: String,
}

#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: Uuid,
    email: Option<String>,
    last_sign_in_at: Option<DateTime<Utc>>,
}

impl From<SupabaseUser> for Session {
    fn from(user: SupabaseUser) -> Self {
        Session {
            user_id: user.id,
            email: user.email.filter(|e| !e.is_empty()),
            last_sign_in_at: user.last_sign_in_at,
        }
    }
}

impl SupabaseVerifier {
    pub fn new(config: &SupabaseConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            user_url: format!("{}/auth/v1/user", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        })
    }
}

#[async_trait]
impl SessionVerifier for SupabaseVerifier {
    async fn verify(&self, headers: &HeaderMap) -> Result<Option<Session>, AuthError> {
        let Some(token) = extract_token(headers) else {
            return Ok(None);
        };

        let response = self
            .http
            .get(&self.user_url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&token)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Access token rejected, continuing anonymously");
                Ok(None)
            }
            status if !status.is_success() => Err(AuthError::Status(status.as_u16())),
            _ => {
                let user: SupabaseUser = response.json().await?;
                Ok(Some(user.into()))
            }
        }
    }
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(token) = parse_bearer(auth_str) {
                return Some(token);
            }
        }
    }

    cookie_value(headers, ACCESS_TOKEN_COOKIE).filter(|t| !t.is_empty())
}

fn parse_bearer(auth_str: &str) -> Option<String> {
    let (scheme, token) = auth_str.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}
