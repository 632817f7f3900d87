use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use crate::config::TmdbConfig;
use crate::pagination::ListPage;
use super::provider::{MetadataProvider, ProviderError};
use super::types::{Media, MediaKind, TmdbPagedResponse};

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn similar_url(&self, kind: MediaKind, id: u64) -> String {
        format!("{}/{}/{}/similar", self.base_url, kind.as_str(), id)
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn similar(
        &self,
        kind: MediaKind,
        id: u64,
        page: u32,
        locale: &str,
    ) -> Result<Option<ListPage<Media>>, ProviderError> {
        let url = self.similar_url(kind, id);
        debug!(url = %url, page, locale, "Fetching similar titles");

        let page_str = page.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", locale),
                ("page", page_str.as_str()),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Ok(None),
            status if !status.is_success() => return Err(ProviderError::Status(status.as_u16())),
            _ => {}
        }

        let body: TmdbPagedResponse = response.json().await?;
        Ok(Some(body.into_list_page(kind, page)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode as HttpStatus;
    use axum::response::{IntoResponse, Response};
    use axum::{routing::get, Json, Router};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::testing::spawn_stub;

    type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

    /// 550 has results, 404 is unknown, anything else fails.
    async fn stub_similar(
        State(seen): State<Seen>,
        Path(id): Path<u64>,
        Query(query): Query<HashMap<String, String>>,
    ) -> Response {
        let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        seen.lock().unwrap().push(query);
        match id {
            550 => Json(serde_json::json!({
                "page": page,
                "results": [
                    {"id": 807, "title": "Se7en", "release_date": "1995-09-22"},
                    {"id": 1422, "title": "The Departed"}
                ],
                "total_pages": 4,
                "total_results": 80
            }))
            .into_response(),
            404 => HttpStatus::NOT_FOUND.into_response(),
            _ => HttpStatus::INTERNAL_SERVER_ERROR.into_response(),
        }
    }

    async fn stub_client() -> (TmdbClient, Seen) {
        let seen: Seen = Arc::default();
        let router = Router::new()
            .route("/movie/:id/similar", get(stub_similar))
            .route("/tv/:id/similar", get(stub_similar))
            .with_state(seen.clone());
        let base_url = spawn_stub(router).await;
        let client = TmdbClient::new(&TmdbConfig {
            api_key: "secret".to_string(),
            base_url,
            timeout_secs: 5,
        })
        .unwrap();
        (client, seen)
    }

    #[tokio::test]
    async fn test_similar_sends_key_language_and_page() {
        let (client, seen) = stub_client().await;
        let page = client
            .similar(MediaKind::Movie, 550, 3, "fr")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items.iter().map(|m| m.id).collect::<Vec<_>>(), vec![807, 1422]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].get("api_key").map(String::as_str), Some("secret"));
        assert_eq!(seen[0].get("language").map(String::as_str), Some("fr"));
        assert_eq!(seen[0].get("page").map(String::as_str), Some("3"));
    }

    #[tokio::test]
    async fn test_unknown_title_is_none() {
        let (client, _) = stub_client().await;
        let result = client.similar(MediaKind::Tv, 404, 1, "en").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_server_error_is_status() {
        let (client, _) = stub_client().await;
        let result = client.similar(MediaKind::Movie, 13, 1, "en").await;
        assert!(matches!(result, Err(ProviderError::Status(500))));
    }

    #[test]
    fn test_similar_url() {
        let config = TmdbConfig {
            api_key: "k".to_string(),
            base_url: "https://api.themoviedb.org/3/".to_string(),
            timeout_secs: 5,
        };
        let client = TmdbClient::new(&config).unwrap();
        assert_eq!(
            client.similar_url(MediaKind::Movie, 550),
            "https://api.themoviedb.org/3/movie/550/similar"
        );
        assert_eq!(
            client.similar_url(MediaKind::Tv, 1396),
            "https://api.themoviedb.org/3/tv/1396/similar"
        );
    }
}
