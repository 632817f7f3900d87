//! In-process collaborators for unit tests.

use async_trait::async_trait;
use axum::http::HeaderMap;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::auth::{AuthError, Session, SessionVerifier};
use crate::config::Config;
use crate::i18n::LocaleResolver;
use crate::pages::PageLoader;
use crate::pagination::ListPage;
use crate::server::AppState;
use crate::tmdb::{Media, MediaKind, MetadataProvider, ProviderError};
use crate::util::QueryParams;

type EventLog = Arc<Mutex<Vec<String>>>;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarCall {
    pub kind: MediaKind,
    pub id: u64,
    pub page: u32,
    pub locale: String,
}

pub fn sample_media(id: u64, title: &str) -> Media {
    Media {
        id,
        media_type: MediaKind::Movie,
        title: title.to_string(),
        original_title: None,
        overview: Some(format!("About {}", title)),
        poster_path: Some(format!("/{}.jpg", id)),
        backdrop_path: None,
        release_date: Some("1999-10-15".to_string()),
        original_language: Some("en".to_string()),
        genre_ids: vec![18],
        vote_average: 7.5,
        vote_count: 1000,
        popularity: 12.0,
    }
}

pub fn sample_page(page: u32, total_pages: u32, count: u64) -> ListPage<Media> {
    let items = (0..count)
        .map(|i| sample_media(1000 + i, &format!("Title {}", i)))
        .collect();
    ListPage::new(items, page, total_pages, count * total_pages as u64)
}

struct FakeSessions {
    events: EventLog,
    fail: bool,
}

#[async_trait]
impl SessionVerifier for FakeSessions {
    async fn verify(&self, _headers: &HeaderMap) -> Result<Option<Session>, AuthError> {
        self.events.lock().unwrap().push("session".to_string());
        if self.fail {
            return Err(AuthError::Status(503));
        }
        Ok(None)
    }
}

struct FakeLocale {
    events: EventLog,
}

#[async_trait]
impl LocaleResolver for FakeLocale {
    async fn resolve(&self, _headers: &HeaderMap, query: &QueryParams) -> String {
        self.events.lock().unwrap().push("locale".to_string());
        query.get("lng").unwrap_or("en").to_string()
    }
}

struct FakeProvider {
    events: EventLog,
    pages: HashMap<u64, ListPage<Media>>,
    calls: Arc<Mutex<Vec<SimilarCall>>>,
    fail: bool,
}

#[async_trait]
impl MetadataProvider for FakeProvider {
    async fn similar(
        &self,
        kind: MediaKind,
        id: u64,
        page: u32,
        locale: &str,
    ) -> Result<Option<ListPage<Media>>, ProviderError> {
        self.events.lock().unwrap().push("provider".to_string());
        self.calls.lock().unwrap().push(SimilarCall {
            kind,
            id,
            page,
            locale: locale.to_string(),
        });
        if self.fail {
            return Err(ProviderError::Status(500));
        }
        Ok(self.pages.get(&id).cloned())
    }
}

/// Builder for a loader wired to fakes, keeping handles to what they saw.
#[derive(Default)]
pub struct Fakes {
    events: EventLog,
    calls: Arc<Mutex<Vec<SimilarCall>>>,
    pages: HashMap<u64, ListPage<Media>>,
    fail_auth: bool,
    fail_provider: bool,
}

impl Fakes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, id: u64, page: ListPage<Media>) -> Self {
        self.pages.insert(id, page);
        self
    }

    pub fn failing_auth(mut self) -> Self {
        self.fail_auth = true;
        self
    }

    pub fn failing_provider(mut self) -> Self {
        self.fail_provider = true;
        self
    }

    pub fn loader(&self) -> PageLoader {
        PageLoader::new(
            Arc::new(FakeSessions {
                events: self.events.clone(),
                fail: self.fail_auth,
            }),
            Arc::new(FakeLocale {
                events: self.events.clone(),
            }),
            Arc::new(FakeProvider {
                events: self.events.clone(),
                pages: self.pages.clone(),
                calls: self.calls.clone(),
                fail: self.fail_provider,
            }),
        )
    }

    pub fn state(&self) -> AppState {
        AppState::new(Config::default(), self.loader())
    }

    pub fn provider_calls(&self) -> Vec<SimilarCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}
