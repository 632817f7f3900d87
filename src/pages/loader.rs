use axum::http::HeaderMap;
use std::sync::Arc;
use tracing::debug;

use crate::auth::SessionVerifier;
use crate::i18n::LocaleResolver;
use crate::pagination::{page_from_query, parse_resource_id, ListPage, PageRequest};
use crate::tmdb::{Media, MediaKind, MetadataProvider};
use crate::util::QueryParams;
use super::error::LoadError;

/// Server-side data loader for paginated "similar titles" lists.
#[derive(Clone)]
pub struct PageLoader {
    sessions: Arc<dyn SessionVerifier>,
    locales: Arc<dyn LocaleResolver>,
    provider: Arc<dyn MetadataProvider>,
}

impl PageLoader {
    pub fn new(
        sessions: Arc<dyn SessionVerifier>,
        locales: Arc<dyn LocaleResolver>,
        provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            sessions,
            locales,
            provider,
        }
    }

    /// Loads one page of titles similar to `raw_id`.
    ///
    /// The session check and locale resolution run concurrently and both
    /// finish before the provider is queried. A session service failure is
    /// returned as is. An unusable identifier, or one the provider does not
    /// know, yields [`LoadError::NotFound`]. Out of range pages are served
    /// as page 1.
    pub async fn load_similar(
        &self,
        kind: MediaKind,
        raw_id: Option<&str>,
        headers: &HeaderMap,
        query: &QueryParams,
    ) -> Result<ListPage<Media>, LoadError> {
        let (session, locale) = tokio::join!(
            self.sessions.verify(headers),
            self.locales.resolve(headers, query),
        );
        let session = session?;

        let resource_id = parse_resource_id(raw_id).ok_or(LoadError::NotFound)?;
        let request = PageRequest {
            resource_id,
            page: page_from_query(query),
            locale,
        };

        debug!(
            kind = kind.as_str(),
            id = request.resource_id,
            page = request.page,
            locale = %request.locale,
            user = ?session.as_ref().map(|s| s.user_id),
            "Loading similar titles"
        );

        self.provider
            .similar(kind, request.resource_id, request.page, &request.locale)
            .await?
            .ok_or(LoadError::NotFound)
    }
}
