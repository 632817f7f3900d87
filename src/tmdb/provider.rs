use async_trait::async_trait;

use crate::pagination::ListPage;
use super::types::{Media, MediaKind};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {0} from metadata provider")]
    Status(u16),
}

/// Source of paginated title lists.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Titles similar to `id`. `Ok(None)` when the provider knows no such title.
    async fn similar(
        &self,
        kind: MediaKind,
        id: u64,
        page: u32,
        locale: &str,
    ) -> Result<Option<ListPage<Media>>, ProviderError>;
}
