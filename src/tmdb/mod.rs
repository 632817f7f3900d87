pub mod client;
pub mod provider;
pub mod types;

pub use client::TmdbClient;
pub use provider::{MetadataProvider, ProviderError};
pub use types::{Media, MediaKind};
