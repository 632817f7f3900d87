use serde::{Deserialize, Serialize};

use crate::pagination::ListPage;

/// Which kind of title a resource identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the TMDB v3 API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

/// A listed title. Passed through to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: u64,
    pub media_type: MediaKind,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub original_language: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
}

/// Paged result envelope as returned by TMDB.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPagedResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<TmdbMediaResult>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// Movie and TV results share one shape; movies fill `title`, shows fill `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMediaResult {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub original_title: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub original_language: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.is_empty())
}

impl TmdbMediaResult {
    pub fn into_media(self, kind: MediaKind) -> Media {
        let title = self
            .title
            .or(self.name)
            .unwrap_or_default();
        Media {
            id: self.id,
            media_type: kind,
            title,
            original_title: non_empty(self.original_title.or(self.original_name)),
            overview: non_empty(self.overview),
            poster_path: non_empty(self.poster_path),
            backdrop_path: non_empty(self.backdrop_path),
            release_date: non_empty(self.release_date.or(self.first_air_date)),
            original_language: non_empty(self.original_language),
            genre_ids: self.genre_ids,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
        }
    }
}

impl TmdbPagedResponse {
    /// Converts to a `ListPage`, keeping provider order. `requested_page` is
    /// used when TMDB omits the page number.
    pub fn into_list_page(self, kind: MediaKind, requested_page: u32) -> ListPage<Media> {
        let page = if self.page == 0 { requested_page } else { self.page };
        let items: Vec<Media> = self
            .results
            .into_iter()
            .map(|r| r.into_media(kind))
            .collect();
        let total_pages = if items.is_empty() {
            self.total_pages
        } else {
            self.total_pages.max(page)
        };
        ListPage::new(items, page, total_pages, self.total_results)
    }
}
