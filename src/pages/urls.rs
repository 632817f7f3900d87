use crate::tmdb::MediaKind;

/// Query key carrying the 1-based page number.
pub const PAGE_PARAM: &str = "page";

pub const MOVIE_SIMILAR_ROUTE: &str = "/movies/:movie_id/similar";
pub const TV_SIMILAR_ROUTE: &str = "/tv-shows/:tv_id/similar";
pub const ANIME_GENRES_ROUTE: &str = "/genres/anime";

pub fn route_prefix(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "/movies",
        MediaKind::Tv => "/tv-shows",
    }
}

/// `/<prefix>/<id>/similar`, with `?page=<n>` when a page is given.
/// The page is not validated here.
pub fn similar_path(kind: MediaKind, resource_id: &str, page: Option<i64>) -> String {
    let base = format!(
        "{}/{}/similar",
        route_prefix(kind),
        urlencoding::encode(resource_id)
    );
    match page {
        Some(p) => format!("{}?{}={}", base, PAGE_PARAM, p),
        None => base,
    }
}

pub fn discover_anime_path(genre: &str) -> String {
    format!("/discover/anime?genres={}", urlencoding::encode(genre))
}
