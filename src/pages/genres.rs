use axum::{extract::State, response::Response};
use serde::Serialize;

use crate::config::CacheClass;
use crate::server::AppState;
use super::error::LoadError;
use super::response::cached_json;
use super::urls::discover_anime_path;

pub const ANIME_GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Ecchi",
    "Fantasy",
    "Horror",
    "Mahou Shoujo",
    "Mecha",
    "Music",
    "Mystery",
    "Psychological",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
    "Sports",
    "Supernatural",
    "Thriller",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenreIndex {
    /// Translation key for the page heading.
    pub title_key: &'static str,
    pub genres: Vec<GenreLink>,
}

pub fn anime_genre_index() -> GenreIndex {
    GenreIndex {
        title_key: "anime-genres",
        genres: ANIME_GENRES
            .iter()
            .map(|name| GenreLink {
                name: name.to_string(),
                href: discover_anime_path(name),
            })
            .collect(),
    }
}

pub async fn get_anime_genres(State(state): State<AppState>) -> Result<Response, LoadError> {
    cached_json(
        &anime_genre_index(),
        state.config.cache.directive(CacheClass::List),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anime_genre_index() {
        let index = anime_genre_index();
        assert_eq!(index.title_key, "anime-genres");
        assert_eq!(index.genres.len(), ANIME_GENRES.len());
        assert_eq!(index.genres[0].name, "Action");
        assert_eq!(index.genres[0].href, "/discover/anime?genres=Action");

        let slice = index.genres.iter().find(|g| g.name == "Slice of Life").unwrap();
        assert_eq!(slice.href, "/discover/anime?genres=Slice%20of%20Life");
    }

    #[test]
    fn test_genre_index_json_keys() {
        let json = serde_json::to_value(anime_genre_index()).unwrap();
        assert_eq!(json["titleKey"], "anime-genres");
        assert!(json.get("title_key").is_none());
        assert_eq!(json["genres"][1]["name"], "Adventure");
        assert_eq!(json["genres"][1]["href"], "/discover/anime?genres=Adventure");
    }
}
