use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::HeaderMap,
    response::Response,
};
use serde::Serialize;

use crate::config::CacheClass;
use crate::pagination::ListPage;
use crate::server::AppState;
use crate::tmdb::{Media, MediaKind};
use crate::util::QueryParams;
use super::error::LoadError;
use super::response::cached_json;

#[derive(Debug, Serialize)]
pub struct SimilarResponse {
    pub similar: ListPage<Media>,
}

pub async fn get_movie_similar(
    State(state): State<AppState>,
    movie_id: Result<Path<String>, PathRejection>,
    Query(params): Query<QueryParams>,
    headers: HeaderMap,
) -> Result<Response, LoadError> {
    let movie_id = movie_id.ok().map(|Path(id)| id);
    similar_response(&state, MediaKind::Movie, movie_id.as_deref(), &params, &headers).await
}

pub async fn get_tv_similar(
    State(state): State<AppState>,
    tv_id: Result<Path<String>, PathRejection>,
    Query(params): Query<QueryParams>,
    headers: HeaderMap,
) -> Result<Response, LoadError> {
    let tv_id = tv_id.ok().map(|Path(id)| id);
    similar_response(&state, MediaKind::Tv, tv_id.as_deref(), &params, &headers).await
}

async fn similar_response(
    state: &AppState,
    kind: MediaKind,
    raw_id: Option<&str>,
    params: &QueryParams,
    headers: &HeaderMap,
) -> Result<Response, LoadError> {
    let similar = state
        .loader
        .load_similar(kind, raw_id, headers, params)
        .await?;

    cached_json(
        &SimilarResponse { similar },
        state.config.cache.directive(CacheClass::Detail),
    )
}
