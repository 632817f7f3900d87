use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::pages::urls::{ANIME_GENRES_ROUTE, MOVIE_SIMILAR_ROUTE, TV_SIMILAR_ROUTE};
use crate::pages::PageLoader;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub loader: PageLoader,
}

impl AppState {
    pub fn new(config: Config, loader: PageLoader) -> Self {
        Self {
            config: Arc::new(config),
            loader,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(MOVIE_SIMILAR_ROUTE, get(crate::pages::get_movie_similar))
        .route(TV_SIMILAR_ROUTE, get(crate::pages::get_tv_similar))
        .route(ANIME_GENRES_ROUTE, get(crate::pages::get_anime_genres));

    Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .merge(page_routes)
        .fallback(fallback_handler)
        .layer(axum::middleware::from_fn(crate::middleware::etag_validation))
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nAllow: /\n"
}

async fn fallback_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}
