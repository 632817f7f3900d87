use axum::{
    extract::Request,
    http::{header, uri::Uri, StatusCode},
    middleware::Next,
    response::Response,
    Router,
};
use tracing::info;

/// Wraps `router` so path normalization happens before route matching.
pub fn with_path_normalization(router: Router) -> Router {
    Router::new()
        .fallback_service(router)
        .layer(axum::middleware::from_fn(normalize_path))
}

/// Collapses duplicate slashes and drops a trailing slash.
pub async fn normalize_path(mut req: Request, next: Next) -> Response {
    let uri = req.uri();
    let path = uri.path();

    let normalized = normalized_path(path);

    if normalized != path {
        let mut parts = uri.clone().into_parts();
        let new_path_and_query = if let Some(query) = uri.query() {
            format!("{}?{}", normalized, query)
        } else {
            normalized
        };

        if let Ok(new_uri) = new_path_and_query.parse::<Uri>() {
            parts.path_and_query = new_uri.into_parts().path_and_query;
            if let Ok(new_uri) = Uri::from_parts(parts) {
                *req.uri_mut() = new_uri;
            }
        }
    }

    next.run(req).await
}

fn normalized_path(path: &str) -> String {
    let mut normalized = path.to_string();

    while normalized.contains("//") {
        normalized = normalized.replace("//", "/");
    }

    if normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    info!(
        method = %method,
        url = %uri,
        status = status,
        length = content_length,
        "HTTP request"
    );

    response
}

/// Answers `304 Not Modified` when the client already holds the response's ETag.
pub async fn etag_validation(req: Request, next: Next) -> Response {
    let if_none_match = req
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;

    let Some(client_etag) = if_none_match else {
        return response;
    };
    if !response.status().is_success() {
        return response;
    }
    let Some(server_etag) = response
        .headers()
        .get(header::ETAG)
        .and_then(|v| v.to_str().ok())
    else {
        return response;
    };
    if !etags_match(&client_etag, server_etag) {
        return response;
    }

    let mut not_modified = Response::new(axum::body::Body::empty());
    *not_modified.status_mut() = StatusCode::NOT_MODIFIED;

    let headers = not_modified.headers_mut();
    for name in [header::ETAG, header::CACHE_CONTROL, header::VARY] {
        if let Some(value) = response.headers().get(&name) {
            headers.insert(name, value.clone());
        }
    }

    not_modified
}

fn etags_match(client_etag: &str, server_etag: &str) -> bool {
    let server_stripped = server_etag.strip_prefix("W/").unwrap_or(server_etag);

    client_etag.split(',').map(str::trim).any(|etag| {
        etag == "*" || etag == server_etag || etag.strip_prefix("W/").unwrap_or(etag) == server_stripped
    })
}
