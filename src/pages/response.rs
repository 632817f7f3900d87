use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::util::compute_etag;
use super::error::LoadError;

/// Serializes `value` as JSON with the given `Cache-Control` directive and
/// an `ETag` derived from the body.
pub fn cached_json<T: Serialize>(value: &T, cache_control: &str) -> Result<Response, LoadError> {
    let body = serde_json::to_vec(value)?;
    let etag = compute_etag(&body);

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CACHE_CONTROL, cache_control.to_string()),
            (header::ETAG, etag),
        ],
        body,
    )
        .into_response())
}
