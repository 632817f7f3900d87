use axum::http::{header, HeaderMap};

/// Look up a cookie by name across all `Cookie` headers.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(cookies) = value.to_str() else {
            continue;
        };
        for pair in cookies.split(';') {
            if let Some((key, val)) = pair.trim().split_once('=') {
                if key.trim() == name {
                    let val = val.trim().trim_matches('"');
                    let decoded = urlencoding::decode(val)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| val.to_string());
                    return Some(decoded);
                }
            }
        }
    }
    None
}
