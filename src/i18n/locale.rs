use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use regex::Regex;
use std::sync::OnceLock;

use crate::config::I18nConfig;
use crate::util::{cookie_value, QueryParams};

const LANGUAGE_PARAM: &str = "lng";
const LANGUAGE_COOKIE: &str = "i18next";

/// Picks the language tag to request localized metadata in.
#[async_trait]
pub trait LocaleResolver: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap, query: &QueryParams) -> String;
}

/// Detection order: `lng` query parameter, `i18next` cookie,
/// `Accept-Language` header, then the fallback language.
pub struct I18nLocaleResolver {
    supported: Vec<String>,
    fallback: String,
}

fn language_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").expect("static regex")
    })
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(&['-', '_'][..]).next().unwrap_or(tag)
}

impl I18nLocaleResolver {
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            supported: config.supported.clone(),
            fallback: config.fallback.clone(),
        }
    }

    /// Returns the supported language matching `candidate`, exact tag first,
    /// then by primary subtag.
    pub fn match_supported(&self, candidate: &str) -> Option<&str> {
        let candidate = candidate.trim();
        if !language_tag_re().is_match(candidate) {
            return None;
        }
        let normalized = candidate.replace('_', "-");

        if let Some(s) = self
            .supported
            .iter()
            .find(|s| s.eq_ignore_ascii_case(&normalized))
        {
            return Some(s.as_str());
        }

        let primary = primary_subtag(&normalized);
        self.supported
            .iter()
            .find(|s| primary_subtag(s).eq_ignore_ascii_case(primary))
            .map(|s| s.as_str())
    }

    fn from_accept_language(&self, headers: &HeaderMap) -> Option<&str> {
        let value = headers.get(header::ACCEPT_LANGUAGE)?.to_str().ok()?;
        parse_accept_language(value)
            .into_iter()
            .find_map(|tag| self.match_supported(tag))
    }
}

#[async_trait]
impl LocaleResolver for I18nLocaleResolver {
    async fn resolve(&self, headers: &HeaderMap, query: &QueryParams) -> String {
        let from_query = query.get(LANGUAGE_PARAM).and_then(|l| self.match_supported(l));
        let from_cookie = || {
            cookie_value(headers, LANGUAGE_COOKIE)
                .and_then(|l| self.match_supported(&l).map(|s| s.to_string()))
        };

        if let Some(lang) = from_query {
            return lang.to_string();
        }
        if let Some(lang) = from_cookie() {
            return lang;
        }
        if let Some(lang) = self.from_accept_language(headers) {
            return lang.to_string();
        }
        self.fallback.clone()
    }
}

/// Language ranges from an `Accept-Language` header, highest quality first.
/// Ranges with `q=0` and the `*` wildcard are dropped.
pub fn parse_accept_language(value: &str) -> Vec<&str> {
    let mut ranges: Vec<(&str, f32)> = value
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (quality > 0.0).then_some((tag, quality))
        })
        .collect();

    // stable: equal weights keep header order
    ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranges.into_iter().map(|(tag, _)| tag).collect()
}
