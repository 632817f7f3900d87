use serde::{Deserialize, Serialize};

use crate::util::QueryParams;

/// Smallest page the metadata provider accepts.
pub const MIN_PAGE: u32 = 1;
/// Largest page the metadata provider accepts.
pub const MAX_PAGE: u32 = 1000;

/// One page of a provider list, items in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>, page: u32, total_pages: u32, total_results: u64) -> Self {
        Self {
            items,
            page,
            total_pages,
            total_results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `1 <= page <= total_pages` must hold for any page that has items.
    /// An empty page is always consistent.
    pub fn is_consistent(&self) -> bool {
        self.items.is_empty() || (MIN_PAGE <= self.page && self.page <= self.total_pages)
    }
}

/// Validated parameters of a single list load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub resource_id: u64,
    pub page: u32,
    pub locale: String,
}

/// Parses a path-embedded resource identifier. Missing, non-numeric and
/// zero identifiers are rejected.
pub fn parse_resource_id(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|id| *id > 0)
}

/// Effective page for a request. Anything absent, unparsable or outside
/// `[MIN_PAGE, MAX_PAGE]` falls back to the first page rather than failing.
pub fn normalize_page(raw: Option<i64>) -> u32 {
    match raw {
        Some(p) if (MIN_PAGE as i64..=MAX_PAGE as i64).contains(&p) => p as u32,
        _ => MIN_PAGE,
    }
}

pub fn page_from_query(params: &QueryParams) -> u32 {
    normalize_page(params.get_parsed::<i64>("page"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_id() {
        assert_eq!(parse_resource_id(Some("550")), Some(550));
        assert_eq!(parse_resource_id(Some("abc")), None);
        assert_eq!(parse_resource_id(Some("0")), None);
        assert_eq!(parse_resource_id(Some("-3")), None);
        assert_eq!(parse_resource_id(Some("")), None);
        assert_eq!(parse_resource_id(None), None);
    }

    #[test]
    fn test_normalize_page() {
        assert_eq!(normalize_page(None), 1);
        assert_eq!(normalize_page(Some(-5)), 1);
        assert_eq!(normalize_page(Some(0)), 1);
        assert_eq!(normalize_page(Some(1)), 1);
        assert_eq!(normalize_page(Some(3)), 3);
        assert_eq!(normalize_page(Some(1000)), 1000);
        assert_eq!(normalize_page(Some(1001)), 1);
        assert_eq!(normalize_page(Some(5000)), 1);
        assert_eq!(normalize_page(Some(i64::MIN)), 1);
    }

    #[test]
    fn test_page_from_query() {
        let q = |v: &str| -> QueryParams { [("page", v)].into_iter().collect() };
        assert_eq!(page_from_query(&QueryParams::default()), 1);
        assert_eq!(page_from_query(&q("2")), 2);
        assert_eq!(page_from_query(&q("1500")), 1);
        assert_eq!(page_from_query(&q("two")), 1);
        assert_eq!(page_from_query(&q("99999999999999999999999")), 1);
    }

    #[test]
    fn test_consistency() {
        assert!(ListPage::<u32>::new(vec![], 2, 0, 0).is_consistent());
        assert!(ListPage::new(vec![1, 2], 2, 5, 40).is_consistent());
        assert!(!ListPage::new(vec![1], 6, 5, 40).is_consistent());
        assert!(!ListPage::new(vec![1], 0, 5, 40).is_consistent());
    }

    #[test]
    fn test_serialized_shape() {
        let page = ListPage::new(vec![7], 1, 3, 42);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalResults"], 42);
        assert_eq!(json["items"][0], 7);
    }
}
