//! Pagination extractor.
//!
//! Extracts `page`, `limit`, and `search` query parameters. Parsing is
//! lenient: absent, non-numeric, zero, and negative values all fall back to
//! the defaults instead of failing the request.

use axum::extract::{FromRequestParts, Query};
use axum::http::{StatusCode, request::Parts};
use serde::Deserialize;

use seqgate_store::PageQuery;

/// Default page number when absent or unusable.
pub const DEFAULT_PAGE: u64 = 1;
/// Default page size when absent or unusable.
pub const DEFAULT_LIMIT: u64 = 10;
/// Hard cap on the page size.
pub const MAX_LIMIT: u64 = 100;

/// Axum extractor for pagination and search parameters.
///
/// # Example
///
/// ```rust,ignore
/// use seqgate_rest::extractors::PageParams;
///
/// async fn list_handler(page: PageParams) {
///     let query = page.into_query();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PageParams {
    query: PageQuery,
}

/// Raw query parameters. Everything is a string so that garbage input can
/// default instead of rejecting the request.
#[derive(Debug, Deserialize)]
struct RawPageParams {
    page: Option<String>,
    limit: Option<String>,
    search: Option<String>,
}

fn parse_positive(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
        .map(|v| v as u64)
        .unwrap_or(default)
}

impl PageParams {
    /// 1-based page number.
    pub fn page(&self) -> u64 {
        self.query.page()
    }

    /// Rows per page.
    pub fn limit(&self) -> u64 {
        self.query.limit()
    }

    /// The search string, if any.
    pub fn search(&self) -> Option<&str> {
        self.query.search()
    }

    /// Converts into the store-level page query.
    pub fn into_query(self) -> PageQuery {
        self.query
    }
}

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawPageParams>::from_request_parts(parts, state)
            .await
            .map_err(|_| (StatusCode::BAD_REQUEST, "invalid query parameters"))?;

        let page = parse_positive(raw.page.as_deref(), DEFAULT_PAGE);
        let limit = parse_positive(raw.limit.as_deref(), DEFAULT_LIMIT).min(MAX_LIMIT);

        let mut query = PageQuery::new(page, limit);
        if let Some(search) = raw.search.filter(|s| !s.is_empty()) {
            query = query.with_search(search);
        }

        Ok(PageParams { query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_accepts_valid_input() {
        assert_eq!(parse_positive(Some("3"), 1), 3);
        assert_eq!(parse_positive(Some(" 25 "), 10), 25);
    }

    #[test]
    fn test_parse_positive_defaults_on_garbage() {
        assert_eq!(parse_positive(None, 10), 10);
        assert_eq!(parse_positive(Some("abc"), 10), 10);
        assert_eq!(parse_positive(Some(""), 10), 10);
        assert_eq!(parse_positive(Some("0"), 10), 10);
        assert_eq!(parse_positive(Some("-4"), 10), 10);
        assert_eq!(parse_positive(Some("2.5"), 10), 10);
    }
}
