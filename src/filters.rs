// src/filters.rs
use serde::{Deserialize, Deserializer};

use crate::pagination::PaginationState;

const DEFAULT_SORT_BY: &str = "updated_at";
const DEFAULT_SORT_ORDER: &str = "asc";

/// Query parameters shared by list endpoints:
/// `?page=&limit=&filter=&sortBy=&order=`.
///
/// A `page` or `limit` that is not a number is treated as not given.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default, deserialize_with = "lenient_number")]
    page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    limit: Option<i64>,

    #[serde(default)]
    filter: Option<String>,

    #[serde(default, rename = "sortBy")]
    sort_by: Option<String>,
    #[serde(default)]
    order: Option<String>,
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

impl ListingParams {
    /// Requested page, `0` when unset.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0)
    }

    /// Requested page size, `0` when unset.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(0)
    }

    pub fn name_filter(&self) -> Option<&str> {
        self.filter
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn sort_by(&self) -> &str {
        self.sort_by.as_deref().unwrap_or(DEFAULT_SORT_BY)
    }

    pub fn order(&self) -> &str {
        self.order.as_deref().map_or(DEFAULT_SORT_ORDER, |o| {
            if o.eq_ignore_ascii_case("desc") {
                "desc"
            } else {
                "asc"
            }
        })
    }

    /// Pagination for a result set of `total_items` rows. An unset page becomes
    /// page 1; a page past the end is kept and yields no rows. Endpoints that
    /// snap to the last page call [`PaginationState::clamped`] on the result.
    pub fn pagination(&self, total_items: i64) -> PaginationState {
        PaginationState::new(self.page().max(1), self.limit(), total_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &str) -> ListingParams {
        let uri: Uri = uri.parse().unwrap();
        Query::<ListingParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn reads_all_parameters() {
        let params = parse("/api/categories?page=2&limit=5&filter=vit&sortBy=name&order=ASC");

        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), 5);
        assert_eq!(params.name_filter(), Some("vit"));
        assert_eq!(params.sort_by(), "name");
        assert_eq!(params.order(), "asc");
    }

    #[test]
    fn defaults_when_absent() {
        let params = parse("/api/categories");

        assert_eq!(params.page(), 0);
        assert_eq!(params.limit(), 0);
        assert_eq!(params.name_filter(), None);
        assert_eq!(params.sort_by(), "updated_at");
        assert_eq!(params.order(), "asc");
    }

    #[test]
    fn malformed_numbers_are_unset() {
        let params = parse("/api/categories?page=abc&limit=&order=sideways&filter=%20%20");

        assert_eq!(params.page(), 0);
        assert_eq!(params.limit(), 0);
        assert_eq!(params.order(), "asc");
        assert_eq!(params.name_filter(), None);
    }

    #[test]
    fn only_desc_sorts_descending() {
        assert_eq!(parse("/api/categories?order=DESC").order(), "desc");
        assert_eq!(parse("/api/categories?order=asc").order(), "asc");
        assert_eq!(parse("/api/categories?order=").order(), "asc");
    }

    #[test]
    fn unset_page_becomes_first() {
        let state = parse("/api/categories?page=-4&limit=0").pagination(25);

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.effective_limit(), 10);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn page_past_the_end_is_kept() {
        let state = parse("/api/categories?page=9&limit=0").pagination(25);

        assert_eq!(state.current_page(), 9);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.offset(), 80);
        assert_eq!(state.clamped().current_page(), 3);
    }
}
