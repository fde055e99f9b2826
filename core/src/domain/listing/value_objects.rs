use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw filter-query parameters of a list endpoint, kept as text until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// One-based page number, default 1.
    pub page: Option<String>,
    /// Rows per page, default 10.
    pub page_size: Option<String>,
    /// Comma-separated field names, paired with `search_for`.
    pub search_by: Option<String>,
    /// Comma-separated values, positionally matched to `search_by`.
    pub search_for: Option<String>,
    /// Comma-separated field names, paired with `order_by`.
    pub sort_by: Option<String>,
    /// Comma-separated `ASC`/`DESC`, positionally matched to `sort_by`.
    pub order_by: Option<String>,
}

impl FilterQuery {
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let get = |key: &str| query_map.get(key).cloned();

        Self {
            page: get("page"),
            page_size: get("page_size"),
            search_by: get("search_by"),
            search_for: get("search_for"),
            sort_by: get("sort_by"),
            order_by: get("order_by"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_PAGE_SIZE: u64 = 10;
    /// Largest page, page size or row offset the store can bind.
    pub const MAX_COUNT: u64 = i64::MAX as u64;

    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Builds a pagination whose counts and row offset all fit under [`Self::MAX_COUNT`].
    pub fn checked(page: u64, page_size: u64) -> Option<Self> {
        let pagination = Self::new(page, page_size);
        let offset = page.checked_sub(1)?.checked_mul(page_size)?;

        (page_size > 0 && page_size <= Self::MAX_COUNT && offset <= Self::MAX_COUNT)
            .then_some(pagination)
    }

    /// Zero-based row offset, saturating at [`Self::MAX_COUNT`].
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(Self::MAX_COUNT)
    }

    pub fn limit(&self) -> u64 {
        self.page_size.min(Self::MAX_COUNT)
    }
}

/// List envelope. Counts that would be zero are reported as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: Option<u64>,
    pub total_records: Option<u64>,
    pub total_records_per_page: Option<u64>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total_records: u64) -> Self {
        let non_zero = |count: u64| (count > 0).then_some(count);
        let per_page = items.len() as u64;

        Self {
            items,
            page: pagination.page,
            page_size: pagination.page_size,
            total_pages: non_zero(total_records.div_ceil(pagination.page_size.max(1))),
            total_records: non_zero(total_records),
            total_records_per_page: non_zero(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let pagination = Pagination::new(2, 5);
        assert_eq!(pagination.offset(), 5);
        assert_eq!(pagination.limit(), 5);
        assert_eq!(Pagination::default().offset(), 0);
        assert_eq!(Pagination::default().limit(), 10);
    }

    #[test]
    fn test_checked_rejects_unbindable_offsets() {
        assert_eq!(Pagination::checked(2, 5), Some(Pagination::new(2, 5)));
        assert_eq!(Pagination::checked(u64::MAX, 2), None);
        assert_eq!(Pagination::checked(i64::MAX as u64, 2), None);
        assert_eq!(Pagination::checked(1, u64::MAX), None);
        assert_eq!(Pagination::checked(0, 5), None);
        assert_eq!(
            Pagination::checked(1, Pagination::MAX_COUNT),
            Some(Pagination::new(1, Pagination::MAX_COUNT))
        );
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(Pagination::new(u64::MAX, 2).offset(), Pagination::MAX_COUNT);
    }

    #[test]
    fn test_paginated_counts_middle_page() {
        let page = Paginated::new(vec![0; 5], Pagination::new(2, 5), 12);
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.total_records, Some(12));
        assert_eq!(page.total_records_per_page, Some(5));
    }

    #[test]
    fn test_paginated_counts_last_page() {
        let page = Paginated::new(vec![0; 2], Pagination::new(3, 5), 12);
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.total_records_per_page, Some(2));
    }

    #[test]
    fn test_paginated_nulls_when_empty() {
        let page = Paginated::<u8>::new(Vec::new(), Pagination::default(), 0);
        assert_eq!(page.total_pages, None);
        assert_eq!(page.total_records, None);
        assert_eq!(page.total_records_per_page, None);
    }

    #[test]
    fn test_paginated_past_the_end() {
        let page = Paginated::<u8>::new(Vec::new(), Pagination::new(9, 5), 12);
        assert_eq!(page.total_records, Some(12));
        assert_eq!(page.total_records_per_page, None);
    }

    #[test]
    fn test_from_query_map() {
        let mut map = HashMap::new();
        map.insert("search_by".to_string(), "name".to_string());
        map.insert("page".to_string(), "2".to_string());
        map.insert("unrelated".to_string(), "x".to_string());
        let query = FilterQuery::from_query_map(&map);
        assert_eq!(query.search_by.as_deref(), Some("name"));
        assert_eq!(query.page.as_deref(), Some("2"));
        assert_eq!(query.search_for, None);
    }
}
