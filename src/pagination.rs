// src/pagination.rs
//! Offset/limit pagination shared by every list endpoint.
//!
//! Query parameters arrive untyped, so nothing here rejects input: a missing or
//! non-positive page size falls back to [`DEFAULT_PAGE_LIMIT`] and a
//! non-positive page maps to the first row.

use std::marker::PhantomData;

use serde::ser::{Serialize, SerializeStruct, Serializer};

pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Page size actually used for a query. Always at least 1.
pub fn effective_limit(requested_limit: i64) -> i64 {
    if requested_limit >= 1 {
        requested_limit
    } else {
        DEFAULT_PAGE_LIMIT
    }
}

/// Zero-based row offset of `requested_page`. Always at least 0.
pub fn offset(requested_page: i64, requested_limit: i64) -> i64 {
    if requested_page < 1 {
        return 0;
    }
    (requested_page - 1).saturating_mul(effective_limit(requested_limit))
}

pub fn total_pages(total_items: i64, requested_limit: i64) -> i64 {
    if total_items <= 0 {
        return 0;
    }
    let limit = effective_limit(requested_limit);
    total_items / limit + i64::from(total_items % limit != 0)
}

/// Pulls a requested page into `1..=total_pages`. An empty result set still
/// reports page 1.
pub fn clamp_current_page(requested_page: i64, total_pages: i64) -> i64 {
    if requested_page <= 0 {
        1
    } else {
        requested_page.min(total_pages.max(1))
    }
}

/// Per-request pagination state, built once the matching rows are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: i64,
    limit: i64,
    total_items: i64,
    total_pages: i64,
}

impl PaginationState {
    pub fn new(current_page: i64, limit: i64, total_items: i64) -> Self {
        let total_items = total_items.max(0);
        Self {
            current_page,
            limit,
            total_items,
            total_pages: total_pages(total_items, limit),
        }
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    /// The page size as requested, possibly "unset" (<= 0).
    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn effective_limit(&self) -> i64 {
        effective_limit(self.limit)
    }

    pub fn offset(&self) -> i64 {
        offset(self.current_page, self.limit)
    }

    /// Copy of this state with the current page pulled into range.
    pub fn clamped(self) -> Self {
        Self {
            current_page: clamp_current_page(self.current_page, self.total_pages),
            ..self
        }
    }

    pub fn to_summary<K: TotalField>(&self) -> PaginationSummary<K> {
        PaginationSummary::from(self)
    }
}

/// Wire naming of one domain's list response.
///
/// Domains report the same total-count concept under their own key
/// (`total_user`, `total_order`, ...) and their rows under their own list key.
pub trait TotalField {
    const TOTAL_KEY: &'static str;
    const LIST_KEY: &'static str;
}

macro_rules! total_field {
    ($(#[$meta:meta])* $name:ident, $total:literal, $list:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl TotalField for $name {
            const TOTAL_KEY: &'static str = $total;
            const LIST_KEY: &'static str = $list;
        }
    };
}

total_field!(
    /// Generic lists (categories, partners, pharmacies).
    Items,
    "total_item",
    "list_item"
);
total_field!(Users, "total_user", "user_list");
total_field!(Pharmacists, "total_pharmacist", "pharmacist_list");
total_field!(Orders, "total_order", "orders");
total_field!(Products, "total_product", "products");

/// Client-facing projection of a [`PaginationState`]. The page size is not
/// part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSummary<K = Items> {
    pub current_page: i64,
    pub total_page: i64,
    pub total_item: i64,
    key: PhantomData<K>,
}

impl<K> From<&PaginationState> for PaginationSummary<K> {
    fn from(state: &PaginationState) -> Self {
        Self {
            current_page: state.current_page,
            total_page: state.total_pages,
            total_item: state.total_items,
            key: PhantomData,
        }
    }
}

impl<K: TotalField> Serialize for PaginationSummary<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut summary = serializer.serialize_struct("PaginationSummary", 3)?;
        summary.serialize_field("current_page", &self.current_page)?;
        summary.serialize_field("total_page", &self.total_page)?;
        summary.serialize_field(K::TOTAL_KEY, &self.total_item)?;
        summary.end()
    }
}

/// One page of rows together with its pagination summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedList<T, K = Items> {
    pub pagination: PaginationSummary<K>,
    pub items: Vec<T>,
}

impl<T, K: TotalField> PaginatedList<T, K> {
    pub fn new(state: &PaginationState, items: Vec<T>) -> Self {
        Self {
            pagination: state.to_summary(),
            items,
        }
    }
}

impl<T: Serialize, K: TotalField> Serialize for PaginatedList<T, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut list = serializer.serialize_struct("PaginatedList", 2)?;
        list.serialize_field("pagination", &self.pagination)?;
        list.serialize_field(K::LIST_KEY, &self.items)?;
        list.end()
    }
}
