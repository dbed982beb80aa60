// src/catalog.rs
//! In-memory stand-in for the category table. It answers the same two
//! questions a list endpoint asks the database: how many rows match, and
//! which rows fall on the requested page.

use std::cmp::Ordering;

use chrono::{Duration, Utc};

use crate::filters::ListingParams;
use crate::models::Category;
use crate::pagination::PaginationState;

#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Catalogue served by the binary; ids grow with age.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let names = [
            "Obat Bebas",
            "Obat Bebas Terbatas",
            "Obat Keras",
            "Vitamin & Suplemen",
            "Herbal",
            "Ibu & Anak",
            "Perawatan Kulit",
            "Alat Kesehatan",
            "Nutrisi",
            "Perawatan Mata",
            "Pertolongan Pertama",
            "Obat Batuk & Flu",
        ];

        let categories = names
            .iter()
            .enumerate()
            .map(|(i, name)| Category {
                id: i as i64 + 1,
                name: (*name).to_string(),
                updated_at: now - Duration::hours(i as i64),
            })
            .collect();
        Self::new(categories)
    }

    pub fn find(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn count(&self, params: &ListingParams) -> i64 {
        self.matching(params).count() as i64
    }

    /// Matching rows in the requested order, bounded by the page's offset and
    /// limit.
    pub fn page(&self, params: &ListingParams, pagination: &PaginationState) -> Vec<&Category> {
        let mut rows: Vec<&Category> = self.matching(params).collect();

        let by_name = params.sort_by() == "name";
        let descending = params.order() == "desc";
        rows.sort_by(|a, b| {
            let ord = if by_name {
                a.name.to_lowercase().cmp(&b.name.to_lowercase())
            } else {
                a.updated_at.cmp(&b.updated_at)
            };
            let ord = if descending { ord.reverse() } else { ord };
            match ord {
                Ordering::Equal => a.id.cmp(&b.id),
                other => other,
            }
        });

        let skip = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(pagination.effective_limit()).unwrap_or(usize::MAX);
        rows.into_iter().skip(skip).take(take).collect()
    }

    fn matching<'a>(&'a self, params: &ListingParams) -> impl Iterator<Item = &'a Category> {
        let needle = params.name_filter().map(str::to_lowercase);
        self.categories.iter().filter(move |c| match &needle {
            Some(needle) => c.name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
    }
}
