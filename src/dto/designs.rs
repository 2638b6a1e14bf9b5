//! Request contract of the design listing service.

use validator::Validate;

use crate::domain::design::DesignStatus;
use crate::domain::types::{AreaTypeId, CategoryId, TagId};
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::filter::{DesignFilter, SortDirection};

/// Filters, sort and page window accepted by
/// [`crate::services::designs::list_designs`].
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct DesignListRequest {
    #[validate(range(min = 1))]
    pub page: usize,
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,
    pub status: Option<DesignStatus>,
    pub category_id: Option<CategoryId>,
    pub area_type_id: Option<AreaTypeId>,
    /// Designs carrying any of these tags; empty means no tag constraint.
    pub tag_ids: Vec<TagId>,
    pub featured_only: bool,
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub style: Option<String>,
    pub level: Option<String>,
    /// Raw column name; unsupported names fall back to `createdAt desc`.
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl Default for DesignListRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_ITEMS_PER_PAGE,
            status: None,
            category_id: None,
            area_type_id: None,
            tag_ids: Vec::new(),
            featured_only: false,
            search: None,
            min_price: None,
            max_price: None,
            style: None,
            level: None,
            sort_by: None,
            sort_direction: None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl DesignListRequest {
    /// Typed predicates for every active filter except tags, which need a
    /// join lookup first.
    pub fn filters(&self) -> Vec<DesignFilter> {
        let mut filters = Vec::new();

        if let Some(status) = self.status {
            filters.push(DesignFilter::Status(status));
        }
        if let Some(category_id) = self.category_id {
            filters.push(DesignFilter::Category(category_id));
        }
        if let Some(area_type_id) = self.area_type_id {
            filters.push(DesignFilter::AreaType(area_type_id));
        }
        if self.featured_only {
            filters.push(DesignFilter::FeaturedOnly);
        }
        if let Some(term) = non_blank(self.search.as_deref()) {
            filters.push(DesignFilter::Search(term));
        }
        if let Some(min) = self.min_price {
            filters.push(DesignFilter::MinPrice(min));
        }
        if let Some(max) = self.max_price {
            filters.push(DesignFilter::MaxPrice(max));
        }
        if let Some(style) = non_blank(self.style.as_deref()) {
            filters.push(DesignFilter::Style(style));
        }
        if let Some(level) = non_blank(self.level.as_deref()) {
            filters.push(DesignFilter::Level(level));
        }

        filters
    }
}
