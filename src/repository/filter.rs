//! Typed predicates and sort specifications for design listings.
//!
//! A [`DesignListQuery`](super::DesignListQuery) carries a list of
//! [`DesignFilter`] values that every record store must AND-combine. The two
//! OR-groups of the listing contract live inside single predicates:
//! [`DesignFilter::Search`] matches any of title, short description or SKU,
//! and [`DesignFilter::IdIn`] holds the union of designs resolved from the
//! requested tags.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::design::{Design, DesignStatus};
use crate::domain::types::{AreaTypeId, CategoryId, DesignId};

#[derive(Debug, Clone, PartialEq)]
pub enum DesignFilter {
    Status(DesignStatus),
    Category(CategoryId),
    AreaType(AreaTypeId),
    /// Only designs flagged as featured.
    FeaturedOnly,
    /// Case-insensitive substring over title, short description and SKU.
    Search(String),
    MinPrice(f64),
    MaxPrice(f64),
    Style(String),
    Level(String),
    /// Restrict to an explicit id set, e.g. the result of a tag join.
    IdIn(Vec<DesignId>),
}

impl DesignFilter {
    /// Evaluates the predicate against an in-process record.
    pub fn matches(&self, design: &Design) -> bool {
        match self {
            DesignFilter::Status(status) => design.status == *status,
            DesignFilter::Category(id) => design.category_id == Some(*id),
            DesignFilter::AreaType(id) => design.area_type_id == Some(*id),
            DesignFilter::FeaturedOnly => design.is_featured,
            DesignFilter::Search(term) => {
                let needle = term.to_lowercase();
                [&design.title, &design.short_description, &design.sku]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            DesignFilter::MinPrice(min) => design.price >= *min,
            DesignFilter::MaxPrice(max) => design.price <= *max,
            DesignFilter::Style(style) => design.style.as_deref() == Some(style.as_str()),
            DesignFilter::Level(level) => design.level.as_deref() == Some(level.as_str()),
            DesignFilter::IdIn(ids) => ids.contains(&design.id),
        }
    }
}

/// Columns a design listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Title,
    Price,
    Sku,
}

impl SortField {
    /// Maps a request parameter onto a sortable column; `None` when unsupported.
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim() {
            "createdAt" | "created_at" => Some(SortField::CreatedAt),
            "updatedAt" | "updated_at" => Some(SortField::UpdatedAt),
            "title" => Some(SortField::Title),
            "price" => Some(SortField::Price),
            "sku" => Some(SortField::Sku),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Ordering applied to a listing; ties always fall back to `id` ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DesignSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl DesignSort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolves raw request values. An unsupported field yields the default
    /// `createdAt desc` regardless of the requested direction.
    pub fn resolve(sort_by: Option<&str>, direction: Option<SortDirection>) -> Self {
        match sort_by.map(SortField::from_param) {
            Some(None) => Self::default(),
            Some(Some(field)) => Self::new(field, direction.unwrap_or_default()),
            None => Self::new(SortField::default(), direction.unwrap_or_default()),
        }
    }

    /// Total order used by in-process stores.
    pub fn compare(&self, a: &Design, b: &Design) -> Ordering {
        let ordering = match self.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Sku => a.sku.cmp(&b.sku),
        };
        let ordering = match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::types::TagId;

    fn design(id: i32, title: &str, description: &str, sku: &str) -> Design {
        let created_at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Design {
            id: DesignId::new(id).unwrap(),
            title: title.to_string(),
            short_description: description.to_string(),
            sku: sku.to_string(),
            status: DesignStatus::Published,
            category_id: None,
            area_type_id: None,
            price: 10.0,
            style: None,
            level: None,
            is_featured: false,
            tag_ids: vec![TagId::new(1).unwrap()],
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let filter = DesignFilter::Search("sofa".to_string());
        assert!(filter.matches(&design(1, "Sofa Set", "", "")));
        assert!(filter.matches(&design(2, "Chair", "A Modern Sofa", "")));
        assert!(filter.matches(&design(3, "Lamp", "", "SOFA-100")));
        assert!(!filter.matches(&design(5, "Table", "Oak", "TBL-1")));
    }

    #[test]
    fn search_is_literal_substring() {
        let filter = DesignFilter::Search("sofa".to_string());
        assert!(!filter.matches(&design(4, "Lamp", "", "SOF-100")));
        let exact = DesignFilter::Search("sof-1".to_string());
        assert!(exact.matches(&design(4, "Lamp", "", "SOF-100")));
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let cyrillic = DesignFilter::Search("диван".to_string());
        assert!(cyrillic.matches(&design(6, "Диван угловой", "", "")));
        let accented = DesignFilter::Search("CAFÉ".to_string());
        assert!(accented.matches(&design(7, "Café Wall", "", "")));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let record = design(1, "A", "", "");
        assert!(DesignFilter::MinPrice(10.0).matches(&record));
        assert!(DesignFilter::MaxPrice(10.0).matches(&record));
        assert!(!DesignFilter::MinPrice(10.01).matches(&record));
    }

    #[test]
    fn unknown_sort_field_falls_back_to_created_desc() {
        let sort = DesignSort::resolve(Some("popularity"), Some(SortDirection::Asc));
        assert_eq!(sort, DesignSort::new(SortField::CreatedAt, SortDirection::Desc));
    }

    #[test]
    fn known_sort_field_keeps_direction() {
        let sort = DesignSort::resolve(Some("price"), Some(SortDirection::Asc));
        assert_eq!(sort, DesignSort::new(SortField::Price, SortDirection::Asc));
        let sort = DesignSort::resolve(None, Some(SortDirection::Asc));
        assert_eq!(sort, DesignSort::new(SortField::CreatedAt, SortDirection::Asc));
    }

    #[test]
    fn ties_break_on_id_ascending_in_both_directions() {
        let a = design(2, "Same", "", "");
        let b = design(1, "Same", "", "");
        let asc = DesignSort::new(SortField::Title, SortDirection::Asc);
        let desc = DesignSort::new(SortField::Title, SortDirection::Desc);
        assert_eq!(asc.compare(&a, &b), Ordering::Greater);
        assert_eq!(desc.compare(&a, &b), Ordering::Greater);
    }
}
