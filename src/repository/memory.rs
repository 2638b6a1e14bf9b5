//! Read-only record store holding designs in process.
//!
//! Evaluates the same [`DesignFilter`](super::filter::DesignFilter)
//! predicates and [`DesignSort`](super::filter::DesignSort) ordering as the
//! Diesel store, which makes it a drop-in fake for service tests and for
//! embedding small static catalogs.

use std::collections::HashSet;

use crate::domain::design::Design;
use crate::domain::types::{DesignId, TagId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DesignListQuery, DesignReader};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    designs: Vec<Design>,
}

impl InMemoryRepository {
    pub fn new(designs: Vec<Design>) -> Self {
        Self { designs }
    }

    pub fn with_design(mut self, design: Design) -> Self {
        self.designs.push(design);
        self
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

impl DesignReader for InMemoryRepository {
    fn get_design_by_id(&self, id: DesignId) -> RepositoryResult<Option<Design>> {
        Ok(self.designs.iter().find(|design| design.id == id).cloned())
    }

    fn list_designs(&self, query: DesignListQuery) -> RepositoryResult<(usize, Vec<Design>)> {
        let mut matches = self
            .designs
            .iter()
            .filter(|design| query.filters.iter().all(|filter| filter.matches(design)))
            .cloned()
            .collect::<Vec<Design>>();

        matches.sort_by(|a, b| query.sort.compare(a, b));
        let total = matches.len();

        let items = match query.pagination {
            Some(pagination) => matches
                .into_iter()
                .skip(pagination.offset())
                .take(pagination.per_page)
                .collect(),
            None => matches,
        };

        Ok((total, items))
    }

    fn design_ids_for_tags(&self, tag_ids: &[TagId]) -> RepositoryResult<HashSet<DesignId>> {
        Ok(self
            .designs
            .iter()
            .filter(|design| design.has_any_tag(tag_ids))
            .map(|design| design.id)
            .collect())
    }
}
