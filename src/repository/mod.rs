use std::collections::HashSet;

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::design::{Design, NewDesign};
use crate::domain::taxonomy::{AreaType, Category, Tag};
use crate::domain::types::{DesignId, TagId, TaxonomyName};
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;
use crate::repository::filter::{DesignFilter, DesignSort};

pub mod design;
pub mod errors;
pub mod filter;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod taxonomy;

/// Diesel-backed record store sharing one SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

/// Filtered, sorted and optionally paginated read of designs.
#[derive(Debug, Clone, Default)]
pub struct DesignListQuery {
    pub filters: Vec<DesignFilter>,
    pub sort: DesignSort,
    pub pagination: Option<Pagination>,
}

impl DesignListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: DesignFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn sort(mut self, sort: DesignSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait DesignReader {
    fn get_design_by_id(&self, id: DesignId) -> RepositoryResult<Option<Design>>;
    /// Returns the total number of matches together with the requested page.
    fn list_designs(&self, query: DesignListQuery) -> RepositoryResult<(usize, Vec<Design>)>;
    /// Ids of designs linked to at least one of `tag_ids`.
    fn design_ids_for_tags(&self, tag_ids: &[TagId]) -> RepositoryResult<HashSet<DesignId>>;
}

pub trait DesignWriter {
    fn create_design(&self, new_design: &NewDesign) -> RepositoryResult<Design>;
    /// Replaces the tag set of a design, returning the number of links written.
    fn assign_tags_to_design(&self, design_id: DesignId, tag_ids: &[TagId])
    -> RepositoryResult<usize>;
}

pub trait TaxonomyReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    fn list_area_types(&self) -> RepositoryResult<Vec<AreaType>>;
    fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
}

/// Name-keyed upserts; an existing entry with the same name is returned as is.
pub trait TaxonomyWriter {
    fn upsert_category(&self, name: &TaxonomyName) -> RepositoryResult<Category>;
    fn upsert_area_type(&self, name: &TaxonomyName) -> RepositoryResult<AreaType>;
    fn upsert_tag(&self, name: &TaxonomyName) -> RepositoryResult<Tag>;
}
