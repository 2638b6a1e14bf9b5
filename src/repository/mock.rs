//! Mock repository implementations for isolating services in tests.

use std::collections::HashSet;

use mockall::mock;

use crate::domain::design::{Design, NewDesign};
use crate::domain::taxonomy::{AreaType, Category, Tag};
use crate::domain::types::{DesignId, TagId, TaxonomyName};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DesignListQuery, DesignReader, DesignWriter, TaxonomyReader, TaxonomyWriter,
};

mock! {
    pub Repository {}

    impl DesignReader for Repository {
        fn get_design_by_id(&self, id: DesignId) -> RepositoryResult<Option<Design>>;
        fn list_designs(&self, query: DesignListQuery) -> RepositoryResult<(usize, Vec<Design>)>;
        fn design_ids_for_tags(&self, tag_ids: &[TagId]) -> RepositoryResult<HashSet<DesignId>>;
    }

    impl DesignWriter for Repository {
        fn create_design(&self, new_design: &NewDesign) -> RepositoryResult<Design>;
        fn assign_tags_to_design(
            &self,
            design_id: DesignId,
            tag_ids: &[TagId],
        ) -> RepositoryResult<usize>;
    }

    impl TaxonomyReader for Repository {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
        fn list_area_types(&self) -> RepositoryResult<Vec<AreaType>>;
        fn list_tags(&self) -> RepositoryResult<Vec<Tag>>;
    }

    impl TaxonomyWriter for Repository {
        fn upsert_category(&self, name: &TaxonomyName) -> RepositoryResult<Category>;
        fn upsert_area_type(&self, name: &TaxonomyName) -> RepositoryResult<AreaType>;
        fn upsert_tag(&self, name: &TaxonomyName) -> RepositoryResult<Tag>;
    }
}
