use crate::domain::taxonomy::{AreaType, Category, Tag};
use crate::repository::TaxonomyReader;
use crate::services::{ServiceError, ServiceResult};

/// Lists all categories ordered by name.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: TaxonomyReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

/// Lists all area types ordered by name.
pub fn list_area_types<R>(repo: &R) -> ServiceResult<Vec<AreaType>>
where
    R: TaxonomyReader + ?Sized,
{
    repo.list_area_types().map_err(ServiceError::from)
}

/// Lists all tags ordered by name.
pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<Tag>>
where
    R: TaxonomyReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}
