use std::collections::HashMap;

use crate::domain::types::{AreaTypeId, CategoryId, TagId, TaxonomyName};
use crate::forms::import::ImportedDesign;
use crate::repository::{DesignWriter, TaxonomyWriter};
use crate::services::{ServiceError, ServiceResult};

/// Memoizes name → id upserts for the duration of one import.
#[derive(Default)]
struct TaxonomyCache {
    categories: HashMap<TaxonomyName, CategoryId>,
    area_types: HashMap<TaxonomyName, AreaTypeId>,
    tags: HashMap<TaxonomyName, TagId>,
}

impl TaxonomyCache {
    fn category<R>(&mut self, repo: &R, name: &TaxonomyName) -> ServiceResult<CategoryId>
    where
        R: TaxonomyWriter + ?Sized,
    {
        if let Some(id) = self.categories.get(name) {
            return Ok(*id);
        }
        let category = repo.upsert_category(name).map_err(ServiceError::from)?;
        self.categories.insert(name.clone(), category.id);
        Ok(category.id)
    }

    fn area_type<R>(&mut self, repo: &R, name: &TaxonomyName) -> ServiceResult<AreaTypeId>
    where
        R: TaxonomyWriter + ?Sized,
    {
        if let Some(id) = self.area_types.get(name) {
            return Ok(*id);
        }
        let area_type = repo.upsert_area_type(name).map_err(ServiceError::from)?;
        self.area_types.insert(name.clone(), area_type.id);
        Ok(area_type.id)
    }

    fn tag<R>(&mut self, repo: &R, name: &TaxonomyName) -> ServiceResult<TagId>
    where
        R: TaxonomyWriter + ?Sized,
    {
        if let Some(id) = self.tags.get(name) {
            return Ok(*id);
        }
        let tag = repo.upsert_tag(name).map_err(ServiceError::from)?;
        self.tags.insert(name.clone(), tag.id);
        Ok(tag.id)
    }
}

/// Persists parsed import rows, creating missing categories, area types and
/// tags by name. Returns the number of designs created.
pub fn import_designs<R>(repo: &R, rows: Vec<ImportedDesign>) -> ServiceResult<usize>
where
    R: DesignWriter + TaxonomyWriter + ?Sized,
{
    let mut cache = TaxonomyCache::default();
    let mut created = 0;

    for row in rows {
        let mut new_design = row.design;
        if let Some(name) = &row.category {
            new_design = new_design.category(cache.category(repo, name)?);
        }
        if let Some(name) = &row.area_type {
            new_design = new_design.area_type(cache.area_type(repo, name)?);
        }

        let tag_ids = row
            .tags
            .iter()
            .map(|name| cache.tag(repo, name))
            .collect::<ServiceResult<Vec<TagId>>>()?;

        let design = repo.create_design(&new_design).map_err(|err| {
            log::error!("Failed to import design `{}`: {err}", new_design.title);
            ServiceError::from(err)
        })?;

        if !tag_ids.is_empty() {
            repo.assign_tags_to_design(design.id, &tag_ids)
                .map_err(ServiceError::from)?;
        }

        log::info!("Imported design {} `{}`", design.id, design.title);
        created += 1;
    }

    Ok(created)
}
