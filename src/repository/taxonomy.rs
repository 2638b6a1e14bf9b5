//! Repository implementation for categories, area types and tags.

use diesel::{prelude::*, upsert::excluded};

use crate::domain::taxonomy::{AreaType, Category, Tag};
use crate::domain::types::TaxonomyName;
use crate::models::taxonomy::{
    AreaType as DbAreaType, Category as DbCategory, Tag as DbTag,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TaxonomyReader, TaxonomyWriter};

impl TaxonomyReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        categories::table
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(|category| Category::try_from(category).map_err(RepositoryError::from))
            .collect()
    }

    fn list_area_types(&self) -> RepositoryResult<Vec<AreaType>> {
        use crate::schema::area_types;

        let mut conn = self.conn()?;
        area_types::table
            .order(area_types::name.asc())
            .load::<DbAreaType>(&mut conn)?
            .into_iter()
            .map(|area_type| AreaType::try_from(area_type).map_err(RepositoryError::from))
            .collect()
    }

    fn list_tags(&self) -> RepositoryResult<Vec<Tag>> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        tags::table
            .order(tags::name.asc())
            .load::<DbTag>(&mut conn)?
            .into_iter()
            .map(|tag| Tag::try_from(tag).map_err(RepositoryError::from))
            .collect()
    }
}

impl TaxonomyWriter for DieselRepository {
    fn upsert_category(&self, name: &TaxonomyName) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_category = diesel::insert_into(categories::table)
            .values(categories::name.eq(name.as_str()))
            .on_conflict(categories::name)
            .do_update()
            .set(categories::name.eq(excluded(categories::name)))
            .get_result::<DbCategory>(&mut conn)?;

        Category::try_from(db_category).map_err(RepositoryError::from)
    }

    fn upsert_area_type(&self, name: &TaxonomyName) -> RepositoryResult<AreaType> {
        use crate::schema::area_types;

        let mut conn = self.conn()?;
        let db_area_type = diesel::insert_into(area_types::table)
            .values(area_types::name.eq(name.as_str()))
            .on_conflict(area_types::name)
            .do_update()
            .set(area_types::name.eq(excluded(area_types::name)))
            .get_result::<DbAreaType>(&mut conn)?;

        AreaType::try_from(db_area_type).map_err(RepositoryError::from)
    }

    fn upsert_tag(&self, name: &TaxonomyName) -> RepositoryResult<Tag> {
        use crate::schema::tags;

        let mut conn = self.conn()?;
        let db_tag = diesel::insert_into(tags::table)
            .values(tags::name.eq(name.as_str()))
            .on_conflict(tags::name)
            .do_update()
            .set(tags::name.eq(excluded(tags::name)))
            .get_result::<DbTag>(&mut conn)?;

        Tag::try_from(db_tag).map_err(RepositoryError::from)
    }
}
