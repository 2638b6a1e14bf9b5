//! Diesel models for categories, area types and tags.

use diesel::prelude::*;

use crate::domain::taxonomy::{
    AreaType as DomainAreaType, Category as DomainCategory, Tag as DomainTag,
};
use crate::domain::types::{AreaTypeId, CategoryId, TagId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::area_types)]
pub struct AreaType {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::try_from(category.id)?,
            name: category.name,
        })
    }
}

impl TryFrom<AreaType> for DomainAreaType {
    type Error = TypeConstraintError;

    fn try_from(area_type: AreaType) -> Result<Self, Self::Error> {
        Ok(Self {
            id: AreaTypeId::try_from(area_type.id)?,
            name: area_type.name,
        })
    }
}

impl TryFrom<Tag> for DomainTag {
    type Error = TypeConstraintError;

    fn try_from(tag: Tag) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TagId::try_from(tag.id)?,
            name: tag.name,
        })
    }
}
