//! Diesel models for catalog designs and their tag links.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::design::{Design as DomainDesign, NewDesign as DomainNewDesign};
use crate::domain::types::{AreaTypeId, CategoryId, DesignId, TagId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::designs)]
/// Diesel model for [`crate::domain::design::Design`].
pub struct Design {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub sku: String,
    pub status: String,
    pub category_id: Option<i32>,
    pub area_type_id: Option<i32>,
    pub price: f64,
    pub style: Option<String>,
    pub level: Option<String>,
    pub is_featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::designs)]
/// Insertable form of [`Design`].
pub struct NewDesign<'a> {
    pub title: &'a str,
    pub short_description: &'a str,
    pub sku: &'a str,
    pub status: String,
    pub category_id: Option<i32>,
    pub area_type_id: Option<i32>,
    pub price: f64,
    pub style: Option<&'a str>,
    pub level: Option<&'a str>,
    pub is_featured: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::design_tags)]
/// Row of the many-to-many relation between designs and tags.
pub struct NewDesignTag {
    pub design_id: i32,
    pub tag_id: i32,
}

impl Design {
    /// Converts the row into the domain entity, attaching already-loaded tags.
    pub fn into_domain(self, tag_ids: Vec<TagId>) -> Result<DomainDesign, TypeConstraintError> {
        Ok(DomainDesign {
            id: DesignId::try_from(self.id)?,
            title: self.title,
            short_description: self.short_description,
            sku: self.sku,
            status: self.status.parse()?,
            category_id: self.category_id.map(CategoryId::try_from).transpose()?,
            area_type_id: self.area_type_id.map(AreaTypeId::try_from).transpose()?,
            price: self.price,
            style: self.style,
            level: self.level,
            is_featured: self.is_featured,
            tag_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewDesign> for NewDesign<'a> {
    fn from(design: &'a DomainNewDesign) -> Self {
        Self {
            title: design.title.as_str(),
            short_description: design.short_description.as_str(),
            sku: design.sku.as_str(),
            status: design.status.to_string(),
            category_id: design.category_id.map(CategoryId::get),
            area_type_id: design.area_type_id.map(AreaTypeId::get),
            price: design.price.get(),
            style: design.style.as_deref(),
            level: design.level.as_deref(),
            is_featured: design.is_featured,
            created_at: design.created_at,
            updated_at: design.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::design::DesignStatus;
    use crate::domain::types::{DesignTitle, Price};
    use chrono::Utc;

    fn sample_row(status: &str) -> Design {
        let now = Utc::now().naive_utc();
        Design {
            id: 3,
            title: "Marble Wall".to_string(),
            short_description: "Polished".to_string(),
            sku: "MRB-1".to_string(),
            status: status.to_string(),
            category_id: Some(2),
            area_type_id: None,
            price: 99.5,
            style: Some("classic".to_string()),
            level: None,
            is_featured: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_into_domain_attaches_tags() {
        let tags = vec![TagId::new(1).unwrap(), TagId::new(4).unwrap()];
        let design = sample_row("published").into_domain(tags.clone()).unwrap();
        assert_eq!(design.id.get(), 3);
        assert_eq!(design.status, DesignStatus::Published);
        assert_eq!(design.category_id, Some(CategoryId::new(2).unwrap()));
        assert_eq!(design.tag_ids, tags);
    }

    #[test]
    fn row_with_unknown_status_is_rejected() {
        assert!(sample_row("deleted").into_domain(Vec::new()).is_err());
    }

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain =
            DomainNewDesign::new(DesignTitle::new("Oak").unwrap(), Price::new(5.0).unwrap())
                .status(DesignStatus::Archived)
                .style("rustic");
        let insertable = NewDesign::from(&domain);
        assert_eq!(insertable.title, "Oak");
        assert_eq!(insertable.status, "archived");
        assert_eq!(insertable.style, Some("rustic"));
        assert_eq!(insertable.created_at, insertable.updated_at);
    }
}
