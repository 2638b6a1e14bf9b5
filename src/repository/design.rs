//! Repository implementation for catalog designs.

use std::collections::{BTreeSet, HashMap, HashSet};

use diesel::sqlite::{Sqlite, SqliteConnection};
use diesel::{Connection, prelude::*};

use crate::db::unicode_lower;
use crate::domain::design::{Design, NewDesign};
use crate::domain::types::{DesignId, TagId};
use crate::models::design::{
    Design as DbDesign, NewDesign as DbNewDesign, NewDesignTag as DbNewDesignTag,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::filter::{DesignFilter, DesignSort, SortDirection, SortField};
use crate::repository::{DesignListQuery, DesignReader, DesignWriter, DieselRepository};
use crate::schema::{design_tags, designs};

/// Wraps a search term in `%` and escapes LIKE wildcards so it matches literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn filtered_designs(filters: &[DesignFilter]) -> designs::BoxedQuery<'static, Sqlite> {
    let mut items = designs::table.into_boxed::<Sqlite>();

    for filter in filters {
        items = match filter {
            DesignFilter::Status(status) => items.filter(designs::status.eq(status.to_string())),
            DesignFilter::Category(id) => items.filter(designs::category_id.eq(id.get())),
            DesignFilter::AreaType(id) => items.filter(designs::area_type_id.eq(id.get())),
            DesignFilter::FeaturedOnly => items.filter(designs::is_featured.eq(true)),
            DesignFilter::Search(term) => {
                // Both sides are lowered with Unicode rules.
                let pattern = like_pattern(&term.to_lowercase());
                items.filter(
                    unicode_lower(designs::title)
                        .like(pattern.clone())
                        .escape('\\')
                        .or(unicode_lower(designs::short_description)
                            .like(pattern.clone())
                            .escape('\\'))
                        .or(unicode_lower(designs::sku).like(pattern).escape('\\')),
                )
            }
            DesignFilter::MinPrice(min) => items.filter(designs::price.ge(*min)),
            DesignFilter::MaxPrice(max) => items.filter(designs::price.le(*max)),
            DesignFilter::Style(style) => items.filter(designs::style.eq(style.clone())),
            DesignFilter::Level(level) => items.filter(designs::level.eq(level.clone())),
            DesignFilter::IdIn(ids) => {
                let ids = ids.iter().map(|id| id.get()).collect::<Vec<i32>>();
                items.filter(designs::id.eq_any(ids))
            }
        };
    }

    items
}

fn ordered(
    items: designs::BoxedQuery<'static, Sqlite>,
    sort: DesignSort,
) -> designs::BoxedQuery<'static, Sqlite> {
    let items = match (sort.field, sort.direction) {
        (SortField::CreatedAt, SortDirection::Asc) => items.order(designs::created_at.asc()),
        (SortField::CreatedAt, SortDirection::Desc) => items.order(designs::created_at.desc()),
        (SortField::UpdatedAt, SortDirection::Asc) => items.order(designs::updated_at.asc()),
        (SortField::UpdatedAt, SortDirection::Desc) => items.order(designs::updated_at.desc()),
        (SortField::Title, SortDirection::Asc) => items.order(designs::title.asc()),
        (SortField::Title, SortDirection::Desc) => items.order(designs::title.desc()),
        (SortField::Price, SortDirection::Asc) => items.order(designs::price.asc()),
        (SortField::Price, SortDirection::Desc) => items.order(designs::price.desc()),
        (SortField::Sku, SortDirection::Asc) => items.order(designs::sku.asc()),
        (SortField::Sku, SortDirection::Desc) => items.order(designs::sku.desc()),
    };

    items.then_order_by(designs::id.asc())
}

/// Loads the tag links for the given rows and converts them into domain designs.
fn attach_tags(
    conn: &mut SqliteConnection,
    db_designs: Vec<DbDesign>,
) -> RepositoryResult<Vec<Design>> {
    if db_designs.is_empty() {
        return Ok(Vec::new());
    }

    let design_ids = db_designs.iter().map(|d| d.id).collect::<Vec<i32>>();

    let links = design_tags::table
        .filter(design_tags::design_id.eq_any(design_ids))
        .order((design_tags::design_id.asc(), design_tags::tag_id.asc()))
        .select((design_tags::design_id, design_tags::tag_id))
        .load::<(i32, i32)>(conn)?;

    let mut tags_by_design: HashMap<i32, Vec<TagId>> = HashMap::new();
    for (design_id, tag_id) in links {
        let tag_id = TagId::try_from(tag_id).map_err(RepositoryError::from)?;
        tags_by_design.entry(design_id).or_default().push(tag_id);
    }

    db_designs
        .into_iter()
        .map(|db_design| {
            let tag_ids = tags_by_design.remove(&db_design.id).unwrap_or_default();
            db_design
                .into_domain(tag_ids)
                .map_err(RepositoryError::from)
        })
        .collect()
}

impl DesignReader for DieselRepository {
    fn get_design_by_id(&self, id: DesignId) -> RepositoryResult<Option<Design>> {
        let mut conn = self.conn()?;

        let db_design = designs::table
            .find(id.get())
            .first::<DbDesign>(&mut conn)
            .optional()?;

        match db_design {
            Some(db_design) => Ok(attach_tags(&mut conn, vec![db_design])?.pop()),
            None => Ok(None),
        }
    }

    fn list_designs(&self, query: DesignListQuery) -> RepositoryResult<(usize, Vec<Design>)> {
        let mut conn = self.conn()?;

        // Total before pagination.
        let total = filtered_designs(&query.filters)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = ordered(filtered_designs(&query.filters), query.sort);
        if let Some(pagination) = &query.pagination {
            let offset = pagination.offset();
            if offset >= total {
                return Ok((total, Vec::new()));
            }
            let offset = i64::try_from(offset).map_err(|_| {
                RepositoryError::ValidationError(format!("page offset {offset} is out of range"))
            })?;
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            items = items.offset(offset).limit(limit);
        }

        let db_designs = items.load::<DbDesign>(&mut conn)?;
        let designs = attach_tags(&mut conn, db_designs)?;

        Ok((total, designs))
    }

    fn design_ids_for_tags(&self, tag_ids: &[TagId]) -> RepositoryResult<HashSet<DesignId>> {
        if tag_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let mut conn = self.conn()?;
        let tag_ids = tag_ids.iter().map(|id| id.get()).collect::<Vec<i32>>();

        design_tags::table
            .filter(design_tags::tag_id.eq_any(tag_ids))
            .select(design_tags::design_id)
            .distinct()
            .load::<i32>(&mut conn)?
            .into_iter()
            .map(|id| DesignId::try_from(id).map_err(RepositoryError::from))
            .collect()
    }
}

impl DesignWriter for DieselRepository {
    fn create_design(&self, new_design: &NewDesign) -> RepositoryResult<Design> {
        let mut conn = self.conn()?;

        let db_new_design: DbNewDesign = new_design.into();

        let db_design = diesel::insert_into(designs::table)
            .values(&db_new_design)
            .get_result::<DbDesign>(&mut conn)?;

        db_design
            .into_domain(Vec::new())
            .map_err(RepositoryError::from)
    }

    fn assign_tags_to_design(
        &self,
        design_id: DesignId,
        tag_ids: &[TagId],
    ) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let links = tag_ids
            .iter()
            .map(|tag_id| tag_id.get())
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .map(|tag_id| DbNewDesignTag {
                design_id: design_id.get(),
                tag_id,
            })
            .collect::<Vec<_>>();

        conn.transaction::<usize, diesel::result::Error, _>(move |conn| {
            diesel::delete(design_tags::table.filter(design_tags::design_id.eq(design_id.get())))
                .execute(conn)?;

            if links.is_empty() {
                return Ok(0);
            }

            diesel::insert_into(design_tags::table)
                .values(&links)
                .execute(conn)
        })
        .map_err(RepositoryError::from)
    }
}
