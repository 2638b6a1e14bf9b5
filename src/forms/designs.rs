//! Query-string parameters of `GET /api/designs`.

use serde::Deserialize;

use crate::domain::design::DesignStatus;
use crate::domain::types::{AreaTypeId, CategoryId, TagId};
use crate::dto::designs::DesignListRequest;
use crate::forms::FormError;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::filter::SortDirection;

/// Raw listing parameters as they arrive in the URL.
///
/// `tagIds` may be repeated and each occurrence may hold a comma-separated
/// list. `searchText` is accepted as an alias of `search`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignListParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub status: Option<String>,
    pub category_id: Option<i32>,
    pub area_type_id: Option<i32>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    pub featured_only: Option<bool>,
    #[serde(alias = "searchText")]
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub style: Option<String>,
    pub level: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
}

impl DesignListParams {
    /// Parses a raw query string such as `page=2&tagIds=1,3`.
    pub fn from_query(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query)
            .map_err(|err| FormError::MalformedQuery(err.to_string()))
    }
}

fn parse_tag_ids(raw: &[String]) -> Result<Vec<TagId>, FormError> {
    let mut tag_ids = raw
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<i32>()
                .ok()
                .and_then(|id| TagId::new(id).ok())
                .ok_or_else(|| FormError::InvalidTagId(value.to_string()))
        })
        .collect::<Result<Vec<TagId>, FormError>>()?;
    tag_ids.sort_unstable();
    tag_ids.dedup();
    Ok(tag_ids)
}

fn parse_price(value: Option<f64>) -> Result<Option<f64>, FormError> {
    match value {
        Some(price) if !price.is_finite() => Err(FormError::InvalidPrice),
        other => Ok(other),
    }
}

fn parse_sort_direction(value: Option<&str>) -> Result<Option<SortDirection>, FormError> {
    let Some(value) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match value.to_lowercase().as_str() {
        "asc" => Ok(Some(SortDirection::Asc)),
        "desc" => Ok(Some(SortDirection::Desc)),
        _ => Err(FormError::InvalidSortDirection),
    }
}

impl TryFrom<DesignListParams> for DesignListRequest {
    type Error = FormError;

    fn try_from(params: DesignListParams) -> Result<Self, Self::Error> {
        let status = params
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<DesignStatus>().map_err(|_| FormError::InvalidStatus))
            .transpose()?;

        let category_id = params
            .category_id
            .map(|id| CategoryId::new(id).map_err(|_| FormError::InvalidCategoryId))
            .transpose()?;

        let area_type_id = params
            .area_type_id
            .map(|id| AreaTypeId::new(id).map_err(|_| FormError::InvalidAreaTypeId))
            .transpose()?;

        Ok(Self {
            page: params.page.unwrap_or(1),
            page_size: params.page_size.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
            status,
            category_id,
            area_type_id,
            tag_ids: parse_tag_ids(&params.tag_ids)?,
            featured_only: params.featured_only.unwrap_or(false),
            search: params.search,
            min_price: parse_price(params.min_price)?,
            max_price: parse_price(params.max_price)?,
            style: params.style,
            level: params.level,
            sort_by: params.sort_by,
            sort_direction: parse_sort_direction(params.sort_direction.as_deref())?,
        })
    }
}
