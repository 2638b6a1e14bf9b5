use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AreaTypeId, CategoryId, DesignId, DesignTitle, Price, ShortDescription, TagId,
    TypeConstraintError,
};

/// Publication state of a design.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl Display for DesignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignStatus::Draft => write!(f, "draft"),
            DesignStatus::Published => write!(f, "published"),
            DesignStatus::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for DesignStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(DesignStatus::Draft),
            "published" => Ok(DesignStatus::Published),
            "archived" => Ok(DesignStatus::Archived),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown design status `{other}`"
            ))),
        }
    }
}

/// A catalog design as read from the record store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: DesignId,
    pub title: String,
    pub short_description: String,
    pub sku: String,
    pub status: DesignStatus,
    pub category_id: Option<CategoryId>,
    pub area_type_id: Option<AreaTypeId>,
    pub price: f64,
    pub style: Option<String>,
    pub level: Option<String>,
    pub is_featured: bool,
    /// Tags attached through the `design_tags` relation, ascending.
    pub tag_ids: Vec<TagId>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Design {
    /// Returns `true` when the design carries any of the given tags.
    pub fn has_any_tag(&self, tag_ids: &[TagId]) -> bool {
        self.tag_ids.iter().any(|tag_id| tag_ids.contains(tag_id))
    }
}

/// Payload required to insert a new design.
#[derive(Clone, Debug)]
pub struct NewDesign {
    pub title: DesignTitle,
    pub short_description: ShortDescription,
    pub sku: String,
    pub status: DesignStatus,
    pub category_id: Option<CategoryId>,
    pub area_type_id: Option<AreaTypeId>,
    pub price: Price,
    pub style: Option<String>,
    pub level: Option<String>,
    pub is_featured: bool,
    pub created_at: NaiveDateTime,
}

impl NewDesign {
    /// Builds a draft design stamped with the current time.
    #[must_use]
    pub fn new(title: DesignTitle, price: Price) -> Self {
        Self {
            title,
            short_description: ShortDescription::default(),
            sku: String::new(),
            status: DesignStatus::Draft,
            category_id: None,
            area_type_id: None,
            price,
            style: None,
            level: None,
            is_featured: false,
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn short_description(mut self, description: impl Into<String>) -> Self {
        self.short_description = ShortDescription::new(description);
        self
    }

    pub fn sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into().trim().to_string();
        self
    }

    pub fn status(mut self, status: DesignStatus) -> Self {
        self.status = status;
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn area_type(mut self, area_type_id: AreaTypeId) -> Self {
        self.area_type_id = Some(area_type_id);
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = normalize_optional(style.into());
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = normalize_optional(level.into());
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = created_at;
        self
    }
}

fn normalize_optional(value: String) -> Option<String> {
    Some(value.trim().to_string()).filter(|s| !s.is_empty())
}
