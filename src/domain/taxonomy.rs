//! Lookup entities designs are classified by.

use serde::{Deserialize, Serialize};

use crate::domain::types::{AreaTypeId, CategoryId, TagId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AreaType {
    pub id: AreaTypeId,
    pub name: String,
}

/// Reusable label attached to many designs through `design_tags`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}
