//! Domain aggregates exposed by the catalog service layer.

pub mod design;
pub mod taxonomy;
pub mod types;
