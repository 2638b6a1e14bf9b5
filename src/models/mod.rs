//! Database models shared across the catalog repository.

pub mod config;
pub mod design;
pub mod taxonomy;
