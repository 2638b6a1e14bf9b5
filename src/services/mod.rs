pub mod designs;
pub mod errors;
pub mod import;
pub mod taxonomy;

pub use errors::{ServiceError, ServiceResult};
