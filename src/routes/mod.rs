//! JSON endpoints mounted under `/api`.

use actix_web::{HttpResponse, web};
use log::error;

use crate::dto::api::ApiError;
use crate::services::ServiceError;

pub mod designs;
pub mod taxonomy;

/// Registers every catalog endpoint on the given scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(designs::list_designs)
        .service(designs::show_design)
        .service(taxonomy::list_categories)
        .service(taxonomy::list_area_types)
        .service(taxonomy::list_tags);
}

/// Maps a service failure onto the JSON error envelope.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) | ServiceError::TypeConstraint(message) => {
            HttpResponse::BadRequest().json(ApiError::new(message))
        }
        ServiceError::NotFound => HttpResponse::NotFound().json(ApiError::new("not found")),
        ServiceError::Query(e) => {
            error!("Catalog query failed: {e}");
            HttpResponse::InternalServerError().json(ApiError::new("failed to query catalog"))
        }
    }
}
