use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::ApiResponse;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::taxonomy as taxonomy_service;

#[get("/categories")]
pub async fn list_categories(repo: web::Data<DieselRepository>) -> impl Responder {
    match taxonomy_service::list_categories(repo.get_ref()) {
        Ok(categories) => HttpResponse::Ok().json(ApiResponse::ok(categories)),
        Err(e) => service_error_response(e),
    }
}

#[get("/area-types")]
pub async fn list_area_types(repo: web::Data<DieselRepository>) -> impl Responder {
    match taxonomy_service::list_area_types(repo.get_ref()) {
        Ok(area_types) => HttpResponse::Ok().json(ApiResponse::ok(area_types)),
        Err(e) => service_error_response(e),
    }
}

#[get("/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match taxonomy_service::list_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(ApiResponse::ok(tags)),
        Err(e) => service_error_response(e),
    }
}
