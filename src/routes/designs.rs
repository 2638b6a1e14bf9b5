use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::domain::types::DesignId;
use crate::dto::api::{ApiError, ApiResponse};
use crate::dto::designs::DesignListRequest;
use crate::forms::designs::DesignListParams;
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::{ServiceError, designs as design_service};

#[get("/designs")]
pub async fn list_designs(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let request = match DesignListParams::from_query(req.query_string())
        .and_then(DesignListRequest::try_from)
    {
        Ok(request) => request,
        Err(e) => return service_error_response(ServiceError::from(e)),
    };

    match design_service::list_designs(repo.get_ref(), request) {
        Ok(page) => HttpResponse::Ok().json(ApiResponse::paginated(page)),
        Err(e) => service_error_response(e),
    }
}

#[get("/designs/{design_id}")]
pub async fn show_design(
    design_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let Ok(design_id) = DesignId::new(design_id.into_inner()) else {
        return HttpResponse::NotFound().json(ApiError::new("not found"));
    };

    match design_service::get_design(repo.get_ref(), design_id) {
        Ok(design) => HttpResponse::Ok().json(ApiResponse::ok(design)),
        Err(e) => service_error_response(e),
    }
}
