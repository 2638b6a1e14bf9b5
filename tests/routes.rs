use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;
use wall_catalog::domain::types::TaxonomyName;
use wall_catalog::repository::{DesignWriter, DieselRepository, TaxonomyWriter};
use wall_catalog::routes;

mod common;

use common::{TestDb, published};

fn seed(repo: &DieselRepository) {
    let wood = repo
        .upsert_tag(&TaxonomyName::new("wood").unwrap())
        .unwrap();
    repo.upsert_category(&TaxonomyName::new("Living").unwrap())
        .unwrap();

    for i in 0..12 {
        let design = repo
            .create_design(&published(&format!("Design {i}"), 10.0 + i as f64, i))
            .unwrap();
        if i % 4 == 0 {
            repo.assign_tags_to_design(design.id, &[wood.id]).unwrap();
        }
    }
}

macro_rules! catalog_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .service(web::scope("/api").configure(routes::configure)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_list_designs_returns_envelope() {
    let test_db = TestDb::new("test_list_designs_returns_envelope.db");
    let repo = test_db.repo();
    seed(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/designs?page=2&pageSize=5&sortBy=price&sortDirection=asc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["data"][0]["price"], 15.0);
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["pageSize"], 5);
    assert_eq!(body["pagination"]["totalCount"], 12);
    assert_eq!(body["pagination"]["totalPages"], 3);
    assert_eq!(body["pagination"]["hasMore"], true);
}

#[actix_web::test]
async fn test_list_designs_by_tag() {
    let test_db = TestDb::new("test_list_designs_by_tag.db");
    let repo = test_db.repo();
    seed(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/designs?tagIds=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["totalCount"], 3);
    assert_eq!(body["data"][0]["tagIds"], serde_json::json!([1]));
}

#[actix_web::test]
async fn test_invalid_listing_is_bad_request() {
    let test_db = TestDb::new("test_invalid_listing_is_bad_request.db");
    let app = catalog_app!(test_db.repo());

    for uri in [
        "/api/designs?page=0",
        "/api/designs?pageSize=500",
        "/api/designs?sortDirection=up",
        "/api/designs?status=unknown",
        "/api/designs?page=abc",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }
}

#[actix_web::test]
async fn test_show_design_and_not_found() {
    let test_db = TestDb::new("test_show_design_and_not_found.db");
    let repo = test_db.repo();
    seed(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get().uri("/api/designs/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["status"], "published");
    assert!(body.get("pagination").is_none());

    let req = test::TestRequest::get().uri("/api/designs/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_taxonomy_endpoints() {
    let test_db = TestDb::new("test_taxonomy_endpoints.db");
    let repo = test_db.repo();
    seed(&repo);
    let app = catalog_app!(repo);

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["name"], "Living");

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get().uri("/api/area-types").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"], serde_json::json!([]));
}
