use axum::http::StatusCode;

use crate::integration::common::setup_test_app;

#[tokio::test]
async fn health_returns_200() {
    let app = setup_test_app().await;

    let (status, json) = app.send("GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = setup_test_app().await;

    let (status, json) = app.send("GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Ledger API");
    assert!(json["paths"]["/records/{id}"].is_object());
    assert!(json["paths"]["/login"].is_object());
}
