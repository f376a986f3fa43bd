use axum::http::StatusCode;
use serde_json::json;

use crate::integration::common::setup_test_app;

#[tokio::test]
async fn create_then_list_record() {
    let app = setup_test_app().await;

    let (status, created) = app
        .send("POST", "/records", Some(json!({"amount": 50, "item": "coffee"})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["amount"], 50);
    assert_eq!(created["item"], "coffee");
    assert!(created["id"].is_i64());
    assert!(created["record_date"].is_string());

    let (status, list) = app.send("GET", "/records", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], created);
}

#[tokio::test]
async fn caller_supplied_date_is_ignored_on_create() {
    let app = setup_test_app().await;

    let (status, created) = app
        .send(
            "POST",
            "/records",
            Some(json!({"amount": 5, "item": "tea", "record_date": "1999-01-01T00:00:00Z"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(!created["record_date"].as_str().unwrap().starts_with("1999"));
}

#[tokio::test]
async fn get_record_by_id() {
    let app = setup_test_app().await;
    let (_, created) = app
        .send("POST", "/records", Some(json!({"amount": 12, "item": "bus"})))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = app.send("GET", &format!("/records/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn unknown_record_is_404_everywhere() {
    let app = setup_test_app().await;

    for id in [1, 42, 9999] {
        let uri = format!("/records/{id}");
        let (status, body) = app.send("GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Record not found");

        let (status, body) = app
            .send("PUT", &uri, Some(json!({"amount": 1, "item": "x"})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Record not found");

        let (status, body) = app.send("DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
async fn update_replaces_amount_and_item() {
    let app = setup_test_app().await;
    let (_, created) = app
        .send("POST", "/records", Some(json!({"amount": 50, "item": "coffee"})))
        .await;
    let uri = format!("/records/{}", created["id"]);

    let (status, updated) = app
        .send("PUT", &uri, Some(json!({"amount": 80, "item": "dinner"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["amount"], 80);
    assert_eq!(updated["item"], "dinner");
    // Date not in the payload keeps its previous value.
    assert_eq!(updated["record_date"], created["record_date"]);

    let (_, fetched) = app.send("GET", &uri, None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_with_explicit_date() {
    let app = setup_test_app().await;
    let (_, created) = app
        .send("POST", "/records", Some(json!({"amount": 50, "item": "coffee"})))
        .await;
    let uri = format!("/records/{}", created["id"]);

    let (status, updated) = app
        .send(
            "PUT",
            &uri,
            Some(json!({"amount": 50, "item": "coffee", "record_date": "2024-03-01T09:30:00Z"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        updated["record_date"]
            .as_str()
            .unwrap()
            .starts_with("2024-03-01T09:30:00")
    );
}

#[tokio::test]
async fn update_missing_field_is_400() {
    let app = setup_test_app().await;
    let (_, created) = app
        .send("POST", "/records", Some(json!({"amount": 50, "item": "coffee"})))
        .await;
    let uri = format!("/records/{}", created["id"]);

    let (status, body) = app.send("PUT", &uri, Some(json!({"amount": 10}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (_, fetched) = app.send("GET", &uri, None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn invalid_create_payloads_are_400() {
    let app = setup_test_app().await;

    let cases = [
        json!({"item": "coffee"}),
        json!({"amount": "fifty", "item": "coffee"}),
        json!({"amount": 50, "item": ""}),
        json!({"amount": 50, "item": "x".repeat(241)}),
    ];
    for payload in cases {
        let (status, body) = app.send("POST", "/records", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_error");
        assert!(body["message"].is_string());
    }

    let (_, list) = app.send("GET", "/records", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn delete_returns_record_then_404() {
    let app = setup_test_app().await;
    let (_, created) = app
        .send("POST", "/records", Some(json!({"amount": 50, "item": "coffee"})))
        .await;
    let uri = format!("/records/{}", created["id"]);

    let (status, deleted) = app.send("DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, body) = app.send("GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Record not found");
}

#[tokio::test]
async fn non_numeric_id_is_json_400() {
    let app = setup_test_app().await;

    let update = json!({"amount": 1, "item": "x"});
    for (method, payload) in [("GET", None), ("PUT", Some(update)), ("DELETE", None)] {
        let (status, body) = app.send(method, "/records/abc", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(body["error"], "validation_error");
        assert!(body["message"].is_string());
    }
}
