use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use ledger_db::{Database, DatabaseConfig};
use ledger_server::routes;
use ledger_server::state::AppState;

pub struct TestApp {
    pub router: Router,
    /// Holds the SQLite file; dropping it removes the database.
    _dir: TempDir,
}

/// Build the router over a fresh, migrated SQLite file.
pub async fn setup_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("ledger.sqlite").display());

    let db = Database::connect(&DatabaseConfig::new(url))
        .await
        .expect("Failed to open database");
    db.migrate().await.expect("Failed to run migrations");

    let state = Arc::new(AppState::new(db));

    TestApp {
        router: routes::router(state),
        _dir: dir,
    }
}

impl TestApp {
    /// Send one request and return the status and parsed JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
