mod test_utils;

use axum::http::StatusCode;
use serde_json::{json, Value};

use test_utils::TestContext;

#[tokio::test]
async fn test_health_needs_no_token() {
    let server = TestContext::new().into_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "ok", "service": "timetable" })
    );
}

#[tokio::test]
async fn test_version_reports_crate_version() {
    let server = TestContext::new().into_server();

    let response = server.get("/version").await;

    assert_eq!(
        response.json::<Value>()["version"],
        json!(env!("CARGO_PKG_VERSION"))
    );
}
