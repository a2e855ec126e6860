use axum::http::StatusCode;
use axum_test::TestServer;

use crate::handlers::health::HealthResponse;
use crate::test_utils::{fixture_dist, setup_test_app, APP_JS, INDEX_HTML};

#[tokio::test]
async fn test_health_check() {
    let dist = fixture_dist();
    let server = TestServer::new(setup_test_app(&dist)).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_serves_index() {
    let dist = fixture_dist();
    let server = TestServer::new(setup_test_app(&dist)).unwrap();

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_static_asset_is_served() {
    let dist = fixture_dist();
    let server = TestServer::new(setup_test_app(&dist)).unwrap();

    let response = server.get("/frontend.js").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), APP_JS);
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dist = fixture_dist();
    let server = TestServer::new(setup_test_app(&dist)).unwrap();

    for path in [
        "/schedule",
        "/driverList",
        "/updateSchedule/S00003",
        "/dashboard?userId=USER7",
        "/scheduleDetails?driverId=D001",
    ] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML, "fallback for {}", path);
    }
}

#[tokio::test]
async fn test_cors_headers_present() {
    let dist = fixture_dist();
    let server = TestServer::new(setup_test_app(&dist)).unwrap();

    let response = server
        .get("/health")
        .add_header(
            axum::http::header::ORIGIN,
            axum::http::HeaderValue::from_static("http://localhost:8081"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert!(response.headers().contains_key("access-control-allow-origin"));
}
