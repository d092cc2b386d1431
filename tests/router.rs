mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_root_redirects_to_canada() {
    let server = common::create_test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/canada");
}

#[tokio::test]
async fn test_every_panel_is_reachable() {
    let server = common::create_test_server();

    for path in ["/canada", "/quebec", "/scenario", "/sources", "/health"] {
        server.get(path).await.assert_status_ok();
    }
}

#[tokio::test]
async fn test_active_tab_is_highlighted() {
    let server = common::create_test_server();

    let html = server.get("/quebec").await.text();

    assert!(html.contains(r#"<a href="/quebec" class="current">"#));
    assert!(!html.contains(r#"<a href="/canada" class="current">"#));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let server = common::create_test_server();

    let response = server.get("/static/style.css").await;

    response.assert_status_ok();
    assert!(response.text().contains(".metric"));
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let server = common::create_test_server();

    server.get("/api/stats").await.assert_status_not_found();
}
