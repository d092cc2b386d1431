mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkinvet::web::handlers::quebec_handler;

fn server() -> TestServer {
    let app = Router::new()
        .route("/quebec", get(quebec_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_quebec_panel_renders_membership() {
    let response = server().get("/quebec").await;

    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("26 septembre 2024"));
    assert!(html.contains("2 804"));
    assert!(html.contains("2 381"));
    assert!(html.contains("2 025"));
    assert!(html.contains("779"));
}

#[tokio::test]
async fn test_quebec_panel_highlights() {
    let html = server().get("/quebec").await.text();

    assert!(html.contains("<strong>60%</strong>"));
    assert!(html.contains("<strong>11%</strong>"));
    assert!(html.contains("<strong>6%</strong>"));
    assert!(html.contains("n=1674"));
}

#[tokio::test]
async fn test_practice_table_shows_unallocated_remainder() {
    let html = server().get("/quebec").await.text();

    assert!(html.contains("59.7%"));
    assert!(html.contains("Non répartis"));
    assert!(html.contains(">181<"));
    assert!(html.contains(">6.5%<"));
}

#[tokio::test]
async fn test_practice_chart_is_descending() {
    let html = server().get("/quebec").await.text();

    assert_eq!(html.matches("<svg").count(), 1);
    let companion = common::position(&html, "<title>Animaux de compagnie");
    let large = common::position(&html, "<title>Grands animaux");
    let teaching = common::position(&html, "<title>Enseignement");
    let equine = common::position(&html, "<title>Équins");
    assert!(companion < large);
    assert!(teaching < equine);
}

#[tokio::test]
async fn test_regional_findings() {
    let html = server().get("/quebec").await.text();

    assert!(html.contains("Montérégie"));
    assert!(html.contains("Nord-du-Québec"));
    assert!(html.contains("Côte-Nord"));
}
