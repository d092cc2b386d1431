mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkinvet::web::handlers::sources_handler;

fn server() -> TestServer {
    let app = Router::new()
        .route("/sources", get(sources_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_sources_lists_every_citation() {
    let response = server().get("/sources").await;

    response.assert_status_ok();
    let html = response.text();

    assert_eq!(html.matches("<a href=\"https").count(), 3);
    assert!(html.contains("cvma_final-report-en.pdf"));
    assert!(html.contains("economic-impact-study-2024-update"));
    assert!(html.contains("Portrait-de-la-profession-veterinaire"));
}

#[tokio::test]
async fn test_sources_describes_the_method() {
    let html = server().get("/sources").await.text();

    assert!(html.contains("Méthode (résumé)"));
    assert!(html.contains("2 804 membres au Québec"));
}
