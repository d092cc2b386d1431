mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use linkinvet::web::handlers::canada_handler;

fn server() -> TestServer {
    let app = Router::new()
        .route("/canada", get(canada_handler))
        .with_state(common::create_test_state());
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_canada_panel_renders_national_figures() {
    let response = server().get("/canada").await;

    response.assert_status_ok();
    let html = response.text();

    assert!(html.contains("16 317"));
    assert!(html.contains("15 278"));
    assert!(html.contains("4 328"));
    assert!(html.contains(">3.53<"));
    assert!(html.contains("16 946.8"));
    assert!(html.contains("9 549.3"));
    assert!(html.contains("81 920"));
    assert!(html.contains("1 828.6"));
}

#[tokio::test]
async fn test_canada_panel_labels_every_level() {
    let html = server().get("/canada").await.text();

    assert!(html.contains("Officiel"));
    assert!(html.contains("Indicateur dérivé"));
    assert!(html.contains("accréditation en Ontario"));
}

#[tokio::test]
async fn test_canada_panel_has_three_charts() {
    let html = server().get("/canada").await.text();

    assert_eq!(html.matches("<svg").count(), 3);
    // 12 bars per chart
    assert_eq!(html.matches("<rect").count(), 36);
}

#[tokio::test]
async fn test_table_defaults_to_active_vets_order() {
    let html = server().get("/canada").await.text();

    let on = common::position(&html, r#"data-code="ON""#);
    let qc = common::position(&html, r#"data-code="QC""#);
    let nt = common::position(&html, r#"data-code="NT""#);
    assert!(on < qc);
    assert!(qc < nt);
}

#[tokio::test]
async fn test_table_sorted_by_ratio() {
    let response = server()
        .get("/canada")
        .add_query_param("sort", "ratio")
        .await;

    response.assert_status_ok();
    let html = response.text();

    let pe = common::position(&html, r#"data-code="PE""#);
    let sk = common::position(&html, r#"data-code="SK""#);
    let nt = common::position(&html, r#"data-code="NT""#);
    assert!(pe < sk);
    assert!(sk < nt);
    assert!(html.contains(">9.52<"));
}

#[tokio::test]
async fn test_table_sorted_by_facilities() {
    let html = server()
        .get("/canada")
        .add_query_param("sort", "facilities")
        .await
        .text();

    let on = common::position(&html, r#"data-code="ON""#);
    let qc = common::position(&html, r#"data-code="QC""#);
    let bc = common::position(&html, r#"data-code="BC""#);
    let ab = common::position(&html, r#"data-code="AB""#);
    assert!(on < qc);
    assert!(qc < bc);
    assert!(bc < ab);
}

#[tokio::test]
async fn test_unknown_sort_is_rejected() {
    let response = server()
        .get("/canada")
        .add_query_param("sort", "name")
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["sort"], "name");
}

#[tokio::test]
async fn test_empty_sort_uses_default() {
    let response = server().get("/canada").add_query_param("sort", "").await;

    response.assert_status_ok();
    let html = response.text();
    let on = common::position(&html, r#"data-code="ON""#);
    let qc = common::position(&html, r#"data-code="QC""#);
    assert!(on < qc);
}
