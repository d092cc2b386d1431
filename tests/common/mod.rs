#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use linkinvet::domain::entities::Province;
use linkinvet::domain::scenario::ScenarioInput;
use linkinvet::routes::{RateLimit, app_routes};
use linkinvet::state::AppState;

/// State with the stock scenario defaults (Québec, 20%).
pub fn create_test_state() -> AppState {
    AppState::default()
}

/// State whose scenario panel opens on `province` at `solo_share_pct`.
pub fn create_state_with_defaults(province: Province, solo_share_pct: u8) -> AppState {
    AppState::new(ScenarioInput {
        province,
        solo_share_pct,
    })
}

/// Full route table without rate limiting, serving the crate's `static/`.
pub fn create_test_app(state: AppState) -> Router {
    app_routes(
        state,
        RateLimit::Disabled,
        concat!(env!("CARGO_MANIFEST_DIR"), "/static"),
    )
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}

/// Byte offset of `needle` in `haystack`, panicking when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in response"))
}
