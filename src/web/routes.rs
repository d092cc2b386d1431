//! Dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    canada_handler, index_handler, quebec_handler, scenario_handler, sources_handler,
};
use axum::{Router, routing::get};

/// Dashboard panel routes. All are public and read-only.
///
/// # Endpoints
///
/// - `GET /` - Redirect to the Canada panel
/// - `GET /canada` - Canada panel (CVMA)
/// - `GET /quebec` - Québec panel (OMVQ)
/// - `GET /scenario` - Solo-practice scenario
/// - `GET /sources` - Citations and method
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/canada", get(canada_handler))
        .route("/quebec", get(quebec_handler))
        .route("/scenario", get(scenario_handler))
        .route("/sources", get(sources_handler))
}
