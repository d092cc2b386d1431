//! Top-level router configuration combining the dashboard and health routes.
//!
//! # Route Structure
//!
//! - `GET /`          - Redirect to the Canada panel
//! - `GET /canada`    - Canada panel (CVMA)
//! - `GET /quebec`    - Québec panel (OMVQ)
//! - `GET /scenario`  - Solo-practice scenario panel
//! - `GET /sources`   - Source links and method summary
//! - `GET /health`    - Health check
//! - `/static/*`      - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// How clients are keyed for rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimit {
    Disabled,
    /// Key on the socket peer address.
    PeerIp,
    /// Key on `X-Forwarded-For` / `X-Real-IP`; only behind a trusted proxy.
    Proxied,
}

impl RateLimit {
    pub fn from_config(config: &Config) -> Self {
        match (config.rate_limit_enabled, config.behind_proxy) {
            (false, _) => RateLimit::Disabled,
            (true, false) => RateLimit::PeerIp,
            (true, true) => RateLimit::Proxied,
        }
    }
}

/// Builds the routes with state and middleware, without path normalization.
///
/// With [`RateLimit::PeerIp`] the router must be served with connect info,
/// otherwise every request is rejected.
pub fn app_routes(state: AppState, rate_limit: RateLimit, static_dir: &str) -> Router {
    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state);

    let router = match rate_limit {
        RateLimit::Disabled => router,
        RateLimit::PeerIp => router.layer(rate_limit::layer()),
        RateLimit::Proxied => router.layer(rate_limit::proxied_layer()),
    };

    router.layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/canada/` serves the
/// same panel as `/canada`.
pub fn app_router(state: AppState, rate_limit: RateLimit, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state, rate_limit, static_dir))
}
