//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::{JurisdictionSort, Province};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Figures loaded
/// - **503 Service Unavailable**: The figure tables are incomplete
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "data_store": {
///       "status": "ok",
///       "message": "12 jurisdictions, 11 practice types"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let data_check = check_data_store(&state);
    let healthy = data_check.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            data_store: data_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that every jurisdiction and at least one practice type is present.
fn check_data_store(state: &AppState) -> CheckStatus {
    let jurisdictions = state
        .market_service
        .jurisdiction_table(JurisdictionSort::default())
        .len();
    let practices = state.market_service.practice_shares().len();

    if jurisdictions != Province::ALL.len() {
        return CheckStatus::error(format!(
            "expected {} jurisdictions, found {jurisdictions}",
            Province::ALL.len()
        ));
    }
    if practices == 0 {
        return CheckStatus::error("no practice types loaded");
    }

    CheckStatus::ok(format!(
        "{jurisdictions} jurisdictions, {practices} practice types"
    ))
}
