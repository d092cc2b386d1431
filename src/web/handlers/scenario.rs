//! Scenario panel handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::params::ScenarioQuery;
use crate::web::view::ScenarioView;

/// Template for the scenario panel.
///
/// Renders `templates/scenario.html` with the jurisdiction selector, the
/// solo-share slider, the official figures of the selected jurisdiction and
/// the resulting estimates.
#[derive(Template, WebTemplate)]
#[template(path = "scenario.html")]
pub struct ScenarioTemplate {
    pub active: &'static str,
    pub view: ScenarioView,
}

/// Renders the scenario panel.
///
/// # Endpoint
///
/// `GET /scenario?jurisdiction=QC&solo_share=20`
///
/// Missing parameters fall back to the configured default scenario. The
/// form resubmits on every slider or selector change; each request
/// recomputes the estimate from scratch.
///
/// # Errors
///
/// - 400 Bad Request if `solo_share` is outside 0..=80 or not a multiple of 5
/// - 404 Not Found if `jurisdiction` is not one of the twelve codes
pub async fn scenario_handler(
    State(state): State<AppState>,
    params: Result<Query<ScenarioQuery>, QueryRejection>,
) -> Result<ScenarioTemplate, AppError> {
    let Query(params) = params?;
    let input = params.resolve(state.default_scenario)?;
    let outcome = state.scenario_service.run(input)?;
    super::record_render("scenario");

    Ok(ScenarioTemplate {
        active: "scenario",
        view: ScenarioView::build(&outcome),
    })
}
