//! Canada panel handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::params::CanadaQuery;
use crate::web::view::CanadaView;

/// Template for the Canada panel.
///
/// Renders `templates/canada.html` with:
/// - National headcounts and the derived national ratio
/// - Economic contribution (CVMA Table 1)
/// - Bar charts per jurisdiction
/// - Jurisdiction table ordered by the requested column
#[derive(Template, WebTemplate)]
#[template(path = "canada.html")]
pub struct CanadaTemplate {
    pub active: &'static str,
    pub view: CanadaView,
}

/// Renders the Canada panel.
///
/// # Endpoint
///
/// `GET /canada?sort=active_vets|facilities|ratio`
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown sort key.
pub async fn canada_handler(
    State(state): State<AppState>,
    params: Result<Query<CanadaQuery>, QueryRejection>,
) -> Result<CanadaTemplate, AppError> {
    let Query(params) = params?;
    let sort = params.sort()?;
    super::record_render("canada");

    Ok(CanadaTemplate {
        active: "canada",
        view: CanadaView::build(&state.market_service, sort),
    })
}
