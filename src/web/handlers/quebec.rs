//! Québec panel handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;
use crate::web::view::QuebecView;

/// Template for the Québec panel.
///
/// Renders `templates/quebec.html` with membership totals, the main
/// practice breakdown and the regional findings for companion animals.
#[derive(Template, WebTemplate)]
#[template(path = "quebec.html")]
pub struct QuebecTemplate {
    pub active: &'static str,
    pub view: QuebecView,
}

/// Renders the Québec panel.
///
/// # Endpoint
///
/// `GET /quebec`
pub async fn quebec_handler(State(state): State<AppState>) -> QuebecTemplate {
    super::record_render("quebec");

    QuebecTemplate {
        active: "quebec",
        view: QuebecView::build(&state.market_service),
    }
}
