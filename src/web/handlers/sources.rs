//! Sources panel handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;
use crate::web::view::SourcesView;

#[derive(Template, WebTemplate)]
#[template(path = "sources.html")]
pub struct SourcesTemplate {
    pub active: &'static str,
    pub view: SourcesView,
}

/// Renders the citations and the method summary.
///
/// # Endpoint
///
/// `GET /sources`
pub async fn sources_handler(State(state): State<AppState>) -> SourcesTemplate {
    super::record_render("sources");

    SourcesTemplate {
        active: "sources",
        view: SourcesView::build(&state.market_service),
    }
}
