//! Landing redirect.

use axum::response::Redirect;

/// Sends visitors to the first panel.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Redirect {
    Redirect::to("/canada")
}
