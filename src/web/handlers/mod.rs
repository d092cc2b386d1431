//! HTML template rendering handlers for the dashboard panels.
//!
//! Each panel reads the shared services and renders on its own; no handler
//! writes to state another panel reads.

mod canada;
mod index;
mod quebec;
mod scenario;
mod sources;

pub use canada::{CanadaTemplate, canada_handler};
pub use index::index_handler;
pub use quebec::{QuebecTemplate, quebec_handler};
pub use scenario::{ScenarioTemplate, scenario_handler};
pub use sources::{SourcesTemplate, sources_handler};

/// Counts one render of `panel`.
fn record_render(panel: &'static str) {
    metrics::counter!("dashboard_panel_renders_total", "panel" => panel).increment(1);
    tracing::debug!(panel, "panel rendered");
}
