//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{MarketService, ScenarioService};
use crate::domain::scenario::ScenarioInput;
use crate::infrastructure::static_data::StaticMarketData;

/// Application state cloned into each request.
///
/// Holds only read-only services; no handler mutates it.
#[derive(Clone)]
pub struct AppState {
    pub market_service: Arc<MarketService<StaticMarketData>>,
    pub scenario_service: Arc<ScenarioService<StaticMarketData>>,
    /// Scenario parameters used when the request omits them.
    pub default_scenario: ScenarioInput,
}

impl AppState {
    /// Builds the state over the compiled-in figures.
    pub fn new(default_scenario: ScenarioInput) -> Self {
        let repository = Arc::new(StaticMarketData::new());

        Self {
            market_service: Arc::new(MarketService::new(repository.clone())),
            scenario_service: Arc::new(ScenarioService::new(repository)),
            default_scenario,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScenarioInput::default())
    }
}
