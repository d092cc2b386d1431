//! Business logic services for the application layer.

pub mod market_service;
pub mod scenario_service;

pub use market_service::{MarketService, PracticeHighlight, UnallocatedMembers};
pub use scenario_service::{ScenarioOutcome, ScenarioService};
