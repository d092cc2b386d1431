//! Application layer services implementing the derived-metrics step.
//!
//! Services consume the [`crate::domain::repositories::MarketDataRepository`]
//! trait and provide a clean API for the web panels and the terminal report.
//!
//! # Available Services
//!
//! - [`services::market_service::MarketService`] - Ratios, shares and sums over official figures
//! - [`services::scenario_service::ScenarioService`] - Solo-practice what-if estimates

pub mod services;
