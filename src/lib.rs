//! # LinkinVet market dashboard
//!
//! A read-only web dashboard summarizing the Canadian and Québec veterinary
//! market from two public documents: the CVMA 2023-24 provincial statistics
//! and the OMVQ membership snapshot of 26 September 2024.
//!
//! Every figure on screen is labelled with one of three levels:
//!
//! - **Official** - copied verbatim from the source documents
//! - **Derived indicator** - a ratio, share or sum of official figures
//! - **Scenario (estimate)** - computed under an explicit, adjustable hypothesis
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Market entities, scenario estimator and repository trait
//! - **Application Layer** ([`application`]) - Derived indicators and scenario runs
//! - **Infrastructure Layer** ([`infrastructure`]) - Compiled-in official figures
//! - **API Layer** ([`api`]) - Health probe and HTTP middleware
//! - **Web Layer** ([`web`]) - Dashboard panels rendered as HTML with inline SVG charts
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # then open http://localhost:3000/canada
//!
//! # Same panels in the terminal
//! cargo run --bin report -- scenario --jurisdiction ON --solo-share 35
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{MarketService, ScenarioOutcome, ScenarioService};
    pub use crate::domain::entities::{JurisdictionRow, JurisdictionSort, Province};
    pub use crate::domain::scenario::{ScenarioEstimate, ScenarioInput, estimate};
    pub use crate::error::AppError;
    pub use crate::infrastructure::static_data::StaticMarketData;
    pub use crate::routes::{RateLimit, app_router, app_routes};
    pub use crate::state::AppState;
}
