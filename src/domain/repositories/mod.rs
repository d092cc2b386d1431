//! Repository trait definitions for the domain layer.
//!
//! The dashboard reads every figure through [`MarketDataRepository`], which
//! keeps services and handlers independent of where the literal tables live.
//!
//! # Implementations
//!
//! - `crate::infrastructure::static_data` - the literal CVMA and OMVQ tables
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod market_repository;

pub use market_repository::MarketDataRepository;

#[cfg(test)]
pub use market_repository::MockMarketDataRepository;
