//! Domain layer containing market entities and the scenario estimator.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Figures are reached through repository traits implemented by
//! [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Official figures and derived rows
//! - [`repositories`] - Data access trait definitions
//! - [`scenario`] - Solo-practice what-if estimator
//!
//! # Three levels of figures
//!
//! 1. **Official**: copied verbatim from the CVMA or OMVQ documents
//! 2. **Derived indicator**: a ratio, share or sum of official figures
//! 3. **Scenario**: computed under an explicit, adjustable hypothesis

pub mod entities;
pub mod repositories;
pub mod scenario;
