//! Core domain entities representing the market data model.
//!
//! Entities are plain immutable values copied from the cited reports or
//! derived from them with simple arithmetic.
//!
//! # Entity Types
//!
//! - [`Province`] - One of the twelve CVMA jurisdictions
//! - [`JurisdictionFigures`] / [`JurisdictionRow`] - Per-jurisdiction figures and derived ratio
//! - [`NationalFigures`] / [`EconomicImpact`] - National CVMA figures
//! - [`PracticeType`] / [`PracticeShare`] - OMVQ main practice headcounts and shares
//! - [`QuebecMembership`] / [`RegionalFigure`] - OMVQ membership and regional findings
//! - [`Citation`] - Source documents

pub mod citation;
pub mod economics;
pub mod jurisdiction;
pub mod membership;
pub mod practice;
pub mod province;

pub use citation::{Citation, Publisher};
pub use economics::{EconomicImpact, NationalFigures};
pub use jurisdiction::{JurisdictionFigures, JurisdictionRow, JurisdictionSort, UnknownSort};
pub use membership::{QuebecMembership, RegionalFigure, RegionalFinding, ReportedShare};
pub use practice::{PracticeShare, PracticeType, share_pct};
pub use province::{Province, UnknownProvince};
