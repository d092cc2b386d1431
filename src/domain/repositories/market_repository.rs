//! Repository trait for the official market figures.

use crate::domain::entities::{
    Citation, EconomicImpact, JurisdictionFigures, NationalFigures, PracticeType,
    QuebecMembership, RegionalFigure,
};

/// Read-only access to the figures copied from the CVMA and OMVQ reports.
///
/// Figures are fixed for the lifetime of the process; implementations must
/// return the same values on every call.
///
/// # Implementations
///
/// - [`crate::infrastructure::static_data::StaticMarketData`] - literal tables
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait MarketDataRepository: Send + Sync {
    /// National headcounts (CVMA).
    fn national(&self) -> NationalFigures;

    /// Economic contribution, Canada 2023-24 (CVMA Table 1).
    fn economic_impact(&self) -> EconomicImpact;

    /// Active veterinarians and accredited facilities per jurisdiction
    /// (CVMA Figures 1 and 2), in report order.
    fn jurisdictions(&self) -> Vec<JurisdictionFigures>;

    /// Québec membership totals (OMVQ).
    fn membership(&self) -> QuebecMembership;

    /// Members by main practice type (OMVQ), in report order.
    fn practice_types(&self) -> Vec<PracticeType>;

    /// Regional findings for companion-animal practice (OMVQ).
    fn regional_figures(&self) -> Vec<RegionalFigure>;

    /// Source documents, in citation order.
    fn citations(&self) -> Vec<Citation>;
}
