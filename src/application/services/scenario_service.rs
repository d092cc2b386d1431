//! Scenario service applying the solo-practice estimator to a jurisdiction.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::JurisdictionRow;
use crate::domain::repositories::MarketDataRepository;
use crate::domain::scenario::{self, ScenarioEstimate, ScenarioInput};
use crate::error::AppError;

/// Official figures, derived ratio and estimate for one scenario run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioOutcome {
    pub input: ScenarioInput,
    pub row: JurisdictionRow,
    pub estimate: ScenarioEstimate,
}

/// Service for the what-if scenario panel.
///
/// Stateless: each call recomputes the estimate from the repository figures
/// and keeps nothing.
pub struct ScenarioService<R: MarketDataRepository> {
    repository: Arc<R>,
}

impl<R: MarketDataRepository> ScenarioService<R> {
    /// Creates a new scenario service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Runs the estimator for the selected jurisdiction and share.
    ///
    /// The share is applied as given; range checks belong to the input
    /// surface.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the repository has no figures for
    /// the selected jurisdiction.
    pub fn run(&self, input: ScenarioInput) -> Result<ScenarioOutcome, AppError> {
        let figures = self
            .repository
            .jurisdictions()
            .into_iter()
            .find(|j| j.province == input.province)
            .ok_or_else(|| {
                AppError::not_found(
                    "No figures for jurisdiction",
                    json!({ "jurisdiction": input.province.code() }),
                )
            })?;

        let estimate = scenario::estimate(
            f64::from(figures.active_vets),
            f64::from(figures.accredited_facilities),
            f64::from(input.solo_share_pct),
        );

        tracing::debug!(
            jurisdiction = input.province.code(),
            solo_share_pct = input.solo_share_pct,
            solo_facilities = estimate.solo_facilities,
            multi_vets = estimate.multi_vets,
            "scenario computed"
        );

        Ok(ScenarioOutcome {
            input,
            row: figures.to_row(),
            estimate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{JurisdictionFigures, Province};
    use crate::domain::repositories::MockMarketDataRepository;
    use crate::infrastructure::static_data::StaticMarketData;

    #[test]
    fn test_run_quebec_default() {
        let service = ScenarioService::new(Arc::new(StaticMarketData::new()));

        let outcome = service.run(ScenarioInput::default()).unwrap();

        assert_eq!(outcome.row.province(), Province::Qc);
        assert_eq!(outcome.row.active_vets(), 3212);
        assert_eq!(outcome.row.accredited_facilities(), 942);
        assert!((outcome.estimate.solo_facilities - 188.4).abs() < 1e-9);
        assert!((outcome.estimate.solo_vets - 188.4).abs() < 1e-9);
        assert!((outcome.estimate.multi_vets - 3023.6).abs() < 1e-9);
    }

    #[test]
    fn test_run_is_repeatable() {
        let service = ScenarioService::new(Arc::new(StaticMarketData::new()));
        let input = ScenarioInput {
            province: Province::Ab,
            solo_share_pct: 45,
        };

        assert_eq!(service.run(input).unwrap(), service.run(input).unwrap());
    }

    #[test]
    fn test_run_missing_jurisdiction() {
        let mut mock_repo = MockMarketDataRepository::new();
        mock_repo
            .expect_jurisdictions()
            .times(1)
            .returning(|| vec![JurisdictionFigures::new(Province::On, 5386, 1760)]);

        let service = ScenarioService::new(Arc::new(mock_repo));
        let result = service.run(ScenarioInput::default());

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
