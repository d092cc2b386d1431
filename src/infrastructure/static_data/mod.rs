//! Literal CVMA and OMVQ tables.
//!
//! Every figure is copied verbatim from the cited documents and never
//! modified after definition. See [`citations::CITATIONS`] for the sources.

mod citations;
mod cvma;
mod omvq;

use crate::domain::entities::{
    Citation, EconomicImpact, JurisdictionFigures, NationalFigures, PracticeType,
    QuebecMembership, RegionalFigure,
};
use crate::domain::repositories::MarketDataRepository;

/// Repository backed by the compiled-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMarketData;

impl StaticMarketData {
    pub fn new() -> Self {
        Self
    }
}

impl MarketDataRepository for StaticMarketData {
    fn national(&self) -> NationalFigures {
        cvma::NATIONAL
    }

    fn economic_impact(&self) -> EconomicImpact {
        cvma::ECONOMIC_IMPACT
    }

    fn jurisdictions(&self) -> Vec<JurisdictionFigures> {
        cvma::JURISDICTIONS.to_vec()
    }

    fn membership(&self) -> QuebecMembership {
        QuebecMembership {
            as_of: omvq::AS_OF,
            total_members: omvq::TOTAL_MEMBERS,
            active_status: omvq::ACTIVE_STATUS,
            female: omvq::FEMALE,
            male: omvq::MALE,
        }
    }

    fn practice_types(&self) -> Vec<PracticeType> {
        omvq::PRACTICE_TYPES.to_vec()
    }

    fn regional_figures(&self) -> Vec<RegionalFigure> {
        omvq::REGIONAL_FIGURES.to_vec()
    }

    fn citations(&self) -> Vec<Citation> {
        citations::CITATIONS.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Province;

    #[test]
    fn test_all_jurisdictions_present_in_report_order() {
        let provinces: Vec<Province> = StaticMarketData
            .jurisdictions()
            .iter()
            .map(|j| j.province)
            .collect();
        assert_eq!(provinces, Province::ALL.to_vec());
    }

    #[test]
    fn test_every_jurisdiction_has_facilities() {
        for j in StaticMarketData.jurisdictions() {
            assert!(j.accredited_facilities >= 4, "{} has no facilities", j.province);
        }
    }

    #[test]
    fn test_membership_split_matches_total() {
        let m = StaticMarketData.membership();
        assert_eq!(m.female + m.male, m.total_members);
        assert_eq!(m.as_of.to_string(), "2024-09-26");
    }

    #[test]
    fn test_practice_table_has_eleven_rows() {
        let rows = StaticMarketData.practice_types();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].label, "Animaux de compagnie");
        assert_eq!(rows[0].headcount, 1674);
    }

    #[test]
    fn test_citation_urls_are_https() {
        for c in StaticMarketData.citations() {
            assert!(c.url.starts_with("https://"), "{}", c.url);
        }
    }
}
