//! Derived indicators computed from the official figures.

use std::sync::Arc;

use crate::domain::entities::{
    Citation, EconomicImpact, JurisdictionRow, JurisdictionSort, NationalFigures, PracticeShare,
    QuebecMembership, RegionalFigure, share_pct,
};
use crate::domain::repositories::MarketDataRepository;

/// Members not covered by any listed practice type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnallocatedMembers {
    pub headcount: u32,
    pub share_pct: f64,
}

/// A practice type with the whole-percent share quoted in the OMVQ text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeHighlight {
    pub label: &'static str,
    pub headcount: u32,
    pub rounded_pct: u32,
}

/// Service computing ratios, shares and sums over the market figures.
///
/// Every method is a pure read of the repository followed by arithmetic;
/// repeated calls return identical results.
pub struct MarketService<R: MarketDataRepository> {
    repository: Arc<R>,
}

impl<R: MarketDataRepository> MarketService<R> {
    /// Creates a new market service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn national(&self) -> NationalFigures {
        self.repository.national()
    }

    /// National active veterinarians per accredited facility.
    pub fn national_ratio(&self) -> f64 {
        self.repository.national().ratio()
    }

    pub fn economic_impact(&self) -> EconomicImpact {
        self.repository.economic_impact()
    }

    /// Total tax revenues (federal + provincial + municipal), M$ CAD.
    pub fn total_tax_mcad(&self) -> f64 {
        self.repository.economic_impact().total_tax_mcad()
    }

    /// Per-jurisdiction ratio table, largest first on the `sort` column.
    pub fn jurisdiction_table(&self, sort: JurisdictionSort) -> Vec<JurisdictionRow> {
        let mut rows: Vec<JurisdictionRow> = self
            .repository
            .jurisdictions()
            .into_iter()
            .map(|figures| figures.to_row())
            .collect();
        sort.sort(&mut rows);
        rows
    }

    pub fn membership(&self) -> QuebecMembership {
        self.repository.membership()
    }

    /// Practice types with their share of all members, largest first.
    pub fn practice_shares(&self) -> Vec<PracticeShare> {
        let total = self.repository.membership().total_members;
        let mut shares: Vec<PracticeShare> = self
            .repository
            .practice_types()
            .iter()
            .map(|p| p.share_of(total))
            .collect();
        shares.sort_by(|a, b| b.headcount.cmp(&a.headcount));
        shares
    }

    /// Members the practice table does not account for.
    pub fn unallocated_members(&self) -> UnallocatedMembers {
        let total = self.repository.membership().total_members;
        let listed: u32 = self
            .repository
            .practice_types()
            .iter()
            .map(|p| p.headcount)
            .sum();
        let headcount = total.saturating_sub(listed);

        UnallocatedMembers {
            headcount,
            share_pct: share_pct(headcount, total),
        }
    }

    /// The `n` largest practice types with whole-percent shares.
    pub fn practice_highlights(&self, n: usize) -> Vec<PracticeHighlight> {
        let total = f64::from(self.repository.membership().total_members);
        self.practice_shares()
            .into_iter()
            .take(n)
            .map(|s| PracticeHighlight {
                label: s.label,
                headcount: s.headcount,
                rounded_pct: (f64::from(s.headcount) / total * 100.0).round() as u32,
            })
            .collect()
    }

    pub fn regional_figures(&self) -> Vec<RegionalFigure> {
        self.repository.regional_figures()
    }

    pub fn citations(&self) -> Vec<Citation> {
        self.repository.citations()
    }
}
