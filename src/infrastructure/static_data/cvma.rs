//! CVMA, Economic Impact 2024 Update (2023-24).

use crate::domain::entities::{EconomicImpact, JurisdictionFigures, NationalFigures, Province};

pub const NATIONAL: NationalFigures = NationalFigures {
    registered_vets: 16_317,
    active_vets: 15_278,
    accredited_facilities: 4_328,
};

/// Table 1, Canada 2023-24.
pub const ECONOMIC_IMPACT: EconomicImpact = EconomicImpact {
    output_mcad: 16_946.8,
    gdp_mcad: 9_549.3,
    employment_fte: 81_920,
    tax_federal_mcad: 873.1,
    tax_provincial_mcad: 797.3,
    tax_municipal_mcad: 158.2,
    output_direct_mcad: 10_044.5,
    gdp_direct_mcad: 5_567.6,
    employment_direct_fte: 51_660,
};

/// Figure 1 (actively practicing veterinarians) and Figure 2 (accredited
/// facilities), 2023-24.
///
/// Ontario changed its accreditation model in 2023, which limits
/// comparisons with earlier years for ON.
pub const JURISDICTIONS: [JurisdictionFigures; 12] = [
    JurisdictionFigures::new(Province::On, 5386, 1760),
    JurisdictionFigures::new(Province::Qc, 3212, 942),
    JurisdictionFigures::new(Province::Ab, 2099, 608),
    JurisdictionFigures::new(Province::Bc, 2141, 688),
    JurisdictionFigures::new(Province::Sk, 724, 135),
    JurisdictionFigures::new(Province::Ns, 495, 155),
    JurisdictionFigures::new(Province::Mb, 458, 152),
    JurisdictionFigures::new(Province::Nb, 167, 92),
    JurisdictionFigures::new(Province::Pe, 238, 25),
    JurisdictionFigures::new(Province::Nl, 158, 31),
    JurisdictionFigures::new(Province::Yk, 34, 14),
    JurisdictionFigures::new(Province::Nt, 4, 4),
];
