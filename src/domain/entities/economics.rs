//! National CVMA figures: headcounts and economic contribution.

/// National veterinary headcounts reported by the CVMA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NationalFigures {
    /// Registered veterinarians (2024).
    pub registered_vets: u32,
    /// Actively practicing veterinarians (2023-24).
    pub active_vets: u32,
    /// Accredited practice facilities (2023-24).
    pub accredited_facilities: u32,
}

impl NationalFigures {
    /// National active veterinarians per accredited facility.
    pub fn ratio(&self) -> f64 {
        f64::from(self.active_vets) / f64::from(self.accredited_facilities)
    }
}

/// Economic contribution of the veterinary sector, Canada 2023-24 (Table 1).
///
/// Monetary amounts are in millions of Canadian dollars; employment is in
/// full-time equivalents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomicImpact {
    pub output_mcad: f64,
    pub gdp_mcad: f64,
    pub employment_fte: u32,
    pub tax_federal_mcad: f64,
    pub tax_provincial_mcad: f64,
    pub tax_municipal_mcad: f64,
    pub output_direct_mcad: f64,
    pub gdp_direct_mcad: f64,
    pub employment_direct_fte: u32,
}

impl EconomicImpact {
    /// Sum of the federal, provincial and municipal tax revenues.
    pub fn total_tax_mcad(&self) -> f64 {
        self.tax_federal_mcad + self.tax_provincial_mcad + self.tax_municipal_mcad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_tax_sums_components() {
        let impact = EconomicImpact {
            output_mcad: 1.0,
            gdp_mcad: 1.0,
            employment_fte: 1,
            tax_federal_mcad: 873.1,
            tax_provincial_mcad: 797.3,
            tax_municipal_mcad: 158.2,
            output_direct_mcad: 1.0,
            gdp_direct_mcad: 1.0,
            employment_direct_fte: 1,
        };

        assert!((impact.total_tax_mcad() - 1828.6).abs() < 1e-9);
    }

    #[test]
    fn test_national_ratio() {
        let national = NationalFigures {
            registered_vets: 16317,
            active_vets: 15278,
            accredited_facilities: 4328,
        };
        assert_eq!(format!("{:.2}", national.ratio()), "3.53");
    }
}
