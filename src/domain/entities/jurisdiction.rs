//! Jurisdiction figures and the derived vets-per-facility ratio.

use std::fmt;
use std::str::FromStr;

use super::Province;

/// Official CVMA figures for a single jurisdiction (2023-24).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JurisdictionFigures {
    pub province: Province,
    pub active_vets: u32,
    pub accredited_facilities: u32,
}

impl JurisdictionFigures {
    pub const fn new(province: Province, active_vets: u32, accredited_facilities: u32) -> Self {
        Self {
            province,
            active_vets,
            accredited_facilities,
        }
    }

    /// Active veterinarians per accredited facility.
    ///
    /// Every literal row has at least four facilities, so the division is
    /// always defined.
    pub fn ratio(&self) -> f64 {
        f64::from(self.active_vets) / f64::from(self.accredited_facilities)
    }

    /// Builds the derived table row for these figures.
    pub fn to_row(self) -> JurisdictionRow {
        JurisdictionRow {
            ratio: self.ratio(),
            figures: self,
        }
    }
}

/// A jurisdiction row carrying its derived indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JurisdictionRow {
    pub figures: JurisdictionFigures,
    pub ratio: f64,
}

impl JurisdictionRow {
    pub fn province(&self) -> Province {
        self.figures.province
    }

    pub fn active_vets(&self) -> u32 {
        self.figures.active_vets
    }

    pub fn accredited_facilities(&self) -> u32 {
        self.figures.accredited_facilities
    }
}

/// Column a jurisdiction table can be ordered by. Ordering is descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JurisdictionSort {
    #[default]
    ActiveVets,
    Facilities,
    Ratio,
}

impl JurisdictionSort {
    pub const ALL: [JurisdictionSort; 3] = [
        JurisdictionSort::ActiveVets,
        JurisdictionSort::Facilities,
        JurisdictionSort::Ratio,
    ];

    /// Query-string key.
    pub fn key(self) -> &'static str {
        match self {
            JurisdictionSort::ActiveVets => "active_vets",
            JurisdictionSort::Facilities => "facilities",
            JurisdictionSort::Ratio => "ratio",
        }
    }

    /// Column header shown in tables.
    pub fn label(self) -> &'static str {
        match self {
            JurisdictionSort::ActiveVets => "Vétérinaires actifs (2023-24)",
            JurisdictionSort::Facilities => "Établissements accrédités (2023-24)",
            JurisdictionSort::Ratio => "Ratio (vétos / établissement) — indicateur dérivé",
        }
    }

    /// Sorts rows in place, largest first. Ties keep their original order.
    pub fn sort(self, rows: &mut [JurisdictionRow]) {
        match self {
            JurisdictionSort::ActiveVets => rows.sort_by(|a, b| b.active_vets().cmp(&a.active_vets())),
            JurisdictionSort::Facilities => {
                rows.sort_by(|a, b| b.accredited_facilities().cmp(&a.accredited_facilities()))
            }
            JurisdictionSort::Ratio => rows.sort_by(|a, b| b.ratio.total_cmp(&a.ratio)),
        }
    }
}

impl fmt::Display for JurisdictionSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned for an unrecognised sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected active_vets, facilities or ratio)")]
pub struct UnknownSort(pub String);

impl FromStr for JurisdictionSort {
    type Err = UnknownSort;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JurisdictionSort::ALL
            .into_iter()
            .find(|k| k.key() == s.trim())
            .ok_or_else(|| UnknownSort(s.to_string()))
    }
}
