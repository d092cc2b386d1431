//! OMVQ membership totals and regional findings for Québec.

use std::fmt;

use chrono::NaiveDate;

/// Membership totals from the OMVQ demographic portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuebecMembership {
    /// Date the portrait was taken.
    pub as_of: NaiveDate,
    /// Active members practicing in Québec.
    pub total_members: u32,
    /// Members with active status.
    pub active_status: u32,
    pub female: u32,
    pub male: u32,
}

/// Share printed next to a regional figure in the OMVQ document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportedShare {
    Percent(u8),
    LessThanOne,
}

impl fmt::Display for ReportedShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportedShare::Percent(p) => write!(f, "{p}%"),
            ReportedShare::LessThanOne => f.write_str("<1%"),
        }
    }
}

/// Why a region is singled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionalFinding {
    /// Highest concentration of companion-animal practitioners.
    HighestConcentration,
    /// Remote region reported as short of companion-animal practitioners.
    Underserved,
}

/// Companion-animal practitioners in one administrative region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalFigure {
    pub region: &'static str,
    pub headcount: u32,
    pub share: ReportedShare,
    pub finding: RegionalFinding,
}
