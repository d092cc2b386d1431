//! Solo-practice scenario estimator.
//!
//! The CVMA and OMVQ sources do not publish a split between single-vet
//! facilities and multi-vet clinics. This module applies a user-chosen share
//! of single-vet facilities to the official aggregates of one jurisdiction.
//! Its outputs are exploratory estimates, never observations.
//!
//! # Hypothesis
//!
//! A "solo" facility employs exactly [`VETS_PER_SOLO_FACILITY`] active
//! veterinarian. Every remaining active veterinarian is counted in a
//! multi-vet structure.

use super::entities::Province;

/// Active veterinarians assumed per single-vet facility.
///
/// Asserted, not derived from either source.
pub const VETS_PER_SOLO_FACILITY: f64 = 1.0;

/// Smallest share the input surface offers.
pub const SOLO_SHARE_MIN: u8 = 0;
/// Largest share the input surface offers.
pub const SOLO_SHARE_MAX: u8 = 80;
/// Slider increment.
pub const SOLO_SHARE_STEP: u8 = 5;
/// Share selected when none is given.
pub const SOLO_SHARE_DEFAULT: u8 = 20;

/// Returns true when `pct` is a value the slider can produce.
pub fn is_valid_solo_share(pct: u8) -> bool {
    (SOLO_SHARE_MIN..=SOLO_SHARE_MAX).contains(&pct) && pct % SOLO_SHARE_STEP == 0
}

/// Every value the slider can produce, ascending.
pub fn solo_share_steps() -> impl Iterator<Item = u8> {
    (SOLO_SHARE_MIN..=SOLO_SHARE_MAX).step_by(usize::from(SOLO_SHARE_STEP))
}

/// User-controlled scenario parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioInput {
    pub province: Province,
    pub solo_share_pct: u8,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self {
            province: Province::Qc,
            solo_share_pct: SOLO_SHARE_DEFAULT,
        }
    }
}

/// Estimated split of facilities and veterinarians. Unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioEstimate {
    pub solo_facilities: f64,
    pub multi_facilities: f64,
    pub solo_vets: f64,
    pub multi_vets: f64,
}

/// Applies `solo_share_pct` to a jurisdiction's aggregates.
///
/// `solo_facilities` is not clamped against `facilities`; only `multi_vets`
/// is floored at zero.
pub fn estimate(active_vets: f64, facilities: f64, solo_share_pct: f64) -> ScenarioEstimate {
    let solo_facilities = facilities * (solo_share_pct / 100.0);
    let multi_facilities = facilities - solo_facilities;
    let solo_vets = solo_facilities * VETS_PER_SOLO_FACILITY;
    let multi_vets = (active_vets - solo_vets).max(0.0);

    ScenarioEstimate {
        solo_facilities,
        multi_facilities,
        solo_vets,
        multi_vets,
    }
}
