//! Main practice types reported by the OMVQ.

/// Headcount of OMVQ members for one main practice type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeType {
    pub label: &'static str,
    pub headcount: u32,
}

impl PracticeType {
    pub const fn new(label: &'static str, headcount: u32) -> Self {
        Self { label, headcount }
    }

    /// Share of `total_members`, in percent rounded to one decimal.
    pub fn share_of(&self, total_members: u32) -> PracticeShare {
        PracticeShare {
            label: self.label,
            headcount: self.headcount,
            share_pct: share_pct(self.headcount, total_members),
        }
    }
}

/// A practice type with its derived share of members.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticeShare {
    pub label: &'static str,
    pub headcount: u32,
    pub share_pct: f64,
}

/// `round(part / total * 100, 1)`.
pub fn share_pct(part: u32, total: u32) -> f64 {
    let pct = f64::from(part) / f64::from(total) * 100.0;
    (pct * 10.0).round() / 10.0
}
