//! Province entity covering the twelve CVMA reporting jurisdictions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A Canadian jurisdiction as listed in the CVMA provincial figures.
///
/// Nunavut does not appear in the CVMA figures. The Yukon keeps the
/// report's `YK` code rather than the postal `YT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Province {
    On,
    Qc,
    Ab,
    Bc,
    Sk,
    Ns,
    Mb,
    Nb,
    Pe,
    Nl,
    Yk,
    Nt,
}

impl Province {
    /// All jurisdictions in the order the CVMA figures list them.
    pub const ALL: [Province; 12] = [
        Province::On,
        Province::Qc,
        Province::Ab,
        Province::Bc,
        Province::Sk,
        Province::Ns,
        Province::Mb,
        Province::Nb,
        Province::Pe,
        Province::Nl,
        Province::Yk,
        Province::Nt,
    ];

    /// Two-letter code used by the CVMA figures.
    pub fn code(self) -> &'static str {
        match self {
            Province::On => "ON",
            Province::Qc => "QC",
            Province::Ab => "AB",
            Province::Bc => "BC",
            Province::Sk => "SK",
            Province::Ns => "NS",
            Province::Mb => "MB",
            Province::Nb => "NB",
            Province::Pe => "PE",
            Province::Nl => "NL",
            Province::Yk => "YK",
            Province::Nt => "NT",
        }
    }

    /// Display label, e.g. `Québec (QC)`.
    pub fn name(self) -> &'static str {
        match self {
            Province::On => "Ontario (ON)",
            Province::Qc => "Québec (QC)",
            Province::Ab => "Alberta (AB)",
            Province::Bc => "Colombie-Britannique (BC)",
            Province::Sk => "Saskatchewan (SK)",
            Province::Ns => "Nouvelle-Écosse (NS)",
            Province::Mb => "Manitoba (MB)",
            Province::Nb => "Nouveau-Brunswick (NB)",
            Province::Pe => "Île-du-Prince-Édouard (PE)",
            Province::Nl => "Terre-Neuve-et-Labrador (NL)",
            Province::Yk => "Yukon (YK)",
            Province::Nt => "Territoires du Nord-Ouest (NT)",
        }
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a jurisdiction code is not one of the twelve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown jurisdiction code '{0}'")]
pub struct UnknownProvince(pub String);

impl FromStr for Province {
    type Err = UnknownProvince;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Province::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownProvince(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("QC".parse::<Province>().unwrap(), Province::Qc);
        assert_eq!("on".parse::<Province>().unwrap(), Province::On);
        assert_eq!(" yk ".parse::<Province>().unwrap(), Province::Yk);
    }

    #[test]
    fn test_parse_unknown_code() {
        let err = "NU".parse::<Province>().unwrap_err();
        assert_eq!(err, UnknownProvince("NU".to_string()));
        assert!("".parse::<Province>().is_err());
    }

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        for p in Province::ALL {
            assert_eq!(p.code().parse::<Province>().unwrap(), p);
            assert!(p.name().ends_with(&format!("({})", p.code())));
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Province::Qc.to_string(), "Québec (QC)");
    }
}
