//! Query parameters accepted by the dashboard panels.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{JurisdictionSort, Province};
use crate::domain::scenario::{SOLO_SHARE_STEP, ScenarioInput};
use crate::error::AppError;

/// `GET /canada` parameters.
#[derive(Debug, Default, Deserialize)]
pub struct CanadaQuery {
    /// `active_vets`, `facilities` or `ratio`.
    pub sort: Option<String>,
}

impl CanadaQuery {
    /// Column the jurisdiction table is ordered by.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown sort key.
    pub fn sort(&self) -> Result<JurisdictionSort, AppError> {
        match self.sort.as_deref() {
            None | Some("") => Ok(JurisdictionSort::default()),
            Some(key) => Ok(key.parse()?),
        }
    }
}

/// `GET /scenario` parameters.
///
/// Both fields fall back to the configured defaults when absent.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ScenarioQuery {
    /// Two-letter CVMA jurisdiction code.
    pub jurisdiction: Option<String>,

    /// Hypothetical share of single-vet facilities, in percent.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 0, max = 80))]
    pub solo_share: Option<u8>,
}

impl ScenarioQuery {
    /// Resolves the query into scenario parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the share is out of range or off
    /// step, and [`AppError::NotFound`] for an unknown jurisdiction code.
    pub fn resolve(&self, defaults: ScenarioInput) -> Result<ScenarioInput, AppError> {
        self.validate()?;

        if let Some(share) = self.solo_share
            && share % SOLO_SHARE_STEP != 0
        {
            return Err(AppError::bad_request(
                format!("solo_share must be a multiple of {SOLO_SHARE_STEP}"),
                json!({ "solo_share": share }),
            ));
        }

        let province = match self.jurisdiction.as_deref() {
            None | Some("") => defaults.province,
            Some(code) => code.parse::<Province>()?,
        };

        Ok(ScenarioInput {
            province,
            solo_share_pct: self.solo_share.unwrap_or(defaults.solo_share_pct),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(jurisdiction: Option<&str>, solo_share: Option<u8>) -> ScenarioQuery {
        ScenarioQuery {
            jurisdiction: jurisdiction.map(str::to_string),
            solo_share,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let defaults = ScenarioInput {
            province: Province::Ab,
            solo_share_pct: 35,
        };
        assert_eq!(query(None, None).resolve(defaults).unwrap(), defaults);
    }

    #[test]
    fn test_explicit_values() {
        let input = query(Some("on"), Some(80))
            .resolve(ScenarioInput::default())
            .unwrap();
        assert_eq!(input.province, Province::On);
        assert_eq!(input.solo_share_pct, 80);
    }

    #[test]
    fn test_share_out_of_range() {
        let err = query(None, Some(85))
            .resolve(ScenarioInput::default())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_share_off_step() {
        let err = query(None, Some(22))
            .resolve(ScenarioInput::default())
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_empty_jurisdiction_uses_default() {
        let defaults = ScenarioInput {
            province: Province::Bc,
            solo_share_pct: 20,
        };
        let input = query(Some(""), None).resolve(defaults).unwrap();
        assert_eq!(input.province, Province::Bc);
    }

    #[test]
    fn test_unknown_jurisdiction() {
        let err = query(Some("NU"), None)
            .resolve(ScenarioInput::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_share_parsed_from_string() {
        let q: ScenarioQuery =
            serde_json::from_str(r#"{"jurisdiction": "QC", "solo_share": "45"}"#).unwrap();
        assert_eq!(q.solo_share, Some(45));
        assert!(serde_json::from_str::<ScenarioQuery>(r#"{"solo_share": "abc"}"#).is_err());
    }

    #[test]
    fn test_range_matches_slider_bounds() {
        use crate::domain::scenario::{SOLO_SHARE_MAX, SOLO_SHARE_MIN};

        assert!(query(None, Some(SOLO_SHARE_MIN)).validate().is_ok());
        assert!(query(None, Some(SOLO_SHARE_MAX)).validate().is_ok());
        assert!(query(None, Some(SOLO_SHARE_MAX + 1)).validate().is_err());
    }

    #[test]
    fn test_canada_sort() {
        let q = CanadaQuery { sort: None };
        assert_eq!(q.sort().unwrap(), JurisdictionSort::ActiveVets);

        let q = CanadaQuery {
            sort: Some("ratio".to_string()),
        };
        assert_eq!(q.sort().unwrap(), JurisdictionSort::Ratio);

        let q = CanadaQuery {
            sort: Some("name".to_string()),
        };
        assert!(matches!(q.sort().unwrap_err(), AppError::Validation { .. }));
    }
}
