//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export LOG_FORMAT="json"
//! export DEFAULT_JURISDICTION="ON"
//! export DEFAULT_SOLO_SHARE="35"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Read client IP from proxy headers for rate limiting (default: `false`)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting (default: `true`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `DEFAULT_JURISDICTION` - Scenario panel jurisdiction code (default: `QC`)
//! - `DEFAULT_SOLO_SHARE` - Scenario panel solo share in percent (default: `20`)

use anyhow::{Context, Result};
use std::env;

use crate::domain::entities::Province;
use crate::domain::scenario::{
    SOLO_SHARE_DEFAULT, SOLO_SHARE_MAX, SOLO_SHARE_MIN, SOLO_SHARE_STEP, ScenarioInput,
    is_valid_solo_share,
};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub rate_limit_enabled: bool,
    pub static_dir: String,
    /// Jurisdiction preselected on the scenario panel.
    pub default_jurisdiction: Province,
    /// Solo share preselected on the scenario panel.
    pub default_solo_share: u8,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DEFAULT_JURISDICTION` is not a known code or
    /// `DEFAULT_SOLO_SHARE` is not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let defaults = scenario_defaults_from_env()?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            rate_limit_enabled,
            static_dir,
            default_jurisdiction: defaults.province,
            default_solo_share: defaults.solo_share_pct,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `default_solo_share` is not a value the scenario slider offers
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_valid_solo_share(self.default_solo_share) {
            anyhow::bail!(
                "DEFAULT_SOLO_SHARE must be between {} and {} in steps of {}, got {}",
                SOLO_SHARE_MIN,
                SOLO_SHARE_MAX,
                SOLO_SHARE_STEP,
                self.default_solo_share
            );
        }

        if self.static_dir.trim().is_empty() {
            anyhow::bail!("STATIC_DIR must not be empty");
        }

        Ok(())
    }

    /// Scenario parameters used when a request does not specify them.
    pub fn default_scenario(&self) -> ScenarioInput {
        ScenarioInput {
            province: self.default_jurisdiction,
            solo_share_pct: self.default_solo_share,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Rate limiting: {}",
            match (self.rate_limit_enabled, self.behind_proxy) {
                (false, _) => "disabled",
                (true, false) => "peer IP",
                (true, true) => "proxy headers",
            }
        );
        tracing::info!("  Static files: {}", self.static_dir);
        tracing::info!(
            "  Default scenario: {} at {}%",
            self.default_jurisdiction.code(),
            self.default_solo_share
        );
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Reads `DEFAULT_JURISDICTION` and `DEFAULT_SOLO_SHARE` alone.
///
/// Used by [`Config::from_env`] and by tools that need the scenario
/// defaults without the server settings.
///
/// # Errors
///
/// Returns an error if the jurisdiction is not a known code or the share is
/// not a number.
pub fn scenario_defaults_from_env() -> Result<ScenarioInput> {
    let province = match env::var("DEFAULT_JURISDICTION") {
        Ok(code) => code
            .parse::<Province>()
            .context("DEFAULT_JURISDICTION must be one of the twelve CVMA codes")?,
        Err(_) => Province::Qc,
    };

    let solo_share_pct = match env::var("DEFAULT_SOLO_SHARE") {
        Ok(v) => v
            .trim()
            .parse::<u8>()
            .with_context(|| format!("DEFAULT_SOLO_SHARE must be a number, got '{v}'"))?,
        Err(_) => SOLO_SHARE_DEFAULT,
    };

    Ok(ScenarioInput {
        province,
        solo_share_pct,
    })
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
            rate_limit_enabled: true,
            static_dir: "static".to_string(),
            default_jurisdiction: Province::Qc,
            default_solo_share: 20,
        }
    }

    const VARS: [&str; 8] = [
        "LISTEN",
        "LOG_FORMAT",
        "BEHIND_PROXY",
        "RATE_LIMIT_ENABLED",
        "STATIC_DIR",
        "DEFAULT_JURISDICTION",
        "DEFAULT_SOLO_SHARE",
        "RUST_LOG",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.default_solo_share = 85;
        assert!(config.validate().is_err());

        config.default_solo_share = 12;
        assert!(config.validate().is_err());

        config.default_solo_share = 80;
        assert!(config.validate().is_ok());

        config.static_dir = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_scenario() {
        let mut config = config();
        config.default_jurisdiction = Province::Bc;
        config.default_solo_share = 35;

        let input = config.default_scenario();
        assert_eq!(input.province, Province::Bc);
        assert_eq!(input.solo_share_pct, 35);
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_empty() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert!(!config.behind_proxy);
        assert!(config.rate_limit_enabled);
        assert_eq!(config.default_jurisdiction, Province::Qc);
        assert_eq!(config.default_solo_share, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BEHIND_PROXY", "TRUE");
            env::set_var("RATE_LIMIT_ENABLED", "0");
            env::set_var("DEFAULT_JURISDICTION", "on");
            env::set_var("DEFAULT_SOLO_SHARE", "45");
        }

        let config = Config::from_env().unwrap();

        assert!(config.behind_proxy);
        assert!(!config.rate_limit_enabled);
        assert_eq!(config.default_jurisdiction, Province::On);
        assert_eq!(config.default_solo_share, 45);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_values() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DEFAULT_JURISDICTION", "NU");
        }
        assert!(Config::from_env().is_err());

        clear_env();
        unsafe {
            env::set_var("DEFAULT_SOLO_SHARE", "twenty");
        }
        assert!(Config::from_env().is_err());

        clear_env();
        unsafe {
            env::set_var("DEFAULT_SOLO_SHARE", "85");
        }
        assert!(load_from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_scenario_defaults_ignore_server_settings() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "pretty");
            env::set_var("LISTEN", "nowhere");
            env::set_var("DEFAULT_JURISDICTION", "bc");
            env::set_var("DEFAULT_SOLO_SHARE", "35");
        }

        assert!(load_from_env().is_err());
        let defaults = scenario_defaults_from_env().unwrap();
        assert_eq!(defaults.province, Province::Bc);
        assert_eq!(defaults.solo_share_pct, 35);

        clear_env();
    }
}
