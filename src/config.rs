//! Configuration management for the credential registry
//!
//! Values come from built-in defaults, an optional `config.toml` in the
//! working directory, and `CRED_REGISTRY_*` environment variables, in that
//! order of precedence.

use crate::registry::StrengthPolicy;
use crate::registry::strength::DEFAULT_MIN_LENGTH;
use config::{Config, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config";
const ENV_PREFIX: &str = "CRED_REGISTRY";

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Minimum length for a strong password
    /// Environment: CRED_REGISTRY_MIN_PASSWORD_LENGTH
    pub min_password_length: usize,

    /// List the failed requirements when a weak password is registered
    /// Environment: CRED_REGISTRY_SHOW_WEAKNESS_REASONS
    pub show_weakness_reasons: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_LENGTH,
            show_weakness_reasons: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration using `path` (without extension) as the optional file source
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("min_password_length", defaults.min_password_length as i64)?
            .set_default("show_weakness_reasons", defaults.show_weakness_reasons)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        // The length rule may only be tightened, never relaxed below the default.
        if self.min_password_length < DEFAULT_MIN_LENGTH {
            return Err(config::ConfigError::Message(format!(
                "min_password_length must be at least {}",
                DEFAULT_MIN_LENGTH
            )));
        }

        Ok(())
    }

    /// Strength policy derived from this configuration
    pub fn strength_policy(&self) -> StrengthPolicy {
        StrengthPolicy::new(self.min_password_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StrengthVerdict;

    #[test]
    fn defaults_match_fixed_rule() {
        let config = AppConfig::default();
        assert_eq!(config.min_password_length, 8);
        assert!(config.show_weakness_reasons);
        assert_eq!(config.strength_policy(), StrengthPolicy::default());
    }

    use std::fs;

    // Writes `contents` to `<tmp>/<name>.toml` and returns the path without extension
    fn write_config(name: &str, contents: &str) -> String {
        let base = std::env::temp_dir().join(format!("{}-{}", name, std::process::id()));
        fs::write(base.with_extension("toml"), contents).unwrap();
        base.to_string_lossy().to_string()
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        // CRED_REGISTRY_* variables from the environment would override the defaults
        if std::env::vars().any(|(key, _)| key.starts_with(ENV_PREFIX)) {
            return;
        }

        let config = AppConfig::load_from("does-not-exist/credential-registry").unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.min_password_length, defaults.min_password_length);
        assert_eq!(config.show_weakness_reasons, defaults.show_weakness_reasons);
    }

    #[test]
    fn min_length_below_default_is_rejected() {
        for min_password_length in [0, 1, 4, 7] {
            let config = AppConfig {
                min_password_length,
                show_weakness_reasons: false,
            };
            assert!(config.validate().is_err(), "{min_password_length}");
        }
    }

    #[test]
    fn stricter_min_length_is_accepted() {
        let config = AppConfig {
            min_password_length: 12,
            show_weakness_reasons: true,
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.strength_policy().classify("Secret1!"), StrengthVerdict::Weak);
    }

    #[test]
    fn loosened_length_in_file_is_rejected() {
        let path = write_config("cred-registry-loose", "min_password_length = 4\n");
        let result = AppConfig::load_from(&path);
        let _ = fs::remove_file(format!("{}.toml", path));

        assert!(result.is_err());
    }
}
