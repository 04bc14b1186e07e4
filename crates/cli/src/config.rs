//! Configuration loading and validation for the `ostora` shell binary.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated shell configuration.
///
/// Everything has a production default; environment variables exist for
/// staging deployments that run the API under a different apex domain.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Apex domain of the remote API. A fresh subdomain label is generated
    /// in front of it for every request.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_domain() -> String {
    ostora_client::fetch::API_DOMAIN.into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.api_domain.trim().is_empty() {
            anyhow::bail!("API_DOMAIN must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(default_api_domain(), "s-25.shop");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_domain() {
        let cfg = Config {
            api_domain: "  ".into(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let cfg = Config {
            api_domain: default_api_domain(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
    }
}
