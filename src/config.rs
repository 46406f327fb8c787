use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, Level};

use crate::error::DecisionError;
use crate::evaluator::{DEFAULT_HURWICZ_ALPHA, DEFAULT_SUMMARY_ALPHA};

pub const HURWICZ_ALPHA_VAR: &str = "DECISIONSEER_HURWICZ_ALPHA";
pub const SUMMARY_ALPHA_VAR: &str = "DECISIONSEER_SUMMARY_ALPHA";
pub const LOG_LEVEL_VAR: &str = "DECISIONSEER_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Alpha used when Hurwicz is run on its own and none is entered.
    pub hurwicz_alpha: f64,
    /// Alpha used for Hurwicz when every criterion is shown together.
    pub summary_alpha: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hurwicz_alpha: DEFAULT_HURWICZ_ALPHA,
            summary_alpha: DEFAULT_SUMMARY_ALPHA,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn max_level(&self) -> Result<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| anyhow::anyhow!("Unknown log level '{}'", self.log_level))
    }
}

pub fn load_config() -> Result<Config> {
    load_config_from(|key| env::var(key).ok())
}

/// Applies overrides from `lookup` on top of the defaults.
pub fn load_config_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(alpha) = lookup(HURWICZ_ALPHA_VAR) {
        config.hurwicz_alpha = parse_alpha(HURWICZ_ALPHA_VAR, &alpha)?;
    }

    if let Some(alpha) = lookup(SUMMARY_ALPHA_VAR) {
        config.summary_alpha = parse_alpha(SUMMARY_ALPHA_VAR, &alpha)?;
    }

    if let Some(level) = lookup(LOG_LEVEL_VAR) {
        config.log_level = level.trim().to_lowercase();
        config
            .max_level()
            .with_context(|| format!("{} is not a valid log level", LOG_LEVEL_VAR))?;
    }

    info!("Configuration loaded: {:?}", config);

    Ok(config)
}

fn parse_alpha(var: &str, raw: &str) -> Result<f64> {
    let alpha: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{} must be a number, got '{}'", var, raw))?;

    if !(0.0..=1.0).contains(&alpha) {
        return Err(DecisionError::invalid_parameter(format!(
            "{} must be between 0 and 1, got {}",
            var, alpha
        ))
        .into());
    }

    Ok(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = load_config_from(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.hurwicz_alpha, 0.5);
        assert_eq!(config.summary_alpha, 0.6);
        assert_eq!(config.max_level().unwrap(), Level::WARN);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = load_config_from(lookup(&[
            (HURWICZ_ALPHA_VAR, "0.3"),
            (SUMMARY_ALPHA_VAR, " 1 "),
            (LOG_LEVEL_VAR, "DEBUG"),
        ]))
        .unwrap();

        assert_eq!(config.hurwicz_alpha, 0.3);
        assert_eq!(config.summary_alpha, 1.0);
        assert_eq!(config.max_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        let err = load_config_from(lookup(&[(HURWICZ_ALPHA_VAR, "half")])).unwrap_err();
        assert!(err.to_string().contains(HURWICZ_ALPHA_VAR));

        let err = load_config_from(lookup(&[(SUMMARY_ALPHA_VAR, "1.2")])).unwrap_err();
        assert!(err.downcast_ref::<DecisionError>().is_some());

        assert!(load_config_from(lookup(&[(LOG_LEVEL_VAR, "loud")])).is_err());
    }
}
