use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;
use xi_core::Price;
use xi_rules::{RuleError, create_rules};

use super::types::RunnerConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Budget must not be negative: {0}")]
    NegativeBudget(Price),
    #[error("Invalid rule configuration: {0}")]
    RuleError(#[from] RuleError),
}

/// Load runner configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunnerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<RunnerConfig, ConfigError> {
    let config: RunnerConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<RunnerConfig, ConfigError> {
    let default_config = include_str!("runner_config.json");
    load_config_from_str(default_config)
}

impl RunnerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget < Decimal::ZERO {
            return Err(ConfigError::NegativeBudget(self.budget));
        }
        create_rules(self.rules.as_slice(), &self.rule_params())?;
        Ok(())
    }
}
