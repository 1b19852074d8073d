//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AwardRule, AwardRuleSet, EngineConfig, LeaveAccrualRule, SuperRateEntry, SuperRateSchedule,
};

/// File structure of `award_rules.yaml`.
#[derive(Debug, Deserialize)]
struct AwardRulesFile {
    rules: Vec<AwardRule>,
}

/// File structure of `super_rates.yaml`.
#[derive(Debug, Deserialize)]
struct SuperRatesFile {
    schedule: Vec<SuperRateEntry>,
}

/// File structure of `leave_rules.yaml`.
#[derive(Debug, Deserialize)]
struct LeaveRulesFile {
    rules: Vec<LeaveAccrualRule>,
}

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// assembles the [`EngineConfig`] used by the calculation components.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── award_rules.yaml   # Overtime and penalty rules
/// ├── super_rates.yaml   # Effective-dated super guarantee schedule
/// └── leave_rules.yaml   # Leave accrual rules
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// let overtime = loader.config().award_rules().overtime_rule();
/// assert!(overtime.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/standard")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let award_rules_path = path.join("award_rules.yaml");
        let award_rules = Self::load_yaml::<AwardRulesFile>(&award_rules_path)?;

        let super_rates_path = path.join("super_rates.yaml");
        let super_rates = Self::load_yaml::<SuperRatesFile>(&super_rates_path)?;

        let leave_rules_path = path.join("leave_rules.yaml");
        let leave_rules = Self::load_yaml::<LeaveRulesFile>(&leave_rules_path)?;

        let config = EngineConfig::new(
            AwardRuleSet::new(award_rules.rules),
            SuperRateSchedule::new(super_rates.schedule),
            leave_rules.rules,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
