//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading preview
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    PreviewConfig, RatePanelConfig, RatePanelMultipliers, StatutoryConfig, StatutoryRates,
};

/// Largest multiplier the rate panel accepts.
const MAX_MULTIPLIER: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Loads and provides access to preview configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to statutory rates and rate panel multipliers.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/za/
/// ├── statutory.yaml   # PAYE, UIF, and SDL rates
/// └── rate_panel.yaml  # Multipliers shown on the rate panel
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_preview::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/za").unwrap();
/// println!("UIF ceiling: R {}", loader.statutory().uif_ceiling);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PreviewConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/za")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any rate is negative or a multiplier is not positive
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryConfig>(&statutory_path)?.statutory;
        Self::validate_statutory(&statutory, &statutory_path)?;

        let rate_panel_path = path.join("rate_panel.yaml");
        let rate_panel = Self::load_yaml::<RatePanelConfig>(&rate_panel_path)?.multipliers;
        Self::validate_rate_panel(&rate_panel, &rate_panel_path)?;

        Ok(Self {
            config: PreviewConfig::new(statutory, rate_panel),
        })
    }

    /// Creates a loader holding the built-in defaults.
    pub fn with_defaults() -> Self {
        Self::default()
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

    fn validate_statutory(rates: &StatutoryRates, path: &Path) -> EngineResult<()> {
        let fields = [
            ("paye_rate", rates.paye_rate),
            ("uif_rate", rates.uif_rate),
            ("uif_ceiling", rates.uif_ceiling),
            ("sdl_rate", rates.sdl_rate),
        ];

        for (name, value) in fields {
            if value < Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("{} must not be negative, got {}", name, value),
                });
            }
        }

        let fractions = [
            ("paye_rate", rates.paye_rate),
            ("uif_rate", rates.uif_rate),
            ("sdl_rate", rates.sdl_rate),
        ];

        for (name, value) in fractions {
            if value > Decimal::ONE {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("{} is a fraction and must not exceed 1, got {}", name, value),
                });
            }
        }

        Ok(())
    }

    fn validate_rate_panel(multipliers: &RatePanelMultipliers, path: &Path) -> EngineResult<()> {
        let fields = [
            ("overtime", multipliers.overtime),
            ("sunday", multipliers.sunday),
            ("public_holiday", multipliers.public_holiday),
        ];

        for (name, value) in fields {
            if value <= Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("{} multiplier must be positive, got {}", name, value),
                });
            }
            if value > MAX_MULTIPLIER {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "{} multiplier must not exceed {}, got {}",
                        name, MAX_MULTIPLIER, value
                    ),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying preview configuration.
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Returns the statutory rates.
    pub fn statutory(&self) -> &StatutoryRates {
        self.config.statutory()
    }

    /// Returns the rate panel multipliers.
    pub fn rate_panel(&self) -> &RatePanelMultipliers {
        self.config.rate_panel()
    }
}
