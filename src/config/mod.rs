//! Configuration loading and management for the Payroll Preview Engine.
//!
//! This module provides functionality to load preview configurations from YAML
//! files: the statutory rates used for PAYE, UIF, and SDL, and the multipliers
//! displayed on the rate panel.
//!
//! # Example
//!
//! ```no_run
//! use payroll_preview::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/za").unwrap();
//! println!("PAYE rate: {}", config.statutory().paye_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PAYE_RATE, DEFAULT_SDL_RATE, DEFAULT_UIF_CEILING, DEFAULT_UIF_RATE, PreviewConfig,
    RatePanelConfig, RatePanelMultipliers, StatutoryConfig, StatutoryRates,
};
