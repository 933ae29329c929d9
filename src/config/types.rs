//! Configuration types for the payroll preview.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every structure has a
//! built-in default matching the statutory figures the preview ships with.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Flat PAYE approximation rate (18%).
pub const DEFAULT_PAYE_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// UIF contribution rate (1%).
pub const DEFAULT_UIF_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Monthly remuneration ceiling for UIF contributions.
pub const DEFAULT_UIF_CEILING: Decimal = Decimal::from_parts(1_771_200, 0, 0, false, 2);

/// SDL rate (1%).
pub const DEFAULT_SDL_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Statutory deduction rates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatutoryRates {
    /// Flat PAYE rate applied to adjusted gross pay.
    pub paye_rate: Decimal,
    /// UIF contribution rate.
    pub uif_rate: Decimal,
    /// Remuneration ceiling for UIF.
    pub uif_ceiling: Decimal,
    /// SDL rate applied to adjusted gross pay.
    pub sdl_rate: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            paye_rate: DEFAULT_PAYE_RATE,
            uif_rate: DEFAULT_UIF_RATE,
            uif_ceiling: DEFAULT_UIF_CEILING,
            sdl_rate: DEFAULT_SDL_RATE,
        }
    }
}

/// Statutory configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// The statutory rates.
    pub statutory: StatutoryRates,
}

/// Multipliers shown on the rate panel.
///
/// These are display figures only. The preview calculation prices premiums
/// with its own fixed multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatePanelMultipliers {
    /// Overtime multiplier.
    pub overtime: Decimal,
    /// Sunday multiplier.
    pub sunday: Decimal,
    /// Public holiday multiplier.
    pub public_holiday: Decimal,
}

impl Default for RatePanelMultipliers {
    fn default() -> Self {
        Self {
            overtime: Decimal::new(15, 1),
            sunday: Decimal::new(20, 1),
            public_holiday: Decimal::new(25, 1),
        }
    }
}

/// Rate panel configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatePanelConfig {
    /// The multipliers shown on the rate panel.
    pub multipliers: RatePanelMultipliers,
}

/// The complete preview configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Statutory deduction rates.
    statutory: StatutoryRates,
    /// Rate panel multipliers.
    rate_panel: RatePanelMultipliers,
}

impl PreviewConfig {
    /// Creates a new PreviewConfig from its component parts.
    pub fn new(statutory: StatutoryRates, rate_panel: RatePanelMultipliers) -> Self {
        Self {
            statutory,
            rate_panel,
        }
    }

    /// Returns the statutory rates.
    pub fn statutory(&self) -> &StatutoryRates {
        &self.statutory
    }

    /// Returns the rate panel multipliers.
    pub fn rate_panel(&self) -> &RatePanelMultipliers {
        &self.rate_panel
    }
}
