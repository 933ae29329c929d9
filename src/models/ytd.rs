//! Year-to-date payroll summary.
//!
//! The year-to-date summary is fetched separately from the employee snapshot
//! and shown next to the preview. Failing to load it never blocks the
//! calculator.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Month in which the tax year starts (March).
pub const TAX_YEAR_START_MONTH: u32 = 3;

/// Returns the first day of the tax year containing `date`.
///
/// Tax years run from 1 March to the end of February.
///
/// # Example
///
/// ```
/// use payroll_preview::models::tax_year_start;
/// use chrono::NaiveDate;
///
/// let feb = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
/// assert_eq!(tax_year_start(feb), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
///
/// let march = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// assert_eq!(tax_year_start(march), march);
/// ```
pub fn tax_year_start(date: NaiveDate) -> NaiveDate {
    let year = if date.month() >= TAX_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    };
    // 1 March exists in every year.
    NaiveDate::from_ymd_opt(year, TAX_YEAR_START_MONTH, 1).unwrap_or(date)
}

/// Returns the date year-to-date totals are accumulated from.
///
/// This is the later of the tax year start and the employee's start date.
pub fn ytd_period_start(today: NaiveDate, employment_start: Option<NaiveDate>) -> NaiveDate {
    let start = tax_year_start(today);
    match employment_start {
        Some(employment_start) if employment_start > start => employment_start,
        _ => start,
    }
}

/// Year-to-date totals for an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YtdSummary {
    /// Gross pay year to date.
    pub gross_pay_ytd: Decimal,
    /// Taxable income year to date.
    pub taxable_income_ytd: Decimal,
    /// PAYE year to date.
    pub paye_ytd: Decimal,
    /// UIF year to date.
    pub uif_ytd: Decimal,
    /// SDL year to date.
    pub sdl_ytd: Decimal,
    /// Bonuses year to date.
    pub bonus_ytd: Decimal,
    /// Allowances year to date.
    pub allowances_ytd: Decimal,
    /// Fringe benefits year to date.
    pub fringe_benefit_ytd: Decimal,
    /// Net pay year to date.
    pub net_pay_ytd: Decimal,
}

impl YtdSummary {
    /// Decodes a summary from the year-to-date endpoint's JSON.
    ///
    /// # Errors
    ///
    /// Returns `SummaryUnavailable` when the payload cannot be decoded or is an
    /// error object.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| EngineError::SummaryUnavailable {
                message: format!("malformed year-to-date summary: {}", e),
            })?;

        if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
            return Err(EngineError::SummaryUnavailable {
                message: error.to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| EngineError::SummaryUnavailable {
            message: format!("malformed year-to-date summary: {}", e),
        })
    }

    /// Total statutory deductions (PAYE, UIF, SDL) year to date.
    pub fn statutory_total(&self) -> Decimal {
        self.paye_ytd + self.uif_ytd + self.sdl_ytd
    }
}
