//! Worked-time entry model.
//!
//! A [`WorkedTimeEntry`] is the caller-owned, mutable half of a preview: the
//! hours, pieces, allowances, bonus, and ad-hoc deduction rows currently typed
//! into the capture form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::deduction::{AmountType, DeductionRow, DeductionSource, is_medical_aid_label};
use super::snapshot::{CompensationSnapshot, MAX_FIGURE, SalaryType};

/// A deduction row added interactively on the capture form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdHocDeduction {
    /// Optional beneficiary name typed by the user.
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    /// Optional type label typed by the user.
    #[serde(default)]
    pub type_label: Option<String>,
    /// Fixed amount or percentage of gross pay. `Calculated` is reserved for
    /// recurring rows and fails [`WorkedTimeEntry::validate`].
    pub amount_type: AmountType,
    /// The amount or percentage.
    #[serde(default)]
    pub value: Decimal,
}

impl AdHocDeduction {
    /// A fixed-amount ad-hoc deduction.
    pub fn fixed(value: Decimal) -> Self {
        Self {
            beneficiary_name: None,
            type_label: None,
            amount_type: AmountType::Fixed,
            value,
        }
    }

    /// A percentage-of-gross ad-hoc deduction.
    pub fn percentage(value: Decimal) -> Self {
        Self {
            beneficiary_name: None,
            type_label: None,
            amount_type: AmountType::Percentage,
            value,
        }
    }

    /// Projects the ad-hoc row into a [`DeductionRow`] for aggregation.
    pub fn to_row(&self) -> DeductionRow {
        let type_label = self.type_label.clone().unwrap_or_default();
        DeductionRow {
            beneficiary_name: self.beneficiary_name.clone().unwrap_or_default(),
            is_medical_aid: is_medical_aid_label(&type_label),
            type_label,
            amount_type: self.amount_type,
            value: self.value,
            source: DeductionSource::AdHoc,
        }
    }
}

/// The worked-time figures for one recompute.
///
/// Every field defaults to zero so partial form state deserialises cleanly.
///
/// # Example
///
/// ```
/// use payroll_preview::models::WorkedTimeEntry;
/// use rust_decimal::Decimal;
///
/// let entry = WorkedTimeEntry {
///     ordinary_hours: Decimal::new(160, 0),
///     overtime_hours: Decimal::new(10, 0),
///     ..Default::default()
/// };
/// assert!(entry.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkedTimeEntry {
    /// Ordinary hours (or days, for daily-rated employees).
    pub ordinary_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Hours worked on Sundays.
    pub sunday_hours: Decimal,
    /// Hours worked on public holidays.
    pub public_holiday_hours: Decimal,
    /// Pieces produced, for piece workers.
    pub pieces_produced: Decimal,
    /// Allowances for the period.
    pub allowances: Decimal,
    /// Bonus for the period.
    pub bonus_amount: Decimal,
    /// Deduction rows added on the form, in display order.
    pub ad_hoc_deductions: Vec<AdHocDeduction>,
}

impl WorkedTimeEntry {
    /// Builds the entry a fresh capture form starts with.
    ///
    /// Ordinary hours are pre-filled with the month's working hours, except for
    /// daily-rated employees whose ordinary field counts days and starts empty.
    /// Allowances are pre-filled from the employee's defaults.
    pub fn seeded(snapshot: &CompensationSnapshot, work_hours: Decimal) -> Self {
        let ordinary_hours = match snapshot.salary_type {
            SalaryType::Daily => Decimal::ZERO,
            _ => work_hours,
        };

        Self {
            ordinary_hours,
            allowances: snapshot.default_allowances,
            ..Default::default()
        }
    }

    /// Checks that every figure is non-negative and within range.
    ///
    /// Figures must not exceed [`MAX_FIGURE`]; ad-hoc percentages must not
    /// exceed 100, and ad-hoc rows must be fixed or percentage. The calculator
    /// itself accepts any values; this check is for callers that accept entries
    /// from outside, such as the HTTP API.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEntry` naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("ordinary_hours", self.ordinary_hours),
            ("overtime_hours", self.overtime_hours),
            ("sunday_hours", self.sunday_hours),
            ("public_holiday_hours", self.public_holiday_hours),
            ("pieces_produced", self.pieces_produced),
            ("allowances", self.allowances),
            ("bonus_amount", self.bonus_amount),
        ];

        for (field, value) in fields {
            check_figure(field, value, MAX_FIGURE)?;
        }

        for (index, deduction) in self.ad_hoc_deductions.iter().enumerate() {
            let limit = match deduction.amount_type {
                AmountType::Fixed => MAX_FIGURE,
                AmountType::Percentage => Decimal::ONE_HUNDRED,
                AmountType::Calculated => {
                    return Err(EngineError::InvalidEntry {
                        field: format!("ad_hoc_deductions[{}].amount_type", index),
                        message: "ad-hoc deductions must be fixed or percentage".to_string(),
                    });
                }
            };
            check_figure(
                &format!("ad_hoc_deductions[{}].value", index),
                deduction.value,
                limit,
            )?;
        }

        Ok(())
    }
}

fn check_figure(field: &str, value: Decimal, limit: Decimal) -> EngineResult<()> {
    let message = if value.is_sign_negative() && !value.is_zero() {
        format!("must not be negative, got {}", value)
    } else if value > limit {
        format!("must not exceed {}, got {}", limit, value)
    } else {
        return Ok(());
    };

    Err(EngineError::InvalidEntry {
        field: field.to_string(),
        message,
    })
}
