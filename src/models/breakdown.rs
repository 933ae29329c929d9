//! Payroll breakdown models.
//!
//! This module contains the [`PayrollBreakdown`] returned by every recompute,
//! its per-row [`DeductionLine`]s, the [`TaxBreakdown`] view, and the audit
//! steps that record each stage of the calculation.
//!
//! All monetary values are raw [`Decimal`]s; formatting is left to the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::deduction::{AmountType, DeductionSource};
use super::snapshot::SalaryType;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The priced amount of one deduction row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The beneficiary receiving the deduction.
    pub beneficiary_name: String,
    /// The deduction or beneficiary type label.
    pub type_label: String,
    /// Whether the row is recurring or was added ad hoc.
    pub source: DeductionSource,
    /// How `value` was interpreted.
    pub amount_type: AmountType,
    /// The row's configured value.
    pub value: Decimal,
    /// The amount deducted for this recompute.
    pub amount: Decimal,
}

/// The full result of one preview recompute.
///
/// Recomputing from the same snapshot and entry yields an identical breakdown.
///
/// # Example
///
/// ```
/// use payroll_preview::calculation::PreviewSession;
/// use payroll_preview::models::{CompensationSnapshot, SalaryType, WorkedTimeEntry};
/// use rust_decimal::Decimal;
///
/// let session = PreviewSession::new(CompensationSnapshot::new(SalaryType::Hourly, Decimal::new(100, 0)));
/// let entry = WorkedTimeEntry {
///     ordinary_hours: Decimal::new(160, 0),
///     ..Default::default()
/// };
///
/// let breakdown = session.calculate(&entry);
/// assert_eq!(breakdown.gross_pay, Decimal::new(16000, 0));
/// assert_eq!(breakdown.net_pay, breakdown.gross_pay - breakdown.total_deductions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The salary type the breakdown was computed for.
    pub salary_type: SalaryType,
    /// The hourly rate derived from the snapshot; `None` for piece workers.
    pub hourly_rate: Option<Decimal>,
    /// Pay for ordinary time, days, or pieces.
    pub ordinary_pay: Decimal,
    /// Overtime premium pay.
    pub overtime_pay: Decimal,
    /// Sunday premium pay.
    pub sunday_pay: Decimal,
    /// Public-holiday premium pay.
    pub public_holiday_pay: Decimal,
    /// Allowances included in gross pay.
    pub allowances: Decimal,
    /// Bonus included in gross pay.
    pub bonus_amount: Decimal,
    /// Ordinary, premium, allowance, and bonus pay combined.
    pub gross_pay: Decimal,
    /// Fringe benefit added to the statutory base.
    pub fringe_benefit_amount: Decimal,
    /// Gross pay plus fringe benefit; the base for PAYE, UIF, and SDL.
    pub adjusted_gross_pay: Decimal,
    /// Medical aid tax credit applied against PAYE.
    pub medical_aid_tax_credit: Decimal,
    /// PAYE before the medical aid credit is applied.
    pub paye_before_credit: Decimal,
    /// PAYE withheld.
    pub paye: Decimal,
    /// UIF contribution.
    pub uif: Decimal,
    /// Skills development levy.
    pub sdl: Decimal,
    /// Priced recurring and ad-hoc deduction rows, in display order.
    pub deduction_lines: Vec<DeductionLine>,
    /// Sum of all deduction line amounts.
    pub recurring_total: Decimal,
    /// PAYE, UIF, SDL, and deduction rows combined.
    pub total_deductions: Decimal,
    /// Gross pay less total deductions. May be negative.
    pub net_pay: Decimal,
    /// Audit steps for each calculation stage.
    pub audit_trace: Vec<AuditStep>,
}

impl PayrollBreakdown {
    /// Overtime, Sunday, and public-holiday pay combined.
    pub fn premium_pay(&self) -> Decimal {
        self.overtime_pay + self.sunday_pay + self.public_holiday_pay
    }

    /// Builds the tax breakdown view of this result.
    pub fn tax_breakdown(&self) -> TaxBreakdown {
        TaxBreakdown {
            gross_income: self.gross_pay,
            allowances: self.allowances,
            fringe_benefit: self.fringe_benefit_amount,
            taxable_income: self.adjusted_gross_pay,
            paye_before_credit: self.paye_before_credit,
            medical_aid_tax_credit: self.medical_aid_tax_credit,
            paye_after_credit: self.paye,
            uif: self.uif,
            sdl: self.sdl,
            net_pay: self.net_pay,
        }
    }
}

/// A tax-focused summary of a [`PayrollBreakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Gross pay.
    pub gross_income: Decimal,
    /// Allowances included in gross pay.
    pub allowances: Decimal,
    /// Fringe benefit value.
    pub fringe_benefit: Decimal,
    /// Gross pay plus fringe benefit.
    pub taxable_income: Decimal,
    /// PAYE before the medical aid credit.
    pub paye_before_credit: Decimal,
    /// Medical aid tax credit.
    pub medical_aid_tax_credit: Decimal,
    /// PAYE after the medical aid credit.
    pub paye_after_credit: Decimal,
    /// UIF contribution.
    pub uif: Decimal,
    /// Skills development levy.
    pub sdl: Decimal,
    /// Net pay.
    pub net_pay: Decimal,
}
