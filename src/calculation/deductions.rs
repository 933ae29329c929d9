//! Deduction aggregation functionality.
//!
//! This module prices recurring and ad-hoc deduction rows against gross pay and
//! sums them. Rows are priced from scratch on every call, so changing one row's
//! type or value re-prices it on the next recompute.

use rust_decimal::Decimal;

use crate::models::{AdHocDeduction, AmountType, AuditStep, DeductionLine, DeductionRow};

/// The result of a deduction aggregation.
#[derive(Debug, Clone)]
pub struct DeductionAggregationResult {
    /// One priced line per row, recurring rows first, then ad-hoc rows.
    pub lines: Vec<DeductionLine>,
    /// Sum of all line amounts.
    pub total: Decimal,
    /// The audit step recording this aggregation.
    pub audit_step: AuditStep,
}

/// Prices a single deduction row.
///
/// - Fixed: the value.
/// - Percentage: `gross_pay × value / 100`. The base is plain gross pay, not
///   adjusted gross pay.
/// - Calculated: the value verbatim; medical-aid amounts are resolved upstream.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::deduction_amount;
/// use payroll_preview::models::{AmountType, DeductionRow};
/// use rust_decimal::Decimal;
///
/// let row = DeductionRow::recurring("Pension Fund", "Retirement", AmountType::Percentage, Decimal::new(75, 1));
/// assert_eq!(deduction_amount(&row, Decimal::new(20000, 0)), Decimal::new(1500, 0));
/// ```
pub fn deduction_amount(row: &DeductionRow, gross_pay: Decimal) -> Decimal {
    match row.amount_type {
        AmountType::Fixed => row.value,
        AmountType::Percentage => gross_pay * row.value / Decimal::ONE_HUNDRED,
        AmountType::Calculated => row.value,
    }
}

/// Prices and sums recurring and ad-hoc deduction rows.
///
/// # Arguments
///
/// * `recurring` - Active recurring rows, in display order
/// * `ad_hoc` - Rows added on the form, in display order
/// * `gross_pay` - Gross pay, the base for percentage rows
/// * `step_number` - The step number for audit trail sequencing
pub fn aggregate_deductions(
    recurring: &[DeductionRow],
    ad_hoc: &[AdHocDeduction],
    gross_pay: Decimal,
    step_number: u32,
) -> DeductionAggregationResult {
    let ad_hoc_rows: Vec<DeductionRow> = ad_hoc.iter().map(AdHocDeduction::to_row).collect();

    let lines: Vec<DeductionLine> = recurring
        .iter()
        .chain(ad_hoc_rows.iter())
        .map(|row| DeductionLine {
            beneficiary_name: row.beneficiary_name.clone(),
            type_label: row.type_label.clone(),
            source: row.source,
            amount_type: row.amount_type,
            value: row.value,
            amount: deduction_amount(row, gross_pay),
        })
        .collect();

    let total: Decimal = lines.iter().map(|line| line.amount).sum();

    let line_summaries: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| {
            serde_json::json!({
                "beneficiary_name": line.beneficiary_name,
                "amount_type": line.amount_type,
                "value": line.value.normalize().to_string(),
                "amount": line.amount.normalize().to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "deduction_aggregation".to_string(),
        rule_name: "Recurring and Ad-hoc Deductions".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "recurring_rows": recurring.len(),
            "ad_hoc_rows": ad_hoc.len()
        }),
        output: serde_json::json!({
            "lines": line_summaries,
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} deduction rows priced against gross pay R {}: total R {}",
            lines.len(),
            gross_pay.normalize(),
            total.normalize()
        ),
    };

    DeductionAggregationResult {
        lines,
        total,
        audit_step,
    }
}
