//! Ordinary pay calculation functionality.
//!
//! This module prices the ordinary component of a worked-time entry according
//! to how the employee's salary is expressed.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CompensationSnapshot, SalaryType, WorkedTimeEntry};

use super::DerivedRates;

/// The result of an ordinary pay calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct OrdinaryPayResult {
    /// The ordinary pay amount.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates ordinary pay for an entry.
///
/// - Monthly: the full monthly figure; hours entered are ignored.
/// - Daily: ordinary units × the daily rate (not the derived hourly rate).
/// - Piece: pieces produced × piece rate.
/// - Hourly: ordinary hours × hourly rate.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::{calculate_ordinary_pay, derive_rates};
/// use payroll_preview::models::{CompensationSnapshot, SalaryType, WorkedTimeEntry};
/// use rust_decimal::Decimal;
///
/// let snapshot = CompensationSnapshot::new(SalaryType::Daily, Decimal::new(500, 0));
/// let rates = derive_rates(&snapshot, 1).rates;
/// let entry = WorkedTimeEntry { ordinary_hours: Decimal::new(20, 0), ..Default::default() };
///
/// let result = calculate_ordinary_pay(&snapshot, &rates, &entry, 2);
/// assert_eq!(result.amount, Decimal::new(10000, 0));
/// ```
pub fn calculate_ordinary_pay(
    snapshot: &CompensationSnapshot,
    rates: &DerivedRates,
    entry: &WorkedTimeEntry,
    step_number: u32,
) -> OrdinaryPayResult {
    let (quantity, rate, basis) = match snapshot.salary_type {
        SalaryType::Monthly => (Decimal::ONE, snapshot.monthly_figure(), "monthly_salary"),
        SalaryType::Daily => (entry.ordinary_hours, snapshot.salary_amount, "daily_rate"),
        SalaryType::Piece => (entry.pieces_produced, snapshot.piece_rate, "piece_rate"),
        SalaryType::Hourly => (
            entry.ordinary_hours,
            rates.hourly_rate.unwrap_or_default(),
            "hourly_rate",
        ),
    };

    let amount = quantity * rate;

    let reasoning = match snapshot.salary_type {
        SalaryType::Monthly => format!(
            "Monthly employee: ordinary pay is the monthly salary R {}",
            amount.normalize()
        ),
        SalaryType::Daily => format!(
            "Daily employee: {} days × R {} = R {}",
            quantity.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
        SalaryType::Piece => format!(
            "Piece worker: {} pieces × R {} = R {}",
            quantity.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
        SalaryType::Hourly => format!(
            "Hourly employee: {} hours × R {} = R {}",
            quantity.normalize(),
            rate.normalize(),
            amount.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "ordinary_pay".to_string(),
        rule_name: "Ordinary Pay".to_string(),
        input: serde_json::json!({
            "salary_type": snapshot.salary_type,
            "quantity": quantity.normalize().to_string(),
            "basis": basis
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    OrdinaryPayResult { amount, audit_step }
}
