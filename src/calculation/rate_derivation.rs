//! Rate derivation functionality.
//!
//! This module derives the hourly rate, monthly working hours, and base salary
//! figure from a compensation snapshot. The derivation runs once per preview
//! session and is reused unchanged by every recompute.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, CompensationSnapshot, SalaryType};

/// The unit the base salary figure is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseUnit {
    /// Rand per hour.
    PerHour,
    /// Rand per day.
    PerDay,
    /// Rand per month.
    PerMonth,
    /// Rand per piece.
    PerPiece,
}

/// Rates derived from a compensation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRates {
    /// The hourly rate; `None` for piece workers, who bypass it entirely.
    pub hourly_rate: Option<Decimal>,
    /// Ordinary hours per day multiplied by work days per month.
    pub work_hours: Decimal,
    /// The base salary figure shown to the user.
    pub base_salary: Decimal,
    /// The unit of `base_salary`.
    pub base_unit: BaseUnit,
}

/// The result of a rate derivation, including the rates and audit step.
#[derive(Debug, Clone)]
pub struct RateDerivationResult {
    /// The derived rates.
    pub rates: DerivedRates,
    /// The audit step recording this derivation.
    pub audit_step: AuditStep,
}

/// Derives the hourly rate, work hours, and base salary for a snapshot.
///
/// - Hourly: the salary amount is the hourly rate and the base salary.
/// - Daily: the hourly rate is the daily rate over ordinary hours per day; the
///   base salary is the daily rate.
/// - Monthly: the hourly rate is the salary amount over monthly work hours; the
///   base salary is the monthly figure.
/// - Piece: there is no hourly rate; the base salary is the piece rate.
///
/// Non-positive working-time fields are replaced by the 8 hour / 22 day defaults
/// before dividing.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::derive_rates;
/// use payroll_preview::models::{CompensationSnapshot, SalaryType};
/// use rust_decimal::Decimal;
///
/// let snapshot = CompensationSnapshot::new(SalaryType::Daily, Decimal::new(500, 0));
/// let result = derive_rates(&snapshot, 1);
/// assert_eq!(result.rates.hourly_rate, Some(Decimal::new(625, 1)));
/// assert_eq!(result.rates.work_hours, Decimal::new(176, 0));
/// ```
pub fn derive_rates(snapshot: &CompensationSnapshot, step_number: u32) -> RateDerivationResult {
    let hours_per_day = snapshot.effective_hours_per_day();
    let days_per_month = snapshot.effective_work_days_per_month();
    let work_hours = hours_per_day * days_per_month;

    let (hourly_rate, base_salary, base_unit) = match snapshot.salary_type {
        SalaryType::Hourly => (
            Some(snapshot.salary_amount),
            snapshot.salary_amount,
            BaseUnit::PerHour,
        ),
        SalaryType::Daily => (
            Some(snapshot.salary_amount / hours_per_day),
            snapshot.salary_amount,
            BaseUnit::PerDay,
        ),
        SalaryType::Monthly => (
            Some(snapshot.salary_amount / work_hours),
            snapshot.monthly_figure(),
            BaseUnit::PerMonth,
        ),
        SalaryType::Piece => (None, snapshot.piece_rate, BaseUnit::PerPiece),
    };

    let reasoning = match (snapshot.salary_type, hourly_rate) {
        (SalaryType::Hourly, _) => format!(
            "Hourly employee: rate is the salary amount R {}",
            snapshot.salary_amount.normalize()
        ),
        (SalaryType::Daily, Some(rate)) => format!(
            "Daily employee: R {} per day / {} hours = R {} per hour",
            snapshot.salary_amount.normalize(),
            hours_per_day.normalize(),
            rate.normalize()
        ),
        (SalaryType::Monthly, Some(rate)) => format!(
            "Monthly employee: R {} / ({} hours × {} days = {} hours) = R {} per hour",
            snapshot.salary_amount.normalize(),
            hours_per_day.normalize(),
            days_per_month.normalize(),
            work_hours.normalize(),
            rate.normalize()
        ),
        _ => format!(
            "Piece worker: paid R {} per piece, no hourly rate",
            snapshot.piece_rate.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_derivation".to_string(),
        rule_name: "Rate Derivation".to_string(),
        input: serde_json::json!({
            "salary_type": snapshot.salary_type,
            "salary_amount": snapshot.salary_amount.normalize().to_string(),
            "ordinary_hours_per_day": hours_per_day.normalize().to_string(),
            "work_days_per_month": days_per_month.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly_rate": hourly_rate.map(|r| r.normalize().to_string()),
            "work_hours": work_hours.normalize().to_string(),
            "base_salary": base_salary.normalize().to_string(),
            "base_unit": base_unit
        }),
        reasoning,
    };

    RateDerivationResult {
        rates: DerivedRates {
            hourly_rate,
            work_hours,
            base_salary,
            base_unit,
        },
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hourly_rate_is_salary_amount() {
        let snapshot = CompensationSnapshot::new(SalaryType::Hourly, dec("100"));
        let result = derive_rates(&snapshot, 1);

        assert_eq!(result.rates.hourly_rate, Some(dec("100")));
        assert_eq!(result.rates.base_salary, dec("100"));
        assert_eq!(result.rates.base_unit, BaseUnit::PerHour);
        assert_eq!(result.rates.work_hours, dec("176"));
    }

    #[test]
    fn test_daily_rate_divides_by_hours_per_day() {
        let snapshot = CompensationSnapshot::new(SalaryType::Daily, dec("500"));
        let result = derive_rates(&snapshot, 1);

        assert_eq!(result.rates.hourly_rate, Some(dec("62.5")));
        assert_eq!(result.rates.base_salary, dec("500"));
        assert_eq!(result.rates.base_unit, BaseUnit::PerDay);
    }

    #[test]
    fn test_monthly_rate_divides_by_work_hours() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, dec("17600"));
        snapshot.ordinary_hours_per_day = dec("8");
        snapshot.work_days_per_month = dec("22");
        let result = derive_rates(&snapshot, 1);

        assert_eq!(result.rates.hourly_rate, Some(dec("100")));
        assert_eq!(result.rates.work_hours, dec("176"));
        assert_eq!(result.rates.base_salary, dec("17600"));
        assert_eq!(result.rates.base_unit, BaseUnit::PerMonth);
    }

    #[test]
    fn test_monthly_base_salary_uses_monthly_figure() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, dec("17600"));
        snapshot.monthly_salary = Some(dec("18000"));
        let result = derive_rates(&snapshot, 1);

        // Hourly rate still derives from the salary amount.
        assert_eq!(result.rates.hourly_rate, Some(dec("100")));
        assert_eq!(result.rates.base_salary, dec("18000"));
    }

    #[test]
    fn test_piece_worker_has_no_hourly_rate() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Piece, Decimal::ZERO);
        snapshot.piece_rate = dec("3.25");
        let result = derive_rates(&snapshot, 1);

        assert_eq!(result.rates.hourly_rate, None);
        assert_eq!(result.rates.base_salary, dec("3.25"));
        assert_eq!(result.rates.base_unit, BaseUnit::PerPiece);
    }

    #[test]
    fn test_zero_working_time_falls_back_to_defaults() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Daily, dec("800"));
        snapshot.ordinary_hours_per_day = Decimal::ZERO;
        snapshot.work_days_per_month = Decimal::ZERO;
        let result = derive_rates(&snapshot, 1);

        assert_eq!(result.rates.hourly_rate, Some(dec("100")));
        assert_eq!(result.rates.work_hours, dec("176"));
    }

    #[test]
    fn test_custom_working_time() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, dec("18900"));
        snapshot.ordinary_hours_per_day = dec("9");
        snapshot.work_days_per_month = dec("21");
        let result = derive_rates(&snapshot, 1);

        assert_eq!(result.rates.work_hours, dec("189"));
        assert_eq!(result.rates.hourly_rate, Some(dec("100")));
    }

    #[test]
    fn test_audit_step_records_derivation() {
        let snapshot = CompensationSnapshot::new(SalaryType::Daily, dec("500"));
        let result = derive_rates(&snapshot, 3);

        assert_eq!(result.audit_step.step_number, 3);
        assert_eq!(result.audit_step.rule_id, "rate_derivation");
        assert_eq!(result.audit_step.input["salary_type"], "daily");
        assert_eq!(result.audit_step.output["hourly_rate"], "62.5");
        assert_eq!(result.audit_step.output["base_unit"], "per_day");
        assert!(result.audit_step.reasoning.contains("62.5"));
    }

    #[test]
    fn test_audit_step_for_piece_worker_has_null_rate() {
        let snapshot = CompensationSnapshot::new(SalaryType::Piece, Decimal::ZERO);
        let result = derive_rates(&snapshot, 1);

        assert!(result.audit_step.output["hourly_rate"].is_null());
        assert!(result.audit_step.reasoning.contains("Piece worker"));
    }
}
