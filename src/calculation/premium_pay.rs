//! Premium pay calculation functionality.
//!
//! This module prices overtime, Sunday, and public-holiday hours for hourly and
//! daily employees. Monthly and piece workers never earn premiums in the
//! preview, whatever hours are entered.
//!
//! The multipliers here are fixed. The rate panel displays its own configurable
//! multipliers (see [`crate::config::RatePanelMultipliers`]); the two are kept
//! separate and are not expected to agree.

use rust_decimal::Decimal;

use crate::models::{AuditStep, SalaryType, WorkedTimeEntry};

/// Multiplier applied to overtime hours.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier applied to Sunday hours.
pub const SUNDAY_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Multiplier applied to public-holiday hours.
pub const PUBLIC_HOLIDAY_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// The result of a premium pay calculation.
#[derive(Debug, Clone)]
pub struct PremiumPayResult {
    /// Overtime pay.
    pub overtime_pay: Decimal,
    /// Sunday pay.
    pub sunday_pay: Decimal,
    /// Public-holiday pay.
    pub public_holiday_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl PremiumPayResult {
    /// All premium pay combined.
    pub fn total(&self) -> Decimal {
        self.overtime_pay + self.sunday_pay + self.public_holiday_pay
    }
}

/// Calculates overtime, Sunday, and public-holiday pay.
///
/// For hourly and daily employees each category is hours × hourly rate ×
/// its multiplier (1.5, 2.0, 2.0). For monthly and piece workers every
/// category is zero.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::calculate_premium_pay;
/// use payroll_preview::models::{SalaryType, WorkedTimeEntry};
/// use rust_decimal::Decimal;
///
/// let entry = WorkedTimeEntry { overtime_hours: Decimal::new(10, 0), ..Default::default() };
/// let result = calculate_premium_pay(SalaryType::Hourly, Some(Decimal::new(100, 0)), &entry, 3);
/// assert_eq!(result.overtime_pay, Decimal::new(1500, 0));
/// ```
pub fn calculate_premium_pay(
    salary_type: SalaryType,
    hourly_rate: Option<Decimal>,
    entry: &WorkedTimeEntry,
    step_number: u32,
) -> PremiumPayResult {
    let applies = salary_type.earns_premiums();
    let rate = hourly_rate.unwrap_or_default();

    let (overtime_pay, sunday_pay, public_holiday_pay) = if applies {
        (
            entry.overtime_hours * rate * OVERTIME_MULTIPLIER,
            entry.sunday_hours * rate * SUNDAY_MULTIPLIER,
            entry.public_holiday_hours * rate * PUBLIC_HOLIDAY_MULTIPLIER,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    };

    let reasoning = if applies {
        format!(
            "Overtime {} h × R {} × {} = R {}; Sunday {} h × R {} × {} = R {}; \
             public holiday {} h × R {} × {} = R {}",
            entry.overtime_hours.normalize(),
            rate.normalize(),
            OVERTIME_MULTIPLIER.normalize(),
            overtime_pay.normalize(),
            entry.sunday_hours.normalize(),
            rate.normalize(),
            SUNDAY_MULTIPLIER.normalize(),
            sunday_pay.normalize(),
            entry.public_holiday_hours.normalize(),
            rate.normalize(),
            PUBLIC_HOLIDAY_MULTIPLIER.normalize(),
            public_holiday_pay.normalize()
        )
    } else {
        format!(
            "No premium pay for {:?} employees; entered premium hours are ignored",
            salary_type
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "premium_pay".to_string(),
        rule_name: "Overtime, Sunday and Public Holiday Pay".to_string(),
        input: serde_json::json!({
            "salary_type": salary_type,
            "hourly_rate": hourly_rate.map(|r| r.normalize().to_string()),
            "overtime_hours": entry.overtime_hours.normalize().to_string(),
            "sunday_hours": entry.sunday_hours.normalize().to_string(),
            "public_holiday_hours": entry.public_holiday_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "applies": applies,
            "overtime_pay": overtime_pay.normalize().to_string(),
            "sunday_pay": sunday_pay.normalize().to_string(),
            "public_holiday_pay": public_holiday_pay.normalize().to_string()
        }),
        reasoning,
    };

    PremiumPayResult {
        overtime_pay,
        sunday_pay,
        public_holiday_pay,
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

    fn premium_entry(overtime: &str, sunday: &str, holiday: &str) -> WorkedTimeEntry {
        WorkedTimeEntry {
            overtime_hours: dec(overtime),
            sunday_hours: dec(sunday),
            public_holiday_hours: dec(holiday),
            ..Default::default()
        }
    }

    #[test]
    fn test_hourly_premiums() {
        assert_eq!(OVERTIME_MULTIPLIER, dec("1.5"));
        assert_eq!(SUNDAY_MULTIPLIER, dec("2"));
        assert_eq!(PUBLIC_HOLIDAY_MULTIPLIER, dec("2"));

        let entry = premium_entry("10", "8", "4");
        let result = calculate_premium_pay(SalaryType::Hourly, Some(dec("100")), &entry, 1);

        assert_eq!(result.overtime_pay, dec("1500"));
        assert_eq!(result.sunday_pay, dec("1600"));
        assert_eq!(result.public_holiday_pay, dec("800"));
        assert_eq!(result.total(), dec("3900"));
    }

    #[test]
    fn test_daily_premiums_use_derived_hourly_rate() {
        let entry = premium_entry("2", "0", "0");
        let result = calculate_premium_pay(SalaryType::Daily, Some(dec("62.5")), &entry, 1);

        // 2 × 62.5 × 1.5
        assert_eq!(result.overtime_pay, dec("187.5"));
    }

    #[test]
    fn test_public_holiday_uses_double_time_not_display_multiplier() {
        let entry = premium_entry("0", "0", "8");
        let result = calculate_premium_pay(SalaryType::Hourly, Some(dec("50")), &entry, 1);

        assert_eq!(result.public_holiday_pay, dec("800"));
        assert_ne!(result.public_holiday_pay, dec("1000"));
    }

    #[test]
    fn test_monthly_never_earns_premiums() {
        let entry = premium_entry("10", "8", "8");
        let result = calculate_premium_pay(SalaryType::Monthly, Some(dec("113.64")), &entry, 1);

        assert_eq!(result.total(), Decimal::ZERO);
        assert_eq!(result.audit_step.output["applies"], false);
    }

    #[test]
    fn test_piece_never_earns_premiums() {
        let entry = premium_entry("10", "8", "8");
        let result = calculate_premium_pay(SalaryType::Piece, None, &entry, 1);

        assert_eq!(result.total(), Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("No premium pay"));
    }

    #[test]
    fn test_audit_step_fields() {
        let entry = premium_entry("10", "0", "0");
        let result = calculate_premium_pay(SalaryType::Hourly, Some(dec("100")), &entry, 4);

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "premium_pay");
        assert_eq!(result.audit_step.output["overtime_pay"], "1500");
        assert!(result.audit_step.reasoning.contains("1.5"));
    }
}
