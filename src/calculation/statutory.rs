//! Statutory deduction calculation functionality.
//!
//! This module approximates PAYE, UIF, and SDL on adjusted gross pay. PAYE is
//! a flat-rate approximation for the preview only; the payroll run applies the
//! real tax tables.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::models::{AuditStep, CompensationSnapshot};

/// The result of a statutory deduction calculation.
#[derive(Debug, Clone)]
pub struct StatutoryDeductionsResult {
    /// PAYE at the flat rate before the medical aid credit.
    pub paye_before_credit: Decimal,
    /// PAYE withheld.
    pub paye: Decimal,
    /// UIF contribution.
    pub uif: Decimal,
    /// Skills development levy.
    pub sdl: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl StatutoryDeductionsResult {
    /// PAYE, UIF, and SDL combined.
    pub fn total(&self) -> Decimal {
        self.paye + self.uif + self.sdl
    }
}

/// Calculates PAYE, UIF, and SDL on adjusted gross pay.
///
/// - PAYE: unless exempt, `max(adjusted × paye_rate − medical credit, 0)`.
/// - UIF: when contributing, `min(adjusted, uif_ceiling) × uif_rate`.
/// - SDL: when contributing, `adjusted × sdl_rate`.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::calculate_statutory_deductions;
/// use payroll_preview::config::StatutoryRates;
/// use payroll_preview::models::{CompensationSnapshot, SalaryType};
/// use rust_decimal::Decimal;
///
/// let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, Decimal::new(25000, 0));
/// snapshot.uif_contributing = true;
///
/// let result = calculate_statutory_deductions(
///     &snapshot,
///     Decimal::new(25000, 0),
///     &StatutoryRates::default(),
///     5,
/// );
/// assert_eq!(result.uif, Decimal::new(17712, 2));
/// ```
pub fn calculate_statutory_deductions(
    snapshot: &CompensationSnapshot,
    adjusted_gross_pay: Decimal,
    rates: &StatutoryRates,
    step_number: u32,
) -> StatutoryDeductionsResult {
    let paye_before_credit = adjusted_gross_pay * rates.paye_rate;

    let paye = if snapshot.paye_exempt {
        Decimal::ZERO
    } else {
        (paye_before_credit - snapshot.medical_aid_tax_credit).max(Decimal::ZERO)
    };

    let uif_base = adjusted_gross_pay.min(rates.uif_ceiling);
    let uif = if snapshot.uif_contributing {
        uif_base * rates.uif_rate
    } else {
        Decimal::ZERO
    };

    let sdl = if snapshot.sdl_contributing {
        adjusted_gross_pay * rates.sdl_rate
    } else {
        Decimal::ZERO
    };

    let mut notes = Vec::new();
    if snapshot.paye_exempt {
        notes.push("PAYE exempt".to_string());
    } else {
        notes.push(format!(
            "PAYE R {} × {} − credit R {} = R {}",
            adjusted_gross_pay.normalize(),
            rates.paye_rate.normalize(),
            snapshot.medical_aid_tax_credit.normalize(),
            paye.normalize()
        ));
    }
    if snapshot.uif_contributing {
        notes.push(format!(
            "UIF min(R {}, R {}) × {} = R {}",
            adjusted_gross_pay.normalize(),
            rates.uif_ceiling.normalize(),
            rates.uif_rate.normalize(),
            uif.normalize()
        ));
    } else {
        notes.push("no UIF contribution".to_string());
    }
    if snapshot.sdl_contributing {
        notes.push(format!(
            "SDL R {} × {} = R {}",
            adjusted_gross_pay.normalize(),
            rates.sdl_rate.normalize(),
            sdl.normalize()
        ));
    } else {
        notes.push("no SDL".to_string());
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "statutory_deductions".to_string(),
        rule_name: "PAYE, UIF and SDL".to_string(),
        input: serde_json::json!({
            "adjusted_gross_pay": adjusted_gross_pay.normalize().to_string(),
            "medical_aid_tax_credit": snapshot.medical_aid_tax_credit.normalize().to_string(),
            "paye_exempt": snapshot.paye_exempt,
            "uif_contributing": snapshot.uif_contributing,
            "sdl_contributing": snapshot.sdl_contributing
        }),
        output: serde_json::json!({
            "paye_before_credit": paye_before_credit.normalize().to_string(),
            "paye": paye.normalize().to_string(),
            "uif": uif.normalize().to_string(),
            "sdl": sdl.normalize().to_string()
        }),
        reasoning: notes.join("; "),
    };

    StatutoryDeductionsResult {
        paye_before_credit,
        paye,
        uif,
        sdl,
        audit_step,
    }
}
