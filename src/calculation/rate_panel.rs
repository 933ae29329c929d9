//! Rate panel summary.
//!
//! The rate panel is the read-only summary shown above the capture form: base
//! salary, premium rates, statutory flags, and the recurring deduction terms.
//! Premium rates here use the configurable display multipliers, not the fixed
//! multipliers the calculation applies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RatePanelMultipliers;
use crate::models::{AmountType, SalaryType};

use super::{BaseUnit, PreviewSession, estimate_medical_aid_contribution};

/// Premium rates shown for overtime-eligible employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumRatePreview {
    /// Hourly rate × overtime multiplier.
    pub overtime_rate: Decimal,
    /// The overtime display multiplier.
    pub overtime_multiplier: Decimal,
    /// Hourly rate × Sunday multiplier.
    pub sunday_rate: Decimal,
    /// The Sunday display multiplier.
    pub sunday_multiplier: Decimal,
    /// Hourly rate × public holiday multiplier.
    pub public_holiday_rate: Decimal,
    /// The public holiday display multiplier.
    pub public_holiday_multiplier: Decimal,
}

/// One recurring deduction as shown on the rate panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTerm {
    /// The beneficiary name.
    pub beneficiary_name: String,
    /// How `value` is interpreted.
    pub amount_type: AmountType,
    /// The configured amount or percentage.
    pub value: Decimal,
}

/// The medical aid terms shown to principal members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAidTerms {
    /// How `value` is interpreted.
    pub amount_type: AmountType,
    /// The configured amount.
    pub value: Decimal,
}

/// How the medical aid tax credit is worked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalAidCalculation {
    /// From the SARS medical scheme fees credit table.
    SarsTable,
    /// From a manually captured figure.
    Manual,
}

/// The employee's medical aid scheme details, shown for every employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAidScheme {
    /// Scheme name, if any.
    pub scheme: Option<String>,
    /// How the tax credit is worked out.
    pub calculation: MedicalAidCalculation,
    /// Beneficiary the deduction is paid to, if any.
    pub linked_beneficiary: Option<String>,
    /// Employer's monthly contribution.
    pub employer_contribution: Decimal,
    /// Employee's monthly contribution.
    pub employee_contribution: Decimal,
}

/// Read-only summary of an employee's rates and deduction terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePanel {
    /// How the salary is expressed.
    pub salary_type: SalaryType,
    /// The base salary figure.
    pub base_salary: Decimal,
    /// The unit of `base_salary`.
    pub base_unit: BaseUnit,
    /// The derived hourly rate, absent for piece workers.
    pub hourly_rate: Option<Decimal>,
    /// Premium rates, present for overtime-eligible employees with an hourly rate.
    pub premium_rates: Option<PremiumRatePreview>,
    /// Whether the employee is eligible for overtime.
    pub overtime_eligible: bool,
    /// Whether the employee contributes to UIF.
    pub uif_contributing: bool,
    /// Whether the employer pays SDL.
    pub sdl_contributing: bool,
    /// Whether the employee is exempt from PAYE.
    pub paye_exempt: bool,
    /// Recurring deductions other than medical aid.
    pub deduction_terms: Vec<DeductionTerm>,
    /// Scheme details as captured on the employee record.
    pub medical_aid_scheme: MedicalAidScheme,
    /// Medical aid terms, present for principal members with a medical aid row.
    pub medical_aid: Option<MedicalAidTerms>,
    /// Estimated monthly medical aid contribution.
    pub medical_aid_estimate: Decimal,
}

/// Builds the rate panel for a session.
///
/// # Examples
///
/// ```
/// use payroll_preview::calculation::{PreviewSession, build_rate_panel};
/// use payroll_preview::config::RatePanelMultipliers;
/// use payroll_preview::models::{CompensationSnapshot, SalaryType};
/// use rust_decimal::Decimal;
///
/// let mut snapshot = CompensationSnapshot::new(SalaryType::Hourly, Decimal::new(100, 0));
/// snapshot.overtime_eligible = true;
/// let session = PreviewSession::new(snapshot);
///
/// let panel = build_rate_panel(&session, &RatePanelMultipliers::default());
/// let premiums = panel.premium_rates.unwrap();
/// assert_eq!(premiums.public_holiday_rate, Decimal::new(250, 0));
/// ```
pub fn build_rate_panel(session: &PreviewSession, multipliers: &RatePanelMultipliers) -> RatePanel {
    let snapshot = session.snapshot();
    let rates = session.rates();

    let premium_rates = match rates.hourly_rate {
        Some(rate) if snapshot.overtime_eligible => Some(PremiumRatePreview {
            overtime_rate: rate * multipliers.overtime,
            overtime_multiplier: multipliers.overtime,
            sunday_rate: rate * multipliers.sunday,
            sunday_multiplier: multipliers.sunday,
            public_holiday_rate: rate * multipliers.public_holiday,
            public_holiday_multiplier: multipliers.public_holiday,
        }),
        _ => None,
    };

    let deduction_terms = snapshot
        .recurring_deductions
        .iter()
        .filter(|row| !row.is_medical_aid)
        .map(|row| DeductionTerm {
            beneficiary_name: row.beneficiary_name.clone(),
            amount_type: row.amount_type,
            value: row.value,
        })
        .collect();

    let medical_aid = if snapshot.medical_aid_principal_member {
        snapshot.medical_aid_deduction().map(|row| MedicalAidTerms {
            amount_type: row.amount_type,
            value: row.value,
        })
    } else {
        None
    };

    let medical_aid_scheme = MedicalAidScheme {
        scheme: snapshot.medical_aid_scheme.clone(),
        calculation: if snapshot.medical_aid_use_sars {
            MedicalAidCalculation::SarsTable
        } else {
            MedicalAidCalculation::Manual
        },
        linked_beneficiary: snapshot.medical_aid_linked_beneficiary.clone(),
        employer_contribution: snapshot.medical_aid_employer_contribution,
        employee_contribution: snapshot.medical_aid_employee_contribution,
    };

    RatePanel {
        salary_type: snapshot.salary_type,
        base_salary: rates.base_salary,
        base_unit: rates.base_unit,
        hourly_rate: rates.hourly_rate,
        premium_rates,
        overtime_eligible: snapshot.overtime_eligible,
        uif_contributing: snapshot.uif_contributing,
        sdl_contributing: snapshot.sdl_contributing,
        paye_exempt: snapshot.paye_exempt,
        deduction_terms,
        medical_aid_scheme,
        medical_aid,
        medical_aid_estimate: estimate_medical_aid_contribution(
            snapshot.medical_aid_member,
            snapshot.medical_aid_dependants,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompensationSnapshot, DeductionRow};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn panel_for(snapshot: CompensationSnapshot) -> RatePanel {
        build_rate_panel(&PreviewSession::new(snapshot), &RatePanelMultipliers::default())
    }

    #[test]
    fn test_premium_rates_for_eligible_hourly() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Hourly, dec("80"));
        snapshot.overtime_eligible = true;
        let panel = panel_for(snapshot);

        let premiums = panel.premium_rates.unwrap();
        assert_eq!(premiums.overtime_rate, dec("120"));
        assert_eq!(premiums.sunday_rate, dec("160"));
        assert_eq!(premiums.public_holiday_rate, dec("200"));
        assert_eq!(premiums.public_holiday_multiplier, dec("2.5"));
    }

    #[test]
    fn test_no_premium_rates_when_not_eligible() {
        let panel = panel_for(CompensationSnapshot::new(SalaryType::Hourly, dec("80")));
        assert!(panel.premium_rates.is_none());
    }

    #[test]
    fn test_no_premium_rates_for_piece_worker() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Piece, Decimal::ZERO);
        snapshot.overtime_eligible = true;
        snapshot.piece_rate = dec("4");
        let panel = panel_for(snapshot);

        assert!(panel.premium_rates.is_none());
        assert_eq!(panel.base_salary, dec("4"));
        assert_eq!(panel.base_unit, BaseUnit::PerPiece);
    }

    #[test]
    fn test_monthly_eligible_shows_premium_rates() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, dec("17600"));
        snapshot.overtime_eligible = true;
        let panel = panel_for(snapshot);

        assert_eq!(panel.hourly_rate, Some(dec("100")));
        assert_eq!(panel.premium_rates.unwrap().overtime_rate, dec("150"));
    }

    #[test]
    fn test_custom_multipliers() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Hourly, dec("100"));
        snapshot.overtime_eligible = true;
        let multipliers = RatePanelMultipliers {
            overtime: dec("1.75"),
            ..RatePanelMultipliers::default()
        };
        let panel = build_rate_panel(&PreviewSession::new(snapshot), &multipliers);

        assert_eq!(panel.premium_rates.unwrap().overtime_rate, dec("175"));
    }

    #[test]
    fn test_deduction_terms_exclude_medical_aid() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, dec("20000"));
        snapshot.recurring_deductions = vec![
            DeductionRow::recurring("Union", "Union", AmountType::Fixed, dec("150")),
            DeductionRow::recurring("Bonitas", "Medical Aid", AmountType::Calculated, dec("1800")),
        ];
        let panel = panel_for(snapshot);

        assert_eq!(panel.deduction_terms.len(), 1);
        assert_eq!(panel.deduction_terms[0].beneficiary_name, "Union");
        // Not a principal member.
        assert!(panel.medical_aid.is_none());
    }

    #[test]
    fn test_medical_aid_terms_for_principal_member() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, dec("20000"));
        snapshot.medical_aid_member = true;
        snapshot.medical_aid_principal_member = true;
        snapshot.medical_aid_dependants = 2;
        snapshot.recurring_deductions = vec![DeductionRow::recurring(
            "Bonitas",
            "Medical Aid",
            AmountType::Calculated,
            dec("1800"),
        )];
        let panel = panel_for(snapshot);

        let terms = panel.medical_aid.unwrap();
        assert_eq!(terms.amount_type, AmountType::Calculated);
        assert_eq!(terms.value, dec("1800"));
        assert_eq!(panel.medical_aid_estimate, dec("974"));
    }

    #[test]
    fn test_statutory_flags_are_copied() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Daily, dec("500"));
        snapshot.uif_contributing = true;
        snapshot.paye_exempt = true;
        let panel = panel_for(snapshot);

        assert!(panel.uif_contributing);
        assert!(!panel.sdl_contributing);
        assert!(panel.paye_exempt);
        assert!(!panel.overtime_eligible);
    }

    #[test]
    fn test_medical_aid_scheme_details() {
        let mut snapshot = CompensationSnapshot::new(SalaryType::Monthly, dec("30000"));
        snapshot.medical_aid_scheme = Some("Discovery Classic".to_string());
        snapshot.medical_aid_use_sars = true;
        snapshot.medical_aid_linked_beneficiary = Some("Discovery Health".to_string());
        snapshot.medical_aid_employer_contribution = dec("1500");
        snapshot.medical_aid_employee_contribution = dec("2343.50");
        let panel = panel_for(snapshot);

        let scheme = panel.medical_aid_scheme;
        assert_eq!(scheme.scheme.as_deref(), Some("Discovery Classic"));
        assert_eq!(scheme.calculation, MedicalAidCalculation::SarsTable);
        assert_eq!(scheme.linked_beneficiary.as_deref(), Some("Discovery Health"));
        assert_eq!(scheme.employer_contribution, dec("1500"));
        assert_eq!(scheme.employee_contribution, dec("2343.5"));
        // Scheme details do not depend on a medical aid deduction row.
        assert!(panel.medical_aid.is_none());
    }

    #[test]
    fn test_medical_aid_scheme_defaults_to_manual() {
        let panel = panel_for(CompensationSnapshot::new(SalaryType::Hourly, dec("80")));

        assert_eq!(panel.medical_aid_scheme.scheme, None);
        assert_eq!(panel.medical_aid_scheme.calculation, MedicalAidCalculation::Manual);
        assert_eq!(panel.medical_aid_scheme.employer_contribution, Decimal::ZERO);
    }
}
