//! Payroll preview pipeline.
//!
//! A [`PreviewSession`] owns one immutable compensation snapshot and the rates
//! derived from it. Every call to [`PreviewSession::calculate`] recomputes the
//! full breakdown from the snapshot and the caller's current entry; nothing is
//! carried over between calls.

use std::fmt::Display;

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, CompensationSnapshot, EmployeeRecord, PayrollBreakdown, WorkedTimeEntry,
};

use super::{
    DerivedRates, RateDerivationResult, aggregate_deductions, calculate_ordinary_pay,
    calculate_premium_pay, calculate_statutory_deductions, derive_rates,
};

/// A preview session for one employee.
///
/// The snapshot and derived rates are fixed when the session is built; there is
/// no way to change one without rebuilding the other.
///
/// # Example
///
/// ```
/// use payroll_preview::calculation::PreviewSession;
/// use payroll_preview::models::WorkedTimeEntry;
/// use rust_decimal::Decimal;
///
/// let session = PreviewSession::from_json(
///     r#"{"salary_type": "hourly", "salary": 100, "uif_contributing": true}"#,
/// )?;
///
/// let entry = WorkedTimeEntry {
///     ordinary_hours: Decimal::new(160, 0),
///     overtime_hours: Decimal::new(10, 0),
///     ..Default::default()
/// };
/// let breakdown = session.calculate(&entry);
/// assert_eq!(breakdown.gross_pay, Decimal::new(17500, 0));
/// # Ok::<(), payroll_preview::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PreviewSession {
    snapshot: CompensationSnapshot,
    derivation: RateDerivationResult,
    statutory: StatutoryRates,
}

impl PreviewSession {
    /// Creates a session using the default statutory rates.
    pub fn new(snapshot: CompensationSnapshot) -> Self {
        Self::with_statutory_rates(snapshot, StatutoryRates::default())
    }

    /// Creates a session using the given statutory rates.
    ///
    /// Snapshots built by hand skip the range checks of
    /// [`CompensationSnapshot::from_record`]; call
    /// [`CompensationSnapshot::validate`] first when the figures are untrusted.
    pub fn with_statutory_rates(snapshot: CompensationSnapshot, statutory: StatutoryRates) -> Self {
        let derivation = derive_rates(&snapshot, 1);
        Self {
            snapshot,
            derivation,
            statutory,
        }
    }

    /// Creates a session from an employee record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSnapshot` when the record's salary type is unusable.
    pub fn from_record(record: EmployeeRecord) -> EngineResult<Self> {
        Ok(Self::new(CompensationSnapshot::from_record(record)?))
    }

    /// Creates a session from the employee API's JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotUnavailable` for undecodable payloads and
    /// `InvalidSnapshot` for an unusable salary type.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        Ok(Self::new(CompensationSnapshot::from_json(json)?))
    }

    /// Creates a session from the outcome of fetching the employee record.
    ///
    /// A failed fetch yields `SnapshotUnavailable`, so no session exists to
    /// calculate against a missing snapshot.
    pub fn from_fetch<E: Display>(fetched: Result<String, E>) -> EngineResult<Self> {
        let body = fetched.map_err(|e| EngineError::SnapshotUnavailable {
            message: format!("failed to load employee data: {}", e),
        })?;
        Self::from_json(&body)
    }

    /// Returns the snapshot this session was built from.
    pub fn snapshot(&self) -> &CompensationSnapshot {
        &self.snapshot
    }

    /// Returns the rates derived from the snapshot.
    pub fn rates(&self) -> &DerivedRates {
        &self.derivation.rates
    }

    /// Returns the statutory rates applied by this session.
    pub fn statutory_rates(&self) -> &StatutoryRates {
        &self.statutory
    }

    /// Returns the entry a fresh capture form starts with.
    pub fn seed_entry(&self) -> WorkedTimeEntry {
        WorkedTimeEntry::seeded(&self.snapshot, self.derivation.rates.work_hours)
    }

    /// Recomputes the full breakdown for an entry.
    pub fn calculate(&self, entry: &WorkedTimeEntry) -> PayrollBreakdown {
        calculate_preview(
            &self.snapshot,
            &self.derivation,
            entry,
            &self.statutory,
        )
    }
}

/// Runs the preview pipeline for a snapshot, its derived rates, and an entry.
///
/// `derivation` must come from `snapshot`; only [`PreviewSession`] pairs them.
///
/// Steps, in order:
/// 1. Rate derivation (reused from `derivation`)
/// 2. Ordinary pay
/// 3. Premium pay
/// 4. Gross and adjusted gross pay
/// 5. PAYE, UIF, and SDL on adjusted gross pay
/// 6. Recurring and ad-hoc deductions on gross pay
/// 7. Net pay
fn calculate_preview(
    snapshot: &CompensationSnapshot,
    derivation: &RateDerivationResult,
    entry: &WorkedTimeEntry,
    statutory: &StatutoryRates,
) -> PayrollBreakdown {
    let rates = &derivation.rates;
    let mut audit_trace: Vec<AuditStep> = Vec::with_capacity(7);
    audit_trace.push(derivation.audit_step.clone());

    let ordinary = calculate_ordinary_pay(snapshot, rates, entry, 2);
    audit_trace.push(ordinary.audit_step.clone());

    let premiums = calculate_premium_pay(snapshot.salary_type, rates.hourly_rate, entry, 3);
    audit_trace.push(premiums.audit_step.clone());

    let gross_pay = ordinary.amount
        + premiums.overtime_pay
        + premiums.sunday_pay
        + premiums.public_holiday_pay
        + entry.allowances
        + entry.bonus_amount;
    let adjusted_gross_pay = gross_pay + snapshot.fringe_benefit_amount;

    audit_trace.push(AuditStep {
        step_number: 4,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay".to_string(),
        input: serde_json::json!({
            "ordinary_pay": ordinary.amount.normalize().to_string(),
            "premium_pay": premiums.total().normalize().to_string(),
            "allowances": entry.allowances.normalize().to_string(),
            "bonus_amount": entry.bonus_amount.normalize().to_string(),
            "fringe_benefit_amount": snapshot.fringe_benefit_amount.normalize().to_string()
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "adjusted_gross_pay": adjusted_gross_pay.normalize().to_string()
        }),
        reasoning: format!(
            "Gross pay R {}; adding fringe benefit R {} gives the statutory base R {}",
            gross_pay.normalize(),
            snapshot.fringe_benefit_amount.normalize(),
            adjusted_gross_pay.normalize()
        ),
    });

    let statutory_result = calculate_statutory_deductions(snapshot, adjusted_gross_pay, statutory, 5);
    audit_trace.push(statutory_result.audit_step.clone());

    let deductions = aggregate_deductions(
        &snapshot.recurring_deductions,
        &entry.ad_hoc_deductions,
        gross_pay,
        6,
    );
    audit_trace.push(deductions.audit_step.clone());

    let total_deductions = statutory_result.total() + deductions.total;
    let net_pay = gross_pay - total_deductions;

    audit_trace.push(AuditStep {
        step_number: 7,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "statutory_total": statutory_result.total().normalize().to_string(),
            "recurring_total": deductions.total.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning: if net_pay < Decimal::ZERO {
            format!(
                "Deductions R {} exceed gross pay R {}: net pay is R {}",
                total_deductions.normalize(),
                gross_pay.normalize(),
                net_pay.normalize()
            )
        } else {
            format!(
                "R {} − R {} = R {}",
                gross_pay.normalize(),
                total_deductions.normalize(),
                net_pay.normalize()
            )
        },
    });

    PayrollBreakdown {
        salary_type: snapshot.salary_type,
        hourly_rate: rates.hourly_rate,
        ordinary_pay: ordinary.amount,
        overtime_pay: premiums.overtime_pay,
        sunday_pay: premiums.sunday_pay,
        public_holiday_pay: premiums.public_holiday_pay,
        allowances: entry.allowances,
        bonus_amount: entry.bonus_amount,
        gross_pay,
        fringe_benefit_amount: snapshot.fringe_benefit_amount,
        adjusted_gross_pay,
        medical_aid_tax_credit: snapshot.medical_aid_tax_credit,
        paye_before_credit: statutory_result.paye_before_credit,
        paye: statutory_result.paye,
        uif: statutory_result.uif,
        sdl: statutory_result.sdl,
        deduction_lines: deductions.lines,
        recurring_total: deductions.total,
        total_deductions,
        net_pay,
        audit_trace,
    }
}
