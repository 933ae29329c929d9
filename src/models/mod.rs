//! Core data models for the Payroll Preview Engine.
//!
//! This module contains the snapshot, entry, deduction, and breakdown models,
//! along with the boundary types that normalise server records into them.

mod breakdown;
mod deduction;
mod entry;
mod snapshot;
mod ytd;

pub use breakdown::{AuditStep, DeductionLine, PayrollBreakdown, TaxBreakdown};
pub use deduction::{
    AmountType, DeductionRow, DeductionSource, MEDICAL_AID_LABEL, RecurringDeductionRecord,
    is_medical_aid_label,
};
pub use entry::{AdHocDeduction, WorkedTimeEntry};
pub use snapshot::{
    CompensationSnapshot, DEFAULT_ORDINARY_HOURS_PER_DAY, DEFAULT_WORK_DAYS_PER_MONTH,
    EmployeeRecord, MAX_FIGURE, MAX_HOURS_PER_DAY, MAX_WORK_DAYS_PER_MONTH, SalaryType,
};
pub use ytd::{TAX_YEAR_START_MONTH, YtdSummary, tax_year_start, ytd_period_start};
