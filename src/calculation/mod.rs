//! Calculation logic for the payroll preview.
//!
//! This module contains the calculation stages that turn a compensation
//! snapshot and a worked-time entry into a payroll breakdown: rate derivation,
//! ordinary pay, premium pay, statutory deductions, and deduction aggregation.
//! [`PreviewSession`] runs them in order. The rate panel and the medical aid
//! estimate are read-only summaries built alongside the calculator.

mod deductions;
mod medical_aid;
mod ordinary_pay;
mod premium_pay;
mod preview;
mod rate_derivation;
mod rate_panel;
mod statutory;

pub use deductions::{DeductionAggregationResult, aggregate_deductions, deduction_amount};
pub use medical_aid::{
    MEDICAL_AID_ADDITIONAL_DEPENDANT, MEDICAL_AID_FIRST_DEPENDANT, MEDICAL_AID_MAIN_MEMBER,
    estimate_medical_aid_contribution,
};
pub use ordinary_pay::{OrdinaryPayResult, calculate_ordinary_pay};
pub use premium_pay::{
    OVERTIME_MULTIPLIER, PUBLIC_HOLIDAY_MULTIPLIER, PremiumPayResult, SUNDAY_MULTIPLIER,
    calculate_premium_pay,
};
pub use preview::PreviewSession;
pub use rate_derivation::{BaseUnit, DerivedRates, RateDerivationResult, derive_rates};
pub use rate_panel::{
    DeductionTerm, MedicalAidCalculation, MedicalAidScheme, MedicalAidTerms, PremiumRatePreview,
    RatePanel, build_rate_panel,
};
pub use statutory::{StatutoryDeductionsResult, calculate_statutory_deductions};
