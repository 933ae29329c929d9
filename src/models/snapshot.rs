//! Employee compensation snapshot and the employee record it is built from.
//!
//! The employee record is the JSON object served by the employee API. It is
//! loosely typed: most fields may be missing or null. [`CompensationSnapshot`]
//! is the normalised, immutable view the calculator works from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::deduction::{AmountType, DeductionRow, RecurringDeductionRecord};

/// Ordinary hours per day assumed when the record has none.
pub const DEFAULT_ORDINARY_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Work days per month assumed when the record has none.
pub const DEFAULT_WORK_DAYS_PER_MONTH: Decimal = Decimal::from_parts(22, 0, 0, false, 0);

/// Largest magnitude accepted for any money amount or quantity.
///
/// Keeps every product and quotient in the calculation within `Decimal` range.
pub const MAX_FIGURE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Most ordinary hours a working day may have.
pub const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Most working days a month may have.
pub const MAX_WORK_DAYS_PER_MONTH: Decimal = Decimal::from_parts(31, 0, 0, false, 0);

/// How an employee's salary amount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// A fixed monthly wage.
    Monthly,
    /// An hourly rate.
    Hourly,
    /// A daily rate.
    Daily,
    /// Paid per piece produced.
    Piece,
}

impl SalaryType {
    /// Parses a server label, ignoring case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_preview::models::SalaryType;
    ///
    /// assert_eq!(SalaryType::parse_label("Monthly"), Some(SalaryType::Monthly));
    /// assert_eq!(SalaryType::parse_label("weekly"), None);
    /// ```
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "monthly" => Some(SalaryType::Monthly),
            "hourly" => Some(SalaryType::Hourly),
            "daily" => Some(SalaryType::Daily),
            "piece" => Some(SalaryType::Piece),
            _ => None,
        }
    }

    /// Returns true for salary types that earn overtime, Sunday, and
    /// public-holiday premiums.
    pub fn earns_premiums(&self) -> bool {
        matches!(self, SalaryType::Hourly | SalaryType::Daily)
    }
}

/// The employee record as served by the employee API.
///
/// Only the compensation fields are modelled; anything else in the payload is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// `monthly`, `hourly`, `daily`, or `piece` in any casing.
    #[serde(default)]
    pub salary_type: Option<String>,
    /// The salary amount; its meaning depends on `salary_type`.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// The monthly salary figure, when served separately from `salary`.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Ordinary hours per working day.
    #[serde(default)]
    pub ordinary_hours_per_day: Option<Decimal>,
    /// Working days per month.
    #[serde(default)]
    pub work_days_per_month: Option<Decimal>,
    /// Rate per piece for piece workers.
    #[serde(default)]
    pub piece_rate: Option<Decimal>,
    /// Whether the employee is eligible for overtime.
    #[serde(default)]
    pub overtime_eligible: Option<bool>,
    /// Whether the employee contributes to UIF.
    #[serde(default)]
    pub uif_contributing: Option<bool>,
    /// Whether the employer pays SDL on this employee.
    #[serde(default)]
    pub sdl_contributing: Option<bool>,
    /// Whether the employee is exempt from PAYE.
    #[serde(default)]
    pub paye_exempt: Option<bool>,
    /// Medical aid tax credit, resolved server-side.
    #[serde(default)]
    pub medical_aid_tax_credit: Option<Decimal>,
    /// Taxable fringe benefit value.
    #[serde(default)]
    pub fringe_benefit_amount: Option<Decimal>,
    /// Default monthly allowances.
    #[serde(default)]
    pub allowances: Option<Decimal>,
    /// Bonus type label; `"None"` or absent means no bonus.
    #[serde(default)]
    pub bonus_type: Option<String>,
    /// Whether the employee belongs to a medical aid scheme.
    #[serde(default)]
    pub medical_aid_member: Option<bool>,
    /// Whether the employee is the principal member of the scheme.
    #[serde(default)]
    pub medical_aid_principal_member: Option<bool>,
    /// Number of dependants on the scheme.
    #[serde(default)]
    pub medical_aid_dependants: Option<u32>,
    /// Name of the medical aid scheme.
    #[serde(default)]
    pub medical_aid_scheme: Option<String>,
    /// Whether the medical aid credit follows the SARS table rather than a manual figure.
    #[serde(default)]
    pub medical_aid_use_sars: Option<bool>,
    /// Beneficiary the medical aid deduction is paid to.
    #[serde(default)]
    pub medical_aid_linked_beneficiary: Option<String>,
    /// Employer's monthly medical aid contribution.
    #[serde(default)]
    pub medical_aid_employer: Option<Decimal>,
    /// Employee's monthly medical aid contribution.
    #[serde(default)]
    pub medical_aid_employee: Option<Decimal>,
    /// Recurring deductions, active and inactive.
    #[serde(default)]
    pub recurring_deductions: Option<Vec<RecurringDeductionRecord>>,
}

/// The immutable compensation snapshot a preview session is built from.
///
/// # Example
///
/// ```
/// use payroll_preview::models::{CompensationSnapshot, SalaryType};
/// use rust_decimal::Decimal;
///
/// let snapshot = CompensationSnapshot::new(SalaryType::Hourly, Decimal::new(100, 0));
/// assert_eq!(snapshot.ordinary_hours_per_day, Decimal::new(8, 0));
/// assert_eq!(snapshot.work_days_per_month, Decimal::new(22, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationSnapshot {
    /// How `salary_amount` is expressed.
    pub salary_type: SalaryType,
    /// Monthly wage, hourly rate, or daily rate. Unused for piece workers.
    pub salary_amount: Decimal,
    /// Monthly figure used for monthly ordinary pay, if it differs from `salary_amount`.
    pub monthly_salary: Option<Decimal>,
    /// Ordinary hours per working day.
    pub ordinary_hours_per_day: Decimal,
    /// Working days per month.
    pub work_days_per_month: Decimal,
    /// Rate per piece for piece workers.
    pub piece_rate: Decimal,
    /// Whether the employee is eligible for overtime.
    pub overtime_eligible: bool,
    /// Whether the employee contributes to UIF.
    pub uif_contributing: bool,
    /// Whether the employer pays SDL on this employee.
    pub sdl_contributing: bool,
    /// Whether the employee is exempt from PAYE.
    pub paye_exempt: bool,
    /// Medical aid tax credit, resolved server-side.
    pub medical_aid_tax_credit: Decimal,
    /// Taxable fringe benefit value.
    pub fringe_benefit_amount: Decimal,
    /// Default allowances used to seed a new entry.
    pub default_allowances: Decimal,
    /// Whether the employee has a bonus arrangement.
    pub bonus_eligible: bool,
    /// Whether the employee belongs to a medical aid scheme.
    pub medical_aid_member: bool,
    /// Whether the employee is the principal member of the scheme.
    pub medical_aid_principal_member: bool,
    /// Number of dependants on the scheme.
    pub medical_aid_dependants: u32,
    /// Name of the medical aid scheme, if any.
    pub medical_aid_scheme: Option<String>,
    /// Whether the medical aid credit follows the SARS table.
    pub medical_aid_use_sars: bool,
    /// Beneficiary the medical aid deduction is paid to, if any.
    pub medical_aid_linked_beneficiary: Option<String>,
    /// Employer's monthly medical aid contribution (display only).
    pub medical_aid_employer_contribution: Decimal,
    /// Employee's monthly medical aid contribution (display only).
    pub medical_aid_employee_contribution: Decimal,
    /// Active recurring deductions in display order.
    pub recurring_deductions: Vec<DeductionRow>,
}

impl CompensationSnapshot {
    /// Creates a snapshot with default working time and no deductions.
    pub fn new(salary_type: SalaryType, salary_amount: Decimal) -> Self {
        Self {
            salary_type,
            salary_amount,
            monthly_salary: None,
            ordinary_hours_per_day: DEFAULT_ORDINARY_HOURS_PER_DAY,
            work_days_per_month: DEFAULT_WORK_DAYS_PER_MONTH,
            piece_rate: Decimal::ZERO,
            overtime_eligible: false,
            uif_contributing: false,
            sdl_contributing: false,
            paye_exempt: false,
            medical_aid_tax_credit: Decimal::ZERO,
            fringe_benefit_amount: Decimal::ZERO,
            default_allowances: Decimal::ZERO,
            bonus_eligible: false,
            medical_aid_member: false,
            medical_aid_principal_member: false,
            medical_aid_dependants: 0,
            medical_aid_scheme: None,
            medical_aid_use_sars: false,
            medical_aid_linked_beneficiary: None,
            medical_aid_employer_contribution: Decimal::ZERO,
            medical_aid_employee_contribution: Decimal::ZERO,
            recurring_deductions: vec![],
        }
    }

    /// Normalises an employee record into a snapshot.
    ///
    /// Missing working-time fields take the documented defaults, other missing
    /// figures become zero, and inactive deductions are dropped. The result is
    /// checked with [`CompensationSnapshot::validate`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidSnapshot` when `salary_type` is missing or unknown, or
    /// when a figure is out of range.
    pub fn from_record(record: EmployeeRecord) -> EngineResult<Self> {
        let label = record.salary_type.as_deref().unwrap_or_default();
        let salary_type =
            SalaryType::parse_label(label).ok_or_else(|| EngineError::InvalidSnapshot {
                field: "salary_type".to_string(),
                message: if label.trim().is_empty() {
                    "missing salary type".to_string()
                } else {
                    format!("unknown salary type '{}'", label)
                },
            })?;

        let recurring_deductions = record
            .recurring_deductions
            .unwrap_or_default()
            .iter()
            .filter_map(RecurringDeductionRecord::normalize)
            .collect();

        let bonus_eligible = record
            .bonus_type
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty() && t.trim() != "None");

        let snapshot = Self {
            salary_type,
            salary_amount: record.salary.unwrap_or_default(),
            monthly_salary: record.monthly_salary.filter(|v| !v.is_zero()),
            ordinary_hours_per_day: positive_or(
                record.ordinary_hours_per_day,
                DEFAULT_ORDINARY_HOURS_PER_DAY,
            ),
            work_days_per_month: positive_or(
                record.work_days_per_month,
                DEFAULT_WORK_DAYS_PER_MONTH,
            ),
            piece_rate: record.piece_rate.unwrap_or_default(),
            overtime_eligible: record.overtime_eligible.unwrap_or(false),
            uif_contributing: record.uif_contributing.unwrap_or(false),
            sdl_contributing: record.sdl_contributing.unwrap_or(false),
            paye_exempt: record.paye_exempt.unwrap_or(false),
            medical_aid_tax_credit: record.medical_aid_tax_credit.unwrap_or_default(),
            fringe_benefit_amount: record.fringe_benefit_amount.unwrap_or_default(),
            default_allowances: record.allowances.unwrap_or_default(),
            bonus_eligible,
            medical_aid_member: record.medical_aid_member.unwrap_or(false),
            medical_aid_principal_member: record.medical_aid_principal_member.unwrap_or(false),
            medical_aid_dependants: record.medical_aid_dependants.unwrap_or(0),
            medical_aid_scheme: non_blank(record.medical_aid_scheme),
            medical_aid_use_sars: record.medical_aid_use_sars.unwrap_or(false),
            medical_aid_linked_beneficiary: non_blank(record.medical_aid_linked_beneficiary),
            medical_aid_employer_contribution: record.medical_aid_employer.unwrap_or_default(),
            medical_aid_employee_contribution: record.medical_aid_employee.unwrap_or_default(),
            recurring_deductions,
        };

        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Checks that every figure is within the range the calculator can price.
    ///
    /// Money amounts, rates, and deduction values must not exceed
    /// [`MAX_FIGURE`] in magnitude, and percentage deductions must not exceed
    /// 100. Effective working time must be between 1 and 24 hours per day and
    /// between 1 and 31 days per month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSnapshot` naming the first figure out of range.
    pub fn validate(&self) -> EngineResult<()> {
        let figures = [
            ("salary", self.salary_amount),
            ("monthly_salary", self.monthly_salary.unwrap_or_default()),
            ("piece_rate", self.piece_rate),
            ("medical_aid_tax_credit", self.medical_aid_tax_credit),
            ("fringe_benefit_amount", self.fringe_benefit_amount),
            ("allowances", self.default_allowances),
            ("medical_aid_employer", self.medical_aid_employer_contribution),
            ("medical_aid_employee", self.medical_aid_employee_contribution),
        ];

        for (field, value) in figures {
            if value.abs() > MAX_FIGURE {
                return Err(invalid(
                    field,
                    format!("must not exceed {} in magnitude, got {}", MAX_FIGURE, value),
                ));
            }
        }

        let working_time = [
            ("ordinary_hours_per_day", self.effective_hours_per_day(), MAX_HOURS_PER_DAY),
            (
                "work_days_per_month",
                self.effective_work_days_per_month(),
                MAX_WORK_DAYS_PER_MONTH,
            ),
        ];

        for (field, value, max) in working_time {
            if value < Decimal::ONE || value > max {
                return Err(invalid(
                    field,
                    format!("must be between 1 and {}, got {}", max, value),
                ));
            }
        }

        for row in &self.recurring_deductions {
            let limit = match row.amount_type {
                AmountType::Percentage => Decimal::ONE_HUNDRED,
                AmountType::Fixed | AmountType::Calculated => MAX_FIGURE,
            };
            if row.value.abs() > limit {
                return Err(invalid(
                    "recurring_deductions.value",
                    format!(
                        "'{}' must not exceed {} in magnitude, got {}",
                        row.beneficiary_name, limit, row.value
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Decodes and normalises an employee record from JSON.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotUnavailable` when the payload cannot be decoded, and
    /// `InvalidSnapshot` when the salary type is unusable.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let record: EmployeeRecord =
            serde_json::from_str(json).map_err(|e| EngineError::SnapshotUnavailable {
                message: format!("malformed employee record: {}", e),
            })?;
        Self::from_record(record)
    }

    /// Ordinary hours per day, with the default substituted for non-positive values.
    pub fn effective_hours_per_day(&self) -> Decimal {
        positive_or(Some(self.ordinary_hours_per_day), DEFAULT_ORDINARY_HOURS_PER_DAY)
    }

    /// Work days per month, with the default substituted for non-positive values.
    pub fn effective_work_days_per_month(&self) -> Decimal {
        positive_or(Some(self.work_days_per_month), DEFAULT_WORK_DAYS_PER_MONTH)
    }

    /// The monthly salary figure: `monthly_salary` when set, else `salary_amount`.
    pub fn monthly_figure(&self) -> Decimal {
        self.monthly_salary.unwrap_or(self.salary_amount)
    }

    /// The active medical-aid deduction row, if any.
    pub fn medical_aid_deduction(&self) -> Option<&DeductionRow> {
        self.recurring_deductions.iter().find(|d| d.is_medical_aid)
    }
}

fn invalid(field: &str, message: String) -> EngineError {
    EngineError::InvalidSnapshot {
        field: field.to_string(),
        message,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn positive_or(value: Option<Decimal>, default: Decimal) -> Decimal {
    value.filter(|v| v.is_sign_positive() && !v.is_zero()).unwrap_or(default)
}
