//! Deduction row models.
//!
//! Recurring deductions arrive from the employee record with a loose vocabulary
//! (`"Fixed"` vs `"fixed"`, `deduction_type` vs `beneficiary_type`, `is_active`
//! vs `enabled`). They are normalised here into [`DeductionRow`] values so the
//! calculator never has to special-case casing or field aliases.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The type label that marks a medical-aid deduction.
pub const MEDICAL_AID_LABEL: &str = "medical aid";

/// How a deduction row's value is interpreted.
///
/// Deserialisation is case-insensitive. Unrecognised labels degrade to
/// [`AmountType::Fixed`] rather than rejecting the row.
///
/// # Example
///
/// ```
/// use payroll_preview::models::AmountType;
///
/// let amount_type: AmountType = serde_json::from_str("\"Percentage\"").unwrap();
/// assert_eq!(amount_type, AmountType::Percentage);
///
/// let fallback: AmountType = serde_json::from_str("\"sliding-scale\"").unwrap();
/// assert_eq!(fallback, AmountType::Fixed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum AmountType {
    /// A fixed currency amount.
    Fixed,
    /// A percentage of gross pay.
    Percentage,
    /// An amount resolved upstream (medical aid) and used verbatim.
    Calculated,
}

impl AmountType {
    /// Parses a server label, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for labels outside the known vocabulary.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "fixed" => Some(AmountType::Fixed),
            "percentage" => Some(AmountType::Percentage),
            "calculated" => Some(AmountType::Calculated),
            _ => None,
        }
    }
}

impl From<String> for AmountType {
    fn from(label: String) -> Self {
        AmountType::parse_label(&label).unwrap_or_else(|| {
            warn!(amount_type = %label, "Unrecognised deduction amount type, treating as fixed");
            AmountType::Fixed
        })
    }
}

/// Where a deduction row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionSource {
    /// A recurring deduction configured on the employee.
    Recurring,
    /// A row added interactively on the capture screen.
    AdHoc,
}

/// A normalised deduction row ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRow {
    /// The beneficiary receiving the deduction (display only).
    pub beneficiary_name: String,
    /// The deduction or beneficiary type label (display only).
    pub type_label: String,
    /// How `value` is interpreted.
    pub amount_type: AmountType,
    /// A currency amount or a percentage, depending on `amount_type`.
    pub value: Decimal,
    /// Whether the row is a medical-aid deduction.
    pub is_medical_aid: bool,
    /// Whether the row is recurring or was added ad hoc.
    pub source: DeductionSource,
}

impl DeductionRow {
    /// Creates a recurring deduction row.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_preview::models::{AmountType, DeductionRow};
    /// use rust_decimal::Decimal;
    ///
    /// let row = DeductionRow::recurring("Discovery", "Medical Aid", AmountType::Calculated, Decimal::new(218600, 2));
    /// assert!(row.is_medical_aid);
    /// ```
    pub fn recurring(
        beneficiary_name: impl Into<String>,
        type_label: impl Into<String>,
        amount_type: AmountType,
        value: Decimal,
    ) -> Self {
        let type_label = type_label.into();
        Self {
            beneficiary_name: beneficiary_name.into(),
            is_medical_aid: is_medical_aid_label(&type_label),
            type_label,
            amount_type,
            value,
            source: DeductionSource::Recurring,
        }
    }
}

/// Returns true when a type label denotes medical aid.
pub fn is_medical_aid_label(label: &str) -> bool {
    label.trim().eq_ignore_ascii_case(MEDICAL_AID_LABEL)
}

/// A recurring deduction as served in the employee record.
///
/// Every field is optional because the server vocabulary varies between
/// endpoints; see [`RecurringDeductionRecord::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringDeductionRecord {
    /// The beneficiary's display name.
    #[serde(default)]
    pub beneficiary_name: Option<String>,
    /// The deduction type label (employee record vocabulary).
    #[serde(default)]
    pub deduction_type: Option<String>,
    /// The beneficiary type label (deductions endpoint vocabulary).
    #[serde(default)]
    pub beneficiary_type: Option<String>,
    /// `"Fixed"`, `"Percentage"`, or `"Calculated"` in any casing.
    #[serde(default)]
    pub amount_type: Option<String>,
    /// The raw value; numbers and numeric strings are both accepted.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    /// Active flag (preferred).
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Active flag (legacy alias).
    #[serde(default)]
    pub enabled: Option<bool>,
}

impl RecurringDeductionRecord {
    /// Returns false only when the record is explicitly disabled.
    ///
    /// `is_active` takes precedence over `enabled`; a record carrying neither
    /// flag is treated as active.
    pub fn is_active(&self) -> bool {
        self.is_active.or(self.enabled).unwrap_or(true)
    }

    /// Normalises the record into a [`DeductionRow`].
    ///
    /// Returns `None` for inactive records. Malformed values degrade to zero and
    /// unknown amount types degrade to fixed; neither rejects the row.
    pub fn normalize(&self) -> Option<DeductionRow> {
        if !self.is_active() {
            return None;
        }

        let type_label = self
            .beneficiary_type
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .or(self.deduction_type.as_deref())
            .unwrap_or_default()
            .to_string();

        let amount_type = match self.amount_type.as_deref() {
            Some(label) => AmountType::from(label.to_string()),
            None => {
                warn!(
                    beneficiary = ?self.beneficiary_name,
                    "Deduction without amount type, treating as fixed"
                );
                AmountType::Fixed
            }
        };

        let value = self
            .value
            .as_ref()
            .and_then(lenient_decimal)
            .unwrap_or_else(|| {
                if self.value.as_ref().is_some_and(|v| !v.is_null()) {
                    warn!(
                        beneficiary = ?self.beneficiary_name,
                        value = ?self.value,
                        "Unreadable deduction value, treating as zero"
                    );
                }
                Decimal::ZERO
            });

        Some(DeductionRow {
            beneficiary_name: self.beneficiary_name.clone().unwrap_or_default(),
            is_medical_aid: is_medical_aid_label(&type_label),
            type_label,
            amount_type,
            value,
            source: DeductionSource::Recurring,
        })
    }
}

/// Reads a decimal from a JSON number or numeric string.
pub(crate) fn lenient_decimal(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        serde_json::Value::String(text) => {
            let text = text.trim();
            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .ok()
        }
        _ => None,
    }
}
