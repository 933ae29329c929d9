//! Request types for the payroll preview API.
//!
//! The employee object is the record served by the employee API, passed
//! through unchanged; it is normalised into a snapshot by the handler.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRecord, WorkedTimeEntry};

/// Request body for the `/preview` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewRequest {
    /// The employee record.
    pub employee: EmployeeRecord,
    /// The worked-time entry; a seeded entry is used when absent.
    #[serde(default)]
    pub entry: Option<WorkedTimeEntry>,
}

/// Request body for the `/rate-preview` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatePreviewRequest {
    /// The employee record.
    pub employee: EmployeeRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AmountType;
    use rust_decimal::Decimal;

    #[test]
    fn test_deserialize_preview_request() {
        let json = r#"{
            "employee": {
                "salary_type": "Hourly",
                "salary": "100",
                "uif_contributing": true
            },
            "entry": {
                "ordinary_hours": "160",
                "overtime_hours": "10",
                "ad_hoc_deductions": [
                    {"amount_type": "Percentage", "value": "5"}
                ]
            }
        }"#;

        let request: PreviewRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.employee.salary_type.as_deref(), Some("Hourly"));
        assert_eq!(request.employee.salary, Some(Decimal::new(100, 0)));
        let entry = request.entry.unwrap();
        assert_eq!(entry.ordinary_hours, Decimal::new(160, 0));
        assert_eq!(entry.sunday_hours, Decimal::ZERO);
        assert_eq!(entry.ad_hoc_deductions[0].amount_type, AmountType::Percentage);
    }

    #[test]
    fn test_entry_is_optional() {
        let json = r#"{"employee": {"salary_type": "monthly", "salary": 22000}}"#;
        let request: PreviewRequest = serde_json::from_str(json).unwrap();
        assert!(request.entry.is_none());
    }

    #[test]
    fn test_missing_employee_is_rejected() {
        let result: Result<RatePreviewRequest, _> = serde_json::from_str("{}");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field `employee`"));
    }
}
