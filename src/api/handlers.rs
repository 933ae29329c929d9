//! HTTP request handlers for the payroll preview API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PreviewSession, build_rate_panel};
use crate::error::EngineResult;
use crate::models::{CompensationSnapshot, EmployeeRecord};

use super::request::{PreviewRequest, RatePreviewRequest};
use super::response::{ApiError, ApiErrorResponse, PreviewResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/preview", post(preview_handler))
        .route("/rate-preview", post(rate_preview_handler))
        .with_state(state)
}

/// Handler for POST /preview endpoint.
///
/// Builds a session from the employee record and returns the breakdown for the
/// given entry, or for a freshly seeded entry when none is sent.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let session = match build_session(&state, request.employee) {
        Ok(session) => session,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee record rejected"
            );
            return error_response(err.into());
        }
    };

    let entry = request.entry.unwrap_or_else(|| session.seed_entry());
    if let Err(err) = entry.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Worked-time entry rejected"
        );
        return error_response(err.into());
    }

    let start_time = Instant::now();
    let breakdown = session.calculate(&entry);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        salary_type = ?breakdown.salary_type,
        gross_pay = %breakdown.gross_pay,
        net_pay = %breakdown.net_pay,
        deduction_rows = breakdown.deduction_lines.len(),
        duration_us = duration.as_micros(),
        "Preview calculated"
    );

    json_response(StatusCode::OK, PreviewResponse::new(breakdown))
}

/// Handler for POST /rate-preview endpoint.
///
/// Returns the read-only rate panel for an employee record.
async fn rate_preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<RatePreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rate preview request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match build_session(&state, request.employee) {
        Ok(session) => {
            let panel = build_rate_panel(&session, state.config().rate_panel());
            info!(
                correlation_id = %correlation_id,
                salary_type = ?panel.salary_type,
                premium_rates = panel.premium_rates.is_some(),
                "Rate panel built"
            );
            json_response(StatusCode::OK, panel)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee record rejected"
            );
            error_response(err.into())
        }
    }
}

fn build_session(state: &AppState, employee: EmployeeRecord) -> EngineResult<PreviewSession> {
    let snapshot = CompensationSnapshot::from_record(employee)?;
    Ok(PreviewSession::with_statutory_rates(
        snapshot,
        state.config().statutory().clone(),
    ))
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::RatePanel;
    use crate::config::ConfigLoader;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/za").expect("Failed to load config");
        AppState::new(config)
    }

    async fn post_json(uri: &str, body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_preview_valid_request_returns_200() {
        let body = r#"{
            "employee": {"salary_type": "hourly", "salary": 100},
            "entry": {"ordinary_hours": "160", "overtime_hours": "10"}
        }"#;
        let response = post_json("/preview", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: PreviewResponse = body_json(response).await;
        assert_eq!(result.breakdown.gross_pay, Decimal::new(17500, 0));
        assert_eq!(result.tax_breakdown.gross_income, Decimal::new(17500, 0));
    }

    #[tokio::test]
    async fn test_preview_without_entry_uses_seeded_entry() {
        let body = r#"{"employee": {"salary_type": "hourly", "salary": 50, "allowances": 300}}"#;
        let response = post_json("/preview", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: PreviewResponse = body_json(response).await;
        // 176 seeded hours × 50 + 300 allowances
        assert_eq!(result.breakdown.ordinary_pay, Decimal::new(8800, 0));
        assert_eq!(result.breakdown.gross_pay, Decimal::new(9100, 0));
    }

    #[tokio::test]
    async fn test_preview_malformed_json_returns_400() {
        let response = post_json("/preview", "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_preview_unknown_salary_type_returns_400() {
        let body = r#"{"employee": {"salary_type": "weekly", "salary": 100}}"#;
        let response = post_json("/preview", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_EMPLOYEE");
    }

    #[tokio::test]
    async fn test_preview_negative_hours_returns_400() {
        let body = r#"{
            "employee": {"salary_type": "hourly", "salary": 100},
            "entry": {"ordinary_hours": "-4"}
        }"#;
        let response = post_json("/preview", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_ENTRY");
        assert!(error.message.contains("ordinary_hours"));
    }

    #[tokio::test]
    async fn test_rate_preview_returns_panel() {
        let body = r#"{"employee": {"salary_type": "hourly", "salary": 80, "overtime_eligible": true}}"#;
        let response = post_json("/rate-preview", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let panel: RatePanel = body_json(response).await;
        let premiums = panel.premium_rates.unwrap();
        assert_eq!(premiums.overtime_rate, Decimal::new(120, 0));
        assert_eq!(premiums.public_holiday_rate, Decimal::new(200, 0));
    }

    #[tokio::test]
    async fn test_rate_preview_missing_employee_returns_400() {
        let response = post_json("/rate-preview", "{}".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rate_preview_out_of_range_working_time_returns_400() {
        let body = r#"{"employee": {"salary_type": "daily", "salary": 1000000, "ordinary_hours_per_day": "0.0000000000000000000000000001"}}"#;
        let response = post_json("/rate-preview", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = body_json(response).await;
        assert_eq!(error.code, "INVALID_EMPLOYEE");
        assert!(error.message.contains("ordinary_hours_per_day"));
    }
}
