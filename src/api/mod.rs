//! HTTP API module for the payroll preview.
//!
//! This module provides the REST endpoints for previewing a payroll
//! breakdown and the rate panel from an employee record.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PreviewRequest, RatePreviewRequest};
pub use response::{ApiError, PreviewResponse};
pub use state::AppState;
